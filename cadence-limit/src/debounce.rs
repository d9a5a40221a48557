// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::debounce_with_args::DebouncedWithArgs;
use crate::window::Window;
use crate::DefaultRuntime;
use cadence_core::Result;
use cadence_runtime::runtime::Runtime;
use core::fmt;
use core::time::Duration;

/// Trailing debounce of a zero-argument callback.
///
/// The callback fires once per burst of [`call`](Self::call)s, `duration`
/// after the last call of the burst. A single call with no follow-up fires
/// exactly once.
///
/// # Example
///
/// ```rust
/// use cadence_limit::debounce;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> cadence_core::Result<()> {
/// let saves = Arc::new(AtomicUsize::new(0));
/// let counter = saves.clone();
/// let save = debounce(
///     move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     },
///     Duration::from_millis(200),
/// )?;
///
/// save.call();
/// save.call();
/// save.call();
///
/// tokio::time::sleep(Duration::from_millis(250)).await;
/// assert_eq!(saves.load(Ordering::SeqCst), 1);
/// # Ok(())
/// # }
/// ```
pub struct Debounced<R: Runtime = DefaultRuntime> {
    inner: DebouncedWithArgs<(), R>,
}

impl<R: Runtime> Debounced<R> {
    /// Builds the wrapper on runtime `R`.
    ///
    /// # Errors
    /// Returns `RuntimeUnavailable` if `R` cannot spawn tasks from here.
    pub fn new<F>(callback: F, duration: impl Into<Window>) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Ok(Self {
            inner: DebouncedWithArgs::new(move |()| callback(), duration)?,
        })
    }

    /// Restarts the quiet period.
    pub fn call(&self) {
        self.inner.call(());
    }

    /// Drops the pending invocation without running the callback.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    /// Runs the pending invocation now. Returns `false` when nothing was pending.
    pub fn flush(&self) -> bool {
        self.inner.flush()
    }

    pub fn duration(&self) -> Duration {
        self.inner.duration()
    }
}

impl<R: Runtime> fmt::Debug for Debounced<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("duration", &self.duration())
            .field("pending", &self.is_pending())
            .finish()
    }
}
