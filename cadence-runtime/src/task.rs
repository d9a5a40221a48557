// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Spawned background work with cooperative cancellation.

use crate::spawner::Spawner;
use crate::timer::Timer;
use cadence_core::CancellationToken;
use core::future::Future;
use core::pin::pin;
use futures::future::{select, Either};

/// Handle to a spawned task, cancelled automatically on drop.
///
/// The spawned future receives a `CancellationToken` which is signalled when
/// the handle is cancelled or dropped. Dropping the handle does not abort the
/// future; the future is expected to observe the token.
///
/// # Example
///
/// ```rust
/// use cadence_runtime::impls::tokio::TokioRuntime;
/// use cadence_runtime::runtime::Runtime;
/// use cadence_runtime::task::CadenceTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let spawner = TokioRuntime::spawner().unwrap();
/// let task = CadenceTask::spawn(&spawner, |cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// // Wakes the spawned future, which then completes
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct CadenceTask {
    cancel: CancellationToken,
}

impl CadenceTask {
    /// Spawn `f(token)` on `spawner`.
    pub fn spawn<S, F, Fut>(spawner: &S, f: F) -> Self
    where
        S: Spawner,
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        spawner.spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal the task to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for CadenceTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Sleeps until `deadline` unless `cancel` fires first.
///
/// Returns `true` when the deadline was reached, `false` when cancelled.
pub async fn sleep_until_or_cancelled<TM: Timer>(
    timer: &TM,
    deadline: TM::Instant,
    cancel: &CancellationToken,
) -> bool {
    let sleep = pin!(timer.sleep_until_future(deadline));
    let cancelled = pin!(cancel.cancelled());

    match select(sleep, cancelled).await {
        Either::Left(((), _)) => true,
        Either::Right(((), _)) => false,
    }
}
