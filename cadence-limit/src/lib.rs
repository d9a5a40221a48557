// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers around callbacks.
//!
//! # Overview
//!
//! - **[`debounce`]** - zero-argument trailing debounce
//! - **[`debounce_with_args`]** - trailing debounce forwarding the last call's arguments
//! - **[`throttle_by_timer`]** - at most one delayed call per window, arguments of the opening call
//! - **[`throttle_by_timestamp`]** - at most one immediate call per window, leading edge
//!
//! Wrappers that defer the callback (the first three) capture the current
//! async runtime when built and fail with `RuntimeUnavailable` outside one.
//! They cancel any pending invocation when dropped, or on [`Debounced::cancel`]
//! and friends.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioRuntime`
//! - `runtime-smol` - `SmolRuntime`
//!
//! Each wrapper type is generic over `cadence_runtime::runtime::Runtime`; the
//! free functions use [`DefaultRuntime`].
//!
//! # Example
//!
//! ```rust
//! use cadence_limit::debounce_with_args;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> cadence_core::Result<()> {
//! let queries = Arc::new(Mutex::new(Vec::new()));
//! let sink = queries.clone();
//! let search = debounce_with_args(
//!     move |query: String| sink.lock().unwrap().push(query),
//!     Duration::from_millis(300),
//! )?;
//!
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string());
//!
//! tokio::time::sleep(Duration::from_millis(350)).await;
//! assert_eq!(*queries.lock().unwrap(), vec!["rust".to_string()]);
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("enable one of the `runtime-tokio` or `runtime-smol` features");

mod debounce;
mod debounce_with_args;
mod throttle_by_timer;
mod throttle_by_timestamp;
mod window;

pub use debounce::Debounced;
pub use debounce_with_args::DebouncedWithArgs;
pub use throttle_by_timer::TimerThrottled;
pub use throttle_by_timestamp::TimestampThrottled;
pub use window::Window;

use cadence_core::Result;

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = cadence_runtime::impls::tokio::TokioRuntime;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = cadence_runtime::impls::smol::SmolRuntime;

/// Debounces a zero-argument callback on the default runtime.
///
/// # Errors
/// Returns `RuntimeUnavailable` when called outside the default runtime.
pub fn debounce<F>(callback: F, duration: impl Into<Window>) -> Result<Debounced>
where
    F: Fn() + Send + Sync + 'static,
{
    Debounced::<DefaultRuntime>::new(callback, duration)
}

/// Debounces a callback, forwarding the arguments of the last call of each burst.
///
/// # Errors
/// Returns `RuntimeUnavailable` when called outside the default runtime.
pub fn debounce_with_args<A, F>(
    callback: F,
    duration: impl Into<Window>,
) -> Result<DebouncedWithArgs<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    DebouncedWithArgs::<A, DefaultRuntime>::new(callback, duration)
}

/// Throttles a callback with a timer gate: one delayed call per window.
///
/// # Errors
/// Returns `RuntimeUnavailable` when called outside the default runtime.
pub fn throttle_by_timer<A, F>(callback: F, duration: impl Into<Window>) -> Result<TimerThrottled<A>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    TimerThrottled::<A, DefaultRuntime>::new(callback, duration)
}

/// Throttles a callback by timestamp: one immediate call per window.
pub fn throttle_by_timestamp<A, F>(callback: F, duration: impl Into<Window>) -> TimestampThrottled<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    TimestampThrottled::<A, DefaultRuntime>::new(callback, duration)
}
