// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::window::Window;
use crate::DefaultRuntime;
use cadence_core::{debug, trace};
use cadence_runtime::mutex::MutexLike;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;

/// Leading-edge throttle gated by the time of the last accepted call.
///
/// A [`call`](Self::call) runs the callback synchronously when at least
/// `duration` has elapsed since the last accepted call (or no call was ever
/// accepted), and records the current instant. Any other call is dropped.
///
/// Nothing is scheduled, so this wrapper does not need a spawner and can be
/// built outside an async runtime.
///
/// # Example
///
/// ```rust
/// use cadence_limit::throttle_by_timestamp;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let resize = throttle_by_timestamp(
///     move |(w, h): (u32, u32)| sink.lock().unwrap().push(w * h),
///     Duration::from_secs(60),
/// );
///
/// resize.call((2, 3)); // accepted immediately
/// resize.call((4, 5)); // inside the window, dropped
///
/// assert_eq!(*seen.lock().unwrap(), vec![6]);
/// ```
pub struct TimestampThrottled<A, R = DefaultRuntime>
where
    R: Runtime,
{
    callback: Box<dyn Fn(A) + Send + Sync>,
    last_run: R::Mutex<Option<R::Instant>>,
    timer: R::Timer,
    duration: Duration,
    _args: PhantomData<fn(A)>,
}

impl<A, R: Runtime> TimestampThrottled<A, R> {
    pub fn new<F>(callback: F, duration: impl Into<Window>) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let duration = duration.into().duration();
        debug!("timestamp throttle created with a {:?} window", duration);

        Self {
            callback: Box::new(callback),
            last_run: MutexLike::new(None),
            timer: R::Timer::default(),
            duration,
            _args: PhantomData,
        }
    }

    /// Runs the callback now if the window has elapsed, else drops the call.
    pub fn call(&self, args: A) {
        let now = self.timer.now();
        {
            let mut last_run = self.last_run.lock();
            let accepted = match *last_run {
                None => true,
                Some(last) => now - last >= self.duration,
            };
            if !accepted {
                trace!("timestamp throttle window open, call dropped");
                return;
            }
            *last_run = Some(now);
        }

        // Outside the lock, so the callback may call back into this wrapper
        (self.callback)(args);
    }

    /// Forgets the last accepted call; the next call is accepted.
    pub fn reset(&self) {
        *self.last_run.lock() = None;
    }

    /// Instant of the last accepted call, if any.
    pub fn last_run(&self) -> Option<R::Instant> {
        *self.last_run.lock()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<A, R: Runtime> fmt::Debug for TimestampThrottled<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampThrottled")
            .field("duration", &self.duration)
            .field("last_run", &self.last_run())
            .finish_non_exhaustive()
    }
}
