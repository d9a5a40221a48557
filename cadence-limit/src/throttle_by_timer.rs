// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::window::Window;
use crate::DefaultRuntime;
use cadence_core::{debug, trace, Result};
use cadence_runtime::mutex::MutexLike;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::task::{sleep_until_or_cancelled, CadenceTask};
use cadence_runtime::timer::Timer;
use core::fmt;
use core::time::Duration;
use std::sync::Arc;

/// Throttle gated by a running timer.
///
/// A [`call`](Self::call) made while the gate is closed opens it and schedules
/// the callback `duration` later with that call's arguments. Calls made while
/// the gate is open are dropped without a trace. The gate closes once the
/// callback has returned.
///
/// The callback thus runs at most once per window, always `duration` after
/// the call that opened the window, with the arguments of that call.
///
/// # Example
///
/// ```rust
/// use cadence_limit::throttle_by_timer;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> cadence_core::Result<()> {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let scroll = throttle_by_timer(
///     move |offset: u32| sink.lock().unwrap().push(offset),
///     Duration::from_millis(100),
/// )?;
///
/// scroll.call(10);
/// scroll.call(20); // dropped, the window is already open
///
/// tokio::time::sleep(Duration::from_millis(150)).await;
/// assert_eq!(*seen.lock().unwrap(), vec![10]);
/// # Ok(())
/// # }
/// ```
pub struct TimerThrottled<A, R = DefaultRuntime>
where
    A: Send + 'static,
    R: Runtime,
{
    callback: Arc<dyn Fn(A) + Send + Sync>,
    gate: R::Mutex<Gate>,
    timer: R::Timer,
    spawner: R::Spawner,
    duration: Duration,
}

struct Gate {
    generation: u64,
    // `Some` while the gate is open
    open: Option<Opened>,
}

struct Opened {
    generation: u64,
    _task: CadenceTask,
}

impl<A, R> TimerThrottled<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    /// Builds the wrapper on runtime `R`.
    ///
    /// # Errors
    /// Returns `RuntimeUnavailable` if `R` cannot spawn tasks from here.
    pub fn new<F>(callback: F, duration: impl Into<Window>) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let spawner = R::spawner()?;
        let duration = duration.into().duration();
        debug!("timer throttle created with a {:?} window", duration);

        Ok(Self {
            callback: Arc::new(callback),
            gate: MutexLike::new(Gate {
                generation: 0,
                open: None,
            }),
            timer: R::Timer::default(),
            spawner,
            duration,
        })
    }

    /// Opens a window carrying `args`, or drops the call if one is open.
    pub fn call(&self, args: A) {
        let mut gate = self.gate.lock();
        if gate.open.is_some() {
            trace!("timer throttle window open, call dropped");
            return;
        }

        gate.generation = gate.generation.wrapping_add(1);
        let generation = gate.generation;
        let deadline = self.timer.deadline_after(self.duration);

        let timer = self.timer.clone();
        let fired_gate = self.gate.clone();
        let callback = Arc::clone(&self.callback);
        let task = CadenceTask::spawn(&self.spawner, move |cancel| async move {
            if !sleep_until_or_cancelled(&timer, deadline, &cancel).await {
                return;
            }
            if !is_current(&fired_gate, generation) {
                return;
            }
            // Closes the gate after the callback, even if it unwinds
            let _release = Release {
                gate: &fired_gate,
                generation,
            };
            trace!("timer throttle window elapsed, firing generation {}", generation);
            callback(args);
        });

        gate.open = Some(Opened {
            generation,
            _task: task,
        });
    }

    /// Drops the scheduled invocation and closes the gate.
    pub fn cancel(&self) {
        let opened = self.gate.lock().open.take();
        if opened.is_some() {
            debug!("timer throttle cancelled with an open window");
        }
    }

    /// Whether a window is open, i.e. calls are currently being dropped.
    pub fn is_pending(&self) -> bool {
        self.gate.lock().open.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

fn is_current<M: MutexLike<Gate>>(gate: &M, generation: u64) -> bool {
    gate.lock()
        .open
        .as_ref()
        .is_some_and(|opened| opened.generation == generation)
}

struct Release<'a, M: MutexLike<Gate>> {
    gate: &'a M,
    generation: u64,
}

impl<M: MutexLike<Gate>> Drop for Release<'_, M> {
    fn drop(&mut self) {
        let mut gate = self.gate.lock();
        let is_current = gate
            .open
            .as_ref()
            .is_some_and(|opened| opened.generation == self.generation);
        if is_current {
            gate.open = None;
        }
    }
}

impl<A, R> Drop for TimerThrottled<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<A, R> fmt::Debug for TimerThrottled<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerThrottled")
            .field("duration", &self.duration)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}
