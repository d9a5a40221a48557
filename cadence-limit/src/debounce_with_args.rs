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

/// Trailing debounce that forwards the arguments of the last call.
///
/// Each [`call`](Self::call) cancels the invocation scheduled by the previous
/// call and schedules a new one `duration` later carrying the new arguments.
/// The callback therefore runs once per burst of calls, `duration` after the
/// last call of the burst, with that call's arguments. Arguments of replaced
/// calls are dropped.
///
/// Multiple arguments are passed as a tuple.
///
/// Dropping the wrapper cancels any pending invocation.
pub struct DebouncedWithArgs<A, R = DefaultRuntime>
where
    A: Send + 'static,
    R: Runtime,
{
    callback: Arc<dyn Fn(A) + Send + Sync>,
    slot: R::Mutex<Slot<A>>,
    timer: R::Timer,
    spawner: R::Spawner,
    duration: Duration,
}

struct Slot<A> {
    generation: u64,
    pending: Option<Pending<A>>,
}

struct Pending<A> {
    generation: u64,
    args: A,
    // Dropping the handle wakes the sleeping task so it exits early
    _task: CadenceTask,
}

impl<A, R> DebouncedWithArgs<A, R>
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
        debug!("debounce created with a {:?} window", duration);

        Ok(Self {
            callback: Arc::new(callback),
            slot: MutexLike::new(Slot {
                generation: 0,
                pending: None,
            }),
            timer: R::Timer::default(),
            spawner,
            duration,
        })
    }

    /// Replaces the pending invocation with one carrying `args`.
    pub fn call(&self, args: A) {
        let deadline = self.timer.deadline_after(self.duration);
        let mut slot = self.slot.lock();
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;

        let timer = self.timer.clone();
        let fired_slot = self.slot.clone();
        let callback = Arc::clone(&self.callback);
        let task = CadenceTask::spawn(&self.spawner, move |cancel| async move {
            if !sleep_until_or_cancelled(&timer, deadline, &cancel).await {
                return;
            }
            // A reset may have raced with the deadline; only the current
            // generation is allowed to fire
            let pending = take_if_current(&fired_slot, generation);
            if let Some(pending) = pending {
                trace!("debounce window elapsed, firing generation {}", generation);
                callback(pending.args);
            }
        });

        let replaced = slot.pending.replace(Pending {
            generation,
            args,
            _task: task,
        });
        drop(slot);

        if replaced.is_some() {
            trace!("debounce reset, generation {} replaces the pending call", generation);
        }
    }

    /// Drops the pending invocation, if any, without running the callback.
    pub fn cancel(&self) {
        let pending = self.slot.lock().pending.take();
        if pending.is_some() {
            debug!("debounce cancelled with a call pending");
        }
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().pending.is_some()
    }

    /// Runs the pending invocation now instead of at its deadline.
    ///
    /// Returns `false` when nothing was pending.
    pub fn flush(&self) -> bool {
        let pending = self.slot.lock().pending.take();
        match pending {
            Some(pending) => {
                trace!("debounce flushed generation {}", pending.generation);
                (self.callback)(pending.args);
                true
            }
            None => false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

fn take_if_current<A, M>(slot: &M, generation: u64) -> Option<Pending<A>>
where
    M: MutexLike<Slot<A>>,
{
    let mut slot = slot.lock();
    let is_current = slot
        .pending
        .as_ref()
        .is_some_and(|pending| pending.generation == generation);
    if is_current {
        slot.pending.take()
    } else {
        None
    }
}

impl<A, R> Drop for DebouncedWithArgs<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn drop(&mut self) {
        // The scheduled task keeps the slot alive; clear it so the task exits
        self.cancel();
    }
}

impl<A, R> fmt::Debug for DebouncedWithArgs<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedWithArgs")
            .field("duration", &self.duration)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}
