// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::runtime::Runtime;
use crate::spawner::Spawner;
use crate::timer::{Timer, FAR_FUTURE};
use cadence_core::{CadenceError, Result};
use core::future::Future;
use std::{sync::Arc, time::Duration};
use tokio::runtime::Handle;

#[derive(Debug)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Mutex<T: Send + 'static> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
    type Spawner = TokioSpawner;
    type Instant = tokio::time::Instant;

    fn spawner() -> Result<Self::Spawner> {
        Handle::try_current()
            .map(|handle| TokioSpawner { handle })
            .map_err(|err| CadenceError::runtime_unavailable(err.to_string()))
    }
}

/// Timer backed by `tokio::time`.
///
/// `now()` reads `tokio::time::Instant`, so a paused test clock is honoured
/// by timestamp-based throttling as well as by sleeps.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn sleep_until_future(&self, deadline: Self::Instant) -> Self::Sleep {
        tokio::time::sleep_until(deadline)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn deadline_after(&self, duration: Duration) -> Self::Instant {
        let now = self.now();
        now.checked_add(duration)
            .unwrap_or_else(|| now + FAR_FUTURE)
    }
}

/// Spawns onto the Tokio runtime that was current when it was captured.
#[derive(Clone, Debug)]
pub struct TokioSpawner {
    handle: Handle,
}

impl Spawner for TokioSpawner {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(self.handle.spawn(future));
    }
}
