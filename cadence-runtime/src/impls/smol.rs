// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::runtime::Runtime;
use crate::spawner::Spawner;
use crate::timer::{Timer, FAR_FUTURE};
use cadence_core::Result;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SmolRuntime;

impl Runtime for SmolRuntime {
    type Mutex<T: Send + 'static> = Arc<parking_lot::Mutex<T>>;
    type Timer = SmolTimer;
    type Spawner = SmolSpawner;
    type Instant = Instant;

    fn spawner() -> Result<Self::Spawner> {
        // smol's global executor is always available
        Ok(SmolSpawner)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

/// Wrapper for async-io Timer to implement `Future<Output = ()>`
#[derive(Debug)]
pub struct SmolSleep {
    timer: async_io::Timer,
}

impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep {
            timer: async_io::Timer::after(duration),
        }
    }

    fn sleep_until_future(&self, deadline: Self::Instant) -> Self::Sleep {
        SmolSleep {
            timer: async_io::Timer::at(deadline),
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn deadline_after(&self, duration: Duration) -> Self::Instant {
        let now = self.now();
        now.checked_add(duration)
            .unwrap_or_else(|| now + FAR_FUTURE)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmolSpawner;

impl Spawner for SmolSpawner {
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        smol::spawn(future).detach();
    }
}
