// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, spawner::Spawner, timer::Timer};
use cadence_core::Result;
use core::cmp::Ord;
use core::default::Default;
use core::fmt::Debug;
use core::marker::{Copy, Send, Sync};
use core::ops::{Add, Sub};
use core::time::Duration;

pub trait Runtime: 'static {
    type Mutex<T: Send + 'static>: MutexLike<T> + Send + Sync + 'static;
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Spawner: Spawner;
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Debug
        + 'static
        + Add<Duration, Output = Self::Instant>
        + Sub<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Captures a spawner for the runtime the caller is running on.
    ///
    /// # Errors
    /// Returns [`cadence_core::CadenceError::RuntimeUnavailable`] when no
    /// runtime of this kind can accept tasks from the current context.
    fn spawner() -> Result<Self::Spawner>;
}
