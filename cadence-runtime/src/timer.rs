// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::clone::Clone;
use core::cmp::Ord;
use core::fmt::Debug;
use core::future::Future;
use core::marker::{Copy, Send, Sync};
use core::ops::{Add, Sub};
use core::time::Duration;

pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + 'static
        + Add<Duration, Output = Self::Instant>
        + Sub<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Creates a future that sleeps for the specified duration.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Creates a future that completes at `deadline`, immediately if it already passed.
    fn sleep_until_future(&self, deadline: Self::Instant) -> Self::Sleep {
        let now = self.now();
        let remaining = if deadline > now {
            deadline - now
        } else {
            Duration::ZERO
        };
        self.sleep_future(remaining)
    }

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Instant `duration` from now, clamped to [`FAR_FUTURE`] past now when
    /// the clock cannot represent it.
    fn deadline_after(&self, duration: Duration) -> Self::Instant;
}

/// Stand-in for "never" when a deadline overflows the clock. Roughly 30 years.
pub const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);
