// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Sleeps until `offset_ms` after `start`.
///
/// On a paused clock every task due at or before that instant has run by the
/// time this returns.
pub async fn at(start: Instant, offset_ms: u64) {
    sleep_until(start + ms(offset_ms)).await;
}
