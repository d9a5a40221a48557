// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;

/// Detached task spawning on a captured runtime.
///
/// A spawner is obtained once, when a wrapper is built, so later calls can
/// schedule work from any thread without an ambient runtime context.
pub trait Spawner: Clone + Send + Sync + Debug + 'static {
    /// Spawn `future` in the background, discarding its join handle.
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
