// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction used by cadence rate limiters.
//!
//! - **`Timer`** - sleep futures and a monotonic clock
//! - **`Spawner`** - detached spawning on a runtime captured up front
//! - **`MutexLike`** - lock around a wrapper's slot
//! - **`Runtime`** - bundles the three for one async runtime
//!
//! Enable `runtime-tokio` (default) or `runtime-smol`.

pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod spawner;
pub mod task;
pub mod timer;
