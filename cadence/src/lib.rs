// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Cadence
//!
//! Rate-limit repeated invocations of a callback.
//!
//! ## Overview
//!
//! | factory                   | fires                              | arguments        |
//! |---------------------------|------------------------------------|------------------|
//! | [`debounce`]              | once, `duration` after a burst     | none             |
//! | [`debounce_with_args`]    | once, `duration` after a burst     | last call's      |
//! | [`throttle_by_timer`]     | `duration` after opening a window  | opening call's   |
//! | [`throttle_by_timestamp`] | immediately, once per window       | accepted call's  |
//!
//! The deferred wrappers schedule a task on the async runtime that was current
//! when they were built; dropping a wrapper cancels whatever it has pending.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cadence::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> cadence::Result<()> {
//!     let autosave = debounce(|| println!("saved"), Duration::from_millis(500))?;
//!     let on_scroll = throttle_by_timestamp(
//!         |offset: f64| println!("scrolled to {offset}"),
//!         Window::from_millis(16.0)?,
//!     );
//!
//!     autosave.call();
//!     on_scroll.call(120.0);
//!     Ok(())
//! }
//! ```

pub use cadence_core::{CadenceError, CancellationToken, Result};
pub use cadence_limit::{
    debounce, debounce_with_args, throttle_by_timer, throttle_by_timestamp, Debounced,
    DebouncedWithArgs, DefaultRuntime, TimerThrottled, TimestampThrottled, Window,
};

/// Runtime abstraction, for wrappers on a non-default runtime.
pub mod runtime {
    pub use cadence_runtime::runtime::Runtime;
    pub use cadence_runtime::timer::Timer;

    #[cfg(feature = "runtime-smol")]
    pub use cadence_runtime::impls::smol::SmolRuntime;
    #[cfg(feature = "runtime-tokio")]
    pub use cadence_runtime::impls::tokio::TokioRuntime;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        debounce, debounce_with_args, throttle_by_timer, throttle_by_timestamp, Debounced,
        DebouncedWithArgs, TimerThrottled, TimestampThrottled, Window,
    };
}
