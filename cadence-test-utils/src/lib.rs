// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the cadence workspace.
//!
//! Tests run on a paused Tokio clock (`#[tokio::test(start_paused = true)]`)
//! so every offset is exact:
//!
//! ```rust
//! use cadence_test_utils::{at, CallRecorder};
//! use tokio::time::Instant;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let start = Instant::now();
//! let recorder = CallRecorder::<u32>::new();
//! let callback = recorder.callback();
//!
//! at(start, 40).await;
//! callback(7);
//!
//! assert_eq!(recorder.args(), vec![7]);
//! assert_eq!(recorder.fired_at_ms(start), vec![40]);
//! # }
//! ```

#![allow(clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;

pub use helpers::{at, ms};
pub use recorder::{CallRecorder, RecordedCall};
