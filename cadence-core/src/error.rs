// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::doc_markdown)]
//! Error types for cadence rate limiters
//!
//! Every wrapper validates its inputs when it is built, so all failures surface
//! at wrap time through [`CadenceError`]. Calling a wrapper is infallible.
//!
//! # Examples
//!
//! ```
//! use cadence_core::{CadenceError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(CadenceError::invalid_duration("-5ms is negative"))
//! }
//!
//! assert!(build().is_err());
//! ```

/// Root error type for all cadence operations
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    /// The requested window cannot be represented as a `Duration`
    ///
    /// Raised for negative, NaN or infinite millisecond values.
    #[error("Invalid duration: {context}")]
    InvalidDuration {
        /// Description of the rejected input
        context: String,
    },

    /// No async runtime is available to schedule delayed invocations
    ///
    /// Deferred wrappers capture the ambient runtime when they are built.
    /// Building one outside a runtime fails eagerly instead of panicking
    /// later inside `call()`.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Why the runtime could not be captured
        context: String,
    },
}

impl CadenceError {
    /// Create an invalid duration error with the given context
    pub fn invalid_duration(context: impl Into<String>) -> Self {
        Self::InvalidDuration {
            context: context.into(),
        }
    }

    /// Create a runtime unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }
}

/// Specialized Result type for cadence operations
///
/// ```
/// use cadence_core::Result;
///
/// fn window() -> Result<u64> {
///     Ok(250)
/// }
/// ```
pub type Result<T> = std::result::Result<T, CadenceError>;
