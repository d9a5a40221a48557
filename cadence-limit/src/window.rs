// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::{CadenceError, Result};
use core::time::Duration;

/// Validated length of a debounce or throttle window.
///
/// Any `Duration` converts infallibly. Numeric millisecond input, e.g. from a
/// settings file or a UI slider, goes through [`Window::from_millis`] which
/// rejects values that have no meaningful duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Window(Duration);

impl Window {
    /// Builds a window from fractional milliseconds.
    ///
    /// # Errors
    /// Returns `InvalidDuration` for NaN, infinite, negative or
    /// out-of-range input.
    ///
    /// ```
    /// use cadence_limit::Window;
    /// use std::time::Duration;
    ///
    /// assert_eq!(Window::from_millis(250.0)?.duration(), Duration::from_millis(250));
    /// assert!(Window::from_millis(-1.0).is_err());
    /// # Ok::<(), cadence_core::CadenceError>(())
    /// ```
    pub fn from_millis(millis: f64) -> Result<Self> {
        if millis.is_nan() {
            return Err(CadenceError::invalid_duration("window is NaN"));
        }
        if millis < 0.0 {
            return Err(CadenceError::invalid_duration(format!(
                "window of {millis}ms is negative"
            )));
        }
        // Scaled to whole nanoseconds directly; dividing first loses exactness
        let nanos = (millis * 1_000_000.0).round();
        if !nanos.is_finite() || nanos >= u64::MAX as f64 {
            return Err(CadenceError::invalid_duration(format!(
                "window of {millis}ms is out of range"
            )));
        }
        Ok(Self(Duration::from_nanos(nanos as u64)))
    }

    pub const fn duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for Window {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<Window> for Duration {
    fn from(window: Window) -> Self {
        window.0
    }
}

impl TryFrom<f64> for Window {
    type Error = CadenceError;

    fn try_from(millis: f64) -> Result<Self> {
        Self::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_accepts_zero_and_fractions() {
        assert_eq!(Window::from_millis(0.0).unwrap().duration(), Duration::ZERO);
        assert_eq!(
            Window::from_millis(1.5).unwrap().duration(),
            Duration::from_micros(1500)
        );
    }

    #[test]
    fn test_from_millis_rejects_nan() {
        let err = Window::from_millis(f64::NAN).unwrap_err();
        assert!(matches!(err, CadenceError::InvalidDuration { .. }));
    }

    #[test]
    fn test_from_millis_rejects_negative() {
        let err = Window::from_millis(-10.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid duration: window of -10ms is negative");
    }

    #[test]
    fn test_from_millis_rejects_infinite() {
        assert!(Window::from_millis(f64::INFINITY).is_err());
    }

    #[test]
    fn test_try_from_f64() {
        let window = Window::try_from(40.0).unwrap();
        assert_eq!(Duration::from(window), Duration::from_millis(40));
    }
}
