// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::prelude::*;
use cadence_test_utils::{at, ms, CallRecorder};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_prelude_exposes_all_four_wrappers() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let debounced_calls = CallRecorder::<()>::new();
    let with_args_calls = CallRecorder::new();
    let timer_calls = CallRecorder::new();
    let timestamp_calls = CallRecorder::new();

    let debounced = debounce(debounced_calls.unit_callback(), ms(100))?;
    let with_args = debounce_with_args(with_args_calls.callback(), ms(100))?;
    let by_timer = throttle_by_timer(timer_calls.callback(), ms(100))?;
    let by_timestamp = throttle_by_timestamp(timestamp_calls.callback(), ms(100));

    // Act
    for offset in [0, 10, 50] {
        at(start, offset).await;
        debounced.call();
        with_args.call(offset);
        by_timer.call(offset);
        by_timestamp.call(offset);
    }
    at(start, 400).await;

    // Assert
    assert_eq!(debounced_calls.fired_at_ms(start), vec![150]);
    assert_eq!(with_args_calls.args(), vec![50]);
    assert_eq!(timer_calls.args(), vec![0]);
    assert_eq!(timer_calls.fired_at_ms(start), vec![100]);
    assert_eq!(timestamp_calls.args(), vec![0]);
    assert_eq!(timestamp_calls.fired_at_ms(start), vec![0]);

    Ok(())
}

#[test]
fn test_invalid_window_is_rejected() {
    let err = Window::from_millis(f64::NAN).unwrap_err();

    assert!(matches!(err, cadence::CadenceError::InvalidDuration { .. }));
}
