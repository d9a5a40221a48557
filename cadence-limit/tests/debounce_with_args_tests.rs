// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_limit::debounce_with_args;
use cadence_test_utils::{at, ms, CallRecorder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_debounce_with_args_forwards_last_call() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let recorder = CallRecorder::new();
    let debounced = debounce_with_args(recorder.callback(), ms(100))?;

    // Act
    debounced.call(1);
    at(start, 40).await;
    debounced.call(2);
    at(start, 400).await;

    // Assert
    assert_eq!(recorder.args(), vec![2]);
    assert_eq!(recorder.fired_at_ms(start), vec![140]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_with_args_one_fire_per_burst() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let recorder = CallRecorder::new();
    let debounced = debounce_with_args(recorder.callback(), ms(100))?;

    // Act
    debounced.call("a");
    at(start, 10).await;
    debounced.call("ab");
    at(start, 300).await;
    debounced.call("x");
    at(start, 350).await;
    debounced.call("xy");
    at(start, 360).await;
    debounced.call("xyz");
    at(start, 1_000).await;

    // Assert
    assert_eq!(recorder.args(), vec!["ab", "xyz"]);
    assert_eq!(recorder.fired_at_ms(start), vec![110, 460]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_with_args_tuple_arguments() -> anyhow::Result<()> {
    let start = Instant::now();
    let recorder = CallRecorder::new();
    let debounced = debounce_with_args(recorder.callback(), ms(50))?;

    debounced.call((1, "one".to_string()));
    debounced.call((2, "two".to_string()));
    at(start, 100).await;

    assert_eq!(recorder.args(), vec![(2, "two".to_string())]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_with_args_drops_replaced_arguments() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let live = Arc::new(AtomicUsize::new(0));
    let recorder = CallRecorder::new();
    let callback = recorder.callback();
    let debounced = debounce_with_args(move |token: Tracked| callback(token.id), ms(100))?;

    // Act
    debounced.call(Tracked::new(1, &live));
    debounced.call(Tracked::new(2, &live));
    debounced.call(Tracked::new(3, &live));

    // Assert
    assert_eq!(live.load(Ordering::SeqCst), 1);

    at(start, 200).await;
    assert_eq!(recorder.args(), vec![3]);
    assert_eq!(live.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_with_args_flush_forwards_pending_arguments() -> anyhow::Result<()> {
    let start = Instant::now();
    let recorder = CallRecorder::new();
    let debounced = debounce_with_args(recorder.callback(), ms(100))?;

    debounced.call(5);
    debounced.call(6);
    assert!(debounced.flush());
    at(start, 300).await;

    assert_eq!(recorder.args(), vec![6]);
    assert_eq!(recorder.fired_at_ms(start), vec![0]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_debounce_with_args_callback_may_call_back_in() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let recorder = CallRecorder::new();
    let record = recorder.callback();
    let slot: Arc<std::sync::OnceLock<cadence_limit::DebouncedWithArgs<u32>>> =
        Arc::new(std::sync::OnceLock::new());
    let inner = slot.clone();
    let debounced = debounce_with_args(
        move |n: u32| {
            record(n);
            if n < 3 {
                if let Some(debounced) = inner.get() {
                    debounced.call(n + 1);
                }
            }
        },
        ms(100),
    )?;
    slot.set(debounced)
        .map_err(|_| anyhow::anyhow!("slot already set"))?;

    // Act
    if let Some(debounced) = slot.get() {
        debounced.call(1);
    }
    at(start, 1_000).await;

    // Assert
    assert_eq!(recorder.args(), vec![1, 2, 3]);
    assert_eq!(recorder.fired_at_ms(start), vec![100, 200, 300]);

    Ok(())
}

struct Tracked {
    id: u32,
    live: Arc<AtomicUsize>,
}

impl Tracked {
    fn new(id: u32, live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self {
            id,
            live: live.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
