// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use cadence_core::CadenceError;
use cadence_runtime::impls::tokio::{TokioRuntime, TokioTimer};
use cadence_runtime::mutex::MutexLike;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::task::{sleep_until_or_cancelled, CadenceTask};
use cadence_runtime::timer::{Timer, FAR_FUTURE};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};

#[test]
fn test_spawner_unavailable_outside_runtime() {
    let result = TokioRuntime::spawner();

    assert!(matches!(
        result,
        Err(CadenceError::RuntimeUnavailable { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_timer_now_follows_paused_clock() {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    sleep(Duration::from_millis(250)).await;

    // Assert
    assert_eq!(timer.now() - start, Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_until_past_deadline_completes_immediately() {
    let timer = TokioTimer;
    let before = timer.now();

    timer
        .sleep_until_future(before - Duration::from_millis(5))
        .await;

    assert_eq!(timer.now(), before);
}

#[tokio::test(start_paused = true)]
async fn test_deadline_after_clamps_overflowing_duration() {
    let timer = TokioTimer;
    let now = timer.now();

    assert_eq!(timer.deadline_after(Duration::from_millis(5)) - now, Duration::from_millis(5));
    assert_eq!(timer.deadline_after(Duration::MAX) - now, FAR_FUTURE);
}

#[tokio::test(start_paused = true)]
async fn test_task_runs_to_deadline_when_not_cancelled() -> anyhow::Result<()> {
    // Arrange
    let spawner = TokioRuntime::spawner()?;
    let fired = Arc::new(AtomicBool::new(false));
    let start = Instant::now();
    let deadline = start + Duration::from_millis(100);

    // Act
    let fired_clone = fired.clone();
    let _task = CadenceTask::spawn(&spawner, move |cancel| async move {
        if sleep_until_or_cancelled(&TokioTimer, deadline, &cancel).await {
            fired_clone.store(true, Ordering::SeqCst);
        }
    });

    // Assert
    sleep(Duration::from_millis(99)).await;
    assert!(!fired.load(Ordering::SeqCst));

    sleep(Duration::from_millis(2)).await;
    assert!(fired.load(Ordering::SeqCst));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_task_cancels_sleep() -> anyhow::Result<()> {
    // Arrange
    let spawner = TokioRuntime::spawner()?;
    let fired = Arc::new(AtomicBool::new(false));
    let exited = Arc::new(AtomicBool::new(false));
    let deadline = Instant::now() + Duration::from_millis(100);

    let fired_clone = fired.clone();
    let exited_clone = exited.clone();
    let task = CadenceTask::spawn(&spawner, move |cancel| async move {
        if sleep_until_or_cancelled(&TokioTimer, deadline, &cancel).await {
            fired_clone.store(true, Ordering::SeqCst);
        }
        exited_clone.store(true, Ordering::SeqCst);
    });

    // Act
    sleep(Duration::from_millis(10)).await;
    assert!(!task.is_cancelled());
    drop(task);
    sleep(Duration::from_millis(1)).await;

    // Assert
    assert!(exited.load(Ordering::SeqCst));
    assert!(!fired.load(Ordering::SeqCst));

    Ok(())
}

#[test]
fn test_mutex_clones_share_slot() {
    let slot: <TokioRuntime as Runtime>::Mutex<Option<u32>> = MutexLike::new(None);
    let other = slot.clone();

    *other.lock() = Some(7);

    assert_eq!(*slot.lock(), Some(7));
}
