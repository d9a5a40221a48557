// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall<A> {
    pub args: A,
    pub at: Instant,
}

/// Records every invocation of the callbacks it hands out.
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<RecordedCall<A>>>>,
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<A: Clone + Send + 'static> CallRecorder<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends its arguments and the current instant.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |args| {
            calls.lock().push(RecordedCall {
                args,
                at: Instant::now(),
            });
        }
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall<A>> {
        self.calls.lock().clone()
    }

    pub fn args(&self) -> Vec<A> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    /// Milliseconds from `start` to each recorded call, truncated.
    pub fn fired_at_ms(&self, start: Instant) -> Vec<u128> {
        self.calls
            .lock()
            .iter()
            .map(|call| (call.at - start).as_millis())
            .collect()
    }
}

impl CallRecorder<()> {
    /// A zero-argument callback for `debounce`.
    pub fn unit_callback(&self) -> impl Fn() + Send + Sync + 'static {
        let callback = self.callback();
        move || callback(())
    }
}
