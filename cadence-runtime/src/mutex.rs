// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::ops::{Deref, DerefMut};

/// Shared lock around a wrapper's single mutable slot.
///
/// Cloning yields another handle to the same slot; the scheduled task and the
/// wrapper each hold one.
pub trait MutexLike<T: ?Sized>: Clone {
    type Guard<'a>: Deref<Target = T> + DerefMut
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self
    where
        T: Sized;

    fn lock(&self) -> Self::Guard<'_>;
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<T: ?Sized> MutexLike<T> for std::sync::Arc<parking_lot::Mutex<T>> {
    type Guard<'a>
        = parking_lot::MutexGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self
    where
        T: Sized,
    {
        std::sync::Arc::new(parking_lot::Mutex::new(value))
    }

    fn lock(&self) -> Self::Guard<'_> {
        self.as_ref().lock()
    }
}
