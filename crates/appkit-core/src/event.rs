//! Values that can be taken exactly once.
//!
//! Used for transient notifications (a toast, a navigation request) that an
//! observable state holder re-emits whenever a view re-subscribes: the view
//! consumes the event, and later re-emissions yield nothing.

use std::sync::{Mutex, PoisonError};

/// A value that is handed out at most once.
///
/// Consumption requires `&mut self`, so a single owner decides who wins.
/// Use [`SharedOneShot`] when several threads may race to consume.
#[derive(Debug)]
pub struct OneShot<T> {
    content: Option<T>,
}

impl<T> OneShot<T> {
    /// Wrap a payload.
    pub fn new(content: T) -> Self {
        Self {
            content: Some(content),
        }
    }

    /// Take the payload on the first call, `None` on every later call.
    pub fn consume(&mut self) -> Option<T> {
        self.content.take()
    }

    /// Check whether the payload has already been handed out.
    pub fn is_consumed(&self) -> bool {
        self.content.is_none()
    }
}

impl<T> From<T> for OneShot<T> {
    fn from(content: T) -> Self {
        Self::new(content)
    }
}

impl<T: Default> Default for OneShot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Thread-safe [`OneShot`]: exactly one concurrent caller receives the payload.
#[derive(Debug)]
pub struct SharedOneShot<T> {
    content: Mutex<Option<T>>,
}

impl<T> SharedOneShot<T> {
    /// Wrap a payload.
    pub fn new(content: T) -> Self {
        Self {
            content: Mutex::new(Some(content)),
        }
    }

    /// Take the payload on the first call, `None` on every later call.
    pub fn consume(&self) -> Option<T> {
        // Take is a single step, so a poisoned lock still holds a consistent slot.
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Check whether the payload has already been handed out.
    pub fn is_consumed(&self) -> bool {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl<T> From<OneShot<T>> for SharedOneShot<T> {
    fn from(event: OneShot<T>) -> Self {
        Self {
            content: Mutex::new(event.content),
        }
    }
}
