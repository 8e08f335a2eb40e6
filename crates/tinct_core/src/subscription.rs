//! Scoped listener registrations
//!
//! Every listener a component registers with a host (keyboard handlers,
//! system color-scheme watchers, theme subscribers) is represented by a
//! [`Subscription`]. The registration is released exactly once: either by an
//! explicit [`Subscription::unsubscribe`] call or when the guard is dropped,
//! whichever comes first. This keeps listener lifetime tied to the owning
//! scope on every exit path, including unwinding.

use std::fmt;

/// Guard for a registered listener
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a guard that runs `release` when the listener is removed
    pub fn new<F: FnOnce() + 'static>(release: F) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the listener now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_release_runs_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        {
            let sub = Subscription::new(move || counter.set(counter.get() + 1));
            assert!(sub.is_active());
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_explicit_unsubscribe_does_not_release_twice() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        sub.unsubscribe();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_empty_guard() {
        let sub = Subscription::empty();
        assert!(!sub.is_active());
        drop(sub);
    }
}
