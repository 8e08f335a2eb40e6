//! Host dark-mode signal
//!
//! The resolver samples [`SystemSignal::is_dark`] on every recomputation and
//! listens for changes only while the preference is `system`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use tinct_core::Subscription;

new_key_type! {
    struct SignalListenerId;
}

/// Listener invoked with the new dark-mode value
pub type SignalListener = Rc<dyn Fn(bool)>;

/// Host capability reporting the system-level dark-mode setting
pub trait SystemSignal {
    /// Current system dark-mode setting
    fn is_dark(&self) -> bool;

    /// Register a change listener; it stays registered until the returned
    /// guard is released
    fn on_change(&self, listener: SignalListener) -> Subscription;
}

/// Signal with a fixed value that never changes
#[derive(Clone, Copy, Debug)]
pub struct StaticSystemSignal {
    dark: bool,
}

impl StaticSystemSignal {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }
}

impl SystemSignal for StaticSystemSignal {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn on_change(&self, _listener: SignalListener) -> Subscription {
        Subscription::empty()
    }
}

struct ManualInner {
    dark: Cell<bool>,
    listeners: RefCell<SlotMap<SignalListenerId, SignalListener>>,
}

/// Host-driven signal
///
/// Embedders forward platform notifications through [`set_dark`]. Clones
/// share state.
///
/// [`set_dark`]: ManualSystemSignal::set_dark
#[derive(Clone)]
pub struct ManualSystemSignal {
    inner: Rc<ManualInner>,
}

impl ManualSystemSignal {
    pub fn new(dark: bool) -> Self {
        Self {
            inner: Rc::new(ManualInner {
                dark: Cell::new(dark),
                listeners: RefCell::new(SlotMap::with_key()),
            }),
        }
    }

    /// Update the system setting and notify listeners if it changed
    pub fn set_dark(&self, dark: bool) {
        if self.inner.dark.replace(dark) == dark {
            return;
        }
        tracing::debug!(dark, "system color scheme changed");

        // Listeners may register or release guards while being notified
        let snapshot: Vec<(SignalListenerId, SignalListener)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.inner.listeners.borrow().contains_key(id) {
                listener(dark);
            }
        }
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl SystemSignal for ManualSystemSignal {
    fn is_dark(&self) -> bool {
        self.inner.dark.get()
    }

    fn on_change(&self, listener: SignalListener) -> Subscription {
        let id = self.inner.listeners.borrow_mut().insert(listener);
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().remove(id);
            }
        })
    }
}
