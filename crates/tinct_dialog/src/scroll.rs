//! Page scroll lock

use std::rc::Rc;

use tracing::trace;

use crate::host::{DialogHost, ScrollPolicy};

/// Suppresses page scrolling until released or dropped
///
/// The policy in effect at acquisition is restored verbatim.
pub struct ScrollLock {
    host: Rc<dyn DialogHost>,
    prior: Option<ScrollPolicy>,
}

impl ScrollLock {
    pub fn acquire(host: Rc<dyn DialogHost>) -> Self {
        let prior = host.scroll_policy();
        host.set_scroll_policy(ScrollPolicy::hidden());
        trace!(prior = ?prior.as_str(), "scroll locked");
        Self {
            host,
            prior: Some(prior),
        }
    }

    /// Policy that will be restored
    pub fn prior(&self) -> Option<&ScrollPolicy> {
        self.prior.as_ref()
    }

    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(prior) = self.prior.take() {
            trace!(restored = ?prior.as_str(), "scroll unlocked");
            self.host.set_scroll_policy(prior);
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.restore();
    }
}
