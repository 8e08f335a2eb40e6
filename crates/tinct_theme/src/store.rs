//! Preference persistence hook
//!
//! The resolver keeps the preference in memory. Hosts that want it to
//! survive restarts inject a [`PreferenceStore`].

use std::cell::Cell;

use crate::error::Result;
use crate::theme::ThemePreference;

/// Host-injected preference persistence
pub trait PreferenceStore {
    /// Previously saved preference, if any
    fn load(&self) -> Result<Option<ThemePreference>>;

    /// Persist a new preference
    fn save(&self, preference: ThemePreference) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<ThemePreference>>,
}

impl MemoryStore {
    pub fn new(initial: Option<ThemePreference>) -> Self {
        Self {
            value: Cell::new(initial),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<ThemePreference>> {
        Ok(self.value.get())
    }

    fn save(&self, preference: ThemePreference) -> Result<()> {
        self.value.set(Some(preference));
        Ok(())
    }
}
