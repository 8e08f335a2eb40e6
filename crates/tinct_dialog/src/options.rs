//! Dialog configuration

use tinct_core::NodeId;

/// Well-known id of the fallback portal target
pub const DEFAULT_MOUNT_ID: &str = "modal-root";

/// Dialog behavior flags
///
/// Dismissal and trap flags are read when each event arrives, so changing
/// them while open takes effect immediately. `container` and
/// `initial_focus` are read at open time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogOptions {
    /// Close on a click whose target is the overlay itself
    pub close_on_overlay: bool,
    /// Close on Escape
    pub close_on_esc: bool,
    /// Keep Tab navigation inside the dialog
    pub trap_focus: bool,
    /// Explicit portal target
    pub container: Option<NodeId>,
    /// Explicit initial focus target
    pub initial_focus: Option<NodeId>,
    /// Id looked up when no explicit container is given
    pub fallback_mount_id: String,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            close_on_overlay: true,
            close_on_esc: true,
            trap_focus: true,
            container: None,
            initial_focus: None,
            fallback_mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_on_overlay(mut self, enabled: bool) -> Self {
        self.close_on_overlay = enabled;
        self
    }

    pub fn close_on_esc(mut self, enabled: bool) -> Self {
        self.close_on_esc = enabled;
        self
    }

    pub fn trap_focus(mut self, enabled: bool) -> Self {
        self.trap_focus = enabled;
        self
    }

    pub fn container(mut self, container: NodeId) -> Self {
        self.container = Some(container);
        self
    }

    pub fn initial_focus(mut self, target: NodeId) -> Self {
        self.initial_focus = Some(target);
        self
    }

    pub fn fallback_mount_id(mut self, id: impl Into<String>) -> Self {
        self.fallback_mount_id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DialogOptions::default();
        assert!(options.close_on_overlay);
        assert!(options.close_on_esc);
        assert!(options.trap_focus);
        assert_eq!(options.container, None);
        assert_eq!(options.fallback_mount_id, "modal-root");
    }

    #[test]
    fn test_builder() {
        let options = DialogOptions::new()
            .close_on_esc(false)
            .trap_focus(false)
            .fallback_mount_id("portal");
        assert!(!options.close_on_esc);
        assert!(!options.trap_focus);
        assert!(options.close_on_overlay);
        assert_eq!(options.fallback_mount_id, "portal");
    }
}
