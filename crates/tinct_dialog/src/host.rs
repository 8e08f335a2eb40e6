//! Host environment abstraction
//!
//! The dialog controller never touches a concrete document. Everything it
//! needs from the environment (focus, element queries, the page scroll
//! policy, portal mounting and event listeners) goes through [`DialogHost`].

use std::rc::Rc;

use tinct_core::{Event, EventType, NodeId, Subscription};

/// Listener registered with the host for one event type
///
/// Receives the event mutably so it can stop propagation or suppress the
/// host's default action.
pub type HostListener = Rc<dyn Fn(&mut Event)>;

/// Page scroll policy, i.e. the body's overflow value
///
/// `None` means no explicit policy is set. The value is restored verbatim
/// when a scroll lock ends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollPolicy(Option<String>);

impl ScrollPolicy {
    /// No explicit policy
    pub const fn unset() -> Self {
        Self(None)
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// Policy applied while a dialog is open
    pub fn hidden() -> Self {
        Self::new("hidden")
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Focus-relevant attributes of one element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusTraits {
    /// Lowercase tag name
    pub tag: String,
    /// Whether the element carries an `href`
    pub href: bool,
    /// Parsed `tabindex`, if present and numeric
    pub tabindex: Option<i32>,
    pub disabled: bool,
    /// `aria-hidden="true"`
    pub aria_hidden: bool,
    /// Marked with `data-autofocus`
    pub autofocus: bool,
}

impl FocusTraits {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }
}

/// Host capability required by the dialog controller
pub trait DialogHost {
    /// Document root; last-resort portal target
    fn body(&self) -> NodeId;

    /// Look up an element by its `id` attribute
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Currently focused element
    fn active_element(&self) -> Option<NodeId>;

    /// Move focus; ignored for elements not attached to the document
    fn focus(&self, node: NodeId);

    /// Whether `node` is attached to the document
    fn is_connected(&self, node: NodeId) -> bool;

    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// All descendants of `root` in document order, excluding `root`
    fn descendants(&self, root: NodeId) -> Vec<NodeId>;

    fn focus_traits(&self, node: NodeId) -> FocusTraits;

    fn scroll_policy(&self) -> ScrollPolicy;

    fn set_scroll_policy(&self, policy: ScrollPolicy);

    /// Attach `node` under `target`, outside its logical parent
    fn mount(&self, node: NodeId, target: NodeId);

    /// Detach a previously mounted node
    fn unmount(&self, node: NodeId);

    /// Register a document-level listener.
    ///
    /// Listeners registered later run first, and a listener that stops
    /// propagation hides the event from every listener registered before it.
    fn listen(&self, event_type: EventType, listener: HostListener) -> Subscription;
}
