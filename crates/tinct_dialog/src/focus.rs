//! Focus predicate and containment ring
//!
//! The focusable list is re-queried from the host on every Tab press.
//! Dialog contents may change while open, so nothing here is cached.

use tinct_core::{Event, NodeId};
use tracing::trace;

use crate::host::{DialogHost, FocusTraits};

const NATIVE_FOCUSABLE: [&str; 4] = ["button", "input", "select", "textarea"];

/// Whether an element takes part in sequential Tab navigation
///
/// Native controls, anchors with `href` and anything with a non-negative
/// `tabindex` qualify; negative `tabindex`, `disabled` and `aria-hidden`
/// exclude.
pub fn is_focusable(traits: &FocusTraits) -> bool {
    if traits.disabled || traits.aria_hidden {
        return false;
    }
    match traits.tabindex {
        Some(index) => index >= 0,
        None => NATIVE_FOCUSABLE.contains(&traits.tag.as_str()) || (traits.tag == "a" && traits.href),
    }
}

/// Whether an element may receive initial focus when a dialog opens
pub fn is_initial_focus_candidate(traits: &FocusTraits) -> bool {
    is_focusable(traits) || (traits.autofocus && !traits.disabled && !traits.aria_hidden)
}

/// Focusable descendants of `container` in document order
pub fn focusable_descendants(host: &dyn DialogHost, container: NodeId) -> Vec<NodeId> {
    host.descendants(container)
        .into_iter()
        .filter(|&node| is_focusable(&host.focus_traits(node)))
        .collect()
}

/// Element to focus when a dialog opens
///
/// An attached explicit target wins, then the first candidate inside the
/// container, then the container itself.
pub fn initial_focus_target(
    host: &dyn DialogHost,
    container: NodeId,
    explicit: Option<NodeId>,
) -> NodeId {
    if let Some(target) = explicit.filter(|&target| host.is_connected(target)) {
        return target;
    }
    host.descendants(container)
        .into_iter()
        .find(|&node| is_initial_focus_candidate(&host.focus_traits(node)))
        .unwrap_or(container)
}

/// Keep a Tab press inside `container`.
///
/// Wraps last to first (forward) or first to last (`backward`), and pulls
/// escaped focus back in. Presses that stay inside the ring are left to the
/// host's default navigation. The innermost open dialog owns Tab, so
/// propagation always stops here.
pub fn contain_tab(host: &dyn DialogHost, container: NodeId, backward: bool, event: &mut Event) {
    event.stop_propagation();

    let focusables = focusable_descendants(host, container);
    let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
        trace!("no focusable elements; pinning focus to container");
        event.prevent_default();
        host.focus(container);
        return;
    };

    let active = host.active_element();
    let escaped = match active {
        Some(node) => node == container || !host.contains(container, node),
        None => true,
    };

    let wrap_to = if backward {
        (escaped || active == Some(first)).then_some(last)
    } else {
        (escaped || active == Some(last)).then_some(first)
    };

    if let Some(target) = wrap_to {
        trace!(backward, escaped, "wrapping focus");
        event.prevent_default();
        host.focus(target);
    }
}
