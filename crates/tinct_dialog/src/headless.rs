//! In-memory document host
//!
//! A small element tree with focus, attributes, a page scroll policy and
//! document-level listeners. It drives dialogs without a windowing system:
//! tests script key presses and clicks against it, and the CLI uses it for
//! walkthroughs.
//!
//! ```rust
//! use tinct_core::{KeyCode, Modifiers};
//! use tinct_dialog::headless::Document;
//! use tinct_dialog::DialogHost;
//!
//! let doc = Document::new();
//! let a = doc.element("button").id("a").child_of(doc.body());
//! let b = doc.element("button").id("b").child_of(doc.body());
//!
//! doc.focus_element(a);
//! doc.press_key(KeyCode::TAB, Modifiers::NONE);
//! assert_eq!(doc.active(), Some(b));
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use tinct_core::{Event, EventType, KeyCode, Modifiers, NodeId, Subscription};
use tracing::{trace, warn};

use crate::focus::is_focusable;
use crate::host::{DialogHost, FocusTraits, HostListener, ScrollPolicy};

#[derive(Debug)]
struct NodeData {
    tag: String,
    attrs: IndexMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: IndexMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

struct Tree {
    nodes: SlotMap<NodeId, NodeData>,
    body: NodeId,
    active: Option<NodeId>,
    scroll: ScrollPolicy,
    ids: FxHashMap<String, NodeId>,
}

impl Tree {
    fn is_connected(&self, mut node: NodeId) -> bool {
        loop {
            if node == self.body {
                return true;
            }
            match self.nodes.get(node).and_then(|data| data.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn contains(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes.get(node).and_then(|data| data.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(root) {
            Some(data) => data.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(data) = self.nodes.get(node) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        out
    }

    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get_mut(node).and_then(|data| data.parent.take());
        if let Some(parent) = parent.and_then(|parent| self.nodes.get_mut(parent)) {
            parent.children.retain(|&child| child != node);
        }
        // Focus inside a detached subtree is lost
        if let Some(active) = self.active {
            if self.contains(node, active) {
                trace!("focused element detached; clearing focus");
                self.active = None;
            }
        }
    }

    fn focus_traits(&self, node: NodeId) -> FocusTraits {
        let Some(data) = self.nodes.get(node) else {
            return FocusTraits::default();
        };
        FocusTraits {
            tag: data.tag.clone(),
            href: data.attrs.contains_key("href"),
            tabindex: data
                .attrs
                .get("tabindex")
                .and_then(|value| value.trim().parse().ok()),
            disabled: data.attrs.contains_key("disabled"),
            aria_hidden: data.attrs.get("aria-hidden").map(String::as_str) == Some("true"),
            autofocus: data.attrs.contains_key("data-autofocus"),
        }
    }
}

struct Registered {
    serial: u64,
    event_type: EventType,
    listener: HostListener,
}

#[derive(Default)]
struct ListenerTable {
    next_serial: u64,
    entries: Vec<Registered>,
}

/// In-memory document implementing [`DialogHost`]
pub struct Document {
    tree: RefCell<Tree>,
    listeners: Rc<RefCell<ListenerTable>>,
}

impl Document {
    /// Empty document containing only `body`
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(NodeData::new("body"));
        Self {
            tree: RefCell::new(Tree {
                nodes,
                body,
                active: None,
                scroll: ScrollPolicy::unset(),
                ids: FxHashMap::default(),
            }),
            listeners: Rc::new(RefCell::new(ListenerTable::default())),
        }
    }

    // ========== Tree Construction ==========

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.tree.borrow_mut().nodes.insert(NodeData::new(tag))
    }

    /// Create a detached element and configure it builder-style
    pub fn element(&self, tag: &str) -> ElementBuilder<'_> {
        ElementBuilder {
            doc: self,
            node: self.create_element(tag),
        }
    }

    /// Append `child` under `parent`, moving it if already attached
    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        let mut tree = self.tree.borrow_mut();
        if !tree.nodes.contains_key(parent) || !tree.nodes.contains_key(child) {
            warn!("append_child with unknown node");
            return;
        }
        if tree.contains(child, parent) {
            warn!("append_child would create a cycle; ignored");
            return;
        }
        tree.detach(child);
        if let Some(data) = tree.nodes.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = tree.nodes.get_mut(parent) {
            data.children.push(child);
        }
    }

    /// Detach `node` (and its subtree) from its parent
    pub fn remove(&self, node: NodeId) {
        self.tree.borrow_mut().detach(node);
    }

    // ========== Attributes ==========

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        let mut tree = self.tree.borrow_mut();
        let Some(data) = tree.nodes.get_mut(node) else {
            return;
        };
        let previous = data.attrs.insert(name.to_string(), value.to_string());
        if name == "id" {
            if let Some(previous) = previous {
                if tree.ids.get(&previous) == Some(&node) {
                    tree.ids.remove(&previous);
                }
            }
            tree.ids.insert(value.to_string(), node);
        }
    }

    pub fn remove_attribute(&self, node: NodeId, name: &str) {
        let mut tree = self.tree.borrow_mut();
        let removed = tree
            .nodes
            .get_mut(node)
            .and_then(|data| data.attrs.shift_remove(name));
        if let (Some(old), "id") = (removed, name) {
            if tree.ids.get(&old) == Some(&node) {
                tree.ids.remove(&old);
            }
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree
            .borrow()
            .nodes
            .get(node)
            .and_then(|data| data.attrs.get(name).cloned())
    }

    pub fn set_disabled(&self, node: NodeId, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    pub fn set_text(&self, node: NodeId, text: &str) {
        if let Some(data) = self.tree.borrow_mut().nodes.get_mut(node) {
            data.text = Some(text.to_string());
        }
    }

    pub fn text(&self, node: NodeId) -> Option<String> {
        self.tree
            .borrow()
            .nodes
            .get(node)
            .and_then(|data| data.text.clone())
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.tree
            .borrow()
            .nodes
            .get(node)
            .map(|data| data.tag.clone())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree
            .borrow()
            .nodes
            .get(node)
            .and_then(|data| data.parent)
    }

    /// First descendant of `root` whose `name` attribute equals `value`
    pub fn query(&self, root: NodeId, name: &str, value: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.descendants(root).into_iter().find(|&node| {
            tree.nodes
                .get(node)
                .and_then(|data| data.attrs.get(name))
                .map(String::as_str)
                == Some(value)
        })
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .borrow()
            .nodes
            .get(node)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    // ========== Focus ==========

    /// Focused element
    pub fn active(&self) -> Option<NodeId> {
        self.tree.borrow().active
    }

    /// Focus an element the way a user click or script would
    pub fn focus_element(&self, node: NodeId) {
        DialogHost::focus(self, node);
    }

    /// Elements reachable by sequential Tab navigation, in document order
    pub fn tabbables(&self) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.descendants(tree.body)
            .into_iter()
            .filter(|&node| is_focusable(&tree.focus_traits(node)))
            .collect()
    }

    fn navigate(&self, backward: bool) {
        let tabbables = self.tabbables();
        if tabbables.is_empty() {
            return;
        }
        let current = self
            .active()
            .and_then(|active| tabbables.iter().position(|&node| node == active));
        let last = tabbables.len() - 1;
        let next = match (current, backward) {
            (None, false) => 0,
            (None, true) => last,
            (Some(index), false) if index == last => 0,
            (Some(index), false) => index + 1,
            (Some(0), true) => last,
            (Some(index), true) => index - 1,
        };
        DialogHost::focus(self, tabbables[next]);
    }

    // ========== Events ==========

    /// Dispatch a key press at the focused element.
    ///
    /// Tab that no listener prevented moves focus to the next (or, with
    /// Shift, previous) tabbable element, wrapping at either end.
    pub fn press_key(&self, key: KeyCode, modifiers: Modifiers) -> Event {
        let mut event = Event::key_down(key, modifiers);
        event.target = self.active();
        let event = self.dispatch(event);
        if key == KeyCode::TAB && !event.default_prevented {
            self.navigate(modifiers.shift());
        }
        event
    }

    /// Dispatch a click at `target`
    pub fn click(&self, target: NodeId) -> Event {
        self.dispatch(Event::click(target))
    }

    /// Deliver `event` to listeners, newest first, until propagation stops
    pub fn dispatch(&self, mut event: Event) -> Event {
        let listeners: Vec<(u64, HostListener)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .rev()
            .filter(|entry| entry.event_type == event.event_type)
            .map(|entry| (entry.serial, Rc::clone(&entry.listener)))
            .collect();

        for (serial, listener) in listeners {
            if event.propagation_stopped {
                break;
            }
            let still_registered = self
                .listeners
                .borrow()
                .entries
                .iter()
                .any(|entry| entry.serial == serial);
            if still_registered {
                listener(&mut event);
            }
        }
        event
    }

    /// Number of registered document listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogHost for Document {
    fn body(&self) -> NodeId {
        self.tree.borrow().body
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.ids
            .get(id)
            .copied()
            .filter(|&node| tree.is_connected(node))
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active()
    }

    fn focus(&self, node: NodeId) {
        let mut tree = self.tree.borrow_mut();
        if tree.is_connected(node) {
            tree.active = Some(node);
        } else {
            trace!("focus on detached element ignored");
        }
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.tree.borrow().is_connected(node)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.borrow().contains(ancestor, node)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        self.tree.borrow().descendants(root)
    }

    fn focus_traits(&self, node: NodeId) -> FocusTraits {
        self.tree.borrow().focus_traits(node)
    }

    fn scroll_policy(&self) -> ScrollPolicy {
        self.tree.borrow().scroll.clone()
    }

    fn set_scroll_policy(&self, policy: ScrollPolicy) {
        self.tree.borrow_mut().scroll = policy;
    }

    fn mount(&self, node: NodeId, target: NodeId) {
        self.append_child(target, node);
    }

    fn unmount(&self, node: NodeId) {
        self.remove(node);
    }

    fn listen(&self, event_type: EventType, listener: HostListener) -> Subscription {
        let serial = {
            let mut table = self.listeners.borrow_mut();
            let serial = table.next_serial;
            table.next_serial += 1;
            table.entries.push(Registered {
                serial,
                event_type,
                listener,
            });
            serial
        };

        let table: Weak<RefCell<ListenerTable>> = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(table) = table.upgrade() {
                table
                    .borrow_mut()
                    .entries
                    .retain(|entry| entry.serial != serial);
            }
        })
    }
}

/// Builder returned by [`Document::element`]
pub struct ElementBuilder<'a> {
    doc: &'a Document,
    node: NodeId,
}

impl<'a> ElementBuilder<'a> {
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.doc.set_attribute(self.node, name, value);
        self
    }

    pub fn tabindex(self, index: i32) -> Self {
        self.attr("tabindex", &index.to_string())
    }

    pub fn href(self, href: &str) -> Self {
        self.attr("href", href)
    }

    pub fn disabled(self) -> Self {
        self.attr("disabled", "")
    }

    pub fn aria_hidden(self) -> Self {
        self.attr("aria-hidden", "true")
    }

    pub fn autofocus(self) -> Self {
        self.attr("data-autofocus", "")
    }

    pub fn text(self, text: &str) -> Self {
        self.doc.set_text(self.node, text);
        self
    }

    /// Append under `parent` and return the element
    pub fn child_of(self, parent: NodeId) -> NodeId {
        self.doc.append_child(parent, self.node);
        self.node
    }

    /// Return the element, still detached
    pub fn build(self) -> NodeId {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tinct_core::event_types;

    #[test]
    fn test_descendants_in_document_order() {
        let doc = Document::new();
        let outer = doc.element("div").child_of(doc.body());
        let a = doc.element("span").child_of(outer);
        let a1 = doc.element("span").child_of(a);
        let b = doc.element("span").child_of(outer);

        assert_eq!(doc.descendants(outer), vec![a, a1, b]);
        assert!(doc.contains(outer, a1));
        assert!(!doc.contains(a, b));
    }

    #[test]
    fn test_detached_nodes() {
        let doc = Document::new();
        let node = doc.element("button").id("x").build();
        assert!(!doc.is_connected(node));
        assert_eq!(doc.element_by_id("x"), None);

        doc.append_child(doc.body(), node);
        assert_eq!(doc.element_by_id("x"), Some(node));

        doc.focus_element(node);
        doc.remove(node);
        assert_eq!(doc.active(), None);
        assert_eq!(doc.element_by_id("x"), None);
    }

    #[test]
    fn test_focus_ignores_detached() {
        let doc = Document::new();
        let node = doc.create_element("button");
        doc.focus_element(node);
        assert_eq!(doc.active(), None);
    }

    #[test]
    fn test_default_tab_navigation_wraps() {
        let doc = Document::new();
        let a = doc.element("button").child_of(doc.body());
        let _skipped = doc.element("button").disabled().child_of(doc.body());
        let b = doc.element("a").href("#").child_of(doc.body());

        doc.press_key(KeyCode::TAB, Modifiers::NONE);
        assert_eq!(doc.active(), Some(a));
        doc.press_key(KeyCode::TAB, Modifiers::NONE);
        assert_eq!(doc.active(), Some(b));
        doc.press_key(KeyCode::TAB, Modifiers::NONE);
        assert_eq!(doc.active(), Some(a));
        doc.press_key(KeyCode::TAB, Modifiers::shift_only());
        assert_eq!(doc.active(), Some(b));
    }

    #[test]
    fn test_newest_listener_runs_first_and_can_stop() {
        let doc = Document::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let log = order.clone();
        let _old = doc.listen(
            event_types::KEY_DOWN,
            Rc::new(move |_| log.borrow_mut().push("old")),
        );
        let log = order.clone();
        let new = doc.listen(
            event_types::KEY_DOWN,
            Rc::new(move |event| {
                log.borrow_mut().push("new");
                event.stop_propagation();
            }),
        );

        doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
        assert_eq!(*order.borrow(), vec!["new"]);

        new.unsubscribe();
        doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
        assert_eq!(*order.borrow(), vec!["new", "old"]);
        assert_eq!(doc.listener_count(), 1);
    }

    #[test]
    fn test_listener_filtered_by_type() {
        let doc = Document::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _sub = doc.listen(
            event_types::CLICK,
            Rc::new(move |_| counter.set(counter.get() + 1)),
        );

        doc.press_key(KeyCode::ENTER, Modifiers::NONE);
        doc.click(doc.body());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_id_reassignment() {
        let doc = Document::new();
        let node = doc.element("div").id("first").child_of(doc.body());
        doc.set_attribute(node, "id", "second");
        assert_eq!(doc.element_by_id("first"), None);
        assert_eq!(doc.element_by_id("second"), Some(node));
        doc.remove_attribute(node, "id");
        assert_eq!(doc.element_by_id("second"), None);
    }
}
