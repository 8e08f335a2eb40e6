//! Dialog controller
//!
//! Owns the open/closed lifecycle of one dialog and every side effect tied
//! to it. Each open creates a fresh [`DialogSession`]; each close reverses
//! the session's effects in a fixed order:
//!
//! 1. deregister the document listeners
//! 2. restore the scroll policy recorded at open
//! 3. restore focus to the prior element if it is still attached
//! 4. unmount and discard the session
//!
//! Every effect is held by a guard, so a session dropped on any other path
//! (including unwinding) still releases its listeners, scroll lock and
//! mount.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use tinct_core::{event_types, Event, EventId, KeyCode, NodeId, StateId, StateMachine, Subscription, Transition};
use tracing::{debug, trace};

use crate::focus;
use crate::host::{DialogHost, HostListener};
use crate::options::DialogOptions;
use crate::portal::{self, PortalMount};
use crate::scroll::ScrollLock;

// Lifecycle states
const CLOSED: StateId = 0;
const OPEN: StateId = 1;

// Lifecycle events
const SHOW: EventId = 1;
const HIDE: EventId = 2;

/// Why a dialog closed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// `close()` or `sync(false)`
    Api,
    Escape,
    /// Click on the overlay outside the dialog body
    Overlay,
    /// The controller was dropped while open
    Unmount,
}

impl CloseReason {
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Api => "api",
            CloseReason::Escape => "escape",
            CloseReason::Overlay => "overlay",
            CloseReason::Unmount => "unmount",
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two elements a dialog is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogElements {
    /// Full-screen backdrop; the node mounted into the portal target
    pub overlay: NodeId,
    /// Dialog body inside the overlay
    pub container: NodeId,
}

/// State captured for a single open/close cycle
///
/// Field order is drop order: listeners go first, the mount last.
pub struct DialogSession {
    listeners: SmallVec<[Subscription; 2]>,
    scroll: ScrollLock,
    prior_focus: Option<NodeId>,
    initial_focus: NodeId,
    mount: PortalMount,
}

impl DialogSession {
    /// Element focused before the dialog opened
    pub fn prior_focus(&self) -> Option<NodeId> {
        self.prior_focus
    }

    /// Where the overlay was mounted
    pub fn portal_target(&self) -> NodeId {
        self.mount.target()
    }

    /// Element focused when the dialog opened
    pub fn initial_focus(&self) -> NodeId {
        self.initial_focus
    }

    fn end(self, host: &dyn DialogHost) {
        let DialogSession {
            listeners,
            scroll,
            prior_focus,
            mount,
            ..
        } = self;

        drop(listeners);
        scroll.release();

        match prior_focus {
            Some(prior) if host.is_connected(prior) => host.focus(prior),
            Some(_) => debug!("prior focus target detached; focus not restored"),
            None => {}
        }

        mount.release();
    }
}

type CloseCallback = Rc<dyn Fn(CloseReason)>;

struct ControllerInner {
    host: Rc<dyn DialogHost>,
    elements: DialogElements,
    options: RefCell<DialogOptions>,
    machine: RefCell<StateMachine>,
    session: RefCell<Option<DialogSession>>,
    close_callbacks: RefCell<Vec<CloseCallback>>,
}

impl ControllerInner {
    fn is_open(&self) -> bool {
        self.machine.borrow().is_in(OPEN)
    }

    fn open(this: &Rc<Self>) {
        if !this.machine.borrow().can_send(SHOW) {
            trace!("open ignored; dialog already open");
            return;
        }

        let host = &this.host;
        let options = this.options.borrow().clone();
        let DialogElements { overlay, container } = this.elements;

        let prior_focus = host.active_element();
        let scroll = ScrollLock::acquire(Rc::clone(host));

        let target = portal::resolve_target(host.as_ref(), &options);
        let mount = PortalMount::attach(Rc::clone(host), overlay, target);

        let initial_focus = focus::initial_focus_target(host.as_ref(), container, options.initial_focus);
        host.focus(initial_focus);

        let mut listeners = SmallVec::new();
        listeners.push(host.listen(event_types::KEY_DOWN, Self::key_listener(this)));
        listeners.push(host.listen(event_types::CLICK, Self::click_listener(this)));

        *this.session.borrow_mut() = Some(DialogSession {
            listeners,
            scroll,
            prior_focus,
            initial_focus,
            mount,
        });
        this.machine.borrow_mut().send(SHOW);

        debug!(?prior_focus, ?initial_focus, "dialog opened");
    }

    fn close(this: &Rc<Self>, reason: CloseReason) {
        if !this.machine.borrow().can_send(HIDE) {
            trace!(%reason, "close ignored; dialog not open");
            return;
        }

        // Closed before the effects unwind, so re-entrant calls are no-ops
        this.machine.borrow_mut().send(HIDE);
        let session = this.session.borrow_mut().take();
        if let Some(session) = session {
            session.end(this.host.as_ref());
        }
        debug!(%reason, "dialog closed");

        let callbacks: Vec<CloseCallback> = this.close_callbacks.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback(reason);
        }
    }

    fn key_listener(this: &Rc<Self>) -> HostListener {
        let weak: Weak<Self> = Rc::downgrade(this);
        Rc::new(move |event: &mut Event| {
            if let Some(inner) = weak.upgrade() {
                Self::on_key(&inner, event);
            }
        })
    }

    fn click_listener(this: &Rc<Self>) -> HostListener {
        let weak: Weak<Self> = Rc::downgrade(this);
        Rc::new(move |event: &mut Event| {
            if let Some(inner) = weak.upgrade() {
                Self::on_click(&inner, event);
            }
        })
    }

    fn on_key(this: &Rc<Self>, event: &mut Event) {
        let Some((key, modifiers)) = event.key() else {
            return;
        };
        if !this.is_open() {
            return;
        }

        let (close_on_esc, trap_focus) = {
            let options = this.options.borrow();
            (options.close_on_esc, options.trap_focus)
        };

        if key == KeyCode::ESCAPE && close_on_esc {
            // An enclosing dialog must not see this Escape
            event.stop_propagation();
            Self::close(this, CloseReason::Escape);
        } else if key == KeyCode::TAB && trap_focus {
            focus::contain_tab(
                this.host.as_ref(),
                this.elements.container,
                modifiers.shift(),
                event,
            );
        }
    }

    fn on_click(this: &Rc<Self>, event: &mut Event) {
        if !this.is_open() || event.target != Some(this.elements.overlay) {
            return;
        }
        if this.options.borrow().close_on_overlay {
            trace!("overlay clicked");
            Self::close(this, CloseReason::Overlay);
        }
    }
}

/// Controller for one modal dialog
///
/// Not `Clone`: the controller is the dialog's owner, and dropping it while
/// open closes the dialog with [`CloseReason::Unmount`]. Use
/// [`handle`](Self::handle) for additional non-owning references.
///
/// ```rust
/// use std::rc::Rc;
/// use tinct_dialog::{DialogController, DialogElements, DialogOptions};
/// use tinct_dialog::headless::Document;
///
/// let doc = Rc::new(Document::new());
/// let overlay = doc.element("div").build();
/// let container = doc.element("div").tabindex(-1).child_of(overlay);
/// let ok = doc.element("button").child_of(container);
///
/// let dialog = DialogController::new(
///     doc.clone(),
///     DialogElements { overlay, container },
///     DialogOptions::default(),
/// );
/// dialog.open();
/// assert_eq!(doc.active(), Some(ok));
/// dialog.close();
/// assert_eq!(doc.listener_count(), 0);
/// ```
pub struct DialogController {
    inner: Rc<ControllerInner>,
}

fn lifecycle() -> StateMachine {
    StateMachine::new(
        CLOSED,
        vec![Transition::new(CLOSED, SHOW, OPEN), Transition::new(OPEN, HIDE, CLOSED)],
    )
}

impl DialogController {
    pub fn new(host: Rc<dyn DialogHost>, elements: DialogElements, options: DialogOptions) -> Self {
        let machine = lifecycle();
        Self {
            inner: Rc::new(ControllerInner {
                host,
                elements,
                options: RefCell::new(options),
                machine: RefCell::new(machine),
                session: RefCell::new(None),
                close_callbacks: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    /// Open the dialog; no-op when already open
    pub fn open(&self) {
        ControllerInner::open(&self.inner);
    }

    /// Close the dialog; no-op when already closed
    pub fn close(&self) {
        ControllerInner::close(&self.inner, CloseReason::Api);
    }

    /// Reconcile with a caller-owned open flag
    pub fn sync(&self, open: bool) {
        match (open, self.is_open()) {
            (true, false) => self.open(),
            (false, true) => self.close(),
            _ => {}
        }
    }

    pub fn elements(&self) -> DialogElements {
        self.inner.elements
    }

    pub fn options(&self) -> DialogOptions {
        self.inner.options.borrow().clone()
    }

    /// Replace the options. Dismissal and trap flags apply to the current
    /// session; container and initial focus apply from the next open.
    pub fn set_options(&self, options: DialogOptions) {
        *self.inner.options.borrow_mut() = options;
    }

    /// Register a callback run after every close has fully completed
    ///
    /// The callback may re-enter the controller (for example through a
    /// [`DialogHandle`]) to reopen it.
    pub fn on_close<F>(&self, callback: F)
    where
        F: Fn(CloseReason) + 'static,
    {
        self.inner.close_callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Inspect the active session
    pub fn with_session<R>(&self, f: impl FnOnce(Option<&DialogSession>) -> R) -> R {
        f(self.inner.session.borrow().as_ref())
    }

    /// Non-owning handle for use inside callbacks
    pub fn handle(&self) -> DialogHandle {
        DialogHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Drop for DialogController {
    fn drop(&mut self) {
        if self.is_open() {
            ControllerInner::close(&self.inner, CloseReason::Unmount);
        }
    }
}

impl fmt::Debug for DialogController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogController")
            .field("open", &self.is_open())
            .field("elements", &self.inner.elements)
            .finish()
    }
}

/// Weak reference to a [`DialogController`]
///
/// Every method is a no-op once the controller is gone.
#[derive(Clone)]
pub struct DialogHandle {
    inner: Weak<ControllerInner>,
}

impl DialogHandle {
    pub fn is_open(&self) -> bool {
        self.inner.upgrade().is_some_and(|inner| inner.is_open())
    }

    pub fn open(&self) {
        if let Some(inner) = self.inner.upgrade() {
            ControllerInner::open(&inner);
        }
    }

    pub fn close(&self) {
        if let Some(inner) = self.inner.upgrade() {
            ControllerInner::close(&inner, CloseReason::Api);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::Document;
    use std::cell::Cell;

    fn dialog(doc: &Rc<Document>) -> DialogController {
        let overlay = doc.element("div").build();
        let container = doc.element("div").tabindex(-1).child_of(overlay);
        doc.element("button").child_of(container);
        DialogController::new(
            doc.clone(),
            DialogElements { overlay, container },
            DialogOptions::default(),
        )
    }

    #[test]
    fn test_redundant_calls_are_noops() {
        let doc = Rc::new(Document::new());
        let dialog = dialog(&doc);
        let closes = Rc::new(Cell::new(0));
        let counter = closes.clone();
        dialog.on_close(move |_| counter.set(counter.get() + 1));

        dialog.close();
        dialog.open();
        dialog.open();
        assert_eq!(doc.listener_count(), 2);

        dialog.close();
        dialog.close();
        assert_eq!(closes.get(), 1);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_repeated_cycles_keep_machine_fixed_size() {
        let doc = Rc::new(Document::new());
        let dialog = dialog(&doc);

        for _ in 0..10_000 {
            dialog.open();
            dialog.close();
        }

        assert_eq!(*dialog.inner.machine.borrow(), lifecycle());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_sync_follows_flag() {
        let doc = Rc::new(Document::new());
        let dialog = dialog(&doc);

        dialog.sync(true);
        assert!(dialog.is_open());
        dialog.sync(true);
        dialog.sync(false);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_session_exists_only_while_open() {
        let doc = Rc::new(Document::new());
        let dialog = dialog(&doc);
        assert!(dialog.with_session(|session| session.is_none()));

        dialog.open();
        let target = dialog.with_session(|session| session.map(DialogSession::portal_target));
        assert_eq!(target, Some(doc.body()));

        dialog.close();
        assert!(dialog.with_session(|session| session.is_none()));
    }

    #[test]
    fn test_drop_while_open_unmounts() {
        let doc = Rc::new(Document::new());
        let dialog = dialog(&doc);
        let overlay = dialog.elements().overlay;
        let handle = dialog.handle();

        dialog.open();
        assert!(doc.is_connected(overlay));
        drop(dialog);

        assert!(!doc.is_connected(overlay));
        assert_eq!(doc.listener_count(), 0);
        assert!(!handle.is_open());
    }

    #[test]
    fn test_close_reason_names() {
        assert_eq!(CloseReason::Escape.to_string(), "escape");
        assert_eq!(CloseReason::Unmount.as_str(), "unmount");
    }
}
