//! Tinct Dialog
//!
//! Modal dialog lifecycle: portal mounting, initial focus and focus restore,
//! a focus containment ring, Escape and overlay dismissal, and page scroll
//! locking.
//!
//! The controller is host-agnostic. Anything that implements
//! [`DialogHost`] can carry dialogs; [`headless::Document`] is an in-memory
//! host for tests and scripted walkthroughs.
//!
//! # Nesting
//!
//! Hosts deliver events to the newest listener first. A nested dialog opened
//! on top of another therefore sees Escape and Tab before its ancestor and
//! stops them from propagating further.

pub mod controller;
pub mod focus;
pub mod headless;
pub mod host;
pub mod options;
pub mod portal;
pub mod scroll;

pub use controller::{CloseReason, DialogController, DialogElements, DialogHandle, DialogSession};
pub use focus::{is_focusable, is_initial_focus_candidate};
pub use host::{DialogHost, FocusTraits, HostListener, ScrollPolicy};
pub use options::{DialogOptions, DEFAULT_MOUNT_ID};
pub use portal::PortalMount;
pub use scroll::ScrollLock;
