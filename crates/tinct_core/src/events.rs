//! Input events
//!
//! Unified event representation delivered by the host environment.

use crate::node::NodeId;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    /// Pointer pressed and released on the same target
    pub const CLICK: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const KEY_DOWN: EventType = 20;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Element the event was dispatched to, if any
    pub target: Option<NodeId>,
    pub data: EventData,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    Key {
        /// Virtual key code (platform-agnostic, use KeyCode constants)
        key: KeyCode,
        modifiers: Modifiers,
        /// Whether this is a repeat event
        repeat: bool,
    },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    /// Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000;

    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    /// Shift and nothing else (reverse Tab)
    pub const fn shift_only() -> Self {
        Self { bits: Self::SHIFT }
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    /// Cmd on macOS, Win elsewhere
    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    pub const fn any(&self) -> bool {
        self.bits != 0
    }
}

impl Event {
    /// Build a key-down event
    pub fn key_down(key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            target: None,
            data: EventData::Key {
                key,
                modifiers,
                repeat: false,
            },
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Build a click event aimed at `target`
    pub fn click(target: NodeId) -> Self {
        Self::pointer(event_types::CLICK, Some(target))
    }

    /// Build a pointer event of `event_type` with no coordinates
    pub fn pointer(event_type: EventType, target: Option<NodeId>) -> Self {
        Self {
            event_type,
            target,
            data: EventData::Pointer {
                x: 0.0,
                y: 0.0,
                button: 0,
            },
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Key code and modifiers, if this is a keyboard event
    pub fn key(&self) -> Option<(KeyCode, Modifiers)> {
        match self.data {
            EventData::Key { key, modifiers, .. } => Some((key, modifiers)),
            _ => None,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppress the host's default action (e.g. sequential Tab navigation)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
