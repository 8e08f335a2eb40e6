//! Flat state machines
//!
//! Components describe their lifecycle as a table of `(state, event) -> state`
//! transitions. Sending an event with no entry for the current state is a
//! no-op, which is how redundant requests (opening an open dialog, pressing
//! a disabled button) are absorbed.

use rustc_hash::FxHashMap;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// One `(from, event) -> to` edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for [`StateMachine`]
#[derive(Debug)]
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    pub fn build(self) -> StateMachine {
        StateMachine::new(self.initial_state, self.transitions)
    }
}

/// A state machine instance
///
/// Holds only the current state and the transition table, so its size is
/// fixed once built no matter how many events it processes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine {
    current_state: StateId,
    table: FxHashMap<(StateId, EventId), StateId>,
}

impl StateMachine {
    /// Machine starting in `initial_state`
    ///
    /// When two transitions share a `(from, event)` pair the first one wins.
    pub fn new(initial_state: StateId, transitions: Vec<Transition>) -> Self {
        let mut table = FxHashMap::default();
        for t in transitions {
            table.entry((t.from_state, t.event)).or_insert(t.to_state);
        }
        Self {
            current_state: initial_state,
            table,
        }
    }

    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Whether `event` would move the machine out of its current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.table.contains_key(&(self.current_state, event))
    }

    /// Apply `event` and return the resulting state
    pub fn send(&mut self, event: EventId) -> StateId {
        if let Some(&to) = self.table.get(&(self.current_state, event)) {
            self.current_state = to;
        }
        self.current_state
    }
}
