//! Tinct Core
//!
//! This crate provides the foundational primitives shared by the Tinct toolkit:
//!
//! - **Colors**: RGBA values with hex parsing and formatting
//! - **Events**: Platform-agnostic keyboard and pointer events
//! - **State Machines**: Flat statecharts for component lifecycles
//! - **Subscriptions**: Scoped listener registrations released on drop
//!
//! # Example
//!
//! ```rust
//! use tinct_core::fsm::{StateMachine, Transition};
//!
//! const CLOSED: u32 = 0;
//! const OPEN: u32 = 1;
//! const SHOW: u32 = 1;
//! const HIDE: u32 = 2;
//!
//! let mut fsm = StateMachine::new(
//!     CLOSED,
//!     vec![Transition::new(CLOSED, SHOW, OPEN), Transition::new(OPEN, HIDE, CLOSED)],
//! );
//!
//! fsm.send(SHOW);
//! assert!(fsm.is_in(OPEN));
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod node;
pub mod subscription;

pub use color::{Color, ColorParseError};
pub use events::{event_types, Event, EventData, EventType, KeyCode, Modifiers};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use node::NodeId;
pub use subscription::Subscription;
