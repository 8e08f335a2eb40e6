//! Tinct Widget Library
//!
//! Themed presentation primitives. Every widget takes the [`ThemeScope`]
//! explicitly and renders an [`Element`] description from the resolved
//! palette; rendering outside a scope with a resolver fails with
//! [`ThemeError::MissingProvider`](tinct_theme::ThemeError::MissingProvider).
//!
//! ```rust
//! use tinct_theme::{ThemePreference, ThemeResolver, ThemeScope};
//! use tinct_widgets::{Button, Widget};
//!
//! let scope = ThemeScope::with_resolver(
//!     ThemeResolver::builder().preference(ThemePreference::Dark).build(),
//! );
//! let button = Button::new("Save").render(&scope).unwrap();
//! assert_eq!(button.test_id.as_deref(), Some("button"));
//! assert!(Button::new("Save").render(&ThemeScope::empty()).is_err());
//! ```

pub mod button;
pub mod card;
pub mod element;
pub mod input;
pub mod modal;
pub mod theme_selector;
pub mod widget;

pub use button::{Button, ButtonConfig, ButtonSize, ButtonVariant};
pub use card::{Card, Elevation};
pub use element::{Element, Style};
pub use input::{Input, InputType};
pub use modal::{Modal, ModalSize, MountedModal};
pub use theme_selector::ThemeSelector;
pub use widget::Widget;

pub use tinct_theme::ThemeScope;
