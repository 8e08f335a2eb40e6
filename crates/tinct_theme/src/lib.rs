//! Tinct Theme System
//!
//! Maps a user preference to a concrete color palette and republishes it to
//! every consumer.
//!
//! # Overview
//!
//! - **Tokens**: two isomorphic palettes (light/dark) over a closed set of
//!   semantic [`ColorRole`]s
//! - **Resolution**: `light`/`dark`/`system` preference resolved against the
//!   host's dark-mode [`SystemSignal`]
//! - **Scope**: consumers receive the resolver through an explicit
//!   [`ThemeScope`] and fail fast when none was provided
//!
//! # Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use tinct_theme::{ManualSystemSignal, ResolvedMode, ThemePreference, ThemeResolver, ThemeScope};
//!
//! let signal = ManualSystemSignal::new(true);
//! let resolver = ThemeResolver::builder()
//!     .system_signal(Rc::new(signal.clone()))
//!     .build();
//! assert_eq!(resolver.resolved_mode(), ResolvedMode::Dark);
//!
//! let scope = ThemeScope::with_resolver(resolver);
//! let theme = scope.use_theme().unwrap();
//! theme.set_theme(ThemePreference::Light);
//! assert_eq!(theme.resolved_theme(), ResolvedMode::Light);
//! ```
//!
//! # Tokens
//!
//! - [`PaletteTokens`]: primary and neutral scales, status colors, surfaces
//!   and text roles
//! - [`TinctTheme`]: the built-in light and dark palettes

pub mod error;
pub mod platform;
pub mod resolver;
pub mod scope;
pub mod signal;
pub mod store;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use error::{Result, ThemeError};
pub use platform::detect_system_dark;
pub use resolver::{ThemeListener, ThemeResolver, ThemeResolverBuilder};
pub use scope::{ThemeScope, UseTheme};
pub use signal::{ManualSystemSignal, SignalListener, StaticSystemSignal, SystemSignal};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{PaletteBundle, ResolvedMode, ThemePreference, ThemeSnapshot, TokenProvider};
pub use themes::TinctTheme;
pub use tokens::*;
