//! Theme error types

use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Theme state was requested outside a scope that provides a resolver
    #[error("{consumer} must be used within a ThemeScope that provides a ThemeResolver")]
    MissingProvider { consumer: &'static str },

    /// Preference string is not one of `light`, `dark`, `system`
    #[error("unknown theme preference {0:?} (expected light, dark, or system)")]
    UnknownPreference(String),

    /// Resolved mode string is not one of `light`, `dark`
    #[error("unknown color mode {0:?} (expected light or dark)")]
    UnknownMode(String),

    /// Palette role name is not part of the token set
    #[error("unknown color role {0:?}")]
    UnknownRole(String),

    /// A host-injected preference store failed
    #[error("preference store error: {0}")]
    Store(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
