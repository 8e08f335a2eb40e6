//! Provider scope
//!
//! Consumers never look the resolver up ambiently. The host creates a
//! [`ThemeResolver`] and hands it down inside a [`ThemeScope`]; consumers
//! call [`ThemeScope::use_theme`] and fail fast when nothing was provided.

use std::sync::Arc;

use crate::error::{Result, ThemeError};
use crate::resolver::ThemeResolver;
use crate::theme::{ResolvedMode, ThemePreference};
use crate::tokens::PaletteTokens;

/// Scope carrying an optional resolver to theme consumers
#[derive(Clone, Debug, Default)]
pub struct ThemeScope {
    resolver: Option<ThemeResolver>,
}

impl ThemeScope {
    /// Scope with no provider; every consumer inside it fails
    pub fn empty() -> Self {
        Self { resolver: None }
    }

    pub fn with_resolver(resolver: ThemeResolver) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    pub fn resolver(&self) -> Option<&ThemeResolver> {
        self.resolver.as_ref()
    }

    /// Theme state for a consumer
    ///
    /// Returns [`ThemeError::MissingProvider`] naming `use_theme` when the
    /// scope has no resolver.
    pub fn use_theme(&self) -> Result<UseTheme> {
        self.use_theme_for("use_theme")
    }

    /// Like [`use_theme`](Self::use_theme) but names `consumer` in the error
    pub fn use_theme_for(&self, consumer: &'static str) -> Result<UseTheme> {
        match &self.resolver {
            Some(resolver) => Ok(UseTheme {
                resolver: resolver.clone(),
            }),
            None => Err(ThemeError::MissingProvider { consumer }),
        }
    }
}

/// Theme state published to a consumer
#[derive(Clone, Debug)]
pub struct UseTheme {
    resolver: ThemeResolver,
}

impl UseTheme {
    /// Current preference
    pub fn theme(&self) -> ThemePreference {
        self.resolver.preference()
    }

    pub fn set_theme(&self, preference: ThemePreference) {
        self.resolver.set_preference(preference);
    }

    /// Mode in effect after system fallback
    pub fn resolved_theme(&self) -> ResolvedMode {
        self.resolver.resolved_mode()
    }

    /// Palette for the resolved mode
    pub fn colors(&self) -> Arc<PaletteTokens> {
        self.resolver.palette()
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }
}
