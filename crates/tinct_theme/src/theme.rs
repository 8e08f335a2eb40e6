//! Preferences, resolved modes, and the token provider seam

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::themes::TinctTheme;
use crate::tokens::PaletteTokens;

/// The user's explicit theme choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the host's dark-mode signal
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// User-facing label
    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Resolve against the host's dark-mode signal.
    ///
    /// `system_dark` is `None` when the host has no signal, which resolves
    /// `System` to light.
    pub fn resolve(self, system_dark: Option<bool>) -> ResolvedMode {
        match self {
            ThemePreference::Light => ResolvedMode::Light,
            ThemePreference::Dark => ResolvedMode::Dark,
            ThemePreference::System => match system_dark {
                Some(true) => ResolvedMode::Dark,
                Some(false) | None => ResolvedMode::Light,
            },
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(ThemeError::UnknownPreference(s.to_string())),
        }
    }
}

/// The light/dark mode actually in effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    #[default]
    Light,
    Dark,
}

impl ResolvedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedMode::Light => "light",
            ResolvedMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ResolvedMode::Dark
    }

    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            ResolvedMode::Light => ResolvedMode::Dark,
            ResolvedMode::Dark => ResolvedMode::Light,
        }
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolvedMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ResolvedMode::Light),
            "dark" => Ok(ResolvedMode::Dark),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

/// Resolved palette lookup
///
/// Must be pure and total: the same mode always yields the same palette
/// instance, so consumers can compare with [`Arc::ptr_eq`].
pub trait TokenProvider {
    fn palette(&self, mode: ResolvedMode) -> Arc<PaletteTokens>;
}

/// Light/dark palette pair
#[derive(Clone, Debug)]
pub struct PaletteBundle {
    light: Arc<PaletteTokens>,
    dark: Arc<PaletteTokens>,
}

impl PaletteBundle {
    pub fn new(light: PaletteTokens, dark: PaletteTokens) -> Self {
        Self {
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }
}

impl Default for PaletteBundle {
    fn default() -> Self {
        Self::new(TinctTheme::light(), TinctTheme::dark())
    }
}

impl TokenProvider for PaletteBundle {
    fn palette(&self, mode: ResolvedMode) -> Arc<PaletteTokens> {
        match mode {
            ResolvedMode::Light => Arc::clone(&self.light),
            ResolvedMode::Dark => Arc::clone(&self.dark),
        }
    }
}

/// State published to theme subscribers after every recomputation
#[derive(Clone, Debug)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub mode: ResolvedMode,
    pub palette: Arc<PaletteTokens>,
}
