//! Color tokens for theming

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tinct_core::Color;

use crate::error::ThemeError;

/// Step within a ten-step color scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ScaleStep {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ScaleStep {
    pub const ALL: [ScaleStep; 10] = [
        ScaleStep::S50,
        ScaleStep::S100,
        ScaleStep::S200,
        ScaleStep::S300,
        ScaleStep::S400,
        ScaleStep::S500,
        ScaleStep::S600,
        ScaleStep::S700,
        ScaleStep::S800,
        ScaleStep::S900,
    ];

    /// Numeric weight (50, 100, ..., 900)
    pub fn weight(self) -> u16 {
        match self {
            ScaleStep::S50 => 50,
            ScaleStep::S100 => 100,
            ScaleStep::S200 => 200,
            ScaleStep::S300 => 300,
            ScaleStep::S400 => 400,
            ScaleStep::S500 => 500,
            ScaleStep::S600 => 600,
            ScaleStep::S700 => 700,
            ScaleStep::S800 => 800,
            ScaleStep::S900 => 900,
        }
    }

    pub fn from_weight(weight: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.weight() == weight)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Ten-step color scale, lightest-to-darkest in light palettes and mirrored
/// in dark palettes so a given step keeps the same semantic intensity
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    steps: [Color; 10],
}

impl ColorScale {
    /// Build a scale from `0xRRGGBB` values ordered 50..900
    pub fn from_hex(values: [u32; 10]) -> Self {
        Self {
            steps: values.map(Color::from_hex),
        }
    }

    pub fn get(&self, step: ScaleStep) -> Color {
        self.steps[step.index()]
    }

    /// The same scale read from the opposite end
    pub fn mirrored(&self) -> Self {
        let mut steps = self.steps;
        steps.reverse();
        Self { steps }
    }
}

/// Semantic color role
///
/// The set is closed: every palette defines every role.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Primary(ScaleStep),
    Neutral(ScaleStep),
    Success,
    Warning,
    Error,
    Background,
    Surface,
    TextPrimary,
    TextSecondary,
    TextDisabled,
}

macro_rules! scale_roles {
    ($variant:ident) => {
        [
            ColorRole::$variant(ScaleStep::S50),
            ColorRole::$variant(ScaleStep::S100),
            ColorRole::$variant(ScaleStep::S200),
            ColorRole::$variant(ScaleStep::S300),
            ColorRole::$variant(ScaleStep::S400),
            ColorRole::$variant(ScaleStep::S500),
            ColorRole::$variant(ScaleStep::S600),
            ColorRole::$variant(ScaleStep::S700),
            ColorRole::$variant(ScaleStep::S800),
            ColorRole::$variant(ScaleStep::S900),
        ]
    };
}

const PRIMARY_ROLES: [ColorRole; 10] = scale_roles!(Primary);
const NEUTRAL_ROLES: [ColorRole; 10] = scale_roles!(Neutral);
const FIXED_ROLES: [ColorRole; 8] = [
    ColorRole::Success,
    ColorRole::Warning,
    ColorRole::Error,
    ColorRole::Background,
    ColorRole::Surface,
    ColorRole::TextPrimary,
    ColorRole::TextSecondary,
    ColorRole::TextDisabled,
];

impl ColorRole {
    /// Number of roles in every palette
    pub const COUNT: usize = 28;

    /// All roles in stable export order
    pub fn all() -> impl Iterator<Item = ColorRole> {
        PRIMARY_ROLES
            .into_iter()
            .chain(NEUTRAL_ROLES)
            .chain(FIXED_ROLES)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRole::Primary(step) => write!(f, "primary-{}", step.weight()),
            ColorRole::Neutral(step) => write!(f, "neutral-{}", step.weight()),
            ColorRole::Success => f.write_str("success"),
            ColorRole::Warning => f.write_str("warning"),
            ColorRole::Error => f.write_str("error"),
            ColorRole::Background => f.write_str("background"),
            ColorRole::Surface => f.write_str("surface"),
            ColorRole::TextPrimary => f.write_str("text-primary"),
            ColorRole::TextSecondary => f.write_str("text-secondary"),
            ColorRole::TextDisabled => f.write_str("text-disabled"),
        }
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ThemeError::UnknownRole(s.to_string());

        let scaled = |rest: &str| {
            rest.parse::<u16>()
                .ok()
                .and_then(ScaleStep::from_weight)
                .ok_or_else(unknown)
        };

        if let Some(rest) = s.strip_prefix("primary-") {
            return scaled(rest).map(ColorRole::Primary);
        }
        if let Some(rest) = s.strip_prefix("neutral-") {
            return scaled(rest).map(ColorRole::Neutral);
        }

        FIXED_ROLES
            .into_iter()
            .find(|role| role.to_string() == s)
            .ok_or_else(unknown)
    }
}

/// Complete palette for one resolved mode
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteTokens {
    // Brand scale
    pub primary: ColorScale,
    // Gray scale for backgrounds, borders, and dividers
    pub neutral: ColorScale,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
}

impl PaletteTokens {
    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary(step) => self.primary.get(step),
            ColorRole::Neutral(step) => self.neutral.get(step),
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Error => self.error,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextDisabled => self.text_disabled,
        }
    }

    /// Iterate `(role, color)` pairs in [`ColorRole::all`] order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::all().map(move |role| (role, self.get(role)))
    }

    /// Generate a CSS variable map from all roles.
    ///
    /// Keys are role names without the `--` prefix, values are hex strings,
    /// in stable role order.
    pub fn to_css_variable_map(&self) -> IndexMap<String, String> {
        self.iter()
            .map(|(role, color)| (role.to_string(), color.to_css()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::all() {
            let name = role.to_string();
            assert_eq!(name.parse::<ColorRole>().unwrap(), role, "{name}");
        }
        assert_eq!(ColorRole::all().count(), ColorRole::COUNT);
    }

    #[test]
    fn test_unknown_roles_rejected() {
        for bad in ["primary-550", "neutral-", "text", "surface-elevated", ""] {
            assert_eq!(
                bad.parse::<ColorRole>(),
                Err(ThemeError::UnknownRole(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_mirrored_scale() {
        let scale = ColorScale::from_hex([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let mirrored = scale.mirrored();
        assert_eq!(mirrored.get(ScaleStep::S50), Color::from_hex(10));
        assert_eq!(mirrored.get(ScaleStep::S900), Color::from_hex(1));
    }
}
