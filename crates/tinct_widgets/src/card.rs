//! Card container
//!
//! Surface panel with a mode-aware border and shadow. Dark shadows are
//! denser and add an inset highlight so elevation stays visible against a
//! dark background.

use tinct_theme::{ColorRole, ResolvedMode, ScaleStep, ThemeError, ThemeScope};

use crate::element::Element;
use crate::widget::Widget;

/// Shadow depth
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Elevation {
    None,
    #[default]
    Sm,
    Md,
    Lg,
}

impl Elevation {
    /// `box-shadow` value for a resolved mode
    pub fn shadow(self, mode: ResolvedMode) -> &'static str {
        match (mode, self) {
            (_, Elevation::None) => "none",
            (ResolvedMode::Light, Elevation::Sm) => "0 1px 2px rgba(0,0,0,0.06)",
            (ResolvedMode::Light, Elevation::Md) => {
                "0 4px 6px -1px rgba(0,0,0,0.1), 0 2px 4px -1px rgba(0,0,0,0.06)"
            }
            (ResolvedMode::Light, Elevation::Lg) => {
                "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -2px rgba(0,0,0,0.05)"
            }
            (ResolvedMode::Dark, Elevation::Sm) => {
                "0 1px 2px rgba(0,0,0,0.35), inset 0 1px 0 rgba(255,255,255,0.05)"
            }
            (ResolvedMode::Dark, Elevation::Md) => {
                "0 6px 10px -2px rgba(0,0,0,0.45), 0 2px 4px -1px rgba(0,0,0,0.35), inset 0 1px 0 rgba(255,255,255,0.05)"
            }
            (ResolvedMode::Dark, Elevation::Lg) => {
                "0 16px 24px -6px rgba(0,0,0,0.5), 0 6px 12px -2px rgba(0,0,0,0.4), inset 0 1px 0 rgba(255,255,255,0.05)"
            }
        }
    }
}

/// Card container
#[derive(Clone, Debug, Default)]
pub struct Card {
    elevation: Elevation,
    padding: Option<String>,
    children: Vec<Element>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    /// CSS padding, `1rem` when unset
    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

impl Widget for Card {
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError> {
        let theme = scope.use_theme_for("Card")?;
        let mode = theme.resolved_theme();
        let colors = theme.colors();

        let border_step = if mode.is_dark() {
            ScaleStep::S600
        } else {
            ScaleStep::S200
        };
        let border = colors.get(ColorRole::Neutral(border_step)).to_css();

        Ok(Element::new("div")
            .test_id("card")
            .css("background-color", colors.surface.to_css())
            .css("color", colors.text_primary.to_css())
            .css("border", format!("1px solid {border}"))
            .css("border-radius", "0.5rem")
            .css("box-shadow", self.elevation.shadow(mode))
            .css("padding", self.padding.as_deref().unwrap_or("1rem"))
            .children(self.children.iter().cloned()))
    }
}
