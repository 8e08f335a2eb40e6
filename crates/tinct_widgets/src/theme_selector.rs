//! Light / Dark / System picker

use tinct_theme::{ThemeError, ThemePreference, ThemeScope};

use crate::button::{states, ButtonConfig, ButtonSize, ButtonVariant};
use crate::card::{Card, Elevation};
use crate::element::Element;
use crate::widget::Widget;

/// Card listing the three preferences with the active one highlighted
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeSelector;

impl ThemeSelector {
    pub fn new() -> Self {
        Self
    }

    /// Apply the option a user picked
    pub fn choose(&self, scope: &ThemeScope, preference: ThemePreference) -> Result<(), ThemeError> {
        scope.use_theme_for("ThemeSelector")?.set_theme(preference);
        Ok(())
    }

    /// `"{preference} ({resolved})"`, e.g. `system (dark)`
    pub fn status(&self, scope: &ThemeScope) -> Result<String, ThemeError> {
        let theme = scope.use_theme_for("ThemeSelector")?;
        Ok(format!("{} ({})", theme.theme(), theme.resolved_theme()))
    }
}

impl Widget for ThemeSelector {
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError> {
        let theme = scope.use_theme_for("ThemeSelector")?;
        let active = theme.theme();

        let buttons = ThemePreference::ALL.iter().map(|&preference| {
            let variant = if preference == active {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Outline
            };
            ButtonConfig::new(preference.label())
                .variant(variant)
                .size(ButtonSize::Sm)
                .test_id(format!("theme-option-{}", preference.as_str()))
                .render_state(&theme, states::IDLE)
                .attr("aria-pressed", (preference == active).to_string())
        });

        Card::new()
            .elevation(Elevation::Sm)
            .child(
                Element::new("h3")
                    .css("margin", "0 0 1rem 0")
                    .text("Theme Selector"),
            )
            .child(
                Element::new("p")
                    .test_id("theme-status")
                    .css("margin", "0 0 1rem 0")
                    .css("opacity", "0.7")
                    .text(format!("Current theme: {}", self.status(scope)?)),
            )
            .child(
                Element::new("div")
                    .css("display", "flex")
                    .css("gap", "0.5rem")
                    .css("flex-wrap", "wrap")
                    .children(buttons),
            )
            .render(scope)
    }
}
