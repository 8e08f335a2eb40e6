//! Button widget with FSM-driven interactions
//!
//! Visual states: idle, hovered, pressed, disabled. Colors come from the
//! resolved palette; hover and pressed states shift along the variant's
//! scale.

use tinct_core::fsm::StateMachine;
use tinct_core::{event_types, Event};
use tinct_theme::{ColorRole, ScaleStep, ThemeError, ThemeScope, UseTheme};
use tracing::trace;

use crate::element::Element;
use crate::widget::Widget;

/// Button states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const HOVERED: u32 = 1;
    pub const PRESSED: u32 = 2;
    pub const DISABLED: u32 = 3;
}

/// Opacity applied to disabled controls
pub const DISABLED_OPACITY: &str = "0.6";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn font_size(self) -> &'static str {
        match self {
            ButtonSize::Sm => "0.875rem",
            ButtonSize::Md => "1rem",
            ButtonSize::Lg => "1.125rem",
        }
    }

    fn padding(self) -> &'static str {
        match self {
            ButtonSize::Sm => "0.25rem 0.5rem",
            ButtonSize::Md => "0.5rem 1rem",
            ButtonSize::Lg => "1rem 1.5rem",
        }
    }
}

/// Button configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonConfig {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub full_width: bool,
    /// Accessible name when the label is not descriptive
    pub aria_label: Option<String>,
    pub test_id: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            full_width: false,
            aria_label: None,
            test_id: "button".to_string(),
        }
    }
}

impl ButtonConfig {
    /// Create a new button config with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }

    /// Render in a given interaction state
    pub fn render_state(&self, theme: &UseTheme, state: u32) -> Element {
        let colors = theme.colors();
        let primary = |step| colors.get(ColorRole::Primary(step)).to_css();
        let neutral = |step| colors.get(ColorRole::Neutral(step)).to_css();
        let disabled = self.disabled || state == states::DISABLED;

        let (background, color, border) = match self.variant {
            ButtonVariant::Primary => (
                primary(ScaleStep::S500),
                "#ffffff".to_string(),
                "transparent".to_string(),
            ),
            ButtonVariant::Secondary => (
                neutral(ScaleStep::S200),
                colors.text_primary.to_css(),
                "transparent".to_string(),
            ),
            ButtonVariant::Outline => (
                "transparent".to_string(),
                primary(ScaleStep::S500),
                primary(ScaleStep::S500),
            ),
            ButtonVariant::Ghost => (
                "transparent".to_string(),
                primary(ScaleStep::S500),
                "transparent".to_string(),
            ),
        };

        let mut element = Element::new("button")
            .test_id(&self.test_id)
            .attr("type", "button")
            .css("display", "inline-flex")
            .css("align-items", "center")
            .css("justify-content", "center")
            .css("border", "1px solid transparent")
            .css("border-radius", "0.375rem")
            .css("cursor", if disabled { "not-allowed" } else { "pointer" })
            .css("width", if self.full_width { "100%" } else { "auto" })
            .css("opacity", if disabled { DISABLED_OPACITY } else { "1" })
            .css("pointer-events", if disabled { "none" } else { "auto" })
            .css("font-size", self.size.font_size())
            .css("padding", self.size.padding())
            .css("background-color", background)
            .css("color", color)
            .css("border-color", border)
            .text(self.label.clone());

        if !disabled {
            match state {
                states::HOVERED => {
                    let hover = match self.variant {
                        ButtonVariant::Primary => primary(ScaleStep::S600),
                        ButtonVariant::Secondary => neutral(ScaleStep::S300),
                        ButtonVariant::Outline | ButtonVariant::Ghost => primary(ScaleStep::S50),
                    };
                    element = element.css("background-color", hover);
                }
                states::PRESSED => {
                    let active = match self.variant {
                        ButtonVariant::Primary => primary(ScaleStep::S700),
                        ButtonVariant::Secondary => neutral(ScaleStep::S400),
                        ButtonVariant::Outline | ButtonVariant::Ghost => primary(ScaleStep::S100),
                    };
                    element = element
                        .css("background-color", active)
                        .css("transform", "translateY(1px)");
                }
                _ => {}
            }
        }

        if disabled {
            element = element.attr("disabled", "");
        }
        if let Some(label) = &self.aria_label {
            element = element.attr("aria-label", label.clone());
        }
        element
    }
}

impl Widget for ButtonConfig {
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError> {
        let theme = scope.use_theme_for("Button")?;
        let state = if self.disabled {
            states::DISABLED
        } else {
            states::IDLE
        };
        Ok(self.render_state(&theme, state))
    }
}

/// Interactive button
pub struct Button {
    config: ButtonConfig,
    fsm: StateMachine,
    /// Whether the button was clicked (cleared after reading)
    clicked: bool,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    /// Create a new button
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(ButtonConfig::new(label))
    }

    /// Create a button with custom config
    pub fn with_config(config: ButtonConfig) -> Self {
        let fsm = Self::create_fsm(&config);
        Self {
            config,
            fsm,
            clicked: false,
            on_click: None,
        }
    }

    fn create_fsm(config: &ButtonConfig) -> StateMachine {
        if config.disabled {
            // Disabled button has no transitions
            StateMachine::builder(states::DISABLED).build()
        } else {
            StateMachine::builder(states::IDLE)
                .on(states::IDLE, event_types::POINTER_ENTER, states::HOVERED)
                .on(states::HOVERED, event_types::POINTER_LEAVE, states::IDLE)
                .on(states::HOVERED, event_types::POINTER_DOWN, states::PRESSED)
                .on(states::PRESSED, event_types::POINTER_UP, states::HOVERED)
                .on(states::PRESSED, event_types::POINTER_LEAVE, states::IDLE)
                .build()
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Current interaction state
    pub fn state(&self) -> u32 {
        self.fsm.current_state()
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Handle a pointer event
    pub fn handle_event(&mut self, event: &Event) {
        if self.config.disabled {
            return;
        }

        let old_state = self.fsm.current_state();
        let new_state = self.fsm.send(event.event_type);

        // Release over the button completes a click
        if old_state == states::PRESSED && new_state == states::HOVERED {
            trace!(label = %self.config.label, "button clicked");
            self.clicked = true;
            if let Some(callback) = self.on_click.as_mut() {
                callback();
            }
        }
    }

    /// Check if the button was clicked (and clear the flag)
    pub fn was_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }
}

impl Widget for Button {
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError> {
        let theme = scope.use_theme_for("Button")?;
        Ok(self.config.render_state(&theme, self.state()))
    }
}
