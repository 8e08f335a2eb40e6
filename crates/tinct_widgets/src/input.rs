//! Text input with optional label and helper text

use std::fmt;

use tinct_theme::{ColorRole, ScaleStep, ThemeError, ThemeScope};

use crate::button::DISABLED_OPACITY;
use crate::element::{slug, Element};
use crate::widget::Widget;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text input
#[derive(Clone, Debug, Default)]
pub struct Input {
    input_type: InputType,
    id: Option<String>,
    name: Option<String>,
    label: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    helper_text: Option<String>,
    disabled: bool,
    error: bool,
    required: bool,
    full_width: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Explicit element id; derived from the label when omitted
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the value invalid; the helper text becomes an alert
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Id used to wire the label and helper text
    fn input_id(&self) -> Option<String> {
        if let Some(id) = &self.id {
            return Some(id.clone());
        }
        let label = self.label.as_deref()?;
        Some(format!("input-{}", slug(label)))
    }
}

impl Widget for Input {
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError> {
        let theme = scope.use_theme_for("Input")?;
        let dark = theme.resolved_theme().is_dark();
        let colors = theme.colors();

        let input_id = self.input_id();
        let helper_id = self.helper_text.as_ref().map(|_| match &input_id {
            Some(id) => format!("{id}-help"),
            None => "input-help".to_string(),
        });

        let border = if self.error {
            colors.error
        } else {
            let step = if dark { ScaleStep::S600 } else { ScaleStep::S300 };
            colors.get(ColorRole::Neutral(step))
        };
        let background = if dark {
            colors.surface
        } else {
            colors.background
        };
        let width = if self.full_width { "100%" } else { "auto" };

        let mut root = Element::new("div")
            .css("width", width)
            .css("margin", "1rem");

        if let Some(label) = &self.label {
            let text = if self.required {
                format!("{label} *")
            } else {
                label.clone()
            };
            let mut label = Element::new("label")
                .test_id("input-label")
                .css("color", colors.text_primary.to_css())
                .css("font-size", "0.875rem")
                .css("font-weight", "500")
                .css("margin-bottom", "0.25rem")
                .css("display", "block")
                .text(text);
            if let Some(id) = &input_id {
                label = label.attr("for", id.clone());
            }
            root = root.child(label);
        }

        let mut input = Element::new("input")
            .test_id("input")
            .attr("type", self.input_type.as_str())
            .css("font-size", "1rem")
            .css("padding", "0.5rem 1rem")
            .css("border", format!("1px solid {}", border.to_css()))
            .css("border-radius", "0.375rem")
            .css("background-color", background.to_css())
            .css("color", colors.text_primary.to_css())
            .css("width", width)
            .css(
                "opacity",
                if self.disabled { DISABLED_OPACITY } else { "1" },
            )
            .css("cursor", if self.disabled { "not-allowed" } else { "text" })
            .css("outline", "none");

        let optional = [
            ("id", input_id.as_ref()),
            ("name", self.name.as_ref()),
            ("placeholder", self.placeholder.as_ref()),
            ("value", self.value.as_ref()),
            ("aria-describedby", helper_id.as_ref()),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                input = input.attr(name, value.clone());
            }
        }
        if self.disabled {
            input = input.attr("disabled", "");
        }
        if self.required {
            input = input.attr("required", "");
        }
        if self.error {
            input = input.attr("aria-invalid", "true");
        }
        if self.input_type == InputType::Number {
            input = input.attr("inputmode", "numeric").attr("pattern", "[0-9]*");
        }
        root = root.child(input);

        if let Some(text) = &self.helper_text {
            let color = if self.error {
                colors.error
            } else {
                colors.text_secondary
            };
            let mut helper = Element::new("p")
                .test_id("input-helper")
                .css("color", color.to_css())
                .css("font-size", "0.75rem")
                .css("margin-top", "0.25rem")
                .text(text.clone());
            if let Some(id) = helper_id {
                helper = helper.attr("id", id);
            }
            if self.error {
                helper = helper.attr("role", "alert");
            }
            root = root.child(helper);
        }

        Ok(root)
    }
}
