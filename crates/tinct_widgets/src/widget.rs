//! Base widget trait

use tinct_theme::{ThemeError, ThemeScope};

use crate::element::Element;

/// A themed component
///
/// Rendering reads the resolver from `scope` and fails with
/// [`ThemeError::MissingProvider`] when none was provided.
pub trait Widget {
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError>;
}
