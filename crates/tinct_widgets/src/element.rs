//! Declarative element descriptions
//!
//! Widgets render into an [`Element`] tree: a tag, attributes, ordered style
//! declarations, text and children. The tree can be inspected directly or
//! materialized into a [`Document`] for interactive use.

use std::fmt;

use indexmap::IndexMap;
use tinct_core::NodeId;
use tinct_dialog::headless::Document;

/// Lowercase ASCII slug for generated ids (`"Email address"` -> `email-address`)
pub(crate) fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Ordered style declarations
///
/// Setting a property again replaces its value in place, so later layers
/// override earlier ones without reordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    declarations: IndexMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.insert(property.to_string(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Style {
    /// Inline CSS (`a: b; c: d`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// A rendered element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// `data-testid` value
    pub test_id: Option<String>,
    pub attrs: IndexMap<String, String>,
    pub style: Style,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn test_id(mut self, id: &str) -> Self {
        self.test_id = Some(id.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn css(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// First element (depth-first, self included) with the given test id
    pub fn find(&self, test_id: &str) -> Option<&Element> {
        if self.test_id.as_deref() == Some(test_id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(test_id))
    }

    /// Every element with the given test id, in document order
    pub fn find_all<'a>(&'a self, test_id: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect(test_id, &mut out);
        out
    }

    fn collect<'a>(&'a self, test_id: &str, out: &mut Vec<&'a Element>) {
        if self.test_id.as_deref() == Some(test_id) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(test_id, out);
        }
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Create this tree in `doc`, detached, and return its root
    pub fn materialize(&self, doc: &Document) -> NodeId {
        let node = doc.create_element(&self.tag);
        if let Some(test_id) = &self.test_id {
            doc.set_attribute(node, "data-testid", test_id);
        }
        for (name, value) in &self.attrs {
            doc.set_attribute(node, name, value);
        }
        if !self.style.is_empty() {
            doc.set_attribute(node, "style", &self.style.to_string());
        }
        if let Some(text) = &self.text {
            doc.set_text(node, text);
        }
        for child in &self.children {
            let child = child.materialize(doc);
            doc.append_child(node, child);
        }
        node
    }
}
