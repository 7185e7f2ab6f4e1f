//! Rendered element model.
//!
//! A render produces one `<input>` element description: attributes, the
//! computed class list and the computed style. Hosts (the simulated DOM,
//! the CLI) inspect or serialise it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Class always present on a rendered field.
pub const BASE_CLASS: &str = "text-field";

/// Computed style, CSS property name to value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        self.0.insert(property.to_string(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inline `style` attribute form, e.g. `border-width: 2px; outline: none`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub class_list: Vec<String>,
    pub style: Style,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            class_list: Vec::new(),
            style: Style::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    /// Append each whitespace-separated token, skipping duplicates.
    pub fn add_classes(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            if !self.has_class(token) {
                self.class_list.push(token.to_string());
            }
        }
    }

    /// The `class` attribute value.
    pub fn class_name(&self) -> String {
        self.class_list.join(" ")
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.attribute("placeholder")
    }

    pub fn value(&self) -> &str {
        self.attribute("value").unwrap_or("")
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    /// ARIA role implied by the tag and type.
    pub fn role(&self) -> Option<&'static str> {
        match (self.tag.as_str(), self.attribute("type").unwrap_or("text")) {
            ("input", "text" | "search" | "email" | "tel" | "url") => Some("textbox"),
            _ => None,
        }
    }
}
