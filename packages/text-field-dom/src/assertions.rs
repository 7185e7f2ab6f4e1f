//! Matchers for rendered elements, failing with `HarnessError::Assertion`.

use text_field::Element;

use crate::document::{Document, NodeId};
use crate::{HarnessError, Result};

pub trait ElementAssertions {
    fn assert_has_class(&self, class: &str) -> Result<()>;
    fn assert_attribute(&self, name: &str, expected: &str) -> Result<()>;
    fn assert_style(&self, property: &str, expected: &str) -> Result<()>;
    /// Passes when `property` is unset or set to something other than `value`.
    fn assert_not_style(&self, property: &str, value: &str) -> Result<()>;
    fn assert_value(&self, expected: &str) -> Result<()>;
}

fn fail(message: String) -> Result<()> {
    Err(HarnessError::Assertion(message))
}

impl ElementAssertions for Element {
    fn assert_has_class(&self, class: &str) -> Result<()> {
        if self.has_class(class) {
            Ok(())
        } else {
            fail(format!(
                "expected class {class:?} in [{}]",
                self.class_name()
            ))
        }
    }

    fn assert_attribute(&self, name: &str, expected: &str) -> Result<()> {
        match self.attribute(name) {
            Some(actual) if actual == expected => Ok(()),
            actual => fail(format!(
                "expected attribute {name}={expected:?}, got {actual:?}"
            )),
        }
    }

    fn assert_style(&self, property: &str, expected: &str) -> Result<()> {
        match self.style.get(property) {
            Some(actual) if actual == expected => Ok(()),
            actual => fail(format!(
                "expected style {property}: {expected}, got {actual:?} (style: {})",
                self.style.to_css()
            )),
        }
    }

    fn assert_not_style(&self, property: &str, value: &str) -> Result<()> {
        if self.style.get(property) == Some(value) {
            fail(format!("expected style without {property}: {value}"))
        } else {
            Ok(())
        }
    }

    fn assert_value(&self, expected: &str) -> Result<()> {
        if self.value() == expected {
            Ok(())
        } else {
            fail(format!(
                "expected value {expected:?}, got {:?}",
                self.value()
            ))
        }
    }
}

impl Document {
    pub fn assert_focused(&self, id: NodeId) -> Result<()> {
        if self.active_element() == Some(id) {
            Ok(())
        } else {
            fail(format!(
                "expected {id} to have focus, active element is {:?}",
                self.active_element()
            ))
        }
    }
}
