//! Interaction-level driver.
//!
//! Each method produces the sequence of events a browser would dispatch for
//! the corresponding user action: typing clicks the field first, every
//! character is a key-down followed by a change carrying the whole text.

use text_field::{FieldEvent, Key};

use crate::document::{Document, NodeId};
use crate::keyboard::{parse_sequence, KeyToken};
use crate::{HarnessError, Result};

#[derive(Debug, Clone, Default)]
pub struct UserEvent {
    /// Skip the implicit click before typing
    skip_click: bool,
}

impl UserEvent {
    pub fn setup() -> Self {
        Self::default()
    }

    /// Type into an already focused field without clicking it first.
    pub fn skip_click(mut self) -> Self {
        self.skip_click = true;
        self
    }

    fn ensure_interactive(doc: &Document, id: NodeId) -> Result<()> {
        if doc.field(id)?.is_disabled() {
            return Err(HarnessError::NotInteractive(id));
        }
        Ok(())
    }

    /// Focus the field as a pointer click would.
    pub fn click(&self, doc: &mut Document, id: NodeId) -> Result<()> {
        Self::ensure_interactive(doc, id)?;
        if doc.active_element() != Some(id) {
            doc.dispatch(id, FieldEvent::Focus)?;
        }
        Ok(())
    }

    /// Click the field, then type `sequence` (see [`parse_sequence`]).
    pub fn type_text(&self, doc: &mut Document, id: NodeId, sequence: &str) -> Result<()> {
        Self::ensure_interactive(doc, id)?;
        let tokens = parse_sequence(sequence)?;
        if !self.skip_click {
            self.click(doc, id)?;
        }
        tracing::debug!(node = %id, sequence, "typing");
        self.play(doc, id, tokens)
    }

    /// Type `sequence` into whichever field has focus.
    pub fn keyboard(&self, doc: &mut Document, sequence: &str) -> Result<()> {
        let id = doc.active_element().ok_or(HarnessError::NoActiveElement)?;
        let tokens = parse_sequence(sequence)?;
        self.play(doc, id, tokens)
    }

    fn play(&self, doc: &mut Document, id: NodeId, tokens: Vec<KeyToken>) -> Result<()> {
        for token in tokens {
            // A Tab earlier in the sequence may have moved focus away
            let target = doc.active_element().unwrap_or(id);
            match token {
                KeyToken::Char(c) | KeyToken::Press(Key::Character(c)) => {
                    doc.dispatch(target, FieldEvent::KeyDown(Key::Character(c)))?;
                    let mut text = doc.field(target)?.text().to_string();
                    text.push(c);
                    doc.dispatch(target, FieldEvent::Change(text))?;
                }
                KeyToken::Press(Key::Backspace) => {
                    doc.dispatch(target, FieldEvent::KeyDown(Key::Backspace))?;
                    let mut text = doc.field(target)?.text().to_string();
                    if text.pop().is_some() {
                        doc.dispatch(target, FieldEvent::Change(text))?;
                    }
                }
                KeyToken::Press(Key::Tab) => {
                    doc.dispatch(target, FieldEvent::KeyDown(Key::Tab))?;
                    self.tab(doc)?;
                }
                KeyToken::Press(key) => {
                    doc.dispatch(target, FieldEvent::KeyDown(key))?;
                }
            }
        }
        Ok(())
    }

    /// Click the field and delete its content.
    pub fn clear(&self, doc: &mut Document, id: NodeId) -> Result<()> {
        self.click(doc, id)?;
        if !doc.field(id)?.text().is_empty() {
            doc.dispatch(id, FieldEvent::Change(String::new()))?;
        }
        Ok(())
    }

    /// Move focus to the next enabled field in document order, wrapping.
    pub fn tab(&self, doc: &mut Document) -> Result<()> {
        let mut focusable = Vec::new();
        for id in doc.node_ids() {
            if !doc.field(id)?.is_disabled() {
                focusable.push(id);
            }
        }
        if focusable.is_empty() {
            return Ok(());
        }

        let next = match doc.active_element() {
            Some(active) => focusable
                .iter()
                .position(|id| *id == active)
                .map(|i| focusable[(i + 1) % focusable.len()])
                .unwrap_or(focusable[0]),
            None => focusable[0],
        };

        if doc.active_element() != Some(next) {
            doc.dispatch(next, FieldEvent::Focus)?;
        }
        Ok(())
    }

    /// Remove focus from the active field, if any.
    pub fn unfocus(&self, doc: &mut Document) -> Result<()> {
        if let Some(active) = doc.active_element() {
            doc.dispatch(active, FieldEvent::Blur)?;
        }
        Ok(())
    }

    /// Enter `text` through an input method: composition start, one change
    /// per composed character, composition end.
    pub fn compose(&self, doc: &mut Document, id: NodeId, text: &str) -> Result<()> {
        self.click(doc, id)?;
        doc.dispatch(id, FieldEvent::CompositionStart)?;
        let mut current = doc.field(id)?.text().to_string();
        for c in text.chars() {
            current.push(c);
            doc.dispatch(id, FieldEvent::Change(current.clone()))?;
        }
        doc.dispatch(id, FieldEvent::CompositionEnd)
    }
}
