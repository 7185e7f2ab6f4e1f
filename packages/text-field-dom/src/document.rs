//! Simulated document hosting mounted text fields.
//!
//! Mirrors the parts of a browser document the component relies on: one
//! active element at a time, focus moving between fields, composition being
//! committed when a composing field loses focus.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use text_field::{Element, FieldEvent, TextField, TextFieldContext, TextFieldProps};

use crate::{HarnessError, Result};

/// Handle to a mounted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entry in the document's event log.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchedEvent {
    pub node: NodeId,
    pub event: FieldEvent,
    pub at: DateTime<Utc>,
}

#[derive(Debug)]
struct Node {
    id: NodeId,
    field: TextField,
}

#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
    next_id: usize,
    active: Option<NodeId>,
    context: TextFieldContext,
    log: Vec<DispatchedEvent>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document whose fields render with `context` unless overridden.
    pub fn with_context(context: TextFieldContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    /// Mount a field, appended after existing ones in document order.
    pub fn render(&mut self, props: TextFieldProps) -> NodeId {
        let context = self.context.clone();
        self.render_with(props, &context)
    }

    pub fn render_with(&mut self, props: TextFieldProps, context: &TextFieldContext) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node {
            id,
            field: TextField::mount_with(props, context),
        });
        tracing::debug!(node = %id, "node rendered");
        id
    }

    pub fn rerender(&mut self, id: NodeId, props: TextFieldProps) -> Result<()> {
        self.field_mut(id)?.set_props(props);
        Ok(())
    }

    pub fn unmount(&mut self, id: NodeId) -> Result<()> {
        let position = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or(HarnessError::NoSuchNode(id))?;
        let node = self.nodes.remove(position);
        if self.active == Some(id) {
            self.active = None;
        }
        node.field.unmount();
        Ok(())
    }

    pub fn field(&self, id: NodeId) -> Result<&TextField> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| &n.field)
            .ok_or(HarnessError::NoSuchNode(id))
    }

    fn field_mut(&mut self, id: NodeId) -> Result<&mut TextField> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| &mut n.field)
            .ok_or(HarnessError::NoSuchNode(id))
    }

    /// Current rendering of a node.
    pub fn element(&self, id: NodeId) -> Result<Element> {
        Ok(self.field(id)?.render())
    }

    /// Node ids in document order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    pub fn events(&self) -> &[DispatchedEvent] {
        &self.log
    }

    /// Drop the event log. Node and focus state are untouched.
    pub fn clear_events(&mut self) {
        self.log.clear();
    }

    /// Deliver an event to a node, applying document-level focus rules.
    ///
    /// Focusing a node first blurs the previously active one. Blurring a
    /// composing node first ends its composition. Disabled nodes never
    /// become active.
    pub fn dispatch(&mut self, id: NodeId, event: FieldEvent) -> Result<()> {
        match event {
            FieldEvent::Focus => {
                if self.field(id)?.is_disabled() {
                    return Ok(());
                }
                if let Some(previous) = self.active {
                    if previous != id {
                        self.dispatch(previous, FieldEvent::Blur)?;
                    }
                }
                self.active = Some(id);
            }
            FieldEvent::Blur => {
                if self.field(id)?.state().is_composing() {
                    self.deliver(id, FieldEvent::CompositionEnd)?;
                }
                if self.active == Some(id) {
                    self.active = None;
                }
            }
            _ => {}
        }
        self.deliver(id, event)
    }

    fn deliver(&mut self, id: NodeId, event: FieldEvent) -> Result<()> {
        tracing::trace!(node = %id, event = event.dom_type(), "dispatch");
        self.log.push(DispatchedEvent {
            node: id,
            event: event.clone(),
            at: Utc::now(),
        });
        self.field_mut(id)?.dispatch(event);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| predicate(&n.field.render()))
            .map(|n| n.id)
            .collect()
    }

    fn exactly_one(matches: Vec<NodeId>, query: String) -> Result<NodeId> {
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(HarnessError::NotFound(query)),
            _ => Err(HarnessError::MultipleFound {
                query,
                count: matches.len(),
            }),
        }
    }

    pub fn get_by_placeholder_text(&self, text: &str) -> Result<NodeId> {
        Self::exactly_one(
            self.find_all(|e| e.placeholder() == Some(text)),
            format!("placeholder text: {text}"),
        )
    }

    /// Like [`get_by_placeholder_text`](Self::get_by_placeholder_text) but
    /// `None` when absent.
    pub fn query_by_placeholder_text(&self, text: &str) -> Result<Option<NodeId>> {
        match self.get_by_placeholder_text(text) {
            Ok(id) => Ok(Some(id)),
            Err(HarnessError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get_by_role(&self, role: &str) -> Result<NodeId> {
        Self::exactly_one(self.get_all_by_role(role), format!("role: {role}"))
    }

    pub fn get_all_by_role(&self, role: &str) -> Vec<NodeId> {
        self.find_all(|e| e.role() == Some(role))
    }

    pub fn get_by_display_value(&self, value: &str) -> Result<NodeId> {
        Self::exactly_one(
            self.find_all(|e| e.value() == value),
            format!("display value: {value}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_moves_between_fields() {
        let mut doc = Document::new();
        let first = doc.render(TextFieldProps::new().placeholder("first"));
        let second = doc.render(TextFieldProps::new().placeholder("second"));

        doc.dispatch(first, FieldEvent::Focus).unwrap();
        assert_eq!(doc.active_element(), Some(first));

        doc.dispatch(second, FieldEvent::Focus).unwrap();
        assert_eq!(doc.active_element(), Some(second));
        assert!(!doc.field(first).unwrap().state().is_focused());
        assert!(doc.field(second).unwrap().state().is_focused());
    }

    #[test]
    fn test_blur_ends_composition() {
        let mut doc = Document::new();
        let id = doc.render(TextFieldProps::new());
        doc.dispatch(id, FieldEvent::Focus).unwrap();
        doc.dispatch(id, FieldEvent::CompositionStart).unwrap();
        doc.dispatch(id, FieldEvent::Blur).unwrap();

        assert!(!doc.field(id).unwrap().state().is_composing());
        let types: Vec<_> = doc.events().iter().map(|e| e.event.dom_type()).collect();
        assert_eq!(types, vec!["focus", "compositionstart", "compositionend", "blur"]);
    }

    #[test]
    fn test_clear_events_keeps_focus() {
        let mut doc = Document::new();
        let id = doc.render(TextFieldProps::new());
        doc.dispatch(id, FieldEvent::Focus).unwrap();
        doc.dispatch(id, FieldEvent::Change("abc".into())).unwrap();
        assert_eq!(doc.events().len(), 2);

        doc.clear_events();
        assert!(doc.events().is_empty());
        assert_eq!(doc.active_element(), Some(id));

        doc.dispatch(id, FieldEvent::Blur).unwrap();
        let types: Vec<_> = doc.events().iter().map(|e| e.event.dom_type()).collect();
        assert_eq!(types, vec!["blur"]);
    }

    #[test]
    fn test_disabled_field_never_active() {
        let mut doc = Document::new();
        let id = doc.render(TextFieldProps::new().disabled(true));
        doc.dispatch(id, FieldEvent::Focus).unwrap();
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_queries() {
        let mut doc = Document::new();
        let a = doc.render(TextFieldProps::new().placeholder("상품명을 입력해 주세요."));
        doc.render(TextFieldProps::new().value("filled"));

        assert_eq!(doc.get_by_placeholder_text("상품명을 입력해 주세요.").unwrap(), a);
        assert_eq!(doc.query_by_placeholder_text("missing").unwrap(), None);
        assert!(matches!(
            doc.get_by_role("textbox"),
            Err(HarnessError::MultipleFound { count: 2, .. })
        ));
        assert_eq!(doc.get_all_by_role("textbox").len(), 2);
        assert!(doc.get_by_display_value("filled").is_ok());
    }

    #[test]
    fn test_unmount() {
        let mut doc = Document::new();
        let id = doc.render(TextFieldProps::new());
        doc.dispatch(id, FieldEvent::Focus).unwrap();
        doc.unmount(id).unwrap();

        assert_eq!(doc.active_element(), None);
        assert!(matches!(doc.element(id), Err(HarnessError::NoSuchNode(_))));
        assert!(matches!(doc.unmount(id), Err(HarnessError::NoSuchNode(_))));
    }

    #[test]
    fn test_rerender_updates_class() {
        let mut doc = Document::new();
        let id = doc.render(TextFieldProps::new());
        doc.rerender(id, TextFieldProps::new().class_name("late")).unwrap();
        assert!(doc.element(id).unwrap().has_class("late"));
    }
}
