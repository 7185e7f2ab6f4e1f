//! Single low-level events, delivered as-is.
//!
//! Unlike [`UserEvent`](crate::UserEvent) these do not synthesise the
//! surrounding events a real interaction would produce.

use text_field::{FieldEvent, Key};

use crate::document::{Document, NodeId};
use crate::Result;

/// Replace the node's text with `value`.
pub fn change(doc: &mut Document, id: NodeId, value: &str) -> Result<()> {
    doc.dispatch(id, FieldEvent::Change(value.to_string()))
}

pub fn key_down(doc: &mut Document, id: NodeId, key: Key) -> Result<()> {
    doc.dispatch(id, FieldEvent::KeyDown(key))
}

pub fn focus(doc: &mut Document, id: NodeId) -> Result<()> {
    doc.dispatch(id, FieldEvent::Focus)
}

pub fn blur(doc: &mut Document, id: NodeId) -> Result<()> {
    doc.dispatch(id, FieldEvent::Blur)
}

pub fn composition_start(doc: &mut Document, id: NodeId) -> Result<()> {
    doc.dispatch(id, FieldEvent::CompositionStart)
}

pub fn composition_end(doc: &mut Document, id: NodeId) -> Result<()> {
    doc.dispatch(id, FieldEvent::CompositionEnd)
}
