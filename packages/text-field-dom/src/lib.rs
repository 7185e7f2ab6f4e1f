//! Text Field DOM - a simulated document for driving text fields in tests.
//!
//! - **Document**: hosts mounted fields, routes focus, logs dispatched events
//! - **Queries**: find fields by placeholder, role or display value
//! - **fire_event**: deliver single low-level events
//! - **UserEvent**: realistic interaction sequences (typing, tabbing, IME input)
//! - **Assertions / MockFn**: checks on rendered elements and recorded handler calls
//!
//! # Example
//!
//! ```rust
//! use text_field::TextFieldProps;
//! use text_field_dom::{Document, MockFn, UserEvent};
//!
//! # fn main() -> text_field_dom::Result<()> {
//! let on_enter: MockFn<String> = MockFn::new();
//! let mut doc = Document::new();
//! doc.render(TextFieldProps::new().on_enter(on_enter.text_handler()));
//!
//! let input = doc.get_by_role("textbox")?;
//! UserEvent::setup().type_text(&mut doc, input, "test{Enter}")?;
//!
//! on_enter.assert_called_with("test")?;
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod document;
pub mod fire_event;
pub mod keyboard;
pub mod mock;
pub mod user_event;

pub use assertions::ElementAssertions;
pub use document::{DispatchedEvent, Document, NodeId};
pub use keyboard::{parse_sequence, KeyToken};
pub use mock::MockFn;
pub use user_event::UserEvent;

/// Error types for harness operations.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Unable to find an element by {0}")]
    NotFound(String),

    #[error("Found {count} elements by {query}, expected exactly one")]
    MultipleFound { query: String, count: usize },

    #[error("No such node: {0}")]
    NoSuchNode(NodeId),

    #[error("Element {0} is disabled and cannot be interacted with")]
    NotInteractive(NodeId),

    #[error("No element has focus")]
    NoActiveElement,

    #[error("Invalid key sequence: {0}")]
    KeySequence(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error(transparent)]
    Core(#[from] text_field::Error),
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
