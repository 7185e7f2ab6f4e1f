//! Core data types for the text field component.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Handler receiving the field's full text.
pub type TextHandler = Rc<dyn Fn(&str)>;

/// Handler with no payload (focus / blur notifications).
pub type FocusHandler = Rc<dyn Fn()>;

// ============================================================================
// Props
// ============================================================================

/// Caller-supplied properties, immutable for the duration of one render.
///
/// Every handler slot is optional. An absent handler means the corresponding
/// notification is simply dropped.
#[derive(Clone, Default)]
pub struct TextFieldProps {
    /// Current text for controlled usage
    pub value: Option<String>,
    /// Placeholder override; the localized default is used when `None`
    pub placeholder: Option<String>,
    /// Extra class tokens appended after the base class
    pub class_name: Option<String>,
    /// `id` attribute of the rendered input
    pub id: Option<String>,
    /// `name` attribute of the rendered input
    pub name: Option<String>,
    /// Disabled fields ignore every event
    pub disabled: bool,
    pub on_change: Option<TextHandler>,
    pub on_enter: Option<TextHandler>,
    pub on_focus: Option<FocusHandler>,
    pub on_blur: Option<FocusHandler>,
}

impl TextFieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_enter(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_enter = Some(Rc::new(handler));
        self
    }

    pub fn on_focus(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_focus = Some(Rc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_blur = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for TextFieldProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldProps")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("class_name", &self.class_name)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("disabled", &self.disabled)
            .field("on_change", &self.on_change.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

// ============================================================================
// Transient UI state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
}

/// IME composition phase. Enter commits are gated while `Composing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionState {
    #[default]
    Idle,
    Composing,
}

/// Local state owned by a mounted field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextFieldState {
    pub text: String,
    pub focus: FocusState,
    pub composition: CompositionState,
}

impl TextFieldState {
    /// Fresh mount state with the given initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus == FocusState::Focused
    }

    pub fn is_composing(&self) -> bool {
        self.composition == CompositionState::Composing
    }
}

// ============================================================================
// Events and effects
// ============================================================================

/// Key carried by a key-down event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Backspace,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` name.
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }

    /// The DOM `KeyboardEvent.key` name for this key.
    pub fn dom_name(&self) -> String {
        match self {
            Key::Enter => "Enter".to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Character(c) => c.to_string(),
            Key::Other(name) => name.clone(),
        }
    }
}

/// Events delivered to a field by its host, strictly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FieldEvent {
    /// Text content replaced; carries the full new text
    Change(String),
    KeyDown(Key),
    Focus,
    Blur,
    CompositionStart,
    CompositionEnd,
}

impl FieldEvent {
    /// DOM event type name, e.g. `"compositionstart"`.
    pub fn dom_type(&self) -> &'static str {
        match self {
            FieldEvent::Change(_) => "change",
            FieldEvent::KeyDown(_) => "keydown",
            FieldEvent::Focus => "focus",
            FieldEvent::Blur => "blur",
            FieldEvent::CompositionStart => "compositionstart",
            FieldEvent::CompositionEnd => "compositionend",
        }
    }
}

/// Side effects requested by a transition, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Effect {
    Change(String),
    Enter(String),
    Focus,
    Blur,
}
