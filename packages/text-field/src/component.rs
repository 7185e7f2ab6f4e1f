//! Mounted text field instance.
//!
//! Owns the props of the latest render and the transient UI state. Events
//! go through [`reduce`](crate::reducer::reduce); the resulting effects are
//! turned into handler calls here.

use crate::element::{Element, BASE_CLASS};
use crate::i18n::I18n;
use crate::reducer::reduce;
use crate::theme::Theme;
use crate::types::{Effect, FieldEvent, TextFieldProps, TextFieldState};

/// Ambient resources a field renders with.
#[derive(Debug, Clone, Default)]
pub struct TextFieldContext {
    pub theme: Theme,
    pub i18n: I18n,
}

#[derive(Debug)]
pub struct TextField {
    props: TextFieldProps,
    state: TextFieldState,
    context: TextFieldContext,
}

impl TextField {
    /// Mount with the default light theme and Korean catalogue.
    pub fn mount(props: TextFieldProps) -> Self {
        Self::mount_with(props, &TextFieldContext::default())
    }

    pub fn mount_with(props: TextFieldProps, context: &TextFieldContext) -> Self {
        let state = TextFieldState::with_text(props.value.clone().unwrap_or_default());
        tracing::debug!(
            class_name = ?props.class_name,
            controlled = props.value.is_some(),
            "text field mounted"
        );
        Self {
            props,
            state,
            context: context.clone(),
        }
    }

    /// Re-render with new props.
    ///
    /// A supplied `value` that differs from the previous one replaces the
    /// current text; focus and composition state are kept.
    pub fn set_props(&mut self, props: TextFieldProps) {
        if let Some(value) = &props.value {
            if self.props.value.as_ref() != Some(value) {
                tracing::trace!(value = %value, "controlled value updated");
                self.state.text = value.clone();
            }
        }
        self.props = props;
    }

    /// Deliver one event. Returns the effects that were performed.
    pub fn dispatch(&mut self, event: FieldEvent) -> Vec<Effect> {
        if self.props.disabled {
            tracing::trace!(event = event.dom_type(), "event ignored on disabled field");
            return Vec::new();
        }

        let transition = reduce(&self.state, &event);
        tracing::debug!(
            event = event.dom_type(),
            focused = transition.state.is_focused(),
            composing = transition.state.is_composing(),
            effects = transition.effects.len(),
            "text field transition"
        );
        self.state = transition.state;

        for effect in &transition.effects {
            self.perform(effect);
        }
        transition.effects
    }

    fn perform(&self, effect: &Effect) {
        match effect {
            Effect::Change(text) => {
                if let Some(handler) = &self.props.on_change {
                    handler(text);
                }
            }
            Effect::Enter(text) => {
                if let Some(handler) = &self.props.on_enter {
                    handler(text);
                }
            }
            Effect::Focus => {
                if let Some(handler) = &self.props.on_focus {
                    handler();
                }
            }
            Effect::Blur => {
                if let Some(handler) = &self.props.on_blur {
                    handler();
                }
            }
        }
    }

    pub fn render(&self) -> Element {
        let theme = &self.context.theme;
        let mut element = Element::new("input");

        element.set_attribute("type", "text");
        element.set_attribute("placeholder", self.placeholder());
        element.set_attribute("value", self.state.text.clone());
        if let Some(id) = &self.props.id {
            element.set_attribute("id", id.clone());
        }
        if let Some(name) = &self.props.name {
            element.set_attribute("name", name.clone());
        }
        if self.props.disabled {
            element.set_attribute("disabled", "");
        }

        element.add_classes(BASE_CLASS);
        if let Some(class_name) = &self.props.class_name {
            element.add_classes(class_name);
        }

        let style = &mut element.style;
        style
            .set("border-style", "solid")
            .set("border-radius", "4px")
            .set("padding", "8px 12px")
            .set("outline", "none")
            .set("color-scheme", theme.color_scheme());

        if self.state.is_focused() {
            style
                .set("border-width", "2px")
                .set("border-color", theme.primary.to_css());
        } else {
            style
                .set("border-width", "1px")
                .set("border-color", theme.border.to_css());
        }

        if self.props.disabled {
            style
                .set("color", theme.text_disabled.to_css())
                .set("background-color", theme.background_disabled.to_css());
        } else {
            style
                .set("color", theme.text.to_css())
                .set("background-color", theme.background.to_css());
        }

        tracing::trace!(class = %element.class_name(), "text field rendered");
        element
    }

    /// Placeholder in effect: the caller's, else the catalogue default.
    pub fn placeholder(&self) -> String {
        self.props
            .placeholder
            .clone()
            .unwrap_or_else(|| self.context.i18n.default_placeholder())
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn state(&self) -> &TextFieldState {
        &self.state
    }

    pub fn props(&self) -> &TextFieldProps {
        &self.props
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    pub fn unmount(self) {
        tracing::debug!("text field unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |text: &str| sink.borrow_mut().push(text.to_string()))
    }

    #[test]
    fn test_mount_resets_state() {
        let field = TextField::mount(TextFieldProps::new());
        assert!(!field.state().is_focused());
        assert!(!field.state().is_composing());
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_type_and_enter_invokes_handlers() {
        let (changes, on_change) = recorder();
        let (enters, on_enter) = recorder();
        let mut field = TextField::mount(
            TextFieldProps::new().on_change(on_change).on_enter(on_enter),
        );

        for text in ["t", "te", "tes", "test"] {
            field.dispatch(FieldEvent::Change(text.into()));
        }
        field.dispatch(FieldEvent::KeyDown(Key::Enter));

        assert_eq!(changes.borrow().last().map(String::as_str), Some("test"));
        assert_eq!(enters.borrow().as_slice(), ["test"]);
    }

    #[test]
    fn test_enter_suppressed_while_composing() {
        let (enters, on_enter) = recorder();
        let mut field = TextField::mount(TextFieldProps::new().on_enter(on_enter));

        field.dispatch(FieldEvent::CompositionStart);
        field.dispatch(FieldEvent::Change("test".into()));
        let effects = field.dispatch(FieldEvent::KeyDown(Key::Enter));

        assert!(effects.is_empty());
        assert!(enters.borrow().is_empty());
    }

    #[test]
    fn test_missing_handlers_are_noops() {
        let mut field = TextField::mount(TextFieldProps::new());
        field.dispatch(FieldEvent::Focus);
        field.dispatch(FieldEvent::Change("abc".into()));
        let effects = field.dispatch(FieldEvent::KeyDown(Key::Enter));
        assert_eq!(effects, vec![Effect::Enter("abc".into())]);
    }

    #[test]
    fn test_focus_handler_and_style() {
        let focused = Rc::new(RefCell::new(0));
        let counter = focused.clone();
        let mut field =
            TextField::mount(TextFieldProps::new().on_focus(move || *counter.borrow_mut() += 1));

        field.dispatch(FieldEvent::Focus);
        let element = field.render();
        assert_eq!(*focused.borrow(), 1);
        assert_eq!(element.style.get("border-width"), Some("2px"));
        assert_eq!(element.style.get("border-color"), Some("rgb(25, 118, 210)"));

        field.dispatch(FieldEvent::Blur);
        let element = field.render();
        assert_eq!(element.style.get("border-width"), Some("1px"));
        assert_ne!(element.style.get("border-color"), Some("rgb(25, 118, 210)"));
    }

    #[test]
    fn test_placeholder_default_and_override() {
        let field = TextField::mount(TextFieldProps::new());
        assert_eq!(field.render().placeholder(), Some("텍스트를 입력해 주세요."));

        let field = TextField::mount(TextFieldProps::new().placeholder("상품명을 입력해 주세요."));
        assert_eq!(field.render().placeholder(), Some("상품명을 입력해 주세요."));
    }

    #[test]
    fn test_class_name_appended_to_base() {
        let field = TextField::mount(
            TextFieldProps::new()
                .class_name("custom-class")
                .placeholder("x")
                .disabled(true),
        );
        let element = field.render();
        assert_eq!(element.class_list, vec![BASE_CLASS, "custom-class"]);
    }

    #[test]
    fn test_controlled_value_sync() {
        let mut field = TextField::mount(TextFieldProps::new().value("initial"));
        assert_eq!(field.render().value(), "initial");

        field.dispatch(FieldEvent::Change("edited".into()));
        // Same value prop again: local edit survives
        field.set_props(TextFieldProps::new().value("initial"));
        assert_eq!(field.text(), "edited");

        field.set_props(TextFieldProps::new().value("reset"));
        assert_eq!(field.text(), "reset");
    }

    #[test]
    fn test_set_props_keeps_focus() {
        let mut field = TextField::mount(TextFieldProps::new());
        field.dispatch(FieldEvent::Focus);
        field.set_props(TextFieldProps::new().class_name("late"));
        let element = field.render();
        assert!(element.has_class("late"));
        assert_eq!(element.style.get("border-width"), Some("2px"));
    }

    #[test]
    fn test_disabled_ignores_events() {
        let (changes, on_change) = recorder();
        let mut field = TextField::mount(TextFieldProps::new().disabled(true).on_change(on_change));

        assert!(field.dispatch(FieldEvent::Focus).is_empty());
        assert!(field.dispatch(FieldEvent::Change("x".into())).is_empty());
        assert!(changes.borrow().is_empty());

        let element = field.render();
        assert!(element.is_disabled());
        assert_eq!(element.style.get("border-width"), Some("1px"));
    }

    #[test]
    fn test_mount_with_english_context() {
        let context = TextFieldContext {
            theme: Theme::by_id("dark").unwrap(),
            i18n: I18n::new("en").unwrap(),
        };
        let mut field = TextField::mount_with(TextFieldProps::new(), &context);
        field.dispatch(FieldEvent::Focus);
        let element = field.render();
        assert_eq!(element.placeholder(), Some("Please enter text."));
        assert_eq!(element.style.get("border-color"), Some("rgb(144, 202, 249)"));
        assert_eq!(element.style.get("color-scheme"), Some("dark"));
    }
}
