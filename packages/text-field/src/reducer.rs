//! Pure state transitions for the text field.
//!
//! Each event maps to one transition from the current state to a new state
//! plus the list of effects the host should perform. Nothing here touches
//! handlers; `TextField::dispatch` does that.

use crate::types::{CompositionState, Effect, FieldEvent, FocusState, Key, TextFieldState};

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TextFieldState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &TextFieldState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Apply `event` to `state`.
pub fn reduce(state: &TextFieldState, event: &FieldEvent) -> Transition {
    match event {
        FieldEvent::Change(text) => Transition {
            state: TextFieldState {
                text: text.clone(),
                ..state.clone()
            },
            effects: vec![Effect::Change(text.clone())],
        },

        FieldEvent::KeyDown(Key::Enter) => {
            // Enter during composition confirms the IME candidate, not the field
            if state.is_composing() {
                Transition::unchanged(state)
            } else {
                Transition {
                    state: state.clone(),
                    effects: vec![Effect::Enter(state.text.clone())],
                }
            }
        }

        FieldEvent::KeyDown(_) => Transition::unchanged(state),

        FieldEvent::CompositionStart => Transition {
            state: TextFieldState {
                composition: CompositionState::Composing,
                ..state.clone()
            },
            effects: Vec::new(),
        },

        FieldEvent::CompositionEnd => Transition {
            state: TextFieldState {
                composition: CompositionState::Idle,
                ..state.clone()
            },
            effects: Vec::new(),
        },

        FieldEvent::Focus => Transition {
            state: TextFieldState {
                focus: FocusState::Focused,
                ..state.clone()
            },
            effects: vec![Effect::Focus],
        },

        FieldEvent::Blur => Transition {
            state: TextFieldState {
                focus: FocusState::Unfocused,
                ..state.clone()
            },
            effects: vec![Effect::Blur],
        },
    }
}
