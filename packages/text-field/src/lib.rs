//! Text Field - a headless, controlled single-line text input.
//!
//! This crate provides the component core, independent of any renderer:
//!
//! - **Props**: value, placeholder, class name and optional event handlers
//! - **State machines**: focus (`Unfocused`/`Focused`) and IME composition (`Idle`/`Composing`)
//! - **Reducer**: pure `(state, event) -> (state, effects)` transitions
//! - **Rendering**: a serialisable `<input>` element with class list and computed style
//! - **Theme / i18n / config**: colour presets, placeholder catalogues, TOML settings
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use text_field::{FieldEvent, Key, TextField, TextFieldProps};
//!
//! let committed = Rc::new(RefCell::new(Vec::new()));
//! let sink = committed.clone();
//!
//! let mut field = TextField::mount(
//!     TextFieldProps::new()
//!         .class_name("search")
//!         .on_enter(move |text: &str| sink.borrow_mut().push(text.to_string())),
//! );
//!
//! field.dispatch(FieldEvent::Change("test".into()));
//! field.dispatch(FieldEvent::KeyDown(Key::Enter));
//!
//! assert_eq!(committed.borrow().as_slice(), ["test"]);
//! assert!(field.render().has_class("search"));
//! ```

pub mod component;
pub mod config;
pub mod element;
pub mod i18n;
pub mod reducer;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use component::{TextField, TextFieldContext};
pub use config::{Config, LocaleSetting, LoggingConfig};
pub use element::{Element, Style, BASE_CLASS};
pub use i18n::{
    detect_locale, detect_locale_from, is_supported, I18n, DEFAULT_LOCALE, FALLBACK_LOCALE,
    NAMED_PLACEHOLDER_KEY, PLACEHOLDER_KEY,
};
pub use reducer::{reduce, Transition};
pub use theme::{Rgba, Theme};
pub use types::{
    CompositionState, Effect, FieldEvent, FocusHandler, FocusState, Key, TextFieldProps,
    TextFieldState, TextHandler,
};

/// Error types for text-field operations.
///
/// Event handling itself never fails; these cover loading settings and
/// resources around the component.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Result type for text-field operations.
pub type Result<T> = std::result::Result<T, Error>;
