//! Key sequence parsing for typed input.
//!
//! Plain characters type themselves; `{Name}` presses a named key
//! (`{Enter}`, `{Escape}`, `{Tab}`, `{Backspace}`, or any DOM key name);
//! `{{` types a literal `{`.

use text_field::Key;

use crate::{HarnessError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken {
    /// Printable character inserted into the text
    Char(char),
    /// Named key press
    Press(Key),
}

pub fn parse_sequence(sequence: &str) -> Result<Vec<KeyToken>> {
    let mut tokens = Vec::new();
    let mut chars = sequence.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '{' {
            tokens.push(KeyToken::Char(c));
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next();
            tokens.push(KeyToken::Char('{'));
            continue;
        }

        let mut name = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(ch) => name.push(ch),
                None => {
                    return Err(HarnessError::KeySequence(format!(
                        "unclosed '{{{name}' in {sequence:?}"
                    )))
                }
            }
        }

        if name.is_empty() {
            return Err(HarnessError::KeySequence(format!(
                "empty key name in {sequence:?}"
            )));
        }
        tokens.push(KeyToken::Press(Key::from_dom_name(&name)));
    }

    Ok(tokens)
}
