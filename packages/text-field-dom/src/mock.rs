//! Recording stand-ins for component handlers.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::{HarnessError, Result};

/// Records every invocation; clones share the same call log.
#[derive(Debug)]
pub struct MockFn<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for MockFn<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<T> Default for MockFn<T> {
    fn default() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + Debug> MockFn<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: T) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<T> {
        self.calls.borrow().last().cloned()
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Passes if any recorded call equals `expected`.
    pub fn assert_called_with<E>(&self, expected: E) -> Result<()>
    where
        T: PartialEq<E>,
        E: Debug,
    {
        let calls = self.calls.borrow();
        if calls.iter().any(|c| *c == expected) {
            Ok(())
        } else {
            Err(HarnessError::Assertion(format!(
                "expected a call with {expected:?}, recorded calls: {calls:?}"
            )))
        }
    }

    /// Passes if the most recent call equals `expected`.
    pub fn assert_last_called_with<E>(&self, expected: E) -> Result<()>
    where
        T: PartialEq<E>,
        E: Debug,
    {
        match self.calls.borrow().last() {
            Some(last) if *last == expected => Ok(()),
            last => Err(HarnessError::Assertion(format!(
                "expected last call with {expected:?}, got {last:?}"
            ))),
        }
    }

    pub fn assert_called_times(&self, times: usize) -> Result<()> {
        let count = self.call_count();
        if count == times {
            Ok(())
        } else {
            Err(HarnessError::Assertion(format!(
                "expected {times} call(s), recorded {count}: {:?}",
                self.calls.borrow()
            )))
        }
    }

    pub fn assert_not_called(&self) -> Result<()> {
        self.assert_called_times(0)
    }
}

impl MockFn<String> {
    /// Handler for `on_change` / `on_enter` props.
    pub fn text_handler(&self) -> impl Fn(&str) + 'static {
        let calls = Rc::clone(&self.calls);
        move |text: &str| calls.borrow_mut().push(text.to_string())
    }
}

impl MockFn<()> {
    /// Handler for `on_focus` / `on_blur` props.
    pub fn focus_handler(&self) -> impl Fn() + 'static {
        let calls = Rc::clone(&self.calls);
        move || calls.borrow_mut().push(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_text_calls() {
        let mock: MockFn<String> = MockFn::new();
        let handler = mock.text_handler();
        handler("a");
        handler("ab");

        assert_eq!(mock.calls(), vec!["a".to_string(), "ab".to_string()]);
        assert_eq!(mock.last_call().as_deref(), Some("ab"));
        assert!(mock.assert_called_with("a").is_ok());
        assert!(mock.assert_last_called_with("ab").is_ok());
        assert!(mock.assert_last_called_with("a").is_err());
        assert!(mock.assert_called_times(2).is_ok());
    }

    #[test]
    fn test_clones_share_log() {
        let mock: MockFn<()> = MockFn::new();
        let clone = mock.clone();
        (clone.focus_handler())();
        assert_eq!(mock.call_count(), 1);
        mock.reset();
        assert!(clone.assert_not_called().is_ok());
    }

    #[test]
    fn test_failure_message() {
        let mock: MockFn<String> = MockFn::new();
        let err = mock.assert_called_with("x").unwrap_err();
        assert!(err.to_string().contains("expected a call with \"x\""));
    }
}
