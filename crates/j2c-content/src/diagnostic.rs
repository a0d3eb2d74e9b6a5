//! Non-fatal findings reported while reading loosely shaped documents.

use crate::document::ValueKind;

/// A problem found in an input document.
///
/// Only [`Diagnostic::Shape`] stops a pass; every other variant leaves the
/// affected field at its default and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("value of `{key}` should be an object, but is {found}")]
    Shape { key: String, found: ValueKind },

    #[error("`{field}` should be {expected}, but is {found}")]
    FieldType {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("element {index} of `{field}` should be a string, but is {found}")]
    ElementType {
        field: String,
        index: usize,
        found: ValueKind,
    },

    #[error("unexpected key `{key}`")]
    UnknownKey { key: String },

    #[error("class `{found}` differs from expected `{expected}`")]
    ClassMismatch { expected: String, found: String },

    #[error("entry `{key}` skipped: {reason}")]
    Malformed { key: String, reason: String },
}

impl Diagnostic {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}

/// A value paired with the diagnostics raised while reading it.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Checked<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic],
        }
    }

    /// Move the diagnostics into `sink` and return the value.
    pub fn into_value(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }
}
