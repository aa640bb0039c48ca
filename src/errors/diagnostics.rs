//! Sinks for semantic diagnostics.
//!
//! The checker hands every problem it finds to an [`ErrorSink`] as a
//! `(line, message)` pair and keeps going; what happens to the message is up
//! to the sink.

use std::{fmt::Display, slice::Iter};

pub trait ErrorSink {
    fn error(&mut self, line: u32, message: String);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.message)
    }
}

/// Collects diagnostics in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { items: vec![] }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.items.iter().map(|diagnostic| diagnostic.message.as_str()).collect()
    }

    /// Number of diagnostics whose message contains `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.items.iter().filter(|diagnostic| diagnostic.message.contains(needle)).count()
    }
}

impl ErrorSink for Diagnostics {
    fn error(&mut self, line: u32, message: String) {
        self.items.push(Diagnostic { line, message });
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Forwards each diagnostic to a callback as it is reported.
pub struct CallbackSink<F: FnMut(u32, &str)>(pub F);

impl<F: FnMut(u32, &str)> ErrorSink for CallbackSink<F> {
    fn error(&mut self, line: u32, message: String) {
        (self.0)(line, &message)
    }
}
