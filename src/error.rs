use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity.
///
/// Variants are ordered from most to least severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// The model cannot be processed any further.
    Fatal,
    /// The model is invalid for building.
    Error,
    /// The model is usable but violates best practice.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        })
    }
}

/// A single reported rule violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Receives diagnostics from the validators, in rule execution order.
pub trait DiagnosticSink {
    fn fatal(&mut self, message: String);

    fn error(&mut self, message: String);

    fn warning(&mut self, message: String);

    /// Dispatches to the method matching `severity`.
    fn record(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Fatal => self.fatal(message),
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn fatal(&mut self, message: String) {
        self.push(Diagnostic {
            severity: Severity::Fatal,
            message,
        });
    }

    fn error(&mut self, message: String) {
        self.push(Diagnostic {
            severity: Severity::Error,
            message,
        });
    }

    fn warning(&mut self, message: String) {
        self.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }
}

/// Ordered collection of diagnostics produced by one or more validation runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when nothing fatal or erroneous was recorded. Warnings never
    /// make a model invalid.
    pub fn is_valid(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| d.severity == Severity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Messages of the given severity, in the order they were recorded.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.as_str())
            .collect()
    }

    pub fn fatals(&self) -> Vec<&str> {
        self.messages(Severity::Fatal)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warning)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticSink for ValidationResult {
    fn fatal(&mut self, message: String) {
        self.diagnostics.fatal(message);
    }

    fn error(&mut self, message: String) {
        self.diagnostics.error(message);
    }

    fn warning(&mut self, message: String) {
        self.diagnostics.warning(message);
    }
}

/// Error kind for loader failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
}

/// Produced by [`crate::parse::parse`] when a descriptor cannot be read into a
/// [`crate::Model`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

/// Combined error type for the [`crate::load`] entry point.
#[derive(Clone, Debug, thiserror::Error)]
pub enum LoadError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("model is invalid: {} fatal, {} error(s)", .0.count(Severity::Fatal), .0.count(Severity::Error))]
    Invalid(ValidationResult),
}
