//! Structured diagnostic messages.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// A single finding about a parameter, port, or generated document.
///
/// `subject` names the element the finding is about (for example
/// `parameter DATA_WIDTH`) so renderers can show it separately from the
/// message text, which already carries the full human-readable sentence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the kind of finding.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The element this diagnostic is about, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Explanatory footnotes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Actionable suggestions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with an explicit severity.
    pub fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            subject: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Sets the element this diagnostic is about.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    const P101: DiagnosticCode = DiagnosticCode::new(Category::Parameter, 101);

    #[test]
    fn create_error() {
        let diag = Diagnostic::error(P101, "no valid name");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "no valid name");
        assert!(diag.subject.is_none());
    }

    #[test]
    fn builder_methods() {
        let diag = Diagnostic::warning(P101, "odd")
            .with_subject("parameter width")
            .with_note("declared here")
            .with_help("rename it");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.subject.as_deref(), Some("parameter width"));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn json_skips_empty_fields() {
        let json = serde_json::to_string(&Diagnostic::error(P101, "x")).unwrap();
        assert!(!json.contains("notes"));
        assert!(!json.contains("subject"));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code, P101);
    }
}
