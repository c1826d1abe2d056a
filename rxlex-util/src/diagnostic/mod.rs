//! Diagnostic infrastructure: error/warning/note/help reporting.
//!
//! This is the *ambient* diagnostic channel, separate from the regex
//! lexer's own first-wins `first_error` slot (see `rxlex_lex::env`). The
//! two serve different audiences: the `Handler` here accumulates a full
//! diagnostic history for tooling and tests to inspect; the lexer's own
//! environment captures only the first lexical error, as the external
//! interface contract requires.
//!
//! # Examples
//!
//! ```
//! use rxlex_util::diagnostic::{DiagnosticBuilder, Span, DiagnosticCode};
//!
//! let diag = DiagnosticBuilder::error("bad repeat interval")
//!     .code(DiagnosticCode::E_LEX_BAD_REPEAT_INTERVAL)
//!     .span(Span::DUMMY)
//!     .help("swap the bounds")
//!     .build();
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{
    E_LEX_BAD_RANGE, E_LEX_BAD_REPEAT_INTERVAL, E_LEX_INVALID_ESCAPE, E_LEX_NON_ASCII,
    E_LEX_REPEAT_TOO_LARGE, E_LEX_UNTERMINATED_CLASS, E_PARSE_UNBALANCED_GROUP,
    E_PARSE_UNEXPECTED_TOKEN, E_RESOURCE_ALLOC_FAILED,
};

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

/// Collects diagnostics emitted during one `parse_regex` invocation.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: RefCell<bool>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: RefCell::new(false),
        }
    }

    /// A handler that panics as soon as an error is emitted, for tests that
    /// want to fail fast at the point of the bug rather than at an assertion.
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: RefCell::new(true),
        }
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if *self.panic_on_error.borrow() && diagnostic.level == Level::Error {
            panic!("diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Warning).count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn diagnostic_error_and_warning() {
        assert_eq!(Diagnostic::error("x", Span::DUMMY).level, Level::Error);
        assert_eq!(Diagnostic::warning("x", Span::DUMMY).level, Level::Warning);
    }

    #[test]
    fn diagnostic_with_note_and_help() {
        let diag = Diagnostic::error("bad range", Span::DUMMY)
            .with_note("end < start")
            .with_help("swap bounds");
        assert_eq!(diag.notes, vec!["end < start"]);
        assert_eq!(diag.helps, vec!["swap bounds"]);
    }

    #[test]
    fn handler_starts_clean() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn handler_emit_diagnostic() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("bad range", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn handler_clear() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("x", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
    }

    #[test]
    fn handler_panicking() {
        let handler = Handler::new_panicking();
        let result = std::panic::catch_unwind(|| {
            handler.emit_diagnostic(Diagnostic::error("x", Span::DUMMY));
        });
        assert!(result.is_err());
    }

    #[test]
    fn handler_build_error_with_code() {
        let handler = Handler::new();
        handler
            .build_error(Span::DUMMY, "bad repeat interval")
            .code(DiagnosticCode::E_LEX_BAD_REPEAT_INTERVAL)
            .emit(&handler);

        assert!(handler.has_errors());
        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEX_BAD_REPEAT_INTERVAL));
    }
}
