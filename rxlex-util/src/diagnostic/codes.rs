//! Diagnostic codes for categorizing lexer and parser errors.
//!
//! # Examples
//!
//! ```
//! use rxlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_BAD_RANGE;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1003");
//! ```

/// A unique code identifying a diagnostic message, `{prefix}{number:04}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer errors (E1xxx) - mirror the error taxonomy in the external
    // interface: repeat intervals, class ranges, unterminated classes,
    // stray non-ASCII bytes.
    pub const E_LEX_REPEAT_TOO_LARGE: Self = Self::new("E", 1001);
    pub const E_LEX_BAD_REPEAT_INTERVAL: Self = Self::new("E", 1002);
    pub const E_LEX_BAD_RANGE: Self = Self::new("E", 1003);
    pub const E_LEX_UNTERMINATED_CLASS: Self = Self::new("E", 1004);
    pub const E_LEX_NON_ASCII: Self = Self::new("E", 1005);
    pub const E_LEX_INVALID_ESCAPE: Self = Self::new("E", 1006);

    // Parser (external collaborator) errors (E2xxx).
    pub const E_PARSE_UNBALANCED_GROUP: Self = Self::new("E", 2001);
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", 2002);

    // Resource errors (E9xxx).
    pub const E_RESOURCE_ALLOC_FAILED: Self = Self::new("E", 9001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const E_LEX_REPEAT_TOO_LARGE: DiagnosticCode = DiagnosticCode::E_LEX_REPEAT_TOO_LARGE;
pub const E_LEX_BAD_REPEAT_INTERVAL: DiagnosticCode = DiagnosticCode::E_LEX_BAD_REPEAT_INTERVAL;
pub const E_LEX_BAD_RANGE: DiagnosticCode = DiagnosticCode::E_LEX_BAD_RANGE;
pub const E_LEX_UNTERMINATED_CLASS: DiagnosticCode = DiagnosticCode::E_LEX_UNTERMINATED_CLASS;
pub const E_LEX_NON_ASCII: DiagnosticCode = DiagnosticCode::E_LEX_NON_ASCII;
pub const E_LEX_INVALID_ESCAPE: DiagnosticCode = DiagnosticCode::E_LEX_INVALID_ESCAPE;
pub const E_PARSE_UNBALANCED_GROUP: DiagnosticCode = DiagnosticCode::E_PARSE_UNBALANCED_GROUP;
pub const E_PARSE_UNEXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN;
pub const E_RESOURCE_ALLOC_FAILED: DiagnosticCode = DiagnosticCode::E_RESOURCE_ALLOC_FAILED;
