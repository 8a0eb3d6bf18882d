//! Parser diagnostics
//!
//! Errors are accumulated side effects: the grammar reports them through the
//! [`Diagnostics`] sink and keeps parsing along the best-available path.
//! There is no fatal error class anywhere in this core.
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Delimiter errors (parentheses, brackets)
//! - E03xx: Declaration errors (define, type, constant)
//! - E04xx: Expression errors
//! - E05xx: Statement errors
//! - E09xx: Generic/fallback errors

use std::fmt;

use text_size::{TextRange, TextSize};

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,

    // =========================================================================
    // E02xx: Delimiter errors
    // =========================================================================
    /// Missing right parenthesis
    E0201,
    /// Missing right bracket
    E0202,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Name defined more than once in the same scope
    E0302,
    /// Missing type in declaration
    E0303,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Expression required but none found
    E0401,
    /// Unexpected token not in the caller's break set
    E0402,
    /// Incomplete operator (`!` without `=`, `|` without `|`)
    E0403,
    /// `IS` not followed by optional `NOT` then `NULL`
    E0404,
    /// `NOT` not followed by `LIKE`, `MATCHES`, or `IN`
    E0405,
    /// `?` placeholder in an invalid position
    E0406,

    // =========================================================================
    // E05xx: Statement errors
    // =========================================================================
    /// Missing keyword (`THEN`, `END IF`, `END MAIN`, ...)
    E0501,
    /// Unexpected token where a statement was expected
    E0502,
    /// Malformed VALIDATE target (`LIKE table.column` expected)
    E0503,
    /// Construct not terminated before end of file
    E0504,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Generic syntax error
    E0901,
}

impl ErrorCode {
    /// Default message used when no specific message is supplied.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::E0101 => "invalid token",
            Self::E0201 => "missing right parenthesis",
            Self::E0202 => "missing right bracket",
            Self::E0301 => "expected a name",
            Self::E0302 => "defined more than once",
            Self::E0303 => "expected a type",
            Self::E0401 => "expression required",
            Self::E0402 => "unexpected token in expression",
            Self::E0403 => "incomplete operator",
            Self::E0404 => "expected NULL after IS",
            Self::E0405 => "expected LIKE, MATCHES, or IN after NOT",
            Self::E0406 => "'?' is not valid here",
            Self::E0501 => "missing keyword",
            Self::E0502 => "expected a statement",
            Self::E0504 => "unterminated construct",
            Self::E0503 => "expected LIKE table.column",
            Self::E0901 => "syntax error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A grammar expectation was violated
    #[default]
    Error,
    /// A defect that does not prevent analysis
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A syntax error with location and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Error severity
    pub severity: Severity,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
        }
    }

    /// Create an error at a specific offset with zero-width range.
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Format the error for display.
    pub fn format(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

/// Append-only diagnostic sink.
///
/// Reporting never fails and never halts the caller; the sink is drained
/// once parsing of the whole unit completes.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<SyntaxError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a syntax error and continue.
    pub fn report(&mut self, message: impl Into<String>, range: TextRange, code: ErrorCode) {
        self.errors.push(SyntaxError::new(message, range, code));
    }

    /// Record an error using the code's default message.
    pub fn report_code(&mut self, range: TextRange, code: ErrorCode) {
        self.errors.push(SyntaxError::new(code.default_message(), range, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyntaxError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<SyntaxError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accumulates() {
        let mut diags = Diagnostics::new();
        diags.report("expected THEN", TextRange::empty(TextSize::new(4)), ErrorCode::E0501);
        diags.report_code(TextRange::empty(TextSize::new(9)), ErrorCode::E0401);
        assert_eq!(diags.len(), 2);
        let errors = diags.into_vec();
        assert_eq!(errors[1].message, "expression required");
    }

    #[test]
    fn test_format() {
        let err = SyntaxError::at_offset("expected THEN", TextSize::new(0), ErrorCode::E0501);
        assert_eq!(err.format(), "E0501: expected THEN");
        assert!(err.severity.is_error());
        assert_eq!(err.severity.as_str(), "error");
        assert_eq!(Severity::Warning.as_str(), "warning");
    }
}
