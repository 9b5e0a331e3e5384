//! Diagnostic rendering.
//!
//! Every Core run produces at most one diagnostic: the pipeline is
//! fail-fast with no recovery (`SPEC_FULL.md` §7), so there is no need for
//! the accumulating, multi-note, caret-underline diagnostic builder a
//! larger compiler would want. This module is a thin wrapper that gives a
//! [`CoreError`] a severity [`Level`] and the one-line textual form the
//! driver prints to standard error.

use crate::error::CoreError;
use std::fmt;

/// Diagnostic severity.
///
/// Every diagnostic the pipeline produces is fatal, so `Error` is the only
/// level the four spec-defined kinds ever use; `Level` still exists as its
/// own type (rather than being folded away) so a future, non-fatal
/// diagnostic (e.g. a style lint) has somewhere to plug in without
/// reshaping the error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A single rendered diagnostic line, ready to print to standard error.
#[derive(Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    /// Render a [`CoreError`] into the diagnostic line the source's own
    /// interpreter would have printed. Lexical, syntactic, and
    /// context-sensitive errors get an `Error! ` prefix; runtime errors and
    /// I/O failures already carry their own prefix (or need none).
    pub fn from_error(err: &CoreError) -> Self {
        use crate::error::ErrorKind;
        let message = match err.kind() {
            Some(ErrorKind::Lexical) | Some(ErrorKind::Syntax) | Some(ErrorKind::Scope) => {
                format!("Error! {err}")
            }
            Some(ErrorKind::Runtime) | None => err.to_string(),
        };
        Diagnostic {
            level: Level::Error,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScopeStatus;
    use crate::span::Line;

    #[test]
    fn lexical_diagnostic_gets_error_prefix() {
        let err = CoreError::Lexical {
            file: "p".into(),
            line: Line(1),
            prefix: "12A".into(),
        };
        let diag = Diagnostic::from_error(&err);
        assert!(diag.message.starts_with("Error! File"));
    }

    #[test]
    fn runtime_diagnostic_keeps_its_own_prefix() {
        let err = CoreError::DataEof { file: "d".into() };
        let diag = Diagnostic::from_error(&err);
        assert!(diag.message.starts_with("Runtime error!"));
        assert!(!diag.message.starts_with("Error! Runtime"));
    }

    #[test]
    fn scope_diagnostic_shape() {
        let err = CoreError::Scope {
            file: "p".into(),
            line: Line(4),
            name: "X".into(),
            status: ScopeStatus::NotDeclared,
        };
        let diag = Diagnostic::from_error(&err);
        assert_eq!(
            diag.message,
            "Error! File \"p\", line 4: identifier \"X\" has not been declared!"
        );
    }
}
