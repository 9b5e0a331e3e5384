//! The four fatal error kinds produced by the Core pipeline, plus the I/O
//! failures a real binary has to report on top of them.
//!
//! Each variant carries the structured data needed to format its own
//! diagnostic line (file name, line number, offending text) rather than a
//! pre-formatted string, so a caller that wants to log structured fields
//! (via `tracing`) or reformat the message has the pieces to do so.

use crate::span::Line;
use thiserror::Error;

/// Any error the Core pipeline can produce.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An illegal token, or a token truncated by end of file. `SPEC_FULL.md` §4.1/§7.1.
    #[error("File \"{file}\", line {line}: Illegal token starting with \"{prefix}\"")]
    Lexical {
        file: String,
        line: Line,
        prefix: String,
    },

    /// The current token does not match the grammar at this position. `SPEC_FULL.md` §4.2/§7.2.
    #[error("File \"{file}\", line {line}: unexpected {kind} \"{text}\"{expected}")]
    Syntax {
        file: String,
        line: Line,
        kind: &'static str,
        text: String,
        /// `" Expected an identifier."` / `" Expected an integer."` / `""`.
        expected: &'static str,
    },

    /// Ran out of tokens while the grammar still expected one. `SPEC_FULL.md` §4.2/§7.2.
    #[error("Unexpected end of file \"{file}\".")]
    UnexpectedEof { file: String },

    /// Double declaration or use of an undeclared name. `SPEC_FULL.md` §4.2/§7.3.
    #[error("File \"{file}\", line {line}: identifier \"{name}\" has {status}!")]
    Scope {
        file: String,
        line: Line,
        name: String,
        status: ScopeStatus,
    },

    /// Use of an identifier before its first assignment/read. `SPEC_FULL.md` §4.4/§7.4.
    #[error("Runtime error! File \"{file}\", line {line}: identifier \"{name}\" has not been initialized!")]
    Uninitialized {
        file: String,
        line: Line,
        name: String,
    },

    /// The data file ran out of lines while a `read` still needed one. `SPEC_FULL.md` §4.4/§7.4.
    #[error("Runtime error! End of data file \"{file}\" has been reached!")]
    DataEof { file: String },

    /// A blank line where `read` expected an integer. `SPEC_FULL.md` §4.4/§7.4.
    #[error("Runtime error! Data file \"{file}\" cannot contain empty lines!")]
    DataEmptyLine { file: String },

    /// A data line that does not parse as a signed decimal integer. `SPEC_FULL.md` §4.4/§7.4.
    #[error("Runtime error! Invalid line in data file \"{file}\": \"{text}\"")]
    DataInvalidLine { file: String, text: String },

    /// Opening or reading the program or data file failed. Not one of the
    /// four language-level kinds, but a binary needs to report it.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Which half of the context-sensitive check a [`CoreError::Scope`] failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeStatus {
    /// Declared twice.
    AlreadyDeclared,
    /// Used in the body without ever being declared.
    NotDeclared,
}

impl std::fmt::Display for ScopeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeStatus::AlreadyDeclared => write!(f, "already been declared"),
            ScopeStatus::NotDeclared => write!(f, "not been declared"),
        }
    }
}

impl CoreError {
    /// Which of the four spec-defined error kinds this is, or `None` for
    /// the non-spec I/O variant.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CoreError::Lexical { .. } => Some(ErrorKind::Lexical),
            CoreError::Syntax { .. } | CoreError::UnexpectedEof { .. } => Some(ErrorKind::Syntax),
            CoreError::Scope { .. } => Some(ErrorKind::Scope),
            CoreError::Uninitialized { .. }
            | CoreError::DataEof { .. }
            | CoreError::DataEmptyLine { .. }
            | CoreError::DataInvalidLine { .. } => Some(ErrorKind::Runtime),
            CoreError::Io(_) => None,
        }
    }

    /// The process exit code the driver should use for this error.
    ///
    /// All errors are fatal (`SPEC_FULL.md` §7); every variant maps to a
    /// non-zero code, distinguished only so a script driving `corec` can
    /// tell the error classes apart.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            Some(ErrorKind::Lexical) => 2,
            Some(ErrorKind::Syntax) => 3,
            Some(ErrorKind::Scope) => 4,
            Some(ErrorKind::Runtime) => 5,
            None => 1,
        }
    }
}

/// The four disjoint fatal error kinds from `SPEC_FULL.md` §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Scope,
    Runtime,
}

pub type Result<T> = std::result::Result<T, CoreError>;
