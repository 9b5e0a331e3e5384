//! Peek-one token cursor over a fully scanned source.

use crate::lexer::{scan, Scanned};
use crate::token::Token;
use core_util::error::CoreError;
use core_util::Line;

/// A lazily-read-but-eagerly-scanned view over a program's tokens.
///
/// Presents exactly the API `SPEC_FULL.md` §4.1 asks for: peek the current
/// token, advance past it, and read its line/classification for
/// diagnostics. Once positioned at EOF, `advance` is a no-op and `peek`
/// keeps returning the EOF token, satisfying the EOF-idempotency decision
/// recorded in `DESIGN.md`.
pub struct Cursor {
    file: String,
    slots: Vec<Scanned>,
    pos: usize,
}

impl Cursor {
    pub fn new(file: impl Into<String>, source: &str) -> Self {
        Self {
            file: file.into(),
            slots: scan(source),
            pos: 0,
        }
    }

    /// The current token, or the lexical error it materializes into if the
    /// scanner recorded an illegal prefix at this position.
    pub fn peek(&self) -> Result<&Token, CoreError> {
        match &self.slots[self.pos] {
            Scanned::Token(tok) => Ok(tok),
            Scanned::Illegal { prefix, line } => Err(CoreError::Lexical {
                file: self.file.clone(),
                line: *line,
                prefix: prefix.clone(),
            }),
        }
    }

    /// Move past the current token. A no-op once the cursor has reached the
    /// final (EOF) slot.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.slots.len() {
            self.pos += 1;
        }
    }

    /// The line of whichever slot is current, even if it is illegal.
    pub fn current_line(&self) -> Line {
        match &self.slots[self.pos] {
            Scanned::Token(tok) => tok.line,
            Scanned::Illegal { line, .. } => *line,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn peek_does_not_advance() {
        let cur = Cursor::new("p", "X Y");
        assert!(matches!(cur.peek().unwrap().kind, TokenKind::Ident(ref s) if s == "X"));
        assert!(matches!(cur.peek().unwrap().kind, TokenKind::Ident(ref s) if s == "X"));
    }

    #[test]
    fn advance_moves_to_next_token() {
        let mut cur = Cursor::new("p", "X Y");
        cur.advance();
        assert!(matches!(cur.peek().unwrap().kind, TokenKind::Ident(ref s) if s == "Y"));
    }

    #[test]
    fn advance_past_eof_is_idempotent() {
        let mut cur = Cursor::new("p", "X");
        cur.advance();
        assert!(cur.peek().unwrap().kind.is_eof());
        cur.advance();
        cur.advance();
        assert!(cur.peek().unwrap().kind.is_eof());
    }

    #[test]
    fn illegal_token_surfaces_only_when_peeked() {
        let cur = Cursor::new("p.core", "12AB");
        let err = cur.peek().unwrap_err();
        match err {
            CoreError::Lexical { prefix, line, file } => {
                assert_eq!(prefix, "12AB");
                assert_eq!(line.get(), 1);
                assert_eq!(file, "p.core");
            }
            other => panic!("expected Lexical, got {other:?}"),
        }
    }
}
