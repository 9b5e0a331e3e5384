//! Recursive-descent parser over the Core grammar (`SPEC_FULL.md` §4.2).
//!
//! One routine per production. State that the original relies on a global
//! tokenizer handle and class-level phase/write flags for is instead carried
//! explicitly on [`ParseContext`]: the cursor, the symbol table, and which
//! half of the grammar (`Decl` vs `Body`) is currently being parsed.

use core_lex::{Cursor, Reserved, Special, TokenKind};
use core_util::error::CoreError;
use core_util::Line;

use crate::ast::*;
use crate::symbol_table::{SymbolId, SymbolTable};

/// Which grammar half is currently being parsed: declarations require new
/// names, the body requires already-declared ones.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Decl,
    Body,
}

/// Everything a parse routine needs, threaded explicitly instead of living
/// in global or thread-local state.
pub struct ParseContext {
    cursor: Cursor,
    pub symbols: SymbolTable,
    current_phase: Phase,
}

/// Tokenize and parse a whole program, returning its AST and the symbol
/// table the AST's `SymbolId`s index into.
pub fn parse_program(file: &str, source: &str) -> Result<(Prog, SymbolTable), CoreError> {
    let mut ctx = ParseContext {
        cursor: Cursor::new(file, source),
        symbols: SymbolTable::new(file),
        current_phase: Phase::Decl,
    };
    let prog = ctx.parse_prog()?;
    Ok((prog, ctx.symbols))
}

impl ParseContext {
    fn parse_prog(&mut self) -> Result<Prog, CoreError> {
        self.expect_reserved(Reserved::Program)?;
        self.current_phase = Phase::Decl;
        let decls = self.parse_decl_seq()?;
        self.expect_reserved(Reserved::Begin)?;
        self.current_phase = Phase::Body;
        let body = self.parse_stmt_seq()?;
        self.expect_reserved(Reserved::End)?;
        Ok(Prog { decls, body })
    }

    fn parse_decl_seq(&mut self) -> Result<DeclSeq, CoreError> {
        let mut decls = vec![self.parse_decl()?];
        while self.at_reserved(Reserved::Int) {
            decls.push(self.parse_decl()?);
        }
        Ok(DeclSeq(decls))
    }

    fn parse_decl(&mut self) -> Result<Decl, CoreError> {
        let line = self.expect_reserved(Reserved::Int)?;
        let ids = self.parse_id_list(line)?;
        self.expect_special(Special::Semi)?;
        Ok(Decl(ids))
    }

    /// `<stmt seq> ::= <stmt> { <stmt> }` — at least one statement, stopping
    /// at whichever of `end`/`else` closes the enclosing construct.
    fn parse_stmt_seq(&mut self) -> Result<StmtSeq, CoreError> {
        let mut stmts = vec![self.parse_stmt()?];
        while !self.at_reserved(Reserved::End) && !self.at_reserved(Reserved::Else) {
            stmts.push(self.parse_stmt()?);
        }
        Ok(StmtSeq(stmts))
    }

    fn parse_stmt(&mut self) -> Result<Stmt, CoreError> {
        enum Kind {
            Assign,
            If,
            While,
            Read,
            Write,
        }
        let kind = {
            let tok = self.cursor.peek()?;
            match &tok.kind {
                TokenKind::Ident(_) => Kind::Assign,
                TokenKind::Reserved(Reserved::If) => Kind::If,
                TokenKind::Reserved(Reserved::While) => Kind::While,
                TokenKind::Reserved(Reserved::Read) => Kind::Read,
                TokenKind::Reserved(Reserved::Write) => Kind::Write,
                _ => return Err(self.unexpected("")),
            }
        };
        match kind {
            Kind::Assign => Ok(Stmt::Assign(self.parse_assign()?)),
            Kind::If => Ok(Stmt::If(self.parse_if()?)),
            Kind::While => Ok(Stmt::While(self.parse_while()?)),
            Kind::Read => Ok(Stmt::Read(self.parse_read_write(true)?)),
            Kind::Write => Ok(Stmt::Write(self.parse_read_write(false)?)),
        }
    }

    fn parse_assign(&mut self) -> Result<Assign, CoreError> {
        let (name, line) = self.expect_ident()?;
        let target = self.symbols.resolve(&name, line)?;
        self.expect_special(Special::Eq)?;
        let expr = self.parse_exp(line)?;
        self.expect_special(Special::Semi)?;
        Ok(Assign { target, expr, line })
    }

    fn parse_if(&mut self) -> Result<If, CoreError> {
        let line = self.expect_reserved(Reserved::If)?;
        let cond = self.parse_cond(line)?;
        self.expect_reserved(Reserved::Then)?;
        let then_body = self.parse_stmt_seq()?;
        let else_body = if self.at_reserved(Reserved::Else) {
            self.cursor.advance();
            Some(self.parse_stmt_seq()?)
        } else {
            None
        };
        self.expect_reserved(Reserved::End)?;
        self.expect_special(Special::Semi)?;
        Ok(If {
            cond,
            then_body,
            else_body,
            line,
        })
    }

    fn parse_while(&mut self) -> Result<While, CoreError> {
        let line = self.expect_reserved(Reserved::While)?;
        let cond = self.parse_cond(line)?;
        self.expect_reserved(Reserved::Loop)?;
        let body = self.parse_stmt_seq()?;
        self.expect_reserved(Reserved::End)?;
        self.expect_special(Special::Semi)?;
        Ok(While { cond, body, line })
    }

    fn parse_read_write(&mut self, is_read: bool) -> Result<ReadWrite, CoreError> {
        let line = if is_read {
            self.expect_reserved(Reserved::Read)?
        } else {
            self.expect_reserved(Reserved::Write)?
        };
        let targets = self.parse_id_list(line)?;
        self.expect_special(Special::Semi)?;
        Ok(ReadWrite { targets, line })
    }

    /// `<id list> ::= <id> { , <id> }`. Declares in `Decl` phase, resolves in
    /// `Body` phase; `stmt_line` is the line recorded against each id (the
    /// `int` keyword's line for declarations, the enclosing statement's
    /// line for uses).
    fn parse_id_list(&mut self, stmt_line: Line) -> Result<Vec<SymbolId>, CoreError> {
        let mut ids = vec![self.parse_id(stmt_line)?];
        while self.at_special(Special::Comma) {
            self.cursor.advance();
            ids.push(self.parse_id(stmt_line)?);
        }
        Ok(ids)
    }

    fn parse_id(&mut self, stmt_line: Line) -> Result<SymbolId, CoreError> {
        let (name, _) = self.expect_ident()?;
        match self.current_phase {
            Phase::Decl => self.symbols.declare(&name, stmt_line),
            Phase::Body => self.symbols.resolve(&name, stmt_line),
        }
    }

    fn parse_cond(&mut self, stmt_line: Line) -> Result<Cond, CoreError> {
        if self.at_special(Special::Bang) {
            self.cursor.advance();
            let inner = self.parse_cond(stmt_line)?;
            return Ok(Cond::Not(Box::new(inner)));
        }
        if self.at_special(Special::LBracket) {
            self.cursor.advance();
            let left = self.parse_cond(stmt_line)?;
            let is_and = {
                let and_ = self.at_special(Special::AndAnd);
                let or_ = self.at_special(Special::OrOr);
                if !and_ && !or_ {
                    return Err(self.unexpected(""));
                }
                and_
            };
            self.cursor.advance();
            let right = self.parse_cond(stmt_line)?;
            self.expect_special(Special::RBracket)?;
            return Ok(if is_and {
                Cond::And(Box::new(left), Box::new(right))
            } else {
                Cond::Or(Box::new(left), Box::new(right))
            });
        }
        Ok(Cond::Comp(self.parse_comp(stmt_line)?))
    }

    fn parse_comp(&mut self, stmt_line: Line) -> Result<Comp, CoreError> {
        self.expect_special(Special::LParen)?;
        let left = self.parse_op(stmt_line)?;
        let op = self.parse_comp_op()?;
        let right = self.parse_op(stmt_line)?;
        self.expect_special(Special::RParen)?;
        Ok(Comp { left, op, right })
    }

    fn parse_comp_op(&mut self) -> Result<CompOp, CoreError> {
        let found = {
            let tok = self.cursor.peek()?;
            match &tok.kind {
                TokenKind::Special(Special::Ne) => Some(CompOp::Ne),
                TokenKind::Special(Special::EqEq) => Some(CompOp::Eq),
                TokenKind::Special(Special::Lt) => Some(CompOp::Lt),
                TokenKind::Special(Special::Gt) => Some(CompOp::Gt),
                TokenKind::Special(Special::Le) => Some(CompOp::Le),
                TokenKind::Special(Special::Ge) => Some(CompOp::Ge),
                _ => None,
            }
        };
        match found {
            Some(op) => {
                self.cursor.advance();
                Ok(op)
            }
            None => Err(self.unexpected("")),
        }
    }

    /// `<exp> ::= <fac> | <fac> + <exp> | <fac> - <exp>`, right-recursive as
    /// written: `a - b - c` becomes `Sub(a, Sub(b, Fac(c)))`.
    fn parse_exp(&mut self, stmt_line: Line) -> Result<Exp, CoreError> {
        let fac = self.parse_fac(stmt_line)?;
        if self.at_special(Special::Plus) {
            self.cursor.advance();
            let rest = self.parse_exp(stmt_line)?;
            Ok(Exp::Add(fac, Box::new(rest)))
        } else if self.at_special(Special::Minus) {
            self.cursor.advance();
            let rest = self.parse_exp(stmt_line)?;
            Ok(Exp::Sub(fac, Box::new(rest)))
        } else {
            Ok(Exp::Fac(fac))
        }
    }

    fn parse_fac(&mut self, stmt_line: Line) -> Result<Fac, CoreError> {
        let op = self.parse_op(stmt_line)?;
        if self.at_special(Special::Star) {
            self.cursor.advance();
            let rest = self.parse_fac(stmt_line)?;
            Ok(Fac::Mul(op, Box::new(rest)))
        } else {
            Ok(Fac::Op(op))
        }
    }

    fn parse_op(&mut self, stmt_line: Line) -> Result<Op, CoreError> {
        enum What {
            Int(i64),
            Ident(String),
            Paren,
        }
        let what = {
            let tok = self.cursor.peek()?;
            match &tok.kind {
                TokenKind::Int(v) => What::Int(*v),
                TokenKind::Ident(name) => What::Ident(name.clone()),
                TokenKind::Special(Special::LParen) => What::Paren,
                _ => return Err(self.unexpected("")),
            }
        };
        match what {
            What::Int(v) => {
                self.cursor.advance();
                Ok(Op::IntLit(v))
            }
            What::Ident(name) => {
                self.cursor.advance();
                let id = self.symbols.resolve(&name, stmt_line)?;
                Ok(Op::Ident(id, stmt_line))
            }
            What::Paren => {
                self.cursor.advance();
                let exp = self.parse_exp(stmt_line)?;
                self.expect_special(Special::RParen)?;
                Ok(Op::Paren(Box::new(exp)))
            }
        }
    }

    fn expect_reserved(&mut self, want: Reserved) -> Result<Line, CoreError> {
        let (matched, line) = {
            let tok = self.cursor.peek()?;
            (matches!(&tok.kind, TokenKind::Reserved(r) if *r == want), tok.line)
        };
        if matched {
            self.cursor.advance();
            Ok(line)
        } else {
            Err(self.unexpected(""))
        }
    }

    fn expect_special(&mut self, want: Special) -> Result<Line, CoreError> {
        let (matched, line) = {
            let tok = self.cursor.peek()?;
            (matches!(&tok.kind, TokenKind::Special(s) if *s == want), tok.line)
        };
        if matched {
            self.cursor.advance();
            Ok(line)
        } else {
            Err(self.unexpected(""))
        }
    }

    fn expect_ident(&mut self) -> Result<(String, Line), CoreError> {
        let found = {
            let tok = self.cursor.peek()?;
            match &tok.kind {
                TokenKind::Ident(name) => Some((name.clone(), tok.line)),
                _ => None,
            }
        };
        match found {
            Some(pair) => {
                self.cursor.advance();
                Ok(pair)
            }
            None => Err(self.unexpected(" Expected an identifier.")),
        }
    }

    fn at_reserved(&self, want: Reserved) -> bool {
        matches!(self.cursor.peek(), Ok(tok) if matches!(tok.kind, TokenKind::Reserved(r) if r == want))
    }

    fn at_special(&self, want: Special) -> bool {
        matches!(self.cursor.peek(), Ok(tok) if matches!(tok.kind, TokenKind::Special(s) if s == want))
    }

    /// Builds the `unexpected <kind> "<text>"` / `Unexpected end of file`
    /// diagnostic for whatever token is currently under the cursor.
    fn unexpected(&self, expected: &'static str) -> CoreError {
        match self.cursor.peek() {
            Ok(tok) if tok.kind.is_eof() => CoreError::UnexpectedEof {
                file: self.cursor.file_name().to_string(),
            },
            Ok(tok) => {
                let (kind, text) = tok.kind.describe();
                CoreError::Syntax {
                    file: self.cursor.file_name().to_string(),
                    line: tok.line,
                    kind,
                    text,
                    expected,
                }
            }
            Err(e) => e,
        }
    }
}
