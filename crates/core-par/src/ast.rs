//! AST node types, mirroring the grammar productions of `SPEC_FULL.md` §4.2
//! one-for-one.
//!
//! The tree owns its children outright; the only thing nodes share is a
//! `SymbolId`, a plain index into the program's [`crate::symbol_table::SymbolTable`]
//! arena, never a pointer or reference count.

use core_util::Line;

use crate::symbol_table::SymbolId;

/// `<prog> ::= program <decl seq> begin <stmt seq> end`
#[derive(Debug, Clone)]
pub struct Prog {
    pub decls: DeclSeq,
    pub body: StmtSeq,
}

/// `<decl seq> ::= <decl> { <decl> }`
#[derive(Debug, Clone)]
pub struct DeclSeq(pub Vec<Decl>);

/// `<decl> ::= int <id list> ;`
#[derive(Debug, Clone)]
pub struct Decl(pub Vec<SymbolId>);

/// `<stmt seq> ::= <stmt> { <stmt> }`
#[derive(Debug, Clone)]
pub struct StmtSeq(pub Vec<Stmt>);

#[derive(Debug, Clone)]
pub enum Stmt {
    Assign(Assign),
    If(If),
    While(While),
    Read(ReadWrite),
    Write(ReadWrite),
}

/// `<assign> ::= <id> = <exp> ;`
#[derive(Debug, Clone)]
pub struct Assign {
    pub target: SymbolId,
    pub expr: Exp,
    pub line: Line,
}

/// `<if> ::= if <cond> then <stmt seq> [ else <stmt seq> ] end ;`
#[derive(Debug, Clone)]
pub struct If {
    pub cond: Cond,
    pub then_body: StmtSeq,
    pub else_body: Option<StmtSeq>,
    pub line: Line,
}

/// `<while> ::= while <cond> loop <stmt seq> end ;`
#[derive(Debug, Clone)]
pub struct While {
    pub cond: Cond,
    pub body: StmtSeq,
    pub line: Line,
}

/// `<read> ::= read <id list> ;` and `<write> ::= write <id list> ;` share a
/// shape: an ordered target list and the line the statement begins on.
#[derive(Debug, Clone)]
pub struct ReadWrite {
    pub targets: Vec<SymbolId>,
    pub line: Line,
}

/// `<cond> ::= <comp> | ! <cond> | [ <cond> && <cond> ] | [ <cond> || <cond> ]`
#[derive(Debug, Clone)]
pub enum Cond {
    Comp(Comp),
    Not(Box<Cond>),
    And(Box<Cond>, Box<Cond>),
    Or(Box<Cond>, Box<Cond>),
}

/// `<comp> ::= ( <op> <comp op> <op> )`
#[derive(Debug, Clone)]
pub struct Comp {
    pub left: Op,
    pub op: CompOp,
    pub right: Op,
}

/// `<comp op> ::= != | == | < | > | <= | >=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Ne,
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompOp::Ne => "!=",
            CompOp::Eq => "==",
            CompOp::Lt => "<",
            CompOp::Gt => ">",
            CompOp::Le => "<=",
            CompOp::Ge => ">=",
        }
    }
}

/// `<exp> ::= <fac> | <fac> + <exp> | <fac> - <exp>`
///
/// Right-recursive as written in the grammar: `a - b - c` parses as
/// `Sub(a, Sub(b, Fac(c)))`, i.e. `a - (b - c)`.
#[derive(Debug, Clone)]
pub enum Exp {
    Fac(Fac),
    Add(Fac, Box<Exp>),
    Sub(Fac, Box<Exp>),
}

/// `<fac> ::= <op> | <op> * <fac>`
#[derive(Debug, Clone)]
pub enum Fac {
    Op(Op),
    Mul(Op, Box<Fac>),
}

/// `<op> ::= <int> | <id> | ( <exp> )`
#[derive(Debug, Clone)]
pub enum Op {
    IntLit(i64),
    /// The enclosing statement's line, for runtime uninitialized-use diagnostics.
    Ident(SymbolId, Line),
    Paren(Box<Exp>),
}
