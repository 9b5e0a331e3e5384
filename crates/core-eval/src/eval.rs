//! Tree-walking evaluator (`SPEC_FULL.md` §4.4).
//!
//! All of the state the original keeps as a class-level "has any write
//! happened yet" flag lives on [`EvalContext`] instead, alongside the
//! symbol table and the data stream, and is threaded explicitly through the
//! recursion rather than read from a global.

use std::io::Write;

use core_par::ast::{Cond, Exp, Fac, Op, Prog, Stmt, StmtSeq};
use core_par::{CompOp, SymbolTable};
use core_util::error::CoreError;

use crate::input::DataStream;

const BANNER: &str = "----------Program Output----------";

/// Explicit evaluation state: the symbol table, the data input stream, the
/// output sink, and whether a `write` has executed yet.
pub struct EvalContext<'a, W: Write> {
    program_file: String,
    symbols: &'a mut SymbolTable,
    input: DataStream,
    output: &'a mut W,
    first_write_seen: bool,
}

/// Execute a parsed program's body against `data`, writing `write` output to
/// `output`.
pub fn execute<W: Write>(
    program_file: &str,
    prog: &Prog,
    symbols: &mut SymbolTable,
    data_file: &str,
    data: &str,
    output: &mut W,
) -> Result<(), CoreError> {
    let mut ctx = EvalContext {
        program_file: program_file.to_string(),
        symbols,
        input: DataStream::new(data_file, data),
        output,
        first_write_seen: false,
    };
    ctx.exec_stmt_seq(&prog.body)
}

impl<'a, W: Write> EvalContext<'a, W> {
    fn exec_stmt_seq(&mut self, seq: &StmtSeq) -> Result<(), CoreError> {
        for stmt in &seq.0 {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), CoreError> {
        match stmt {
            Stmt::Assign(assign) => {
                let value = self.eval_exp(&assign.expr)?;
                self.symbols.assign(assign.target, value);
                Ok(())
            }
            Stmt::Read(rw) => {
                for &id in &rw.targets {
                    let value = self.input.read_int()?;
                    self.symbols.assign(id, value);
                }
                Ok(())
            }
            Stmt::Write(rw) => {
                if !self.first_write_seen {
                    writeln!(self.output)?;
                    writeln!(self.output, "{BANNER}")?;
                    self.first_write_seen = true;
                }
                for &id in &rw.targets {
                    if !self.symbols.is_initialized(id) {
                        return Err(CoreError::Uninitialized {
                            file: self.program_file.clone(),
                            line: rw.line,
                            name: self.symbols.name_of(id).to_string(),
                        });
                    }
                    let name = self.symbols.name_of(id).to_string();
                    let value = self.symbols.value(id);
                    writeln!(self.output, "{name} = {value}")?;
                }
                Ok(())
            }
            Stmt::If(stmt) => {
                if self.eval_cond(&stmt.cond)? {
                    self.exec_stmt_seq(&stmt.then_body)
                } else if let Some(else_body) = &stmt.else_body {
                    self.exec_stmt_seq(else_body)
                } else {
                    Ok(())
                }
            }
            Stmt::While(stmt) => {
                while self.eval_cond(&stmt.cond)? {
                    self.exec_stmt_seq(&stmt.body)?;
                }
                Ok(())
            }
        }
    }

    fn eval_cond(&mut self, cond: &Cond) -> Result<bool, CoreError> {
        match cond {
            Cond::Comp(comp) => {
                let left = self.eval_op(&comp.left)?;
                let right = self.eval_op(&comp.right)?;
                Ok(match comp.op {
                    CompOp::Ne => left != right,
                    CompOp::Eq => left == right,
                    CompOp::Lt => left < right,
                    CompOp::Gt => left > right,
                    CompOp::Le => left <= right,
                    CompOp::Ge => left >= right,
                })
            }
            Cond::Not(inner) => Ok(!self.eval_cond(inner)?),
            Cond::And(left, right) => {
                if !self.eval_cond(left)? {
                    Ok(false)
                } else {
                    self.eval_cond(right)
                }
            }
            Cond::Or(left, right) => {
                if self.eval_cond(left)? {
                    Ok(true)
                } else {
                    self.eval_cond(right)
                }
            }
        }
    }

    fn eval_exp(&mut self, exp: &Exp) -> Result<i64, CoreError> {
        match exp {
            Exp::Fac(fac) => self.eval_fac(fac),
            Exp::Add(fac, rest) => {
                let left = self.eval_fac(fac)?;
                let right = self.eval_exp(rest)?;
                Ok(left.wrapping_add(right))
            }
            Exp::Sub(fac, rest) => {
                let left = self.eval_fac(fac)?;
                let right = self.eval_exp(rest)?;
                Ok(left.wrapping_sub(right))
            }
        }
    }

    fn eval_fac(&mut self, fac: &Fac) -> Result<i64, CoreError> {
        match fac {
            Fac::Op(op) => self.eval_op(op),
            Fac::Mul(op, rest) => {
                let left = self.eval_op(op)?;
                let right = self.eval_fac(rest)?;
                Ok(left.wrapping_mul(right))
            }
        }
    }

    fn eval_op(&mut self, op: &Op) -> Result<i64, CoreError> {
        match op {
            Op::IntLit(v) => Ok(*v),
            Op::Ident(id, line) => {
                if !self.symbols.is_initialized(*id) {
                    return Err(CoreError::Uninitialized {
                        file: self.program_file.clone(),
                        line: *line,
                        name: self.symbols.name_of(*id).to_string(),
                    });
                }
                Ok(self.symbols.value(*id))
            }
            Op::Paren(inner) => self.eval_exp(inner),
        }
    }
}
