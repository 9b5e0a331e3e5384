//! Canonical pretty-printer over a parsed program (`SPEC_FULL.md` §4.3).
//!
//! Output depends only on the AST, never on the data file, so re-running it
//! against the same program text is deterministic. The `while` node's
//! indentation quirk (body at level+2, the `loop` keyword at level+1) is
//! honored exactly so the pretty-print/re-parse round trip holds.

use std::fmt::Write as _;

use crate::ast::*;
use crate::symbol_table::SymbolTable;

pub fn pretty_print(prog: &Prog, symbols: &SymbolTable) -> String {
    let mut out = String::new();
    out.push_str("program\n");
    for decl in &prog.decls.0 {
        push_indent(&mut out, 1);
        out.push_str("int ");
        let names: Vec<&str> = decl.0.iter().map(|&id| symbols.name_of(id)).collect();
        out.push_str(&names.join(", "));
        out.push_str(";\n");
    }
    out.push_str("begin\n");
    write_stmt_seq(&mut out, &prog.body, 1, symbols);
    out.push_str("end\n");
    out
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn write_stmt_seq(out: &mut String, seq: &StmtSeq, level: usize, symbols: &SymbolTable) {
    for stmt in &seq.0 {
        write_stmt(out, stmt, level, symbols);
    }
}

fn write_id_list(out: &mut String, ids: &[crate::symbol_table::SymbolId], symbols: &SymbolTable) {
    let names: Vec<&str> = ids.iter().map(|&id| symbols.name_of(id)).collect();
    out.push_str(&names.join(", "));
}

fn write_stmt(out: &mut String, stmt: &Stmt, level: usize, symbols: &SymbolTable) {
    match stmt {
        Stmt::Assign(assign) => {
            push_indent(out, level);
            let _ = write!(out, "{} = ", symbols.name_of(assign.target));
            write_exp(out, &assign.expr, symbols);
            out.push_str(";\n");
        }
        Stmt::Read(rw) => {
            push_indent(out, level);
            out.push_str("read ");
            write_id_list(out, &rw.targets, symbols);
            out.push_str(";\n");
        }
        Stmt::Write(rw) => {
            push_indent(out, level);
            out.push_str("write ");
            write_id_list(out, &rw.targets, symbols);
            out.push_str(";\n");
        }
        Stmt::If(stmt) => {
            push_indent(out, level);
            out.push_str("if ");
            write_cond(out, &stmt.cond, symbols);
            out.push_str(" then\n");
            write_stmt_seq(out, &stmt.then_body, level + 1, symbols);
            if let Some(else_body) = &stmt.else_body {
                push_indent(out, level);
                out.push_str("else\n");
                write_stmt_seq(out, else_body, level + 1, symbols);
            }
            push_indent(out, level);
            out.push_str("end;\n");
        }
        Stmt::While(stmt) => {
            push_indent(out, level);
            out.push_str("while ");
            write_cond(out, &stmt.cond, symbols);
            out.push('\n');
            push_indent(out, level + 1);
            out.push_str("loop\n");
            write_stmt_seq(out, &stmt.body, level + 2, symbols);
            push_indent(out, level);
            out.push_str("end;\n");
        }
    }
}

fn write_cond(out: &mut String, cond: &Cond, symbols: &SymbolTable) {
    match cond {
        Cond::Comp(comp) => {
            out.push_str("( ");
            write_op(out, &comp.left, symbols);
            out.push(' ');
            out.push_str(comp.op.as_str());
            out.push(' ');
            write_op(out, &comp.right, symbols);
            out.push_str(" )");
        }
        Cond::Not(inner) => {
            out.push('!');
            write_cond(out, inner, symbols);
        }
        Cond::And(left, right) => {
            out.push_str("[ ");
            write_cond(out, left, symbols);
            out.push_str(" && ");
            write_cond(out, right, symbols);
            out.push_str(" ]");
        }
        Cond::Or(left, right) => {
            out.push_str("[ ");
            write_cond(out, left, symbols);
            out.push_str(" || ");
            write_cond(out, right, symbols);
            out.push_str(" ]");
        }
    }
}

fn write_exp(out: &mut String, exp: &Exp, symbols: &SymbolTable) {
    match exp {
        Exp::Fac(fac) => write_fac(out, fac, symbols),
        Exp::Add(fac, rest) => {
            write_fac(out, fac, symbols);
            out.push_str(" + ");
            write_exp(out, rest, symbols);
        }
        Exp::Sub(fac, rest) => {
            write_fac(out, fac, symbols);
            out.push_str(" - ");
            write_exp(out, rest, symbols);
        }
    }
}

fn write_fac(out: &mut String, fac: &Fac, symbols: &SymbolTable) {
    match fac {
        Fac::Op(op) => write_op(out, op, symbols),
        Fac::Mul(op, rest) => {
            write_op(out, op, symbols);
            out.push_str(" * ");
            write_fac(out, rest, symbols);
        }
    }
}

fn write_op(out: &mut String, op: &Op, symbols: &SymbolTable) {
    match op {
        Op::IntLit(v) => {
            let _ = write!(out, "{v}");
        }
        Op::Ident(id, _) => out.push_str(symbols.name_of(*id)),
        Op::Paren(inner) => {
            out.push_str("( ");
            write_exp(out, inner, symbols);
            out.push_str(" )");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_program;

    #[test]
    fn pretty_prints_read_write_round_trip() {
        let (prog, symbols) =
            parse_program("p.core", "program int X; begin read X; write X; end").unwrap();
        let printed = pretty_print(&prog, &symbols);
        assert_eq!(
            printed,
            "program\n  int X;\nbegin\n  read X;\n  write X;\nend\n"
        );
    }

    #[test]
    fn pretty_print_then_reparse_round_trips() {
        let source = "program int X, Y;\nbegin\nX = 2 + 3 * 4;\nY = X - 1;\nwrite X, Y;\nend";
        let (prog, symbols) = parse_program("p.core", source).unwrap();
        let printed = pretty_print(&prog, &symbols);
        let (reparsed, resymbols) = parse_program("p.core", &printed).unwrap();
        assert_eq!(pretty_print(&reparsed, &resymbols), printed);
    }

    #[test]
    fn while_loop_indents_body_two_levels_and_loop_one() {
        let source = "program int I; begin while (I < I) loop I = I + 1; end; end";
        let (prog, symbols) = parse_program("p.core", source).unwrap();
        let printed = pretty_print(&prog, &symbols);
        assert!(printed.contains("  while ( I < I )\n"));
        assert!(printed.contains("    loop\n"));
        assert!(printed.contains("      I = I + 1;\n"));
        assert!(printed.contains("  end;\n"));
    }

    #[test]
    fn parenthesized_sub_expression_has_interior_spaces() {
        let source = "program int X; begin X = (1 + 2) * 3; end";
        let (prog, symbols) = parse_program("p.core", source).unwrap();
        let printed = pretty_print(&prog, &symbols);
        assert!(printed.contains("X = ( 1 + 2 ) * 3;\n"));
    }

    #[test]
    fn if_without_else_omits_else_line() {
        let source = "program int X; begin if (X == X) then X = 1; end; end";
        let (prog, symbols) = parse_program("p.core", source).unwrap();
        let printed = pretty_print(&prog, &symbols);
        assert!(!printed.contains("else"));
    }
}
