//! Indented tree dump for `--debug` output.

use std::fmt::Write;

use calc_stack::ensure_sufficient_stack;

use crate::{format_g, Builtin, Node, SymbolTable};

/// Render `node` one line per node, two spaces of indent per level.
///
/// Symbol operands are shown by name, so the table that resolved them is
/// needed.
pub fn dump_tree(node: &Node, symbols: &SymbolTable) -> String {
    let mut out = String::new();
    dump_node(&mut out, Some(node), symbols, 0);
    out
}

fn dump_node(out: &mut String, node: Option<&Node>, symbols: &SymbolTable, level: usize) {
    ensure_sufficient_stack(|| {
        let indent = level * 2;
        let Some(node) = node else {
            let _ = writeln!(out, "{:indent$}NULL", "");
            return;
        };
        let _ = write!(out, "{:indent$}", "");
        let level = level + 1;
        match node {
            Node::Number(value) => {
                let _ = writeln!(out, "number {:>4}", format_g(*value, 4));
            }
            Node::Ref(symbol) => {
                let _ = writeln!(out, "ref {}", symbols[*symbol].name());
            }
            Node::Assign { symbol, value } => {
                let _ = writeln!(out, "= {}", symbols[*symbol].name());
                dump_node(out, Some(value), symbols, level);
            }
            Node::Binary { op, left, right } => {
                let _ = writeln!(out, "binop {}", op.as_symbol());
                dump_node(out, Some(left), symbols, level);
                dump_node(out, Some(right), symbols, level);
            }
            Node::Compare { op, left, right } => {
                let _ = writeln!(out, "cmp {}", op.as_str());
                dump_node(out, Some(left), symbols, level);
                dump_node(out, Some(right), symbols, level);
            }
            Node::Seq { first, second } => {
                out.push_str("seq\n");
                dump_node(out, Some(first), symbols, level);
                dump_node(out, Some(second), symbols, level);
            }
            Node::Abs(operand) => {
                out.push_str("unop |\n");
                dump_node(out, Some(operand), symbols, level);
            }
            Node::Neg(operand) => {
                out.push_str("unop M\n");
                dump_node(out, Some(operand), symbols, level);
            }
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("flow I\n");
                dump_node(out, Some(cond), symbols, level);
                dump_node(out, then_branch.as_deref(), symbols, level);
                dump_node(out, else_branch.as_deref(), symbols, level);
            }
            Node::While { cond, body } => {
                out.push_str("flow W\n");
                dump_node(out, Some(cond), symbols, level);
                dump_node(out, body.as_deref(), symbols, level);
            }
            Node::Builtin { func, arg } => {
                match Builtin::from_id(*func) {
                    Some(builtin) => {
                        let _ = writeln!(out, "builtin {}", builtin.name());
                    }
                    None => {
                        let _ = writeln!(out, "builtin #{func}");
                    }
                }
                dump_node(out, Some(arg), symbols, level);
            }
            Node::Call { callee, args } => {
                let _ = writeln!(out, "call {}", symbols[*callee].name());
                dump_node(out, args.as_deref(), symbols, level);
            }
        }
    });
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
