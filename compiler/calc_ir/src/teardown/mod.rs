//! Tree teardown.

use calc_stack::ensure_sufficient_stack;

use crate::Node;

/// Release `node` and every subtree it owns, returning the number of nodes
/// released.
///
/// Visits exactly the owned children of each kind. Symbol operands
/// (`Ref`, `Assign` targets, `Call` callees) are handles and are left alone.
pub fn treefree(node: Box<Node>) -> usize {
    ensure_sufficient_stack(|| {
        let children = match *node {
            Node::Number(_) | Node::Ref(_) => 0,
            Node::Assign { value, .. } => treefree(value),
            Node::Binary { left, right, .. }
            | Node::Compare { left, right, .. }
            | Node::Seq {
                first: left,
                second: right,
            } => treefree(left) + treefree(right),
            Node::Abs(operand) | Node::Neg(operand) | Node::Builtin { arg: operand, .. } => {
                treefree(operand)
            }
            Node::Call { args, .. } => args.map_or(0, treefree),
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                treefree(cond)
                    + then_branch.map_or(0, treefree)
                    + else_branch.map_or(0, treefree)
            }
            Node::While { cond, body } => treefree(cond) + body.map_or(0, treefree),
        };
        children + 1
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
