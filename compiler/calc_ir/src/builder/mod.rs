//! Node constructors.
//!
//! One constructor per [`Node`] kind, used by the parser (and by tests that
//! build trees directly). Constructors wire children as given and do no
//! structural validation; the caller is trusted to supply well-formed
//! shapes. Allocation failure aborts the process through the global
//! allocator, so there is no fallible construction path.

use crate::{BinaryOp, BuiltinId, CmpOp, Node, SymbolRef};

#[inline]
pub fn number(value: f64) -> Box<Node> {
    Box::new(Node::Number(value))
}

#[inline]
pub fn reference(symbol: SymbolRef) -> Box<Node> {
    Box::new(Node::Ref(symbol))
}

#[inline]
pub fn assign(symbol: SymbolRef, value: Box<Node>) -> Box<Node> {
    Box::new(Node::Assign { symbol, value })
}

#[inline]
pub fn binary(op: BinaryOp, left: Box<Node>, right: Box<Node>) -> Box<Node> {
    Box::new(Node::Binary { op, left, right })
}

#[inline]
pub fn compare(op: CmpOp, left: Box<Node>, right: Box<Node>) -> Box<Node> {
    Box::new(Node::Compare { op, left, right })
}

#[inline]
pub fn abs(operand: Box<Node>) -> Box<Node> {
    Box::new(Node::Abs(operand))
}

#[inline]
pub fn neg(operand: Box<Node>) -> Box<Node> {
    Box::new(Node::Neg(operand))
}

#[inline]
pub fn seq(first: Box<Node>, second: Box<Node>) -> Box<Node> {
    Box::new(Node::Seq { first, second })
}

#[inline]
pub fn if_else(
    cond: Box<Node>,
    then_branch: Option<Box<Node>>,
    else_branch: Option<Box<Node>>,
) -> Box<Node> {
    Box::new(Node::If {
        cond,
        then_branch,
        else_branch,
    })
}

#[inline]
pub fn while_loop(cond: Box<Node>, body: Option<Box<Node>>) -> Box<Node> {
    Box::new(Node::While { cond, body })
}

#[inline]
pub fn builtin(func: BuiltinId, arg: Box<Node>) -> Box<Node> {
    Box::new(Node::Builtin { func, arg })
}

#[inline]
pub fn call(callee: SymbolRef, args: Option<Box<Node>>) -> Box<Node> {
    Box::new(Node::Call { callee, args })
}

/// Prepend `head` to an already-built list.
///
/// An empty tail yields `head` alone; otherwise `Seq(head, tail)`. This is
/// how statement lists (`a; b; c;`) and argument lists (`f(a, b, c)`) are
/// encoded: a right-nested `Seq` chain whose last element is not a `Seq`
/// wrapper.
pub fn cons(head: Box<Node>, tail: Option<Box<Node>>) -> Box<Node> {
    match tail {
        Some(tail) => seq(head, tail),
        None => head,
    }
}
