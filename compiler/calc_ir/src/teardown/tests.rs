use super::*;
use crate::builder::{
    abs, assign, binary, builtin, call, compare, if_else, neg, number, reference, seq, while_loop,
};
use crate::{BinaryOp, BuiltinId, CmpOp, SymbolTable};
use pretty_assertions::assert_eq;

#[test]
fn leaves_release_one_node() {
    let mut table = SymbolTable::new();
    let x = table.lookup("x").unwrap();
    assert_eq!(treefree(number(1.0)), 1);
    assert_eq!(treefree(reference(x)), 1);
}

#[test]
fn two_child_nodes() {
    assert_eq!(treefree(binary(BinaryOp::Add, number(1.0), number(2.0))), 3);
    assert_eq!(treefree(compare(CmpOp::Lt, number(1.0), number(2.0))), 3);
    assert_eq!(treefree(seq(number(1.0), number(2.0))), 3);
}

#[test]
fn one_child_nodes() {
    assert_eq!(treefree(abs(number(-1.0))), 2);
    assert_eq!(treefree(neg(number(1.0))), 2);
    assert_eq!(treefree(builtin(BuiltinId::PRINT, number(1.0))), 2);
}

#[test]
fn assignment_releases_its_value_tree() {
    let mut table = SymbolTable::new();
    let x = table.lookup("x").unwrap();
    let node = assign(x, binary(BinaryOp::Mul, reference(x), number(2.0)));
    assert_eq!(treefree(node), 4);
    // The target symbol is untouched.
    assert_eq!(table[x].name(), "x");
}

#[test]
fn flow_nodes_release_present_branches() {
    assert_eq!(treefree(if_else(number(0.0), None, None)), 2);
    assert_eq!(
        treefree(if_else(number(0.0), Some(number(1.0)), Some(neg(number(2.0))))),
        5
    );
    assert_eq!(treefree(while_loop(number(0.0), None)), 2);
    assert_eq!(treefree(while_loop(number(0.0), Some(number(1.0)))), 3);
}

#[test]
fn call_releases_argument_chain_only() {
    let mut table = SymbolTable::new();
    let f = table.lookup("f").unwrap();
    let x = table.lookup("x").unwrap();
    table.define_function(f, vec![x], Some(reference(x)));

    assert_eq!(treefree(call(f, None)), 1);
    assert_eq!(treefree(call(f, Some(seq(number(1.0), number(2.0))))), 4);

    // The callee's own definition is not owned by the call site.
    assert!(table[f].body().is_some());
}

#[test]
fn deep_trees_do_not_overflow_the_stack() {
    let mut node = number(0.0);
    for _ in 0..100_000 {
        node = neg(node);
    }
    assert_eq!(treefree(node), 100_001);
}
