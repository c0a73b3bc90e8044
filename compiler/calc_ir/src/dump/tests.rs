use super::*;
use crate::builder::{
    abs, assign, binary, builtin, call, compare, if_else, neg, number, reference, seq, while_loop,
};
use crate::{treefree, BinaryOp, BuiltinId, CmpOp};
use pretty_assertions::assert_eq;

#[test]
fn dumps_leaves() {
    let mut table = SymbolTable::new();
    let x = table.lookup("x").unwrap();
    assert_eq!(dump_tree(&number(4.5), &table), "number  4.5\n");
    assert_eq!(dump_tree(&number(12_345.0), &table), "number 1.234e+04\n");
    assert_eq!(dump_tree(&reference(x), &table), "ref x\n");
}

#[test]
fn dumps_nested_expression() {
    let mut table = SymbolTable::new();
    let x = table.lookup("x").unwrap();
    let tree = assign(
        x,
        binary(BinaryOp::Add, reference(x), abs(neg(number(2.0)))),
    );
    let expected = "\
= x
  binop +
    ref x
    unop |
      unop M
        number    2
";
    assert_eq!(dump_tree(&tree, &table), expected);
    treefree(tree);
}

#[test]
fn dumps_flow_with_missing_branches() {
    let table = SymbolTable::new();
    let tree = seq(
        if_else(compare(CmpOp::Ge, number(1.0), number(2.0)), None, Some(number(3.0))),
        while_loop(number(0.0), None),
    );
    let expected = "\
seq
  flow I
    cmp >=
      number    1
      number    2
    NULL
    number    3
  flow W
    number    0
    NULL
";
    assert_eq!(dump_tree(&tree, &table), expected);
}

#[test]
fn dumps_calls() {
    let mut table = SymbolTable::new();
    let f = table.lookup("f").unwrap();
    let tree = seq(
        builtin(BuiltinId::SQRT, number(16.0)),
        seq(
            builtin(BuiltinId::from_raw(9), number(1.0)),
            call(f, Some(seq(number(1.0), number(2.0)))),
        ),
    );
    let expected = "\
seq
  builtin sqrt
    number   16
  seq
    builtin #9
      number    1
    call f
      seq
        number    1
        number    2
";
    assert_eq!(dump_tree(&tree, &table), expected);
}
