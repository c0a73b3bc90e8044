use super::*;
use crate::{builder, BinaryOp};
use pretty_assertions::assert_eq;

#[test]
fn hash_matches_rolling_accumulator() {
    assert_eq!(hash_symbol(""), 0);
    assert_eq!(hash_symbol("a"), 97);
    // ((0 * 9 ^ 'a') * 9) ^ 'b' = 873 ^ 98
    assert_eq!(hash_symbol("ab"), (97 * 9) ^ 98);
}

#[test]
fn hash_wraps_instead_of_overflowing() {
    let long = "z".repeat(64);
    // Must not panic in debug builds.
    let _ = hash_symbol(&long);
}

#[test]
fn lookup_returns_same_handle() {
    let mut table = SymbolTable::new();
    let first = table.lookup("x").unwrap();
    let second = table.lookup("x").unwrap();
    assert_eq!(first, second);
    assert_eq!(table.len(), 1);
}

#[test]
fn new_symbol_starts_empty() {
    let mut table = SymbolTable::new();
    let x = table.lookup("x").unwrap();
    assert_eq!(table[x].name(), "x");
    assert_eq!(table[x].value(), 0.0);
    assert!(table[x].body().is_none());
    assert!(table[x].params().is_empty());
}

#[test]
fn value_persists_between_lookups() {
    let mut table = SymbolTable::new();
    let x = table.lookup("x").unwrap();
    table[x].set_value(4.5);
    let again = table.lookup("x").unwrap();
    assert_eq!(table[again].value(), 4.5);
    assert_eq!(table[x].replace_value(1.0), 4.5);
    assert_eq!(table[x].value(), 1.0);
}

#[test]
fn distinct_names_get_distinct_handles() {
    let mut table = SymbolTable::new();
    let a = table.lookup("a").unwrap();
    let b = table.lookup("b").unwrap();
    assert_ne!(a, b);
    table[a].set_value(1.0);
    assert_eq!(table[b].value(), 0.0);
}

#[test]
fn colliding_names_probe_linearly() {
    // 'a' (97) and 'c' (99) both hash to slot 1 of 2; 'c' wraps to slot 0.
    let mut table = SymbolTable::with_capacity(2);
    let a = table.lookup("a").unwrap();
    let c = table.lookup("c").unwrap();
    assert_ne!(a, c);
    assert_eq!(table.lookup("a").unwrap(), a);
    assert_eq!(table.lookup("c").unwrap(), c);
}

#[test]
fn get_does_not_insert() {
    let mut table = SymbolTable::new();
    assert_eq!(table.get("x"), None);
    assert!(table.is_empty());
    let x = table.lookup("x").unwrap();
    assert_eq!(table.get("x"), Some(x));
}

#[test]
fn filling_to_capacity_succeeds_then_overflows() {
    const N: usize = 7;
    let mut table = SymbolTable::with_capacity(N);
    let names: Vec<String> = (0..N).map(|i| format!("v{i}")).collect();
    for name in &names {
        table.lookup(name).unwrap();
    }
    assert_eq!(table.len(), N);

    // Existing names still resolve in a full table.
    for name in &names {
        assert!(table.lookup(name).is_ok());
    }

    assert_eq!(
        table.lookup("one_too_many"),
        Err(SymbolTableError::Overflow { capacity: N })
    );
    assert_eq!(table.get("one_too_many"), None);
}

#[test]
fn zero_capacity_table_overflows_immediately() {
    let mut table = SymbolTable::with_capacity(0);
    assert_eq!(
        table.lookup("x"),
        Err(SymbolTableError::Overflow { capacity: 0 })
    );
}

#[test]
fn overflow_message() {
    let err = SymbolTableError::Overflow { capacity: 3 };
    assert_eq!(
        err.to_string(),
        "symbol table overflow: all 3 slots are in use"
    );
}

#[test]
fn define_function_installs_body_and_params() {
    let mut table = SymbolTable::new();
    let f = table.lookup("f").unwrap();
    let n = table.lookup("n").unwrap();
    let released = table.define_function(f, vec![n], Some(builder::reference(n)));
    assert_eq!(released, Released::default());
    assert_eq!(table[f].params(), &[n]);
    assert_eq!(table[f].body(), Some(&Node::Ref(n)));
}

#[test]
fn redefinition_releases_previous_definition() {
    let mut table = SymbolTable::new();
    let f = table.lookup("f").unwrap();
    let a = table.lookup("a").unwrap();
    let b = table.lookup("b").unwrap();

    // f(a, b) = a + b * 2   -> 5 nodes
    let old_body = builder::binary(
        BinaryOp::Add,
        builder::reference(a),
        builder::binary(BinaryOp::Mul, builder::reference(b), builder::number(2.0)),
    );
    table.define_function(f, vec![a, b], Some(old_body));

    // f(a) = -a   -> 2 nodes
    let released = table.define_function(f, vec![a], Some(builder::neg(builder::reference(a))));
    assert_eq!(released, Released { nodes: 5, params: 2 });
    assert_eq!(table[f].params(), &[a]);
    assert_eq!(
        table[f].body(),
        Some(&Node::Neg(Box::new(Node::Ref(a))))
    );

    // Parameter symbols themselves survive teardown.
    assert_eq!(table[a].name(), "a");
    assert_eq!(table[b].name(), "b");
}

#[test]
fn define_with_empty_body_leaves_symbol_uncallable() {
    let mut table = SymbolTable::new();
    let f = table.lookup("f").unwrap();
    let x = table.lookup("x").unwrap();
    table.define_function(f, vec![x], Some(builder::number(1.0)));
    let released = table.define_function(f, vec![x], None);
    assert_eq!(released, Released { nodes: 1, params: 1 });
    assert!(table[f].body().is_none());
}

#[test]
fn iter_visits_in_insertion_order() {
    let mut table = SymbolTable::new();
    for name in ["z", "a", "m"] {
        table.lookup(name).unwrap();
    }
    let names: Vec<&str> = table.iter().map(|(_, s)| s.name()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

mod proptest_lookup {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lookup_is_idempotent(names in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..40)) {
            let mut table = SymbolTable::with_capacity(64);
            let first: Vec<SymbolRef> = names.iter().map(|n| table.lookup(n).unwrap()).collect();
            let second: Vec<SymbolRef> = names.iter().map(|n| table.lookup(n).unwrap()).collect();
            prop_assert_eq!(first, second);
            let distinct: std::collections::HashSet<&String> = names.iter().collect();
            prop_assert_eq!(table.len(), distinct.len());
        }
    }
}
