use super::*;
use crate::{buffer_handler, silent_handler};
use pretty_assertions::assert_eq;

#[test]
fn math_builtins() {
    let out = silent_handler();
    assert_eq!(apply_builtin(Builtin::Sqrt, 16.0, &out), 4.0);
    assert_eq!(apply_builtin(Builtin::Exp, 0.0, &out), 1.0);
    assert_eq!(apply_builtin(Builtin::Log, 1.0, &out), 0.0);
    assert!((apply_builtin(Builtin::Log, std::f64::consts::E, &out) - 1.0).abs() < 1e-12);
}

#[test]
fn math_builtins_follow_ieee_domains() {
    let out = silent_handler();
    assert!(apply_builtin(Builtin::Sqrt, -1.0, &out).is_nan());
    assert_eq!(apply_builtin(Builtin::Log, 0.0, &out), f64::NEG_INFINITY);
}

#[test]
fn print_writes_and_returns_value() {
    let out = buffer_handler();
    assert_eq!(apply_builtin(Builtin::Print, 3.141_59, &out), 3.141_59);
    assert_eq!(apply_builtin(Builtin::Print, 1e9, &out), 1e9);
    assert_eq!(out.get_output(), "= 3.142\n= 1e+09\n");
}
