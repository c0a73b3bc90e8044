//! Built-in function dispatch.

use calc_ir::{format_g, Builtin};

use crate::PrintHandlerImpl;

/// Apply `builtin` to an already-evaluated argument.
///
/// `print` writes `= {value}` (four significant digits) to `output` and
/// yields its argument unchanged.
pub fn apply_builtin(builtin: Builtin, value: f64, output: &PrintHandlerImpl) -> f64 {
    match builtin {
        Builtin::Sqrt => value.sqrt(),
        Builtin::Exp => value.exp(),
        Builtin::Log => value.ln(),
        Builtin::Print => {
            output.println(&format!("= {}", format_g(value, 4)));
            value
        }
    }
}

#[cfg(test)]
mod tests;
