//! User function calls.
//!
//! Calls use dynamic scoping: formal parameters are ordinary symbols, and a
//! call temporarily overwrites their values.
//!
//! 1. A callee without a body reports "call to undefined function".
//! 2. Arguments are evaluated left to right from the right-nested `Seq`
//!    chain, taking exactly as many as the callee has parameters. A short
//!    chain reports "too few args" before anything is bound. Surplus
//!    arguments are not evaluated.
//! 3. The parameters' current values are saved into a per-call
//!    [`BoundParams`] frame and the arguments are written in their place.
//! 4. The body is evaluated.
//! 5. Dropping the frame writes the saved values back.
//!
//! Because each call owns its frame, nested and recursive calls restore in
//! strict LIFO order.

use calc_ir::{Node, SymbolRef, SymbolTable};
use smallvec::SmallVec;
use tracing::trace;

use super::Interpreter;
use crate::EvalError;

/// Argument values or saved parameter values of one call. Most functions
/// take few parameters, so these stay on the native stack.
type Frame = SmallVec<[f64; 4]>;

/// RAII guard for one call's parameter bindings.
///
/// Created by binding arguments to parameters; restores the previous values
/// on drop, including during unwinding.
struct BoundParams<'t> {
    symbols: &'t SymbolTable,
    params: &'t [SymbolRef],
    saved: Frame,
}

impl<'t> BoundParams<'t> {
    fn bind(symbols: &'t SymbolTable, params: &'t [SymbolRef], args: &[f64]) -> Self {
        debug_assert_eq!(params.len(), args.len());
        let saved = params
            .iter()
            .zip(args)
            .map(|(&param, &arg)| symbols[param].replace_value(arg))
            .collect();
        BoundParams {
            symbols,
            params,
            saved,
        }
    }
}

impl Drop for BoundParams<'_> {
    fn drop(&mut self) {
        for (&param, &value) in self.params.iter().zip(&self.saved) {
            self.symbols[param].set_value(value);
        }
    }
}

impl Interpreter<'_> {
    pub(super) fn eval_call(&mut self, callee: SymbolRef, args: Option<&Node>) -> f64 {
        match self.call_user(callee, args) {
            Ok(value) => value,
            Err(error) => self.report(&error),
        }
    }

    fn call_user(&mut self, callee: SymbolRef, args: Option<&Node>) -> Result<f64, EvalError> {
        let symbols = self.symbols;
        let function = &symbols[callee];
        let Some(body) = function.body() else {
            return Err(EvalError::UndefinedFunction {
                name: function.name().to_string(),
            });
        };
        let params = function.params();
        trace!(callee = function.name(), arity = params.len(), "call");

        let values = self.eval_arguments(params.len(), args).map_err(|found| {
            EvalError::TooFewArguments {
                name: function.name().to_string(),
                expected: params.len(),
                found,
            }
        })?;

        let _frame = BoundParams::bind(symbols, params, &values);
        Ok(self.eval(body))
    }

    /// Evaluate exactly `arity` arguments, or return how many were found if
    /// the chain runs out first.
    fn eval_arguments(&mut self, arity: usize, mut args: Option<&Node>) -> Result<Frame, usize> {
        let mut values = Frame::with_capacity(arity);
        while values.len() < arity {
            let Some(arg) = args else {
                return Err(values.len());
            };
            match arg {
                Node::Seq { first, second } => {
                    values.push(self.eval(first));
                    args = Some(&**second);
                }
                last => {
                    values.push(self.eval(last));
                    args = None;
                }
            }
        }
        Ok(values)
    }
}
