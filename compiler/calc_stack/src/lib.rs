//! Stack growth for recursive tree walking.
//!
//! Evaluation, teardown, tree dumps and parsing all recurse once per level
//! of AST nesting, and user functions recurse once per call. Rather than
//! imposing a depth limit, every recursive step goes through
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated stack segment when the current one runs low.
//!
//! Unbounded user recursion (`let f(x) = f(x)`) therefore still fails, but
//! by exhausting memory rather than the fixed-size thread stack.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// within [`RED_ZONE`] of its end.
///
/// ```text
/// fn eval(&self, node: &Node) -> f64 {
///     ensure_sufficient_stack(|| match node {
///         Node::Neg(operand) => -self.eval(operand),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
