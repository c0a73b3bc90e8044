//! Expression and statement tree.
//!
//! A single tagged enum covers both expressions and statements: in this
//! language every statement yields a scalar, so `if`, `while` and statement
//! lists are just nodes that evaluate to `f64`.

use std::fmt;

use crate::SymbolRef;

/// Arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Apply the operator with native IEEE semantics.
    ///
    /// Division by zero yields an infinity or NaN, never an error.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }

    pub fn as_symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

/// Comparison operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Gt,
    Lt,
    Ne,
    Eq,
    Ge,
    Le,
}

impl CmpOp {
    /// Whether the relation holds between `left` and `right`.
    #[inline]
    #[expect(clippy::float_cmp, reason = "language equality is exact IEEE equality")]
    pub fn holds(self, left: f64, right: f64) -> bool {
        match self {
            CmpOp::Gt => left > right,
            CmpOp::Lt => left < right,
            CmpOp::Ne => left != right,
            CmpOp::Eq => left == right,
            CmpOp::Ge => left >= right,
            CmpOp::Le => left <= right,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::Ne => "<>",
            CmpOp::Eq => "==",
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
        }
    }
}

/// Raw built-in function id as stored in a call node.
///
/// Calls keep the raw id rather than a [`Builtin`] so that a tree built by a
/// foreign front end with an out-of-range id still evaluates: the evaluator
/// reports the unknown id and yields `0.0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BuiltinId(u32);

impl BuiltinId {
    pub const SQRT: BuiltinId = BuiltinId(1);
    pub const EXP: BuiltinId = BuiltinId(2);
    pub const LOG: BuiltinId = BuiltinId(3);
    pub const PRINT: BuiltinId = BuiltinId(4);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        BuiltinId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BuiltinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of host-provided unary functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sqrt,
    Exp,
    Log,
    Print,
}

impl Builtin {
    pub fn from_id(id: BuiltinId) -> Option<Builtin> {
        match id {
            BuiltinId::SQRT => Some(Builtin::Sqrt),
            BuiltinId::EXP => Some(Builtin::Exp),
            BuiltinId::LOG => Some(Builtin::Log),
            BuiltinId::PRINT => Some(Builtin::Print),
            _ => None,
        }
    }

    pub fn id(self) -> BuiltinId {
        match self {
            Builtin::Sqrt => BuiltinId::SQRT,
            Builtin::Exp => BuiltinId::EXP,
            Builtin::Log => BuiltinId::LOG,
            Builtin::Print => BuiltinId::PRINT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sqrt => "sqrt",
            Builtin::Exp => "exp",
            Builtin::Log => "log",
            Builtin::Print => "print",
        }
    }
}

/// A node of the expression/statement tree.
///
/// Children are owned through `Box`; symbol operands are [`SymbolRef`]
/// handles and are never owned. Optional children model the grammar's empty
/// statement lists (`if c then ; else x;`, `while c do ;`).
#[derive(Debug, PartialEq)]
pub enum Node {
    /// Numeric literal.
    Number(f64),
    /// Read of a symbol's current value.
    Ref(SymbolRef),
    /// `name = value`; yields the stored value.
    Assign { symbol: SymbolRef, value: Box<Node> },
    /// Arithmetic.
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Comparison; yields `1.0` or `0.0`.
    Compare {
        op: CmpOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `|x|`
    Abs(Box<Node>),
    /// `-x`
    Neg(Box<Node>),
    /// Evaluate `first` for effect, then `second` for value. Also encodes
    /// statement lists and call argument lists.
    Seq { first: Box<Node>, second: Box<Node> },
    /// Conditional. A zero condition selects `then_branch`.
    If {
        cond: Box<Node>,
        then_branch: Option<Box<Node>>,
        else_branch: Option<Box<Node>>,
    },
    /// Loop while the condition is nonzero.
    While {
        cond: Box<Node>,
        body: Option<Box<Node>>,
    },
    /// Built-in function call.
    Builtin { func: BuiltinId, arg: Box<Node> },
    /// User function call; `args` is a right-nested `Seq` chain.
    Call {
        callee: SymbolRef,
        args: Option<Box<Node>>,
    },
}

impl Node {
    /// Short kind tag for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "number",
            Node::Ref(_) => "ref",
            Node::Assign { .. } => "assign",
            Node::Binary { .. } => "binary",
            Node::Compare { .. } => "compare",
            Node::Abs(_) => "abs",
            Node::Neg(_) => "neg",
            Node::Seq { .. } => "seq",
            Node::If { .. } => "if",
            Node::While { .. } => "while",
            Node::Builtin { .. } => "builtin",
            Node::Call { .. } => "call",
        }
    }
}
