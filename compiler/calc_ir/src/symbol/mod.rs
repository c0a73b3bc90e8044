//! Fixed-capacity symbol table.
//!
//! Names are resolved by open addressing with linear probing over a slot
//! array of fixed capacity. The table never resizes: once every slot holds a
//! name, inserting another distinct name fails with
//! [`SymbolTableError::Overflow`].
//!
//! Symbols themselves live in a dense arena in insertion order; the slot
//! array only stores [`SymbolRef`] indices into it. A `SymbolRef` is
//! therefore a plain `Copy` handle, valid for the lifetime of the table.
//!
//! # Interior mutability
//!
//! A symbol's scalar value lives in a [`Cell`], so the evaluator can assign
//! variables and rebind parameters through a shared `&SymbolTable` while it
//! also holds borrows of function bodies. Structural changes (new names,
//! function definitions) need `&mut SymbolTable` and so cannot happen while
//! any tree owned by the table is being evaluated. `Cell` also makes the
//! table `!Sync`: a concurrent host must serialize access to it.

use std::cell::Cell;
use std::fmt;
use std::mem;
use std::ops::Index;

use tracing::{debug, error};

use crate::{treefree, Node};

/// Handle to a symbol in a [`SymbolTable`].
///
/// Non-owning: dropping or tearing down a node that holds a `SymbolRef`
/// never releases the symbol.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SymbolRef(u32);

impl SymbolRef {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolRef({})", self.0)
    }
}

/// A named scalar slot, optionally bound to a user function.
pub struct Symbol {
    name: Box<str>,
    /// Variable storage; also the temporary argument binding during a call
    /// to a function that uses this symbol as a parameter.
    value: Cell<f64>,
    body: Option<Box<Node>>,
    params: Vec<SymbolRef>,
}

impl Symbol {
    fn new(name: &str) -> Self {
        Symbol {
            name: name.into(),
            value: Cell::new(0.0),
            body: None,
            params: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    #[inline]
    pub fn set_value(&self, value: f64) {
        self.value.set(value);
    }

    /// Replace the value, returning the previous one.
    #[inline]
    pub fn replace_value(&self, value: f64) -> f64 {
        self.value.replace(value)
    }

    /// The function body, if this symbol has been defined as a function with
    /// a non-empty body.
    #[inline]
    pub fn body(&self) -> Option<&Node> {
        self.body.as_deref()
    }

    /// Formal parameters, in declaration order. Empty for plain variables.
    #[inline]
    pub fn params(&self) -> &[SymbolRef] {
        &self.params
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("name", &self.name)
            .field("value", &self.value.get())
            .field("is_function", &self.body.is_some())
            .field("params", &self.params)
            .finish()
    }
}

/// Fatal symbol table conditions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolTableError {
    #[error("symbol table overflow: all {capacity} slots are in use")]
    Overflow { capacity: usize },
}

/// What a [`SymbolTable::define_function`] call tore down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Released {
    /// Nodes of the previous body.
    pub nodes: usize,
    /// Entries of the previous parameter list.
    pub params: usize,
}

enum Probe {
    Found(SymbolRef),
    Vacant(usize),
    Full,
}

/// Hash a name: `hash = hash * 9 ^ byte` over every byte, in 32-bit
/// wrapping arithmetic.
#[inline]
pub fn hash_symbol(name: &str) -> u32 {
    name.bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(9) ^ u32::from(byte))
}

/// Process-lifetime store of named scalars and function bindings.
pub struct SymbolTable {
    /// Open-addressed index: `None` is an empty slot.
    slots: Box<[Option<SymbolRef>]>,
    /// Symbol storage in insertion order.
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Capacity of a table created with [`SymbolTable::new`].
    pub const DEFAULT_CAPACITY: usize = 9997;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a table holding at most `capacity` distinct names.
    pub fn with_capacity(capacity: usize) -> Self {
        SymbolTable {
            slots: vec![None; capacity].into_boxed_slice(),
            symbols: Vec::new(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of distinct names stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn probe(&self, name: &str) -> Probe {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Probe::Full;
        }
        let mut slot = hash_symbol(name) as usize % capacity;
        for _ in 0..capacity {
            match self.slots[slot] {
                Some(symbol) if *self.symbols[symbol.index()].name == *name => {
                    return Probe::Found(symbol);
                }
                Some(_) => {}
                None => return Probe::Vacant(slot),
            }
            slot += 1;
            if slot == capacity {
                slot = 0;
            }
        }
        Probe::Full
    }

    /// Find `name`, inserting a fresh symbol (value `0.0`, no function) if it
    /// is not present yet.
    ///
    /// Repeated lookups of the same name return the same handle.
    pub fn lookup(&mut self, name: &str) -> Result<SymbolRef, SymbolTableError> {
        match self.probe(name) {
            Probe::Found(symbol) => Ok(symbol),
            Probe::Vacant(slot) => {
                let Ok(raw) = u32::try_from(self.symbols.len()) else {
                    return Err(self.overflow());
                };
                let symbol = SymbolRef(raw);
                self.symbols.push(Symbol::new(name));
                self.slots[slot] = Some(symbol);
                debug!(name, slot, "new symbol");
                Ok(symbol)
            }
            Probe::Full => Err(self.overflow()),
        }
    }

    fn overflow(&self) -> SymbolTableError {
        let capacity = self.capacity();
        error!(capacity, "symbol table overflow");
        SymbolTableError::Overflow { capacity }
    }

    /// Find `name` without inserting it.
    pub fn get(&self, name: &str) -> Option<SymbolRef> {
        match self.probe(name) {
            Probe::Found(symbol) => Some(symbol),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Bind `symbol` to a function, tearing down any previous body and
    /// parameter list first.
    ///
    /// A `None` body leaves the symbol without a callable function (calls
    /// report "undefined function"), matching a definition with an empty
    /// statement list.
    pub fn define_function(
        &mut self,
        symbol: SymbolRef,
        params: Vec<SymbolRef>,
        body: Option<Box<Node>>,
    ) -> Released {
        let entry = &mut self.symbols[symbol.index()];
        let released = Released {
            nodes: entry.body.take().map_or(0, treefree),
            params: mem::take(&mut entry.params).len(),
        };
        entry.params = params;
        entry.body = body;
        debug!(
            name = %entry.name,
            arity = entry.params.len(),
            released_nodes = released.nodes,
            released_params = released.params,
            "defined function"
        );
        released
    }

    /// All symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolRef, &Symbol)> {
        (0u32..).map(SymbolRef).zip(self.symbols.iter())
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<SymbolRef> for SymbolTable {
    type Output = Symbol;

    #[inline]
    fn index(&self, symbol: SymbolRef) -> &Symbol {
        &self.symbols[symbol.index()]
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
