//! Interned identifier names.
//!
//! `Symbol` is a small `Copy` handle to a string owned by an [`Interner`].
//! Comparing two symbols is an integer comparison instead of a string
//! comparison, which matters once the same identifier is looked up on every
//! statement that mentions it.
//!
//! Unlike a process-wide symbol table, an [`Interner`] here is an ordinary,
//! non-global value: one is created per interpreter run and threaded
//! explicitly through the parser and evaluator contexts. Core programs are
//! small, short-lived, and single-threaded, so there is nothing to gain from
//! a `'static`, thread-safe, leak-forever interner and something to lose
//! (the ambient global state `SPEC_FULL.md` §9 explicitly rules out).

use rustc_hash::FxHashMap;
use std::fmt;

/// A handle to an interned identifier name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "interner overflowed u32");
        Symbol(index as u32)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Owns the interned strings a [`Symbol`] points into.
///
/// Holds one entry per distinct identifier name seen while parsing a single
/// program. Dropped (and its strings freed) along with the parse/evaluation
/// session that created it.
#[derive(Default)]
pub struct Interner {
    names: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, returning its existing symbol if already known or a
    /// fresh one otherwise.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.lookup.get(name) {
            return sym;
        }
        let sym = Symbol::new(self.names.len());
        let boxed: Box<str> = name.into();
        self.names.push(boxed.clone());
        self.lookup.insert(boxed, sym);
        sym
    }

    /// Look up the text a symbol was interned from.
    ///
    /// # Panics
    ///
    /// Panics if `sym` was not produced by this interner.
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.names[sym.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
