//! User-defined functions.
//!
//! A function keeps the token range of its body rather than a tree: every
//! call site re-parses the body with the call's arguments in scope, so each
//! expansion is type-checked against concrete argument types.

use std::ops::Range;

use indexmap::IndexMap;
use rowan::TextRange;
use serde::Serialize;

use super::lattice::FilterType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    /// Token indices of the body, braces included.
    pub(crate) body: Range<usize>,
    /// Result type of the body checked with placeholder parameters.
    pub body_ty: FilterType,
    pub span: TextRange,
}

impl FunctionDef {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn signature(&self) -> FunctionSignature {
        FunctionSignature {
            name: self.name.clone(),
            params: self.params.clone(),
            body_type: self.body_ty,
        }
    }
}

/// Serializable summary of a function, without its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<String>,
    pub body_type: FilterType,
}

#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    table: IndexMap<String, FunctionDef>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function. Returns the previous definition's span if the
    /// name was already taken, leaving the table unchanged.
    pub fn insert(&mut self, def: FunctionDef) -> Result<(), TextRange> {
        if let Some(existing) = self.table.get(&def.name) {
            return Err(existing.span);
        }
        self.table.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionDef> {
        self.table.values()
    }
}
