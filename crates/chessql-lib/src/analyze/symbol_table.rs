//! Symbol table: variables and dictionaries declared by a query.
//!
//! Types are inferred, never declared. The first assignment fixes a
//! variable's type; every later assignment must agree with it.

use indexmap::IndexMap;
use rowan::TextRange;
use serde::Serialize;

use super::lattice::FilterType;
use crate::diagnostics::{Diagnostic, DiagnosticKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VariableKind {
    Variable,
    Dictionary,
}

/// A declared variable or dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub kind: VariableKind,
    /// Value type. Set once; `None` for a dictionary with no entries yet.
    #[serde(rename = "type")]
    pub ty: Option<FilterType>,
    /// Key type of a dictionary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_ty: Option<FilterType>,
    pub bound: bool,
    #[serde(skip)]
    pub span: TextRange,
}

impl Variable {
    pub fn is_dictionary(&self) -> bool {
        self.kind == VariableKind::Dictionary
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: IndexMap<String, Variable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
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

    /// Iterate over all declarations in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Declares `name` with `proposed` type, or checks it against the type
    /// fixed by an earlier declaration.
    ///
    /// `Any` never fixes or contradicts a type; it only appears while a
    /// function body is checked against placeholder parameters.
    pub fn declare_or_check(
        &mut self,
        name: &str,
        proposed: FilterType,
        span: TextRange,
    ) -> Result<(), Diagnostic> {
        let Some(var) = self.table.get_mut(name) else {
            self.table.insert(
                name.to_owned(),
                Variable {
                    name: name.to_owned(),
                    kind: VariableKind::Variable,
                    ty: Some(proposed),
                    key_ty: None,
                    bound: false,
                    span,
                },
            );
            return Ok(());
        };

        if var.is_dictionary() {
            return Err(Diagnostic::new(DiagnosticKind::VariableTypeMismatch, span)
                .message(format!("`{name}` is a dictionary"))
                .related_to("declared here", var.span));
        }

        refine(&mut var.ty, proposed).map_err(|existing| {
            Diagnostic::new(DiagnosticKind::VariableTypeMismatch, span)
                .message(format!("`{name}` is {existing}, not {proposed}"))
                .related_to("type fixed here", var.span)
        })
    }

    /// Declares a dictionary. Redeclaring an existing dictionary is a no-op.
    pub fn declare_dictionary(&mut self, name: &str, span: TextRange) -> Result<(), Diagnostic> {
        match self.table.get(name) {
            Some(var) if var.is_dictionary() => Ok(()),
            Some(var) => Err(Diagnostic::new(DiagnosticKind::DuplicateDefinition, span)
                .message(name)
                .related_to("declared as a variable here", var.span)),
            None => {
                self.table.insert(
                    name.to_owned(),
                    Variable {
                        name: name.to_owned(),
                        kind: VariableKind::Dictionary,
                        ty: None,
                        key_ty: None,
                        bound: true,
                        span,
                    },
                );
                Ok(())
            }
        }
    }

    /// Checks a keyed dictionary access, fixing key and value types on first use.
    ///
    /// Pass `value: None` for a read; a read before any assignment is legal
    /// only once the value type is known.
    pub fn check_entry(
        &mut self,
        name: &str,
        key: FilterType,
        value: Option<FilterType>,
        span: TextRange,
    ) -> Result<FilterType, Diagnostic> {
        let var = match self.table.get_mut(name) {
            Some(var) if var.is_dictionary() => var,
            _ => return Err(Diagnostic::new(DiagnosticKind::NotADictionary, span).message(name)),
        };

        if !matches!(key, FilterType::Numeric | FilterType::String | FilterType::Any) {
            return Err(Diagnostic::new(DiagnosticKind::UnexpectedType, span)
                .message(format!("dictionary keys are Numeric or String, found {key}")));
        }
        refine(&mut var.key_ty, key).map_err(|existing| {
            Diagnostic::new(DiagnosticKind::VariableTypeMismatch, span)
                .message(format!("keys of `{name}` are {existing}, not {key}"))
                .related_to("declared here", var.span)
        })?;

        match value {
            Some(value) => {
                refine(&mut var.ty, value).map_err(|existing| {
                    Diagnostic::new(DiagnosticKind::VariableTypeMismatch, span)
                        .message(format!("values of `{name}` are {existing}, not {value}"))
                        .related_to("declared here", var.span)
                })?;
                var.bound = true;
                Ok(value)
            }
            None => var.ty.ok_or_else(|| {
                Diagnostic::new(DiagnosticKind::UnexpectedType, span)
                    .message(format!("dictionary `{name}` has no entries yet"))
            }),
        }
    }

    pub fn bind(&mut self, name: &str) {
        if let Some(var) = self.table.get_mut(name) {
            var.bound = true;
        }
    }

    /// Marks `name` unbound. The name must already be declared.
    pub fn unbind(&mut self, name: &str, span: TextRange) -> Result<(), Diagnostic> {
        match self.table.get_mut(name) {
            Some(var) => {
                var.bound = false;
                Ok(())
            }
            None => Err(Diagnostic::new(DiagnosticKind::UndefinedName, span).message(name)),
        }
    }

    /// Bound state of `name`, or `None` when it was never declared.
    pub fn is_bound(&self, name: &str) -> Option<bool> {
        self.table.get(name).map(|var| var.bound)
    }
}

/// Fixes `slot` to `proposed`, or checks agreement. Returns the existing type on conflict.
fn refine(slot: &mut Option<FilterType>, proposed: FilterType) -> Result<(), FilterType> {
    match *slot {
        None | Some(FilterType::Any) => {
            *slot = Some(proposed);
            Ok(())
        }
        Some(existing) if existing == proposed || proposed == FilterType::Any => Ok(()),
        Some(existing) => Err(existing),
    }
}
