//! Grammar productions, split by construct.
//!
//! Every production consumes exactly the tokens of its construct and returns
//! the typed node it allocated, or the first fatal diagnostic.

mod atoms;
mod expressions;
mod functions;
mod moves;
mod params;
mod path;
mod variables;

use rowan::{TextRange, TextSize};

use crate::analyze::{FilterType, validate};
use crate::diagnostics::DiagnosticKind;
use crate::parser::core::PResult;
use crate::parser::{Parser, SyntaxKind};
use crate::query::NodeKind;

impl Parser<'_> {
    /// The whole query: a `Cql` root over the top-level filters in order.
    pub(super) fn parse_root(&mut self) -> PResult {
        let mut children = Vec::new();
        while !self.at_end() {
            children.push(self.parse_statement()?);
        }
        let span = TextRange::new(TextSize::from(0), self.eof_offset());
        let root = self.node(NodeKind::Cql, FilterType::Logical, span, children)?;
        validate(&self.tree, root)?;
        Ok(root)
    }

    /// A top-level or compound-level filter, including assignments and
    /// declarations.
    pub(super) fn parse_statement(&mut self) -> PResult {
        self.enter_recursion()?;
        let result = self.parse_statement_inner();
        self.exit_recursion();
        result
    }

    fn parse_statement_inner(&mut self) -> PResult {
        match self.current() {
            SyntaxKind::KwFunction if self.in_function_body() => {
                Err(self.error_at_current(DiagnosticKind::NestedFunction))
            }
            SyntaxKind::KwFunction => self.parse_function_decl(),
            SyntaxKind::KwDictionary => self.parse_dictionary_decl(),
            _ if self.at_assignment() => self.parse_assignment(),
            _ => {
                let expr = self.parse_expr()?;
                let next = self.current();
                if next == SyntaxKind::Equals || next.is_compound_assign() {
                    return Err(self
                        .error_at_current(DiagnosticKind::MisplacedAssignment)
                        .related_to("left side", self.span(expr)));
                }
                Ok(expr)
            }
        }
    }
}
