//! The `path` sublanguage: parameters, then a chain of constituents with
//! regex-style repetition suffixes.

use super::expressions::arrow_op;
use super::moves::MoveContext;
use super::params::PATH_PARAMS;
use crate::analyze::FilterType;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::core::PResult;
use crate::parser::{Parser, SyntaxKind};
use crate::query::{FilterNode, NodeId, NodeKind, NodeValue};

enum BraceRepeat {
    Plus,
    Star,
    Range(Option<i64>, Option<i64>),
}

impl Parser<'_> {
    pub(super) fn parse_path(&mut self) -> PResult {
        let keyword = self.bump();
        let mut children = self.parse_params(PATH_PARAMS, keyword.span)?;

        let first = children.len();
        while self.at_constituent() {
            children.push(self.parse_repeated_constituent()?);
        }
        if children.len() == first {
            let found = self.describe_current();
            return Err(self
                .error_at_current(DiagnosticKind::ExpectedConstituent)
                .message(format!("found {found}")));
        }

        let span = self.span_from(keyword.span.start());
        self.node(NodeKind::Path, FilterType::Numeric, span, children)
    }

    fn at_constituent(&self) -> bool {
        match self.current() {
            SyntaxKind::Dash
            | SyntaxKind::Capture
            | SyntaxKind::Designator
            | SyntaxKind::ParenOpen => true,
            SyntaxKind::BraceOpen => self.repetition_brace_len(0).is_none(),
            SyntaxKind::Ident => self.is_set_name(self.current_text()),
            _ => false,
        }
    }

    fn parse_repeated_constituent(&mut self) -> PResult {
        self.enter_recursion()?;
        let constituent = self.parse_constituent();
        self.exit_recursion();
        let constituent = constituent?;
        self.parse_repetition(constituent)
    }

    fn parse_constituent(&mut self) -> PResult {
        match self.current() {
            SyntaxKind::Dash | SyntaxKind::Capture => self.parse_move(None, MoveContext::Path),
            SyntaxKind::BraceOpen => self.parse_brace_compound(),
            SyntaxKind::ParenOpen => self.parse_constituent_group(),
            _ => {
                let mut left = if self.currently_is(SyntaxKind::Designator) {
                    self.parse_designator()?
                } else {
                    self.parse_identifier()?
                };
                if self.current().is_move_operator() {
                    return self.parse_move(Some(left), MoveContext::Path);
                }
                while let Some(op) = arrow_op(self.current()) {
                    self.bump();
                    let right = self.parse_prefix()?;
                    left = self.binary(op, left, right)?;
                }
                Ok(left)
            }
        }
    }

    /// `( constituent... )`, nesting arbitrarily.
    fn parse_constituent_group(&mut self) -> PResult {
        let open = self.bump();
        let mut children = Vec::new();
        while self.at_constituent() {
            children.push(self.parse_repeated_constituent()?);
        }
        if children.is_empty() {
            if self.currently_is(SyntaxKind::ParenClose) {
                return Err(Diagnostic::new(
                    DiagnosticKind::EmptyGroup,
                    open.span.cover(self.current_span()),
                ));
            }
            let found = self.describe_current();
            return Err(self
                .error_at_current(DiagnosticKind::ExpectedConstituent)
                .message(format!("found {found}")));
        }
        self.expect_closing(SyntaxKind::ParenClose, open.span)?;
        let span = self.span_from(open.span.start());
        self.node(NodeKind::ConstituentGroup, FilterType::Logical, span, children)
    }

    /// At most one suffix: `+ * ?`, `{+}`, `{*}`, `{n}`, `{n,m}`, `{n,}`, `{,m}`.
    fn parse_repetition(&mut self, constituent: NodeId) -> PResult {
        let start = self.span(constituent).start();
        let ty = self.ty(constituent);
        let kind = match self.current() {
            SyntaxKind::Plus => NodeKind::RepeatPlus,
            SyntaxKind::Star => NodeKind::RepeatStar,
            SyntaxKind::Question => NodeKind::RepeatOptional,
            SyntaxKind::BraceOpen if self.repetition_brace_len(0).is_some() => {
                return self.parse_repetition_brace(constituent);
            }
            _ => return Ok(constituent),
        };
        self.bump();
        let span = self.span_from(start);
        self.node(kind, ty, span, vec![constituent])
    }

    fn parse_repetition_brace(&mut self, constituent: NodeId) -> PResult {
        let start = self.span(constituent).start();
        let ty = self.ty(constituent);
        self.bump();

        let repeat = match self.current() {
            SyntaxKind::Plus => {
                self.bump();
                BraceRepeat::Plus
            }
            SyntaxKind::Star => {
                self.bump();
                BraceRepeat::Star
            }
            SyntaxKind::Comma => {
                self.bump();
                let (max, _) = self.parse_integer_value()?;
                BraceRepeat::Range(None, Some(max))
            }
            _ => {
                let (min, _) = self.parse_integer_value()?;
                if self.eat(SyntaxKind::Comma).is_none() {
                    BraceRepeat::Range(Some(min), Some(min))
                } else if self.currently_is(SyntaxKind::Integer) {
                    let (max, _) = self.parse_integer_value()?;
                    BraceRepeat::Range(Some(min), Some(max))
                } else {
                    BraceRepeat::Range(Some(min), None)
                }
            }
        };
        self.expect(SyntaxKind::BraceClose, "`}`")?;
        let span = self.span_from(start);

        let node = match repeat {
            BraceRepeat::Plus => FilterNode::new(NodeKind::RepeatPlus, ty, span),
            BraceRepeat::Star => FilterNode::new(NodeKind::RepeatStar, ty, span),
            BraceRepeat::Range(min, max) => FilterNode::new(NodeKind::RepeatRange, ty, span)
                .with_value(NodeValue::Range { min, max }),
        };
        self.alloc(node.with_children(vec![constituent]))
    }
}
