//! Precedence climbing over the binary and prefix operators.
//!
//! Loosest to tightest: `or`, `and`, `not`, comparisons (including the
//! Before/After family), `in`, `|`, `&`, `+ -`, `* / %`, attack arrows,
//! prefix operators, `:`, then postfix moves on a primary.

use rowan::{TextRange, TextSize};

use crate::analyze::lattice::accepts;
use crate::analyze::{BinaryOp, FilterType, TypeMismatch, UnaryOp};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::core::PResult;
use crate::parser::{Parser, SyntaxKind};
use crate::query::{NodeId, NodeKind};

impl Parser<'_> {
    /// Parse one expression (no assignment).
    pub(crate) fn parse_expr(&mut self) -> PResult {
        self.enter_recursion()?;
        let result = self.parse_or();
        self.exit_recursion();
        result
    }

    fn parse_left_assoc(
        &mut self,
        op_for: fn(SyntaxKind) -> Option<BinaryOp>,
        operand: fn(&mut Self) -> PResult,
    ) -> PResult {
        let mut left = operand(self)?;
        while let Some(op) = op_for(self.current()) {
            self.bump();
            let right = operand(self)?;
            left = self.binary(op, left, right)?;
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| (k == SyntaxKind::KwOr).then_some(BinaryOp::Or),
            Self::parse_and,
        )
    }

    fn parse_and(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| (k == SyntaxKind::KwAnd).then_some(BinaryOp::And),
            Self::parse_not,
        )
    }

    /// `not` takes a comparison-level operand, so `not a < b` negates the comparison.
    pub(super) fn parse_not(&mut self) -> PResult {
        let Some(op) = self.eat(SyntaxKind::KwNot) else {
            return self.parse_comparison();
        };
        self.enter_recursion()?;
        let operand = self.parse_not();
        self.exit_recursion();
        self.unary(UnaryOp::Not, op.span.start(), operand?)
    }

    pub(super) fn parse_comparison(&mut self) -> PResult {
        self.parse_left_assoc(comparison_op, Self::parse_in)
    }

    fn parse_in(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| (k == SyntaxKind::KwIn).then_some(BinaryOp::In),
            Self::parse_union,
        )
    }

    /// Set-valued operand level, used for parameter arguments and binder domains.
    pub(super) fn parse_union(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| (k == SyntaxKind::Union).then_some(BinaryOp::Union),
            Self::parse_intersection,
        )
    }

    fn parse_intersection(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| (k == SyntaxKind::Intersection).then_some(BinaryOp::Intersection),
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| match k {
                SyntaxKind::Plus => Some(BinaryOp::Plus),
                SyntaxKind::Minus => Some(BinaryOp::Minus),
                _ => None,
            },
            Self::parse_multiplicative,
        )
    }

    fn parse_multiplicative(&mut self) -> PResult {
        self.parse_left_assoc(
            |k| match k {
                SyntaxKind::Star => Some(BinaryOp::Multiply),
                SyntaxKind::Slash => Some(BinaryOp::Divide),
                SyntaxKind::Percent => Some(BinaryOp::Modulus),
                _ => None,
            },
            Self::parse_arrow,
        )
    }

    pub(super) fn parse_arrow(&mut self) -> PResult {
        self.parse_left_assoc(arrow_op, Self::parse_prefix)
    }

    pub(super) fn parse_prefix(&mut self) -> PResult {
        let op = match self.current() {
            SyntaxKind::Minus => UnaryOp::Negate,
            SyntaxKind::Tilde => UnaryOp::Complement,
            SyntaxKind::Hash => UnaryOp::Cardinality,
            SyntaxKind::KwLight => UnaryOp::Light,
            SyntaxKind::KwDark => UnaryOp::Dark,
            SyntaxKind::KwPower => UnaryOp::Power,
            SyntaxKind::KwAbs => UnaryOp::Abs,
            _ => return self.parse_colon(),
        };
        let start = self.bump().span.start();
        self.enter_recursion()?;
        let operand = self.parse_prefix();
        self.exit_recursion();
        self.unary(op, start, operand?)
    }

    /// `position : filter`, right-associative.
    fn parse_colon(&mut self) -> PResult {
        let left = self.parse_postfix()?;
        if !self.currently_is(SyntaxKind::Colon) {
            return Ok(left);
        }
        self.expect_type(left, FilterType::Position, "the left side of `:`")?;
        self.bump();
        self.enter_recursion()?;
        let right = self.parse_colon();
        self.exit_recursion();
        let right = right?;
        let span = self.span(left).cover(self.span(right));
        let ty = self.ty(right);
        self.node(NodeKind::Colon, ty, span, vec![left, right])
    }

    pub(super) fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId) -> PResult {
        let span = self.span(left).cover(self.span(right));
        let ty = op
            .check(self.ty(left), self.ty(right))
            .map_err(|mismatch| type_error(mismatch, span))?;
        self.node(op.node_kind(), ty, span, vec![left, right])
    }

    pub(super) fn unary(
        &mut self,
        op: UnaryOp,
        start: TextSize,
        operand: NodeId,
    ) -> PResult {
        let span = self.span_from(start);
        let ty = op
            .check(self.ty(operand))
            .map_err(|mismatch| type_error(mismatch, span))?;
        self.node(op.node_kind(), ty, span, vec![operand])
    }

    /// Fails unless `id` can stand where a filter of type `expected` is required.
    pub(super) fn expect_type(
        &self,
        id: NodeId,
        expected: FilterType,
        role: &str,
    ) -> PResult<()> {
        let actual = self.ty(id);
        if accepts(expected, actual) {
            return Ok(());
        }
        Err(Diagnostic::new(DiagnosticKind::UnexpectedType, self.span(id))
            .message(format!("{role} must be {expected}, found {actual}")))
    }

    /// Like [`Self::expect_type`], accepting a set wherever a number is expected.
    pub(super) fn expect_numeric(&self, id: NodeId, role: &str) -> PResult<()> {
        let actual = self.ty(id);
        if actual.is_numeric_like() || actual == FilterType::Any {
            return Ok(());
        }
        Err(Diagnostic::new(DiagnosticKind::UnexpectedType, self.span(id))
            .message(format!("{role} must be Numeric, found {actual}")))
    }
}

fn type_error(mismatch: TypeMismatch, span: TextRange) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::IncompatibleTypes, span).message(mismatch.to_string())
}

fn comparison_op(kind: SyntaxKind) -> Option<BinaryOp> {
    Some(match kind {
        SyntaxKind::Lt => BinaryOp::Lt,
        SyntaxKind::Le => BinaryOp::Le,
        SyntaxKind::Gt => BinaryOp::Gt,
        SyntaxKind::Ge => BinaryOp::Ge,
        SyntaxKind::EqEq => BinaryOp::Eq,
        SyntaxKind::NotEq => BinaryOp::Ne,
        SyntaxKind::BeforeLt => BinaryOp::BeforeLt,
        SyntaxKind::BeforeLe => BinaryOp::BeforeLe,
        SyntaxKind::AfterGt => BinaryOp::AfterGt,
        SyntaxKind::AfterGe => BinaryOp::AfterGe,
        _ => return None,
    })
}

pub(super) fn arrow_op(kind: SyntaxKind) -> Option<BinaryOp> {
    match kind {
        SyntaxKind::AttackArrow => Some(BinaryOp::AttackArrow),
        SyntaxKind::AttackedArrow => Some(BinaryOp::AttackedArrow),
        _ => None,
    }
}
