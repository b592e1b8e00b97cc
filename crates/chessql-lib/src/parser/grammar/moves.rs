//! Move operators `--` and `[x]`.
//!
//! Both operands are optional and either may be synthesized as `AnySquare`,
//! which makes the surface syntax whitespace-sensitive: a bare operator
//! glued to a following compound construct cannot tell whether that construct
//! is its destination or a sibling filter, and is rejected.

use crate::analyze::FilterType;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::core::{PResult, ParamBinding};
use crate::parser::lexer::Token;
use crate::parser::{Parser, SyntaxKind};
use crate::query::{NodeId, NodeKind};

/// Where a move operator appears; only statement filters take a target clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveContext {
    Statement,
    Path,
}

const PROMOTION_PIECES: &[char] = &[
    'K', 'Q', 'R', 'B', 'N', 'P', 'k', 'q', 'r', 'b', 'n', 'p', 'A', 'a', '♔', '♕', '♖', '♗',
    '♘', '♙', '♚', '♛', '♜', '♝', '♞', '♟', '△', '▲',
];

impl Parser<'_> {
    /// Whether `id` may serve as the explicit from-operand of a following move.
    pub(super) fn is_move_source(&self, id: NodeId) -> bool {
        matches!(self.ty(id), FilterType::Set | FilterType::Any) && !self.kind(id).is_move()
    }

    /// Parses a move operator at the current token. `left` is the already
    /// parsed from-operand, if any.
    pub(crate) fn parse_move(&mut self, left: Option<NodeId>, ctx: MoveContext) -> PResult {
        let op = self.bump();
        let capture = op.kind == SyntaxKind::Capture;

        if left.is_none() {
            self.reject_ambiguous_bare_move(&op, ctx)?;
        }

        let right = self.parse_move_destination()?;

        let start = left.map_or(op.span.start(), |id| self.span(id).start());
        let from = match left {
            Some(id) => id,
            None => self.leaf(NodeKind::AnySquare, FilterType::Set, op.span)?,
        };
        let to = match right {
            Some(id) => id,
            None => self.leaf(NodeKind::AnySquare, FilterType::Set, op.span)?,
        };
        let mut children = vec![from, to];

        if self.currently_is(SyntaxKind::Equals) {
            children.push(self.parse_promotion()?);
        }

        if ctx == MoveContext::Statement
            && matches!(
                self.current(),
                SyntaxKind::ParenOpen | SyntaxKind::BraceOpen
            )
        {
            children.push(self.parse_target()?);
        }

        let kind = move_kind(capture, left.is_some(), right.is_some());
        let span = self.span_from(start);
        self.node(kind, FilterType::Set, span, children)
    }

    fn reject_ambiguous_bare_move(&self, op: &Token, ctx: MoveContext) -> PResult<()> {
        let next = self.current_token();

        // Inside `path` a group after a bare move is rejected even with space.
        if ctx == MoveContext::Path && next.kind == SyntaxKind::ParenOpen {
            return Err(Diagnostic::new(
                DiagnosticKind::AmbiguousConstituentGroup,
                op.span.cover(next.span),
            ));
        }

        if op.ws_after {
            return Ok(());
        }

        let ambiguous = match next.kind {
            SyntaxKind::Dash | SyntaxKind::Capture | SyntaxKind::ParenOpen => true,
            SyntaxKind::Designator => self.text(&next).starts_with('['),
            SyntaxKind::BraceOpen => self.repetition_brace_len(0).is_none(),
            SyntaxKind::KwAnd => !next.ws_after,
            _ => false,
        };
        if !ambiguous {
            return Ok(());
        }
        Err(
            Diagnostic::new(DiagnosticKind::AmbiguousMove, op.span.cover(next.span)).message(
                format!(
                    "`{}` directly followed by `{}`",
                    self.text(op),
                    self.text(&next)
                ),
            ),
        )
    }

    /// A designator, or the name of a set-valued variable or parameter.
    fn parse_move_destination(&mut self) -> PResult<Option<NodeId>> {
        match self.current() {
            SyntaxKind::Designator => self.parse_designator().map(Some),
            SyntaxKind::Ident if self.is_set_name(self.current_text()) => {
                self.parse_identifier().map(Some)
            }
            _ => Ok(None),
        }
    }

    pub(super) fn is_set_name(&self, name: &str) -> bool {
        if let Some(binding) = self.lookup_param(name) {
            return match binding {
                ParamBinding::Placeholder => true,
                ParamBinding::Argument(arg) => {
                    matches!(self.ty(arg), FilterType::Set | FilterType::Any)
                }
            };
        }
        self.symbols.get(name).is_some_and(|var| {
            !var.is_dictionary() && matches!(var.ty, Some(FilterType::Set | FilterType::Any))
        })
    }

    /// `=` followed by exactly one unqualified piece.
    fn parse_promotion(&mut self) -> PResult {
        let eq = self.bump();
        let piece = self.current_token();
        let text = self.text(&piece);
        let mut chars = text.chars();
        let single = piece.kind == SyntaxKind::Designator
            && matches!((chars.next(), chars.next()), (Some(c), None) if PROMOTION_PIECES.contains(&c));
        if !single {
            let found = self.describe_current();
            return Err(
                Diagnostic::new(DiagnosticKind::InvalidPromotion, eq.span.cover(piece.span))
                    .message(format!("found {found}")),
            );
        }
        let designator = self.parse_designator()?;
        let span = self.span_from(eq.span.start());
        self.node(NodeKind::Promotion, FilterType::Set, span, vec![designator])
    }

    /// `(filter)` or `{filters}` constraining the position after the move.
    fn parse_target(&mut self) -> PResult {
        let start = self.current_span().start();
        let inner = if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_brace_compound()?
        } else {
            let open = self.bump();
            if self.currently_is(SyntaxKind::ParenClose) {
                return Err(Diagnostic::new(
                    DiagnosticKind::EmptyGroup,
                    open.span.cover(self.current_span()),
                ));
            }
            let inner = self.parse_statement()?;
            self.expect_closing(SyntaxKind::ParenClose, open.span)?;
            inner
        };
        let span = self.span_from(start);
        let ty = self.ty(inner);
        self.node(NodeKind::Target, ty, span, vec![inner])
    }
}

fn move_kind(capture: bool, left: bool, right: bool) -> NodeKind {
    match (capture, left, right) {
        (false, false, false) => NodeKind::DashII,
        (false, true, false) => NodeKind::DashLI,
        (false, false, true) => NodeKind::DashIR,
        (false, true, true) => NodeKind::DashLR,
        (true, false, false) => NodeKind::TakeII,
        (true, true, false) => NodeKind::TakeLI,
        (true, false, true) => NodeKind::TakeIR,
        (true, true, true) => NodeKind::TakeLR,
    }
}
