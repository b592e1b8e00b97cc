//! Primaries: literals, keyword filters, groups, conditionals and binders.

use rowan::TextRange;

use super::moves::MoveContext;
use crate::analyze::FilterType;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parser::core::PResult;
use crate::parser::{Parser, SyntaxKind};
use crate::query::{FilterNode, NodeKind, NodeValue};

impl Parser<'_> {
    /// A primary, optionally followed by a move operator that takes it as
    /// its from-operand.
    pub(super) fn parse_postfix(&mut self) -> PResult {
        if self.current().is_move_operator() {
            return self.parse_move(None, MoveContext::Statement);
        }
        let primary = self.parse_primary()?;
        if self.current().is_move_operator() && self.is_move_source(primary) {
            return self.parse_move(Some(primary), MoveContext::Statement);
        }
        Ok(primary)
    }

    /// Every nesting construct bottoms out here, so this is where depth is counted.
    pub(super) fn parse_primary(&mut self) -> PResult {
        self.enter_recursion()?;
        let result = self.parse_primary_inner();
        self.exit_recursion();
        result
    }

    fn parse_primary_inner(&mut self) -> PResult {
        let token = self.current_token();
        match token.kind {
            SyntaxKind::Integer => self.parse_integer(),
            SyntaxKind::String => {
                self.bump();
                let text = self.text(&token);
                let contents = text[1..text.len() - 1].to_owned();
                self.alloc(
                    FilterNode::new(NodeKind::String, FilterType::String, token.span)
                        .with_value(NodeValue::Text(contents)),
                )
            }
            SyntaxKind::Designator => self.parse_designator(),
            SyntaxKind::ParenOpen => self.parse_parenthesized(),
            SyntaxKind::BraceOpen => self.parse_brace_compound(),
            SyntaxKind::Ident => self.parse_identifier(),
            SyntaxKind::KwIf => self.parse_if(),
            SyntaxKind::KwSquare | SyntaxKind::ForAll | SyntaxKind::KwPiece => self.parse_binder(),
            SyntaxKind::KwMax | SyntaxKind::KwMin => self.parse_extremum(),
            SyntaxKind::KwPlayer => self.parse_player(),
            SyntaxKind::KwMove => self.parse_move_filter(),
            SyntaxKind::KwPin => self.parse_pin(),
            SyntaxKind::KwFind => self.parse_find(),
            SyntaxKind::KwPath => self.parse_path(),
            SyntaxKind::KwUnbind | SyntaxKind::KwIsBound | SyntaxKind::KwIsUnbound => {
                self.parse_binding_query()
            }
            SyntaxKind::KwFunction if self.in_function_body() => {
                Err(self.error_at_current(DiagnosticKind::NestedFunction))
            }
            kind => match keyword_filter(kind) {
                Some((node_kind, ty)) => {
                    self.bump();
                    self.leaf(node_kind, ty, token.span)
                }
                None => {
                    let found = self.describe_current();
                    Err(self
                        .error_at_current(DiagnosticKind::ExpectedFilter)
                        .message(format!("found {found}")))
                }
            },
        }
    }

    pub(super) fn parse_integer(&mut self) -> PResult {
        let (value, span) = self.parse_integer_value()?;
        self.alloc(
            FilterNode::new(NodeKind::Integer, FilterType::Numeric, span)
                .with_value(NodeValue::Integer(value)),
        )
    }

    /// Consumes an integer literal token and returns its value.
    pub(super) fn parse_integer_value(&mut self) -> PResult<(i64, TextRange)> {
        let token = self.expect(SyntaxKind::Integer, "an integer")?;
        let text = self.text(&token);
        let value = text.parse::<i64>().map_err(|_| {
            Diagnostic::new(DiagnosticKind::IntegerOverflow, token.span).message(format!("`{text}`"))
        })?;
        Ok((value, token.span))
    }

    pub(super) fn parse_designator(&mut self) -> PResult {
        let token = self.expect(SyntaxKind::Designator, "a piece designator")?;
        let text = self.text(&token);
        self.named_leaf(NodeKind::PieceDesignator, FilterType::Set, token.span, text)
    }

    fn parse_parenthesized(&mut self) -> PResult {
        let open = self.bump();
        if self.currently_is(SyntaxKind::ParenClose) {
            return Err(Diagnostic::new(
                DiagnosticKind::EmptyGroup,
                open.span.cover(self.current_span()),
            ));
        }
        let inner = self.parse_statement()?;
        self.expect_closing(SyntaxKind::ParenClose, open.span)?;
        let span = self.span_from(open.span.start());
        let ty = self.ty(inner);
        self.node(NodeKind::Parenthesized, ty, span, vec![inner])
    }

    /// `{ filter... }`. A brace holding only a repetition (`{2}`, `{1,3}`) is
    /// never a compound.
    pub(crate) fn parse_brace_compound(&mut self) -> PResult {
        if let Some(len) = self.repetition_brace_len(0) {
            let span = self.current_span().cover(self.nth(len - 1).span);
            return Err(Diagnostic::new(DiagnosticKind::IntegerLikeBrace, span));
        }
        let open = self.expect(SyntaxKind::BraceOpen, "`{`")?;
        if self.currently_is(SyntaxKind::BraceClose) {
            return Err(Diagnostic::new(
                DiagnosticKind::EmptyGroup,
                open.span.cover(self.current_span()),
            ));
        }
        let mut children = Vec::new();
        while !matches!(self.current(), SyntaxKind::BraceClose | SyntaxKind::Eof) {
            children.push(self.parse_statement()?);
        }
        self.expect_closing(SyntaxKind::BraceClose, open.span)?;
        let span = self.span_from(open.span.start());
        let ty = children
            .last()
            .map_or(FilterType::Logical, |&last| self.ty(last));
        self.node(NodeKind::BraceCompound, ty, span, children)
    }

    /// Token count of a repetition-shaped brace starting `n` tokens ahead:
    /// `{+}`, `{*}`, `{n}`, `{n,m}`, `{n,}` or `{,m}`.
    pub(crate) fn repetition_brace_len(&self, n: usize) -> Option<usize> {
        use SyntaxKind::*;
        if self.peek(n) != BraceOpen {
            return None;
        }
        let kinds = [
            self.peek(n + 1),
            self.peek(n + 2),
            self.peek(n + 3),
            self.peek(n + 4),
        ];
        match kinds {
            [Plus | Star | Integer, BraceClose, _, _] => Some(3),
            [Integer, Comma, BraceClose, _] | [Comma, Integer, BraceClose, _] => Some(4),
            [Integer, Comma, Integer, BraceClose] => Some(5),
            _ => None,
        }
    }

    /// `if C [then] T [else E]`.
    fn parse_if(&mut self) -> PResult {
        let start = self.bump().span.start();
        let cond = self.parse_expr()?;
        self.eat(SyntaxKind::KwThen);
        let then = self.parse_expr()?;
        let mut children = vec![cond, then];
        let mut ty = FilterType::Logical;
        if self.eat(SyntaxKind::KwElse).is_some() {
            let otherwise = self.parse_expr()?;
            if self.ty(then) == self.ty(otherwise) {
                ty = self.ty(then);
            }
            children.push(otherwise);
        }
        let span = self.span_from(start);
        self.node(NodeKind::If, ty, span, children)
    }

    /// `square [all] x in S body`, `piece [all] x in S body`, `∃x∊S body`, `∀x∊S body`.
    fn parse_binder(&mut self) -> PResult {
        let keyword = self.bump();
        let all = keyword.kind == SyntaxKind::ForAll || self.eat(SyntaxKind::KwAll).is_some();
        let (kind, ty) = match (keyword.kind, all) {
            (SyntaxKind::KwPiece, false) => (NodeKind::Piece, FilterType::Set),
            (SyntaxKind::KwPiece, true) => (NodeKind::PieceAll, FilterType::Logical),
            (_, false) => (NodeKind::Square, FilterType::Set),
            (_, true) => (NodeKind::SquareAll, FilterType::Logical),
        };

        let name_token = self.expect(SyntaxKind::Ident, "a variable name")?;
        let name = self.text(&name_token);
        self.check_assignable(name, name_token.span)?;
        self.symbols
            .declare_or_check(name, FilterType::Set, name_token.span)?;
        self.symbols.bind(name);
        let var = self.named_leaf(NodeKind::Variable, FilterType::Set, name_token.span, name)?;

        self.expect(SyntaxKind::KwIn, "`in`")?;
        let domain = self.parse_union()?;
        self.expect_type(domain, FilterType::Set, "the binder domain")?;
        let body = self.parse_not()?;

        let span = self.span_from(keyword.span.start());
        self.node(kind, ty, span, vec![var, domain, body])
    }

    /// `max(a b ...)` / `min(a b ...)`.
    fn parse_extremum(&mut self) -> PResult {
        let keyword = self.bump();
        let kind = if keyword.kind == SyntaxKind::KwMax {
            NodeKind::Max
        } else {
            NodeKind::Min
        };
        let open = self.expect(SyntaxKind::ParenOpen, "`(`")?;
        let mut args = Vec::new();
        while !matches!(self.current(), SyntaxKind::ParenClose | SyntaxKind::Eof) {
            let arg = self.parse_expr()?;
            self.expect_numeric(arg, "an argument")?;
            args.push(arg);
        }
        self.expect_closing(SyntaxKind::ParenClose, open.span)?;
        if args.is_empty() {
            let span = self.span_from(open.span.start());
            return Err(Diagnostic::new(DiagnosticKind::EmptyGroup, span));
        }
        let span = self.span_from(keyword.span.start());
        self.node(kind, FilterType::Numeric, span, args)
    }

    /// `player`, `player white`, `player black`.
    fn parse_player(&mut self) -> PResult {
        let start = self.bump().span.start();
        let kind = if self.eat(SyntaxKind::KwWhite).is_some() {
            NodeKind::PlayerWhite
        } else if self.eat(SyntaxKind::KwBlack).is_some() {
            NodeKind::PlayerBlack
        } else {
            NodeKind::Player
        };
        let span = self.span_from(start);
        self.leaf(kind, FilterType::String, span)
    }
}

/// Zero-argument keyword filters and their fixed types.
fn keyword_filter(kind: SyntaxKind) -> Option<(NodeKind, FilterType)> {
    use FilterType::*;
    Some(match kind {
        SyntaxKind::KwTrue => (NodeKind::True, Logical),
        SyntaxKind::KwFalse => (NodeKind::False, Logical),
        SyntaxKind::KwCheck => (NodeKind::Check, Logical),
        SyntaxKind::KwMate => (NodeKind::Mate, Logical),
        SyntaxKind::KwStalemate => (NodeKind::Stalemate, Logical),
        SyntaxKind::KwWtm => (NodeKind::Wtm, Logical),
        SyntaxKind::KwBtm => (NodeKind::Btm, Logical),
        SyntaxKind::KwInitial => (NodeKind::Initial, Logical),
        SyntaxKind::KwTerminal => (NodeKind::Terminal, Logical),
        SyntaxKind::KwMainline => (NodeKind::Mainline, Logical),
        SyntaxKind::KwVariation => (NodeKind::Variation, Logical),
        SyntaxKind::KwPly => (NodeKind::Ply, Numeric),
        SyntaxKind::KwMoveNumber => (NodeKind::MoveNumber, Numeric),
        SyntaxKind::KwGameNumber => (NodeKind::GameNumber, Numeric),
        SyntaxKind::KwEvent => (NodeKind::Event, String),
        SyntaxKind::KwSite => (NodeKind::Site, String),
        SyntaxKind::KwCurrentPosition => (NodeKind::CurrentPosition, Position),
        SyntaxKind::KwInitialPosition => (NodeKind::InitialPosition, Position),
        SyntaxKind::KwParent => (NodeKind::Parent, Position),
        _ => return None,
    })
}
