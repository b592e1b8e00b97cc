//! Filters configured by an unordered set of keyword parameters: `move`,
//! `pin` and `find`.
//!
//! Parameters may appear in any order but each at most once. The node lists
//! the given parameters in canonical order, followed by a default node for
//! every omitted parameter that has one.

use rowan::TextRange;

use crate::analyze::FilterType;
use crate::diagnostics::DiagnosticKind;
use crate::parser::core::PResult;
use crate::parser::{Parser, SyntaxKind};
use crate::query::{FilterNode, NodeId, NodeKind, NodeValue};

/// What follows a parameter keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParamArg {
    /// Nothing; the keyword alone.
    Flag,
    Set,
    Numeric,
    /// A string literal.
    Text,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ParamSpec {
    pub keyword: SyntaxKind,
    pub kind: NodeKind,
    pub arg: ParamArg,
    /// A keyword directly after the parameter keyword that switches its kind,
    /// as in `focus capture`.
    pub modifier: Option<(SyntaxKind, NodeKind)>,
    /// Node and leaf synthesized when the parameter is omitted.
    pub default: Option<(NodeKind, NodeKind)>,
}

impl ParamSpec {
    pub const fn new(keyword: SyntaxKind, kind: NodeKind, arg: ParamArg) -> Self {
        Self {
            keyword,
            kind,
            arg,
            modifier: None,
            default: None,
        }
    }

    pub const fn with_default(mut self, node: NodeKind, leaf: NodeKind) -> Self {
        self.default = Some((node, leaf));
        self
    }

    pub const fn with_modifier(mut self, keyword: SyntaxKind, kind: NodeKind) -> Self {
        self.modifier = Some((keyword, kind));
        self
    }
}

/// Canonical order of `move` parameters.
const MOVE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new(SyntaxKind::KwFrom, NodeKind::From, ParamArg::Set)
        .with_default(NodeKind::FromDefault, NodeKind::AnyPiece),
    ParamSpec::new(SyntaxKind::KwTo, NodeKind::To, ParamArg::Set)
        .with_default(NodeKind::ToDefault, NodeKind::AnySquare),
    ParamSpec::new(SyntaxKind::KwCapture, NodeKind::Capture, ParamArg::Set),
    ParamSpec::new(SyntaxKind::KwPromote, NodeKind::Promote, ParamArg::Set),
    ParamSpec::new(SyntaxKind::KwLegal, NodeKind::Legal, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwPseudoLegal, NodeKind::PseudoLegal, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwPrevious, NodeKind::Previous, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwNull, NodeKind::NullMove, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwPrimary, NodeKind::Primary, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwSecondary, NodeKind::Secondary, ParamArg::Flag),
];

/// Canonical order of `pin` parameters.
const PIN_PARAMS: &[ParamSpec] = &[
    ParamSpec::new(SyntaxKind::KwThrough, NodeKind::Through, ParamArg::Set)
        .with_default(NodeKind::ThroughDefault, NodeKind::AnyPiece),
    ParamSpec::new(SyntaxKind::KwFrom, NodeKind::From, ParamArg::Set)
        .with_default(NodeKind::FromDefault, NodeKind::AnyPiece),
    ParamSpec::new(SyntaxKind::KwTo, NodeKind::To, ParamArg::Set)
        .with_default(NodeKind::ToDefault, NodeKind::AnyKing),
];

/// Keywords `find` takes before `<--`.
const FIND_PARAMS: &[ParamSpec] = &[
    ParamSpec::new(SyntaxKind::KwAll, NodeKind::FindAll, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwQuiet, NodeKind::Quiet, ParamArg::Flag),
];

/// Canonical order of `path` parameters.
pub(super) const PATH_PARAMS: &[ParamSpec] = &[
    ParamSpec::new(SyntaxKind::KwPrimary, NodeKind::Primary, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwFocus, NodeKind::Focus, ParamArg::Set)
        .with_modifier(SyntaxKind::KwCapture, NodeKind::FocusCapture),
    ParamSpec::new(SyntaxKind::KwMax, NodeKind::PathMax, ParamArg::Numeric),
    ParamSpec::new(SyntaxKind::KwTitle, NodeKind::Title, ParamArg::Text),
    ParamSpec::new(SyntaxKind::KwQuiet, NodeKind::Quiet, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwPiecePath, NodeKind::PiecePath, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwKeepAllBest, NodeKind::KeepAllBest, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwFirstMatch, NodeKind::FirstMatch, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwLastPosition, NodeKind::LastPosition, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwNestBan, NodeKind::NestBan, ParamArg::Flag),
    ParamSpec::new(SyntaxKind::KwVerbose, NodeKind::Verbose, ParamArg::Flag),
];

impl Parser<'_> {
    /// Parses keyword parameters from `specs` until the current token is not
    /// one of them. Returns the explicit parameters in canonical order, then
    /// the defaults for omitted ones, each default located at `anchor`.
    pub(super) fn parse_params(
        &mut self,
        specs: &[ParamSpec],
        anchor: TextRange,
    ) -> PResult<Vec<NodeId>> {
        let mut given: Vec<Option<NodeId>> = vec![None; specs.len()];
        while let Some(idx) = specs.iter().position(|s| s.keyword == self.current()) {
            if let Some(first) = given[idx] {
                let found = self.current_text();
                return Err(self
                    .error_at_current(DiagnosticKind::DuplicateParameter)
                    .message(found)
                    .related_to("first given here", self.span(first)));
            }
            given[idx] = Some(self.parse_param(&specs[idx])?);
        }

        let mut nodes: Vec<NodeId> = given.iter().flatten().copied().collect();
        for (spec, slot) in specs.iter().zip(&given) {
            let (None, Some((node_kind, leaf_kind))) = (slot, spec.default) else {
                continue;
            };
            let leaf = self.leaf(leaf_kind, FilterType::Set, anchor)?;
            nodes.push(self.node(node_kind, FilterType::Set, anchor, vec![leaf])?);
        }
        Ok(nodes)
    }

    fn parse_param(&mut self, spec: &ParamSpec) -> PResult {
        let start = self.bump().span.start();
        let mut kind = spec.kind;
        if let Some((modifier, modified)) = spec.modifier
            && self.eat(modifier).is_some()
        {
            kind = modified;
        }

        let (ty, children) = match spec.arg {
            ParamArg::Flag => (FilterType::Logical, Vec::new()),
            ParamArg::Set => {
                let arg = self.parse_union()?;
                self.expect_type(arg, FilterType::Set, "the parameter")?;
                (FilterType::Set, vec![arg])
            }
            ParamArg::Numeric => {
                let arg = self.parse_union()?;
                self.expect_numeric(arg, "the parameter")?;
                (FilterType::Numeric, vec![arg])
            }
            ParamArg::Text => {
                if !self.currently_is(SyntaxKind::String) {
                    let found = self.describe_current();
                    return Err(self
                        .error_at_current(DiagnosticKind::ExpectedString)
                        .message(format!("found {found}")));
                }
                let arg = self.parse_primary()?;
                (FilterType::String, vec![arg])
            }
        };
        let span = self.span_from(start);
        self.node(kind, ty, span, children)
    }

    /// `move` followed by its parameters.
    pub(super) fn parse_move_filter(&mut self) -> PResult {
        let keyword = self.bump();
        let children = self.parse_params(MOVE_PARAMS, keyword.span)?;
        let span = self.span_from(keyword.span.start());
        self.node(NodeKind::Move, FilterType::Set, span, children)
    }

    /// `pin` followed by its parameters.
    pub(super) fn parse_pin(&mut self) -> PResult {
        let keyword = self.bump();
        let children = self.parse_params(PIN_PARAMS, keyword.span)?;
        let span = self.span_from(keyword.span.start());
        self.node(NodeKind::Pin, FilterType::Set, span, children)
    }

    /// `find [all] [quiet] [<--] [n [m]] body`. Nothing but a range may
    /// follow `<--`.
    pub(super) fn parse_find(&mut self) -> PResult {
        let keyword = self.bump();
        let mut children = self.parse_params(FIND_PARAMS, keyword.span)?;
        let all = children
            .iter()
            .any(|&id| self.kind(id) == NodeKind::FindAll);

        if let Some(arrow) = self.eat(SyntaxKind::AttackedArrow) {
            children.push(self.leaf(NodeKind::FindBackward, FilterType::Logical, arrow.span)?);
        }

        if self.currently_is(SyntaxKind::Integer) {
            let (min, min_span) = self.parse_integer_value()?;
            let mut max = min;
            let mut span = min_span;
            if self.currently_is(SyntaxKind::Integer) {
                let (value, max_span) = self.parse_integer_value()?;
                max = value;
                span = span.cover(max_span);
            }
            children.push(self.alloc(
                FilterNode::new(NodeKind::Range, FilterType::Numeric, span).with_value(
                    NodeValue::Range {
                        min: Some(min),
                        max: Some(max),
                    },
                ),
            )?);
        }

        self.enter_recursion()?;
        let body = self.parse_not();
        self.exit_recursion();
        children.push(body?);

        let ty = if all {
            FilterType::Numeric
        } else {
            FilterType::Position
        };
        let span = self.span_from(keyword.span.start());
        self.node(NodeKind::Find, ty, span, children)
    }
}
