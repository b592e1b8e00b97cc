//! Parser state and low-level operations.

use indexmap::IndexMap;
use rowan::{TextRange, TextSize};

use super::lexer::{Token, token_text};
use super::syntax_kind::SyntaxKind;
use crate::analyze::{FilterType, FunctionTable, SymbolTable};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::query::{
    DEFAULT_NODE_FUEL, DEFAULT_RECURSION_LIMIT, FilterNode, NodeId, NodeKind, NodeValue, Tree,
};

/// Every production returns the node it built or the fatal diagnostic.
pub(crate) type PResult<T = NodeId> = Result<T, Diagnostic>;

/// What a function parameter name resolves to inside a body.
#[derive(Debug, Clone, Copy)]
pub(super) enum ParamBinding {
    /// Declaration-time check: references become `Parameter` nodes of type `Any`.
    Placeholder,
    /// Call-site expansion: references become copies of the argument subtree.
    Argument(NodeId),
}

pub(super) type Scope = IndexMap<String, ParamBinding>;

/// Everything a finished parse hands to the query container.
#[derive(Debug)]
pub struct ParseResult {
    pub tree: Tree,
    pub root: NodeId,
    pub symbols: SymbolTable,
    pub functions: FunctionTable,
    pub fuel_consumed: u32,
}

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    /// Exclusive end of the token window; narrowed while re-parsing a function body.
    pub(super) end: usize,
    pub(super) tree: Tree,
    pub(super) symbols: SymbolTable,
    pub(super) functions: FunctionTable,
    pub(super) scopes: Vec<Scope>,
    depth: u32,
    recursion_limit: u32,
    fuel_initial: u32,
    fuel_remaining: u32,
}

impl<'src> Parser<'src> {
    /// `tokens` must end with the `Eof` sentinel produced by the lexer.
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let end = tokens.len().saturating_sub(1);
        Self {
            source,
            tokens,
            pos: 0,
            end,
            tree: Tree::new(),
            symbols: SymbolTable::new(),
            functions: FunctionTable::new(),
            scopes: Vec::new(),
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            fuel_initial: DEFAULT_NODE_FUEL,
            fuel_remaining: DEFAULT_NODE_FUEL,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_node_fuel(mut self, fuel: u32) -> Self {
        self.fuel_initial = fuel;
        self.fuel_remaining = fuel;
        self
    }

    pub fn parse(mut self) -> PResult<ParseResult> {
        let root = self.parse_root()?;
        Ok(ParseResult {
            tree: self.tree,
            root,
            symbols: self.symbols,
            functions: self.functions,
            fuel_consumed: self.fuel_initial - self.fuel_remaining,
        })
    }

    /// Token `n` positions ahead; the `Eof` sentinel past the window end.
    pub(super) fn nth(&self, n: usize) -> Token {
        let idx = self.pos + n;
        if idx < self.end {
            return self.tokens[idx];
        }
        let offset = self
            .tokens
            .get(self.end)
            .map_or(self.eof_offset(), |t| t.span.start());
        let mut eof = Token::new(SyntaxKind::Eof, TextRange::empty(offset));
        eof.ws_before = self.tokens.get(self.end).is_some_and(|t| t.ws_before);
        eof
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0).kind
    }

    pub(super) fn current_token(&self) -> Token {
        self.nth(0)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.nth(0).span
    }

    pub(super) fn peek(&self, n: usize) -> SyntaxKind {
        self.nth(n).kind
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    pub(super) fn currently_is(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.text(&self.nth(0))
    }

    /// Consumes the current token and returns it.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.nth(0);
        if !self.at_end() {
            self.pos += 1;
        }
        token
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.currently_is(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// End of the most recently consumed token.
    pub(super) fn last_end(&self) -> TextSize {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span.end(),
            None => TextSize::from(0),
        }
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub(super) fn span_from(&self, start: TextSize) -> TextRange {
        TextRange::new(start, self.last_end().max(start))
    }

    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> PResult<Token> {
        if let Some(token) = self.eat(kind) {
            return Ok(token);
        }
        Err(self.error_unexpected(&format!("expected {what}")))
    }

    /// Consumes a closing delimiter, reporting the opener when it is missing.
    pub(super) fn expect_closing(&mut self, kind: SyntaxKind, open: TextRange) -> PResult<Token> {
        if let Some(token) = self.eat(kind) {
            return Ok(token);
        }
        let diag_kind = match kind {
            SyntaxKind::ParenClose => DiagnosticKind::UnclosedParen,
            SyntaxKind::BraceClose => DiagnosticKind::UnclosedBrace,
            _ => DiagnosticKind::UnclosedBracket,
        };
        let found = self.describe_current();
        Err(Diagnostic::new(diag_kind, self.current_span())
            .message(format!("found {found}"))
            .related_to("opened here", open))
    }

    /// Human-readable name of the current token for diagnostics.
    pub(super) fn describe_current(&self) -> String {
        match self.current() {
            SyntaxKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.current_text()),
        }
    }

    pub(super) fn error_at_current(&self, kind: DiagnosticKind) -> Diagnostic {
        Diagnostic::new(kind, self.current_span())
    }

    pub(super) fn error_unexpected(&self, detail: &str) -> Diagnostic {
        let found = self.describe_current();
        self.error_at_current(DiagnosticKind::UnexpectedToken)
            .message(format!("{detail}, found {found}"))
    }

    pub(super) fn enter_recursion(&mut self) -> PResult<()> {
        if self.depth >= self.recursion_limit {
            return Err(self.error_at_current(DiagnosticKind::RecursionLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Allocates a node, spending one unit of node fuel.
    pub(super) fn alloc(&mut self, node: FilterNode) -> PResult {
        self.consume_fuel(1, node.span)?;
        Ok(self.tree.alloc(node))
    }

    pub(super) fn leaf(&mut self, kind: NodeKind, ty: FilterType, span: TextRange) -> PResult {
        self.alloc(FilterNode::new(kind, ty, span))
    }

    pub(super) fn named_leaf(
        &mut self,
        kind: NodeKind,
        ty: FilterType,
        span: TextRange,
        name: &str,
    ) -> PResult {
        self.alloc(FilterNode::new(kind, ty, span).with_value(NodeValue::Name(name.to_owned())))
    }

    pub(super) fn node(
        &mut self,
        kind: NodeKind,
        ty: FilterType,
        span: TextRange,
        children: Vec<NodeId>,
    ) -> PResult {
        self.alloc(FilterNode::new(kind, ty, span).with_children(children))
    }

    /// Copies an argument subtree into a function body expansion.
    pub(super) fn copy_subtree(&mut self, id: NodeId, span: TextRange) -> PResult {
        let size = self.tree.subtree_size(id) as u32;
        self.consume_fuel(size, span)?;
        Ok(self.tree.copy_subtree(id))
    }

    fn consume_fuel(&mut self, amount: u32, span: TextRange) -> PResult<()> {
        if self.fuel_remaining < amount {
            self.fuel_remaining = 0;
            return Err(Diagnostic::new(DiagnosticKind::NodeFuelExhausted, span));
        }
        self.fuel_remaining -= amount;
        Ok(())
    }

    pub(super) fn ty(&self, id: NodeId) -> FilterType {
        self.tree.ty(id)
    }

    pub(super) fn kind(&self, id: NodeId) -> NodeKind {
        self.tree.kind(id)
    }

    pub(super) fn span(&self, id: NodeId) -> TextRange {
        self.tree.span(id)
    }

    /// Innermost binding of a function parameter name.
    pub(super) fn lookup_param(&self, name: &str) -> Option<ParamBinding> {
        self.scopes.last().and_then(|scope| scope.get(name).copied())
    }

    pub(super) fn in_function_body(&self) -> bool {
        !self.scopes.is_empty()
    }
}
