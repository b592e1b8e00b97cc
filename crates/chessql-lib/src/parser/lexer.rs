//! Lexer for the query language.
//!
//! Produces span-based tokens without storing text; text is sliced from source
//! only when needed.
//!
//! Trivia (whitespace and comments) never reaches the parser. Instead every
//! token records whether trivia separated it from its neighbours, because the
//! move-operator grammar is whitespace-sensitive.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::syntax_kind::SyntaxKind;
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Zero-copy token: kind + span + adjacency, text retrieved via [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
    /// Trivia separates this token from the previous one (or from start of input).
    pub ws_before: bool,
    /// Trivia separates this token from the next one (or from end of input).
    pub ws_after: bool,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self {
            kind,
            span,
            ws_before: false,
            ws_after: false,
        }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens terminated by `Eof`.
///
/// Fails at the first character no token accepts, including the opening
/// quote of an unterminated string and an unterminated `/*`.
pub fn lex(source: &str) -> Result<Vec<Token>, Diagnostic> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut pending_trivia = false;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => return Err(unrecognized(source, span)),
        };

        if kind.is_trivia() {
            pending_trivia = true;
            if let Some(last) = tokens.last_mut() {
                last.ws_after = true;
            }
            continue;
        }

        let mut token = Token::new(kind, range_to_text_range(span));
        token.ws_before = pending_trivia;
        pending_trivia = false;
        tokens.push(token);
    }

    let end = source.len();
    let mut eof = Token::new(SyntaxKind::Eof, range_to_text_range(end..end));
    eof.ws_before = pending_trivia;
    tokens.push(eof);

    Ok(tokens)
}

fn unrecognized(source: &str, span: Range<usize>) -> Diagnostic {
    // Report a single character even when logos consumed more before failing.
    let start = span.start;
    let ch = source[start..].chars().next();
    let end = ch.map_or(start, |c| start + c.len_utf8());
    let diag = Diagnostic::new(
        DiagnosticKind::UnrecognizedCharacter,
        range_to_text_range(start..end),
    );
    match ch {
        Some(c) => diag.message(format!("`{c}`")),
        None => diag,
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
