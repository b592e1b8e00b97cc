//! Token kinds for the query language.
//!
//! Every operator with an ASCII and a Unicode spelling has exactly one variant
//! here; logos maps both spellings onto it, so nothing past the lexer can tell
//! which one was written.
//!
//! Keywords are plain `#[token]` literals. Identifiers only win when they are
//! strictly longer than any keyword or designator match.

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("#")]
    Hash,

    #[token("~")]
    Tilde,

    // Assignment family
    #[token("=")]
    Equals,

    #[token("+=")]
    PlusEquals,

    #[token("-=")]
    MinusEquals,

    #[token("*=")]
    StarEquals,

    #[token("/=")]
    SlashEquals,

    #[token("%=")]
    PercentEquals,

    // Comparisons
    #[token("==")]
    EqEq,

    #[token("!=")]
    #[token("≠")]
    NotEq,

    #[token("<")]
    Lt,

    #[token("<=")]
    #[token("≤")]
    Le,

    #[token(">")]
    Gt,

    #[token(">=")]
    #[token("≥")]
    Ge,

    /// Ancestor ordering, distinct from `<`.
    #[token("[<]")]
    #[token("≺")]
    BeforeLt,

    #[token("[<=]")]
    #[token("≼")]
    BeforeLe,

    #[token("[>]")]
    #[token("≻")]
    AfterGt,

    #[token("[>=]")]
    #[token("≽")]
    AfterGe,

    // Arithmetic
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    // Sets
    #[token("|")]
    #[token("∪")]
    Union,

    #[token("&")]
    #[token("∩")]
    Intersection,

    // Moves and attacks
    #[token("--")]
    #[token("――")]
    Dash,

    #[token("[x]")]
    #[token("×")]
    Capture,

    #[token("-->")]
    #[token("→")]
    AttackArrow,

    #[token("<--")]
    #[token("←")]
    AttackedArrow,

    // Keywords
    #[token("and")]
    KwAnd,

    #[token("or")]
    KwOr,

    #[token("not")]
    #[token("¬")]
    KwNot,

    #[token("in")]
    #[token("∊")]
    #[token("∈")]
    KwIn,

    #[token("if")]
    KwIf,

    #[token("then")]
    KwThen,

    #[token("else")]
    KwElse,

    #[token("square")]
    #[token("∃")]
    KwSquare,

    /// `∀`, the single-character spelling of `square all`.
    #[token("∀")]
    ForAll,

    #[token("piece")]
    KwPiece,

    #[token("all")]
    KwAll,

    #[token("function")]
    KwFunction,

    #[token("dictionary")]
    KwDictionary,

    #[token("unbind")]
    KwUnbind,

    #[token("isbound")]
    KwIsBound,

    #[token("isunbound")]
    KwIsUnbound,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("check")]
    KwCheck,

    #[token("mate")]
    KwMate,

    #[token("stalemate")]
    KwStalemate,

    #[token("wtm")]
    KwWtm,

    #[token("btm")]
    KwBtm,

    #[token("initial")]
    KwInitial,

    #[token("terminal")]
    KwTerminal,

    #[token("mainline")]
    KwMainline,

    #[token("variation")]
    KwVariation,

    #[token("ply")]
    KwPly,

    #[token("movenumber")]
    KwMoveNumber,

    #[token("gamenumber")]
    KwGameNumber,

    #[token("event")]
    KwEvent,

    #[token("site")]
    KwSite,

    #[token("player")]
    KwPlayer,

    #[token("white")]
    KwWhite,

    #[token("black")]
    KwBlack,

    #[token("currentposition")]
    KwCurrentPosition,

    #[token("initialposition")]
    KwInitialPosition,

    #[token("parent")]
    KwParent,

    #[token("light")]
    KwLight,

    #[token("dark")]
    KwDark,

    #[token("power")]
    KwPower,

    #[token("abs")]
    KwAbs,

    #[token("max")]
    KwMax,

    #[token("min")]
    KwMin,

    #[token("move")]
    KwMove,

    #[token("from")]
    KwFrom,

    #[token("to")]
    KwTo,

    #[token("capture")]
    KwCapture,

    #[token("promote")]
    KwPromote,

    #[token("legal")]
    KwLegal,

    #[token("pseudolegal")]
    KwPseudoLegal,

    #[token("previous")]
    KwPrevious,

    #[token("null")]
    KwNull,

    #[token("primary")]
    KwPrimary,

    #[token("secondary")]
    KwSecondary,

    #[token("pin")]
    KwPin,

    #[token("through")]
    KwThrough,

    #[token("path")]
    KwPath,

    #[token("focus")]
    KwFocus,

    #[token("title")]
    KwTitle,

    #[token("quiet")]
    KwQuiet,

    #[token("piecepath")]
    KwPiecePath,

    #[token("keepallbest")]
    KwKeepAllBest,

    #[token("firstmatch")]
    KwFirstMatch,

    #[token("lastposition")]
    KwLastPosition,

    #[token("nestban")]
    KwNestBan,

    #[token("verbose")]
    KwVerbose,

    #[token("find")]
    KwFind,

    /// Piece designator: an optional piece part (letter or bracketed letter set)
    /// followed by an optional square part (square, file/rank range, or bracketed
    /// comma list), or one of the all-squares spellings.
    #[regex(
        r"(?:[KQRBNPkqrbnpAa_♔♕♖♗♘♙♚♛♜♝♞♟△▲□◭]|\[[KQRBNPkqrbnpAa_♔♕♖♗♘♙♚♛♜♝♞♟△▲□◭]+\])(?:[a-h](?:-[a-h])?[1-8](?:-[1-8])?|\[[a-h](?:-[a-h])?[1-8](?:-[1-8])?(?:,[a-h](?:-[a-h])?[1-8](?:-[1-8])?)*\])?|(?:[a-h](?:-[a-h])?[1-8](?:-[1-8])?|\[[a-h](?:-[a-h])?[1-8](?:-[1-8])?(?:,[a-h](?:-[a-h])?[1-8](?:-[1-8])?)*\])",
        priority = 10
    )]
    #[token(".")]
    #[token("▦")]
    Designator,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""[^"\n]*""#)]
    String,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    /// End-of-input sentinel appended by the lexer; never produced by logos.
    Eof,
}

/// Consumes the rest of a block comment; an unterminated comment is a lex error.
fn block_comment(lex: &mut Lexer<SyntaxKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }

    /// Tokens that can open a move operator: `--` and `[x]`.
    #[inline]
    pub fn is_move_operator(self) -> bool {
        matches!(self, SyntaxKind::Dash | SyntaxKind::Capture)
    }

    /// Compound assignment operators, excluding plain `=`.
    #[inline]
    pub fn is_compound_assign(self) -> bool {
        matches!(
            self,
            SyntaxKind::PlusEquals
                | SyntaxKind::MinusEquals
                | SyntaxKind::StarEquals
                | SyntaxKind::SlashEquals
                | SyntaxKind::PercentEquals
        )
    }
}
