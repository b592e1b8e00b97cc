use rowan::TextRange;

/// Diagnostic kinds, grouped by the stage that reports them.
///
/// The grouping is exposed through [`DiagnosticKind::category`] so callers can
/// tell a type rejection from a grammatical one without a second error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Lexer
    UnrecognizedCharacter,

    // Resource limits
    RecursionLimitExceeded,
    NodeFuelExhausted,

    // Delimiters
    UnclosedParen,
    UnclosedBrace,
    UnclosedBracket,

    // User omitted something required
    ExpectedFilter,
    ExpectedIdentifier,
    ExpectedInteger,
    ExpectedString,
    ExpectedKeyword,
    ExpectedConstituent,

    // User wrote something that doesn't belong
    UnexpectedToken,
    EmptyGroup,
    IntegerLikeBrace,
    AmbiguousMove,
    InvalidPromotion,
    AmbiguousConstituentGroup,
    DuplicateParameter,
    MisplacedAssignment,
    NestedFunction,
    IntegerOverflow,

    // Names and binding state
    UndefinedName,
    UndefinedFunction,
    DuplicateDefinition,
    NotADictionary,
    DictionaryWithoutKey,
    KeyedUnbind,
    ArgumentCountMismatch,
    AssignToParameter,

    // Type lattice
    IncompatibleTypes,
    VariableTypeMismatch,
    UnexpectedType,

    // Post-parse validation
    ConflictingParameters,
    InvalidRange,
}

/// Coarse classification of a diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lexical,
    Limit,
    Syntax,
    Binding,
    Type,
    Validation,
}

impl DiagnosticKind {
    pub fn category(&self) -> Category {
        use DiagnosticKind::*;
        match self {
            UnrecognizedCharacter => Category::Lexical,
            RecursionLimitExceeded | NodeFuelExhausted => Category::Limit,
            UndefinedName | UndefinedFunction | DuplicateDefinition | NotADictionary
            | DictionaryWithoutKey | KeyedUnbind | ArgumentCountMismatch | AssignToParameter => {
                Category::Binding
            }
            IncompatibleTypes | VariableTypeMismatch | UnexpectedType => Category::Type,
            ConflictingParameters | InvalidRange => Category::Validation,
            _ => Category::Syntax,
        }
    }

    /// Whether this kind is a rejection by the type lattice or the variable model.
    pub fn is_type_error(&self) -> bool {
        self.category() == Category::Type
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::AmbiguousMove => {
                Some("separate the following filter with whitespace, or give the move a from-square")
            }
            Self::AmbiguousConstituentGroup => {
                Some("qualify the move with a piece designator, e.g. `K--(...)`")
            }
            Self::IntegerLikeBrace => Some("wrap the number in parentheses: `{(1)}`"),
            Self::InvalidPromotion => Some("e.g. `a7--a8=Q`"),
            Self::KeyedUnbind => Some("unbind the whole dictionary instead"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter => "unrecognized character",

            Self::RecursionLimitExceeded => "query is nested too deeply",
            Self::NodeFuelExhausted => "query expands to too many filters",

            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedBracket => "missing closing `]`",

            Self::ExpectedFilter => "expected a filter",
            Self::ExpectedIdentifier => "expected a name",
            Self::ExpectedInteger => "expected an integer",
            Self::ExpectedString => "expected a string",
            Self::ExpectedKeyword => "expected keyword",
            Self::ExpectedConstituent => "expected a path constituent",

            Self::UnexpectedToken => "unexpected token",
            Self::EmptyGroup => "empty group is not allowed",
            Self::IntegerLikeBrace => "a brace holding only a number reads as a repetition",
            Self::AmbiguousMove => "ambiguous move operator",
            Self::InvalidPromotion => "promotion must be a single unqualified piece",
            Self::AmbiguousConstituentGroup => {
                "parenthesis after a bare move is ambiguous inside `path`"
            }
            Self::DuplicateParameter => "parameter given more than once",
            Self::MisplacedAssignment => "assignment is only allowed as a standalone filter",
            Self::NestedFunction => "functions cannot be declared inside a function body",
            Self::IntegerOverflow => "integer literal is too large",

            Self::UndefinedName => "undefined name",
            Self::UndefinedFunction => "undefined function",
            Self::DuplicateDefinition => "duplicate definition",
            Self::NotADictionary => "not a dictionary",
            Self::DictionaryWithoutKey => "dictionary used without a key",
            Self::KeyedUnbind => "cannot unbind a single dictionary key",
            Self::ArgumentCountMismatch => "wrong number of arguments",
            Self::AssignToParameter => "cannot assign to a function parameter",

            Self::IncompatibleTypes => "incompatible operand types",
            Self::VariableTypeMismatch => "variable changes type",
            Self::UnexpectedType => "unexpected filter type",

            Self::ConflictingParameters => "conflicting parameters",
            Self::InvalidRange => "range minimum exceeds maximum",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UndefinedName => "`{}` is not defined".to_string(),
            Self::UndefinedFunction => "`{}` is not a declared function".to_string(),
            Self::DuplicateDefinition => "`{}` is already defined".to_string(),
            Self::NotADictionary => "`{}` is not a dictionary".to_string(),
            Self::DictionaryWithoutKey => "dictionary `{}` used without a key".to_string(),
            Self::AssignToParameter => "cannot assign to parameter `{}`".to_string(),
            Self::DuplicateParameter => "`{}` given more than once".to_string(),
            Self::ExpectedKeyword => "expected `{}`".to_string(),
            Self::IncompatibleTypes => "incompatible operand types: {}".to_string(),
            Self::UnclosedParen | Self::UnclosedBrace | Self::UnclosedBracket => {
                format!("{}; {{}}", self.fallback_message())
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}
