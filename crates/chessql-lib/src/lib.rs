//! chessql: parser and type checker for the chess query language.
//!
//! # Example
//!
//! ```
//! use chessql_lib::parse;
//!
//! let query = parse("x = K --> q  x > 0").expect("valid query");
//! assert_eq!(query.definitions().len(), 1);
//! print!("{}", query.dump_with_types());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod parser;
pub mod query;

pub use analyze::{FilterType, FunctionSignature, Variable, VariableKind};
pub use diagnostics::{Category, Diagnostic, DiagnosticKind, DiagnosticPrinter};
pub use query::{Query, QueryBuilder, TraceEntry};

/// Errors that end a parse. Both carry the one diagnostic that stopped it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A character no token accepts.
    #[error("lex error: {0}")]
    Lex(Diagnostic),

    /// Grammar, type, binding and validation errors.
    #[error("syntax error: {0}")]
    Syntax(Diagnostic),
}

impl Error {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Error::Lex(diagnostic) | Error::Syntax(diagnostic) => diagnostic,
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` with the default limits.
pub fn parse(source: &str) -> Result<Query<'_>> {
    QueryBuilder::new(source).build()
}
