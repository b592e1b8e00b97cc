//! Parser for the query language.
//!
//! # Architecture
//!
//! A single recursive-descent pass turns the token stream into a typed
//! filter tree. There is no separate syntax tree: every production checks
//! its operands against the type lattice and the symbol table as soon as they
//! are parsed, then allocates its node in the arena.
//!
//! - Zero-copy lexing: tokens carry spans and adjacency flags, text is sliced
//!   from the source on demand
//! - Fail fast: the first diagnostic aborts the parse, there is no recovery
//! - Lookahead predicates: the whitespace-sensitive move operators and the
//!   role of a `(` or `{` are decided by peeking, not by extra productions
//! - Function calls re-parse the callee's body tokens with the arguments in
//!   scope
//!
//! Recursion depth and allocated nodes are both bounded; exceeding either
//! is reported like any other error.

pub mod lexer;
pub mod syntax_kind;

mod core;
mod grammar;


pub use core::{ParseResult, Parser};
pub use lexer::{Token, lex};
pub use syntax_kind::SyntaxKind;
