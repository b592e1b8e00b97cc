//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose. The same
//! definition can be reused hidden (via `.hide(true)`) on commands that accept
//! but ignore it.

use std::path::PathBuf;

use chessql_lib::query::{DEFAULT_NODE_FUEL, DEFAULT_RECURSION_LIMIT};
use clap::{Arg, ArgAction, value_parser};

/// Query file, or `-` for stdin (positional).
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("QUERY")
        .value_parser(value_parser!(PathBuf))
        .help("Query file, or - to read stdin")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("query_path")
        .help("Inline query text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Annotate nodes with their filter type (--types).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .long("types")
        .action(ArgAction::SetTrue)
        .help("Show the type of every node")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Emit JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value(DEFAULT_RECURSION_LIMIT.to_string())
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth of the query")
}

/// Node allocation limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value(DEFAULT_NODE_FUEL.to_string())
        .value_parser(value_parser!(u32))
        .help("Maximum number of filter nodes, function expansions included")
}
