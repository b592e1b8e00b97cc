//! Shared loading and parsing for every command.

use std::path::PathBuf;

use chessql_lib::{Query, QueryBuilder};

use super::query_loader::{QuerySource, load_query_source};

/// Where the query comes from: a file path (`-` for stdin) or inline text.
pub struct QueryInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

pub struct Limits {
    pub recursion_limit: u32,
    pub fuel: u32,
}

/// Load the query, or exit with the load error.
pub fn load_or_exit(input: &QueryInput) -> QuerySource {
    load_query_source(input.path.as_deref(), input.text.as_deref()).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}

/// Parse the query, or render its diagnostic to stderr and exit.
pub fn parse_or_exit<'s>(source: &'s QuerySource, limits: &Limits, color: bool) -> Query<'s> {
    let result = QueryBuilder::new(&source.text)
        .with_recursion_limit(limits.recursion_limit)
        .with_node_fuel(limits.fuel)
        .build();

    match result {
        Ok(query) => query,
        Err(err) => {
            let mut printer = err.diagnostic().printer(&source.text).colored(color);
            if let Some(path) = &source.path {
                printer = printer.path(path);
            }
            eprint!("{}", printer.render());
            std::process::exit(1);
        }
    }
}
