//! Print the variables, dictionaries and functions a query declares.

use chessql_lib::{FunctionSignature, Query, Variable};
use serde::Serialize;

use super::run_common::{self, Limits, QueryInput};

pub struct DefsArgs {
    pub input: QueryInput,
    pub limits: Limits,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct Definitions<'q> {
    variables: Vec<&'q Variable>,
    functions: Vec<FunctionSignature>,
}

impl<'q> Definitions<'q> {
    fn of(query: &'q Query<'_>) -> Self {
        Self {
            variables: query.definitions().iter().map(|(_, var)| var).collect(),
            functions: query.functions().iter().map(|def| def.signature()).collect(),
        }
    }
}

pub fn run(args: DefsArgs) {
    let source = run_common::load_or_exit(&args.input);
    let query = run_common::parse_or_exit(&source, &args.limits, args.color);

    if !args.json {
        print!("{}", query.dump_definitions());
        return;
    }

    match serde_json::to_string_pretty(&Definitions::of(&query)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
