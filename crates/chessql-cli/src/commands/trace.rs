//! Print the depth-first `(depth, kind)` trace of a query.

use super::run_common::{self, Limits, QueryInput};

pub struct TraceArgs {
    pub input: QueryInput,
    pub limits: Limits,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let source = run_common::load_or_exit(&args.input);
    let query = run_common::parse_or_exit(&source, &args.limits, args.color);
    let trace = query.trace();

    if args.json {
        match serde_json::to_string_pretty(&trace) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for entry in trace {
        println!("{} {}", entry.depth, entry.kind);
    }
}
