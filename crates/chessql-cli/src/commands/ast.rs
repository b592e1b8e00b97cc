//! Show the filter tree of a query.

use super::run_common::{self, Limits, QueryInput};

pub struct AstArgs {
    pub input: QueryInput,
    pub limits: Limits,
    pub types: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = run_common::load_or_exit(&args.input);
    let query = run_common::parse_or_exit(&source, &args.limits, args.color);

    let dump = query
        .printer()
        .with_types(args.types)
        .with_spans(args.spans)
        .dump();
    print!("{}", dump);
}
