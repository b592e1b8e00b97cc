use super::run_common::{self, Limits, QueryInput};

pub struct CheckArgs {
    pub input: QueryInput,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = run_common::load_or_exit(&args.input);
    run_common::parse_or_exit(&source, &args.limits, args.color);

    // Silent on success (like cargo check)
}
