mod cli;
mod commands;

use cli::{AstParams, CheckParams, DefsParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("defs", m)) => {
            let params = DefsParams::from_matches(m);
            commands::defs::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
