//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! Each `*Params` struct reads only the fields its command uses. Flags that a
//! command accepts hidden are parsed by clap but never extracted here.

use std::path::PathBuf;

use chessql_lib::query::{DEFAULT_NODE_FUEL, DEFAULT_RECURSION_LIMIT};
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::defs::DefsArgs;
use crate::commands::trace::TraceArgs;
use crate::commands::{Limits, QueryInput};

pub struct CheckParams {
    pub input: QueryInput,
    pub limits: Limits,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: query_input(m),
            limits: limits(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            limits: p.limits,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub input: QueryInput,
    pub limits: Limits,
    pub types: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: query_input(m),
            limits: limits(m),
            types: m.get_flag("types"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input,
            limits: p.limits,
            types: p.types,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub input: QueryInput,
    pub limits: Limits,
    pub json: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: query_input(m),
            limits: limits(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            input: p.input,
            limits: p.limits,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DefsParams {
    pub input: QueryInput,
    pub limits: Limits,
    pub json: bool,
    pub color: ColorChoice,
}

impl DefsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: query_input(m),
            limits: limits(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DefsParams> for DefsArgs {
    fn from(p: DefsParams) -> Self {
        Self {
            input: p.input,
            limits: p.limits,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn query_input(m: &ArgMatches) -> QueryInput {
    QueryInput {
        path: m.get_one::<PathBuf>("query_path").cloned(),
        text: m.get_one::<String>("query_text").cloned(),
    }
}

/// Both limits have clap defaults; the fallbacks cover commands built
/// without the limit args.
fn limits(m: &ArgMatches) -> Limits {
    Limits {
        recursion_limit: m
            .get_one::<u32>("recursion_limit")
            .copied()
            .unwrap_or(DEFAULT_RECURSION_LIMIT),
        fuel: m
            .get_one::<u32>("fuel")
            .copied()
            .unwrap_or(DEFAULT_NODE_FUEL),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
