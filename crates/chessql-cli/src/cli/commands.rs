//! Command builders for the CLI.
//!
//! Every command accepts the output flags of the others (`--types`,
//! `--spans`, `--json`), hidden from `--help` where they do nothing, so a
//! command line can be retargeted by changing only the subcommand.

use clap::Command;

use super::args::*;

/// Query input, color and parse limits, shared by every command.
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg())
        .arg(query_text_arg())
        .arg(color_arg())
        .arg(recursion_limit_arg())
        .arg(fuel_arg())
}

fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(types_arg().hide(true)).arg(spans_arg().hide(true))
}

fn with_hidden_json_arg(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("chessql")
        .about("Parser and type checker for chess queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(trace_command())
        .subcommand(defs_command())
}

/// Validate a query. Silent on success.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Parse and type-check a query")
        .override_usage(
            "\
  chessql check <QUERY>
  chessql check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  chessql check mates.cql              # from file
  chessql check -q 'check and not wtm' # inline query
  cat mates.cql | chessql check -      # from stdin"#,
        );

    with_hidden_json_arg(with_hidden_tree_args(with_query_args(cmd)))
}

/// Show the typed filter tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the filter tree of a query")
        .override_usage(
            "\
  chessql ast <QUERY> [--types] [--spans]
  chessql ast -q <TEXT> [--types] [--spans]",
        )
        .after_help(
            r#"EXAMPLES:
  chessql ast -q 'K --> q'            # tree
  chessql ast -q 'x = #a' --types     # with filter types
  chessql ast mates.cql --spans       # with source positions"#,
        )
        .arg(types_arg())
        .arg(spans_arg());

    with_hidden_json_arg(with_query_args(cmd))
}

/// Show the depth-first `(depth, kind)` trace.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Show the depth-first trace of a query")
        .override_usage(
            "\
  chessql trace <QUERY> [--json]
  chessql trace -q <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  chessql trace -q 'check or mate'    # one `depth kind` pair per line
  chessql trace mates.cql --json      # as a JSON array"#,
        )
        .arg(json_arg());

    with_hidden_tree_args(with_query_args(cmd))
}

/// Show the variables, dictionaries and functions a query declares.
pub fn defs_command() -> Command {
    let cmd = Command::new("defs")
        .about("Show the definitions of a query")
        .override_usage(
            "\
  chessql defs <QUERY> [--json]
  chessql defs -q <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  chessql defs -q 'x = 1 dictionary d'  # one definition per line
  chessql defs mates.cql --json         # as JSON"#,
        )
        .arg(json_arg());

    with_hidden_tree_args(with_query_args(cmd))
}
