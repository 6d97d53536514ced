//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("regraph")
        .about("Compile regular expressions into ε-NFA, NFA and DFA")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(ast_command())
        .subcommand(dump_command())
        .subcommand(check_command())
}

/// Show the syntax tree of a regex.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a regex")
        .override_usage("  regraph ast <REGEX> [-a <SYMBOLS>]")
        .after_help(
            r#"EXAMPLES:
  regraph ast '(ab)*'
  regraph ast 'c(a+b)*' -a abc"#,
        )
        .arg(regex_arg())
        .arg(alphabet_arg())
        .arg(color_arg())
}

/// Print the compiled automata.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print the compiled automata")
        .override_usage("  regraph dump <REGEX> [--stage <STAGE>] [--format <FORMAT>]")
        .after_help(
            r#"EXAMPLES:
  regraph dump 'a+b'                   # all three stages as text
  regraph dump '(a+b)*abb' --stage dfa # DFA only
  regraph dump 'a*' --format json      # snapshots with layout hints"#,
        )
        .arg(regex_arg())
        .arg(alphabet_arg())
        .arg(stage_arg())
        .arg(format_arg())
        .arg(no_layout_arg())
        .arg(color_arg())
}

/// Run input strings through the DFA.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Test input strings against a regex")
        .override_usage("  regraph check <REGEX> <INPUT>...")
        .after_help(
            r#"EXAMPLES:
  regraph check '(ab)*' '' ab aba

Exits with status 1 if any input is rejected."#,
        )
        .arg(regex_arg())
        .arg(inputs_arg())
        .arg(alphabet_arg())
        .arg(color_arg())
}
