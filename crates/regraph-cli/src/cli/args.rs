//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Regular expression to compile (positional).
pub fn regex_arg() -> Arg {
    Arg::new("regex")
        .value_name("REGEX")
        .required(true)
        .help("Regular expression over the alphabet, using ( ) * and + (union)")
}

/// Input alphabet (-a/--alphabet).
pub fn alphabet_arg() -> Arg {
    Arg::new("alphabet")
        .short('a')
        .long("alphabet")
        .value_name("SYMBOLS")
        .default_value("ab")
        .help("Input symbols, one character each")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity (-v, -vv). Global, read before dispatch.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}

/// Automaton stage to print (--stage).
pub fn stage_arg() -> Arg {
    Arg::new("stage")
        .long("stage")
        .value_name("STAGE")
        .default_value("all")
        .value_parser(["enfa", "nfa", "dfa", "all"])
        .help("Which automaton to print")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Skip layout hints (--no-layout).
pub fn no_layout_arg() -> Arg {
    Arg::new("no_layout")
        .long("no-layout")
        .action(ArgAction::SetTrue)
        .help("Don't compute layout hints")
}

/// Strings to run through the DFA (positional, repeated).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(1..)
        .required(true)
        .help("Input strings to test (use \"\" for the empty string)")
}
