//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` pulls the fields each command uses
//! - `Into<*Args>` impls bridge dispatch → command handlers

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, OutputFormat, Stage};

pub struct AstParams {
    pub regex: String,
    pub alphabet: String,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: parse_regex(m),
            alphabet: parse_alphabet(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            regex: p.regex,
            alphabet: p.alphabet,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub regex: String,
    pub alphabet: String,
    pub stage: Stage,
    pub format: OutputFormat,
    pub layout: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let stage = match m.get_one::<String>("stage").map(|s| s.as_str()) {
            Some("enfa") => Stage::EpsilonNfa,
            Some("nfa") => Stage::Nfa,
            Some("dfa") => Stage::Dfa,
            _ => Stage::All,
        };
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            regex: parse_regex(m),
            alphabet: parse_alphabet(m),
            stage,
            format,
            layout: !m.get_flag("no_layout"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            regex: p.regex,
            alphabet: p.alphabet,
            stage: p.stage,
            format: p.format,
            layout: p.layout,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub regex: String,
    pub inputs: Vec<String>,
    pub alphabet: String,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: parse_regex(m),
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            alphabet: parse_alphabet(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            regex: p.regex,
            inputs: p.inputs,
            alphabet: p.alphabet,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_regex(m: &ArgMatches) -> String {
    m.get_one::<String>("regex").cloned().unwrap_or_default()
}

fn parse_alphabet(m: &ArgMatches) -> String {
    m.get_one::<String>("alphabet")
        .cloned()
        .unwrap_or_else(|| "ab".to_string())
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<String>("color")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}
