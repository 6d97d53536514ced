//! Tests for CLI dispatch logic.

use super::*;
use crate::cli::commands::{ast_command, check_command, dump_command};
use crate::commands::dump::{OutputFormat, Stage};

#[test]
fn ast_defaults() {
    let m = ast_command()
        .try_get_matches_from(["ast", "(ab)*"])
        .unwrap();

    let params = AstParams::from_matches(&m);

    assert_eq!(params.regex, "(ab)*");
    assert_eq!(params.alphabet, "ab");
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn ast_custom_alphabet() {
    let m = ast_command()
        .try_get_matches_from(["ast", "c(a+b)*", "-a", "abc", "--color", "never"])
        .unwrap();

    let params = AstParams::from_matches(&m);

    assert_eq!(params.alphabet, "abc");
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn ast_requires_regex() {
    let result = ast_command().try_get_matches_from(["ast"]);

    assert!(result.is_err());
}

#[test]
fn empty_regex_is_accepted() {
    let m = ast_command().try_get_matches_from(["ast", ""]).unwrap();

    assert_eq!(AstParams::from_matches(&m).regex, "");
}

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a+b"])
        .unwrap();

    let params = DumpParams::from_matches(&m);

    assert_eq!(params.stage, Stage::All);
    assert_eq!(params.format, OutputFormat::Text);
    assert!(params.layout);
}

#[test]
fn dump_stage_and_format() {
    let m = dump_command()
        .try_get_matches_from([
            "dump",
            "a*",
            "--stage",
            "enfa",
            "--format",
            "json",
            "--no-layout",
        ])
        .unwrap();

    let params = DumpParams::from_matches(&m);

    assert_eq!(params.stage, Stage::EpsilonNfa);
    assert_eq!(params.format, OutputFormat::Json);
    assert!(!params.layout);
}

#[test]
fn dump_rejects_unknown_stage() {
    let result = dump_command().try_get_matches_from(["dump", "a", "--stage", "nope"]);

    assert!(result.is_err());
}

#[test]
fn check_collects_inputs() {
    let m = check_command()
        .try_get_matches_from(["check", "(ab)*", "", "ab", "aba"])
        .unwrap();

    let params = CheckParams::from_matches(&m);

    assert_eq!(params.regex, "(ab)*");
    assert_eq!(params.inputs, vec!["", "ab", "aba"]);
}

#[test]
fn check_requires_an_input() {
    let result = check_command().try_get_matches_from(["check", "a"]);

    assert!(result.is_err());
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["regraph", "dump", "a", "-vv"])
        .unwrap();

    assert_eq!(m.get_count("verbose"), 2);
    assert_eq!(m.subcommand_name(), Some("dump"));
}

#[test]
fn color_always() {
    let m = check_command()
        .try_get_matches_from(["check", "a", "a", "--color", "always"])
        .unwrap();

    assert!(CheckParams::from_matches(&m).color.should_colorize());
}

#[test]
fn color_choice_from_str() {
    assert_eq!("auto".parse::<ColorChoice>(), Ok(ColorChoice::Auto));
    assert_eq!("never".parse::<ColorChoice>(), Ok(ColorChoice::Never));
    assert_eq!(
        "sometimes".parse::<ColorChoice>(),
        Err("unknown color mode 'sometimes'".to_string())
    );
}
