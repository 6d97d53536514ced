mod cli;
mod commands;

use cli::{AstParams, CheckParams, DumpParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    commands::init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
