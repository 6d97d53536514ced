pub mod ast;
pub mod check;
pub mod dump;

#[cfg(test)]
mod dump_tests;

use log::LevelFilter;
use regraph_lib::{Automata, Compiler, Error};

/// Install the logger. `-v` raises the default filter to debug, `-vv` to
/// trace; `RUST_LOG` still wins when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build a compiler for `alphabet`, or report the failure and exit.
pub fn compiler_or_exit(alphabet: &str) -> Compiler {
    Compiler::for_symbols(alphabet).unwrap_or_else(|err| exit_with(&err, "", false))
}

/// Compile `regex`, or report the failure and exit.
pub fn compile_or_exit(compiler: &Compiler, regex: &str, color: bool) -> Automata {
    compiler
        .compile(regex)
        .unwrap_or_else(|err| exit_with(&err, regex, color))
}

/// Print `err` (parse errors as an annotated snippet) and exit with status 2.
pub fn exit_with(err: &Error, regex: &str, color: bool) -> ! {
    match err {
        Error::Parse(parse) => eprintln!("{}", parse.render(regex, color)),
        _ => eprintln!("error: {}", err),
    }
    std::process::exit(2);
}
