use regraph_lib::Colors;

use super::{compiler_or_exit, exit_with};

pub struct AstArgs {
    pub regex: String,
    pub alphabet: String,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let compiler = compiler_or_exit(&args.alphabet);
    let ast = compiler
        .parse(&args.regex)
        .unwrap_or_else(|err| exit_with(&err, &args.regex, args.color));

    print!("{}", ast.dump_colored(Colors::new(args.color)));
}
