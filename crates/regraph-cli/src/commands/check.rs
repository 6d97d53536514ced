use std::fmt::Write;

use regraph_lib::{Automata, Colors};

use super::{compile_or_exit, compiler_or_exit};

pub struct CheckArgs {
    pub regex: String,
    pub inputs: Vec<String>,
    pub alphabet: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let compiler = compiler_or_exit(&args.alphabet);
    let automata = compile_or_exit(&compiler, &args.regex, args.color);

    let (report, all_accepted) = render_verdicts(&automata, &args.inputs, args.color);
    print!("{}", report);

    if !all_accepted {
        std::process::exit(1);
    }
}

/// One `accept`/`reject` line per input, plus whether every input was accepted.
pub fn render_verdicts(automata: &Automata, inputs: &[String], color: bool) -> (String, bool) {
    let c = Colors::new(color);
    let mut out = String::new();
    let mut all_accepted = true;

    for input in inputs {
        let accepted = automata.accepts(input);
        all_accepted &= accepted;
        let verdict = if accepted {
            format!("{}accept{}", c.accept, c.reset)
        } else {
            format!("{}reject{}", c.muted, c.reset)
        };
        writeln!(out, "{}  {:?}", verdict, input).expect("String write never fails");
    }
    (out, all_accepted)
}
