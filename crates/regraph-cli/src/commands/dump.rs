use std::fmt::{Display, Write};

use regraph_lib::graph::Vertex;
use regraph_lib::{Automata, Graph, GraphPrinter, Snapshot};
use serde::Serialize;

use super::{compile_or_exit, compiler_or_exit};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    EpsilonNfa,
    Nfa,
    Dfa,
    #[default]
    All,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct DumpArgs {
    pub regex: String,
    pub alphabet: String,
    pub stage: Stage,
    pub format: OutputFormat,
    pub layout: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct AllStages {
    epsilon_nfa: Snapshot,
    nfa: Snapshot,
    dfa: Snapshot,
}

pub fn run(args: DumpArgs) {
    let compiler = compiler_or_exit(&args.alphabet).with_layout(args.layout);
    let automata = compile_or_exit(&compiler, &args.regex, args.color);

    let output = match args.format {
        OutputFormat::Text => render_text(&automata, args.stage, args.color),
        OutputFormat::Json => match render_json(&automata, args.stage) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    };
    print!("{}", output);
}

pub fn render_text(automata: &Automata, stage: Stage, color: bool) -> String {
    let sections = [
        (Stage::EpsilonNfa, "ε-NFA", dump(&automata.epsilon_nfa, color)),
        (Stage::Nfa, "NFA", dump(&automata.nfa, color)),
        (Stage::Dfa, "DFA", dump(&automata.dfa, color)),
    ];

    if stage != Stage::All {
        return sections
            .into_iter()
            .find(|(s, _, _)| *s == stage)
            .map(|(_, _, dump)| dump)
            .unwrap_or_default();
    }

    let mut out = String::new();
    for (i, (_, title, dump)) in sections.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "# {}", title).expect("String write never fails");
        out.push_str(&dump);
    }
    out
}

fn dump<V: Vertex + Ord + Display>(graph: &Graph<V>, color: bool) -> String {
    GraphPrinter::new(graph).colored(color).dump()
}

pub fn render_json(automata: &Automata, stage: Stage) -> serde_json::Result<String> {
    let mut json = match stage {
        Stage::EpsilonNfa => serde_json::to_string_pretty(&automata.epsilon_nfa.snapshot())?,
        Stage::Nfa => serde_json::to_string_pretty(&automata.nfa.snapshot())?,
        Stage::Dfa => serde_json::to_string_pretty(&automata.dfa.snapshot())?,
        Stage::All => serde_json::to_string_pretty(&AllStages {
            epsilon_nfa: automata.epsilon_nfa.snapshot(),
            nfa: automata.nfa.snapshot(),
            dfa: automata.dfa.snapshot(),
        })?,
    };
    json.push('\n');
    Ok(json)
}
