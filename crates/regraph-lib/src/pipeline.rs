//! End-to-end compilation: regex text to all three automata.

use log::debug;

use crate::compile::{ThompsonBuilder, determinize, eliminate_epsilons};
use crate::graph::{Graph, Label, Position, State, StateSet};
use crate::parser::{DEFAULT_RECURSION_FUEL, Node, Parser};
use crate::{Alphabet, Result};

/// Every stage of one compilation.
#[derive(Debug, Clone)]
pub struct Automata {
    pub ast: Node,
    pub epsilon_nfa: Graph<State>,
    pub nfa: Graph<State>,
    pub dfa: Graph<StateSet>,
}

impl Automata {
    /// The DFA state every run begins in.
    pub fn dfa_start() -> StateSet {
        StateSet::from_iter([State::Start])
    }

    /// Run the DFA over `input`.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = Self::dfa_start();
        if !self.dfa.contains(&current) {
            return false;
        }
        for c in input.chars() {
            let next = self.dfa.targets(&current, Label::Symbol(c)).next().cloned();
            match next {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.dfa.is_final(&current)
    }
}

/// Configured pipeline.
#[derive(Debug, Clone)]
pub struct Compiler {
    alphabet: Alphabet,
    layout: bool,
    recursion_fuel: Option<u32>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl Compiler {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            layout: true,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Build a compiler for the symbols of `symbols`, e.g. `"ab"`.
    pub fn for_symbols(symbols: &str) -> Result<Self> {
        Ok(Self::new(symbols.parse()?))
    }

    /// Attach layout hints to every graph (on by default).
    pub fn with_layout(mut self, enabled: bool) -> Self {
        self.layout = enabled;
        self
    }

    /// Limit on syntax tree nesting, `+` chains included; `None` disables it.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn parse(&self, regex: &str) -> Result<Node> {
        let ast = Parser::new(regex, &self.alphabet)
            .with_recursion_fuel(self.recursion_fuel)
            .parse()?;
        Ok(ast)
    }

    pub fn compile(&self, regex: &str) -> Result<Automata> {
        debug!("compiling {:?} over {}", regex, self.alphabet);
        let ast = self.parse(regex)?;

        let mut epsilon_nfa = ThompsonBuilder::new().build(&ast);
        let (mut nfa, _) = eliminate_epsilons(&epsilon_nfa);
        let (mut dfa, _) = determinize(&nfa, &self.alphabet);

        if self.layout {
            epsilon_nfa.assign_layout(&State::Final, Position::default());
            let anchor = if nfa.contains(&State::Final) {
                State::Final
            } else {
                State::Start
            };
            nfa.assign_layout(&anchor, Position::default());
            let anchor = dfa
                .final_states()
                .next()
                .cloned()
                .unwrap_or_else(Automata::dfa_start);
            dfa.assign_layout(&anchor, Position::default());
        }

        Ok(Automata {
            ast,
            epsilon_nfa,
            nfa,
            dfa,
        })
    }
}

/// Compile with default settings.
pub fn compile(regex: &str, alphabet: &Alphabet) -> Result<Automata> {
    Compiler::new(alphabet.clone()).compile(regex)
}
