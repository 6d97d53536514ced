//! Tests for subset construction.

use std::collections::HashSet;

use super::*;
use crate::graph::{Graph, Label, State, StateSet};
use crate::{Alphabet, parse};

fn nfa(regex: &str) -> Graph<State> {
    let ast = parse(regex, &Alphabet::default()).unwrap();
    let enfa = ThompsonBuilder::new().build(&ast);
    eliminate_epsilons(&enfa).0
}

fn dfa(regex: &str) -> Graph<StateSet> {
    determinize(&nfa(regex), &Alphabet::default()).0
}

#[test]
fn union_shares_target_state() {
    let (dfa, stats) = determinize(&nfa("a+b"), &Alphabet::default());

    insta::assert_snapshot!(dfa.dump(), @r"
    {start}: a → {final}, b → {final}
    {final}: ∅
    accept: {final}
    ");
    assert_eq!(
        stats,
        SubsetStats {
            states: 2,
            transitions: 2,
            pruned: 0,
        }
    );
}

#[test]
fn star_has_one_looping_accepting_state() {
    let dfa = dfa("a*");

    insta::assert_snapshot!(dfa.dump(), @r"
    {start}: a → {0, final}
    {0, final}: a → {0, final}
    accept: {start}, {0, final}
    ");
    let looping: Vec<_> = dfa
        .final_states()
        .filter(|s| dfa.has_edge(s, s, Label::Symbol('a')))
        .collect();
    assert_eq!(looping.len(), 1);
}

#[test]
fn starred_pair_cycles() {
    insta::assert_snapshot!(dfa("(ab)*").dump(), @r"
    {start}: a → {1}
    {0, final}: a → {1}
    {1}: b → {0, final}
    accept: {start}, {0, final}
    ");
}

#[test]
fn same_subset_is_one_state() {
    let dfa = dfa("(a+b)*");

    let names: Vec<String> = dfa.vertices().map(|v| v.to_string()).collect();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(names.len(), unique.len());
    assert!(dfa.accepts(&StateSet::from_iter([State::Start]), "abba"));
}

#[test]
fn at_most_one_edge_per_symbol() {
    let alphabet = Alphabet::default();
    for regex in ["(a+b)*abb", "a*b*", "(ab+b)*", "b(a*+b*)a", "((a+b)*b)*", "(a*)*"] {
        let dfa = dfa(regex);

        for state in dfa.vertices() {
            for symbol in alphabet.symbols() {
                let count = dfa.targets(state, Label::Symbol(symbol)).count();
                assert!(count <= 1, "{regex}: {state} has {count} {symbol}-edges");
            }
            assert!(dfa.outgoing(state).all(|(l, _)| !l.is_epsilon()));
        }
    }
}

#[test]
fn final_iff_member_is_final() {
    let nfa = nfa("(a+b)*abb");
    let (dfa, _) = determinize(&nfa, &Alphabet::default());

    for state in dfa.vertices() {
        let expected = state.iter().any(|s| nfa.is_final(s));
        assert_eq!(dfa.is_final(state), expected, "{state}");
    }
}

#[test]
fn only_reachable_subsets() {
    let dfa = dfa("(a+b)*abb");
    let initial = StateSet::from_iter([State::Start]);

    assert_eq!(dfa.reachable_from(&initial).len(), dfa.vertex_count());
}

#[test]
fn missing_start_yields_empty_dfa() {
    let mut nfa = Graph::new();
    nfa.add_edge(State::Fresh(0), State::Final, Label::Symbol('a'));

    let (dfa, stats) = determinize(&nfa, &Alphabet::default());

    assert!(dfa.is_empty());
    assert_eq!(stats, SubsetStats::default());
}

#[test]
fn symbols_outside_alphabet_are_ignored() {
    let nfa = nfa("ab");
    let only_a: Alphabet = "a".parse().unwrap();

    let (dfa, _) = determinize(&nfa, &only_a);

    insta::assert_snapshot!(dfa.dump(), @r"
    {start}: a → {0}
    {0}: ∅
    accept: ∅
    ");
}
