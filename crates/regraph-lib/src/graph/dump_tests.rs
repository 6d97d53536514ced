use super::*;

fn sample() -> Graph<State> {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Fresh(0), Label::Symbol('a'));
    g.add_edge(State::Fresh(0), State::Fresh(1), Label::Epsilon);
    g.add_edge(State::Fresh(1), State::Final, Label::Epsilon);
    g.add_edge(State::Fresh(1), State::Final, Label::Symbol('b'));
    g.mark_final(State::Final);
    g
}

#[test]
fn dump_sorts_vertices_and_edges() {
    insta::assert_snapshot!(sample().dump(), @r"
    start: a → 0
    0: ε → 1
    1: b → final, ε → final
    final: ∅
    accept: final
    ");
}

#[test]
fn dump_empty_graph() {
    let g: Graph<State> = Graph::new();

    assert_eq!(g.dump(), "accept: ∅\n");
}

#[test]
fn dump_state_sets() {
    let initial = StateSet::from_iter([State::Start]);
    let looping = StateSet::from_iter([State::Final, State::Fresh(0)]);
    let mut g = Graph::new();
    g.add_edge(initial.clone(), looping.clone(), Label::Symbol('a'));
    g.add_edge(looping.clone(), looping.clone(), Label::Symbol('a'));
    g.mark_final(initial);
    g.mark_final(looping);

    insta::assert_snapshot!(g.dump(), @r"
    {start}: a → {0, final}
    {0, final}: a → {0, final}
    accept: {start}, {0, final}
    ");
}

#[test]
fn dump_with_layout() {
    let mut g = sample();
    g.assign_layout(&State::Final, Position::default());

    let out = GraphPrinter::new(&g).show_layout(true).dump();

    insta::assert_snapshot!(out, @r"
    start: a → 0  @ (0, -450)
    0: ε → 1  @ (0, -300)
    1: b → final, ε → final  @ (0, -150)
    final: ∅  @ (0, 0)
    accept: final
    ");
}

#[test]
fn colored_dump() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Final, Label::Symbol('a'));
    g.mark_final(State::Final);

    let out = GraphPrinter::new(&g).colored(true).dump();

    assert!(out.starts_with("\x1b[34mstart\x1b[0m: \x1b[32ma\x1b[0m \x1b[2m→\x1b[0m"));
    assert!(out.ends_with("accept: \x1b[1;32mfinal\x1b[0m\n"));
}
