use super::*;

#[test]
fn chain_stacks_layers_upward() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Fresh(0), Label::Symbol('a'));
    g.add_edge(State::Fresh(0), State::Final, Label::Epsilon);

    g.assign_layout(&State::Final, Position::new(10.0, 20.0));

    assert_eq!(g.position(&State::Final), Some(Position::new(10.0, 20.0)));
    assert_eq!(g.position(&State::Fresh(0)), Some(Position::new(10.0, 20.0 - LAYER_GAP)));
    assert_eq!(
        g.position(&State::Start),
        Some(Position::new(10.0, 20.0 - 2.0 * LAYER_GAP))
    );
}

#[test]
fn siblings_spread_around_successor() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Final, Label::Symbol('a'));
    g.add_edge(State::Fresh(0), State::Final, Label::Symbol('b'));
    g.add_edge(State::Fresh(1), State::Final, Label::Symbol('a'));

    g.assign_layout(&State::Final, Position::default());

    assert_eq!(g.position(&State::Start), Some(Position::new(-150.0, -150.0)));
    assert_eq!(g.position(&State::Fresh(0)), Some(Position::new(0.0, -150.0)));
    assert_eq!(g.position(&State::Fresh(1)), Some(Position::new(150.0, -150.0)));
}

#[test]
fn each_vertex_placed_once() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Fresh(0), Label::Symbol('a'));
    g.add_edge(State::Start, State::Final, Label::Symbol('b'));
    g.add_edge(State::Fresh(0), State::Final, Label::Symbol('a'));
    g.add_edge(State::Fresh(0), State::Fresh(0), Label::Symbol('b'));

    g.assign_layout(&State::Final, Position::default());

    // start is a direct predecessor of final, so it stays on the first layer
    assert_eq!(g.position(&State::Start), Some(Position::new(-150.0, -150.0)));
    assert_eq!(g.position(&State::Fresh(0)), Some(Position::new(150.0, -150.0)));
    assert_eq!(g.layout().count(), 3);
}

#[test]
fn vertices_without_path_to_anchor_go_below() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Final, Label::Symbol('a'));
    g.add_edge(State::Final, State::Fresh(3), Label::Symbol('a'));
    g.add_edge(State::Final, State::Fresh(4), Label::Symbol('b'));

    g.assign_layout(&State::Final, Position::default());

    assert_eq!(g.position(&State::Fresh(3)), Some(Position::new(0.0, LAYER_GAP)));
    assert_eq!(g.position(&State::Fresh(4)), Some(Position::new(SPREAD, LAYER_GAP)));
}

#[test]
fn missing_anchor_lays_out_a_row() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Fresh(0), Label::Symbol('a'));

    g.assign_layout(&State::Final, Position::default());

    assert_eq!(g.position(&State::Start), Some(Position::new(0.0, LAYER_GAP)));
    assert_eq!(g.position(&State::Fresh(0)), Some(Position::new(SPREAD, LAYER_GAP)));
}

#[test]
fn relayout_replaces_old_hints() {
    let mut g = Graph::new();
    g.add_edge(State::Start, State::Final, Label::Symbol('a'));
    g.assign_layout(&State::Final, Position::default());

    g.assign_layout(&State::Start, Position::default());

    assert_eq!(g.position(&State::Start), Some(Position::default()));
    assert_eq!(g.position(&State::Final), Some(Position::new(0.0, LAYER_GAP)));
}
