use super::*;

#[test]
fn constructors_box_their_operands() {
    let node = Node::union(Node::Start('a'), Node::star(Node::Letter('b')));

    assert_eq!(
        node,
        Node::Union(
            Box::new(Node::Start('a')),
            Box::new(Node::Star(Box::new(Node::Letter('b'))))
        )
    );
}

#[test]
fn depth_counts_every_level() {
    let node = Node::Word(vec![
        Node::Start('a'),
        Node::star(Node::Word(vec![Node::Letter('a'), Node::Letter('b')])),
    ]);

    assert_eq!(node.depth(), 4);
    assert_eq!(Node::Word(vec![]).depth(), 1);
}

#[test]
fn dump_colored_wraps_symbols() {
    let node = Node::Word(vec![Node::Start('a')]);

    let out = node.dump_colored(crate::Colors::ON);

    assert_eq!(out, "Word\n  Start \x1b[32ma\x1b[0m\n");
}
