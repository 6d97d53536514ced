//! Regex syntax tree.
//!
//! Arity is carried by the variants themselves: a `Union` always has two
//! operands and a `Star` exactly one, so later stages never validate shape.

use std::fmt::Write;

use crate::Colors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single input symbol.
    Letter(char),
    /// The leftmost symbol of the whole expression; becomes the entry transition.
    Start(char),
    /// Concatenation, matched left to right.
    Word(Vec<Node>),
    /// Alternation; the left operand comes first.
    Union(Box<Node>, Box<Node>),
    /// Zero or more repetitions.
    Star(Box<Node>),
}

impl Node {
    pub fn union(left: Node, right: Node) -> Self {
        Node::Union(Box::new(left), Box::new(right))
    }

    pub fn star(child: Node) -> Self {
        Node::Star(Box::new(child))
    }

    /// Whether this subtree contains the `Start` leaf.
    pub fn has_start(&self) -> bool {
        match self {
            Node::Start(_) => true,
            Node::Letter(_) => false,
            Node::Word(children) => children.iter().any(Node::has_start),
            Node::Union(left, right) => left.has_start() || right.has_start(),
            Node::Star(child) => child.has_start(),
        }
    }

    /// Maximum nesting depth, counting this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Letter(_) | Node::Start(_) => 1,
            Node::Word(children) => 1 + children.iter().map(Node::depth).max().unwrap_or(0),
            Node::Union(left, right) => 1 + left.depth().max(right.depth()),
            Node::Star(child) => 1 + child.depth(),
        }
    }

    pub fn dump(&self) -> String {
        self.dump_colored(Colors::OFF)
    }

    pub fn dump_colored(&self, colors: Colors) -> String {
        let mut out = String::new();
        self.format(&mut out, 0, colors)
            .expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String, indent: usize, c: Colors) -> std::fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Letter(symbol) => writeln!(w, "{pad}Letter {}{symbol}{}", c.symbol, c.reset),
            Node::Start(symbol) => writeln!(w, "{pad}Start {}{symbol}{}", c.symbol, c.reset),
            Node::Word(children) => {
                if children.is_empty() {
                    return writeln!(w, "{pad}Word {}∅{}", c.muted, c.reset);
                }
                writeln!(w, "{pad}Word")?;
                for child in children {
                    child.format(w, indent + 1, c)?;
                }
                Ok(())
            }
            Node::Union(left, right) => {
                writeln!(w, "{pad}Union")?;
                left.format(w, indent + 1, c)?;
                right.format(w, indent + 1, c)
            }
            Node::Star(child) => {
                writeln!(w, "{pad}Star")?;
                child.format(w, indent + 1, c)
            }
        }
    }
}
