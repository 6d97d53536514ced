//! Backward recursive-descent parser.
//!
//! The caller's regex is wrapped as `$(<regex>)` and scanned from the end.
//! Postfix `*` wraps whatever the next backward step produces. Infix `+`
//! takes the sibling parsed just before it (its right operand) and pairs it
//! with the next backward step (its left operand). A `)` opens a group that
//! collects children until the matching `(`.
//!
//! The leading `$` yields an overflow sentinel, never a node. It only exists
//! so the first symbol of the regex can see it by looking back over `(`s and
//! be tagged `Start`.

use super::ast::Node;
use super::error::ParseError;
use crate::Alphabet;

/// Marker that opens the wrapped input.
pub const START_MARKER: char = '$';

/// Number of wrapper characters in front of the caller's regex.
const PREFIX_LEN: usize = 2;

pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Result of a single backward step.
enum Parsed {
    Node(Node),
    Overflow,
}

pub struct Parser<'a> {
    chars: Vec<char>,
    alphabet: &'a Alphabet,
    /// Count of unread characters; the next one is `chars[remaining - 1]`.
    remaining: usize,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'a> Parser<'a> {
    pub fn new(regex: &str, alphabet: &'a Alphabet) -> Self {
        let mut chars = Vec::with_capacity(regex.len() + 3);
        chars.push(START_MARKER);
        chars.push('(');
        chars.extend(regex.chars());
        chars.push(')');

        Self {
            remaining: chars.len(),
            chars,
            alphabet,
            depth: 0,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Node, ParseError> {
        self.validate()?;

        let mut top = Vec::with_capacity(1);
        while self.remaining > 0 {
            if let Parsed::Node(node) = self.walk(&mut top)? {
                top.push(node);
            }
        }

        match top.pop() {
            Some(root) if top.is_empty() => Ok(root),
            _ => unreachable!("wrapped input always parses to a single group"),
        }
    }

    /// Forward pass over the caller's regex: symbols first, then balance.
    fn validate(&self) -> Result<(), ParseError> {
        let regex = &self.chars[PREFIX_LEN..self.chars.len() - 1];
        let mut open = Vec::new();

        for (position, &c) in regex.iter().enumerate() {
            match c {
                '(' => open.push(position),
                ')' => {
                    if open.pop().is_none() {
                        return Err(ParseError::UnmatchedClose { position });
                    }
                }
                '*' | '+' => {}
                c if self.alphabet.contains(c) => {}
                character => {
                    return Err(ParseError::UnexpectedSymbol {
                        character,
                        position,
                    });
                }
            }
        }

        match open.pop() {
            Some(position) => Err(ParseError::UnmatchedOpen { position }),
            None => Ok(()),
        }
    }

    fn walk(&mut self, siblings: &mut Vec<Node>) -> Result<Parsed, ParseError> {
        let Some(c) = self.peek() else {
            unreachable!("walk is only called with input left")
        };
        let index = self.remaining - 1;
        self.remaining -= 1;

        match c {
            '*' => {
                self.enter_recursion(c, index)?;
                let child = self.operand(c, index, siblings)?;
                self.exit_recursion();
                Ok(Parsed::Node(Node::star(child)))
            }
            '+' => {
                let Some(right) = siblings.pop() else {
                    return Err(missing_operand(c, index));
                };
                self.enter_recursion(c, index)?;
                let left = self.operand(c, index, siblings)?;
                self.exit_recursion();
                let union = Node::union(left, right);
                self.check_union_depth(&union, index)?;
                Ok(Parsed::Node(union))
            }
            ')' => {
                self.enter_recursion(c, index)?;
                let group = self.group(index)?;
                self.exit_recursion();
                Ok(Parsed::Node(group))
            }
            START_MARKER if index == 0 => Ok(Parsed::Overflow),
            c if self.alphabet.contains(c) => {
                if self.follows_start_marker(index) {
                    Ok(Parsed::Node(Node::Start(c)))
                } else {
                    Ok(Parsed::Node(Node::Letter(c)))
                }
            }
            character => Err(ParseError::UnexpectedSymbol {
                character,
                position: user_position(index),
            }),
        }
    }

    /// Children between a `)` at `close` and its matching `(`, left to right.
    fn group(&mut self, close: usize) -> Result<Node, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.peek() {
                Some('(') => {
                    self.remaining -= 1;
                    break;
                }
                Some(_) => {
                    if let Parsed::Node(node) = self.walk(&mut children)? {
                        children.push(node);
                    }
                }
                None => {
                    return Err(ParseError::UnmatchedClose {
                        position: user_position(close),
                    });
                }
            }
        }
        children.reverse();
        Ok(Node::Word(children))
    }

    /// Operand of a unary or binary operator read at `index`.
    fn operand(
        &mut self,
        operator: char,
        index: usize,
        siblings: &mut Vec<Node>,
    ) -> Result<Node, ParseError> {
        match self.peek() {
            None | Some('(') | Some('+') => Err(missing_operand(operator, index)),
            Some(_) => match self.walk(siblings)? {
                Parsed::Node(node) => Ok(node),
                Parsed::Overflow => Err(missing_operand(operator, index)),
            },
        }
    }

    fn follows_start_marker(&self, index: usize) -> bool {
        self.chars[..index]
            .iter()
            .rev()
            .find(|&&c| c != '(')
            .is_some_and(|&c| c == START_MARKER)
    }

    fn peek(&self) -> Option<char> {
        self.remaining
            .checked_sub(1)
            .map(|index| self.chars[index])
    }

    fn enter_recursion(&mut self, character: char, index: usize) -> Result<(), ParseError> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(ParseError::RecursionLimitExceeded {
                character,
                position: user_position(index),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// A `+` chain nests through its right operand, which was built before
    /// the operator was read, so the parser depth alone misses it.
    fn check_union_depth(&self, union: &Node, index: usize) -> Result<(), ParseError> {
        let Some(limit) = self.recursion_fuel_limit else {
            return Ok(());
        };
        if self.depth as usize + union.depth() > limit as usize {
            return Err(ParseError::RecursionLimitExceeded {
                character: '+',
                position: user_position(index),
            });
        }
        Ok(())
    }
}

fn missing_operand(operator: char, index: usize) -> ParseError {
    ParseError::MissingOperand {
        operator,
        position: user_position(index),
    }
}

/// Map an index in the wrapped input back to the caller's regex.
fn user_position(index: usize) -> usize {
    index.saturating_sub(PREFIX_LEN)
}
