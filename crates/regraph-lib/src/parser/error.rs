//! Parse failures and their rendering.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// A regex that does not belong to the grammar.
///
/// Positions are zero-based character indices into the caller's regex.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected symbol '{character}' at position {position}")]
    UnexpectedSymbol { character: char, position: usize },

    #[error("unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },

    #[error("unclosed '(' at position {position}")]
    UnmatchedOpen { position: usize },

    #[error("operator '{operator}' at position {position} is missing an operand")]
    MissingOperand { operator: char, position: usize },

    #[error("nesting too deep at '{character}' (position {position})")]
    RecursionLimitExceeded { character: char, position: usize },
}

impl ParseError {
    /// The offending character.
    pub fn character(&self) -> char {
        match self {
            ParseError::UnexpectedSymbol { character, .. }
            | ParseError::RecursionLimitExceeded { character, .. } => *character,
            ParseError::UnmatchedClose { .. } => ')',
            ParseError::UnmatchedOpen { .. } => '(',
            ParseError::MissingOperand { operator, .. } => *operator,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedSymbol { position, .. }
            | ParseError::UnmatchedClose { position }
            | ParseError::UnmatchedOpen { position }
            | ParseError::MissingOperand { position, .. }
            | ParseError::RecursionLimitExceeded { position, .. } => *position,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedSymbol { .. } => "not an alphabet symbol or operator",
            ParseError::UnmatchedClose { .. } => "no matching '('",
            ParseError::UnmatchedOpen { .. } => "never closed",
            ParseError::MissingOperand { .. } => "operand expected here",
            ParseError::RecursionLimitExceeded { .. } => "nesting limit reached",
        }
    }

    /// Render the error against the regex it came from.
    pub fn render(&self, source: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.to_string();
        let snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(char_span(source, self.position()))
                .label(self.label()),
        );
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];

        renderer.render(&report).to_string()
    }
}

/// Byte range of the char at `position`, or an empty range clamped to the end.
fn char_span(source: &str, position: usize) -> Range<usize> {
    match source.char_indices().nth(position) {
        Some((start, c)) => start..start + c.len_utf8(),
        None => source.len()..source.len(),
    }
}
