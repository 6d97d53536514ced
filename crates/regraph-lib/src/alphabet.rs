//! Input alphabet shared by the parser and subset construction.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Characters with grammar meaning that can never be input symbols.
pub const RESERVED: [char; 5] = ['(', ')', '*', '+', '$'];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one symbol")]
    Empty,

    #[error("'{0}' is reserved by the regex grammar and cannot be an input symbol")]
    Reserved(char),

    #[error("whitespace cannot be an input symbol")]
    Whitespace,
}

/// A finite, ordered set of input symbols.
///
/// Symbols are deduplicated and iterated in ascending order, which keeps
/// subset construction deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: BTreeSet<char>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut set = BTreeSet::new();
        for symbol in symbols {
            if RESERVED.contains(&symbol) {
                return Err(AlphabetError::Reserved(symbol));
            }
            if symbol.is_whitespace() {
                return Err(AlphabetError::Whitespace);
            }
            set.insert(symbol);
        }
        if set.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { symbols: set })
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: BTreeSet::from(['a', 'b']),
        }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "}}")
    }
}
