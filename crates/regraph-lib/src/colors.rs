//! ANSI color codes for AST and automaton dumps.

/// Palette keyed by what is being printed rather than by hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Vertex names and edge targets.
    pub vertex: &'static str,
    /// Input symbols on edges and AST leaves.
    pub symbol: &'static str,
    /// Accepting vertices and `accept` verdicts.
    pub accept: &'static str,
    /// Arrows, ε, empty markers and layout hints.
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        vertex: "\x1b[34m",
        symbol: "\x1b[32m",
        accept: "\x1b[1;32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Every code empty, so output is plain text.
    pub const OFF: Self = Self {
        vertex: "",
        symbol: "",
        accept: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
