use std::fmt;

/// Spaces emitted per indent level unless a translator is configured otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Number of currently open blocks.
///
/// Signed so that an unmatched `end` drives the level below zero instead of
/// failing; a negative level renders as no indentation at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndentLevel(pub i32);

impl IndentLevel {
    pub const ZERO: Self = Self(0);

    /// Level for the line following a block opener.
    pub fn opened(self) -> Self {
        Self(self.0 + 1)
    }

    /// Level for the line following `end`.
    pub fn closed(self) -> Self {
        Self(self.0 - 1)
    }

    /// Leading whitespace for a line emitted at this level.
    pub fn prefix(self, width: usize) -> String {
        let depth = usize::try_from(self.0).unwrap_or(0);
        " ".repeat(width * depth)
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
