use thiserror::Error;

/// Why a single line degraded to an error comment.
///
/// None of these abort a translation: the driver renders the error in place
/// of the statement and carries on with the next line at the same indent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// A delimiting word such as `in`, `then` or `args` is absent.
    #[error("expected '{marker}' in '{keyword}' statement")]
    MissingMarker {
        keyword: &'static str,
        marker: &'static str,
    },
    /// A positional token (name, destination, bound) is absent.
    #[error("missing {operand} in '{keyword}' statement")]
    MissingOperand {
        keyword: &'static str,
        operand: &'static str,
    },
    /// `for` names neither `up to` nor `from ... to`.
    #[error("expected 'up to' or 'from ... to' in 'for' statement")]
    MissingRange,
    /// `else` followed by something other than `then`.
    #[error("Expected 'then' after 'else'")]
    ElseWithoutThen,
}

impl LineError {
    /// Render the error as an output line at the given indent prefix.
    pub fn render(&self, prefix: &str) -> String {
        match self {
            LineError::ElseWithoutThen => format!("{prefix}else:  # Error: {self}"),
            _ => format!("{prefix}# Error: Malformed line - {self}"),
        }
    }
}
