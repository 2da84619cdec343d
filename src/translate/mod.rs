//! PFD to Python translation.
//!
//! Translation is a single sequential pass: each line is rewritten on its
//! own, and the only state carried between lines is the [`IndentLevel`]
//! returned by the previous line.

mod error;
mod indent;
mod line;


pub use error::LineError;
pub use indent::{DEFAULT_INDENT_WIDTH, IndentLevel};
pub use line::{Keyword, LineOutcome, LineOutput};

/// Line translator configured with an indent width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    indent_width: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// A line that degraded to an error comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the untrimmed source.
    pub line_number: usize,
    pub source: String,
    pub error: LineError,
}

/// Result of translating a whole source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub line_count: usize,
    /// Indent level after the last line; zero for well-nested input.
    pub final_indent: IndentLevel,
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    pub fn is_balanced(&self) -> bool {
        self.final_indent == IndentLevel::ZERO
    }
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Translate a whole source text.
    ///
    /// Surrounding whitespace of the text is trimmed, then every line is
    /// translated in order. The output has exactly one line per input line.
    pub fn translate(&self, source: &str) -> Translation {
        let trimmed = source.trim();
        let skipped = source[..source.len() - source.trim_start().len()]
            .matches('\n')
            .count();

        let mut indent = IndentLevel::ZERO;
        let mut lines = Vec::new();
        let mut diagnostics = Vec::new();

        for (index, line) in trimmed.split('\n').enumerate() {
            let output = self.translate_line(line, indent);
            if let LineOutcome::Malformed(error) = output.outcome {
                diagnostics.push(Diagnostic {
                    line_number: skipped + index + 1,
                    source: line.to_string(),
                    error,
                });
            }
            indent = output.next_indent;
            lines.push(output.text);
        }

        Translation {
            line_count: lines.len(),
            text: lines.join("\n"),
            final_indent: indent,
            diagnostics,
        }
    }
}

/// Translate one line with the default indent width.
pub fn translate_line(line: &str, indent: IndentLevel) -> LineOutput {
    Translator::default().translate_line(line, indent)
}

/// Translate a whole PFD source text into Python source text.
pub fn translate_all(source: &str) -> String {
    Translator::default().translate(source).text
}
