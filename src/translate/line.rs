//! Per-line classification and rewriting.
//!
//! A line is split on whitespace and dispatched on its first token. Every
//! sub-expression is an opaque span of tokens sitting between the keyword and
//! a marker word (`in`, `then`, `args`, `up to`, `from`, `to`); nothing inside
//! those spans is parsed.

use super::{IndentLevel, LineError, Translator};

/// Statement keywords recognised in the first position of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Store,
    Print,
    Return,
    Call,
    If,
    Else,
    ElseIf,
    For,
    While,
    Function,
    Try,
    Except,
    Import,
    End,
}

impl Keyword {
    pub fn from_token(token: &str) -> Option<Self> {
        let keyword = match token {
            "store" => Keyword::Store,
            "print" => Keyword::Print,
            "return" => Keyword::Return,
            "call" => Keyword::Call,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "elseif" => Keyword::ElseIf,
            "for" => Keyword::For,
            "while" => Keyword::While,
            "function" => Keyword::Function,
            "try" => Keyword::Try,
            "except" => Keyword::Except,
            "import" => Keyword::Import,
            "end" => Keyword::End,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Store => "store",
            Keyword::Print => "print",
            Keyword::Return => "return",
            Keyword::Call => "call",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::ElseIf => "elseif",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Function => "function",
            Keyword::Try => "try",
            Keyword::Except => "except",
            Keyword::Import => "import",
            Keyword::End => "end",
        }
    }
}

/// How a line affects the nesting of the lines after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    Keep,
    Open,
    Close,
}

/// What kind of line produced a [`LineOutput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty or whitespace-only input.
    Blank,
    /// A recognised statement.
    Translated(Keyword),
    /// Unrecognised first token; the line was copied through.
    Passthrough,
    /// A recognised statement that could not be extracted.
    Malformed(LineError),
}

/// Result of translating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutput {
    pub text: String,
    /// Indent level to use for the following line.
    pub next_indent: IndentLevel,
    pub outcome: LineOutcome,
}

impl LineOutput {
    fn blank(indent: IndentLevel) -> Self {
        Self {
            text: String::new(),
            next_indent: indent,
            outcome: LineOutcome::Blank,
        }
    }
}

struct Statement {
    body: String,
    nesting: Nesting,
}

impl Statement {
    fn keep(body: String) -> Self {
        Self {
            body,
            nesting: Nesting::Keep,
        }
    }

    fn open(body: String) -> Self {
        Self {
            body,
            nesting: Nesting::Open,
        }
    }
}

impl Translator {
    /// Translate a single line given the indent level it is emitted at.
    ///
    /// Never fails: extraction errors come back as a [`LineOutcome::Malformed`]
    /// whose text is a comment, with the indent level left unchanged.
    pub fn translate_line(&self, line: &str, indent: IndentLevel) -> LineOutput {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = words.first() else {
            return LineOutput::blank(indent);
        };

        let prefix = indent.prefix(self.indent_width());

        let Some(keyword) = Keyword::from_token(first) else {
            return LineOutput {
                text: format!("{prefix}{line}"),
                next_indent: indent,
                outcome: LineOutcome::Passthrough,
            };
        };

        let tokens = Tokens {
            keyword,
            line,
            words,
        };
        match tokens.statement() {
            Ok(Statement { body, nesting }) => {
                let (text, next_indent) = match nesting {
                    Nesting::Keep => (format!("{prefix}{body}"), indent),
                    Nesting::Open => (format!("{prefix}{body}"), indent.opened()),
                    // Block closers leave a bare empty line behind.
                    Nesting::Close => (String::new(), indent.closed()),
                };
                LineOutput {
                    text,
                    next_indent,
                    outcome: LineOutcome::Translated(keyword),
                }
            }
            Err(error) => LineOutput {
                text: error.render(&prefix),
                next_indent: indent,
                outcome: LineOutcome::Malformed(error),
            },
        }
    }
}

struct Tokens<'a> {
    keyword: Keyword,
    line: &'a str,
    /// Subslices of `line`.
    words: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn statement(&self) -> Result<Statement, LineError> {
        let statement = match self.keyword {
            Keyword::Store => {
                let at = self.marker("in", 1)?;
                let expression = strip_calls(&self.join(1, at));
                let destination = self.operand(at + 1, "destination after 'in'")?;
                let targets = destination.split(',').collect::<Vec<_>>().join(", ");
                Statement::keep(format!("{targets} = {expression}"))
            }
            Keyword::Print => Statement::keep(format!("print({})", strip_calls(&self.rest()))),
            Keyword::Return => Statement::keep(format!("return {}", strip_calls(&self.rest()))),
            Keyword::Call => {
                let call = self.rest();
                if call.ends_with(')') {
                    Statement::keep(call)
                } else {
                    Statement::keep(format!("{call}()"))
                }
            }
            Keyword::If => Statement::open(format!("if {}:", self.condition()?)),
            Keyword::ElseIf => Statement::open(format!("elif {}:", self.condition()?)),
            Keyword::Else => match self.words.get(1) {
                Some(&"then") => Statement::open("else:".to_string()),
                Some(_) => return Err(LineError::ElseWithoutThen),
                None => {
                    return Err(LineError::MissingMarker {
                        keyword: self.keyword.as_str(),
                        marker: "then",
                    });
                }
            },
            Keyword::For => self.for_loop()?,
            Keyword::While => Statement::open(format!("while {}:", self.rest())),
            Keyword::Function => {
                let name = self.operand(1, "function name")?;
                let args = self.marker("args", 1)?;
                let params = self.join(args + 1, self.words.len());
                Statement::open(format!("def {name}({params}):"))
            }
            Keyword::Try => Statement::open("try:".to_string()),
            Keyword::Except => {
                let exception = self.operand(1, "exception name")?;
                Statement::open(format!("except {exception}:"))
            }
            Keyword::Import => {
                let module = self.operand(1, "module name")?;
                Statement::keep(format!("import {module}"))
            }
            Keyword::End => Statement {
                body: String::new(),
                nesting: Nesting::Close,
            },
        };
        Ok(statement)
    }

    /// `for v up to N` or `for v from A to B`.
    fn for_loop(&self) -> Result<Statement, LineError> {
        let var = self.operand(1, "loop variable")?;

        if let Some(up) = self.pair("up", "to", 1) {
            let bound = self.after(up + 1);
            if bound.is_empty() {
                return Err(self.missing("bound after 'up to'"));
            }
            return Ok(Statement::open(format!("for {var} in range({bound}):")));
        }

        let from = self.position("from", 2).ok_or(LineError::MissingRange)?;
        let to = self
            .position("to", from + 1)
            .ok_or(LineError::MissingRange)?;
        let start = self.operand(from + 1, "range start after 'from'")?;
        let stop = self.operand(to + 1, "range stop after 'to'")?;
        Ok(Statement::open(format!(
            "for {var} in range({start}, {stop}):"
        )))
    }

    /// Tokens between the keyword and `then`, with `is like` turned into `==`.
    fn condition(&self) -> Result<String, LineError> {
        let then = self.marker("then", 1)?;
        Ok(self.join(1, then).replace("is like", "=="))
    }

    fn position(&self, word: &str, from: usize) -> Option<usize> {
        self.words
            .iter()
            .skip(from)
            .position(|w| *w == word)
            .map(|i| i + from)
    }

    /// Index of the first token of the consecutive pair `first second`.
    fn pair(&self, first: &str, second: &str, from: usize) -> Option<usize> {
        self.words
            .windows(2)
            .skip(from)
            .position(|w| w[0] == first && w[1] == second)
            .map(|i| i + from)
    }

    fn marker(&self, marker: &'static str, from: usize) -> Result<usize, LineError> {
        self.position(marker, from)
            .ok_or(LineError::MissingMarker {
                keyword: self.keyword.as_str(),
                marker,
            })
    }

    fn operand(&self, index: usize, operand: &'static str) -> Result<&'a str, LineError> {
        self.words
            .get(index)
            .copied()
            .ok_or_else(|| self.missing(operand))
    }

    fn missing(&self, operand: &'static str) -> LineError {
        LineError::MissingOperand {
            keyword: self.keyword.as_str(),
            operand,
        }
    }

    fn join(&self, start: usize, end: usize) -> String {
        self.words
            .get(start..end)
            .map(|span| span.join(" "))
            .unwrap_or_default()
    }

    /// Raw text of the line following token `index`, trimmed.
    fn after(&self, index: usize) -> &'a str {
        let word = self.words[index];
        let end = word.as_ptr() as usize - self.line.as_ptr() as usize + word.len();
        self.line[end..].trim()
    }

    fn rest(&self) -> String {
        self.join(1, self.words.len())
    }
}

/// Remove every `"call "` substring, wherever it occurs.
fn strip_calls(expression: &str) -> String {
    expression.replace("call ", "")
}
