use std::fmt;

/// Which stage rejected the source.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A character or comment the lexer cannot tokenize.
    Lexical,
    /// Tokens in an order the grammar does not allow.
    Syntax,
    /// A well-formed value that is not a valid color or function call.
    Value,
}

impl ParseErrorKind {
    fn label(self) -> &'static str {
        match self {
            ParseErrorKind::Lexical => "lexical",
            ParseErrorKind::Syntax => "syntax",
            ParseErrorKind::Value => "value",
        }
    }
}

/// A style sheet that failed to parse, with the 1-based position of the
/// offending token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub(crate) fn at(kind: ParseErrorKind, (line, col): (usize, usize), msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into(), line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error at {}:{}: {}", self.kind.label(), self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_position() {
        let e = ParseError::at(ParseErrorKind::Value, (3, 14), "invalid color #12");
        assert_eq!(e.to_string(), "value error at 3:14: invalid color #12");
    }
}
