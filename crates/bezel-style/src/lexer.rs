use crate::error::{ParseError, ParseErrorKind};

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Number(f32),
    /// `#` followed by name characters: an id selector or a `#rrggbb` color,
    /// depending on where it appears.
    Hash(String),
    // Punctuation
    Dot,
    Colon,
    Semicolon,
    Comma,
    Star,
    Gt,
    Percent,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Splits style-sheet source into tokens.
///
/// Whitespace and `/* ... */` comments only separate tokens. Numbers may not
/// start with a decimal point (`0.5`, never `.5`), so `.` is always the class
/// selector dot.
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        let src = self.src;
        &src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::at(ParseErrorKind::Lexical, (self.line, self.col), msg)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if !self.rest().starts_with("/*") {
                return Ok(());
            }
            let (line, col) = (self.line, self.col);
            self.advance();
            self.advance();
            loop {
                if self.rest().starts_with("*/") {
                    self.advance();
                    self.advance();
                    break;
                }
                if self.advance().is_none() {
                    return Err(ParseError::at(ParseErrorKind::Lexical, (line, col), "unterminated comment"));
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(ch) = self.peek() else { return Ok(Token::Eof) };

        let punct = match ch {
            '.' => Some(Token::Dot),
            ':' => Some(Token::Colon),
            ';' => Some(Token::Semicolon),
            ',' => Some(Token::Comma),
            '*' => Some(Token::Star),
            '>' => Some(Token::Gt),
            '%' => Some(Token::Percent),
            '{' => Some(Token::LBrace),
            '}' => Some(Token::RBrace),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(tok) = punct {
            self.advance();
            return Ok(tok);
        }

        match ch {
            '#' => self.lex_hash(),
            c if c.is_ascii_digit() => self.lex_number(),
            '-' if matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) => self.lex_number(),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(Token::Ident(self.take_name().to_string())),
            other => Err(self.err(format!("unexpected character {other:?}"))),
        }
    }

    fn take_name(&mut self) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            self.advance();
        }
        let src = self.src;
        &src[start..self.pos]
    }

    fn lex_hash(&mut self) -> Result<Token, ParseError> {
        self.advance(); // consume `#`
        let name = self.take_name();
        if name.is_empty() {
            return Err(self.err("expected a name or hex color after '#'"));
        }
        Ok(Token::Hash(name.to_string()))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && matches!(self.peek_second(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| self.err(format!("invalid number {s:?}")))
    }
}
