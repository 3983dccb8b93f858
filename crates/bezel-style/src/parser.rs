use crate::color;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenWithPos};
use crate::selector::{Combinator, Compound, Selector};
use crate::sheet::{Declaration, RuleSet, StyleSheet};
use crate::value::Value;

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos).map(|t| t.token.clone()).unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::at(ParseErrorKind::Syntax, self.current_pos(), msg)
    }

    fn value_err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::at(ParseErrorKind::Value, self.current_pos(), msg)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.err(format!("expected identifier, got {:?}", self.peek())))
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    // ── Sheet ─────────────────────────────────────────────────────────────

    pub fn parse_sheet(&mut self) -> Result<StyleSheet, ParseError> {
        let mut rules = Vec::new();
        while self.peek() != &Token::Eof {
            rules.push(self.parse_rule_set()?);
        }
        Ok(StyleSheet { rules })
    }

    fn parse_rule_set(&mut self) -> Result<RuleSet, ParseError> {
        let mut selectors = vec![self.parse_selector()?];
        while self.peek() == &Token::Comma {
            self.advance();
            selectors.push(self.parse_selector()?);
        }

        self.expect_token(&Token::LBrace)?;
        let mut declarations = Vec::new();
        loop {
            match self.peek() {
                Token::Semicolon => {
                    self.advance();
                }
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err("unclosed '{' block")),
                _ => declarations.push(self.parse_declaration()?),
            }
        }

        Ok(RuleSet { selectors, declarations })
    }

    // ── Selector ──────────────────────────────────────────────────────────

    /// A type name or `*` starts a new compound (descendant of the previous
    /// one). `.class`, `#id`, and `:pseudo` attach to the current compound,
    /// or start an implicit `*` at the beginning or after `>`.
    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut parts: Vec<(Combinator, Compound)> = Vec::new();
        let mut link = Combinator::Descendant;
        let mut open = true;

        loop {
            match self.peek() {
                Token::Ident(_) | Token::Star => {
                    let tag = match self.advance() {
                        Token::Ident(s) => Some(s),
                        _ => None,
                    };
                    parts.push((link, Compound { tag, ..Compound::default() }));
                    link = Combinator::Descendant;
                    open = false;
                }
                Token::Dot | Token::Hash(_) | Token::Colon => {
                    if open {
                        parts.push((link, Compound::default()));
                        link = Combinator::Descendant;
                        open = false;
                    }
                    if let Some((_, compound)) = parts.last_mut() {
                        self.parse_modifier(compound)?;
                    }
                }
                Token::Gt => {
                    if open {
                        return Err(self.err("'>' must follow a selector"));
                    }
                    self.advance();
                    link = Combinator::Child;
                    open = true;
                }
                Token::Comma | Token::LBrace => break,
                tok => return Err(self.err(format!("expected selector or '{{', got {tok:?}"))),
            }
        }

        if parts.is_empty() {
            return Err(self.err("expected a selector"));
        }
        if open {
            return Err(self.err("selector ends with '>'"));
        }
        Ok(Selector { parts })
    }

    fn parse_modifier(&mut self, compound: &mut Compound) -> Result<(), ParseError> {
        match self.advance() {
            Token::Dot => compound.classes.push(self.expect_ident()?),
            Token::Colon => compound.pseudoclasses.push(self.expect_ident()?),
            Token::Hash(id) => compound.id = Some(id),
            tok => return Err(self.err(format!("expected '.', '#', or ':', got {tok:?}"))),
        }
        Ok(())
    }

    // ── Declaration ───────────────────────────────────────────────────────

    /// `property: value;` or `property: v0 v1 ...;`. The final `;` before a
    /// closing brace may be omitted.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let property = self.expect_ident()?;
        self.expect_token(&Token::Colon)?;

        let mut values = Vec::new();
        while !matches!(self.peek(), Token::Semicolon | Token::RBrace | Token::Eof) {
            values.push(self.parse_value()?);
        }
        if self.peek() == &Token::Semicolon {
            self.advance();
        }

        let value = match values.len() {
            0 => return Err(self.err(format!("missing value for '{property}'"))),
            1 => values.remove(0),
            _ => Value::List(values),
        };
        Ok(Declaration { property, value })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.advance() {
            Token::Number(n) => {
                if self.peek() == &Token::Percent {
                    self.advance();
                }
                Ok(Value::Number(n))
            }
            Token::Hash(digits) => color::parse_hex(&digits)
                .map(Value::Color)
                .ok_or_else(|| self.value_err(format!("invalid color #{digits}; expected #rrggbb"))),
            Token::Ident(name) if self.peek() == &Token::LParen => self.parse_color_function(&name),
            Token::Ident(name) => Ok(color::named(&name).map_or(Value::Ident(name), Value::Color)),
            tok => Err(self.err(format!("expected a value, got {tok:?}"))),
        }
    }

    fn parse_color_function(&mut self, name: &str) -> Result<Value, ParseError> {
        let arity = match name {
            "rgb" | "hsl" => 3,
            "rgba" | "hsla" => 4,
            _ => return Err(self.value_err(format!("unknown function '{name}'"))),
        };

        self.advance(); // consume `(`
        let mut args = Vec::with_capacity(arity);
        loop {
            match self.advance() {
                Token::Number(n) => args.push(n),
                tok => return Err(self.err(format!("expected a number in {name}(), got {tok:?}"))),
            }
            if self.peek() == &Token::Percent {
                self.advance();
            }
            match self.advance() {
                Token::Comma => continue,
                Token::RParen => break,
                tok => return Err(self.err(format!("expected ',' or ')' in {name}(), got {tok:?}"))),
            }
        }
        if args.len() != arity {
            return Err(self.value_err(format!("{name}() takes {arity} arguments, got {}", args.len())));
        }

        let alpha = args.get(3).copied().unwrap_or(1.0);
        let c = if name.starts_with("rgb") {
            color::from_rgb(args[0], args[1], args[2], alpha)
        } else {
            color::from_hsl(args[0], args[1], args[2], alpha)
        };
        Ok(Value::Color(c))
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse style-sheet source into a [`StyleSheet`].
pub fn parse_str(src: &str) -> Result<StyleSheet, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_sheet()
}
