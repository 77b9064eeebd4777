//! Lexical analyzer for constant SystemVerilog expressions.
//!
//! Works on bytes. Numeric literals are evaluated while lexing so the parser
//! only sees [`TokenKind::Number`] values; based literals go through
//! [`parse_based_literal`] and a literal whose digits do not fit its base is
//! a lexing error.

use crate::error::ExprError;
use crate::literal::{parse_based_literal, parse_decimal, Base};
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Lexes an expression into tokens. The result always ends with [`TokenKind::Eof`].
pub fn lex(text: &str) -> Result<Vec<Token>, ExprError> {
    let mut lexer = Lexer {
        text,
        source: text.as_bytes(),
        pos: 0,
    };
    lexer.lex_all()
}

struct Lexer<'a> {
    text: &'a str,
    source: &'a [u8],
    pos: usize,
}

impl Lexer<'_> {
    fn lex_all(&mut self) -> Result<Vec<Token>, ExprError> {
        let mut tokens = Vec::new();
        loop {
            while self.peek().is_ascii_whitespace() && self.pos < self.source.len() {
                self.pos += 1;
            }
            if self.pos >= self.source.len() {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    pos: self.pos,
                });
                return Ok(tokens);
            }
            let start = self.pos;
            let kind = self.next_token()?;
            tokens.push(Token { kind, pos: start });
        }
    }

    fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        self.source.get(self.pos + offset).copied().unwrap_or(0)
    }

    fn advance(&mut self) -> u8 {
        let b = self.peek();
        self.pos += 1;
        b
    }

    fn next_token(&mut self) -> Result<TokenKind, ExprError> {
        let start = self.pos;
        let b = self.peek();
        match b {
            b'0'..=b'9' => self.lex_number(start),
            b'\'' => self.lex_tick(start),
            b'"' => self.lex_string(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                self.eat_ident_chars();
                Ok(TokenKind::Ident(self.text[start..self.pos].to_string()))
            }
            b'$' if is_ident_start(self.peek_at(1)) => {
                self.pos += 1;
                self.eat_ident_chars();
                Ok(TokenKind::SystemIdent(self.text[start..self.pos].to_string()))
            }
            _ => self.lex_punct(start),
        }
    }

    fn lex_punct(&mut self, start: usize) -> Result<TokenKind, ExprError> {
        let pair = match (self.peek(), self.peek_at(1)) {
            (b'*', b'*') => Some(TokenKind::StarStar),
            (b'<', b'<') => Some(TokenKind::Shl),
            (b'>', b'>') => Some(TokenKind::Shr),
            (b'<', b'=') => Some(TokenKind::Le),
            (b'>', b'=') => Some(TokenKind::Ge),
            (b'=', b'=') => Some(TokenKind::EqEq),
            (b'!', b'=') => Some(TokenKind::BangEq),
            (b'&', b'&') => Some(TokenKind::AmpAmp),
            (b'|', b'|') => Some(TokenKind::PipePipe),
            _ => None,
        };
        if let Some(kind) = pair {
            self.pos += 2;
            return Ok(kind);
        }
        let kind = match self.peek() {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b'&' => TokenKind::Amp,
            b'|' => TokenKind::Pipe,
            b'^' => TokenKind::Caret,
            b'~' => TokenKind::Tilde,
            b'!' => TokenKind::Bang,
            b'?' => TokenKind::Question,
            b':' => TokenKind::Colon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => {
                let ch = self.text[start..].chars().next().unwrap_or('\0');
                return Err(ExprError::UnexpectedChar { ch, pos: start });
            }
        };
        self.pos += 1;
        Ok(kind)
    }

    fn lex_number(&mut self, start: usize) -> Result<TokenKind, ExprError> {
        self.eat_decimal_digits();

        if self.peek() == b'\'' && self.at_base_marker(1) {
            self.pos += 1;
            return self.lex_based_body(start);
        }

        let mut is_real = false;
        if self.peek() == b'.' && self.peek_at(1).is_ascii_digit() {
            self.pos += 1;
            self.eat_decimal_digits();
            is_real = true;
        }
        if matches!(self.peek(), b'e' | b'E') {
            let sign = usize::from(matches!(self.peek_at(1), b'+' | b'-'));
            if self.peek_at(1 + sign).is_ascii_digit() {
                self.pos += 1 + sign;
                self.eat_decimal_digits();
                is_real = true;
            }
        }

        let text = &self.text[start..self.pos];
        if is_real {
            let clean: String = text.chars().filter(|&c| c != '_').collect();
            return match clean.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(TokenKind::Number(Value::Real(f))),
                Ok(_) => Ok(TokenKind::Number(Value::Unknown)),
                Err(_) => Err(ExprError::InvalidLiteral {
                    text: text.to_string(),
                    pos: start,
                }),
            };
        }
        Ok(TokenKind::Number(
            parse_decimal(text).map_or(Value::Unknown, Value::Int),
        ))
    }

    /// Lexes a token starting with a tick: an unsized based literal, a fill
    /// literal (`'0`, `'1`, `'x`, `'z`), or the `'{` array opener.
    fn lex_tick(&mut self, start: usize) -> Result<TokenKind, ExprError> {
        if self.peek_at(1) == b'{' {
            self.pos += 2;
            return Ok(TokenKind::TickBrace);
        }
        if self.at_base_marker(1) {
            self.pos += 1;
            return self.lex_based_body(start);
        }
        let fill = self.peek_at(1);
        if matches!(fill, b'0' | b'1' | b'x' | b'X' | b'z' | b'Z') && !is_ident_char(self.peek_at(2)) {
            self.pos += 2;
            let value = match fill {
                b'0' => Value::Int(0),
                b'1' => Value::Int(1),
                _ => Value::Unknown,
            };
            return Ok(TokenKind::Number(value));
        }
        Err(ExprError::UnexpectedChar {
            ch: '\'',
            pos: start,
        })
    }

    /// Consumes `[s]<base><digits>` after the tick at `self.pos - 1`.
    fn lex_based_body(&mut self, start: usize) -> Result<TokenKind, ExprError> {
        if matches!(self.peek(), b's' | b'S') {
            self.pos += 1;
        }
        self.pos += 1;
        while self.peek().is_ascii_alphanumeric() || matches!(self.peek(), b'_' | b'?') {
            self.pos += 1;
        }
        let text = &self.text[start..self.pos];
        match parse_based_literal(text) {
            Some(literal) => Ok(TokenKind::Number(
                literal.value().map_or(Value::Unknown, Value::Int),
            )),
            None => Err(ExprError::InvalidLiteral {
                text: text.to_string(),
                pos: start,
            }),
        }
    }

    fn lex_string(&mut self, start: usize) -> Result<TokenKind, ExprError> {
        self.pos += 1;
        let mut content = String::new();
        loop {
            if self.pos >= self.source.len() {
                return Err(ExprError::UnterminatedString { pos: start });
            }
            let rest = &self.text[self.pos..];
            let ch = rest.chars().next().unwrap_or('\0');
            self.pos += ch.len_utf8();
            match ch {
                '"' => return Ok(TokenKind::Str(content)),
                '\\' => {
                    let escaped = self.text[self.pos..].chars().next();
                    match escaped {
                        Some(e) => {
                            self.pos += e.len_utf8();
                            content.push(match e {
                                'n' => '\n',
                                't' => '\t',
                                other => other,
                            });
                        }
                        None => return Err(ExprError::UnterminatedString { pos: start }),
                    }
                }
                other => content.push(other),
            }
        }
    }

    /// Returns `true` if `[s]<base letter>` starts at `pos + offset`.
    fn at_base_marker(&self, offset: usize) -> bool {
        let mut c = self.peek_at(offset);
        if matches!(c, b's' | b'S') {
            c = self.peek_at(offset + 1);
        }
        Base::from_char(c as char).is_some()
    }

    fn eat_decimal_digits(&mut self) {
        while self.peek().is_ascii_digit() || self.peek() == b'_' {
            self.advance();
        }
    }

    fn eat_ident_chars(&mut self) {
        while is_ident_char(self.peek()) {
            self.advance();
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
