//! Expression parsing and the [`ExpressionParser`] interface.

use crate::array::is_array_literal;
use crate::ast::{BinaryOp, Expr, SystemFunction, UnaryOp};
use crate::error::ExprError;
use crate::eval::Evaluator;
use crate::lexer::lex;
use crate::token::{Token, TokenKind};
use crate::value::Value;
use std::collections::HashMap;

/// Validates and evaluates parameter value expressions.
///
/// The parameter validator depends only on this trait, so a full
/// SystemVerilog evaluator can stand in for the bundled
/// [`SystemVerilogExpressionParser`].
pub trait ExpressionParser {
    /// Returns `true` if `expression` is syntactically valid.
    fn is_valid_expression(&self, expression: &str) -> bool;

    /// Evaluates `expression` to its textual result.
    ///
    /// Integers come back in decimal, reals in shortest round-trip form,
    /// strings with their quotes, and array literals as `{e1,e2,...}`.
    /// Anything that cannot be evaluated yields `"x"`.
    fn parse_expression(&self, expression: &str) -> String;

    /// Returns `true` if `expression` is a valid array literal.
    fn is_array_expression(&self, expression: &str) -> bool;
}

/// Constant-expression evaluator for SystemVerilog parameter values.
///
/// Identifiers are looked up in a symbol table mapping parameter names to
/// their value expressions. Unknown identifiers are syntactically valid but
/// evaluate to `x`.
#[derive(Debug, Default, Clone)]
pub struct SystemVerilogExpressionParser {
    symbols: HashMap<String, String>,
}

impl SystemVerilogExpressionParser {
    /// Creates a parser with no known identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that resolves identifiers through `symbols`.
    pub fn with_symbols<I, K, V>(symbols: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Binds `name` to `expression`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, expression: impl Into<String>) {
        self.symbols.insert(name.into(), expression.into());
    }
}

impl ExpressionParser for SystemVerilogExpressionParser {
    fn is_valid_expression(&self, expression: &str) -> bool {
        parse(expression).is_ok()
    }

    fn parse_expression(&self, expression: &str) -> String {
        match parse(expression) {
            Ok(expr) => Evaluator::new(&self.symbols).eval(&expr).to_string(),
            Err(err) => {
                log::trace!("'{expression}' does not parse: {err}");
                "x".to_string()
            }
        }
    }

    fn is_array_expression(&self, expression: &str) -> bool {
        is_array_literal(expression) && self.is_valid_expression(expression)
    }
}

/// Parses an expression string into an [`Expr`] tree.
pub fn parse(text: &str) -> Result<Expr, ExprError> {
    if text.trim().is_empty() {
        return Err(ExprError::Empty);
    }
    let tokens = lex(text)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    parser.expect(TokenKind::Eof, "end of expression")?;
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &TokenKind {
        // The token list always ends with Eof and `advance` never moves past it.
        &self.tokens[self.pos].kind
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ExprError> {
        if *self.peek() == kind {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ExprError {
        let token = &self.tokens[self.pos];
        ExprError::Expected {
            expected,
            found: token.kind.to_string(),
            pos: token.pos,
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        let cond = self.parse_binary(0)?;
        if *self.peek() != TokenKind::Question {
            return Ok(cond);
        }
        self.advance();
        let then_expr = self.parse_expr()?;
        self.expect(TokenKind::Colon, "':'")?;
        let else_expr = self.parse_expr()?;
        Ok(Expr::Ternary {
            cond: Box::new(cond),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        })
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ExprError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = binary_op(self.peek()) {
            if op.precedence() < min_prec {
                break;
            }
            self.advance();
            let rhs = self.parse_binary(op.precedence() + 1)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.peek() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::LogicalNot,
            TokenKind::Tilde => UnaryOp::BitNot,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Literal(value)),
            TokenKind::Str(s) => Ok(Expr::Literal(Value::Str(s))),
            TokenKind::Ident(name) => Ok(Expr::Ident(name)),
            TokenKind::SystemIdent(name) => self.parse_call(name),
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::LBrace | TokenKind::TickBrace => {
                let elements = self.parse_list()?;
                self.expect(TokenKind::RBrace, "'}'")?;
                Ok(Expr::Array(elements))
            }
            other => Err(ExprError::Expected {
                expected: "an operand",
                found: other.to_string(),
                pos: token.pos,
            }),
        }
    }

    fn parse_call(&mut self, name: String) -> Result<Expr, ExprError> {
        let func = SystemFunction::from_name(&name)
            .ok_or_else(|| ExprError::UnknownFunction { name: name.clone() })?;
        self.expect(TokenKind::LParen, "'('")?;
        let args = self.parse_list()?;
        self.expect(TokenKind::RParen, "')'")?;
        if args.len() != func.arity() {
            return Err(ExprError::Arity {
                name,
                expected: func.arity(),
                found: args.len(),
            });
        }
        Ok(Expr::Call { func, args })
    }

    /// Parses one or more comma-separated expressions.
    fn parse_list(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut items = vec![self.parse_expr()?];
        while *self.peek() == TokenKind::Comma {
            self.advance();
            items.push(self.parse_expr()?);
        }
        Ok(items)
    }
}

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::StarStar => BinaryOp::Pow,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Shl => BinaryOp::Shl,
        TokenKind::Shr => BinaryOp::Shr,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Le => BinaryOp::Le,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::Ge => BinaryOp::Ge,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::BangEq => BinaryOp::Ne,
        TokenKind::Amp => BinaryOp::BitAnd,
        TokenKind::Caret => BinaryOp::BitXor,
        TokenKind::Pipe => BinaryOp::BitOr,
        TokenKind::AmpAmp => BinaryOp::LogicalAnd,
        TokenKind::PipePipe => BinaryOp::LogicalOr,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sv() -> SystemVerilogExpressionParser {
        SystemVerilogExpressionParser::new()
    }

    #[test]
    fn valid_expressions() {
        for text in [
            "1",
            "'h1 + 'h1 - 'b1",
            "\"some other text\"",
            "WIDTH - 1",
            "$clog2(WIDTH)",
            "(1 + 2) * 3",
            "a ? b : c",
            "'{1, 2, 3}",
            "-9223372036854775808",
        ] {
            assert!(sv().is_valid_expression(text), "{text} should be valid");
        }
    }

    #[test]
    fn invalid_expressions() {
        for text in [
            "",
            "   ",
            "some text",
            "1 +",
            "(1",
            "{}",
            "$unknown(1)",
            "$clog2(1, 2)",
            "3'b13",
            "1 2",
            "a ? b",
        ] {
            assert!(!sv().is_valid_expression(text), "{text} should be invalid");
        }
    }

    #[test]
    fn evaluation_results() {
        assert_eq!(sv().parse_expression("12 + 12"), "24");
        assert_eq!(sv().parse_expression("'h01 + 'h0E"), "15");
        assert_eq!(sv().parse_expression("\"text\""), "\"text\"");
        assert_eq!(sv().parse_expression("1.25 * 2"), "2.5");
        assert_eq!(sv().parse_expression("some text"), "x");
        assert_eq!(sv().parse_expression("unknown_id"), "x");
    }

    #[test]
    fn long_integers_evaluate_exactly() {
        assert_eq!(
            sv().parse_expression("-9223372036854775808"),
            "-9223372036854775808"
        );
        assert_eq!(
            sv().parse_expression("18446744073709551615"),
            "18446744073709551615"
        );
    }

    #[test]
    fn arrays_evaluate_elementwise() {
        assert_eq!(sv().parse_expression("'{1+1, 4'hf, \"s\"}"), "{2,15,\"s\"}");
        assert!(sv().is_array_expression("{1, 2}"));
        assert!(!sv().is_array_expression("1"));
        assert!(!sv().is_array_expression("{1,}"));
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(sv().parse_expression("1 + 2 * 3"), "7");
        assert_eq!(sv().parse_expression("10 - 4 - 3"), "3");
        assert_eq!(sv().parse_expression("-2 ** 2"), "4");
        assert_eq!(sv().parse_expression("1 || 0 && 0"), "1");
        assert_eq!(sv().parse_expression("0 ? 1 : 0 ? 2 : 3"), "3");
    }

    #[test]
    fn symbols_are_resolved() {
        let mut parser = SystemVerilogExpressionParser::with_symbols([("WIDTH", "16")]);
        assert_eq!(parser.parse_expression("$clog2(WIDTH)"), "4");
        parser.define("WIDTH", "32");
        assert_eq!(parser.parse_expression("WIDTH / 8"), "4");
    }

    #[test]
    fn parse_error_positions() {
        assert_eq!(
            parse("1 +"),
            Err(ExprError::Expected {
                expected: "an operand",
                found: "end of expression".to_string(),
                pos: 3,
            })
        );
    }
}
