//! Evaluation of parsed expressions to [`Value`]s.

use crate::ast::{BinaryOp, Expr, SystemFunction, UnaryOp};
use crate::parser::parse;
use crate::value::Value;
use std::collections::HashMap;

/// Identifier chains deeper than this evaluate to `x`, which also stops
/// parameters that refer to each other in a cycle.
const MAX_DEPTH: usize = 32;

pub(crate) struct Evaluator<'a> {
    symbols: &'a HashMap<String, String>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(symbols: &'a HashMap<String, String>) -> Self {
        Self { symbols, depth: 0 }
    }

    pub(crate) fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal(value) => value.clone(),
            Expr::Ident(name) => self.eval_ident(name),
            Expr::Unary { op, operand } => unary(*op, self.eval(operand)),
            Expr::Binary { op, lhs, rhs } => binary(*op, self.eval(lhs), self.eval(rhs)),
            Expr::Ternary {
                cond,
                then_expr,
                else_expr,
            } => match self.eval(cond).truthiness() {
                Some(true) => self.eval(then_expr),
                Some(false) => self.eval(else_expr),
                None => Value::Unknown,
            },
            Expr::Call { func, args } => {
                let values: Vec<Value> = args.iter().map(|a| self.eval(a)).collect();
                call(*func, &values)
            }
            Expr::Array(elements) => Value::Array(elements.iter().map(|e| self.eval(e)).collect()),
        }
    }

    fn eval_ident(&self, name: &str) -> Value {
        let Some(text) = self.symbols.get(name) else {
            return Value::Unknown;
        };
        if self.depth >= MAX_DEPTH {
            log::debug!("reference depth exceeded while resolving '{name}'");
            return Value::Unknown;
        }
        match parse(text) {
            Ok(expr) => Evaluator {
                symbols: self.symbols,
                depth: self.depth + 1,
            }
            .eval(&expr),
            Err(_) => Value::Unknown,
        }
    }
}

fn unary(op: UnaryOp, value: Value) -> Value {
    match (op, value) {
        (UnaryOp::Plus, v @ (Value::Int(_) | Value::Real(_))) => v,
        (UnaryOp::Neg, Value::Int(n)) => n.checked_neg().map_or(Value::Unknown, Value::Int),
        (UnaryOp::Neg, Value::Real(f)) => Value::Real(-f),
        (UnaryOp::LogicalNot, v) => v
            .truthiness()
            .map_or(Value::Unknown, |t| Value::from_bool(!t)),
        (UnaryOp::BitNot, Value::Int(n)) => Value::Int(!n),
        _ => Value::Unknown,
    }
}

fn binary(op: BinaryOp, lhs: Value, rhs: Value) -> Value {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => int_binary(op, a, b).map_or(Value::Unknown, Value::Int),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Eq => Value::from_bool(a == b),
            BinaryOp::Ne => Value::from_bool(a != b),
            _ => Value::Unknown,
        },
        (lhs, rhs) => match (lhs.as_real(), rhs.as_real()) {
            (Some(a), Some(b)) => real_binary(op, a, b),
            _ => Value::Unknown,
        },
    }
}

fn int_binary(op: BinaryOp, a: i128, b: i128) -> Option<i128> {
    match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Mod => a.checked_rem(b),
        BinaryOp::Pow => {
            if b < 0 {
                Some(0)
            } else {
                u32::try_from(b).ok().and_then(|e| a.checked_pow(e))
            }
        }
        BinaryOp::Shl => u32::try_from(b).ok().and_then(|s| a.checked_shl(s)),
        BinaryOp::Shr => u32::try_from(b).ok().and_then(|s| a.checked_shr(s)),
        BinaryOp::Lt => Some(i128::from(a < b)),
        BinaryOp::Le => Some(i128::from(a <= b)),
        BinaryOp::Gt => Some(i128::from(a > b)),
        BinaryOp::Ge => Some(i128::from(a >= b)),
        BinaryOp::Eq => Some(i128::from(a == b)),
        BinaryOp::Ne => Some(i128::from(a != b)),
        BinaryOp::BitAnd => Some(a & b),
        BinaryOp::BitXor => Some(a ^ b),
        BinaryOp::BitOr => Some(a | b),
        BinaryOp::LogicalAnd => Some(i128::from(a != 0 && b != 0)),
        BinaryOp::LogicalOr => Some(i128::from(a != 0 || b != 0)),
    }
}

fn real_binary(op: BinaryOp, a: f64, b: f64) -> Value {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b == 0.0 => return Value::Unknown,
        BinaryOp::Div => a / b,
        BinaryOp::Pow => a.powf(b),
        BinaryOp::Lt => return Value::from_bool(a < b),
        BinaryOp::Le => return Value::from_bool(a <= b),
        BinaryOp::Gt => return Value::from_bool(a > b),
        BinaryOp::Ge => return Value::from_bool(a >= b),
        BinaryOp::Eq => return Value::from_bool(a == b),
        BinaryOp::Ne => return Value::from_bool(a != b),
        BinaryOp::LogicalAnd => return Value::from_bool(a != 0.0 && b != 0.0),
        BinaryOp::LogicalOr => return Value::from_bool(a != 0.0 || b != 0.0),
        BinaryOp::Mod
        | BinaryOp::Shl
        | BinaryOp::Shr
        | BinaryOp::BitAnd
        | BinaryOp::BitXor
        | BinaryOp::BitOr => return Value::Unknown,
    };
    if result.is_finite() {
        Value::Real(result)
    } else {
        Value::Unknown
    }
}

fn call(func: SystemFunction, args: &[Value]) -> Value {
    match (func, args) {
        (SystemFunction::Clog2, [Value::Int(n)]) => Value::Int(clog2(*n)),
        (SystemFunction::Pow, [a, b]) => binary(BinaryOp::Pow, a.clone(), b.clone()),
        (SystemFunction::Sqrt, [v]) => match v.as_real() {
            Some(f) if f >= 0.0 => Value::Real(f.sqrt()),
            _ => Value::Unknown,
        },
        _ => Value::Unknown,
    }
}

/// Ceiling of log2 with `$clog2` semantics: `clog2(0) = clog2(1) = 0`.
fn clog2(n: i128) -> i128 {
    if n <= 1 {
        return 0;
    }
    let mut result = 0;
    let mut val = n - 1;
    while val > 0 {
        result += 1;
        val >>= 1;
    }
    result
}
