//! Constant SystemVerilog expression parsing and evaluation for parameter values.
//!
//! Validation is written against the [`ExpressionParser`] trait so any
//! evaluator can be plugged in. [`SystemVerilogExpressionParser`] is the
//! bundled implementation: it handles integer, real, based, fill and string
//! literals, identifiers bound to other expressions, the usual unary, binary
//! and ternary operators, `$clog2`/`$pow`/`$sqrt`, and array literals.
//!
//! Evaluation never fails: anything that cannot be reduced to a value yields
//! `"x"`.

#![warn(missing_docs)]

pub mod array;
pub mod ast;
pub mod error;
mod eval;
pub mod formatter;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod token;
pub mod value;

pub use array::{is_array_literal, split_array};
pub use error::ExprError;
pub use formatter::ValueFormatter;
pub use literal::{parse_based_literal, starts_with_based_literal, Base, BasedLiteral};
pub use parser::{parse, ExpressionParser, SystemVerilogExpressionParser};
pub use value::Value;
