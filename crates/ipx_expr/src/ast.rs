//! Expression tree produced by [`parse`](crate::parser::parse).

use crate::value::Value;

/// A parsed constant expression.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    /// A literal value.
    Literal(Value),
    /// A reference to another parameter by name.
    Ident(String),
    /// A prefix operator.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },
    /// An infix operator.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// `cond ? then_expr : else_expr`
    Ternary {
        /// The condition.
        cond: Box<Expr>,
        /// Result when the condition holds.
        then_expr: Box<Expr>,
        /// Result otherwise.
        else_expr: Box<Expr>,
    },
    /// A system function call.
    Call {
        /// The function.
        func: SystemFunction,
        /// The arguments, already checked against the function's arity.
        args: Vec<Expr>,
    },
    /// `{a, b}` or `'{a, b}`.
    Array(Vec<Expr>),
}

/// Prefix operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Neg,
    /// `!`
    LogicalNot,
    /// `~`
    BitNot,
}

/// Infix operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    /// `**`
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
    /// `|`
    BitOr,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
}

impl BinaryOp {
    /// Binding strength; higher binds tighter. All operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Pow => 10,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 9,
            BinaryOp::Add | BinaryOp::Sub => 8,
            BinaryOp::Shl | BinaryOp::Shr => 7,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 6,
            BinaryOp::Eq | BinaryOp::Ne => 5,
            BinaryOp::BitAnd => 4,
            BinaryOp::BitXor => 3,
            BinaryOp::BitOr => 2,
            BinaryOp::LogicalAnd => 1,
            BinaryOp::LogicalOr => 0,
        }
    }
}

/// Supported `$` system functions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SystemFunction {
    /// `$clog2(n)`: ceiling of log2.
    Clog2,
    /// `$pow(a, b)`
    Pow,
    /// `$sqrt(x)`
    Sqrt,
}

impl SystemFunction {
    /// Looks up a function by its name including `$`.
    pub fn from_name(name: &str) -> Option<SystemFunction> {
        match name {
            "$clog2" => Some(SystemFunction::Clog2),
            "$pow" => Some(SystemFunction::Pow),
            "$sqrt" => Some(SystemFunction::Sqrt),
            _ => None,
        }
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            SystemFunction::Pow => 2,
            SystemFunction::Clog2 | SystemFunction::Sqrt => 1,
        }
    }
}
