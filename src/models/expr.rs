//! Expression syntax tree
//!
//! Produced by [`crate::parse::grammar`], consumed by [`crate::eval`].
//! The set of callable functions is closed: anything else fails to parse.

use serde::{Deserialize, Serialize};

/// Named constants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// The only functions an expression may call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    Sqrt,
    Factorial,
}

impl Function {
    /// Look up a function by its written name
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "log" => Function::Log,
            "ln" => Function::Ln,
            "sqrt" | "root" => Function::Sqrt,
            "factorial" => Function::Factorial,
            _ => return None,
        };
        Some(function)
    }

    /// Inverse of a forward trig function (`\sin^{-1}` -> asin)
    pub fn inverse(self) -> Option<Self> {
        match self {
            Function::Sin => Some(Function::Asin),
            Function::Cos => Some(Function::Acos),
            Function::Tan => Some(Function::Atan),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Postfix `!`
    Factorial(Box<Expr>),
    Call {
        function: Function,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary { op, operand: Box::new(operand) }
    }

    pub fn call(function: Function, arg: Expr) -> Self {
        Expr::Call { function, arg: Box::new(arg) }
    }
}
