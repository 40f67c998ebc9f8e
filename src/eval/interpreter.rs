//! Tree-walking interpreter
//!
//! Arithmetic follows IEEE-754: division by zero and domain errors produce
//! infinities or NaN, which the caller turns into `NoResult`.

use super::scope::{factorial, Scope};
use crate::models::{BinaryOp, Expr, UnaryOp};

pub struct Interpreter {
    scope: Scope,
}

impl Interpreter {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn eval(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Number(value) => *value,
            Expr::Constant(constant) => constant.value(),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand);
                match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Minus => -value,
                }
            }
            Expr::Binary { op, lhs, rhs } => {
                let (a, b) = (self.eval(lhs), self.eval(rhs));
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    BinaryOp::Pow => a.powf(b),
                }
            }
            Expr::Factorial(operand) => factorial(self.eval(operand)),
            Expr::Call { function, arg } => self.scope.apply(*function, self.eval(arg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AngleUnit, Function};

    #[test]
    fn test_nested_evaluation() {
        // sqrt(16) * -(2 + 1)
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::call(Function::Sqrt, Expr::Number(16.0)),
            Expr::unary(
                UnaryOp::Minus,
                Expr::binary(BinaryOp::Add, Expr::Number(2.0), Expr::Number(1.0)),
            ),
        );
        let interpreter = Interpreter::new(Scope::new(AngleUnit::Radians));
        assert_eq!(interpreter.eval(&expr), -12.0);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        let expr = Expr::binary(BinaryOp::Div, Expr::Number(1.0), Expr::Number(0.0));
        let interpreter = Interpreter::new(Scope::default());
        assert!(interpreter.eval(&expr).is_infinite());
    }
}
