//! Function bindings available to expressions
//!
//! The scope is the complete set of callable operations. Trig functions read
//! and produce angles in the scope's angle unit.

use crate::models::{AngleUnit, Function};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    pub angle_unit: AngleUnit,
}

impl Scope {
    pub fn new(angle_unit: AngleUnit) -> Self {
        Self { angle_unit }
    }

    pub fn apply(&self, function: Function, x: f64) -> f64 {
        let unit = self.angle_unit;
        match function {
            Function::Sin => unit.to_radians(x).sin(),
            Function::Cos => unit.to_radians(x).cos(),
            Function::Tan => unit.to_radians(x).tan(),
            Function::Asin => unit.from_radians(x.asin()),
            Function::Acos => unit.from_radians(x.acos()),
            Function::Atan => unit.from_radians(x.atan()),
            Function::Log => x.log10(),
            Function::Ln => x.ln(),
            Function::Sqrt => x.sqrt(),
            Function::Factorial => factorial(x),
        }
    }
}

/// Iterative product `2 * 3 * ... * n`
///
/// Negative input is NaN. Non-integers are not supported: the product simply
/// stops at the last integer not above `n`.
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    result
}
