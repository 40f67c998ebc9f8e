// Evaluator behaviour on keypad text and typed LaTeX

use math_tutor_wasm::eval::{evaluate, round_decimals, RESULT_DECIMALS};
use math_tutor_wasm::models::{AngleUnit, Evaluation};
use proptest::prelude::*;

fn deg(source: &str) -> Evaluation {
    evaluate(source, AngleUnit::Degrees)
}

fn rad(source: &str) -> Evaluation {
    evaluate(source, AngleUnit::Radians)
}

#[test]
fn test_trig_noise_is_rounded_away() {
    assert_eq!(deg("cos(90)"), Evaluation::Number(0.0));
    assert_eq!(deg("sin(30)"), Evaluation::Number(0.5));
    assert_eq!(deg("cos(90)").display(), "0");
}

#[test]
fn test_factorial() {
    assert_eq!(deg("5!"), Evaluation::Number(120.0));
    assert_eq!(deg("(2+3)!"), Evaluation::Number(120.0));
    assert_eq!(deg("3!!"), Evaluation::Number(720.0));
    assert_eq!(deg("171!"), Evaluation::NoResult);
}

#[test]
fn test_invalid_input_has_no_result() {
    assert_eq!(deg("1/0"), Evaluation::NoResult);
    assert_eq!(deg("3+"), Evaluation::NoResult);
    assert_eq!(deg("((2)"), Evaluation::NoResult);
    assert_eq!(deg("foo(2)"), Evaluation::NoResult);
    assert_eq!(deg("sqrt(-1)"), Evaluation::NoResult);
    assert_eq!(deg("2 3"), Evaluation::NoResult);
    assert_eq!(deg(""), Evaluation::NoResult);
    assert_eq!(deg("   "), Evaluation::NoResult);
}

#[test]
fn test_inverse_trig_follows_angle_unit() {
    assert_eq!(deg("asin(1)"), Evaluation::Number(90.0));
    assert_eq!(rad("asin(1)"), Evaluation::Number(1.5707963268));
    assert_eq!(deg("\\arcsin(1)"), Evaluation::Number(90.0));
    assert_eq!(deg("\\sin^{-1}(1)"), Evaluation::Number(90.0));
    assert_eq!(rad("cos(90)"), Evaluation::Number(-0.4480736161));
}

#[test]
fn test_power_rules() {
    assert_eq!(deg("2^3^2"), Evaluation::Number(512.0));
    assert_eq!(deg("-2^2"), Evaluation::Number(-4.0));
    assert_eq!(deg("2^-1"), Evaluation::Number(0.5));
    assert_eq!(deg("2^(-1)"), Evaluation::Number(0.5));
}

#[test]
fn test_latex_input() {
    assert_eq!(deg("\\sqrt{16}+2\\times3"), Evaluation::Number(10.0));
    assert_eq!(deg("\\left(1+2\\right)\\times3"), Evaluation::Number(9.0));
    assert_eq!(deg("8\\div4"), Evaluation::Number(2.0));
    assert_eq!(deg("2\\cdot\\pi"), Evaluation::Number(6.2831853072));
    assert_eq!(deg("50\\%"), Evaluation::Number(0.5));
}

#[test]
fn test_keypad_symbols() {
    assert_eq!(deg("6×7"), Evaluation::Number(42.0));
    assert_eq!(deg("9÷3"), Evaluation::Number(3.0));
    assert_eq!(deg("√(9)"), Evaluation::Number(3.0));
    assert_eq!(deg("π"), Evaluation::Number(3.1415926536));
    assert_eq!(deg("200*10%"), Evaluation::Number(20.0));
}

#[test]
fn test_logarithms() {
    assert_eq!(deg("log(1000)"), Evaluation::Number(3.0));
    assert_eq!(deg("ln(e)"), Evaluation::Number(1.0));
    assert_eq!(deg("log(0)"), Evaluation::NoResult);
}

#[test]
fn test_display_text() {
    assert_eq!(deg("0.1+0.2").display(), "0.3");
    assert_eq!(deg("1/3").display(), "0.3333333333");
    assert_eq!(deg("3+").display(), "");
}

proptest! {
    #[test]
    fn two_operand_arithmetic_matches_float(a in 0u32..100_000, b in 1u32..100_000, op in 0usize..4) {
        let (a, b) = (f64::from(a) / 100.0, f64::from(b) / 100.0);
        let (symbol, expected) = match op {
            0 => ("+", a + b),
            1 => ("-", a - b),
            2 => ("*", a * b),
            _ => ("/", a / b),
        };

        let source = format!("{}{}{}", a, symbol, b);
        prop_assert_eq!(
            deg(&source),
            Evaluation::Number(round_decimals(expected, RESULT_DECIMALS))
        );
    }
}
