// Calculator session: key handling, solve and history

use math_tutor_wasm::calculator::{basic_keypad, scientific_keypad, Calculator, HistoryEntry};
use math_tutor_wasm::models::AngleUnit;

fn press_all(calc: &mut Calculator, keys: &[&str]) {
    for key in keys {
        calc.press(key);
    }
}

#[test]
fn test_solve_records_history() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["7", "×", "6", "solve"]);

    assert_eq!(calc.display(), "42");
    assert_eq!(
        calc.history(),
        &[HistoryEntry { expression: "7×6".to_string(), result: "42".to_string() }]
    );
}

#[test]
fn test_solve_in_radians_tags_history() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["deg_rad", "cos", "0", "parens", "solve"]);

    assert_eq!(calc.angle_unit(), AngleUnit::Radians);
    assert_eq!(calc.history()[0].expression, "cos(0) [rad]");
    assert_eq!(calc.history()[0].result, "1");
}

#[test]
fn test_solve_without_result_is_ignored() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["3", "+", "solve"]);

    assert_eq!(calc.display(), "3+");
    assert!(calc.history().is_empty());
}

#[test]
fn test_angle_unit_changes_live_result() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["sin", "9", "0", "parens"]);
    assert_eq!(calc.live_result(), "1");

    calc.press("deg_rad");
    assert_eq!(calc.live_result(), "0.8939966636");
}

#[test]
fn test_parens_close_after_constants_and_factorials() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["parens", "pi", "parens"]);
    assert_eq!(calc.display(), "(π)");

    calc.press("clear");
    press_all(&mut calc, &["parens", "3", "fact", "parens"]);
    assert_eq!(calc.display(), "(3!)");
    assert_eq!(calc.live_result(), "6");
}

#[test]
fn test_negate_toggles_trailing_number() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["1", "2", "+", "3", "negate"]);
    assert_eq!(calc.display(), "12+-3");
    assert_eq!(calc.live_result(), "9");

    calc.press("negate");
    assert_eq!(calc.display(), "12+3");

    calc.press("clear");
    calc.press("negate");
    assert_eq!(calc.display(), "-");
}

#[test]
fn test_percent_and_powers() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["5", "0", "percent"]);
    assert_eq!(calc.display(), "50%");
    assert_eq!(calc.live_result(), "0.5");

    calc.press("clear");
    press_all(&mut calc, &["10pow", "3"]);
    assert_eq!(calc.live_result(), "1000");

    calc.press("clear");
    press_all(&mut calc, &["3", "sqr"]);
    assert_eq!(calc.display(), "3^2");
    assert_eq!(calc.live_result(), "9");
}

#[test]
fn test_delete_and_history_reload() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["2", "+", "2", "solve", "clear", "9", "9", "delete"]);
    assert_eq!(calc.display(), "9");

    assert!(calc.load_history(0));
    assert_eq!(calc.display(), "4");
    assert!(!calc.load_history(5));

    calc.clear_history();
    assert!(calc.history().is_empty());
}

#[test]
fn test_snapshot() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["2nd", "1", "+", "1"]);
    calc.toggle_scientific();

    let snapshot = calc.snapshot();
    assert_eq!(snapshot.display, "1+1");
    assert_eq!(snapshot.cursor, 3);
    assert_eq!(snapshot.live_result, "2");
    assert!(snapshot.second);
    assert!(snapshot.scientific);
}

#[test]
fn test_scientific_keys_follow_second_toggle() {
    let mut calc = Calculator::new();
    calc.press("2nd");

    for label in ["sin⁻¹", "1", ")"] {
        let keys = scientific_keypad(calc.is_second(), calc.angle_unit());
        let key = keys.iter().find(|key| key.label == label).expect("key on layout");
        calc.press(&key.key);
    }

    assert_eq!(calc.display(), "asin(1)");
    assert_eq!(calc.live_result(), "90");
}

#[test]
fn test_basic_keypad_arithmetic() {
    let mut calc = Calculator::new();
    let keys = basic_keypad();
    for label in ["9", "÷", "4", "="] {
        let key = keys.iter().find(|key| key.label == label).expect("key on layout");
        calc.press(&key.key);
    }
    assert_eq!(calc.display(), "2.25");
}
