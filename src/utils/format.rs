//! Number formatting matching what the browser front end displays
//!
//! Results are shown next to values JavaScript formatted itself, so these
//! follow `Number.prototype.toString`, `toExponential` and `toPrecision`.

/// Shortest round-trip text, switching to exponent form outside [1e-6, 1e21)
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        signed_exponent(&format!("{:e}", value))
    } else {
        format!("{}", value)
    }
}

/// Exponent form with a fixed number of fraction digits (`1.2346e+7`)
pub fn format_exponential(value: f64, fraction_digits: usize) -> String {
    signed_exponent(&format!("{:.*e}", fraction_digits, value))
}

/// Round to `significant` digits, then print without trailing zeros
pub fn format_significant(value: f64, significant: usize) -> String {
    let digits = significant.saturating_sub(1);
    let rounded = format!("{:.*e}", digits, value)
        .parse::<f64>()
        .unwrap_or(value);
    format_number(rounded)
}

/// Fixed number of fraction digits (`12.50`)
pub fn format_fixed(value: f64, fraction_digits: usize) -> String {
    format!("{:.*}", fraction_digits, value)
}

/// Rust writes `1e7`; the front end expects `1e+7`
fn signed_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text.to_string(),
    }
}
