//! Live LaTeX preview
//!
//! Cosmetic rewrite of the input text (plus a cursor bar) into something
//! KaTeX can display. Command tokens such as `\sqrt{` pass through untouched;
//! only the plain text between them is rewritten. Arithmetic never reads the
//! output of this module.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::text::token::units;

/// Placeholder for the cursor while rewriting (letters only, so fraction
/// operands can absorb it)
const CURSOR_MARKER: &str = "CURSORMARKER";

/// What the cursor is drawn as
const CURSOR_LATEX: &str = "|";

static PLAIN_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*|×|÷|π| infinity |iiint|iint|oint|partial|nabla|barx|hatp|chi2|vec2|mat2|rad")
        .expect("keyword pattern is valid")
});

/// Left operand: a command followed by a number (the command stays outside the
/// fraction), or a whole command, word, number or parenthesised group
const NUMERATOR: &str = r"(?:(\\[a-zA-Z]+)([0-9_.][a-zA-Z0-9_.]*)|(\\[a-zA-Z]+|[a-zA-Z0-9_.]+|\([^)]+\)))";

static FRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s*/\s*(\\?[a-zA-Z0-9_.]+|\([^)]+\))", NUMERATOR))
        .expect("fraction pattern is valid")
});

static OPEN_FRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s*/", NUMERATOR)).expect("open fraction pattern is valid")
});

fn keyword_latex(keyword: &str) -> &'static str {
    match keyword {
        "*" | "×" => "\\times ",
        "÷" => "\\div ",
        "π" => "\\pi ",
        " infinity " => "\\infty ",
        "iiint" => "\\iiint",
        "iint" => "\\iint",
        "oint" => "\\oint",
        "partial" => "\\partial",
        "nabla" => "\\nabla",
        "barx" => "\\bar{x}",
        "hatp" => "\\hat{p}",
        "chi2" => "\\chi^2",
        "vec2" => "\\begin{pmatrix} \\Box \\\\ \\Box \\end{pmatrix}",
        "mat2" => "\\begin{pmatrix} \\Box & \\Box \\\\ \\Box & \\Box \\end{pmatrix}",
        "rad" => "\\mathrm{rad}",
        _ => "",
    }
}

/// Render `content` with a cursor bar at `cursor` (end of text when `None`
/// or out of range)
pub fn render_preview(content: &str, cursor: Option<usize>) -> String {
    let chars: Vec<char> = content.chars().collect();
    let cursor = cursor.filter(|&pos| pos <= chars.len()).unwrap_or(chars.len());

    let mut latex = String::with_capacity(content.len() + CURSOR_MARKER.len());
    let mut plain = String::new();
    let mut marker_placed = false;

    for unit in units(&chars) {
        if !marker_placed && unit.range.start >= cursor {
            flush_plain(&mut plain, &mut latex);
            latex.push_str(CURSOR_MARKER);
            marker_placed = true;
        }

        if unit.atomic {
            flush_plain(&mut plain, &mut latex);
            latex.extend(&chars[unit.range.start..unit.range.end]);
        } else {
            plain.push(chars[unit.range.start]);
        }
    }
    flush_plain(&mut plain, &mut latex);
    if !marker_placed {
        latex.push_str(CURSOR_MARKER);
    }

    let latex = FRACTION.replace_all(&latex, |caps: &Captures| fraction(caps, &caps[4]));
    let latex = OPEN_FRACTION.replace_all(&latex, |caps: &Captures| fraction(caps, ""));
    let latex = latex.replace('/', "\\div ").replace(CURSOR_MARKER, CURSOR_LATEX);

    close_braces(latex)
}

/// `\frac` from a [`NUMERATOR`] match, keeping a leading command in front
fn fraction(caps: &Captures, denominator: &str) -> String {
    match (caps.get(1), caps.get(2)) {
        (Some(command), Some(numerator)) => {
            format!("{}\\frac{{{}}}{{{}}}", command.as_str(), numerator.as_str(), denominator)
        }
        _ => format!("\\frac{{{}}}{{{}}}", &caps[3], denominator),
    }
}

fn flush_plain(plain: &mut String, latex: &mut String) {
    if plain.is_empty() {
        return;
    }
    {
        let rewritten =
            PLAIN_KEYWORDS.replace_all(plain.as_str(), |caps: &Captures| keyword_latex(&caps[0]));
        latex.push_str(&rewritten);
    }
    plain.clear();
}

/// Append `}` for every unmatched `{`
fn close_braces(mut latex: String) -> String {
    let open = latex.matches('{').count();
    let close = latex.matches('}').count();
    if open > close {
        latex.push_str(&"}".repeat(open - close));
    }
    latex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_bar_at_end() {
        assert_eq!(render_preview("12", None), "12|");
        assert_eq!(render_preview("12", Some(99)), "12|");
    }

    #[test]
    fn test_cursor_bar_in_middle() {
        assert_eq!(render_preview("1+2", Some(1)), "1|+2");
    }

    #[test]
    fn test_cursor_never_splits_token() {
        assert_eq!(render_preview("\\pi", Some(2)), "\\pi|");
    }

    #[test]
    fn test_multiplication_sign() {
        assert_eq!(render_preview("2*3", None), "2\\times 3|");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(render_preview("1/2", None), "\\frac{1}{2|}");
        assert_eq!(render_preview("(a+b)/c", Some(0)), "|\\frac{(a+b)}{c}");
    }

    #[test]
    fn test_open_fraction_captures_cursor() {
        assert_eq!(render_preview("3/", None), "\\frac{3}{|}");
    }

    #[test]
    fn test_command_fraction_operand() {
        assert_eq!(render_preview("\\pi/2", Some(0)), "|\\frac{\\pi}{2}");
    }

    #[test]
    fn test_command_before_numerator_stays_outside() {
        assert_eq!(render_preview("2\\times3/4", Some(0)), "|2\\times\\frac{3}{4}");
        assert_eq!(render_preview("\\pi4/", None), "\\pi\\frac{4}{|}");
    }

    #[test]
    fn test_unclosed_braces_are_closed() {
        assert_eq!(render_preview("\\sqrt{9", None), "\\sqrt{9|}");
    }

    #[test]
    fn test_keywords_rewritten_outside_commands_only() {
        assert_eq!(render_preview("iiint", Some(0)), "|\\iiint");
        assert_eq!(render_preview("\\partial", None), "\\partial|");
        assert_eq!(render_preview("2rad", None), "2\\mathrm{rad}|");
    }
}
