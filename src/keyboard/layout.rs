//! Math keyboard tab contents

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{KeyAction, KeyCategory, MathKey};

/// Keyboard tab
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Tab {
    #[default]
    Numbers = 0,
    Letters = 1,
    Algebra = 2,
    Calculus = 3,
    Trig = 4,
    Geometry = 5,
    Stats = 6,
    Greek = 7,
    SetLogic = 8,
    Matrix = 9,
}

impl Tab {
    pub const ALL: [Tab; 10] = [
        Tab::Numbers,
        Tab::Letters,
        Tab::Algebra,
        Tab::Calculus,
        Tab::Trig,
        Tab::Geometry,
        Tab::Stats,
        Tab::Greek,
        Tab::SetLogic,
        Tab::Matrix,
    ];

    /// Tab caption
    pub fn name(self) -> &'static str {
        match self {
            Tab::Numbers => "123",
            Tab::Letters => "ABC",
            Tab::Algebra => "Algebra",
            Tab::Calculus => "Calculus",
            Tab::Trig => "Trig",
            Tab::Geometry => "Geometry",
            Tab::Stats => "Stats",
            Tab::Greek => "Greek",
            Tab::SetLogic => "SetLogic",
            Tab::Matrix => "Matrix",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.name() == name)
    }

    /// Keys in grid order (five columns)
    pub fn keys(self) -> Vec<MathKey> {
        match self {
            Tab::Numbers => numbers(),
            Tab::Letters => with_delete(letters()),
            Tab::Algebra => with_delete(algebra()),
            Tab::Calculus => with_delete(calculus()),
            Tab::Trig => with_delete(trig()),
            Tab::Geometry => with_delete(geometry()),
            Tab::Stats => with_delete(stats()),
            Tab::Greek => with_delete(greek()),
            Tab::SetLogic => with_delete(set_logic()),
            Tab::Matrix => with_delete(matrix()),
        }
    }
}

/// Tab caption plus keys, as sent to the key grid
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TabLayout {
    pub tab: Tab,
    pub name: &'static str,
    pub keys: Vec<MathKey>,
}

impl From<Tab> for TabLayout {
    fn from(tab: Tab) -> Self {
        Self { tab, name: tab.name(), keys: tab.keys() }
    }
}

// ============================================================================
// Key constructors
// ============================================================================

fn action(label: &'static str, action: KeyAction, category: KeyCategory) -> MathKey {
    MathKey::Action { label, action, category }
}

fn delete_key() -> MathKey {
    action("⌫", KeyAction::Delete, KeyCategory::Warning)
}

fn with_delete(mut keys: Vec<MathKey>) -> Vec<MathKey> {
    keys.push(delete_key());
    keys
}

fn digit(label: &'static str) -> MathKey {
    MathKey::Insert { label: Some(label), latex: None, value: label, category: KeyCategory::Number }
}

fn tex(latex: &'static str, value: &'static str, category: KeyCategory) -> MathKey {
    MathKey::Insert { label: None, latex: Some(latex), value, category }
}

/// Single symbol typed as itself
fn base(symbol: &'static str) -> MathKey {
    tex(symbol, symbol, KeyCategory::Base)
}

// ============================================================================
// Tabs
// ============================================================================

fn numbers() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        action("AC", KeyAction::Clear, Danger),
        tex("(", "(", Function),
        tex(")", ")", Function),
        tex("\\div", "/", Operator),
        delete_key(),
        digit("7"),
        digit("8"),
        digit("9"),
        tex("\\times", "*", Operator),
        tex("x^2", "^2", Function),
        digit("4"),
        digit("5"),
        digit("6"),
        tex("-", "-", Operator),
        tex("\\sqrt{x}", "sqrt(", Function),
        digit("1"),
        digit("2"),
        digit("3"),
        tex("+", "+", Operator),
        tex("\\pi", "pi", Function),
        digit("0"),
        digit("."),
        tex("=", "=", Submit),
        tex("\\%", "%", Function),
        tex("!", "!", Function),
    ]
}

fn letters() -> Vec<MathKey> {
    const SYMBOLS: [&str; 35] = [
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z", "A", "B", "C", "X", "Y", "Z", ",", ".", "?",
    ];
    SYMBOLS.into_iter().map(base).collect()
}

fn algebra() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\frac{\\Box}{\\Box}", "/", Operator),
        tex("\\sqrt{x}", "sqrt(", Function),
        tex("\\sqrt[n]{x}", "nrt", Function),
        tex("x^2", "^2", Function),
        tex("x^y", "^", Operator),
        tex("|x|", "|", Function),
        base("a"),
        base("b"),
        base("c"),
        tex("\\pi", "π", Base),
        tex("\\neq", "≠", Operator),
        tex("\\approx", "≈", Operator),
        tex("\\pm", "±", Operator),
        tex("\\mp", "∓", Operator),
        tex("\\infty", "∞", Base),
        tex("<", "<", Operator),
        tex(">", ">", Operator),
        tex("\\le", "≤", Operator),
        tex("\\ge", "≥", Operator),
        tex("\\propto", "∝", Operator),
        base("["),
        base("]"),
        tex("\\{", "{", Base),
        tex("\\}", "}", Base),
        base("!"),
    ]
}

fn calculus() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\frac{dy}{dx}", "dy/dx", Function),
        tex("\\frac{d}{dx}", "diff", Function),
        tex("\\int", "∫", Function),
        tex("\\int_{a}^{b}", "defint", Function),
        tex("\\sum", "∑", Function),
        tex("\\prod", "∏", Function),
        tex("\\lim", "lim", Function),
        tex("\\lim_{x\\to0}", "lim0", Function),
        tex("\\frac{\\partial}{\\partial x}", "partial", Function),
        tex("\\nabla", "∇", Function),
        tex("\\Delta", "Δ", Base),
        base("dx"),
        base("dt"),
        base("f(x)"),
        base("g(x)"),
        tex("\\oint", "oint", Function),
        tex("\\iint", "iint", Function),
        tex("\\iiint", "iiint", Function),
        tex("\\prime", "'", Base),
        tex("\\infty", "∞", Base),
    ]
}

fn trig() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\sin", "sin(", Function),
        tex("\\cos", "cos(", Function),
        tex("\\tan", "tan(", Function),
        tex("\\csc", "csc(", Function),
        tex("\\sec", "sec(", Function),
        tex("\\cot", "cot(", Function),
        tex("\\sin^{-1}", "asin(", Function),
        tex("\\cos^{-1}", "acos(", Function),
        tex("\\tan^{-1}", "atan(", Function),
        tex("\\theta", "θ", Base),
        tex("\\phi", "φ", Base),
        tex("^\\circ", "°", Base),
        tex("\\sinh", "sinh(", Function),
        tex("\\cosh", "cosh(", Function),
        tex("\\tanh", "tanh(", Function),
        tex("\\pi", "π", Base),
    ]
}

fn geometry() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\angle", "angle", Function),
        tex("\\triangle", "triangle", Base),
        tex("\\perp", "perp", Operator),
        tex("\\parallel", "parallel", Operator),
        tex("\\cong", "cong", Operator),
        tex("\\sim", "sim", Operator),
        tex("\\vec{v}", "vec", Base),
        tex("\\overline{AB}", "bar", Base),
        tex("\\deg", "deg", Base),
        tex("\\mathrm{rad}", "rad", Base),
        tex("\\alpha", "α", Base),
        tex("\\beta", "β", Base),
        tex("\\gamma", "γ", Base),
        tex("\\pi", "π", Base),
        base("r"),
    ]
}

fn stats() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\bar{x}", "barx", Base),
        tex("\\mu", "μ", Base),
        tex("\\sigma", "σ", Base),
        tex("\\Sigma", "Σ", Base),
        tex("P(A)", "P(A)", Function),
        tex("n!", "!", Operator),
        tex("\\binom{n}{k}", "binom", Function),
        tex("E[X]", "E[X]", Function),
        tex("\\hat{p}", "hatp", Base),
        tex("\\chi^2", "chi2", Base),
    ]
}

fn greek() -> Vec<MathKey> {
    const LETTERS: [(&str, &str); 21] = [
        ("\\alpha", "α"),
        ("\\beta", "β"),
        ("\\gamma", "γ"),
        ("\\delta", "δ"),
        ("\\epsilon", "ε"),
        ("\\zeta", "ζ"),
        ("\\eta", "η"),
        ("\\theta", "θ"),
        ("\\lambda", "λ"),
        ("\\mu", "μ"),
        ("\\rho", "ρ"),
        ("\\sigma", "σ"),
        ("\\tau", "τ"),
        ("\\phi", "φ"),
        ("\\omega", "ω"),
        ("\\Gamma", "Γ"),
        ("\\Delta", "Δ"),
        ("\\Theta", "Θ"),
        ("\\Lambda", "Λ"),
        ("\\Sigma", "Σ"),
        ("\\Omega", "Ω"),
    ];
    LETTERS
        .into_iter()
        .map(|(latex, value)| tex(latex, value, KeyCategory::Base))
        .collect()
}

fn set_logic() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\in", "∈", Operator),
        tex("\\notin", "∉", Operator),
        tex("\\subset", "⊂", Operator),
        tex("\\subseteq", "⊆", Operator),
        tex("\\cup", "∪", Operator),
        tex("\\cap", "∩", Operator),
        tex("\\emptyset", "∅", Base),
        tex("\\forall", "∀", Base),
        tex("\\exists", "∃", Base),
        tex("\\nexists", "∄", Base),
        tex("\\therefore", "∴", Operator),
        tex("\\because", "∵", Operator),
        tex("\\neg", "¬", Operator),
        tex("\\implies", "⇒", Operator),
        tex("\\iff", "⇔", Operator),
    ]
}

fn matrix() -> Vec<MathKey> {
    use KeyCategory::*;
    vec![
        tex("\\begin{pmatrix}\\Box\\\\\\Box\\end{pmatrix}", "vec2", Function),
        tex("\\begin{pmatrix}\\Box&\\Box\\\\\\Box&\\Box\\end{pmatrix}", "mat2", Function),
        tex("\\rightarrow", "→", Base),
        tex("\\leftarrow", "←", Base),
        tex("\\uparrow", "↑", Base),
        tex("\\downarrow", "↓", Base),
        tex("\\mathbb{R}", "R_set", Base),
        tex("\\mathbb{Z}", "Z_set", Base),
        tex("\\mathbb{N}", "N_set", Base),
        tex("\\mathbb{Q}", "Q_set", Base),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_but_numbers_ends_with_delete() {
        for tab in Tab::ALL.into_iter().filter(|&tab| tab != Tab::Numbers) {
            let keys = tab.keys();
            let ends_with_delete = matches!(
                keys.last(),
                Some(MathKey::Action { action: KeyAction::Delete, .. })
            );
            assert!(ends_with_delete, "{} should end with delete", tab.name());
        }
        // The numbers tab carries its delete key in the first row instead
        assert!(matches!(Tab::Numbers.keys()[4], MathKey::Action { action: KeyAction::Delete, .. }));
    }

    #[test]
    fn test_tab_names_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_name(tab.name()), Some(tab));
        }
        assert_eq!(Tab::from_name("Physics"), None);
    }

    #[test]
    fn test_tab_sizes() {
        assert_eq!(Tab::Numbers.keys().len(), 25);
        assert_eq!(Tab::Letters.keys().len(), 36);
        assert_eq!(Tab::Greek.keys().len(), 22);
    }
}
