//! Atomic command tokens
//!
//! A token is a backslash, one or more ASCII letters, and an optional single
//! opening bracket (`{`, `(` or `[`): `\pi`, `\sqrt{`, `\sin(`. Cursor movement
//! and deletion treat a token as one unit; every other character is its own unit.

use super::cursor::TextRange;

/// How far back (in characters) a token start is searched for.
///
/// Commands longer than this degrade to character-by-character deletion.
pub const LOOKBACK_WINDOW: usize = 15;

/// Characters that may close off a token.
pub fn is_token_opener(c: char) -> bool {
    matches!(c, '{' | '(' | '[')
}

/// Check whether `chars` is exactly one token (no leading or trailing extra).
pub fn is_exact_token(chars: &[char]) -> bool {
    let Some(('\\', rest)) = chars.split_first() else {
        return false;
    };

    let body = match rest.split_last() {
        Some((last, body)) if is_token_opener(*last) => body,
        _ => rest,
    };

    !body.is_empty() && body.iter().all(|c| c.is_ascii_alphabetic())
}

/// Greedy token length starting at `start`, if a token starts there
pub fn token_len_at(chars: &[char], start: usize) -> Option<usize> {
    if chars.get(start) != Some(&'\\') {
        return None;
    }

    let mut end = start + 1;
    while end < chars.len() && chars[end].is_ascii_alphabetic() {
        end += 1;
    }
    if end == start + 1 {
        return None;
    }
    if end < chars.len() && is_token_opener(chars[end]) {
        end += 1;
    }

    Some(end - start)
}

/// Length of the token ending exactly at `end`.
///
/// Only starts within [`LOOKBACK_WINDOW`] characters of `end` are considered;
/// the closest matching backslash wins.
pub fn token_len_before(chars: &[char], end: usize) -> Option<usize> {
    let end = end.min(chars.len());
    let floor = end.saturating_sub(LOOKBACK_WINDOW);

    (floor..end)
        .rev()
        .find(|&i| chars[i] == '\\' && is_exact_token(&chars[i..end]))
        .map(|i| end - i)
}

/// One navigation unit produced by [`units`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub range: TextRange,
    pub atomic: bool,
}

/// Split text into navigation units, left to right.
pub fn units(chars: &[char]) -> Vec<Unit> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match token_len_at(chars, i) {
            Some(len) => {
                out.push(Unit { range: TextRange::new(i, i + len), atomic: true });
                i += len;
            }
            None => {
                out.push(Unit { range: TextRange::single_char(i), atomic: false });
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_exact_token_shapes() {
        assert!(is_exact_token(&chars("\\pi")));
        assert!(is_exact_token(&chars("\\sqrt{")));
        assert!(is_exact_token(&chars("\\sin(")));
        assert!(is_exact_token(&chars("\\sqrt[")));
        assert!(!is_exact_token(&chars("\\")));
        assert!(!is_exact_token(&chars("\\{")));
        assert!(!is_exact_token(&chars("\\sqrt{2")));
        assert!(!is_exact_token(&chars("sqrt{")));
    }

    #[test]
    fn test_token_len_at_is_greedy() {
        let text = chars("\\sqrt{9}");
        assert_eq!(token_len_at(&text, 0), Some(6));
        assert_eq!(token_len_at(&text, 1), None);

        // Only one opener is absorbed
        let text = chars("\\sin((");
        assert_eq!(token_len_at(&text, 0), Some(5));
    }

    #[test]
    fn test_token_len_before() {
        let text = chars("2\\times\\pi");
        assert_eq!(token_len_before(&text, text.len()), Some(3));
        assert_eq!(token_len_before(&text, 7), Some(6));
        assert_eq!(token_len_before(&text, 1), None);
    }

    #[test]
    fn test_lookback_window_limit() {
        // 14 letters + backslash = 15 characters: still atomic
        let text = chars("\\abcdefghijklmn");
        assert_eq!(token_len_before(&text, text.len()), Some(15));

        // One more letter falls outside the window
        let text = chars("\\abcdefghijklmno");
        assert_eq!(token_len_before(&text, text.len()), None);
    }

    #[test]
    fn test_units_mix_tokens_and_chars() {
        let text = chars("1+\\sqrt{4}");
        let units = units(&text);
        assert_eq!(units.len(), 5);
        assert!(units[2].atomic);
        assert_eq!(units[2].range, TextRange::new(2, 8));
        assert!(!units[3].atomic);
    }
}
