// Token-aware cursor movement and deletion

use math_tutor_wasm::text::{Direction, TextCore, TokenBuffer};
use proptest::prelude::*;

/// Fragments the keyboard can produce
const PIECES: &[&str] = &[
    "1", "2", "7", ".", "+", "-", "*", "/", "(", ")", "{", "}", "^", " ", "π", "\\sqrt{", "\\pi",
    "\\sin(", "\\times", "\\div",
];

/// Cursor positions reachable by arrow keys from the end of `text`
fn stops(text: &str) -> Vec<usize> {
    let mut buffer = TokenBuffer::from_text(text);
    let mut positions = vec![buffer.cursor()];
    while buffer.move_cursor(Direction::Left) {
        positions.push(buffer.cursor());
    }
    positions.reverse();
    positions
}

#[test]
fn test_arrow_keys_skip_whole_tokens() {
    assert_eq!(stops("1+\\sqrt{4}"), vec![0, 1, 2, 8, 9, 10]);
    assert_eq!(stops("\\sin(\\pi)"), vec![0, 5, 8, 9]);
}

#[test]
fn test_delete_token_then_chars() {
    let mut buffer = TokenBuffer::new();
    buffer.insert_at_cursor("2\\times\\sqrt{9");

    assert_eq!(buffer.delete_before_cursor().as_deref(), Some("9"));
    assert_eq!(buffer.delete_before_cursor().as_deref(), Some("\\sqrt{"));
    assert_eq!(buffer.delete_before_cursor().as_deref(), Some("\\times"));
    assert_eq!(buffer.text(), "2");
}

#[test]
fn test_tokens_past_the_lookback_window_delete_one_char() {
    let mut buffer = TokenBuffer::from_text("\\mathrmabcdefghij");
    assert_eq!(buffer.delete_before_cursor().as_deref(), Some("j"));
}

#[test]
fn test_clicks_snap_to_token_start() {
    let mut buffer = TokenBuffer::from_text("3\\times4");
    buffer.set_cursor(4);
    assert_eq!(buffer.cursor(), 1);

    buffer.set_cursor(100);
    assert_eq!(buffer.cursor(), 8);
}

#[test]
fn test_clear() {
    let mut buffer = TokenBuffer::from_text("\\pi+1");
    buffer.clear();
    assert_eq!(buffer.text(), "");
    assert_eq!(buffer.cursor(), 0);
    assert!(!buffer.move_cursor(Direction::Left));
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PIECES), 0..12).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn right_then_left_restores_cursor(text in text_strategy(), pick in any::<prop::sample::Index>()) {
        let positions = stops(&text);
        let start = positions[pick.index(positions.len())];

        let mut buffer = TokenBuffer::from_text(&text);
        buffer.set_cursor(start);
        if buffer.move_cursor(Direction::Right) {
            prop_assert!(buffer.move_cursor(Direction::Left));
        }
        prop_assert_eq!(buffer.cursor(), start);
    }

    #[test]
    fn left_then_right_restores_cursor(text in text_strategy(), pick in any::<prop::sample::Index>()) {
        let positions = stops(&text);
        let start = positions[pick.index(positions.len())];

        let mut buffer = TokenBuffer::from_text(&text);
        buffer.set_cursor(start);
        if buffer.move_cursor(Direction::Left) {
            prop_assert!(buffer.move_cursor(Direction::Right));
        }
        prop_assert_eq!(buffer.cursor(), start);
    }

    #[test]
    fn inserting_sqrt_then_deleting_restores_state(text in text_strategy(), pick in any::<prop::sample::Index>()) {
        let positions = stops(&text);
        let start = positions[pick.index(positions.len())];

        let mut buffer = TokenBuffer::from_text(&text);
        buffer.set_cursor(start);
        buffer.insert_at_cursor("\\sqrt{");
        let removed = buffer.delete_before_cursor();
        prop_assert_eq!(removed.as_deref(), Some("\\sqrt{"));

        prop_assert_eq!(buffer.text(), text);
        prop_assert_eq!(buffer.cursor(), start);
    }

    #[test]
    fn insertion_leaves_cursor_on_a_stop(
        text in text_strategy(),
        pos in 0usize..64,
        piece in prop::sample::select(PIECES)
    ) {
        let mut buffer = TokenBuffer::from_text(&text);
        buffer.set_cursor(pos);
        buffer.insert_at_cursor(piece);

        let cursor = buffer.cursor();
        prop_assert!(stops(&buffer.text()).contains(&cursor));
        if buffer.move_cursor(Direction::Right) {
            prop_assert!(buffer.move_cursor(Direction::Left));
        }
        prop_assert_eq!(buffer.cursor(), cursor);
    }
}
