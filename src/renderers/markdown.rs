//! Tutor response segmentation
//!
//! Splits the model's markdown-with-LaTeX answer into blocks and inline
//! spans. JavaScript turns these into DOM nodes and hands math spans to KaTeX.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MATH_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\$\$.+?\$\$|\$.+?\$").expect("math span pattern is valid"));

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__MATH_BLOCK_(\d+)__").expect("placeholder pattern is valid"));

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*.*?\*\*").expect("bold pattern is valid"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("word pattern is valid"));

/// Inline piece of a line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Bold { text: String },
    /// `$...$` (inline) or `$$...$$` (display) with delimiters removed
    Math { latex: String, display: bool },
    /// Plain text containing backslashes; rendered as inline math when it parses
    LooseLatex { text: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Bullet { content: Vec<Inline> },
    /// A line holding nothing but one math span
    MathLine { content: Vec<Inline> },
    Paragraph { content: Vec<Inline> },
    Blank,
}

/// Segment a tutor answer into renderable blocks
pub fn segment_response(content: &str) -> Vec<Block> {
    if content.is_empty() {
        return Vec::new();
    }

    let promoted = content.lines().map(promote_math_line).collect::<Vec<_>>().join("\n");

    let mut math_spans: Vec<String> = Vec::new();
    let protected = MATH_SPAN.replace_all(&promoted, |caps: &regex::Captures| {
        math_spans.push(caps[0].to_string());
        format!("__MATH_BLOCK_{}__", math_spans.len() - 1)
    });

    protected.split('\n').map(|line| classify_line(line, &math_spans)).collect()
}

/// Lines that look like bare equations become display math
fn promote_math_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with('\\') {
        return format!("$$ {} $$", trimmed);
    }
    if trimmed.contains('=') && !WORD.is_match(trimmed) && !trimmed.contains('$') {
        return format!("$$ {} $$", trimmed);
    }
    line.to_string()
}

fn classify_line(line: &str, math_spans: &[String]) -> Block {
    for (prefix, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if line.starts_with(prefix) {
            let rest = line.replacen(prefix, "", 1);
            return Block::Heading { level, content: inline_spans(&rest, math_spans) };
        }
    }

    let trimmed = line.trim();
    if PLACEHOLDER.find(trimmed).is_some_and(|m| m.start() == 0 && m.end() == trimmed.len()) {
        return Block::MathLine { content: inline_spans(trimmed, math_spans) };
    }

    if let Some(rest) = trimmed.strip_prefix("* ").or_else(|| trimmed.strip_prefix("- ")) {
        return Block::Bullet { content: inline_spans(rest, math_spans) };
    }

    if trimmed.is_empty() {
        return Block::Blank;
    }

    Block::Paragraph { content: inline_spans(line, math_spans) }
}

fn inline_spans(text: &str, math_spans: &[String]) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        push_text_spans(&text[last..whole.start], &mut spans);

        let block = caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| math_spans.get(index));
        match block {
            Some(block) => spans.push(math_inline(block)),
            None => spans.push(Inline::Text { text: caps[0].to_string() }),
        }
        last = whole.end;
    }
    push_text_spans(&text[last..], &mut spans);

    spans
}

fn math_inline(block: &str) -> Inline {
    let display = block.starts_with("$$");
    let delimiter = if display { "$$" } else { "$" };

    let inner = block
        .strip_prefix(delimiter)
        .and_then(|s| s.strip_suffix(delimiter))
        .unwrap_or(block);
    let inner = inner.strip_prefix(|c: char| c.is_whitespace()).unwrap_or(inner);
    let inner = inner.strip_suffix(|c: char| c.is_whitespace()).unwrap_or(inner);

    Inline::Math { latex: inner.to_string(), display }
}

fn push_text_spans(text: &str, spans: &mut Vec<Inline>) {
    let mut last = 0;
    for bold in BOLD.find_iter(text) {
        push_plain(&text[last..bold.start()], spans);
        let inner = &text[bold.start() + 2..bold.end() - 2];
        spans.push(Inline::Bold { text: inner.to_string() });
        last = bold.end();
    }
    push_plain(&text[last..], spans);
}

fn push_plain(text: &str, spans: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    if text.contains('\\') {
        spans.push(Inline::LooseLatex { text: text.to_string() });
    } else {
        spans.push(Inline::Text { text: text.to_string() });
    }
}
