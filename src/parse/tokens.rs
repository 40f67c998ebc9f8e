//! Expression tokenizer
//!
//! Turns buffer text into tokens, folding every accepted notation into one
//! canonical form: `×`, `\times` and `\cdot` are all `Star`, `π` and `\pi`
//! are both the pi constant, `\sqrt{` is a `sqrt` call whose `}` closes it,
//! and `%` is expanded to `/ 100`.

use super::errors::{ParseError, ParseResult};
use crate::models::{Constant, Function};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Constant(Constant),
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Bang,
    LParen,
    RParen,
    /// A decimal point not followed by a digit
    Dot,
}

impl TokenKind {
    /// Binary operators and other tokens that cannot end an expression
    pub fn expects_more(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Caret
                | TokenKind::Dot
                | TokenKind::LParen
        )
    }

    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Constant(c) => format!("constant {:?}", c),
            TokenKind::Function(f) => format!("function {:?}", f),
            other => format!("{:?}", other),
        }
    }
}

/// Token with its source position (character offset and length)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize, length: usize) -> Self {
        Self { kind, position, length }
    }
}

/// Tokenize an expression
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || (c == '.' && next_is_digit(&chars, i)) {
            let (value, len) = scan_number(&chars, i);
            tokens.push(Token::new(TokenKind::Number(value), i, len));
            i += len;
            continue;
        }

        if c == '\\' {
            i = scan_command(&chars, i, &mut tokens)?;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();
            tokens.push(Token::new(identifier(&name)?, start, i - start));
            continue;
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' | '−' => TokenKind::Minus,
            '*' | '×' | '·' => TokenKind::Star,
            '/' | '÷' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '!' => TokenKind::Bang,
            '(' | '{' => TokenKind::LParen,
            ')' | '}' => TokenKind::RParen,
            '.' => TokenKind::Dot,
            'π' => TokenKind::Constant(Constant::Pi),
            '√' => TokenKind::Function(Function::Sqrt),
            '%' => {
                tokens.push(Token::new(TokenKind::Slash, i, 1));
                TokenKind::Number(100.0)
            }
            _ => return Err(ParseError::UnexpectedCharacter { ch: c, position: i }),
        };
        tokens.push(Token::new(kind, i, 1));
        i += 1;
    }

    Ok(tokens)
}

fn next_is_digit(chars: &[char], i: usize) -> bool {
    chars.get(i + 1).is_some_and(|c| c.is_ascii_digit())
}

/// `digits[.digits]` or `.digits`; returns (value, length)
fn scan_number(chars: &[char], start: usize) -> (f64, usize) {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end < chars.len() && chars[end] == '.' && next_is_digit(chars, end) {
        end += 1;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }
    }

    let text: String = chars[start..end].iter().collect();
    // Only ASCII digits and at most one dot were consumed
    let value = text.parse::<f64>().unwrap_or(f64::NAN);
    (value, end - start)
}

/// Plain-word identifiers
fn identifier(name: &str) -> ParseResult<TokenKind> {
    match name {
        "pi" => Ok(TokenKind::Constant(Constant::Pi)),
        "e" => Ok(TokenKind::Constant(Constant::E)),
        _ => Function::from_name(name)
            .map(TokenKind::Function)
            .ok_or_else(|| ParseError::UnknownIdentifier(name.to_string())),
    }
}

/// LaTeX commands; returns the index after the command
fn scan_command(chars: &[char], start: usize, tokens: &mut Vec<Token>) -> ParseResult<usize> {
    let mut end = start + 1;
    while end < chars.len() && chars[end].is_ascii_alphabetic() {
        end += 1;
    }
    let name: String = chars[start + 1..end].iter().collect();
    let len = end - start;

    if name.is_empty() && chars.get(end) == Some(&'%') {
        tokens.push(Token::new(TokenKind::Slash, start, 2));
        tokens.push(Token::new(TokenKind::Number(100.0), start, 2));
        return Ok(end + 1);
    }

    let kind = match name.as_str() {
        "times" | "cdot" => TokenKind::Star,
        "div" => TokenKind::Slash,
        "pi" => TokenKind::Constant(Constant::Pi),
        // Sizing decorators around brackets carry no meaning
        "left" | "right" => return Ok(end),
        "arcsin" => TokenKind::Function(Function::Asin),
        "arccos" => TokenKind::Function(Function::Acos),
        "arctan" => TokenKind::Function(Function::Atan),
        _ => match Function::from_name(&name) {
            Some(function) => {
                // `\sin^{-1}` is the keyboard's spelling of asin
                if let Some(inverse) = function.inverse() {
                    if starts_with(chars, end, "^{-1}") {
                        tokens.push(Token::new(TokenKind::Function(inverse), start, len + 5));
                        return Ok(end + 5);
                    }
                }
                TokenKind::Function(function)
            }
            None => return Err(ParseError::UnknownCommand(name)),
        },
    };

    tokens.push(Token::new(kind, start, len));
    Ok(end)
}

fn starts_with(chars: &[char], at: usize, pattern: &str) -> bool {
    let mut i = at;
    for p in pattern.chars() {
        if chars.get(i) != Some(&p) {
            return false;
        }
        i += 1;
    }
    true
}
