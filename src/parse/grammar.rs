//! Recursive descent parser with production rules
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('+' | '-') unary | power
//! power      := postfix ('^' unary)?
//! postfix    := primary '!'*
//! primary    := number | constant | function '(' expression ')' | '(' expression ')'
//! ```
//!
//! Power is right associative and binds tighter than a leading minus, so
//! `-2^2` is `-4` and `2^-1` is `0.5`.

use super::errors::{ParseError, ParseResult};
use super::tokens::{tokenize, Token, TokenKind};
use crate::models::{BinaryOp, Expr, UnaryOp};

/// Parse an expression (entry point)
///
/// Input that visibly stops mid-way (`3+`, `sin(`) is rejected as
/// [`ParseError::Incomplete`] before any parsing is attempted.
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;

    match tokens.last() {
        None => return Err(ParseError::Empty),
        Some(last) if last.kind.expects_more() => return Err(ParseError::Incomplete),
        Some(_) => {}
    }

    let mut parser = Parser::new(&tokens);
    let expr = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(unexpected(token));
    }

    log::trace!("parsed '{}' -> {:?}", source, expr);
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(token)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    // ========================================================================
    // Production Rules
    // ========================================================================

    fn expression(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.term()?;

        while let Some(op) = self.peek_kind().and_then(additive_op) {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.unary()?;

        while let Some(op) = self.peek_kind().and_then(multiplicative_op) {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek_kind() {
            Some(TokenKind::Plus) => UnaryOp::Plus,
            Some(TokenKind::Minus) => UnaryOp::Minus,
            _ => return self.power(),
        };
        self.pos += 1;

        let operand = self.unary()?;
        Ok(Expr::unary(op, operand))
    }

    fn power(&mut self) -> ParseResult<Expr> {
        let base = self.postfix()?;

        if self.peek_kind() == Some(TokenKind::Caret) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }

        Ok(base)
    }

    fn postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while self.peek_kind() == Some(TokenKind::Bang) {
            self.pos += 1;
            expr = Expr::Factorial(Box::new(expr));
        }

        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Constant(constant) => Ok(Expr::Constant(constant)),
            TokenKind::Function(function) => {
                self.expect(TokenKind::LParen)?;
                let arg = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::call(function, arg))
            }
            TokenKind::LParen => {
                let inner = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(unexpected(token)),
        }
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        _ => None,
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.describe(),
        position: token.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constant, Function};

    #[test]
    fn test_precedence() {
        let expr = parse("1+2*3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Add,
                Expr::Number(1.0),
                Expr::binary(BinaryOp::Mul, Expr::Number(2.0), Expr::Number(3.0)),
            )
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse("2^3^2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Pow,
                Expr::Number(2.0),
                Expr::binary(BinaryOp::Pow, Expr::Number(3.0), Expr::Number(2.0)),
            )
        );
    }

    #[test]
    fn test_unary_minus_binds_looser_than_power() {
        let expr = parse("-2^2").unwrap();
        assert_eq!(
            expr,
            Expr::unary(
                UnaryOp::Minus,
                Expr::binary(BinaryOp::Pow, Expr::Number(2.0), Expr::Number(2.0)),
            )
        );
    }

    #[test]
    fn test_factorial_postfix() {
        assert_eq!(parse("5!").unwrap(), Expr::Factorial(Box::new(Expr::Number(5.0))));

        let expr = parse("(2+3)!").unwrap();
        assert!(matches!(expr, Expr::Factorial(_)));
    }

    #[test]
    fn test_function_call() {
        let expr = parse("sin(π)").unwrap();
        assert_eq!(expr, Expr::call(Function::Sin, Expr::Constant(Constant::Pi)));
    }

    #[test]
    fn test_incomplete_input() {
        assert_eq!(parse("3+"), Err(ParseError::Incomplete));
        assert_eq!(parse("sin("), Err(ParseError::Incomplete));
        assert_eq!(parse("2^"), Err(ParseError::Incomplete));
        assert_eq!(parse("4."), Err(ParseError::Incomplete));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(parse("(2+3"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(parse("2 3"), Err(ParseError::UnexpectedToken { position: 2, .. })));
        assert!(matches!(parse("√9"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("*2"), Err(ParseError::UnexpectedToken { position: 0, .. })));
    }
}
