//! Recursive-descent parser for Tally.
//!
//! Consumes the lexer's tokens and builds an [`Expr`] tree. Precedence,
//! lowest to highest: additive (`+` `-`) < multiplicative (`*` `/` `%`) <
//! exponentiation (`^`, right-associative) < unary minus < primary. Call
//! arguments are full expressions, so nested calls parse naturally.

use tally_diagnostic::ParseError;
use tally_ir::{BinaryOp, Expr, Token, TokenKind, UnaryOp};

/// Parse a token stream into an expression tree.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    tracing::trace!(count = tokens.len(), "parsing statement");
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Lex and parse normalized statement text in one step.
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    parse(tally_lexer::lex(source)?)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Whether the next token matches, without consuming it.
    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == *kind)
    }

    /// Consume the next token if it matches.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next token or fail naming what was required.
    fn expect(&mut self, kind: &TokenKind, what: &'static str) -> Result<(), ParseError> {
        if self.eat(kind) {
            return Ok(());
        }
        Err(match self.peek() {
            Some(token) => ParseError::Expected {
                what,
                found: token.kind.describe(),
                span: token.span,
            },
            None => ParseError::UnexpectedEnd { what },
        })
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.kind.describe(),
                span: token.span,
            }),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive()
    }

    /// `+` and `-`, left-associative.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// `*`, `/`, `%`, left-associative.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_power()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                Some(TokenKind::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_power()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// `^`, right-associative: `2^3^2` is `2^(3^2)`.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_unary()?;
        if self.eat(&TokenKind::Caret) {
            let right = self.parse_power()?;
            return Ok(Expr::binary(BinaryOp::Pow, left, right));
        }
        Ok(left)
    }

    /// Unary minus binds tighter than `^`: `-5^2` is `(-5)^2`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&TokenKind::Minus) {
            let operand = self.parse_unary()?;
            return Ok(Expr::unary(UnaryOp::Neg, operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.advance() else {
            return Err(ParseError::UnexpectedEnd { what: "an expression" });
        };
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Str(text) => Ok(Expr::Text(text)),
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::LParen) {
                    let args = self.parse_args()?;
                    return Ok(Expr::Call { name, args });
                }
                Ok(Expr::Var(name))
            }
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            kind => Err(ParseError::UnexpectedToken {
                found: kind.describe(),
                span: token.span,
            }),
        }
    }

    /// Comma-separated argument list; the `(` is already consumed.
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RParen, "`)` or `,`")?;
            return Ok(args);
        }
    }
}

#[cfg(test)]
mod tests;
