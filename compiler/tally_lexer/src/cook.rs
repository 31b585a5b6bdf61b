//! Raw token cooking: logos output to `Token`s with parsed literals.

use logos::Logos;
use tally_diagnostic::ParseError;
use tally_ir::{Span, Token, TokenKind};

use crate::raw_token::RawToken;

/// Tokenize normalized statement text.
///
/// Expects [`preprocess`](crate::preprocess)ed input; any character outside
/// the surface grammar (including whitespace) is an error.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let raw = result.map_err(|()| ParseError::InvalidToken { span })?;
        let kind = match raw {
            RawToken::Number => {
                let value = lexer
                    .slice()
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidToken { span })?;
                TokenKind::Number(value)
            }
            RawToken::Str => TokenKind::Str(cook_string(lexer.slice())),
            RawToken::Ident => TokenKind::Ident(lexer.slice().to_string()),
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Caret => TokenKind::Caret,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Comma => TokenKind::Comma,
        };
        tokens.push(Token::new(kind, span));
    }

    tracing::trace!(count = tokens.len(), "lexed statement");
    Ok(tokens)
}

/// Strip the surrounding quotes and resolve backslash escapes.
///
/// `\"`, `\\`, `\n`, and `\t` cook to their characters; an unknown escape
/// drops the backslash and keeps the character.
fn cook_string(slice: &str) -> String {
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            // Trailing backslash cannot occur: the token regex requires
            // every backslash to be followed by a character.
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests;
