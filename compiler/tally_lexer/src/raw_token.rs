//! Raw token definitions for the logos scanner.

use logos::Logos;

/// Raw token from logos (before cooking literals).
///
/// No whitespace skip: preprocessing already removed every whitespace
/// character outside string literals, so stray whitespace is a lex error
/// by construction.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    // The negated class deliberately admits raw newlines and tabs: escape
    // rewriting happens before preprocessing, so cooked control characters
    // can sit inside a literal.
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}
