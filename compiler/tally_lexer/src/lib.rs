//! Preprocessor and tokenizer for Tally.
//!
//! A statement goes through two stages here before it reaches the parser:
//!
//! 1. [`preprocess`] — the ordered text-rewriting passes: whitespace
//!    stripping outside string literals, `time(<field>)` substitution, the
//!    `joint` alias, longest-first variable substitution, and `!^` root
//!    normalization. The order is load-bearing; each pass assumes the
//!    earlier ones already ran.
//! 2. [`lex`] — a logos scan of the normalized text into [`Token`]s.
//!
//! String literals are opaque to every rewriting pass: nothing inside
//! double quotes is ever stripped or substituted.

mod cook;
mod preprocess;
mod raw_token;

pub use cook::lex;
pub use preprocess::{is_identifier, preprocess, RESERVED_WORDS};

// Re-exported so callers matching on lexer output need one import.
pub use tally_ir::{Token, TokenKind};
