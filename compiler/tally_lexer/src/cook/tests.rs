use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("lex failed on {source:?}: {err}"),
    }
}

#[test]
fn test_lex_numbers() {
    assert_eq!(kinds("42"), vec![TokenKind::Number(42.0)]);
    assert_eq!(kinds("3.14"), vec![TokenKind::Number(3.14)]);
    assert_eq!(kinds("2.5e-8"), vec![TokenKind::Number(2.5e-8)]);
    assert_eq!(kinds("1e4"), vec![TokenKind::Number(1e4)]);
}

#[test]
fn test_lex_operators() {
    assert_eq!(
        kinds("1+2*3"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Plus,
            TokenKind::Number(2.0),
            TokenKind::Star,
            TokenKind::Number(3.0),
        ]
    );
}

#[test]
fn test_lex_call_shape() {
    assert_eq!(
        kinds("max(1,2)"),
        vec![
            TokenKind::Ident("max".to_string()),
            TokenKind::LParen,
            TokenKind::Number(1.0),
            TokenKind::Comma,
            TokenKind::Number(2.0),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_lex_string_with_escapes() {
    assert_eq!(
        kinds(r#""a\"b\\c""#),
        vec![TokenKind::Str("a\"b\\c".to_string())]
    );
}

#[test]
fn test_lex_string_with_raw_newline() {
    // Escape rewriting happens before preprocessing, so a literal can
    // carry a cooked newline by the time it reaches the lexer.
    assert_eq!(kinds("\"a\nb\""), vec![TokenKind::Str("a\nb".to_string())]);
}

#[test]
fn test_lex_backslash_escapes_cook() {
    assert_eq!(kinds(r#""a\nb""#), vec![TokenKind::Str("a\nb".to_string())]);
    assert_eq!(kinds(r#""a\tb""#), vec![TokenKind::Str("a\tb".to_string())]);
}

#[test]
fn test_lex_rejects_whitespace() {
    // Preprocessing owns whitespace; the tokenizer refuses it.
    assert!(lex("1 +2").is_err());
}

#[test]
fn test_lex_rejects_unknown_characters() {
    assert!(lex("1$2").is_err());
    assert!(lex("a&b").is_err());
}

#[test]
fn test_spans_cover_slices() {
    let tokens = match lex("12+count") {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}"),
    };
    assert_eq!(tokens[0].span, tally_ir::Span::new(0, 2));
    assert_eq!(tokens[1].span, tally_ir::Span::new(2, 3));
    assert_eq!(tokens[2].span, tally_ir::Span::new(3, 8));
}
