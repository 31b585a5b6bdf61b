//! Ordered text-rewriting passes over one statement.
//!
//! Pass order is normative:
//!
//! 1. whitespace removal outside string literals
//! 2. `time(<field>)` substitution from the invocation's clock snapshot
//! 3. the `joint` alias becomes `+`
//! 4. variable substitution, longest name first
//! 5. `!^` root-operator normalization to `^(1/n)` form
//!
//! followed by a parenthesis-balance check. Function words (`sqrt`, `max`,
//! `len`, ...) are NOT rewritten here — the parser treats `name(args)` as a
//! call production — but they are reserved: pass 4 skips them, so a
//! variable sharing a function's name is shadowed by the function, not the
//! other way around.

use rustc_hash::FxHashMap;
use tally_diagnostic::PreprocessError;
use tally_ir::{TimeFacts, Value};

/// Names the variable-substitution pass never rewrites.
///
/// The fixed function library plus the `time` and `joint` keywords. An
/// assignment to one of these still lands in the environment; it is just
/// unreachable from call position.
pub const RESERVED_WORDS: [&str; 18] = [
    "sqrt", "log", "abs", "round", "floor", "ceil", "min", "max", "sin", "cos", "tan", "len",
    "upper", "lower", "clamp", "rand", "time", "joint",
];

/// Rewrite one statement into parser-ready text.
pub fn preprocess(
    source: &str,
    vars: &FxHashMap<String, Value>,
    time: &TimeFacts,
) -> Result<String, PreprocessError> {
    let text = strip_whitespace(source)?;
    let text = substitute_time(&text, time)?;
    // Whitespace is already gone, so `1 joint 2` arrives as `1joint2`:
    // only letters block the alias, digits are its operands.
    let text = substitute_word(&text, "joint", "+", is_letter_byte)?;
    let text = substitute_vars(&text, vars)?;
    let text = normalize_roots(&text)?;
    check_parens(&text)?;
    tracing::trace!(normalized = %text, "preprocessed statement");
    Ok(text)
}

/// Whether `name` is a valid variable identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_letter_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Per-byte mask of the text: `true` for bytes inside a string literal
/// (quotes included). Honors `\"` escapes. The single source of truth for
/// "is this region opaque to rewriting".
fn string_mask(text: &str) -> Result<Vec<bool>, PreprocessError> {
    let bytes = text.as_bytes();
    let mut mask = vec![false; bytes.len()];
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'"' {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        loop {
            if i >= bytes.len() {
                return Err(PreprocessError::UnterminatedString);
            }
            match bytes[i] {
                b'\\' => i += 2,
                b'"' => {
                    i += 1;
                    break;
                }
                _ => i += 1,
            }
        }
        mask[start..i].fill(true);
    }
    Ok(mask)
}

/// First unmasked occurrence of `needle` at or after `from`.
fn find_from(bytes: &[u8], mask: &[bool], needle: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + needle.len() <= bytes.len() {
        if !mask[i] && bytes[i..].starts_with(needle) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Pass 1: drop whitespace outside string literals.
fn strip_whitespace(source: &str) -> Result<String, PreprocessError> {
    let mask = string_mask(source)?;
    let mut out = String::with_capacity(source.len());
    for (idx, ch) in source.char_indices() {
        if ch.is_whitespace() && !mask[idx] {
            continue;
        }
        out.push(ch);
    }
    Ok(out)
}

/// Pass 2: replace every `time(<field>)` with the captured field value.
fn substitute_time(text: &str, time: &TimeFacts) -> Result<String, PreprocessError> {
    let mut current = text.to_string();
    let mut from = 0;
    loop {
        let mask = string_mask(&current)?;
        let bytes = current.as_bytes();
        let Some(idx) = find_from(bytes, &mask, b"time(", from) else {
            return Ok(current);
        };
        // Part of a longer identifier like `xtime(` — not a time reference.
        if idx > 0 && is_ident_byte(bytes[idx - 1]) {
            from = idx + 1;
            continue;
        }
        let open = idx + 4;
        let close = bytes[open + 1..]
            .iter()
            .position(|&b| b == b')')
            .map(|off| open + 1 + off)
            .ok_or(PreprocessError::UnterminatedTimeRef)?;
        let field = &current[open + 1..close];
        let value = time
            .field(field)
            .ok_or_else(|| PreprocessError::UnknownTimeField(field.to_string()))?;
        current.replace_range(idx..=close, &value.to_string());
        from = idx;
    }
}

/// Replace whole-word occurrences of `word` outside string literals.
///
/// An occurrence only qualifies when neither neighbor matches `blocks`.
/// Variable substitution blocks on any identifier byte so a name never
/// matches inside a longer identifier or against the digits of a numeric
/// literal; the `joint` alias blocks only on letters.
fn substitute_word(
    text: &str,
    word: &str,
    replacement: &str,
    blocks: fn(u8) -> bool,
) -> Result<String, PreprocessError> {
    let mut current = text.to_string();
    let mut from = 0;
    loop {
        // Re-mask every round: a substituted value may itself introduce a
        // string literal that later rounds must treat as opaque.
        let mask = string_mask(&current)?;
        let bytes = current.as_bytes();
        let Some(idx) = find_from(bytes, &mask, word.as_bytes(), from) else {
            return Ok(current);
        };
        let end = idx + word.len();
        let before_ok = idx == 0 || !blocks(bytes[idx - 1]);
        let after_ok = end >= bytes.len() || !blocks(bytes[end]);
        if !(before_ok && after_ok) {
            from = idx + 1;
            continue;
        }
        current.replace_range(idx..end, replacement);
        from = idx + replacement.len();
    }
}

/// Pass 4: substitute environment entries, longest name first.
fn substitute_vars(
    text: &str,
    vars: &FxHashMap<String, Value>,
) -> Result<String, PreprocessError> {
    let mut names: Vec<&String> = vars
        .keys()
        .filter(|name| is_identifier(name) && !RESERVED_WORDS.contains(&name.as_str()))
        .collect();
    // Longest first so no shorter name can partially match inside a longer
    // one; lexicographic tiebreak keeps the pass deterministic.
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut current = text.to_string();
    for name in names {
        let Some(value) = vars.get(name.as_str()) else {
            continue;
        };
        current = substitute_word(&current, name, &render_value(value), is_ident_byte)?;
    }
    Ok(current)
}

/// Render a value as source text a later pass can re-read.
///
/// Numbers use the shortest round-tripping form; text becomes a quoted
/// literal with `"` and `\` escaped.
fn render_value(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("{n}"),
        Value::Text(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for ch in s.chars() {
                match ch {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    _ => out.push(ch),
                }
            }
            out.push('"');
            out
        }
    }
}

/// Pass 5: rewrite `a!^b` root chains to explicit reciprocal exponents.
///
/// `a!^b` means the b-th root of a. A chain `a!^b!^c` associates left to
/// right: `((a^(1/b))^(1/c))`. Operands must be bare numeric literals; a
/// `!^` against anything else is an error rather than a silent misparse.
fn normalize_roots(text: &str) -> Result<String, PreprocessError> {
    let mut current = text.to_string();
    loop {
        let mask = string_mask(&current)?;
        let bytes = current.as_bytes();
        let Some(idx) = find_from(bytes, &mask, b"!^", 0) else {
            return Ok(current);
        };
        let start =
            number_start_before(bytes, idx).ok_or(PreprocessError::RootOperand { at: idx })?;

        let mut degrees: Vec<String> = Vec::new();
        let mut pos = idx;
        while bytes[pos..].starts_with(b"!^") {
            let end = number_end_from(bytes, pos + 2)
                .ok_or(PreprocessError::RootOperand { at: pos })?;
            degrees.push(current[pos + 2..end].to_string());
            pos = end;
        }

        let mut rewritten = current[start..idx].to_string();
        for degree in &degrees {
            rewritten = format!("({rewritten}^(1/{degree}))");
        }
        current.replace_range(start..pos, &rewritten);
    }
}

/// Forward scan of a numeric literal (`digits [. digits] [e[+-]digits]`)
/// starting at `from`. Returns the exclusive end, or `None` if `from` does
/// not start a literal.
fn number_end_from(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len()
        && bytes[i] == b'.'
        && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
    {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    Some(i)
}

/// Backward scan of a numeric literal ending exactly at `end` (exclusive).
/// Handles exponent forms (`1e3`, `2e+10`) so they are consumed whole.
fn number_start_before(bytes: &[u8], end: usize) -> Option<usize> {
    let mut s = end;
    while s > 0 && (bytes[s - 1].is_ascii_digit() || bytes[s - 1] == b'.') {
        s -= 1;
    }
    if s == end {
        return None;
    }
    // Absorb an exponent marker so `1e3!^2` roots 1e3, not the bare 3.
    if s >= 2 && (bytes[s - 1] == b'e' || bytes[s - 1] == b'E') && bytes[s - 2].is_ascii_digit() {
        s -= 1;
        while s > 0 && (bytes[s - 1].is_ascii_digit() || bytes[s - 1] == b'.') {
            s -= 1;
        }
    } else if s >= 3
        && (bytes[s - 1] == b'+' || bytes[s - 1] == b'-')
        && (bytes[s - 2] == b'e' || bytes[s - 2] == b'E')
        && bytes[s - 3].is_ascii_digit()
    {
        s -= 2;
        while s > 0 && (bytes[s - 1].is_ascii_digit() || bytes[s - 1] == b'.') {
            s -= 1;
        }
    }
    // A literal must begin with a digit.
    while s < end && bytes[s] == b'.' {
        s += 1;
    }
    if s == end || !bytes[s].is_ascii_digit() {
        return None;
    }
    Some(s)
}

/// Final check: substitution must leave parenthesis counts consistent.
fn check_parens(text: &str) -> Result<(), PreprocessError> {
    let mask = string_mask(text)?;
    let mut open = 0usize;
    let mut close = 0usize;
    for (i, &b) in text.as_bytes().iter().enumerate() {
        if mask[i] {
            continue;
        }
        match b {
            b'(' => open += 1,
            b')' => close += 1,
            _ => {}
        }
    }
    if open == close {
        Ok(())
    } else {
        Err(PreprocessError::UnbalancedParens { open, close })
    }
}
