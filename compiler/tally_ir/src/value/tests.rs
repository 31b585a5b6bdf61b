use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_integral_number() {
    assert_eq!(Value::Number(5.0).to_string(), "5");
    assert_eq!(Value::Number(-3.0).to_string(), "-3");
}

#[test]
fn test_display_fractional_number() {
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
}

#[test]
fn test_display_text_is_verbatim() {
    assert_eq!(Value::text("hi there").to_string(), "hi there");
}

#[test]
fn test_type_name() {
    assert_eq!(Value::Number(0.0).type_name(), "number");
    assert_eq!(Value::text("").type_name(), "text");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Number(7.0).as_number(), Some(7.0));
    assert_eq!(Value::Number(7.0).as_text(), None);
    assert_eq!(Value::text("x").as_text(), Some("x"));
    assert_eq!(Value::text("x").as_number(), None);
}
