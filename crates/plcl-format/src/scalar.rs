//! Scalar rendering.
//!
//! The tokenizer knows a single escape, `\"`, so that is the only escape
//! written here. Any other character, backslashes included, is copied as is.

use std::borrow::Cow;

use plcl_tree::Value;

/// Escape a string for quoted output.
///
/// Returns the escaped content (without surrounding quotes).
pub fn escape_quoted(s: &str) -> Cow<'_, str> {
    if !s.contains('"') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('"', "\\\""))
}

/// Render a float so that it reads back as a float.
///
/// Uses the shortest representation that round-trips, adding `.0` when that
/// representation has no decimal point.
pub fn format_float(value: f64) -> String {
    let mut out = value.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Render a value as literal source text.
pub fn format_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Owned(format!("\"{}\"", escape_quoted(s))),
        Value::Integer(i) => Cow::Owned(i.to_string()),
        Value::Float(f) => Cow::Owned(format_float(*f)),
        Value::Boolean(true) => Cow::Borrowed("true"),
        Value::Boolean(false) => Cow::Borrowed("false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_escape_quoted() {
        assert!(matches!(escape_quoted("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_quoted(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_quoted(r"C:\path"), r"C:\path");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-0.25), "-0.25");
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(0.1), "0.1");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Value::from("x")), "\"x\"");
        assert_eq!(format_value(&Value::Integer(-12)), "-12");
        assert_eq!(format_value(&Value::Float(10.0)), "10.0");
        assert_eq!(format_value(&Value::Boolean(false)), "false");
    }
}
