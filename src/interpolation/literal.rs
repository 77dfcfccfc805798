use std::fmt::Write;

use crate::types::BindValue;

/// Render one bind value as SQL literal text.
///
/// `quote` only ever sees text destined for a single-quoted literal; the surrounding quotes
/// are added here.
#[must_use]
pub fn render_literal<Q>(value: &BindValue, quote: &Q) -> String
where
    Q: Fn(&str) -> String + ?Sized,
{
    let mut buf = String::new();
    push_literal(&mut buf, value, quote);
    buf
}

pub(super) fn push_literal<Q>(buf: &mut String, value: &BindValue, quote: &Q)
where
    Q: Fn(&str) -> String + ?Sized,
{
    match value {
        BindValue::Null => buf.push_str("NULL"),
        BindValue::Int(i) => {
            let _ = write!(buf, "{i}");
        }
        BindValue::Float(f) => push_float(buf, *f),
        BindValue::Text(s) => push_quoted(buf, s, quote),
        BindValue::Other(_) => push_literal(buf, &value.canonicalize(), quote),
    }
}

fn push_quoted<Q>(buf: &mut String, text: &str, quote: &Q)
where
    Q: Fn(&str) -> String + ?Sized,
{
    buf.push('\'');
    buf.push_str(&quote(text));
    buf.push('\'');
}

// `{:?}` keeps a fractional part or exponent, so the literal stays a float in SQL.
fn push_float(buf: &mut String, f: f64) {
    if f.is_nan() {
        buf.push_str("'NaN'");
    } else if f.is_infinite() {
        buf.push_str(if f > 0.0 { "'Infinity'" } else { "'-Infinity'" });
    } else {
        let _ = write!(buf, "{f:?}");
    }
}

/// ANSI quoting: a single quote is escaped by doubling it.
#[must_use]
pub fn quote_standard(text: &str) -> String {
    text.replace('\'', "''")
}

/// MySQL-style quoting: backslash escapes for quotes, backslashes and control bytes.
///
/// Read its output back with `EscapeStyle::Backslash`.
#[must_use]
pub fn quote_backslash(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{1a}' => out.push_str("\\Z"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OtherValue;
    use chrono::NaiveDate;

    fn identity(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn numbers_are_unquoted() {
        assert_eq!(render_literal(&BindValue::Int(-42), &identity), "-42");
        assert_eq!(render_literal(&BindValue::Float(1.5), &identity), "1.5");
        assert_eq!(render_literal(&BindValue::Float(2.0), &identity), "2.0");
        assert_eq!(render_literal(&BindValue::Float(1e300), &identity), "1e300");
    }

    #[test]
    fn non_finite_floats_use_sentinels() {
        assert_eq!(
            render_literal(&BindValue::Float(f64::INFINITY), &identity),
            "'Infinity'"
        );
        assert_eq!(
            render_literal(&BindValue::Float(f64::NEG_INFINITY), &identity),
            "'-Infinity'"
        );
        assert_eq!(render_literal(&BindValue::Float(f64::NAN), &identity), "'NaN'");
    }

    #[test]
    fn text_goes_through_quote_fn() {
        let value = BindValue::Text("it's".into());
        assert_eq!(render_literal(&value, &quote_standard), "'it''s'");
        assert_eq!(render_literal(&value, &quote_backslash), "'it\\'s'");
    }

    #[test]
    fn other_values_render_as_text() {
        let date = NaiveDate::from_ymd_opt(2012, 9, 22).unwrap();
        assert_eq!(
            render_literal(&BindValue::Other(OtherValue::Date(date)), &identity),
            "'2012-09-22'"
        );
        assert_eq!(
            render_literal(&BindValue::Other(OtherValue::Bool(false)), &identity),
            "'false'"
        );
    }

    #[test]
    fn other_values_render_like_their_canonical_text() {
        let value = BindValue::from(serde_json::json!({"a": "it's"}));
        let canonical = value.canonicalize();
        assert_eq!(*canonical, BindValue::Text(r#"{"a":"it's"}"#.to_string()));
        assert_eq!(
            render_literal(&value, &quote_standard),
            render_literal(&canonical, &quote_standard)
        );
        assert!(matches!(
            BindValue::Int(3).canonicalize(),
            std::borrow::Cow::Borrowed(BindValue::Int(3))
        ));
    }

    #[test]
    fn backslash_quoting_escapes_control_bytes() {
        assert_eq!(quote_backslash("a\\b\n\0\u{1a}\""), "a\\\\b\\n\\0\\Z\\\"");
    }
}
