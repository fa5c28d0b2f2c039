//! String conversion for field values.

use serde_json::{Number, Value};

/// Convert a field value into the text that gets tokenized.
///
/// - strings are used as-is
/// - numbers and booleans use their JSON spelling
/// - arrays join their elements' text with `,`, with `null` and nested
///   objects contributing an empty element
/// - `null` and objects have no text form and return `None`
///
/// ```
/// use scour::document::value::value_text;
/// use serde_json::json;
///
/// assert_eq!(value_text(&json!("Hello")), Some("Hello".to_string()));
/// assert_eq!(value_text(&json!(42)), Some("42".to_string()));
/// assert_eq!(value_text(&json!(["a", 1, true])), Some("a,1,true".to_string()));
/// assert_eq!(value_text(&json!(null)), None);
/// assert_eq!(value_text(&json!({ "k": "v" })), None);
/// ```
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number_text(number)),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| value_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

/// Spell a number the way it reads, without a trailing `.0`.
///
/// Floats with no fractional part that fit in an `i64` are written as
/// integers, so `2.0` and `2` produce the same token and the same id.
pub fn number_text(number: &Number) -> String {
    if let Some(float) = number.as_f64().filter(|_| number.is_f64()) {
        if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
            return (float as i64).to_string();
        }
    }
    number.to_string()
}

/// Convert a value into an identifier string.
///
/// Only scalars qualify: strings, numbers and booleans. Arrays, objects and
/// `null` have no stable identity and return `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number_text(number)),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_arrays() {
        assert_eq!(
            value_text(&json!(["a", ["b", "c"], null])),
            Some("a,b,c,".to_string())
        );
        assert_eq!(value_text(&json!([])), Some(String::new()));
    }

    #[test]
    fn test_float_text() {
        assert_eq!(value_text(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(value_text(&json!(-0.25)), Some("-0.25".to_string()));
    }

    #[test]
    fn test_integral_floats_read_as_integers() {
        assert_eq!(value_text(&json!(2.0)), Some("2".to_string()));
        assert_eq!(value_text(&json!(-3.0)), Some("-3".to_string()));
        assert_eq!(value_text(&json!([1.0, 2.5])), Some("1,2.5".to_string()));
        assert_eq!(scalar_text(&json!(1.0)), Some("1".to_string()));
        assert_eq!(scalar_text(&json!(1)), scalar_text(&json!(1.0)));
        assert_eq!(scalar_text(&json!(u64::MAX)), Some(u64::MAX.to_string()));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("id-1")), Some("id-1".to_string()));
        assert_eq!(scalar_text(&json!(3)), Some("3".to_string()));
        assert_eq!(scalar_text(&json!(false)), Some("false".to_string()));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!([1])), None);
    }
}
