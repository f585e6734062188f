//! Shape checks over JSON values.

use serde_json::Value;

/// Returns true if the value is a plain key-value object.
///
/// Arrays, `null` and every primitive are rejected.
///
/// # Examples
///
/// ```rust
/// use deepget::value::is_plain_object;
/// use serde_json::json;
/// assert!(is_plain_object(&json!({ "a": 1 })));
/// assert!(!is_plain_object(&json!([1, 2])));
/// assert!(!is_plain_object(&json!(null)));
/// ```
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns the type name of the value as a string.
///
/// # Examples
///
/// ```rust
/// use deepget::value::type_name;
/// use serde_json::json;
/// assert_eq!(type_name(&json!("hi")), "String");
/// assert_eq!(type_name(&json!([])), "Array");
/// ```
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_objects_are_plain() {
        assert!(is_plain_object(&json!({})));
        assert!(is_plain_object(&json!({ "nested": { "x": [1] } })));

        for value in [
            json!(null),
            json!(true),
            json!(0),
            json!(1.5),
            json!(""),
            json!("object"),
            json!([]),
            json!([{}]),
        ] {
            assert!(!is_plain_object(&value), "{value} should not be plain");
        }
    }

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(type_name(&json!(null)), "Null");
        assert_eq!(type_name(&json!(false)), "Bool");
        assert_eq!(type_name(&json!(3)), "Number");
        assert_eq!(type_name(&json!("s")), "String");
        assert_eq!(type_name(&json!([1])), "Array");
        assert_eq!(type_name(&json!({})), "Object");
    }
}
