//! Path resolution against a JSON subject.
//!
//! Each segment is a property access on the current value: object keys are
//! looked up by name and array elements by canonical decimal index, exactly as
//! if the index were a property name. Anything else has no members, so the
//! lookup stops there.
//!
//! String and array pseudo-properties such as `length` or a string's
//! character indices are not modelled: `"s.length"` and `"s[0]"` on a string
//! value, and `"list.length"` on an array, all resolve to `None`.

use log::trace;
use serde_json::Value;

use crate::errors::PathError;
use crate::path::Path;
use crate::value::is_plain_object;

/// Resolves `path` against `subject`, returning `None` when any step fails.
///
/// A key that holds `null` resolves to `Some(&Value::Null)` when it is the
/// last segment; stepping past it yields `None`.
///
/// # Examples
///
/// ```rust
/// use deepget::resolve::resolve;
/// use serde_json::json;
/// let subject = json!({ "a": { "b": [10, 20] } });
/// assert_eq!(resolve(&subject, "a.b[1]", "."), Some(&json!(20)));
/// assert_eq!(resolve(&subject, "a.b[2]", "."), None);
/// ```
pub fn resolve<'v>(subject: &'v Value, path: &str, sep: &str) -> Option<&'v Value> {
    if !is_plain_object(subject) {
        trace!("subject is not an object, `{path}` does not resolve");
        return None;
    }
    let Some(parsed) = Path::parse(path, sep) else {
        trace!("blank path does not resolve");
        return None;
    };

    let found = parsed
        .segments()
        .try_fold(subject, |current, segment| member(current, segment));
    if found.is_none() {
        trace!("`{}` does not resolve", parsed.normalized());
    }
    found
}

/// Resolves `path` like [`resolve`], but reports why a lookup failed.
pub fn resolve_strict<'v>(
    subject: &'v Value,
    path: &str,
    sep: &str,
) -> Result<&'v Value, PathError> {
    if !is_plain_object(subject) {
        return Err(PathError::not_an_object(subject));
    }
    let parsed = Path::parse(path, sep).ok_or(PathError::EmptyPath)?;

    let mut current = subject;
    for (segment, span) in parsed.spanned_segments() {
        current = match current {
            Value::Object(_) | Value::Array(_) => member(current, segment)
                .ok_or_else(|| PathError::missing_segment(&parsed, segment, span))?,
            other => return Err(PathError::not_traversable(&parsed, segment, span, other)),
        };
    }
    Ok(current)
}

/// One property access step.
fn member<'v>(current: &'v Value, segment: &str) -> Option<&'v Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Parses a canonical array index: ASCII digits with no sign and no leading
/// zero, so `"01"` and `"+1"` name properties an array does not have.
fn array_index(segment: &str) -> Option<usize> {
    match segment.as_bytes() {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        bytes if bytes.iter().all(u8::is_ascii_digit) => segment.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_indices_only() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("12"), Some(12));
        assert_eq!(array_index(""), None);
        assert_eq!(array_index("01"), None);
        assert_eq!(array_index("+1"), None);
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index("1e2"), None);
        assert_eq!(array_index("length"), None);
        assert_eq!(array_index("99999999999999999999999999"), None);
    }

    #[test]
    fn member_steps_into_objects_and_arrays() {
        let object = json!({ "k": 1, "": 2 });
        assert_eq!(member(&object, "k"), Some(&json!(1)));
        assert_eq!(member(&object, ""), Some(&json!(2)));
        assert_eq!(member(&object, "missing"), None);

        let array = json!(["x", "y"]);
        assert_eq!(member(&array, "1"), Some(&json!("y")));
        assert_eq!(member(&array, "2"), None);
        assert_eq!(member(&array, "01"), None);
    }

    #[test]
    fn primitives_have_no_members() {
        for value in [json!(null), json!(true), json!(3), json!("abc")] {
            assert_eq!(member(&value, "0"), None);
            assert_eq!(member(&value, "length"), None);
        }
    }

    #[test]
    fn empty_segments_look_up_empty_keys() {
        let subject = json!({ "a": { "": { "b": 1 } } });
        assert_eq!(resolve(&subject, "a..b", "."), Some(&json!(1)));
        assert_eq!(resolve(&json!({ "a": 1 }), "a.", "."), None);
    }

    #[test]
    fn leading_bracket_reads_an_empty_key() {
        let subject = json!({ "": [5, 6] });
        assert_eq!(resolve(&subject, "[1]", "."), Some(&json!(6)));
    }

    #[test]
    fn strict_reports_the_failing_segment() {
        let subject = json!({ "a": { "b": [1, 2, 3] } });

        match resolve_strict(&subject, "a.b[5]", ".") {
            Err(PathError::MissingSegment { segment, path, span }) => {
                assert_eq!(segment, "5");
                assert_eq!(path, "a.b.5");
                assert_eq!(span.offset(), 4);
                assert_eq!(span.len(), 1);
            }
            other => panic!("expected MissingSegment, got {other:?}"),
        }

        match resolve_strict(&subject, "a.b.0.c", ".") {
            Err(PathError::NotTraversable { segment, found, .. }) => {
                assert_eq!(segment, "c");
                assert_eq!(found, "Number");
            }
            other => panic!("expected NotTraversable, got {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_bad_inputs() {
        assert!(matches!(
            resolve_strict(&json!([1]), "0", "."),
            Err(PathError::NotAnObject { found: "Array" })
        ));
        assert!(matches!(
            resolve_strict(&json!({}), "  ", "."),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn strict_agrees_with_total_resolution() {
        let subject = json!({ "a": { "b": null, "c": [[1, 2], [3, 4]] } });
        for path in ["a.b", "a.b.c", "a.c[1][0]", "a.c[2]", "a.x", "a..c"] {
            assert_eq!(
                resolve(&subject, path, ".").cloned(),
                resolve_strict(&subject, path, ".").ok().cloned(),
                "{path}"
            );
        }
    }
}
