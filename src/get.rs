//! The public lookup entry points.
//!
//! Every function here is total: invalid subjects, blank paths and paths that
//! do not resolve all come back as `None`, never as an error or a panic.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::options::GetOptions;
use crate::path::{is_blank, DEFAULT_SEP};
use crate::resolve::resolve;
use crate::value::is_plain_object;

/// Retrieves a value from a nested object using a dot-notation path.
///
/// Returns `None` if the subject is not an object, if the path is blank, or
/// if the path does not resolve. A key holding `null` is returned as
/// `Some(&Value::Null)`.
///
/// # Examples
///
/// ```rust
/// use deepget::{get, GetOptions};
/// use serde_json::json;
///
/// let obj = json!({ "a": { "b": { "c": 42, "d": { "_": "foo" } } } });
/// assert_eq!(get(&obj, "a.b.d._", None), Some(&json!("foo")));
///
/// let obj = json!({ "a": { "b": { "c": [1, 2, 3] } } });
/// assert_eq!(get(&obj, "a.b.c[1]", None), Some(&json!(2)));
///
/// let opts = GetOptions::new().with_sep("/");
/// assert_eq!(get(&obj, "a/b/c[0]", Some(&opts)), Some(&json!(1)));
/// ```
pub fn get<'v>(
    subject: &'v Value,
    path: &str,
    options: Option<&GetOptions>,
) -> Option<&'v Value> {
    if !is_plain_object(subject) || is_blank(path) {
        return None;
    }

    let sep = options.map_or(DEFAULT_SEP, |options| options.separator());
    resolve(subject, path, sep)
}

/// Like [`get`], but takes the path as a JSON value.
///
/// Any path that is not a JSON string resolves to `None`.
pub fn get_dynamic<'v>(
    subject: &'v Value,
    path: &Value,
    options: Option<&GetOptions>,
) -> Option<&'v Value> {
    match path {
        Value::String(path) => get(subject, path, options),
        _ => None,
    }
}

/// Retrieves and deserializes a value.
///
/// A value that is found but does not fit `T` is treated as absent.
///
/// ```rust
/// use deepget::get_as;
/// use serde_json::json;
///
/// let obj = json!({ "port": 8080, "name": "api" });
/// assert_eq!(get_as::<u16>(&obj, "port", None), Some(8080));
/// assert_eq!(get_as::<u16>(&obj, "name", None), None);
/// ```
pub fn get_as<T: DeserializeOwned>(
    subject: &Value,
    path: &str,
    options: Option<&GetOptions>,
) -> Option<T> {
    get(subject, path, options).and_then(|value| T::deserialize(value).ok())
}

/// The lookup entry point as a type, carrying its default separator.
///
/// ```rust
/// use deepget::DeepGet;
/// use serde_json::json;
///
/// let path = ["a", "b"].join(DeepGet::DEFAULT_SEP);
/// assert_eq!(DeepGet::get(&json!({ "a": { "b": 1 } }), &path, None), Some(&json!(1)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepGet;

impl DeepGet {
    pub const DEFAULT_SEP: &'static str = DEFAULT_SEP;

    pub fn get<'v>(
        subject: &'v Value,
        path: &str,
        options: Option<&GetOptions>,
    ) -> Option<&'v Value> {
        get(subject, path, options)
    }

    pub fn get_dynamic<'v>(
        subject: &'v Value,
        path: &Value,
        options: Option<&GetOptions>,
    ) -> Option<&'v Value> {
        get_dynamic(subject, path, options)
    }

    pub fn get_as<T: DeserializeOwned>(
        subject: &Value,
        path: &str,
        options: Option<&GetOptions>,
    ) -> Option<T> {
        get_as(subject, path, options)
    }
}
