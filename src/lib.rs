//! # deepget
//!
//! Retrieve values from nested JSON objects with dot-notation paths such as
//! `a.b.c[1].d`.
//!
//! Lookups are total: a subject that is not an object, a blank path, or a path
//! that runs off the data all produce `None`. A key explicitly holding `null`
//! produces `Some(&Value::Null)`, so absence and `null` stay distinguishable.
//!
//! ```rust
//! use deepget::get;
//! use serde_json::json;
//!
//! let obj = json!({ "a": { "b": { "c": [[1, 2], [3, 4]] } } });
//! assert_eq!(get(&obj, "a.b.c[1][0]", None), Some(&json!(3)));
//! assert_eq!(get(&obj, "a.b.c[5]", None), None);
//! ```

pub use crate::errors::PathError;
pub use crate::get::{get, get_as, get_dynamic, DeepGet};
pub use crate::options::GetOptions;
pub use crate::path::{Path, DEFAULT_SEP};

pub mod cli;
pub mod errors;
pub mod get;
pub mod options;
pub mod path;
pub mod resolve;
pub mod value;
