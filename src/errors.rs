//! Diagnostics for paths that do not resolve.
//!
//! The lookup API itself is total and never returns these; they exist for
//! callers that want to know *why* a path came back empty, such as the CLI.

use miette::{Diagnostic, SourceSpan};
use std::ops::Range;
use thiserror::Error;

use crate::path::Path;
use crate::value::type_name;
use serde_json::Value;

/// Why a path could not be resolved against a subject.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum PathError {
    #[error("cannot look up a path in {found}, expected an Object")]
    #[diagnostic(
        code(deepget::subject),
        help("only JSON objects can be used as the root of a lookup")
    )]
    NotAnObject { found: &'static str },

    #[error("path is empty")]
    #[diagnostic(code(deepget::empty_path))]
    EmptyPath,

    #[error("no value at segment `{segment}`")]
    #[diagnostic(code(deepget::missing))]
    MissingSegment {
        segment: String,
        #[source_code]
        path: String,
        #[label("not found")]
        span: SourceSpan,
    },

    #[error("cannot step into {found} at segment `{segment}`")]
    #[diagnostic(
        code(deepget::not_traversable),
        help("only objects and arrays have members")
    )]
    NotTraversable {
        segment: String,
        found: &'static str,
        #[source_code]
        path: String,
        #[label("reached a non-container here")]
        span: SourceSpan,
    },
}

impl PathError {
    pub(crate) fn not_an_object(subject: &Value) -> Self {
        Self::NotAnObject {
            found: type_name(subject),
        }
    }

    pub(crate) fn missing_segment(path: &Path, segment: &str, span: Range<usize>) -> Self {
        Self::MissingSegment {
            segment: segment.to_string(),
            path: path.normalized().to_string(),
            span: span.into(),
        }
    }

    pub(crate) fn not_traversable(
        path: &Path,
        segment: &str,
        span: Range<usize>,
        found: &Value,
    ) -> Self {
        Self::NotTraversable {
            segment: segment.to_string(),
            found: type_name(found),
            path: path.normalized().to_string(),
            span: span.into(),
        }
    }
}
