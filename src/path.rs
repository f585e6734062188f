//! A canonical representation of a lookup path.
//!
//! Paths are written as separator-joined property names (`a.b.c`) with
//! `[N]` accepted as sugar for `<sep>N`. Parsing is a textual rewrite of the
//! bracket indices followed by a plain split; empty segments survive the split.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// The separator used when none (or an empty one) is given.
pub const DEFAULT_SEP: &str = ".";

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static BRACKET_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]+)\]").expect("bracket index pattern is valid"));

/// Returns `sep`, or [`DEFAULT_SEP`] when `sep` is empty.
pub fn effective_sep(sep: &str) -> &str {
    if sep.is_empty() {
        DEFAULT_SEP
    } else {
        sep
    }
}

/// Returns true if `path` holds nothing but whitespace.
///
/// A byte-order mark (U+FEFF) counts as whitespace too, although
/// `char::is_whitespace` excludes it.
pub fn is_blank(path: &str) -> bool {
    path.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Rewrites every `[N]` in `path` into `<sep>N`.
///
/// The separator is inserted verbatim, whatever characters it contains.
///
/// # Examples
///
/// ```rust
/// use deepget::path::normalize;
/// assert_eq!(normalize("a.b[2].c", "."), "a.b.2.c");
/// assert_eq!(normalize("m[1][0]", "/"), "m/1/0");
/// assert_eq!(normalize("a[x]", "."), "a[x]");
/// ```
pub fn normalize<'a>(path: &'a str, sep: &str) -> Cow<'a, str> {
    BRACKET_INDEX.replace_all(path, |caps: &Captures| format!("{sep}{}", &caps[1]))
}

/// A parsed path: the normalized text plus the byte range of each segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    text: String,
    spans: Vec<Range<usize>>,
}

impl Path {
    /// Parses `path` with the given separator.
    ///
    /// Returns `None` if `path` is empty or only whitespace. An empty `sep`
    /// falls back to [`DEFAULT_SEP`].
    pub fn parse(path: &str, sep: &str) -> Option<Self> {
        if is_blank(path) {
            return None;
        }
        let sep = effective_sep(sep);
        let text = normalize(path, sep).into_owned();

        let mut spans = Vec::new();
        let mut start = 0;
        for piece in text.split(sep) {
            spans.push(start..start + piece.len());
            start += piece.len() + sep.len();
        }

        Some(Self { text, spans })
    }

    /// The path after bracket normalization.
    pub fn normalized(&self) -> &str {
        &self.text
    }

    /// Iterates over the segments in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(move |span| &self.text[span.clone()])
    }

    /// Iterates over the segments together with their byte range in
    /// [`Path::normalized`].
    pub fn spanned_segments(&self) -> impl Iterator<Item = (&str, Range<usize>)> + '_ {
        self.spans
            .iter()
            .map(move |span| (&self.text[span.clone()], span.clone()))
    }

    /// Joins the segments back together with `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.segments().collect::<Vec<_>>().join(sep)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(DEFAULT_SEP))
    }
}
