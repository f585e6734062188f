//! Per-call lookup options.

use serde::{Deserialize, Serialize};

use crate::path::effective_sep;

/// Options accepted by [`crate::get`].
///
/// Options can be built in code or read from JSON such as `{"sep": "/"}`.
///
/// # Examples
///
/// ```rust
/// use deepget::GetOptions;
/// assert_eq!(GetOptions::default().separator(), ".");
/// assert_eq!(GetOptions::new().with_sep("/").separator(), "/");
/// // An empty separator is never honored.
/// assert_eq!(GetOptions::new().with_sep("").separator(), ".");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOptions {
    /// Custom key separator. `None` and `""` both mean the default.
    pub sep: Option<String>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sep(self, sep: impl Into<String>) -> Self {
        Self {
            sep: Some(sep.into()),
        }
    }

    /// The separator this lookup will actually use.
    pub fn separator(&self) -> &str {
        effective_sep(self.sep.as_deref().unwrap_or_default())
    }
}
