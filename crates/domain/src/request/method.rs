//! Request verbs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verb of an API call.
///
/// The backend only routes these four; a payload travels in the query
/// string for `Get` and as a form body for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read.
    #[default]
    Get,
    /// Create or trigger an action.
    Post,
    /// Replace settings.
    Put,
    /// Remove.
    Delete,
}

impl HttpMethod {
    /// Returns whether a payload is sent as a form body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        !matches!(self, Self::Get)
    }

    /// Wire name of the verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
