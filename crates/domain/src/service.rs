//! Backend services

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three backend services sharing a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Auth/main API.
    Auth,
    /// CDN API.
    Cdn,
    /// Cloud (IaaS) API.
    Cloud,
}

impl Service {
    /// Returns all services.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Auth, Self::Cdn, Self::Cloud]
    }

    /// Returns the service name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Cdn => "cdn",
            Self::Cloud => "cloud",
        }
    }

    /// Base URL used when none is configured.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Auth => "http://localhost:8003",
            Self::Cdn => "http://localhost:8000",
            Self::Cloud => "http://localhost:8001",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
