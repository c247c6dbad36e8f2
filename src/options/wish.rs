//! Wish service client options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Wish service endpoint configuration. An empty endpoint is valid: every
/// request then takes the fallback path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct WishOptions {
    /// Endpoint URL for the remote text-generation service.
    pub endpoint: String,
    /// Environment variable holding the bearer token, read at request
    /// time. No header is sent when the variable is unset.
    pub api_key_env: String,
    /// Global request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WishOptions {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key_env: "ARBOR_API_KEY".to_owned(),
            timeout_secs: 10,
        }
    }
}
