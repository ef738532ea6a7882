//! Outbound media request settings.

use serde::{Deserialize, Serialize};

/// Default per-request timeout for storage imports.
const fn default_request_timeout_secs() -> u64 {
    20
}

fn default_user_agent() -> String {
    String::from("folio/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Timeout for each upload attempt, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent sent with storage requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
