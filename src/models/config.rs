//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the listing client.
pub struct ClientConfig {
    /// Base URL of the listing REST API, without a trailing slash.
    pub api_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Token sent as `x-access-token` when present.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Signed-in user, used by the "only my properties" filter.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_url": "http://localhost:8080"}"#).unwrap();

        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.access_token, None);
        assert_eq!(config.user_id, None);
    }
}
