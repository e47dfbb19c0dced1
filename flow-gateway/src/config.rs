//! Gateway configuration

/// Settings for [`crate::HttpGateway`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the ProjectFlow API
    pub base_url: String,
    /// Optional bearer token sent with every request
    pub api_key: Option<String>,
    /// Request timeout in seconds. `None` waits for as long as the server takes.
    pub timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl GatewayConfig {
    /// Config pointing at `base_url` with everything else defaulted
    pub fn for_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// URL of a collection, e.g. `{base}/clients`
    pub fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.timeout_secs.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_collection_url_trims_trailing_slash() {
        let config = GatewayConfig::for_url("http://api.local/");
        assert_eq!(config.collection_url("tasks"), "http://api.local/tasks");

        let config = GatewayConfig::for_url("http://api.local/v1");
        assert_eq!(config.collection_url("clients"), "http://api.local/v1/clients");
    }
}
