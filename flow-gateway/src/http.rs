//! HTTP gateway for the ProjectFlow API
//!
//! `GET /{kind}` lists a collection and `POST /{kind}` creates one entry.

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::traits::RemoteGateway;
use async_trait::async_trait;
use flow_model::EntityKind;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// JSON-over-HTTP gateway.
pub struct HttpGateway {
    config: GatewayConfig,
    client: Client,
}

impl HttpGateway {
    /// Create a new HTTP gateway
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref api_key) = config.api_key {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| GatewayError::Config(format!("invalid API key: {}", e)))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Get the gateway configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(response.url().path().to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Server {
                status,
                message: body,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    fn id(&self) -> &str {
        &self.config.base_url
    }

    async fn list(&self, kind: EntityKind) -> Result<Value> {
        let url = self.config.collection_url(kind.path());
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn create(&self, kind: EntityKind, fields: Value) -> Result<Value> {
        let url = self.config.collection_url(kind.path());
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&fields)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_key_is_config_error() {
        let result = HttpGateway::new(GatewayConfig {
            api_key: Some("bad\nkey".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_id_is_base_url() {
        let gateway = HttpGateway::new(GatewayConfig::for_url("http://api.local")).unwrap();
        assert_eq!(gateway.id(), "http://api.local");
        assert_eq!(gateway.config().timeout_secs, None);
    }
}
