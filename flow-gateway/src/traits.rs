//! Core trait for remote store backends.

use crate::error::Result;
use async_trait::async_trait;
use flow_model::EntityKind;
use serde_json::Value;

/// The two calls the entity store makes against its backend.
///
/// Bodies travel as raw JSON: typed decoding and validation belong to the
/// caller. Neither call is retried or cancelled by the gateway.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Backend identifier for logs (e.g. base URL)
    fn id(&self) -> &str;

    /// Fetch every entity of `kind`. Answers a JSON array.
    async fn list(&self, kind: EntityKind) -> Result<Value>;

    /// Create one entity of `kind` from `fields`. Answers the created entity,
    /// including its server-assigned `id`.
    async fn create(&self, kind: EntityKind, fields: Value) -> Result<Value>;
}
