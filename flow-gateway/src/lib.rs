//! Remote store gateway for ProjectFlow
//!
//! The store core only ever needs two calls from the backend: list every
//! entity of a kind, and create one entity of a kind. [`RemoteGateway`] is
//! that contract; this crate ships two implementations:
//!
//! - [`HttpGateway`]: JSON over HTTP against the ProjectFlow API
//! - [`MockGateway`]: in-memory store with call recording and failure
//!   injection, for tests and offline demos
//!
//! # Example
//!
//! ```rust,no_run
//! use flow_gateway::{GatewayConfig, HttpGateway, RemoteGateway};
//! use flow_model::EntityKind;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGateway::new(GatewayConfig {
//!     base_url: "http://localhost:8000".into(),
//!     ..Default::default()
//! })?;
//!
//! let clients = gateway.list(EntityKind::Clients).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod traits;

// Re-export main types
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use http::HttpGateway;
pub use mock::{GatewayCall, MockGateway};
pub use traits::RemoteGateway;
