//! ProjectFlow client core
//!
//! Keeps the client, project and task collections in memory and in step with
//! the remote store:
//!
//! - [`EntityStore`]: loads the three collections independently and appends
//!   entities only after the store confirms a create
//! - [`Snapshot`]: point-in-time copy the board, reference lookups and
//!   overview are derived from
//! - [`View`]: the four screens a front end can show
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use flow_gateway::{GatewayConfig, HttpGateway};
//! use projectflow::EntityStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGateway::new(GatewayConfig::for_url("http://localhost:8000"))?;
//! let store = EntityStore::new(Arc::new(gateway));
//!
//! let report = store.load_all().await;
//! for (kind, err) in report.failures() {
//!     eprintln!("{} not loaded: {}", kind, err);
//! }
//!
//! store.create_client("Acme", Some("a@acme.com")).await?;
//! let snapshot = store.snapshot().await;
//! println!("{} tasks on the board", snapshot.board().total());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod snapshot;
pub mod store;
pub mod view;

// Re-export main types
pub use error::{FlowError, Result};
pub use snapshot::Snapshot;
pub use store::{EntityStore, LoadHandles, LoadReport};
pub use view::View;

// Re-export from underlying crates
pub use flow_gateway::{GatewayConfig, HttpGateway, MockGateway, RemoteGateway};
pub use flow_model::{
    Board, Client, EntityId, EntityKind, Overview, Priority, Project, Task, TaskStatus,
    ValidationError,
};
