//! ProjectFlow domain model
//!
//! Clients, projects and tasks as the remote store hands them out, plus the
//! pure projections the UI renders from them:
//!
//! - [`Board`]: tasks partitioned into the four fixed status columns
//! - [`resolve`]: id references turned into display values, tolerating
//!   entities that are not (or no longer) loaded
//! - [`Overview`]: headline counts for the summary screen
//!
//! Create bodies ([`NewClient`], [`NewProject`], [`NewTask`]) carry their own
//! validation so nothing reaches the wire without its required fields.
//!
//! # Example
//!
//! ```
//! use flow_model::{Board, Task, TaskStatus};
//!
//! let tasks: Vec<Task> = serde_json::from_str(
//!     r#"[{"id": 1, "title": "Wireframes", "status": "REVIEW", "project_id": 3}]"#,
//! ).unwrap();
//!
//! let board = Board::group(&tasks);
//! assert_eq!(board.column(TaskStatus::Review).len(), 1);
//! assert!(board.column(TaskStatus::Done).is_empty());
//! ```

pub mod board;
pub mod error;
pub mod overview;
pub mod request;
pub mod resolve;
pub mod types;

// Re-export main types
pub use board::Board;
pub use error::{Result, ValidationError};
pub use overview::Overview;
pub use request::{absent_if_empty, CreateRequest, NewClient, NewProject, NewTask};
pub use types::*;
