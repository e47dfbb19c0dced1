//! Entity types shared with the remote store

use crate::error::ValidationError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Server-assigned entity identifier
pub type EntityId = i64;

/// Status given to every project created from the client
pub const DEFAULT_PROJECT_STATUS: &str = "ACTIVE";

/// The three collections the remote store serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Clients,
    Projects,
    Tasks,
}

impl EntityKind {
    /// All kinds, in startup load order
    pub const ALL: [EntityKind; 3] = [EntityKind::Clients, EntityKind::Projects, EntityKind::Tasks];

    /// Collection path on the remote store (`/clients`, ...)
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Clients => "clients",
            EntityKind::Projects => "projects",
            EntityKind::Tasks => "tasks",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A record held in one of the local collections.
pub trait Entity: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Which collection this entity lives in
    const KIND: EntityKind;

    /// The server-assigned id
    fn id(&self) -> EntityId;
}

/// Client record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Clients;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    /// Free-text category ("interno", "cliente", ...)
    #[serde(rename = "type", default)]
    pub project_type: Option<String>,
    pub status: String,
    #[serde(default)]
    pub deadline: Option<String>,
    /// Weak link to a client; may point at a client that is not loaded
    #[serde(default)]
    pub client_id: Option<EntityId>,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Projects;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Owning project; may dangle once the project is gone from the snapshot
    pub project_id: EntityId,
}

impl Task {
    /// Priority to display; tasks stored without one count as `MEDIUM`.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Tasks;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Board column a task sits in.
///
/// Variant order is the left-to-right column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Backlog,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Every status, in column order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Backlog,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "BACKLOG",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Review => "REVIEW",
            TaskStatus::Done => "DONE",
        }
    }

    /// Position in [`TaskStatus::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    /// Accepts the wire form and its lowercase/hyphenated spellings
    /// (`in-progress`, `in_progress`, `IN_PROGRESS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ValidationError::Invalid {
                field: "status",
                value: s.to_string(),
            })
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| ValidationError::Invalid {
                field: "priority",
                value: s.to_string(),
            })
    }
}
