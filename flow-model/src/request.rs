//! Create request bodies
//!
//! These are the exact JSON bodies posted to the remote store. They never
//! carry an `id`: the store is the only authority that assigns one.
//!
//! Optional text fields go through [`absent_if_empty`] on construction, so an
//! empty form field is sent as `null` rather than `""`.

use crate::error::{Result, ValidationError};
use crate::types::{
    Client, Entity, EntityId, Priority, Project, Task, TaskStatus, DEFAULT_PROJECT_STATUS,
};
use serde::Serialize;

/// Map an empty form value to the absent marker.
///
/// Only the empty string is absent; whitespace is kept as entered.
pub fn absent_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// A body that creates one entity on the remote store.
pub trait CreateRequest: Serialize + Send + Sync {
    /// Entity the store answers with
    type Output: Entity;

    /// Check required fields before anything is sent
    fn validate(&self) -> Result<()>;

    /// Convert to the JSON body
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// `POST /clients` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClient {
    pub name: String,
    pub contact: Option<String>,
}

impl NewClient {
    pub fn new(name: impl Into<String>, contact: Option<String>) -> Self {
        Self {
            name: name.into(),
            contact: absent_if_empty(contact),
        }
    }
}

impl CreateRequest for NewClient {
    type Output = Client;

    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

/// `POST /projects` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub client_id: Option<EntityId>,
    pub status: String,
}

impl NewProject {
    pub fn new(
        name: impl Into<String>,
        project_type: Option<String>,
        client_id: Option<EntityId>,
    ) -> Self {
        Self {
            name: name.into(),
            project_type: absent_if_empty(project_type),
            client_id,
            status: DEFAULT_PROJECT_STATUS.to_string(),
        }
    }
}

impl CreateRequest for NewProject {
    type Output = Project;

    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

/// `POST /tasks` body
///
/// `project_id` is optional here only so an unselected project can be
/// rejected by [`CreateRequest::validate`]; a valid body always carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub project_id: Option<EntityId>,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        project_id: Option<EntityId>,
        status: TaskStatus,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            project_id,
            status,
            priority,
        }
    }
}

impl CreateRequest for NewTask {
    type Output = Task;

    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        if self.project_id.is_none() {
            return Err(ValidationError::Required("project_id"));
        }
        Ok(())
    }
}
