//! Point-in-time view of the collections

use flow_model::{resolve, Board, Client, EntityId, Overview, Project, Task};
use std::borrow::Cow;

/// Owned copy of the three collections at one revision.
///
/// Everything a screen needs is derived from here; deriving twice from the
/// same snapshot gives the same answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Tasks grouped into board columns
    pub fn board(&self) -> Board<'_> {
        Board::group(&self.tasks)
    }

    /// Summary counts
    pub fn overview(&self) -> Overview {
        Overview::compute(&self.clients, &self.projects, &self.tasks)
    }

    /// Project name, or `Projeto #<id>` when the project is not loaded
    pub fn project_label(&self, project_id: EntityId) -> Cow<'_, str> {
        resolve::project_label(&self.projects, project_id)
    }

    /// Client linked to `project`, if any is linked and loaded
    pub fn client_of(&self, project: &Project) -> Option<&Client> {
        resolve::client_of(&self.clients, project)
    }

    pub fn client(&self, client_id: EntityId) -> Option<&Client> {
        resolve::find_client(&self.clients, Some(client_id))
    }

    pub fn project(&self, project_id: EntityId) -> Option<&Project> {
        resolve::find_project(&self.projects, project_id)
    }

    pub fn task(&self, task_id: EntityId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Tasks that reference `project_id`, in collection order
    pub fn tasks_for_project(&self, project_id: EntityId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.project_id == project_id)
    }
}
