//! Summary counts for the overview screen

use crate::board::Board;
use crate::types::{Client, Project, Task, TaskStatus};
use serde::Serialize;

/// Headline numbers over the current collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub clients: usize,
    pub projects: usize,
    pub tasks: usize,
    /// Tasks in the DONE column
    pub done: usize,
    /// Task count per status, in column order
    pub by_status: [(TaskStatus, usize); 4],
}

impl Overview {
    pub fn compute(clients: &[Client], projects: &[Project], tasks: &[Task]) -> Self {
        let board = Board::group(tasks);
        let by_status = TaskStatus::ALL.map(|status| (status, board.column(status).len()));

        Self {
            clients: clients.len(),
            projects: projects.len(),
            tasks: tasks.len(),
            done: board.column(TaskStatus::Done).len(),
            by_status,
        }
    }

    /// Count for one status
    pub fn count(&self, status: TaskStatus) -> usize {
        self.by_status[status.index()].1
    }
}
