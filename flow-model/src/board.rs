//! Kanban board projection
//!
//! A board is derived from a task slice in one pass and borrows the tasks it
//! groups. It holds no state of its own: when the task collection changes,
//! group again.

use crate::types::{Task, TaskStatus};

/// Tasks partitioned by status, one column per [`TaskStatus`].
///
/// All four columns always exist. Within a column tasks keep the order they
/// had in the source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'a> {
    columns: [Vec<&'a Task>; 4],
}

impl<'a> Board<'a> {
    /// Group `tasks` into columns
    pub fn group(tasks: &'a [Task]) -> Self {
        let mut columns: [Vec<&'a Task>; 4] = Default::default();
        for task in tasks {
            columns[task.status.index()].push(task);
        }
        Self { columns }
    }

    /// Tasks in one column
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        &self.columns[status.index()]
    }

    /// All columns, left to right
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[&'a Task])> + '_ {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    /// Number of tasks across all columns
    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            status,
            priority: Some(Priority::Medium),
            assignee: None,
            due_date: None,
            project_id: 1,
        }
    }

    #[test]
    fn test_partition_is_exact() {
        let tasks = vec![
            task(1, TaskStatus::Done),
            task(2, TaskStatus::Backlog),
            task(3, TaskStatus::Review),
            task(4, TaskStatus::Done),
            task(5, TaskStatus::InProgress),
            task(6, TaskStatus::Backlog),
        ];
        let board = Board::group(&tasks);

        assert_eq!(board.total(), tasks.len());
        for (status, column) in board.columns() {
            assert!(column.iter().all(|t| t.status == status));
        }
        for t in &tasks {
            let hits = board
                .columns()
                .filter(|(_, column)| column.iter().any(|c| c.id == t.id))
                .count();
            assert_eq!(hits, 1, "task {} must sit in exactly one column", t.id);
        }
    }

    #[test]
    fn test_columns_keep_source_order() {
        let tasks = vec![
            task(10, TaskStatus::Backlog),
            task(3, TaskStatus::Done),
            task(7, TaskStatus::Backlog),
            task(1, TaskStatus::Backlog),
        ];
        let board = Board::group(&tasks);

        let ids: Vec<i64> = board.column(TaskStatus::Backlog).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 7, 1]);
    }

    #[test]
    fn test_empty_columns_present() {
        let board = Board::group(&[]);
        let statuses: Vec<TaskStatus> = board.columns().map(|(s, _)| s).collect();

        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert!(board.columns().all(|(_, column)| column.is_empty()));
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_grouping_is_repeatable() {
        let tasks = vec![
            task(1, TaskStatus::Review),
            task(2, TaskStatus::Review),
            task(3, TaskStatus::InProgress),
        ];
        assert_eq!(Board::group(&tasks), Board::group(&tasks));
    }
}
