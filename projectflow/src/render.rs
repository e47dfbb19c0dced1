//! Plain-text rendering of a snapshot, one screen at a time

use crate::snapshot::Snapshot;
use crate::view::View;
use std::fmt;

/// Renders one [`View`] of a [`Snapshot`] via `Display`.
pub struct Screen<'a> {
    snapshot: &'a Snapshot,
    view: View,
}

impl<'a> Screen<'a> {
    pub fn new(snapshot: &'a Snapshot, view: View) -> Self {
        Self { snapshot, view }
    }

    fn overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = self.snapshot.overview();
        writeln!(f, "Clientes: {}", overview.clients)?;
        writeln!(f, "Projetos: {}", overview.projects)?;
        writeln!(f, "Tarefas totais: {}", overview.tasks)?;
        writeln!(f, "Tarefas concluídas: {}", overview.done)?;
        writeln!(f)?;
        for (status, count) in overview.by_status {
            writeln!(f, "{:<12} {}", status.as_str(), count)?;
        }
        Ok(())
    }

    fn clients(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapshot.clients.is_empty() {
            return writeln!(f, "Nenhum cliente cadastrado ainda.");
        }
        for client in &self.snapshot.clients {
            match &client.contact {
                Some(contact) => writeln!(f, "#{} {} ({})", client.id, client.name, contact)?,
                None => writeln!(f, "#{} {}", client.id, client.name)?,
            }
        }
        Ok(())
    }

    fn projects(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapshot.projects.is_empty() {
            return writeln!(f, "Nenhum projeto cadastrado.");
        }
        for project in &self.snapshot.projects {
            write!(f, "#{} {}", project.id, project.name)?;
            if let Some(project_type) = &project.project_type {
                write!(f, " ({})", project_type)?;
            }
            match (project.client_id, self.snapshot.client_of(project)) {
                (_, Some(client)) => write!(f, " | Cliente: {}", client.name)?,
                (Some(client_id), None) => write!(f, " | Cliente ID: {}", client_id)?,
                (None, None) => {}
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn board(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.snapshot.board();
        for (status, tasks) in board.columns() {
            writeln!(f, "{} ({})", status, tasks.len())?;
            if tasks.is_empty() {
                writeln!(f, "  Sem tarefas.")?;
            }
            for task in tasks {
                writeln!(
                    f,
                    "  #{} {} | {} | Prioridade: {}",
                    task.id,
                    task.title,
                    self.snapshot.project_label(task.project_id),
                    task.effective_priority()
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.view.title())?;
        match self.view {
            View::Overview => self.overview(f),
            View::Clients => self.clients(f),
            View::Projects => self.projects(f),
            View::Board => self.board(f),
        }
    }
}
