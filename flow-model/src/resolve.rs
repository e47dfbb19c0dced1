//! Reference resolution
//!
//! Projects point at clients and tasks point at projects by id only. The
//! referenced entity may not be loaded yet, may have failed to load, or may be
//! gone; none of that is an error here.

use crate::types::{Client, EntityId, Project};
use std::borrow::Cow;

/// Label shown for a project that is not in the local collection
pub fn fallback_project_label(project_id: EntityId) -> String {
    format!("Projeto #{}", project_id)
}

/// Look up a project by id
pub fn find_project(projects: &[Project], project_id: EntityId) -> Option<&Project> {
    projects.iter().find(|p| p.id == project_id)
}

/// Project name for display, or [`fallback_project_label`] when it is not loaded
pub fn project_label(projects: &[Project], project_id: EntityId) -> Cow<'_, str> {
    match find_project(projects, project_id) {
        Some(project) => Cow::Borrowed(project.name.as_str()),
        None => Cow::Owned(fallback_project_label(project_id)),
    }
}

/// Look up a client by an optional id; `None` means "no client"
pub fn find_client(clients: &[Client], client_id: Option<EntityId>) -> Option<&Client> {
    let client_id = client_id?;
    clients.iter().find(|c| c.id == client_id)
}

/// The client a project is linked to, if it has one and it is loaded
pub fn client_of<'a>(clients: &'a [Client], project: &Project) -> Option<&'a Client> {
    find_client(clients, project.client_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: EntityId, name: &str, client_id: Option<EntityId>) -> Project {
        Project {
            id,
            name: name.to_string(),
            project_type: None,
            status: "ACTIVE".to_string(),
            deadline: None,
            client_id,
        }
    }

    fn client(id: EntityId, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
            contact: None,
            notes: None,
        }
    }

    #[test]
    fn test_known_project_resolves_to_name() {
        let projects = vec![project(3, "Portal", None)];
        assert_eq!(project_label(&projects, 3), "Portal");
    }

    #[test]
    fn test_dangling_project_falls_back() {
        let projects = vec![project(3, "Portal", None)];
        assert_eq!(project_label(&projects, 999), "Projeto #999");
        assert_eq!(project_label(&[], 1), "Projeto #1");
    }

    #[test]
    fn test_client_lookup_tolerates_absence() {
        let clients = vec![client(1, "Acme")];

        assert_eq!(find_client(&clients, Some(1)).map(|c| c.name.as_str()), Some("Acme"));
        assert!(find_client(&clients, Some(42)).is_none());
        assert!(find_client(&clients, None).is_none());
    }

    #[test]
    fn test_client_of_project() {
        let clients = vec![client(1, "Acme"), client(2, "Globex")];

        let linked = project(5, "Portal", Some(2));
        assert_eq!(client_of(&clients, &linked).map(|c| c.id), Some(2));

        let dangling = project(6, "Intranet", Some(77));
        assert!(client_of(&clients, &dangling).is_none());

        let unlinked = project(7, "Interno", None);
        assert!(client_of(&clients, &unlinked).is_none());
    }
}
