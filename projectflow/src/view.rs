//! Screen selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// The screen a front end is showing. Any view can follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Overview,
    Clients,
    Projects,
    Board,
}

impl View {
    /// Heading shown above the screen
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Clients => "Clientes",
            View::Projects => "Projetos",
            View::Board => "Quadro Kanban",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        assert_eq!(View::default(), View::Overview);
    }

    #[test]
    fn test_titles() {
        assert_eq!(View::Board.title(), "Quadro Kanban");
        assert_eq!(View::Clients.to_string(), "Clientes");
    }
}
