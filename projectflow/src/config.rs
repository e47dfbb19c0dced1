//! Command-line configuration
//!
//! CLI arguments with environment variable fallbacks, using clap.

use crate::view::View;
use clap::{Parser, Subcommand};
use flow_gateway::GatewayConfig;
use flow_model::{EntityId, Priority, TaskStatus};

/// ProjectFlow - clients, projects and tasks on a Kanban board
#[derive(Parser, Debug, Clone)]
#[command(name = "projectflow")]
#[command(about = "Track clients, projects and tasks against a ProjectFlow API")]
pub struct Args {
    /// Base URL of the ProjectFlow API
    #[arg(long, env = "PROJECTFLOW_API_URL", default_value = "http://localhost:8000")]
    pub api_url: String,

    /// Bearer token sent with every request (optional)
    #[arg(long, env = "PROJECTFLOW_API_KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "PROJECTFLOW_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// What to show, or what to create before showing it
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Summary counts
    Overview,
    /// List clients
    Clients,
    /// List projects with their linked client
    Projects,
    /// Show the Kanban board
    Board,
    /// Create a client, then list clients
    AddClient {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact: Option<String>,
    },
    /// Create a project, then list projects
    AddProject {
        #[arg(long)]
        name: String,
        /// Free-text category (interno, cliente, ...)
        #[arg(long = "type")]
        project_type: Option<String>,
        #[arg(long)]
        client_id: Option<EntityId>,
    },
    /// Create a task, then show the board
    AddTask {
        #[arg(long)]
        title: String,
        #[arg(long)]
        project_id: Option<EntityId>,
        #[arg(long, default_value = "BACKLOG")]
        status: TaskStatus,
        #[arg(long, default_value = "MEDIUM")]
        priority: Priority,
    },
}

impl Command {
    /// Screen rendered once the command has run
    pub fn view(&self) -> View {
        match self {
            Command::Overview => View::Overview,
            Command::Clients | Command::AddClient { .. } => View::Clients,
            Command::Projects | Command::AddProject { .. } => View::Projects,
            Command::Board | Command::AddTask { .. } => View::Board,
        }
    }
}

impl Args {
    /// Gateway settings taken from the arguments
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(format!("API URL must be http(s): {}", self.api_url));
        }
        if self.timeout_secs == Some(0) {
            return Err("timeout must be at least one second".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["projectflow", "board"]).unwrap();
        assert_eq!(args.command, Command::Board);
        assert_eq!(args.command.view(), View::Board);
        assert!(args.validate().is_ok());

        let config = args.gateway_config();
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_add_task_parsing() {
        let args = Args::try_parse_from([
            "projectflow",
            "--api-url",
            "http://api.local",
            "add-task",
            "--title",
            "Wireframes",
            "--project-id",
            "3",
            "--status",
            "in-progress",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::AddTask {
                title: "Wireframes".into(),
                project_id: Some(3),
                status: TaskStatus::InProgress,
                priority: Priority::Medium,
            }
        );
        assert_eq!(args.gateway_config().base_url, "http://api.local");
    }

    #[test]
    fn test_add_project_type_flag() {
        let args = Args::try_parse_from([
            "projectflow",
            "add-project",
            "--name",
            "Portal",
            "--type",
            "interno",
        ])
        .unwrap();
        match args.command {
            Command::AddProject {
                project_type,
                client_id,
                ..
            } => {
                assert_eq!(project_type.as_deref(), Some("interno"));
                assert_eq!(client_id, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_status_rejected() {
        let result = Args::try_parse_from([
            "projectflow", "add-task", "--title", "x", "--status", "blocked",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut args = Args::try_parse_from(["projectflow", "overview"]).unwrap();
        args.api_url = "localhost:8000".into();
        assert!(args.validate().is_err());
    }
}
