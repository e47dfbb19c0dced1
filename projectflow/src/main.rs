//! ProjectFlow command-line client
//!
//! Loads clients, projects and tasks from the API, optionally creates one
//! entity, and prints the requested screen.

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projectflow::{
    config::{Args, Command},
    render::Screen,
    EntityStore, FlowError, HttpGateway,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("projectflow={0},flow_gateway={0},info", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        return Ok(ExitCode::from(2));
    }

    let gateway = HttpGateway::new(args.gateway_config())?;
    info!("API: {}", args.api_url);
    let store = EntityStore::new(Arc::new(gateway));

    let report = store.load_all().await;
    for (kind, err) in report.failures() {
        warn!("{} not loaded: {}", kind, err);
    }

    let outcome = run_command(&store, &args.command).await;
    let snapshot = store.snapshot().await;
    println!("{}", Screen::new(&snapshot, args.command.view()));

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Entered values were kept: {:?}", args.command);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_command(store: &EntityStore, command: &Command) -> Result<(), FlowError> {
    match command {
        Command::AddClient { name, contact } => {
            let client = store.create_client(name, contact.as_deref()).await?;
            println!("Created client #{}", client.id);
        }
        Command::AddProject {
            name,
            project_type,
            client_id,
        } => {
            let project = store
                .create_project(name, project_type.as_deref(), *client_id)
                .await?;
            println!("Created project #{}", project.id);
        }
        Command::AddTask {
            title,
            project_id,
            status,
            priority,
        } => {
            let task = store
                .create_task(title, *project_id, *status, *priority)
                .await?;
            println!("Created task #{}", task.id);
        }
        Command::Overview | Command::Clients | Command::Projects | Command::Board => {}
    }
    Ok(())
}
