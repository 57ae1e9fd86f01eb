//! # Webforge - Website Builder Core
//!
//! CLI over a persisted builder session: create a starter project,
//! compose the live-preview document, export the project, and manage
//! backup snapshots.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a new project
//! cargo run -- init --name my-site
//!
//! # Compose the preview document to stdout
//! cargo run -- compose
//!
//! # Export the project as a JSON dump
//! cargo run -- export -o site.json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use webforge_core::{BackupStore, Config, Session, persist};
use webforge_project::Project;

/// Webforge - core of a browser-style website builder
#[derive(Parser, Debug)]
#[command(name = "webforge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session state file (defaults to the platform data directory)
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a fresh starter project
    Init {
        /// Project name
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing session
        #[arg(long)]
        force: bool,
    },

    /// Compose the project into a single preview document
    Compose {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export the project as a JSON dump
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Take a backup snapshot of the current project
    Snapshot,

    /// List backup snapshots, newest first
    Snapshots,

    /// Restore the project from a backup snapshot
    Restore {
        /// Snapshot id (see `snapshots`)
        id: Uuid,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Webforge v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    let state_path = match args.state {
        Some(path) => path,
        None => persist::default_path()?,
    };

    match args.command {
        Command::Init { name, force } => cmd_init(&state_path, config, name, force),
        Command::Compose { output } => cmd_compose(&state_path, config, output),
        Command::Export { output } => cmd_export(&state_path, config, output),
        Command::Snapshot => cmd_snapshot(&state_path, config),
        Command::Snapshots => cmd_snapshots(&state_path, config),
        Command::Restore { id } => cmd_restore(&state_path, config, id),
    }
}

fn cmd_init(
    state_path: &PathBuf,
    config: Config,
    name: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    if state_path.exists() && !force {
        anyhow::bail!(
            "session already exists at {} (use --force to overwrite)",
            state_path.display()
        );
    }

    let name = name.unwrap_or_else(|| config.project.default_name.clone());
    let session = Session::with_project(Project::starter(name), config);
    persist::save(&session, state_path)?;

    println!(
        "Created project '{}' at {}",
        session.project().name,
        state_path.display()
    );
    Ok(())
}

fn cmd_compose(
    state_path: &PathBuf,
    config: Config,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let session = persist::load(state_path, config)?;
    let document = session.compose_preview();

    match output {
        Some(path) => {
            std::fs::write(&path, document)?;
            println!("Preview written to {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn cmd_export(state_path: &PathBuf, config: Config, output: Option<PathBuf>) -> anyhow::Result<()> {
    let session = persist::load(state_path, config)?;
    let json = session.export().to_json()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("Export written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_snapshot(state_path: &PathBuf, config: Config) -> anyhow::Result<()> {
    let session = persist::load(state_path, config)?;
    let store = backup_store(state_path, &session)?;

    let snapshot = store.snapshot(session.project())?;
    println!("Snapshot {} taken at {}", snapshot.id, snapshot.created_at);
    Ok(())
}

fn cmd_snapshots(state_path: &PathBuf, config: Config) -> anyhow::Result<()> {
    let session = persist::load(state_path, config)?;
    let store = backup_store(state_path, &session)?;

    let snapshots = store.list()?;
    if snapshots.is_empty() {
        println!("No snapshots.");
        return Ok(());
    }
    for snapshot in snapshots {
        println!(
            "{}  {}  {}",
            snapshot.id, snapshot.created_at, snapshot.project.name
        );
    }
    Ok(())
}

fn cmd_restore(state_path: &PathBuf, config: Config, id: Uuid) -> anyhow::Result<()> {
    let session = persist::load(state_path, config.clone())?;
    let store = backup_store(state_path, &session)?;

    let project = store.restore(id)?;
    let restored = Session::with_project(project, config);
    persist::save(&restored, state_path)?;

    println!(
        "Restored project '{}' from {}",
        restored.project().name,
        id
    );
    Ok(())
}

/// Backups live next to the session state file.
fn backup_store(state_path: &PathBuf, session: &Session) -> anyhow::Result<BackupStore> {
    let dir = state_path
        .parent()
        .map(|p| p.join("backups"))
        .unwrap_or_else(|| PathBuf::from("backups"));
    Ok(BackupStore::open(
        dir,
        session.config().backup.max_snapshots,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["webforge", "compose"]);
        assert!(args.state.is_none());
        assert!(matches!(args.command, Command::Compose { output: None }));
    }

    #[test]
    fn test_args_with_state_override() {
        let args = Args::parse_from(["webforge", "--state", "s.json", "init", "--name", "shop"]);
        assert_eq!(args.state, Some(PathBuf::from("s.json")));
        assert!(matches!(args.command, Command::Init { name: Some(n), .. } if n == "shop"));
    }

    #[test]
    fn test_restore_parses_uuid() {
        let id = Uuid::new_v4().to_string();
        let args = Args::parse_from(["webforge", "restore", &id]);
        assert!(matches!(args.command, Command::Restore { .. }));
    }
}
