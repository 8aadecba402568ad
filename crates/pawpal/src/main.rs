// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PawPal - a virtual pet companion for the terminal.
//!
//! This is the binary entry point: it loads configuration, opens storage,
//! wires the remote backends and dispatches subcommands.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod backup;
mod care;
mod notifier;
mod pets;
mod shell;
mod status;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use pawpal_agent::PawpalApp;
use pawpal_config::PawpalConfig;
use pawpal_core::{FeedingTime, NotificationScheduler, PawpalError, ResponseBackend, StorageAdapter};
use pawpal_openai::{OpenAiBackend, Provider};
use pawpal_storage::SqliteStorage;
use tracing::debug;

use crate::notifier::TerminalNotifier;

/// PawPal - a virtual pet companion for the terminal.
#[derive(Parser, Debug)]
#[command(name = "pawpal", version, about, long_about = None)]
struct Cli {
    /// Load this config file instead of the standard search path.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create, list, switch or delete pets.
    Pet {
        #[command(subcommand)]
        action: PetCommands,
    },
    /// Send one message to the current pet and print the reply.
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Interactive chat and care session with the current pet.
    Shell,
    /// Care for the current pet: feed, play [trick], treat, bath, sleep, walk or mood.
    Care {
        #[arg(required = true, num_args = 1..)]
        action: Vec<String>,
    },
    /// Show the current pet's stats.
    Status {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Manage the memory journal of the current pet.
    Memory {
        #[command(subcommand)]
        action: MemoryCommands,
    },
    /// Manage daily feeding reminders of the current pet.
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommands,
    },
    /// Export pets and memories as JSON.
    Export {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a JSON backup.
    Import { file: PathBuf },
    /// Delete all data.
    Reset {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum PetCommands {
    /// Create a pet and make it current.
    Create {
        name: String,
        #[arg(long, default_value = "dog")]
        species: String,
        /// Breed key, e.g. golden_retriever.
        #[arg(long)]
        breed: Option<String>,
        /// Comma-separated personality traits.
        #[arg(long, default_value = "")]
        traits: String,
        /// Comma-separated habits and favorite things.
        #[arg(long, default_value = "")]
        habits: String,
        /// Remember a pet that has passed away.
        #[arg(long)]
        memorial: bool,
        /// Art variant, e.g. dog_1 or cat_2.
        #[arg(long)]
        variant: Option<String>,
    },
    /// List pets; the current one is marked with `*`.
    List,
    /// Make another pet current.
    Switch { id: String },
    /// Delete a pet with its conversation and memories.
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum MemoryCommands {
    /// Add a memory.
    Add {
        #[arg(default_value = "")]
        text: String,
        #[arg(long)]
        photo: Option<String>,
        #[arg(long)]
        video: Option<String>,
    },
    /// List memories, newest first.
    List,
    /// Delete one memory.
    Delete { id: String },
    /// Save a conversation turn as a memory.
    Promote { turn_id: String },
}

#[derive(Subcommand, Debug)]
enum ScheduleCommands {
    /// Add a daily feeding time (HH:MM).
    Add { time: FeedingTime },
    /// List feeding times.
    List,
    /// Remove a feeding time by its listed position.
    Remove { position: usize },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => pawpal_config::load_and_validate_path(path),
        None => pawpal_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            pawpal_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let Some(command) = cli.command else {
        println!("pawpal: use --help for available commands");
        return;
    };

    if let Err(e) = run(command, config).await {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: PawpalConfig) -> Result<(), PawpalError> {
    let quiet = matches!(command, Commands::Status { json: true, .. } | Commands::Export { output: None });
    let app = build_app(config, quiet).await?;

    match command {
        Commands::Pet { action } => match action {
            PetCommands::Create {
                name,
                species,
                breed,
                traits,
                habits,
                memorial,
                variant,
            } => {
                let new = pets::NewPet {
                    name,
                    species,
                    breed,
                    traits,
                    habits,
                    memorial,
                    variant,
                };
                pets::create(&app, new).await
            }
            PetCommands::List => pets::list(&app).await,
            PetCommands::Switch { id } => pets::switch(&app, &id).await,
            PetCommands::Delete { id } => pets::delete(&app, &id).await,
        },
        Commands::Chat { message } => {
            let mut chat = app.chat().await?;
            let reply = chat.send(&message.join(" ")).await?;
            if let Some(source) = &reply.source {
                debug!(%source, turn_id = %reply.turn.id, "reply");
            }
            println!("{}", reply.turn.text);
            Ok(())
        }
        Commands::Shell => shell::run_shell(&app).await,
        Commands::Care { action } => care::run_care(&app, &action.join(" ")).await,
        Commands::Status { json, plain } => status::run_status(&app, json, plain).await,
        Commands::Memory { action } => match action {
            MemoryCommands::Add { text, photo, video } => {
                pets::add_memory(&app, &text, photo, video).await
            }
            MemoryCommands::List => pets::list_memories(&app).await,
            MemoryCommands::Delete { id } => pets::delete_memory(&app, &id).await,
            MemoryCommands::Promote { turn_id } => pets::promote(&app, &turn_id).await,
        },
        Commands::Schedule { action } => match action {
            ScheduleCommands::Add { time } => care::add_feeding_time(&app, time).await,
            ScheduleCommands::List => care::list_feeding_times(&app).await,
            ScheduleCommands::Remove { position } => {
                care::remove_feeding_time(&app, position).await
            }
        },
        Commands::Export { output } => backup::run_export(&app, output.as_deref()).await,
        Commands::Import { file } => backup::run_import(&app, &file).await,
        Commands::Reset { yes } => backup::run_reset(&app, yes).await,
    }
}

/// Opens storage and builds the backend chain: OpenAI, then Grok.
async fn build_app(config: PawpalConfig, quiet: bool) -> Result<PawpalApp, PawpalError> {
    let storage = SqliteStorage::new(config.storage.clone());
    storage.initialize().await?;
    let storage: Arc<dyn StorageAdapter> = Arc::new(storage);

    let mut backends: Vec<Arc<dyn ResponseBackend>> = Vec::new();
    for (provider, backend_config) in [
        (Provider::OpenAi, &config.openai),
        (Provider::Grok, &config.grok),
    ] {
        if backend_config.enabled {
            backends.push(Arc::new(OpenAiBackend::from_config(provider, backend_config)?));
        }
    }

    let notifier: Arc<dyn NotificationScheduler> = if quiet {
        Arc::new(TerminalNotifier::quiet())
    } else {
        Arc::new(TerminalNotifier::new())
    };
    Ok(PawpalApp::new(config, storage, backends, notifier))
}

/// Initialize tracing subscriber with the configured log level.
///
/// Logs go to stderr so that command output on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pawpal={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_care_with_trick() {
        let cli = Cli::try_parse_from(["pawpal", "care", "play", "roll-over"]).unwrap();
        match cli.command {
            Some(Commands::Care { action }) => assert_eq!(action.join(" "), "play roll-over"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn schedule_add_validates_time() {
        assert!(Cli::try_parse_from(["pawpal", "schedule", "add", "08:30"]).is_ok());
        assert!(Cli::try_parse_from(["pawpal", "schedule", "add", "25:00"]).is_err());
    }

    #[tokio::test]
    async fn build_app_without_backends_answers_locally() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PawpalConfig::default();
        config.storage.database_path = dir.path().join("t.db").to_string_lossy().into_owned();
        let app = build_app(config, true).await.unwrap();
        app.state()
            .create_pet(pawpal_core::PetProfile::new("Rex", "dog", true))
            .await
            .unwrap();
        let mut chat = app.chat().await.unwrap();
        let reply = chat.send("3 + 4").await.unwrap();
        assert_eq!(reply.turn.text, "3 + 4 = 7 💡");
    }
}
