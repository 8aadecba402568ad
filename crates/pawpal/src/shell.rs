// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawpal shell` command implementation.
//!
//! An interactive REPL with the current pet. Plain lines are chat
//! messages; slash commands run care actions. The care timers (autosave
//! and play reminder) run in the background for as long as the shell is
//! open and save once more on exit.

use std::path::PathBuf;

use colored::Colorize;
use pawpal_agent::{ChatSession, PawpalApp, SharedCare, install_signal_handler, spawn_care_timers};
use pawpal_core::{PawpalError, Speaker};
use pawpal_sim::ActionOutcome;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use crate::care::apply;

/// What a line typed into the shell asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput<'a> {
    Empty,
    Quit,
    Help,
    History,
    /// Save the pet's last reply as a memory.
    Remember,
    /// A care action or `mood`, without the slash.
    Care(&'a str),
    Unknown(&'a str),
    Chat(&'a str),
}

const CARE_COMMANDS: &[&str] = &["feed", "play", "treat", "bath", "sleep", "walk", "mood"];

pub fn parse_input(line: &str) -> ShellInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellInput::Empty;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ShellInput::Chat(trimmed);
    };
    let verb = command.split_whitespace().next().unwrap_or_default();
    match verb {
        "quit" | "exit" => ShellInput::Quit,
        "help" => ShellInput::Help,
        "history" => ShellInput::History,
        "remember" => ShellInput::Remember,
        v if CARE_COMMANDS.contains(&v) => ShellInput::Care(command),
        _ => ShellInput::Unknown(trimmed),
    }
}

/// Runs the `pawpal shell` REPL for the current pet.
pub async fn run_shell(app: &PawpalApp) -> Result<(), PawpalError> {
    let pet = app.state().require_current_pet().await?;
    let mut chat = app.chat_with(pet.clone()).await?;
    let care = app.care_for(pet.clone()).await?;
    if let Err(e) = care.register_schedule().await {
        warn!(error = %e, "failed to register feeding reminders");
    }
    let care = care.into_shared();

    let cancel = install_signal_handler();
    let timers = spawn_care_timers(care.clone(), &app.config().simulation, cancel.clone());

    let mut rl = DefaultEditor::new()
        .map_err(|e| PawpalError::Internal(format!("failed to initialize readline: {e}")))?;
    let history_path = history_file();
    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    println!("{}", format!("{} shell", app.config().app.name).bold().green());
    println!(
        "Chatting with {}. Type {} for commands, {} to exit.\n",
        pet.display_name().bold(),
        "/help".yellow(),
        "/quit".yellow()
    );
    if let Some(last) = chat.history().last() {
        print_turn(pet.display_name(), &last.from, &last.text);
    }

    let prompt = format!("{}> ", "you".green());
    loop {
        if cancel.is_cancelled() {
            break;
        }
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        let input = parse_input(&line);
        if !matches!(input, ShellInput::Empty) {
            let _ = rl.add_history_entry(line.trim());
        }
        match input {
            ShellInput::Empty => {}
            ShellInput::Quit => break,
            ShellInput::Help => print_help(),
            ShellInput::History => {
                for turn in chat.history() {
                    print_turn(pet.display_name(), &turn.from, &turn.text);
                }
            }
            ShellInput::Remember => remember_last(&chat).await,
            ShellInput::Care(action) => care_action(&care, &mut chat, action).await,
            ShellInput::Unknown(cmd) => {
                eprintln!("{}: unknown command {cmd} (try /help)", "error".red());
            }
            ShellInput::Chat(message) => match chat.send(message).await {
                Ok(reply) => {
                    if let Some(source) = &reply.source {
                        debug!(%source, "reply");
                    }
                    print_turn(pet.display_name(), &reply.turn.from, &reply.turn.text);
                }
                Err(e) => eprintln!("{}: {e}", "error".red()),
            },
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(path) {
            debug!(error = %e, "could not save shell history");
        }
    }

    cancel.cancel();
    if let Err(e) = timers.await {
        warn!(error = %e, "care timer task ended abnormally");
    }
    println!("{}", format!("Bye from {}! 🐾", pet.display_name()).dimmed());
    Ok(())
}

fn history_file() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("pawpal").join("shell_history.txt"))
}

async fn care_action(care: &SharedCare, chat: &mut ChatSession, action: &str) {
    let outcome = {
        let mut session = care.lock().await;
        apply(&mut session, action).await
    };
    match outcome {
        Ok(Some(ActionOutcome::Performed(done))) => {
            if let Some(milestone) = done.milestone {
                chat.note(&milestone.message()).await;
            }
        }
        Ok(_) => {}
        Err(e) => eprintln!("{}: {e}", "error".red()),
    }
}

async fn remember_last(chat: &ChatSession) {
    let Some(turn) = chat.history().iter().rev().find(|t| t.from == Speaker::Pet) else {
        println!("Nothing to remember yet.");
        return;
    };
    match chat.promote(&turn.id).await {
        Ok(_) => println!("{}", "Saved to memories 💾".dimmed()),
        Err(e) => eprintln!("{}: {e}", "error".red()),
    }
}

fn print_turn(pet_name: &str, from: &Speaker, text: &str) {
    match from {
        Speaker::Pet => println!("{} {text}", format!("{pet_name}:").cyan().bold()),
        Speaker::User => println!("{} {text}", "you:".green()),
        Speaker::System => println!("{}", text.dimmed()),
    }
}

fn print_help() {
    println!("  {}  feed the pet", "/feed".yellow());
    println!("  {}  play (tricks: fetch, roll-over, play-dead)", "/play [trick]".yellow());
    println!("  {}  give a treat", "/treat".yellow());
    println!("  {}  bath time", "/bath".yellow());
    println!("  {}  nap", "/sleep".yellow());
    println!("  {}  go for a walk", "/walk".yellow());
    println!("  {}  how the pet is feeling", "/mood".yellow());
    println!("  {}  show the conversation", "/history".yellow());
    println!("  {}  save the last reply as a memory", "/remember".yellow());
    println!("  {}  leave the shell", "/quit".yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_chat() {
        assert_eq!(parse_input("  hello there "), ShellInput::Chat("hello there"));
        assert_eq!(parse_input("   "), ShellInput::Empty);
    }

    #[test]
    fn slash_commands() {
        assert_eq!(parse_input("/quit"), ShellInput::Quit);
        assert_eq!(parse_input("/exit"), ShellInput::Quit);
        assert_eq!(parse_input("/play roll-over"), ShellInput::Care("play roll-over"));
        assert_eq!(parse_input("/mood"), ShellInput::Care("mood"));
        assert_eq!(parse_input("/remember"), ShellInput::Remember);
        assert_eq!(parse_input("/dance"), ShellInput::Unknown("/dance"));
    }
}
