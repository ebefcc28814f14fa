//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, prepares logging and
//! configuration, and hands off to the interactive session.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::config::Config;
use crate::core::controller::{run_chat, EndReason};
use crate::utils::logging::init_tracing;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ")"
);

#[derive(Parser)]
#[command(name = "chatline")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A line-oriented terminal client for a TCP chat server")]
#[command(
    long_about = "Chatline connects to a chat server over TCP and offers a numbered menu of \
global, private, and group chat, notifications, profile, and help.\n\n\
Configuration:\n\
  Settings are read from config.json, looked up in this order:\n\
  --config PATH, ./config.json, then the user config directory.\n\n\
Chat controls:\n\
  /menu             Leave global chat, profile, or help\n\
  /end              Leave a private chat\n\
  /leave            Leave a group chat (sends LEAVE_GROUP)\n\
  logout, exit, quit  Log out from the main menu\n\n\
Environment Variables:\n\
  CHATLINE_LOG      Log filter, e.g. chatline=debug"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of searching for config.json
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostics to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat client (default)
    Chat,
    /// Show the resolved configuration and where it was loaded from
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    init_tracing(args.log.as_deref())?;
    let (config, source) = Config::load(args.config.as_deref())?;
    info!(path = %source.display(), "Loaded configuration");

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Config => {
            config.print_all(&source);
            Ok(())
        }
        Commands::Chat => chat(config, &source).await,
    }
}

async fn chat(config: Config, source: &Path) -> Result<(), Box<dyn Error>> {
    info!(config = %source.display(), endpoint = %config.endpoint(), "Starting chat");
    let summary = run_chat(config).await;
    info!(reason = ?summary.reason, commands = summary.commands_sent, "Chat ended");
    if summary.reason == EndReason::Disconnected {
        return Err("connection closed by server".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests;
