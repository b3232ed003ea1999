//! ppm CLI
//!
//! Command-line password manager. Entries are kept in one encrypted file,
//! `$HOME/.ppm` unless `--file` says otherwise.
//!
//! # Usage
//!
//! - `ppm [OPTIONS] <COMMAND>` runs one command, saves if it changed
//!   anything, and exits
//! - `ppm [OPTIONS]` starts the interactive shell
//!
//! # Commands
//!
//! - `add` - Add a new password
//! - `update` - Change an existing password
//! - `get` - Print one password
//! - `list` - List all passwords
//! - `rm` - Remove a password
//! - `save` - Write the password file

mod commands;
mod output;
mod passphrase;
mod shell;

use clap::{Parser, Subcommand};
use ppm_core::{Config, Store};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

/// Command-line password manager.
#[derive(Parser)]
#[command(name = "ppm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cipher key used for encryption and decryption (prompted if omitted)
    #[arg(short, long)]
    key: Option<String>,

    /// File for storing passwords (default: $HOME/.ppm)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Save after every change in the interactive shell
    #[arg(short, long)]
    save: bool,

    /// Don't use colors
    #[arg(short = 'c', long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Store commands shared by one-shot mode and the interactive shell.
#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new password
    Add {
        /// Application or user name
        app: String,
        /// Password to store
        password: String,
    },

    /// Change an existing password
    Update {
        /// Application or user name
        app: String,
        /// New password
        password: String,
    },

    /// List all passwords
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the password for one application
    Get {
        /// Application or user name
        app: String,
    },

    /// Remove a password
    Rm {
        /// Application or user name
        app: String,
    },

    /// Save the list of passwords
    Save,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let passphrase = match cli.key {
        Some(key) => Zeroizing::new(key),
        None => passphrase::read("cipher key: ")?,
    };

    let mut config = Config::new();
    if let Some(file) = cli.file {
        config = config.path(file);
    }

    let mut store = match Store::open_with_config(config, &passphrase) {
        Ok(store) => store,
        Err(e) => {
            output::error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let code = match cli.command {
        None => {
            shell::run(&mut store, cli.save)?;
            ExitCode::SUCCESS
        }
        Some(command) => {
            if commands::run_once(&mut store, command) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    store.close();
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_one_shot_command() {
        let cli = Cli::try_parse_from(["ppm", "-k", "secret", "-f", "/tmp/p", "add", "github", "pw1"])
            .unwrap();
        assert_eq!(cli.key.as_deref(), Some("secret"));
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/p")));
        assert!(matches!(
            cli.command,
            Some(Commands::Add { ref app, ref password }) if app == "github" && password == "pw1"
        ));
    }

    #[test]
    fn no_command_means_shell() {
        let cli = Cli::try_parse_from(["ppm", "-s", "-c"]).unwrap();
        assert!(cli.save);
        assert!(cli.no_color);
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_requires_two_arguments() {
        assert!(Cli::try_parse_from(["ppm", "add", "github"]).is_err());
    }
}
