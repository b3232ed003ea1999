//! Interactive shell.
//!
//! Reads one command per line with history and command-name completion.
//! Lines are split on whitespace and parsed with the same clap definitions
//! as the one-shot commands. Errors are printed and the loop continues.

use crate::{commands, output, Commands};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ppm_core::Store;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;

const PROMPT: &str = "ppm > ";

/// Names offered by tab completion.
const COMMAND_NAMES: &[&str] = &[
    "add", "update", "list", "get", "rm", "bye", "exit", "help", "save",
];

/// One shell line.
#[derive(Parser)]
#[command(name = "ppm", no_binary_name = true, disable_version_flag = true)]
#[command(about = "The following commands are available:")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Store(Commands),

    /// Exit this program
    #[command(alias = "exit")]
    Bye,
}

fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
}

fn complete_command(word: &str) -> Vec<&'static str> {
    COMMAND_NAMES
        .iter()
        .copied()
        .filter(|name| name.starts_with(word))
        .collect()
}

/// Completes the command name at the start of the line.
struct ShellHelper;

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let start = head.len() - head.trim_start().len();
        let word = &head[start..];
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = complete_command(word)
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{name} "),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

/// Runs the interactive shell until `bye`, `exit`, Ctrl+C or Ctrl+D.
///
/// With `autosave`, the store is saved after every successful change.
/// Otherwise changes are only written by an explicit `save`.
pub fn run(store: &mut Store, autosave: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper));

    let prompt = PROMPT.cyan().to_string();
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(trimmed) {
                    debug!(error = %e, "failed to record history entry");
                }

                match parse_line(trimmed) {
                    Ok(ShellCommand::Bye) => break,
                    Ok(ShellCommand::Store(command)) => execute(store, command, autosave),
                    Err(e) => e.print()?,
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn execute(store: &mut Store, command: Commands, autosave: bool) {
    let mutates = command.mutates();
    if let Err(e) = commands::run(store, command) {
        output::error(&*e);
        return;
    }
    if autosave && mutates {
        if let Err(e) = store.save() {
            output::error(&e);
        }
    }
}
