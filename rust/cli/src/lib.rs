//! # Patience CLI Library
//!
//! Command-line interface for the patience solitaire engine. It is the
//! "rendering/input layer" the engine is designed against: commands resolve
//! typed input to card and pile identities, feed the session's abstract
//! events, and print the resulting table.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["patience", "deal", "--seed", "42"];
//! let code = patience_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive Klondike/Vegas game in the terminal
//! - `deal`: Deal a single layout and print it
//! - `cfg`: Display the resolved configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, PatienceCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["patience", "deal", "--seed", "42"];
/// let code = patience_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PatienceCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "");
                    write_or_exit!(err, "Patience Solitaire CLI");
                    write_or_exit!(err, "Usage: patience <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: patience --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                seed,
                vegas,
                draw_three,
                cumulative,
                log,
            } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(
                    seed,
                    vegas,
                    draw_three,
                    cumulative,
                    log,
                    out,
                    err,
                    &mut stdin_lock,
                ) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Deal { seed, vegas } => match handle_deal_command(seed, vegas, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
        },
    }
}
