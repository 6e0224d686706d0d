//! crx scaffold generator CLI
//!
//! The command-line interface for scaffolding browser extension
//! projects.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::NewArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} browser extension scaffold generator", "crx".green().bold());
            println!();
            println!("Run {} for available commands.", "crx --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::New {
            name,
            description,
            manifest_version,
            permissions,
            features,
            popup_language,
            background_language,
            content_language,
            icons,
            build_options,
            src_folder,
            interactive,
        } => {
            let cwd = std::env::current_dir()?;
            if interactive {
                match interactive::interactive_new(name.as_deref().unwrap_or(""))? {
                    Some(raw) => commands::run_new(&cwd, raw),
                    None => {
                        println!("{}", "Aborted.".yellow());
                        Ok(())
                    }
                }
            } else {
                let args = NewArgs {
                    name,
                    description,
                    manifest_version,
                    permissions,
                    features,
                    popup_language,
                    background_language,
                    content_language,
                    icons,
                    build_options,
                    src_folder,
                };
                commands::run_new(&cwd, args.into_raw()?)
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "crx", &mut std::io::stdout());
            Ok(())
        }
    }
}
