//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// crx - Scaffold browser extension projects
#[derive(Parser, Debug)]
#[command(name = "crx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a new browser extension project
    ///
    /// Creates a fresh project directory containing manifest.json,
    /// the selected feature sources, and optionally package.json.
    ///
    /// Examples:
    ///   crx new "My Extension" -p storage -f popup
    ///   crx new demo --interactive
    ///   crx new demo -m 2 -f devtools -p tabs
    New {
        /// Extension name (also used as the project directory)
        name: Option<String>,

        /// Extension description
        #[arg(short, long)]
        description: Option<String>,

        /// Target manifest schema version (2 or 3)
        #[arg(short, long)]
        manifest_version: Option<String>,

        /// Permissions to request (repeatable)
        #[arg(short, long = "permission")]
        permissions: Vec<String>,

        /// Features to scaffold: background, content, options,
        /// devtools, popup (repeatable)
        #[arg(short, long = "feature")]
        features: Vec<String>,

        /// Popup template: html, typescript, or react
        #[arg(long)]
        popup_language: Option<String>,

        /// Background script language: javascript or typescript
        #[arg(long)]
        background_language: Option<String>,

        /// Content script language: javascript or typescript
        #[arg(long)]
        content_language: Option<String>,

        /// Icon entry as SIZE=PATH, sizes 16/48/128 (repeatable)
        #[arg(long = "icon", value_name = "SIZE=PATH")]
        icons: Vec<String>,

        /// Build tooling: package, bundler-webpack, bundler-rollup,
        /// jquery-npm, jquery-cdn, esmodules, or none (repeatable)
        #[arg(short, long = "build-option")]
        build_options: Vec<String>,

        /// Place generated sources under a src/ folder
        #[arg(long)]
        src_folder: bool,

        /// Interactive mode for guided setup
        #[arg(short, long)]
        interactive: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
