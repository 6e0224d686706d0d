//! New command implementation
//!
//! Turns CLI flags (or the interactive prompt result) into a raw
//! option bag, runs the synthesis pipeline, and hands the outputs to
//! the project writer.

use std::path::Path;

use colored::Colorize;

use crx_fs::ProjectWriter;
use crx_options::{IconSize, RawOptions, normalize};
use crx_synth::{build_plan, generate_steps, render_todo, resolve, synthesize};

use crate::error::{CliError, Result};

/// Flag values collected by clap for `crx new`.
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manifest_version: Option<String>,
    pub permissions: Vec<String>,
    pub features: Vec<String>,
    pub popup_language: Option<String>,
    pub background_language: Option<String>,
    pub content_language: Option<String>,
    pub icons: Vec<String>,
    pub build_options: Vec<String>,
    pub src_folder: bool,
}

impl NewArgs {
    /// Parse flag strings into a raw option bag.
    pub fn into_raw(self) -> Result<RawOptions> {
        let mut raw = RawOptions {
            name: self.name,
            description: self.description,
            use_source_folder: self.src_folder,
            permissions: self.permissions,
            ..RawOptions::default()
        };

        if let Some(version) = self.manifest_version {
            raw.manifest_version = Some(version.parse()?);
        }
        for feature in self.features {
            raw.features.push(feature.parse()?);
        }
        if let Some(language) = self.popup_language {
            raw.popup_language = Some(language.parse()?);
        }
        if let Some(language) = self.background_language {
            raw.background_language = Some(language.parse()?);
        }
        if let Some(language) = self.content_language {
            raw.content_language = Some(language.parse()?);
        }
        for icon in self.icons {
            raw.icons.push(parse_icon(&icon)?);
        }
        for option in self.build_options {
            raw.build_options.push(option.parse()?);
        }
        Ok(raw)
    }
}

fn parse_icon(entry: &str) -> Result<(IconSize, String)> {
    let (size, path) = entry
        .split_once('=')
        .ok_or_else(|| CliError::user(format!("Invalid icon '{}': expected SIZE=PATH", entry)))?;
    Ok((size.parse::<IconSize>()?, path.to_string()))
}

/// Run the new command against an already-collected raw option bag.
///
/// The project directory is created under `parent`, named after the
/// extension.
pub fn run_new(parent: &Path, raw: RawOptions) -> Result<()> {
    let options = normalize(raw)?;

    let manifest = synthesize(&options);
    let plan = build_plan(&options, &manifest);
    let package = resolve(&options, None);
    let steps = generate_steps(&options);

    let root = parent.join(&options.name);
    println!(
        "{} Scaffolding {} (manifest v{})...",
        "=>".blue().bold(),
        options.name.cyan(),
        options.manifest_version
    );

    ProjectWriter::new(&root).emit(&plan, package.as_ref(), &render_todo(&steps))?;

    println!(
        "{} Created {} with {} files.",
        "OK".green().bold(),
        root.display().to_string().cyan(),
        plan.len() + package.is_some() as usize + 1
    );
    println!();
    println!("{}", "Next steps:".bold());
    for (index, step) in steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    Ok(())
}
