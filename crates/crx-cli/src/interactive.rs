//! Interactive prompts for the new command
//!
//! Uses dialoguer for terminal-based interactive selection.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crx_options::{BuildChoice, Feature, IconSize, RawOptions};

use crate::error::Result;

/// Manifest versions offered, newest first.
const MANIFEST_VERSIONS: &[&str] = &["3", "2"];

/// Common permissions offered in the multi-select.
const PERMISSIONS: &[&str] = &[
    "storage",
    "activeTab",
    "tabs",
    "notifications",
    "alarms",
    "contextMenus",
    "cookies",
    "bookmarks",
    "history",
    "downloads",
    "webRequest",
    "clipboardWrite",
];

const FEATURES: &[&str] = &["background", "content", "options", "devtools", "popup"];

const SCRIPT_LANGUAGES: &[&str] = &["javascript", "typescript"];

const POPUP_LANGUAGES: &[&str] = &["html", "typescript", "react"];

/// Build options, with the cancelling "none" sentinel first.
const BUILD_OPTIONS: &[&str] = &[
    "none",
    "package",
    "bundler-webpack",
    "bundler-rollup",
    "jquery-npm",
    "jquery-cdn",
    "esmodules",
];

const ICON_SIZES: &[&str] = &["16", "48", "128"];

/// Run the interactive new-project prompts.
///
/// Returns `None` when the user declines the final confirmation; the
/// synthesis core is never invoked in that case.
pub fn interactive_new(default_name: &str) -> Result<Option<RawOptions>> {
    println!();

    let name: String = Input::new()
        .with_prompt("Extension name")
        .default(if default_name.is_empty() {
            "my-extension".to_string()
        } else {
            default_name.to_string()
        })
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description")
        .interact_text()?;

    let version_idx = Select::new()
        .with_prompt("Manifest version")
        .items(MANIFEST_VERSIONS)
        .default(0)
        .interact()?;
    let manifest_version = MANIFEST_VERSIONS[version_idx].parse().ok();

    let permission_indices = MultiSelect::new()
        .with_prompt("Permissions (space to toggle, enter to confirm)")
        .items(PERMISSIONS)
        .interact()?;
    let permissions: Vec<String> = permission_indices
        .iter()
        .map(|&i| PERMISSIONS[i].to_string())
        .collect();

    let feature_indices = MultiSelect::new()
        .with_prompt("Features (space to toggle, enter to confirm)")
        .items(FEATURES)
        .interact()?;
    let features: Vec<Feature> = feature_indices
        .iter()
        .filter_map(|&i| FEATURES[i].parse().ok())
        .collect();

    let mut raw = RawOptions {
        name: Some(name),
        description: Some(description),
        manifest_version,
        permissions,
        features,
        ..RawOptions::default()
    };

    // Per-feature language prompts, only for selected features.
    if raw.features.contains(&Feature::Background) {
        let idx = Select::new()
            .with_prompt("Background script language")
            .items(SCRIPT_LANGUAGES)
            .default(0)
            .interact()?;
        raw.background_language = SCRIPT_LANGUAGES[idx].parse().ok();
    }
    if raw.features.contains(&Feature::Content) {
        let idx = Select::new()
            .with_prompt("Content script language")
            .items(SCRIPT_LANGUAGES)
            .default(0)
            .interact()?;
        raw.content_language = SCRIPT_LANGUAGES[idx].parse().ok();
    }
    if raw.features.contains(&Feature::Popup) {
        let idx = Select::new()
            .with_prompt("Popup template")
            .items(POPUP_LANGUAGES)
            .default(0)
            .interact()?;
        raw.popup_language = POPUP_LANGUAGES[idx].parse().ok();
    }

    // Icons: blank paths are dropped during normalization.
    let add_icons = Confirm::new()
        .with_prompt("Add icon paths?")
        .default(false)
        .interact()?;
    if add_icons {
        for size in ICON_SIZES {
            let path: String = Input::new()
                .with_prompt(format!("Path for {}x{} icon (blank to skip)", size, size))
                .allow_empty(true)
                .interact_text()?;
            if let Ok(icon_size) = size.parse::<IconSize>() {
                raw.icons.push((icon_size, path));
            }
        }
    }

    let build_indices = MultiSelect::new()
        .with_prompt("Build tooling (space to toggle, enter to confirm)")
        .items(BUILD_OPTIONS)
        .interact()?;
    raw.build_options = build_indices
        .iter()
        .filter_map(|&i| BUILD_OPTIONS[i].parse::<BuildChoice>().ok())
        .collect();

    raw.use_source_folder = Confirm::new()
        .with_prompt("Place sources under src/?")
        .default(false)
        .interact()?;

    // Show summary and confirm
    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  {}: {}",
        "Name".dimmed(),
        raw.name.as_deref().unwrap_or("").cyan()
    );
    println!(
        "  {}: {}",
        "Manifest".dimmed(),
        MANIFEST_VERSIONS[version_idx].cyan()
    );
    print_list("Permissions", &raw.permissions);
    let features: Vec<String> = raw.features.iter().map(|f| f.to_string()).collect();
    print_list("Features", &features);
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Create project?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(None);
    }
    Ok(Some(raw))
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {}: {}", label.dimmed(), "(none)".dimmed());
    } else {
        println!("  {}: {}", label.dimmed(), items.join(", ").cyan());
    }
}
