//! Fully-resolved option types consumed by the generators
//!
//! Each enum mirrors one prompt in the interactive flow and carries
//! `FromStr`/`Display` so CLI flags and prompt labels round-trip
//! through the same parsing path.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Target manifest schema version.
///
/// V2 and V3 manifests are structurally incompatible; the synthesizer
/// branches on this once and builds a closed record for the chosen
/// version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ManifestVersion {
    V2,
    #[default]
    V3,
}

impl ManifestVersion {
    /// Numeric value written into the `manifest_version` field.
    pub fn as_u32(&self) -> u32 {
        match self {
            ManifestVersion::V2 => 2,
            ManifestVersion::V3 => 3,
        }
    }
}

impl FromStr for ManifestVersion {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "2" | "v2" | "V2" => Ok(ManifestVersion::V2),
            "3" | "v3" | "V3" => Ok(ManifestVersion::V3),
            _ => Err(Error::unrecognized("manifest version", s)),
        }
    }
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// An optional extension surface the user can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Background,
    Content,
    Options,
    Devtools,
    Popup,
}

impl Feature {
    /// Canonical processing order for the file plan.
    pub const ORDER: [Feature; 5] = [
        Feature::Background,
        Feature::Content,
        Feature::Options,
        Feature::Devtools,
        Feature::Popup,
    ];
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "background" => Ok(Feature::Background),
            "content" => Ok(Feature::Content),
            "options" => Ok(Feature::Options),
            "devtools" => Ok(Feature::Devtools),
            "popup" => Ok(Feature::Popup),
            _ => Err(Error::unrecognized("feature", s)),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Feature::Background => "background",
            Feature::Content => "content",
            Feature::Options => "options",
            Feature::Devtools => "devtools",
            Feature::Popup => "popup",
        };
        write!(f, "{}", s)
    }
}

/// Authoring language for background and content scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    #[default]
    Javascript,
    Typescript,
}

impl ScriptLanguage {
    /// Source file extension for this language.
    pub fn extension(&self) -> &'static str {
        match self {
            ScriptLanguage::Javascript => "js",
            ScriptLanguage::Typescript => "ts",
        }
    }

    /// Human-readable label used in generated boilerplate comments.
    pub fn label(&self) -> &'static str {
        match self {
            ScriptLanguage::Javascript => "JavaScript",
            ScriptLanguage::Typescript => "TypeScript",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, ScriptLanguage::Typescript)
    }
}

impl FromStr for ScriptLanguage {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" => Ok(ScriptLanguage::Javascript),
            "typescript" | "ts" => Ok(ScriptLanguage::Typescript),
            _ => Err(Error::unrecognized("script language", s)),
        }
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptLanguage::Javascript => write!(f, "javascript"),
            ScriptLanguage::Typescript => write!(f, "typescript"),
        }
    }
}

/// Popup template flavor. Meaningful only when the popup feature is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupLanguage {
    #[default]
    Html,
    Typescript,
    React,
}

impl PopupLanguage {
    pub fn is_typescript_flavored(&self) -> bool {
        matches!(self, PopupLanguage::Typescript | PopupLanguage::React)
    }
}

impl FromStr for PopupLanguage {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(PopupLanguage::Html),
            "typescript" | "ts" => Ok(PopupLanguage::Typescript),
            "react" | "tsx" => Ok(PopupLanguage::React),
            _ => Err(Error::unrecognized("popup language", s)),
        }
    }
}

impl fmt::Display for PopupLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopupLanguage::Html => write!(f, "html"),
            PopupLanguage::Typescript => write!(f, "typescript"),
            PopupLanguage::React => write!(f, "react"),
        }
    }
}

/// Build tooling selections.
///
/// The raw prompt additionally offers a "none" sentinel; that sentinel
/// never survives normalization, so this enum only carries real
/// selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildOption {
    Package,
    BundlerWebpack,
    BundlerRollup,
    JqueryNpm,
    JqueryCdn,
    Esmodules,
}

impl FromStr for BuildOption {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "package" => Ok(BuildOption::Package),
            "bundler-webpack" | "webpack" => Ok(BuildOption::BundlerWebpack),
            "bundler-rollup" | "rollup" => Ok(BuildOption::BundlerRollup),
            "jquery-npm" => Ok(BuildOption::JqueryNpm),
            "jquery-cdn" => Ok(BuildOption::JqueryCdn),
            "esmodules" | "es-modules" => Ok(BuildOption::Esmodules),
            _ => Err(Error::unrecognized("build option", s)),
        }
    }
}

impl fmt::Display for BuildOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuildOption::Package => "package",
            BuildOption::BundlerWebpack => "bundler-webpack",
            BuildOption::BundlerRollup => "bundler-rollup",
            BuildOption::JqueryNpm => "jquery-npm",
            BuildOption::JqueryCdn => "jquery-cdn",
            BuildOption::Esmodules => "esmodules",
        };
        write!(f, "{}", s)
    }
}

/// Icon sizes accepted by both manifest versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IconSize {
    Px16,
    Px48,
    Px128,
}

impl IconSize {
    /// The manifest key for this size.
    pub fn key(&self) -> &'static str {
        match self {
            IconSize::Px16 => "16",
            IconSize::Px48 => "48",
            IconSize::Px128 => "128",
        }
    }
}

impl FromStr for IconSize {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "16" => Ok(IconSize::Px16),
            "48" => Ok(IconSize::Px48),
            "128" => Ok(IconSize::Px128),
            _ => Err(Error::unrecognized("icon size", s)),
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Fully-resolved, immutable option set.
///
/// Produced exclusively by [`crate::normalize`]; the generators assume
/// every invariant documented there (trimmed non-empty name and
/// description, non-empty permissions, canonically ordered features,
/// sentinel-free build options).
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub name: String,
    pub description: String,
    pub manifest_version: ManifestVersion,
    pub permissions: Vec<String>,
    pub icons: BTreeMap<IconSize, String>,
    pub features: Vec<Feature>,
    pub popup_language: PopupLanguage,
    pub background_language: ScriptLanguage,
    pub content_language: ScriptLanguage,
    pub use_source_folder: bool,
    pub build_options: Vec<BuildOption>,
}

impl Options {
    /// Whether the given feature was selected.
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Whether the given build option was selected.
    pub fn has_build_option(&self, option: BuildOption) -> bool {
        self.build_options.contains(&option)
    }

    /// Whether any selected feature is authored in TypeScript (or
    /// React, which compiles through TypeScript).
    ///
    /// Drives the conditional TypeScript additions in the dependency
    /// resolver.
    pub fn wants_typescript(&self) -> bool {
        (self.has_feature(Feature::Background) && self.background_language.is_typescript())
            || (self.has_feature(Feature::Content) && self.content_language.is_typescript())
            || (self.has_feature(Feature::Popup) && self.popup_language.is_typescript_flavored())
    }

    /// Relative path prefix for non-manifest artifacts.
    pub fn source_prefix(&self) -> &'static str {
        if self.use_source_folder { "src/" } else { "" }
    }

    /// Default npm package name: extension name lower-cased with
    /// whitespace runs replaced by hyphens.
    pub fn package_name(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}
