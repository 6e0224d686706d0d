//! Manifest descriptor synthesis
//!
//! The two manifest schema versions are structurally incompatible, so
//! each gets a closed record type exposing only the fields valid for
//! that version. Cross-version field leakage is unrepresentable by
//! construction.

use std::collections::BTreeMap;

use serde::Serialize;

use crx_options::{BuildOption, Feature, ManifestVersion, Options};

use crate::names;
use crate::versions;

/// A synthesized manifest, tagged by schema version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ManifestDescriptor {
    V2(ManifestV2),
    V3(ManifestV3),
}

impl ManifestDescriptor {
    pub fn version(&self) -> ManifestVersion {
        match self {
            ManifestDescriptor::V2(_) => ManifestVersion::V2,
            ManifestDescriptor::V3(_) => ManifestVersion::V3,
        }
    }

    /// Serialize with 2-space indentation, as written to disk.
    pub fn to_pretty_json(&self) -> String {
        // Closed records of strings, maps, and bools cannot fail to
        // serialize.
        serde_json::to_string_pretty(self).expect("manifest descriptor serializes")
    }
}

/// Popup binding shared by V2 `browser_action` and V3 `action`.
///
/// Emitted even when no popup was selected, as an empty stub object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopupAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_popup: Option<String>,
}

/// V2 background entry: page-scoped scripts, never persistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundV2 {
    pub scripts: Vec<String>,
    pub persistent: bool,
}

/// V3 background entry: a single service worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundV3 {
    pub service_worker: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Content script registration, identical across versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentScript {
    pub matches: Vec<String>,
    pub js: Vec<String>,
}

/// V3 options surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsUi {
    pub page: String,
    pub open_in_tab: bool,
}

/// Closed record for a manifest V2 document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestV2 {
    pub manifest_version: u32,
    pub name: String,
    pub description: String,
    pub version: String,
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<BTreeMap<String, String>>,
    pub browser_action: PopupAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_scripts: Option<Vec<ContentScript>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtools_page: Option<String>,
}

/// Closed record for a manifest V3 document.
///
/// Deliberately has no devtools field: a selected devtools feature is
/// dropped under V3 rather than reported as a conflict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestV3 {
    pub manifest_version: u32,
    pub name: String,
    pub description: String,
    pub version: String,
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<BTreeMap<String, String>>,
    pub action: PopupAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundV3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_scripts: Option<Vec<ContentScript>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_ui: Option<OptionsUi>,
}

/// Synthesize the manifest descriptor for the given options.
///
/// Deterministic and total: valid normalized options always produce a
/// manifest. Script filenames referenced here always use the runtime
/// `.js` extension regardless of the authoring language; the file plan
/// may author `.ts` sources that the user compiles (see the generated
/// next steps).
pub fn synthesize(options: &Options) -> ManifestDescriptor {
    tracing::debug!(version = %options.manifest_version, "synthesizing manifest");
    match options.manifest_version {
        ManifestVersion::V2 => ManifestDescriptor::V2(manifest_v2(options)),
        ManifestVersion::V3 => ManifestDescriptor::V3(manifest_v3(options)),
    }
}

fn manifest_v2(options: &Options) -> ManifestV2 {
    ManifestV2 {
        manifest_version: 2,
        name: options.name.clone(),
        description: options.description.clone(),
        version: versions::INITIAL_VERSION.to_string(),
        permissions: options.permissions.clone(),
        icons: icon_map(options),
        browser_action: popup_action(options),
        background: options.has_feature(Feature::Background).then(|| BackgroundV2 {
            scripts: vec![names::BACKGROUND_JS.to_string()],
            persistent: false,
        }),
        content_scripts: content_scripts(options),
        options_page: options
            .has_feature(Feature::Options)
            .then(|| names::OPTIONS_HTML.to_string()),
        devtools_page: options
            .has_feature(Feature::Devtools)
            .then(|| names::DEVTOOLS_HTML.to_string()),
    }
}

fn manifest_v3(options: &Options) -> ManifestV3 {
    ManifestV3 {
        manifest_version: 3,
        name: options.name.clone(),
        description: options.description.clone(),
        version: versions::INITIAL_VERSION.to_string(),
        permissions: options.permissions.clone(),
        icons: icon_map(options),
        action: popup_action(options),
        background: options.has_feature(Feature::Background).then(|| BackgroundV3 {
            service_worker: names::BACKGROUND_JS.to_string(),
            kind: options
                .has_build_option(BuildOption::Esmodules)
                .then(|| "module".to_string()),
        }),
        content_scripts: content_scripts(options),
        options_ui: options.has_feature(Feature::Options).then(|| OptionsUi {
            page: names::OPTIONS_HTML.to_string(),
            open_in_tab: true,
        }),
    }
}

fn popup_action(options: &Options) -> PopupAction {
    PopupAction {
        default_popup: options
            .has_feature(Feature::Popup)
            .then(|| names::POPUP_HTML.to_string()),
    }
}

fn icon_map(options: &Options) -> Option<BTreeMap<String, String>> {
    if options.icons.is_empty() {
        return None;
    }
    Some(
        options
            .icons
            .iter()
            .map(|(size, path)| (size.key().to_string(), path.clone()))
            .collect(),
    )
}

fn content_scripts(options: &Options) -> Option<Vec<ContentScript>> {
    options.has_feature(Feature::Content).then(|| {
        vec![ContentScript {
            matches: vec![names::ALL_URLS.to_string()],
            js: vec![names::CONTENT_JS.to_string()],
        }]
    })
}
