//! Ordered file plan construction
//!
//! Builds the virtual artifact list for a scaffold: one source file
//! per selected feature (processed in canonical order), followed by
//! the manifest itself. Paths are relative to the project root; the
//! writer decides where that root lives.

use crx_options::{BuildOption, Feature, ManifestVersion, Options, PopupLanguage};

use crate::manifest::ManifestDescriptor;
use crate::names;
use crate::templates;

/// A single virtual file: path relative to the project root plus its
/// full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub relative_path: String,
    pub content: String,
}

impl FileArtifact {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// Ordered sequence of artifacts with unique paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePlan {
    artifacts: Vec<FileArtifact>,
}

impl FilePlan {
    pub fn push(&mut self, artifact: FileArtifact) {
        debug_assert!(
            !self.contains_path(&artifact.relative_path),
            "duplicate path in file plan: {}",
            artifact.relative_path
        );
        self.artifacts.push(artifact);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileArtifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.artifacts.iter().any(|a| a.relative_path == path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.relative_path.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FilePlan {
    type Item = &'a FileArtifact;
    type IntoIter = std::slice::Iter<'a, FileArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// Build the ordered file plan for the given options and manifest.
///
/// Non-manifest artifacts live under `src/` when the source folder is
/// requested; `manifest.json` is always placed at the project root.
/// Deterministic and total.
pub fn build_plan(options: &Options, manifest: &ManifestDescriptor) -> FilePlan {
    let mut plan = FilePlan::default();
    let prefix = options.source_prefix();
    let jquery_cdn = options.has_build_option(BuildOption::JqueryCdn);
    let esmodules = options.has_build_option(BuildOption::Esmodules);

    // Walk the canonical feature order rather than the selection
    // order, so the plan layout holds even for an `Options` value
    // built by hand.
    for feature in Feature::ORDER.into_iter().filter(|f| options.has_feature(*f)) {
        match feature {
            Feature::Background => {
                let path = format!("{prefix}background.{}", options.background_language.extension());
                plan.push(FileArtifact::new(
                    path,
                    templates::background_source(&options.name, options.background_language),
                ));
            }
            Feature::Content => {
                let path = format!("{prefix}content.{}", options.content_language.extension());
                plan.push(FileArtifact::new(
                    path,
                    templates::content_source(&options.name, options.content_language),
                ));
            }
            Feature::Options => {
                plan.push(FileArtifact::new(
                    format!("{prefix}{}", names::OPTIONS_HTML),
                    templates::static_page(&options.name, "Options", jquery_cdn),
                ));
            }
            Feature::Devtools => {
                // Devtools pages only exist in the V2 schema; under V3
                // the selection is dropped without error.
                if options.manifest_version == ManifestVersion::V2 {
                    plan.push(FileArtifact::new(
                        format!("{prefix}{}", names::DEVTOOLS_HTML),
                        templates::static_page(&options.name, "DevTools", jquery_cdn),
                    ));
                } else {
                    tracing::debug!("devtools feature dropped under manifest v3");
                }
            }
            Feature::Popup => push_popup(&mut plan, options, prefix, esmodules, jquery_cdn),
        }
    }

    let mut manifest_json = manifest.to_pretty_json();
    manifest_json.push('\n');
    plan.push(FileArtifact::new(names::MANIFEST_JSON, manifest_json));
    plan
}

fn push_popup(
    plan: &mut FilePlan,
    options: &Options,
    prefix: &str,
    esmodules: bool,
    jquery_cdn: bool,
) {
    let page = templates::popup_page(&options.name, options.popup_language, esmodules, jquery_cdn);
    plan.push(FileArtifact::new(
        format!("{prefix}{}", names::POPUP_HTML),
        page,
    ));

    match options.popup_language {
        PopupLanguage::Html => plan.push(FileArtifact::new(
            format!("{prefix}{}", names::POPUP_JS),
            templates::popup_js(&options.name),
        )),
        PopupLanguage::Typescript => plan.push(FileArtifact::new(
            format!("{prefix}popup.ts"),
            templates::popup_ts(&options.name),
        )),
        PopupLanguage::React => plan.push(FileArtifact::new(
            format!("{prefix}popup.tsx"),
            templates::popup_tsx(&options.name),
        )),
    }
}
