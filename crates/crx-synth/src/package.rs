//! npm package descriptor resolution
//!
//! Merge policy is additive and idempotent: every field is written
//! only if absent in the pre-existing descriptor, so re-running the
//! generator never clobbers a value the user has customized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crx_options::{BuildOption, Options};

use crate::versions;

/// Subset of package.json managed by the generator.
///
/// Unknown keys in an existing file are not modeled; callers that
/// merge into a real package.json should deserialize into this type
/// from the generator's own prior output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
    #[serde(
        default,
        rename = "devDependencies",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageDescriptor {
    /// Serialize with 2-space indentation, as written to disk.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("package descriptor serializes")
    }
}

/// Resolve the package descriptor for the given options, merging over
/// an optional pre-existing descriptor.
///
/// Returns `None` iff no build options are selected; in that case no
/// package.json is emitted at all.
pub fn resolve(options: &Options, existing: Option<PackageDescriptor>) -> Option<PackageDescriptor> {
    if options.build_options.is_empty() {
        return None;
    }

    let mut package = existing.unwrap_or_default();
    let wants_typescript = options.wants_typescript();

    if package.name.is_empty() {
        package.name = options.package_name();
    }
    if package.version.is_empty() {
        package.version = versions::INITIAL_VERSION.to_string();
    }
    set_absent(
        &mut package.scripts,
        "build",
        versions::DEFAULT_BUILD_SCRIPT,
    );

    if options.has_build_option(BuildOption::BundlerWebpack) {
        set_absent(&mut package.dev_dependencies, "webpack", versions::WEBPACK);
        set_absent(
            &mut package.dev_dependencies,
            "webpack-cli",
            versions::WEBPACK_CLI,
        );
        if wants_typescript {
            set_absent(
                &mut package.dev_dependencies,
                "typescript",
                versions::TYPESCRIPT,
            );
        }
    }

    if options.has_build_option(BuildOption::BundlerRollup) {
        set_absent(&mut package.dev_dependencies, "rollup", versions::ROLLUP);
        set_absent(
            &mut package.dev_dependencies,
            "@rollup/plugin-typescript",
            versions::ROLLUP_PLUGIN_TYPESCRIPT,
        );
        if wants_typescript {
            set_absent(
                &mut package.dev_dependencies,
                "typescript",
                versions::TYPESCRIPT,
            );
        }
    }

    if options.has_build_option(BuildOption::JqueryNpm) {
        set_absent(&mut package.dependencies, "jquery", versions::JQUERY);
        if wants_typescript {
            set_absent(
                &mut package.dev_dependencies,
                "@types/jquery",
                versions::JQUERY_TYPES,
            );
        }
    }

    // jquery-cdn and esmodules only affect generated HTML and the
    // manifest; package.json is untouched by them.

    tracing::debug!(name = %package.name, "resolved package descriptor");
    Some(package)
}

fn set_absent(map: &mut BTreeMap<String, String>, key: &str, value: &str) {
    map.entry(key.to_string())
        .or_insert_with(|| value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    use crx_options::{Feature, ManifestVersion, PopupLanguage, ScriptLanguage};

    fn options(build_options: Vec<BuildOption>) -> Options {
        Options {
            name: "My Demo".to_string(),
            description: "Demo extension".to_string(),
            manifest_version: ManifestVersion::V3,
            permissions: vec!["storage".to_string()],
            icons: Map::new(),
            features: vec![],
            popup_language: PopupLanguage::Html,
            background_language: ScriptLanguage::Javascript,
            content_language: ScriptLanguage::Javascript,
            use_source_folder: false,
            build_options,
        }
    }

    #[test]
    fn test_no_build_options_yields_no_package() {
        assert_eq!(resolve(&options(vec![]), None), None);
    }

    #[test]
    fn test_defaults_applied_to_fresh_package() {
        let package = resolve(&options(vec![BuildOption::Package]), None).unwrap();
        assert_eq!(package.name, "my-demo");
        assert_eq!(package.version, "1.0.0");
        assert_eq!(package.scripts["build"], versions::DEFAULT_BUILD_SCRIPT);
    }

    #[test]
    fn test_existing_values_never_overwritten() {
        let mut existing = PackageDescriptor::default();
        existing.name = "custom-name".to_string();
        existing
            .scripts
            .insert("build".to_string(), "custom".to_string());

        let package =
            resolve(&options(vec![BuildOption::BundlerWebpack]), Some(existing)).unwrap();
        assert_eq!(package.name, "custom-name");
        assert_eq!(package.scripts["build"], "custom");
        assert_eq!(package.dev_dependencies["webpack"], versions::WEBPACK);
    }

    #[test]
    fn test_webpack_adds_typescript_only_for_ts_languages() {
        let mut opts = options(vec![BuildOption::BundlerWebpack]);
        opts.features = vec![Feature::Background];
        let package = resolve(&opts, None).unwrap();
        assert!(!package.dev_dependencies.contains_key("typescript"));

        opts.background_language = ScriptLanguage::Typescript;
        let package = resolve(&opts, None).unwrap();
        assert_eq!(package.dev_dependencies["typescript"], versions::TYPESCRIPT);
    }

    #[test]
    fn test_jquery_npm_adds_runtime_dependency() {
        let mut opts = options(vec![BuildOption::JqueryNpm]);
        opts.features = vec![Feature::Popup];
        opts.popup_language = PopupLanguage::React;
        let package = resolve(&opts, None).unwrap();
        assert_eq!(package.dependencies["jquery"], versions::JQUERY);
        assert_eq!(
            package.dev_dependencies["@types/jquery"],
            versions::JQUERY_TYPES
        );
    }

    #[test]
    fn test_jquery_cdn_does_not_touch_package() {
        let package = resolve(
            &options(vec![BuildOption::Package, BuildOption::JqueryCdn]),
            None,
        )
        .unwrap();
        assert!(package.dependencies.is_empty());
        assert!(package.dev_dependencies.is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let opts = options(vec![BuildOption::BundlerRollup, BuildOption::JqueryNpm]);
        let first = resolve(&opts, None).unwrap();
        let second = resolve(&opts, Some(first.clone())).unwrap();
        assert_eq!(first, second);
    }
}
