//! End-to-end synthesis tests over the full generator pipeline.
//!
//! These exercise normalized options through manifest, plan, package,
//! and next-steps generation together, asserting the cross-artifact
//! guarantees (referential integrity, version exclusivity).

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

use crx_options::{
    BuildChoice, BuildOption, Feature, ManifestVersion, Options, PopupLanguage, RawOptions,
    ScriptLanguage, normalize,
};
use crx_synth::{build_plan, generate_steps, resolve, synthesize};

fn demo_options(version: ManifestVersion, features: Vec<Feature>) -> Options {
    normalize(RawOptions {
        name: Some("Demo".to_string()),
        description: Some("Demo extension".to_string()),
        manifest_version: Some(version),
        permissions: vec!["storage".to_string()],
        features,
        ..RawOptions::default()
    })
    .unwrap()
}

fn manifest_value(options: &Options) -> Value {
    serde_json::from_str(&synthesize(options).to_pretty_json()).unwrap()
}

#[test]
fn react_popup_example_matches_expected_artifacts() {
    let mut options = demo_options(ManifestVersion::V3, vec![Feature::Popup]);
    options.popup_language = PopupLanguage::React;

    let manifest = synthesize(&options);
    let plan = build_plan(&options, &manifest);

    assert_eq!(plan.paths(), vec!["popup.html", "popup.tsx", "manifest.json"]);

    let value = manifest_value(&options);
    assert_eq!(value["action"]["default_popup"], "popup.html");
    assert_eq!(resolve(&options, None), None);
}

#[test]
fn devtools_example_differs_by_version() {
    let v2 = demo_options(ManifestVersion::V2, vec![Feature::Devtools]);
    let plan = build_plan(&v2, &synthesize(&v2));
    assert!(plan.contains_path("devtools.html"));
    assert_eq!(manifest_value(&v2)["devtools_page"], "devtools.html");

    let v3 = demo_options(ManifestVersion::V3, vec![Feature::Devtools]);
    let plan = build_plan(&v3, &synthesize(&v3));
    assert!(!plan.contains_path("devtools.html"));
    assert!(manifest_value(&v3).get("devtools_page").is_none());
}

#[test]
fn empty_permissions_fail_before_any_synthesis() {
    let raw = RawOptions {
        name: Some("Demo".to_string()),
        description: Some("Demo extension".to_string()),
        manifest_version: Some(ManifestVersion::V3),
        permissions: vec![],
        ..RawOptions::default()
    };
    assert_eq!(normalize(raw).unwrap_err(), crx_options::Error::EmptyPermissions);
}

#[rstest]
#[case(ManifestVersion::V3, &["devtools_page", "browser_action", "options_page"])]
#[case(ManifestVersion::V2, &["service_worker", "action", "options_ui"])]
fn version_foreign_fields_never_emitted(
    #[case] version: ManifestVersion,
    #[case] forbidden: &[&str],
) {
    let options = demo_options(
        version,
        vec![
            Feature::Background,
            Feature::Content,
            Feature::Options,
            Feature::Devtools,
            Feature::Popup,
        ],
    );
    let value = manifest_value(&options);
    let object = value.as_object().unwrap();
    for key in forbidden {
        assert!(
            !object.contains_key(*key),
            "manifest v{} must not contain {}",
            version,
            key
        );
    }
    if version == ManifestVersion::V2 {
        assert!(object["background"].get("service_worker").is_none());
    } else {
        assert!(object["background"].get("scripts").is_none());
        assert!(object["background"].get("persistent").is_none());
    }
}

#[test]
fn manifest_references_resolve_to_plan_artifacts() {
    let options = demo_options(
        ManifestVersion::V2,
        vec![Feature::Content, Feature::Options, Feature::Popup],
    );
    let manifest = synthesize(&options);
    let plan = build_plan(&options, &manifest);
    let value = manifest_value(&options);

    assert!(plan.contains_path(value["options_page"].as_str().unwrap()));
    assert!(plan.contains_path(value["browser_action"]["default_popup"].as_str().unwrap()));
    assert!(plan.contains_path(value["content_scripts"][0]["js"][0].as_str().unwrap()));
}

#[test]
fn source_folder_moves_sources_but_not_manifest() {
    let mut options = demo_options(
        ManifestVersion::V3,
        vec![Feature::Background, Feature::Options],
    );
    options.use_source_folder = true;
    let plan = build_plan(&options, &synthesize(&options));

    assert!(plan.contains_path("src/background.js"));
    assert!(plan.contains_path("src/options.html"));
    assert!(plan.contains_path("manifest.json"));
    assert!(!plan.contains_path("src/manifest.json"));
}

#[test]
fn sentinel_suppresses_package_descriptor() {
    let raw = RawOptions {
        name: Some("Demo".to_string()),
        description: Some("Demo extension".to_string()),
        manifest_version: Some(ManifestVersion::V3),
        permissions: vec!["storage".to_string()],
        build_options: vec![
            BuildChoice::Use(BuildOption::BundlerWebpack),
            BuildChoice::None,
        ],
        ..RawOptions::default()
    };
    let options = normalize(raw).unwrap();
    assert!(options.build_options.is_empty());
    assert_eq!(resolve(&options, None), None);
}

#[test]
fn typescript_sources_still_reference_js_in_manifest() {
    let mut options = demo_options(ManifestVersion::V3, vec![Feature::Background]);
    options.background_language = ScriptLanguage::Typescript;

    let value = manifest_value(&options);
    assert_eq!(value["background"]["service_worker"], "background.js");

    let plan = build_plan(&options, &synthesize(&options));
    assert!(plan.contains_path("background.ts"));
}

#[test]
fn steps_mention_build_when_configured() {
    let mut options = demo_options(ManifestVersion::V3, vec![Feature::Background]);
    options.build_options = vec![BuildOption::Package];
    let steps = generate_steps(&options);
    assert!(steps.iter().any(|s| s.contains("npm install")));
}
