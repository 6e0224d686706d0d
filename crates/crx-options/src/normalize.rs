//! Raw option cleaning and cross-validation
//!
//! Normalization is the single gate between user input and the
//! generators: it trims text, applies the "none" build sentinel,
//! drops blank icon entries, deduplicates sets, and orders features
//! canonically. It is pure and fail-fast.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::options::{Feature, IconSize, Options};
use crate::raw::{BuildChoice, RawOptions};

/// Normalize a raw option bag into a fully-resolved [`Options`].
///
/// Failure modes:
/// - [`Error::MissingField`] when name or description is blank after
///   trimming, or when no manifest version was chosen;
/// - [`Error::EmptyPermissions`] when the permission set resolves to
///   empty.
pub fn normalize(raw: RawOptions) -> Result<Options> {
    let name = required_text(raw.name, "name")?;
    let description = required_text(raw.description, "description")?;
    let manifest_version = raw
        .manifest_version
        .ok_or_else(|| Error::missing("manifest version"))?;

    let permissions = dedup_strings(raw.permissions);
    if permissions.is_empty() {
        return Err(Error::EmptyPermissions);
    }

    // Blank icon paths are dropped silently; last entry wins per size.
    let icons: BTreeMap<IconSize, String> = raw
        .icons
        .into_iter()
        .filter_map(|(size, path)| {
            let path = path.trim();
            if path.is_empty() {
                None
            } else {
                Some((size, path.to_string()))
            }
        })
        .collect();

    // Canonical processing order, duplicates collapsed.
    let features: Vec<Feature> = Feature::ORDER
        .into_iter()
        .filter(|f| raw.features.contains(f))
        .collect();

    // The "none" sentinel is a final override: its presence empties
    // the whole set regardless of what else was selected.
    let build_options = if raw.build_options.contains(&BuildChoice::None) {
        tracing::debug!("build option sentinel present, clearing build selections");
        Vec::new()
    } else {
        let mut seen = Vec::new();
        for choice in raw.build_options {
            if let BuildChoice::Use(option) = choice
                && !seen.contains(&option)
            {
                seen.push(option);
            }
        }
        seen
    };

    Ok(Options {
        name,
        description,
        manifest_version,
        permissions,
        icons,
        features,
        popup_language: raw.popup_language.unwrap_or_default(),
        background_language: raw.background_language.unwrap_or_default(),
        content_language: raw.content_language.unwrap_or_default(),
        use_source_folder: raw.use_source_folder,
        build_options,
    })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    let trimmed = value.as_deref().unwrap_or("").trim().to_string();
    if trimmed.is_empty() {
        return Err(Error::missing(field));
    }
    Ok(trimmed)
}

fn dedup_strings(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !out.iter().any(|v| v == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BuildOption, ManifestVersion};

    fn raw() -> RawOptions {
        RawOptions {
            name: Some("Demo".to_string()),
            description: Some("A demo extension".to_string()),
            manifest_version: Some(ManifestVersion::V3),
            permissions: vec!["storage".to_string()],
            ..RawOptions::default()
        }
    }

    #[test]
    fn test_trims_name_and_description() {
        let mut input = raw();
        input.name = Some("  Demo \n".to_string());
        input.description = Some(" desc ".to_string());
        let options = normalize(input).unwrap();
        assert_eq!(options.name, "Demo");
        assert_eq!(options.description, "desc");
    }

    #[test]
    fn test_blank_name_is_missing_field() {
        let mut input = raw();
        input.name = Some("   ".to_string());
        assert_eq!(normalize(input).unwrap_err(), Error::missing("name"));
    }

    #[test]
    fn test_absent_manifest_version_is_missing_field() {
        let mut input = raw();
        input.manifest_version = None;
        assert_eq!(
            normalize(input).unwrap_err(),
            Error::missing("manifest version")
        );
    }

    #[test]
    fn test_empty_permissions_fail() {
        let mut input = raw();
        input.permissions = vec!["  ".to_string()];
        assert_eq!(normalize(input).unwrap_err(), Error::EmptyPermissions);
    }

    #[test]
    fn test_none_sentinel_clears_other_build_options() {
        let mut input = raw();
        input.build_options = vec![
            BuildChoice::Use(BuildOption::BundlerWebpack),
            BuildChoice::None,
            BuildChoice::Use(BuildOption::Package),
        ];
        let options = normalize(input).unwrap();
        assert!(options.build_options.is_empty());
    }

    #[test]
    fn test_blank_icon_entries_dropped_silently() {
        let mut input = raw();
        input.icons = vec![
            (IconSize::Px16, " icons/16.png ".to_string()),
            (IconSize::Px48, "   ".to_string()),
        ];
        let options = normalize(input).unwrap();
        assert_eq!(options.icons.len(), 1);
        assert_eq!(options.icons[&IconSize::Px16], "icons/16.png");
    }

    #[test]
    fn test_features_ordered_canonically_and_deduped() {
        let mut input = raw();
        input.features = vec![
            Feature::Popup,
            Feature::Background,
            Feature::Popup,
            Feature::Content,
        ];
        let options = normalize(input).unwrap();
        assert_eq!(
            options.features,
            vec![Feature::Background, Feature::Content, Feature::Popup]
        );
    }
}
