//! Raw, unvalidated option bag collected from prompts or CLI flags

use std::str::FromStr;

use crate::error::Error;
use crate::options::{
    BuildOption, Feature, IconSize, ManifestVersion, PopupLanguage, ScriptLanguage,
};

/// A single entry in the raw build-tooling selection.
///
/// The interactive prompt offers "none" alongside the real options;
/// selecting it anywhere collapses the whole set during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildChoice {
    None,
    Use(BuildOption),
}

impl FromStr for BuildChoice {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(BuildChoice::None);
        }
        s.parse::<BuildOption>().map(BuildChoice::Use)
    }
}

/// Unvalidated options as gathered from the user.
///
/// Every field is optional or unchecked; [`crate::normalize`] is the
/// only path from this shape to [`crate::Options`].
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub manifest_version: Option<ManifestVersion>,
    pub permissions: Vec<String>,
    /// Icon entries as entered; blank paths are dropped silently.
    pub icons: Vec<(IconSize, String)>,
    pub features: Vec<Feature>,
    pub popup_language: Option<PopupLanguage>,
    pub background_language: Option<ScriptLanguage>,
    pub content_language: Option<ScriptLanguage>,
    pub use_source_folder: bool,
    pub build_options: Vec<BuildChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_choice_parses_none_case_insensitively() {
        assert_eq!("none".parse::<BuildChoice>().unwrap(), BuildChoice::None);
        assert_eq!("None".parse::<BuildChoice>().unwrap(), BuildChoice::None);
        assert_eq!(
            "package".parse::<BuildChoice>().unwrap(),
            BuildChoice::Use(BuildOption::Package)
        );
    }
}
