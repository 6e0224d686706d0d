//! Option model and normalization for the crx scaffold generator.
//!
//! This crate owns the fully-resolved [`Options`] record that every
//! generator consumes, the raw unvalidated option bag collected from
//! prompts or flags, and the normalizer that turns one into the other.

pub mod error;
pub mod normalize;
pub mod options;
pub mod raw;

pub use error::{Error, Result};
pub use normalize::normalize;
pub use options::{
    BuildOption, Feature, IconSize, ManifestVersion, Options, PopupLanguage, ScriptLanguage,
};
pub use raw::{BuildChoice, RawOptions};
