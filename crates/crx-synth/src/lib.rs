//! Pure configuration synthesis for the crx scaffold generator.
//!
//! Maps a normalized [`crx_options::Options`] record to three derived
//! artifacts: a version-specific manifest descriptor, an ordered file
//! plan, and an optional npm package descriptor, plus a human-readable
//! next-steps list. Everything here is deterministic and free of I/O;
//! the filesystem writer consumes the outputs.

pub mod manifest;
pub mod names;
pub mod package;
pub mod plan;
pub mod steps;
pub mod templates;
pub mod versions;

pub use manifest::{ManifestDescriptor, ManifestV2, ManifestV3, synthesize};
pub use package::{PackageDescriptor, resolve};
pub use plan::{FileArtifact, FilePlan, build_plan};
pub use steps::{generate_steps, render_todo};
