//! Project emission
//!
//! Writes a synthesized scaffold to disk: the target directory must
//! not exist yet, every plan artifact lands relative to it, and the
//! optional package.json and TODO.md sit at the root next to
//! manifest.json.

use std::fs;
use std::path::{Path, PathBuf};

use crx_synth::{FilePlan, PackageDescriptor};

use crate::error::{Error, Result};
use crate::io;

const PACKAGE_JSON: &str = "package.json";
const TODO_MD: &str = "TODO.md";

/// Writes one scaffolded project under a fresh target directory.
pub struct ProjectWriter {
    root: PathBuf,
}

impl ProjectWriter {
    /// Create a writer for the given target directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Target project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Emit the full scaffold.
    ///
    /// Fails with [`Error::DirectoryExists`] before writing anything
    /// if the target directory is already present.
    pub fn emit(
        &self,
        plan: &FilePlan,
        package: Option<&PackageDescriptor>,
        todo: &str,
    ) -> Result<()> {
        if self.root.exists() {
            return Err(Error::DirectoryExists {
                path: self.root.clone(),
            });
        }
        fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))?;
        tracing::info!(root = %self.root.display(), "writing project scaffold");

        for artifact in plan {
            let dest = self.root.join(&artifact.relative_path);
            tracing::debug!(path = %dest.display(), "writing artifact");
            io::write_text(&dest, &artifact.content)?;
        }

        if let Some(package) = package {
            let mut content = package.to_pretty_json();
            content.push('\n');
            io::write_text(&self.root.join(PACKAGE_JSON), &content)?;
        }

        io::write_text(&self.root.join(TODO_MD), todo)?;
        Ok(())
    }
}
