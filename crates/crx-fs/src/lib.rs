//! Filesystem writer for the crx scaffold generator.
//!
//! Consumes the synthesis outputs (file plan, optional package
//! descriptor, rendered next steps) and materializes them on disk.
//! The synthesis crates never touch the filesystem; this crate never
//! makes decisions.

pub mod error;
pub mod io;
pub mod writer;

pub use error::{Error, Result};
pub use writer::ProjectWriter;
