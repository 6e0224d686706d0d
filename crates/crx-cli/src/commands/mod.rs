//! Command implementations

pub mod new;

pub use new::{NewArgs, run_new};
