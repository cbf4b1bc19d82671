//! Shared plumbing for the memory command binaries.
//!
//! This crate provides what every command needs around the store:
//! - JSON response types and stdout emission
//! - Failure-to-exit mapping

pub mod output;
pub mod report;

pub use output::{emit, emit_pretty};
pub use report::fail;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::output::*;
    pub use crate::report::fail;
    pub use anyhow::{Context, Result};
}
