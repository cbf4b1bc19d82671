//! Read one memory by store-relative path.
//!
//! Returns the raw persisted text so callers see the full header and
//! body exactly as stored.

use anyhow::Result;
use clap::Parser;
use memory_common::prelude::*;
use memory_store::MemoryStore;

/// Read a specific memory file.
#[derive(Debug, Parser)]
#[command(name = "memory-read", about = "Read a specific memory")]
struct Cli {
    /// Relative path within the store (e.g. "decisions/editor-selection.md")
    path: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = MemoryStore::new(MemoryStore::default_root()?);
    match store.read(&cli.path) {
        Ok(read) => emit(&ReadResponse::from(read)),
        Err(err) => fail(err),
    }
}
