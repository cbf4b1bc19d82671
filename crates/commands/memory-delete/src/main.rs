//! Delete one memory permanently.
//!
//! There is no trash and no soft delete.

use anyhow::Result;
use clap::Parser;
use memory_common::prelude::*;
use memory_store::MemoryStore;

/// Delete a memory file.
#[derive(Debug, Parser)]
#[command(name = "memory-delete", about = "Delete a memory")]
struct Cli {
    /// Relative path within the store
    path: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = MemoryStore::new(MemoryStore::default_root()?);
    match store.delete(&cli.path) {
        Ok(deleted) => emit(&DeletedResponse::from(deleted)),
        Err(err) => fail(err),
    }
}
