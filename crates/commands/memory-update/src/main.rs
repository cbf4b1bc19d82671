//! Update an existing memory.
//!
//! Replace swaps the body for the new content; append keeps the
//! existing body and adds a dated update block. Both refresh the
//! Updated header timestamp.

use anyhow::Result;
use clap::Parser;
use memory_common::prelude::*;
use memory_store::{MemoryStore, UpdateMode};

/// Update an existing memory file.
#[derive(Debug, Parser)]
#[command(name = "memory-update", about = "Update an existing memory")]
struct Cli {
    /// Relative path within the store
    path: String,

    /// New body content, or content to append
    content: String,

    /// Pass "append" to keep the existing body and add a dated update block
    mode: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = UpdateMode::from_arg(cli.mode.as_deref());
    let store = MemoryStore::new(MemoryStore::default_root()?);
    match store.update(&cli.path, &cli.content, mode) {
        Ok(updated) => emit(&UpdatedResponse::from(updated)),
        Err(err) => fail(err),
    }
}
