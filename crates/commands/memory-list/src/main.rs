//! List memories grouped by category, newest update first.

use anyhow::Result;
use clap::Parser;
use memory_common::prelude::*;
use memory_store::{CategoryFilter, DEFAULT_LIST_LIMIT, MemoryStore};

/// List memories by category, or all of them.
#[derive(Debug, Parser)]
#[command(name = "memory-list", about = "List memories by category")]
struct Cli {
    /// One category, or "all"
    #[arg(default_value = "all")]
    category: String,

    /// Maximum entries per category
    #[arg(default_value_t = DEFAULT_LIST_LIMIT)]
    limit: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = match CategoryFilter::parse(&cli.category) {
        Ok(filter) => filter,
        Err(err) => fail(err),
    };
    let store = MemoryStore::new(MemoryStore::default_root()?);
    match store.list(filter, cli.limit) {
        Ok(listing) => emit_pretty(&ListResponse::new(listing, cli.category)),
        Err(err) => fail(err),
    }
}
