//! Rank-search memories by keyword.
//!
//! Scans every memory in scope and ranks by keyword score; documents
//! matching none of the keywords are excluded entirely.

use anyhow::Result;
use clap::Parser;
use memory_common::prelude::*;
use memory_store::{CategoryFilter, DEFAULT_SEARCH_LIMIT, MemoryStore, search};

/// Search memories across title, tags, and body.
#[derive(Debug, Parser)]
#[command(name = "memory-search", about = "Search memories by keyword")]
struct Cli {
    /// Space-separated keywords
    query: String,

    /// One category, or "all"
    #[arg(default_value = "all")]
    category: String,

    /// Maximum results
    #[arg(default_value_t = DEFAULT_SEARCH_LIMIT)]
    limit: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = match CategoryFilter::parse(&cli.category) {
        Ok(filter) => filter,
        Err(err) => fail(err),
    };
    let store = MemoryStore::new(MemoryStore::default_root()?);
    match search(&store, &cli.query, filter, cli.limit) {
        Ok(outcome) => emit_pretty(&SearchResponse::new(outcome, cli.query, cli.category)),
        Err(err) => fail(err),
    }
}
