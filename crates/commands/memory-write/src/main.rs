//! Create a new categorized memory.
//!
//! Emits one JSON object describing the created memory. An existing
//! slug is never overwritten; use memory-update for that.

use anyhow::Result;
use clap::Parser;
use memory_common::prelude::*;
use memory_store::{Category, MemoryStore};

/// Write a memory entry to the store.
#[derive(Debug, Parser)]
#[command(name = "memory-write", about = "Create a new categorized memory")]
struct Cli {
    /// Target category (decisions, freelancers, projects, clients, processes, people, general)
    category: String,

    /// Short descriptive title; becomes the filename slug
    title: String,

    /// Markdown content for the memory body
    content: String,

    /// Optional comma-separated tags
    tags: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let category: Category = match cli.category.parse() {
        Ok(category) => category,
        Err(err) => fail(err),
    };
    let tags = parse_tags(cli.tags.as_deref());

    let store = MemoryStore::new(MemoryStore::default_root()?);
    match store.create(category, &cli.title, &cli.content, tags) {
        Ok(created) => emit(&CreatedResponse::from(created)),
        Err(err) => fail(err),
    }
}

/// Split a comma-separated tag argument, trimming each element.
fn parse_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => raw.split(',').map(|tag| tag.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}
