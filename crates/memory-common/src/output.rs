//! JSON responses written to stdout.
//!
//! Every command emits exactly one JSON object; stdout carries
//! nothing else. Diagnostics go to stderr.

use memory_store::{
    Category, CreatedMemory, DeletedMemory, ListEntry, Listing, ReadMemory, SearchHit,
    SearchOutcome, UpdateMode, UpdatedMemory,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Successful create.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub action: &'static str,
    pub path: String,
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub timestamp: String,
}

impl From<CreatedMemory> for CreatedResponse {
    fn from(created: CreatedMemory) -> Self {
        Self {
            ok: true,
            action: "created",
            path: created.path,
            title: created.title,
            category: created.category,
            tags: created.tags,
            timestamp: created.timestamp,
        }
    }
}

/// Successful read: the raw persisted text.
#[derive(Debug, Clone, Serialize)]
pub struct ReadResponse {
    pub ok: bool,
    pub path: String,
    pub content: String,
}

impl From<ReadMemory> for ReadResponse {
    fn from(read: ReadMemory) -> Self {
        Self {
            ok: true,
            path: read.path,
            content: read.content,
        }
    }
}

/// Successful update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    pub ok: bool,
    pub action: &'static str,
    pub mode: UpdateMode,
    pub path: String,
    pub timestamp: String,
}

impl From<UpdatedMemory> for UpdatedResponse {
    fn from(updated: UpdatedMemory) -> Self {
        Self {
            ok: true,
            action: "updated",
            mode: updated.mode,
            path: updated.path,
            timestamp: updated.timestamp,
        }
    }
}

/// Successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
    pub action: &'static str,
    pub path: String,
}

impl From<DeletedMemory> for DeletedResponse {
    fn from(deleted: DeletedMemory) -> Self {
        Self {
            ok: true,
            action: "deleted",
            path: deleted.path,
        }
    }
}

/// Grouped listing. `totalMemories` counts matches before
/// per-category truncation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub ok: bool,
    pub categories: BTreeMap<Category, Vec<ListEntry>>,
    pub total_memories: usize,
    pub showing: String,
}

impl ListResponse {
    pub fn new(listing: Listing, showing: String) -> Self {
        Self {
            ok: true,
            categories: listing.categories,
            total_memories: listing.total,
            showing,
        }
    }
}

/// Ranked search results. `total` counts matches before truncation,
/// `showing` the returned slice.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub ok: bool,
    pub results: Vec<SearchHit>,
    pub total: usize,
    pub showing: usize,
    pub query: String,
    pub category: String,
}

impl SearchResponse {
    pub fn new(outcome: SearchOutcome, query: String, category: String) -> Self {
        Self {
            ok: true,
            showing: outcome.hits.len(),
            total: outcome.total,
            results: outcome.hits,
            query,
            category,
        }
    }
}

/// Domain-level failure that callers handle as a normal outcome
/// (not found).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Write one compact JSON object to stdout.
pub fn emit<T: Serialize>(payload: &T) -> anyhow::Result<()> {
    write_line(serde_json::to_string(payload)?)
}

/// Write one pretty-printed JSON object to stdout (list and search).
pub fn emit_pretty<T: Serialize>(payload: &T) -> anyhow::Result<()> {
    write_line(serde_json::to_string_pretty(payload)?)
}

fn write_line(json: String) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}
