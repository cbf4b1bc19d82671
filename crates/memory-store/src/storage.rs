//! Filesystem-backed memory store.
//!
//! One directory per category under the storage root, one `.md` file
//! per memory. The store is the only writer; every operation taking a
//! caller-supplied relative path goes through the containment check
//! before touching the filesystem.

use crate::error::StoreError;
use crate::paths;
use crate::schema::{
    Category, CategoryFilter, MEMORY_EXTENSION, MemoryDocument, now_timestamp, slugify,
    split_document, touch_updated,
};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;

/// Default per-category cap for list.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// How an update treats the existing body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    Replace,
    Append,
}

impl UpdateMode {
    /// Anything other than the literal `append` selects replace.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("append") => UpdateMode::Append,
            _ => UpdateMode::Replace,
        }
    }
}

/// Receipt for a successful create.
#[derive(Debug, Clone)]
pub struct CreatedMemory {
    pub path: String,
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub timestamp: String,
}

/// A memory read back from disk: relative path plus raw text.
#[derive(Debug, Clone)]
pub struct ReadMemory {
    pub path: String,
    pub content: String,
}

/// Receipt for a successful update.
#[derive(Debug, Clone)]
pub struct UpdatedMemory {
    pub path: String,
    pub mode: UpdateMode,
    pub timestamp: String,
}

/// Receipt for a successful delete.
#[derive(Debug, Clone)]
pub struct DeletedMemory {
    pub path: String,
}

/// Header-level view of one memory, as returned by list.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub path: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created: String,
    pub updated: String,
}

/// Grouped list result. Categories with no memories are absent.
/// `total` counts entries before per-category truncation.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub categories: BTreeMap<Category, Vec<ListEntry>>,
    pub total: usize,
}

/// One decoded memory found while scanning, with its store-relative path.
#[derive(Debug, Clone)]
pub struct StoredMemory {
    pub category: Category,
    pub path: String,
    pub document: MemoryDocument,
}

/// Category-scoped collection of memory documents on disk.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Storage root; category directories live directly under it
    root: Utf8PathBuf,
}

impl MemoryStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the default storage root.
    ///
    /// Priority:
    /// 1. MEMORY_DIR environment variable (if set)
    /// 2. ~/.config/ai/memory
    pub fn default_root() -> Result<Utf8PathBuf> {
        if let Ok(custom_root) = std::env::var("MEMORY_DIR") {
            return Ok(Utf8PathBuf::from(custom_root));
        }

        let home = dirs::home_dir().context("Cannot determine home directory")?;
        let home = Utf8PathBuf::from_path_buf(home)
            .map_err(|path| anyhow::anyhow!("Home directory is not UTF-8: {}", path.display()))?;
        Ok(home.join(".config").join("ai").join("memory"))
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Persist a new memory. The identifier is derived from the title;
    /// an existing file with the same slug is never overwritten.
    pub fn create(
        &self,
        category: Category,
        title: &str,
        body: &str,
        tags: Vec<String>,
    ) -> Result<CreatedMemory, StoreError> {
        let dir = self.root.join(category.as_str());
        fs::create_dir_all(&dir)?;

        let filename = format!("{}{}", slugify(title), MEMORY_EXTENSION);
        let relative = format!("{category}/{filename}");
        let target = dir.join(&filename);
        if target.exists() {
            return Err(StoreError::AlreadyExists(relative));
        }

        let now = now_timestamp();
        let document = MemoryDocument {
            title: title.to_string(),
            tags: tags.clone(),
            created: now.clone(),
            updated: now.clone(),
            body: body.to_string(),
        };
        fs::write(&target, document.encode(category))?;

        Ok(CreatedMemory {
            path: relative,
            title: title.to_string(),
            category,
            tags,
            timestamp: now,
        })
    }

    /// Read one memory by store-relative path.
    pub fn read(&self, relative: &str) -> Result<ReadMemory, StoreError> {
        let target = paths::resolve(&self.root, relative)?;
        if !target.exists() {
            return Err(StoreError::NotFound(relative.to_string()));
        }
        let content = fs::read_to_string(&target)?;
        Ok(ReadMemory {
            path: relative.to_string(),
            content,
        })
    }

    /// Rewrite one memory. Replace swaps the body for `content`;
    /// append keeps the existing body and adds a dated update block.
    /// Both refresh the `Updated` header line.
    pub fn update(
        &self,
        relative: &str,
        content: &str,
        mode: UpdateMode,
    ) -> Result<UpdatedMemory, StoreError> {
        let target = paths::resolve(&self.root, relative)?;
        if !target.exists() {
            return Err(StoreError::NotFound(relative.to_string()));
        }

        let existing = fs::read_to_string(&target)?;
        let now = now_timestamp();
        let (header, body) = split_document(&existing);
        let header = touch_updated(header, &now);

        let body = match mode {
            UpdateMode::Replace => content.to_string(),
            UpdateMode::Append => {
                let date = now.split('T').next().unwrap_or(now.as_str());
                format!("{body}\n\n---\n\n**Update ({date}):**\n{content}")
            }
        };

        fs::write(&target, format!("{header}\n---\n\n{body}\n"))?;

        Ok(UpdatedMemory {
            path: relative.to_string(),
            mode,
            timestamp: now,
        })
    }

    /// Remove one memory permanently.
    pub fn delete(&self, relative: &str) -> Result<DeletedMemory, StoreError> {
        let target = paths::resolve(&self.root, relative)?;
        if !target.exists() {
            return Err(StoreError::NotFound(relative.to_string()));
        }
        fs::remove_file(&target)?;
        Ok(DeletedMemory {
            path: relative.to_string(),
        })
    }

    /// List memories grouped by category, newest update first, capped
    /// at `limit` per category after sorting. A missing storage root
    /// yields an empty listing.
    pub fn list(&self, filter: CategoryFilter, limit: usize) -> Result<Listing, StoreError> {
        let mut listing = Listing::default();

        for &category in filter.categories() {
            let mut entries: Vec<ListEntry> = self
                .scan_category(category)?
                .into_iter()
                .map(|stored| ListEntry {
                    path: stored.path,
                    title: stored.document.title,
                    tags: stored.document.tags,
                    created: stored.document.created,
                    updated: stored.document.updated,
                })
                .collect();

            if entries.is_empty() {
                continue;
            }

            listing.total += entries.len();
            sort_entries(&mut entries);
            entries.truncate(limit);
            listing.categories.insert(category, entries);
        }

        Ok(listing)
    }

    /// Decode every memory in the filtered categories. Unreadable
    /// files are skipped with a warning so one bad file cannot take
    /// down list or search.
    pub fn scan(&self, filter: CategoryFilter) -> Result<Vec<StoredMemory>, StoreError> {
        let mut found = Vec::new();
        for &category in filter.categories() {
            found.extend(self.scan_category(category)?);
        }
        Ok(found)
    }

    fn scan_category(&self, category: Category) -> Result<Vec<StoredMemory>, StoreError> {
        let dir = self.root.join(category.as_str());
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        for entry in dir.read_dir_utf8()? {
            let entry = entry?;
            let name = entry.file_name();
            if !name.ends_with(MEMORY_EXTENSION) {
                continue;
            }
            let text = match fs::read_to_string(entry.path()) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("Warning: Failed to read memory {}: {}", entry.path(), err);
                    continue;
                }
            };
            found.push(StoredMemory {
                category,
                path: format!("{category}/{name}"),
                document: MemoryDocument::decode(&text),
            });
        }
        Ok(found)
    }
}

/// Newest update first, falling back to the created timestamp;
/// relative path breaks remaining ties deterministically.
fn sort_entries(entries: &mut [ListEntry]) {
    entries.sort_by(|a, b| {
        let a_key = if a.updated.is_empty() { &a.created } else { &a.updated };
        let b_key = if b.updated.is_empty() { &b.created } else { &b.updated };
        b_key.cmp(a_key).then_with(|| a.path.cmp(&b.path))
    });
}
