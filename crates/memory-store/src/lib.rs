//! Categorized personal memory store.
//!
//! Provides:
//! - Document schema and header/body codec
//! - Path containment for caller-supplied relative paths
//! - Filesystem-backed store (create/read/update/delete/list)
//! - Keyword ranking search

pub mod error;
pub mod paths;
pub mod schema;
pub mod search;
pub mod storage;

pub use error::StoreError;
pub use schema::{Category, CategoryFilter, MemoryDocument, slugify};
pub use search::{DEFAULT_SEARCH_LIMIT, SearchHit, SearchOutcome, search};
pub use storage::{
    CreatedMemory, DEFAULT_LIST_LIMIT, DeletedMemory, ListEntry, Listing, MemoryStore, ReadMemory,
    StoredMemory, UpdateMode, UpdatedMemory,
};
