//! Keyword ranking over stored memories.
//!
//! A linear scan: every document in scope is decoded and scored
//! against the query; there is no index to maintain.

use crate::error::StoreError;
use crate::schema::{Category, CategoryFilter, MemoryDocument};
use crate::storage::{MemoryStore, StoredMemory};
use serde::Serialize;

/// Default cap on returned results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Dominates partial matches: every keyword was found somewhere.
const ALL_MATCH_BONUS: i64 = 100;
/// Per keyword found in the title.
const TITLE_MATCH_BONUS: i64 = 10;
/// Per keyword found in the tag list.
const TAG_MATCH_BONUS: i64 = 5;

const PREVIEW_LENGTH: usize = 200;

/// One scored search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub created: String,
    pub updated: String,
    pub preview: String,
    pub score: i64,
}

/// Ranked results plus the match count before truncation.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub total: usize,
}

/// Scan the filtered categories and rank every matching document.
/// Results are sorted by score descending, relative path breaking
/// ties, then truncated to `limit`.
pub fn search(
    store: &MemoryStore,
    query: &str,
    filter: CategoryFilter,
    limit: usize,
) -> Result<SearchOutcome, StoreError> {
    let keywords = tokenize(query);

    let mut hits: Vec<SearchHit> = Vec::new();
    for stored in store.scan(filter)? {
        let score = score_document(&keywords, &stored.document);
        if score == 0 {
            continue;
        }
        hits.push(to_hit(stored, score));
    }

    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.path.cmp(&b.path)));
    let total = hits.len();
    hits.truncate(limit);

    Ok(SearchOutcome { hits, total })
}

/// Lowercased distinct keywords, split on whitespace, empties dropped.
fn tokenize(query: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in query.split_whitespace() {
        let token = token.to_lowercase();
        if !keywords.contains(&token) {
            keywords.push(token);
        }
    }
    keywords
}

/// Score one document against the keywords. Zero means no keyword
/// appears anywhere and the document is excluded from results.
pub fn score_document(keywords: &[String], document: &MemoryDocument) -> i64 {
    if keywords.is_empty() {
        return 0;
    }

    let haystack = format!(
        "{} {} {}",
        document.title,
        document.tags.join(" "),
        document.body
    )
    .to_lowercase();

    let matched = keywords
        .iter()
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count();
    if matched == 0 {
        return 0;
    }

    let mut score = matched as i64;
    if matched == keywords.len() {
        score += ALL_MATCH_BONUS;
    }

    let title = document.title.to_lowercase();
    let tags = document.tags.join(" ").to_lowercase();
    for keyword in keywords {
        if title.contains(keyword.as_str()) {
            score += TITLE_MATCH_BONUS;
        }
        if tags.contains(keyword.as_str()) {
            score += TAG_MATCH_BONUS;
        }
    }

    score
}

fn to_hit(stored: StoredMemory, score: i64) -> SearchHit {
    let StoredMemory {
        category,
        path,
        document,
    } = stored;
    SearchHit {
        path,
        title: document.title,
        category,
        tags: document.tags,
        created: document.created,
        updated: document.updated,
        preview: preview(&document.body),
        score,
    }
}

/// First 200 characters of the body, with an ellipsis marker when
/// the body is longer.
fn preview(body: &str) -> String {
    let mut preview: String = body.chars().take(PREVIEW_LENGTH).collect();
    if body.chars().count() > PREVIEW_LENGTH {
        preview.push_str("...");
    }
    preview
}
