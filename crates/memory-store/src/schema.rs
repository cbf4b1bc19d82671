//! Memory schema - categories, document model, and the header/body codec.

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// File extension for persisted memories.
pub const MEMORY_EXTENSION: &str = ".md";

const TITLE_MARKER: &str = "# ";
const TAGS_LABEL: &str = "Tags: ";
const CREATED_LABEL: &str = "Created: ";
const UPDATED_LABEL: &str = "Updated: ";
const SEPARATOR: &str = "---";

/// Fixed set of memory categories. Each category is a directory
/// directly under the storage root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Decisions,
    Freelancers,
    Projects,
    Clients,
    Processes,
    People,
    General,
}

impl Category {
    /// Every valid category, in canonical order.
    pub const ALL: [Category; 7] = [
        Category::Decisions,
        Category::Freelancers,
        Category::Projects,
        Category::Clients,
        Category::Processes,
        Category::People,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Decisions => "decisions",
            Category::Freelancers => "freelancers",
            Category::Projects => "projects",
            Category::Clients => "clients",
            Category::Processes => "processes",
            Category::People => "people",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    // Case-sensitive: anything outside the fixed set is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| StoreError::InvalidCategory(s.to_string()))
    }
}

/// Category selection for list and search: a single category or the
/// `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    One(Category),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::One(s.parse()?))
    }

    /// Categories selected by this filter, in canonical order.
    pub fn categories(&self) -> &[Category] {
        match self {
            CategoryFilter::All => &Category::ALL,
            CategoryFilter::One(category) => std::slice::from_ref(category),
        }
    }
}

/// One decoded memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    /// Human-readable title, first `# ` line of the header
    pub title: String,

    /// Tags in insertion order, not deduplicated
    pub tags: Vec<String>,

    /// Creation timestamp (ISO 8601), set once
    pub created: String,

    /// Last-update timestamp (ISO 8601)
    pub updated: String,

    /// Free-form text after the header separator
    pub body: String,
}

/// Decoder states: scanning the header, then accumulating the body.
/// The only transition is the first line starting with `---`.
enum DecodeState {
    Header,
    Body,
}

impl MemoryDocument {
    /// Render the on-disk text: header block, `---` separator, body,
    /// exactly one trailing newline. The tags line is omitted when
    /// there are no tags.
    pub fn encode(&self, category: Category) -> String {
        let tag_line = if self.tags.is_empty() {
            String::new()
        } else {
            format!("\n{}{}", TAGS_LABEL, self.tags.join(", "))
        };

        format!(
            "{}{}\n\nCategory: {}\n{}{}\n{}{}{}\n\n{}\n\n{}\n",
            TITLE_MARKER,
            self.title,
            category,
            CREATED_LABEL,
            self.created,
            UPDATED_LABEL,
            self.updated,
            tag_line,
            SEPARATOR,
            self.body
        )
    }

    /// Parse persisted text. Never fails: malformed input yields
    /// empty/default fields rather than an unreadable memory.
    pub fn decode(text: &str) -> Self {
        let mut doc = MemoryDocument::default();
        let mut state = DecodeState::Header;
        let mut body_lines: Vec<&str> = Vec::new();

        for line in text.lines() {
            match state {
                DecodeState::Header => {
                    if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
                        // Only the first title line counts
                        if doc.title.is_empty() {
                            doc.title = rest.trim().to_string();
                        }
                    } else if let Some(rest) = line.strip_prefix(TAGS_LABEL) {
                        doc.tags = rest.split(',').map(|tag| tag.trim().to_string()).collect();
                    } else if let Some(rest) = line.strip_prefix(CREATED_LABEL) {
                        doc.created = rest.trim().to_string();
                    } else if let Some(rest) = line.strip_prefix(UPDATED_LABEL) {
                        doc.updated = rest.trim().to_string();
                    } else if line.starts_with(SEPARATOR) {
                        state = DecodeState::Body;
                    }
                }
                // Everything after the separator is body, header-like
                // lines included
                DecodeState::Body => body_lines.push(line),
            }
        }

        doc.body = body_lines.join("\n").trim().to_string();
        doc
    }
}

/// Split raw text at the first `\n---\n` into (header, trimmed body).
/// A missing separator leaves the whole text as header.
pub fn split_document(text: &str) -> (&str, &str) {
    match text.find("\n---\n") {
        Some(index) => (&text[..index], text[index + 5..].trim()),
        None => (text, ""),
    }
}

/// Replace the value of the first `Updated: ` line. Silently a no-op
/// when the header carries no such line.
pub fn touch_updated(header: &str, timestamp: &str) -> String {
    let updated_line = Regex::new(r"Updated: .+").unwrap();
    updated_line
        .replace(header, format!("{UPDATED_LABEL}{timestamp}"))
        .into_owned()
}

/// Derive a filesystem-safe identifier from a title: lowercase, strip
/// everything but ASCII alphanumerics/spaces/hyphens, collapse
/// whitespace and hyphen runs to single hyphens, trim hyphens, cap at
/// 80 characters.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            slug.push(ch);
        } else if ch.is_whitespace() {
            slug.push('-');
        }
    }

    let mut collapsed = String::with_capacity(slug.len());
    for ch in slug.chars() {
        if ch == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(ch);
    }

    let mut out = collapsed.trim_matches('-').to_string();
    out.truncate(80);
    out
}

/// Current time in ISO 8601 format with millisecond precision
/// (fixed-width, so lexicographic comparison orders by time).
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
