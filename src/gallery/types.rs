//! Client-facing gallery types.

use serde::{Deserialize, Serialize};

/// A search request after query-string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub page: u32,
}

impl SearchQuery {
    pub fn new(text: Option<String>, page: u32) -> Self {
        Self { text, page }
    }

    /// Search text, or `None` when absent or empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self { text: None, page: 1 }
    }
}

/// One photo in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Flattened metadata for a single photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Posting date as `DD MMM YYYY`.
    pub posted: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
