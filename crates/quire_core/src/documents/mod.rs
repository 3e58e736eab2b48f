//! Document rows and the models behind the paginated document table.

mod pagination;
mod store;
mod table;

pub use pagination::{Page, PageCursor, PageRequest, PaginatedDocuments};
pub use store::DocumentStore;
pub use table::{
    DocumentTable, LoadMoreControl, LoadMoreLabel, TableBody, EMPTY_MESSAGE, TABLE_COLUMNS,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque document identifier issued by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the document table, rendered read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub title: String,
    pub shared: bool,
    pub created_at: DateTime<Utc>,
}

impl DocumentRow {
    pub fn sharing_label(&self) -> &'static str {
        if self.shared {
            "Shared"
        } else {
            "Personal"
        }
    }

    /// Creation date as `MMM dd, yyyy`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

/// Whether more documents exist and whether a fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationStatus {
    CanLoadMore,
    LoadingMore,
    Exhausted,
}

impl PaginationStatus {
    pub const ALL: [PaginationStatus; 3] = [
        PaginationStatus::CanLoadMore,
        PaginationStatus::LoadingMore,
        PaginationStatus::Exhausted,
    ];
}

/// URL that opens `id` in its own browser tab.
pub fn document_url(base_url: &str, id: &DocumentId) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn row_labels_follow_sharing_and_date() {
        let row = DocumentRow {
            id: DocumentId::new("doc-1"),
            title: "Roadmap".to_string(),
            shared: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap(),
        };
        assert_eq!(row.sharing_label(), "Shared");
        assert_eq!(row.created_label(), "Mar 07, 2024");
    }

    #[test]
    fn document_url_joins_without_double_slash() {
        let id = DocumentId::new("abc");
        assert_eq!(document_url("http://host/documents/", &id), "http://host/documents/abc");
        assert_eq!(document_url("http://host/documents", &id), "http://host/documents/abc");
    }
}
