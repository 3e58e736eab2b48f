//! Caller-side accumulation of document pages.
//!
//! The table itself never caches; this is the data-fetching side that owns the
//! list and the status and re-supplies both on every render.

use super::{DocumentId, DocumentRow, PaginationStatus};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use tracing::debug;

/// Key of the last row a page served.
///
/// Rows are ordered newest first with ties broken by id, so the key stays
/// valid while documents are created or removed between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub created_at: DateTime<Utc>,
    pub id: DocumentId,
}

impl PageCursor {
    pub fn after(row: &DocumentRow) -> Self {
        Self {
            created_at: row.created_at,
            id: row.id.clone(),
        }
    }

    /// Whether `row` comes later than the cursor in recency order.
    pub fn precedes(&self, row: &DocumentRow) -> bool {
        recency_key(row) > (Reverse(self.created_at), &self.id)
    }
}

/// Sort key for recency order: newest first, ties by ascending id.
pub(crate) fn recency_key(row: &DocumentRow) -> (Reverse<DateTime<Utc>>, &DocumentId) {
    (Reverse(row.created_at), &row.id)
}

/// Request for `count` documents following `cursor`; `None` starts at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: Option<PageCursor>,
    pub count: usize,
}

/// One page returned by the data layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<DocumentRow>,
    /// Cursor to continue from; unchanged from the request when nothing was served.
    pub next_cursor: Option<PageCursor>,
    pub is_done: bool,
}

/// Loaded documents plus pagination status.
#[derive(Debug, Clone)]
pub struct PaginatedDocuments {
    items: Option<Vec<DocumentRow>>,
    status: PaginationStatus,
    cursor: Option<PageCursor>,
}

impl Default for PaginatedDocuments {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginatedDocuments {
    /// Starts in the first-page-loading state: no sequence, load in flight.
    pub fn new() -> Self {
        Self {
            items: None,
            status: PaginationStatus::LoadingMore,
            cursor: None,
        }
    }

    /// Request for the first page; resets anything loaded so far.
    pub fn first_page(&mut self, count: usize) -> PageRequest {
        self.items = None;
        self.cursor = None;
        self.status = PaginationStatus::LoadingMore;
        PageRequest {
            cursor: None,
            count,
        }
    }

    /// Marks a follow-up page as in flight.
    ///
    /// # Returns
    /// The request to send, or `None` when nothing more can be loaded right now.
    pub fn load_more(&mut self, count: usize) -> Option<PageRequest> {
        if self.status != PaginationStatus::CanLoadMore {
            debug!(status = ?self.status, "ignoring load-more request");
            return None;
        }
        self.status = PaginationStatus::LoadingMore;
        Some(PageRequest {
            cursor: self.cursor.clone(),
            count,
        })
    }

    /// Appends a page and settles the status. Rows already loaded (for
    /// example a document created while the page was in flight) are skipped.
    pub fn apply_page(&mut self, page: Page) {
        let items = self.items.get_or_insert_with(Vec::new);
        for row in page.items {
            if items.iter().any(|existing| existing.id == row.id) {
                debug!(id = %row.id, "skipping already loaded row");
                continue;
            }
            items.push(row);
        }
        self.cursor = page.next_cursor;
        self.status = if page.is_done {
            PaginationStatus::Exhausted
        } else {
            PaginationStatus::CanLoadMore
        };
    }

    /// Settles a failed fetch so the user can retry.
    pub fn fail_page(&mut self) {
        self.items.get_or_insert_with(Vec::new);
        self.status = PaginationStatus::CanLoadMore;
    }

    pub fn documents(&self) -> Option<&[DocumentRow]> {
        self.items.as_deref()
    }

    pub fn status(&self) -> PaginationStatus {
        self.status
    }

    pub fn find(&self, id: &DocumentId) -> Option<&DocumentRow> {
        self.items.as_ref()?.iter().find(|row| &row.id == id)
    }

    /// Adds a freshly created document at the top (newest first).
    pub fn prepend(&mut self, row: DocumentRow) {
        if let Some(items) = self.items.as_mut() {
            if !items.iter().any(|existing| existing.id == row.id) {
                items.insert(0, row);
            }
        }
    }

    /// Replaces a loaded row in place, keeping its position.
    pub fn replace(&mut self, row: DocumentRow) -> bool {
        let Some(items) = self.items.as_mut() else {
            return false;
        };
        match items.iter_mut().find(|existing| existing.id == row.id) {
            Some(existing) => {
                *existing = row;
                true
            }
            None => false,
        }
    }

    /// Drops a loaded row. The cursor is a row key, so pending pages are unaffected.
    pub fn remove(&mut self, id: &DocumentId) -> bool {
        let Some(items) = self.items.as_mut() else {
            return false;
        };
        let before = items.len();
        items.retain(|row| &row.id != id);
        items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::DocumentStore;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn row(id: &str) -> DocumentRow {
        DocumentRow {
            id: DocumentId::new(id),
            title: format!("Doc {}", id),
            shared: false,
            created_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    fn page(ids: &[&str], is_done: bool) -> Page {
        let items: Vec<DocumentRow> = ids.iter().map(|id| row(id)).collect();
        Page {
            next_cursor: items.last().map(PageCursor::after),
            items,
            is_done,
        }
    }

    fn ids(docs: &PaginatedDocuments) -> Vec<&str> {
        docs.documents()
            .unwrap_or_default()
            .iter()
            .map(|r| r.id.as_str())
            .collect()
    }

    fn loaded_store(count: usize) -> (DocumentStore, PaginatedDocuments) {
        let store = DocumentStore::seeded(count, Utc::now() - Duration::hours(1));
        let mut docs = PaginatedDocuments::new();
        let first = docs.first_page(5);
        docs.apply_page(store.page(&first));
        (store, docs)
    }

    #[test]
    fn starts_loading_without_sequence() {
        let docs = PaginatedDocuments::new();
        assert!(docs.documents().is_none());
        assert_eq!(docs.status(), PaginationStatus::LoadingMore);
    }

    #[test]
    fn load_more_only_from_can_load_more() {
        let mut docs = PaginatedDocuments::new();
        assert_eq!(docs.load_more(5), None);

        docs.apply_page(page(&["a", "b"], false));
        assert_eq!(docs.status(), PaginationStatus::CanLoadMore);
        assert_eq!(
            docs.load_more(5),
            Some(PageRequest {
                cursor: Some(PageCursor::after(&row("b"))),
                count: 5
            })
        );
        assert_eq!(docs.status(), PaginationStatus::LoadingMore);
        assert_eq!(docs.load_more(5), None);
    }

    #[test]
    fn final_page_exhausts() {
        let mut docs = PaginatedDocuments::new();
        docs.apply_page(page(&["a"], false));
        docs.load_more(5).expect("request");
        docs.apply_page(page(&["b"], true));

        assert_eq!(docs.status(), PaginationStatus::Exhausted);
        assert_eq!(docs.documents().map(<[DocumentRow]>::len), Some(2));
        assert_eq!(docs.load_more(5), None);
    }

    #[test]
    fn empty_first_page_yields_empty_sequence() {
        let mut docs = PaginatedDocuments::new();
        docs.apply_page(page(&[], true));
        assert_eq!(docs.documents().map(<[DocumentRow]>::len), Some(0));
    }

    #[test]
    fn remove_and_prepend_keep_cursor_on_last_served_row() {
        let mut docs = PaginatedDocuments::new();
        docs.apply_page(page(&["a", "b", "c"], false));

        assert!(docs.remove(&DocumentId::new("b")));
        assert!(!docs.remove(&DocumentId::new("missing")));
        docs.prepend(row("new"));
        docs.prepend(row("new"));

        assert_eq!(
            docs.load_more(2),
            Some(PageRequest {
                cursor: Some(PageCursor::after(&row("c"))),
                count: 2
            })
        );
        assert_eq!(ids(&docs), vec!["new", "a", "c"]);
    }

    #[test]
    fn already_loaded_rows_are_not_appended_twice() {
        let mut docs = PaginatedDocuments::new();
        docs.apply_page(page(&["a", "b"], false));
        docs.load_more(2).expect("request");
        docs.apply_page(page(&["b", "c"], true));
        assert_eq!(ids(&docs), vec!["a", "b", "c"]);
    }

    #[test]
    fn create_while_page_in_flight_neither_duplicates_nor_drops() {
        let (mut store, mut docs) = loaded_store(10);
        let request = docs.load_more(5).expect("request");

        let created = store.create("Fresh");
        let served = store.page(&request);
        docs.prepend(created);
        docs.apply_page(served);

        let loaded = docs.documents().unwrap_or_default();
        let unique: HashSet<&DocumentId> = loaded.iter().map(|row| &row.id).collect();
        assert_eq!(loaded.len(), 11);
        assert_eq!(unique.len(), 11);
        assert_eq!(docs.status(), PaginationStatus::Exhausted);
    }

    #[test]
    fn remove_while_page_in_flight_skips_nothing() {
        for removed_idx in [2, 4, 7] {
            let (mut store, mut docs) = loaded_store(10);
            let request = docs.load_more(5).expect("request");

            let all = store.page(&PageRequest {
                cursor: None,
                count: 10,
            });
            let doomed = all.items[removed_idx].id.clone();
            store.remove(&doomed).expect("remove");
            let served = store.page(&request);
            docs.remove(&doomed);
            docs.apply_page(served);

            let loaded = docs.documents().unwrap_or_default();
            assert_eq!(loaded.len(), store.len(), "removed index {}", removed_idx);
            assert!(loaded.iter().all(|row| row.id != doomed));
            assert_eq!(docs.status(), PaginationStatus::Exhausted);
        }
    }

    #[test]
    fn cursor_orders_ties_by_id() {
        let cursor = PageCursor::after(&row("b"));
        assert!(cursor.precedes(&row("c")));
        assert!(!cursor.precedes(&row("b")));
        assert!(!cursor.precedes(&row("a")));
    }

    #[test]
    fn replace_keeps_position() {
        let mut docs = PaginatedDocuments::new();
        docs.apply_page(page(&["a", "b"], true));
        let mut renamed = row("b");
        renamed.title = "Renamed".to_string();

        assert!(docs.replace(renamed));
        assert_eq!(docs.documents().map(|rows| rows[1].title.as_str()), Some("Renamed"));
    }

    #[test]
    fn failed_fetch_allows_retry() {
        let mut docs = PaginatedDocuments::new();
        docs.fail_page();
        assert_eq!(docs.status(), PaginationStatus::CanLoadMore);
        assert!(docs.documents().is_some());
    }
}
