//! In-memory document data layer ordered by recency.

use super::pagination::recency_key;
use super::{DocumentId, DocumentRow, Page, PageCursor, PageRequest};
use crate::error::QuireError;
use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

const SEED_TITLES: &[&str] = &[
    "Untitled document",
    "Project proposal",
    "Meeting notes",
    "Quarterly report",
    "Product roadmap",
    "Design review",
    "Onboarding checklist",
    "Release notes",
];

/// Documents kept newest first, ties ordered by id.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    rows: Vec<DocumentRow>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `count` sample documents created an hour apart
    /// before `now`.
    pub fn seeded(count: usize, now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        for idx in 0..count {
            let base = SEED_TITLES[idx % SEED_TITLES.len()];
            let title = if idx < SEED_TITLES.len() {
                base.to_string()
            } else {
                format!("{} ({})", base, idx / SEED_TITLES.len() + 1)
            };
            store.insert(DocumentRow {
                id: DocumentId::new(Uuid::new_v4().to_string()),
                title,
                shared: idx % 3 == 1,
                created_at: now - Duration::hours(idx as i64),
            });
        }
        store
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &DocumentId) -> Option<&DocumentRow> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Inserts `row` at its recency position.
    pub fn insert(&mut self, row: DocumentRow) {
        let idx = self
            .rows
            .partition_point(|existing| recency_key(existing) < recency_key(&row));
        self.rows.insert(idx, row);
    }

    /// Creates a personal document with a fresh id.
    ///
    /// # Returns
    /// The stored row.
    pub fn create(&mut self, title: &str) -> DocumentRow {
        let title = title.trim();
        let row = DocumentRow {
            id: DocumentId::new(Uuid::new_v4().to_string()),
            title: if title.is_empty() {
                SEED_TITLES[0].to_string()
            } else {
                title.to_string()
            },
            shared: false,
            created_at: Utc::now(),
        };
        info!(id = %row.id, "created document");
        self.insert(row.clone());
        row
    }

    /// Serves `request.count` rows following `request.cursor`.
    ///
    /// The cursor is a row key rather than an offset, so rows created or
    /// removed since the previous page neither repeat nor get skipped.
    pub fn page(&self, request: &PageRequest) -> Page {
        let start = match &request.cursor {
            Some(cursor) => self.rows.partition_point(|row| !cursor.precedes(row)),
            None => 0,
        };
        let end = start.saturating_add(request.count).min(self.rows.len());
        let items = self.rows[start..end].to_vec();
        let next_cursor = items
            .last()
            .map(PageCursor::after)
            .or_else(|| request.cursor.clone());
        Page {
            items,
            next_cursor,
            is_done: end >= self.rows.len(),
        }
    }

    /// Renames a document.
    ///
    /// # Errors
    /// [`QuireError::BadRequest`] for blank titles, [`QuireError::NotFound`]
    /// for unknown ids.
    pub fn rename(&mut self, id: &DocumentId, title: &str) -> Result<DocumentRow, QuireError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(QuireError::BadRequest("title must not be blank".to_string()));
        }
        let row = self
            .rows
            .iter_mut()
            .find(|row| &row.id == id)
            .ok_or_else(|| QuireError::NotFound(id.to_string()))?;
        row.title = title.to_string();
        info!(id = %id, "renamed document");
        Ok(row.clone())
    }

    /// Removes a document.
    ///
    /// # Errors
    /// [`QuireError::NotFound`] for unknown ids.
    pub fn remove(&mut self, id: &DocumentId) -> Result<(), QuireError> {
        let idx = self
            .rows
            .iter()
            .position(|row| &row.id == id)
            .ok_or_else(|| QuireError::NotFound(id.to_string()))?;
        self.rows.remove(idx);
        info!(id = %id, "removed document");
        Ok(())
    }
}
