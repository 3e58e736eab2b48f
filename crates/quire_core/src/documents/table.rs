//! Pure view model of the paginated document table.

use super::{DocumentRow, PaginationStatus};
use crate::config::DEFAULT_PAGE_SIZE;

/// Header labels, in column order. The second column hosts the row menu.
pub const TABLE_COLUMNS: [&str; 4] = ["Name", "", "Shared", "Created at"];

/// Message rendered in place of rows when the sequence is empty.
pub const EMPTY_MESSAGE: &str = "No documents found";

/// What the table body shows for the supplied sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody<'a> {
    /// Sequence absent: show a loading indicator and no table.
    Loading,
    /// Sequence present but empty: one message row spanning every column.
    Empty,
    Rows(&'a [DocumentRow]),
}

impl<'a> TableBody<'a> {
    pub fn from_documents(documents: Option<&'a [DocumentRow]>) -> Self {
        match documents {
            None => Self::Loading,
            Some([]) => Self::Empty,
            Some(rows) => Self::Rows(rows),
        }
    }

    /// Number of data rows rendered.
    pub fn data_rows(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Loading | Self::Empty => 0,
        }
    }

    /// Number of "no documents" message rows rendered.
    pub fn message_rows(&self) -> usize {
        usize::from(matches!(self, Self::Empty))
    }

    pub fn shows_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Content of the trailing load-more button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreLabel {
    Text(&'static str),
    Spinner,
}

/// Enabled state and label of the load-more button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreControl {
    pub enabled: bool,
    pub label: LoadMoreLabel,
}

impl LoadMoreControl {
    pub fn for_status(status: PaginationStatus) -> Self {
        match status {
            PaginationStatus::CanLoadMore => Self {
                enabled: true,
                label: LoadMoreLabel::Text("Load more"),
            },
            PaginationStatus::LoadingMore => Self {
                enabled: false,
                label: LoadMoreLabel::Spinner,
            },
            PaginationStatus::Exhausted => Self {
                enabled: false,
                label: LoadMoreLabel::Text("End of results"),
            },
        }
    }
}

/// Document table configuration. The document list and status are re-supplied
/// by the caller on every render; nothing is cached here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTable {
    page_size: usize,
}

impl Default for DocumentTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DocumentTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn body<'a>(&self, documents: Option<&'a [DocumentRow]>) -> TableBody<'a> {
        TableBody::from_documents(documents)
    }

    pub fn load_more_control(&self, status: PaginationStatus) -> LoadMoreControl {
        LoadMoreControl::for_status(status)
    }

    /// Handles a click on the load-more button.
    ///
    /// # Returns
    /// `true` when `load_more` was invoked with the page size.
    pub fn request_more<F>(&self, status: PaginationStatus, load_more: F) -> bool
    where
        F: FnOnce(usize),
    {
        if !self.load_more_control(status).enabled {
            return false;
        }
        load_more(self.page_size);
        true
    }
}
