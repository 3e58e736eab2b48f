//! Protocol types for the desktop backend worker.

use quire_core::documents::{DocumentId, DocumentRow, Page, PageRequest};

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum DocCmd {
    /// Fetch one page of documents in recency order.
    LoadPage { request: PageRequest },
    /// Create a document with the given title.
    Create { title: String },
    /// Rename an existing document.
    Rename { id: DocumentId, title: String },
    /// Remove a document by id.
    Remove { id: DocumentId },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum DocEvent {
    /// Response containing the requested page.
    PageLoaded { page: Page },
    /// Response containing a newly created document.
    Created { row: DocumentRow },
    /// Response confirming a rename.
    Renamed { row: DocumentRow },
    /// Response confirming a removal.
    Removed { id: DocumentId },
    /// A backend failure occurred (unknown id, invalid title, ...).
    Error { message: String },
}
