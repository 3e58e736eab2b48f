//! State transitions for backend events, pagination, and document mutations.

use super::{editor_mut, QuireApp};
use crate::backend::{DocCmd, DocEvent};
use quire_core::document_menu::{DocumentMenu, DocumentMutation, PendingAction};
use quire_core::documents::DocumentId;
use quire_core::QuireError;
use tracing::{debug, warn};

impl QuireApp {
    /// Sends a command to the worker, reporting a dead worker in the status bar.
    ///
    /// # Returns
    /// `true` when the command was queued.
    fn send_cmd(&mut self, command: DocCmd, label: &str) -> bool {
        if self.backend.cmd_tx.send(command).is_ok() {
            return true;
        }
        let err = QuireError::Worker("backend unavailable".to_string());
        warn!("{} failed: {}", label, err);
        self.set_status(format!("{} failed: {}", label, err));
        false
    }

    /// Resets the list and asks for the first page.
    pub(super) fn request_first_page(&mut self) {
        let request = self.documents.first_page(self.config.initial_page_size);
        if !self.send_cmd(DocCmd::LoadPage { request }, "Load") {
            self.documents.fail_page();
        }
    }

    /// Load-more click: asks the worker for the next page when the table allows it.
    pub(super) fn load_more(&mut self) {
        let status = self.documents.status();
        let mut request = None;
        self.table.request_more(status, |count| {
            request = self.documents.load_more(count);
        });
        let Some(request) = request else {
            return;
        };
        if !self.send_cmd(DocCmd::LoadPage { request }, "Load more") {
            self.documents.fail_page();
        }
    }

    pub(super) fn create_document(&mut self) {
        let title = std::mem::take(&mut self.new_document_title);
        self.send_cmd(DocCmd::Create { title }, "Create");
    }

    pub(super) fn apply_mutation(&mut self, mutation: DocumentMutation) {
        let command = match mutation {
            DocumentMutation::Rename { id, title } => DocCmd::Rename { id, title },
            DocumentMutation::Remove { id } => DocCmd::Remove { id },
        };
        self.send_cmd(command, "Update");
    }

    /// Row click outside the menu column.
    pub(super) fn open_document(&mut self, id: DocumentId) {
        debug!(id = %id, "opening document");
        self.open_document = Some(id);
    }

    /// Keeps one menu per loaded row, with titles in sync.
    fn sync_menus(&mut self) {
        let Some(rows) = self.documents.documents() else {
            self.menus.clear();
            return;
        };
        for row in rows {
            self.menus
                .entry(row.id.clone())
                .or_insert_with(|| DocumentMenu::new(row.id.clone(), row.title.clone()))
                .set_title(row.title.clone());
        }
        self.menus
            .retain(|id, _| rows.iter().any(|row| &row.id == id));
    }

    /// Makes `id`'s pending dialog the only one, cancelling any other menu's.
    pub(super) fn claim_dialog(&mut self, id: &DocumentId) {
        for (other, menu) in self.menus.iter_mut() {
            if other != id && *menu.pending() != PendingAction::None {
                debug!(id = %other, "dropping superseded document dialog");
                menu.cancel();
            }
        }
    }

    pub(super) fn apply_event(&mut self, event: DocEvent) {
        match event {
            DocEvent::PageLoaded { page } => {
                self.documents.apply_page(page);
                self.sync_menus();
            }
            DocEvent::Created { row } => {
                let title = row.title.clone();
                self.documents.prepend(row);
                self.sync_menus();
                self.set_status(format!("Created \"{}\"", title));
            }
            DocEvent::Renamed { row } => {
                let title = row.title.clone();
                if self.documents.replace(row) {
                    self.sync_menus();
                }
                self.set_status(format!("Renamed to \"{}\"", title));
            }
            DocEvent::Removed { id } => {
                if self.documents.remove(&id) {
                    self.sync_menus();
                }
                if self.open_document.as_ref() == Some(&id) {
                    self.open_document = None;
                }
                self.set_status("Document removed");
            }
            DocEvent::Error { message } => {
                warn!("backend error: {}", message);
                self.set_status(message);
            }
        }
    }

    /// Finishes an image upload once the host reports the picked file.
    pub(super) fn poll_image_pick(&mut self) {
        let Ok(file) = self.host.image_rx.try_recv() else {
            return;
        };
        if self
            .toolbar
            .image
            .complete_upload(editor_mut(&mut self.editor), file)
        {
            self.set_status("Image inserted");
        }
    }
}
