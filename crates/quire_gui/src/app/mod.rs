//! egui application shell: toolbar, editor surface, and the document table.

mod host;
mod state_feedback;
mod state_ops;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle};
use chrono::Utc;
use eframe::egui;
use host::DesktopHost;
use quire_core::document_menu::DocumentMenu;
use quire_core::documents::{
    DocumentId, DocumentStore, DocumentTable, PaginatedDocuments, PaginationStatus,
};
use quire_core::editor::{EditorHandle, MemoryEditor};
use quire_core::toolbar::Toolbar;
use quire_core::Config;
use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};
use style::*;
use tracing::info;

/// Desktop application state.
///
/// Owns the UI state and talks to the background worker via channels so the
/// `update` loop never blocks on the data layer.
pub(crate) struct QuireApp {
    backend: BackendHandle,
    config: Config,
    editor: Option<MemoryEditor>,
    toolbar: Toolbar,
    documents: PaginatedDocuments,
    table: DocumentTable,
    menus: BTreeMap<DocumentId, DocumentMenu>,
    open_document: Option<DocumentId>,
    new_document_title: String,
    host: DesktopHost,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    focus_font_size_input: bool,
    style_applied: bool,
}

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);
#[doc = "Default initial window size for desktop startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1200.0, 760.0];
#[doc = "Minimum enforced window size to keep the toolbar and table usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [960.0, 600.0];

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

/// Mutable editor handle for toolbar controls; `None` until the editor mounts.
fn editor_mut(editor: &mut Option<MemoryEditor>) -> Option<&mut dyn EditorHandle> {
    editor.as_mut().and_then(|editor| editor.handle())
}

/// Read-only editor handle for toolbar displays.
fn editor_ref(editor: &Option<MemoryEditor>) -> Option<&dyn EditorHandle> {
    editor.as_ref().and_then(|editor| editor.view())
}

impl QuireApp {
    /// Construct the app from configuration, seeding an in-memory store and
    /// spawning the backend worker that serves it.
    ///
    /// # Returns
    /// The initialized [`QuireApp`] ready to be handed to `eframe`.
    pub(crate) fn new(config: Config) -> Self {
        let store = DocumentStore::seeded(config.seed_documents, Utc::now());
        info!(documents = store.len(), "seeded document store");
        let backend = spawn_backend(store);
        Self::with_backend(config, backend)
    }

    /// Construct the app around an existing backend handle and request the
    /// first page of documents.
    pub(crate) fn with_backend(config: Config, backend: BackendHandle) -> Self {
        let table = DocumentTable::new(config.page_size);
        let mut app = Self {
            backend,
            config,
            editor: None,
            toolbar: Toolbar::new(),
            documents: PaginatedDocuments::new(),
            table,
            menus: BTreeMap::new(),
            open_document: None,
            new_document_title: String::new(),
            host: DesktopHost::new(),
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            focus_font_size_input: false,
            style_applied: false,
        };
        app.request_first_page();
        app
    }

    /// Mounts the editor on the first frame. Until then every toolbar command
    /// is a no-op.
    fn ensure_editor(&mut self) {
        if self.editor.is_some() {
            return;
        }
        let mut editor = MemoryEditor::new();
        if !self.config.spellcheck {
            editor.set_spellcheck(false);
        }
        self.editor = Some(editor);
        info!("editor mounted");
    }

    fn expire_feedback(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }
    }

    /// One frame of state polling and rendering, independent of `eframe::Frame`.
    pub(crate) fn run_frame(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.expire_feedback(Instant::now());

        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
        self.poll_image_pick();
        for url in self.host.take_pending_urls() {
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }

        self.render_toolbar(ctx);
        self.render_status_bar(ctx);
        self.render_documents_panel(ctx);
        self.render_editor_panel(ctx);
        self.render_image_url_dialog(ctx);
        self.render_document_dialogs(ctx);
        self.render_toasts(ctx);

        // The editor mounts after the first paint, like an engine that
        // initializes asynchronously.
        self.ensure_editor();

        if self.documents.status() == PaginationStatus::LoadingMore
            || self.toolbar.image.is_upload_pending()
        {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}

impl eframe::App for QuireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

#[cfg(test)]
mod tests;
