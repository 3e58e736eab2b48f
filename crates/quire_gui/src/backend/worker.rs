//! Background worker thread for document data access.

use crate::backend::{DocCmd, DocEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use quire_core::documents::{DocumentId, DocumentStore, PageRequest};
use std::thread;
use tracing::{error, info};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<DocCmd>,
    pub evt_rx: Receiver<DocEvent>,
}

impl BackendHandle {
    /// Wraps existing channels so UI tests can drive the app without a worker.
    #[cfg(test)]
    pub(crate) fn from_test_channels(cmd_tx: Sender<DocCmd>, evt_rx: Receiver<DocEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

struct WorkerState {
    store: DocumentStore,
    evt_tx: Sender<DocEvent>,
}

fn send_error(evt_tx: &Sender<DocEvent>, message: String) {
    let _ = evt_tx.send(DocEvent::Error { message });
}

fn handle_load_page(state: &mut WorkerState, request: PageRequest) {
    let page = state.store.page(&request);
    info!(
        after = ?request.cursor.as_ref().map(|cursor| cursor.id.as_str()),
        count = request.count,
        returned = page.items.len(),
        done = page.is_done,
        "served document page"
    );
    let _ = state.evt_tx.send(DocEvent::PageLoaded { page });
}

fn handle_create(state: &mut WorkerState, title: String) {
    let row = state.store.create(&title);
    let _ = state.evt_tx.send(DocEvent::Created { row });
}

fn handle_rename(state: &mut WorkerState, id: DocumentId, title: String) {
    match state.store.rename(&id, &title) {
        Ok(row) => {
            let _ = state.evt_tx.send(DocEvent::Renamed { row });
        }
        Err(err) => {
            error!("backend rename failed: {}", err);
            send_error(&state.evt_tx, format!("Rename failed: {}", err));
        }
    }
}

fn handle_remove(state: &mut WorkerState, id: DocumentId) {
    match state.store.remove(&id) {
        Ok(()) => {
            let _ = state.evt_tx.send(DocEvent::Removed { id });
        }
        Err(err) => {
            error!("backend remove failed: {}", err);
            send_error(&state.evt_tx, format!("Remove failed: {}", err));
        }
    }
}

/// Spawn the backend worker thread that owns the document store.
///
/// The worker replies with [`DocEvent`] values that are polled each frame, so
/// the UI never waits on the data layer.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(store: DocumentStore) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("quire-backend".to_string())
        .spawn(move || {
            let mut state = WorkerState { store, evt_tx };
            for cmd in cmd_rx.iter() {
                match cmd {
                    DocCmd::LoadPage { request } => handle_load_page(&mut state, request),
                    DocCmd::Create { title } => handle_create(&mut state, title),
                    DocCmd::Rename { id, title } => handle_rename(&mut state, id, title),
                    DocCmd::Remove { id } => handle_remove(&mut state, id),
                }
            }
            info!("backend worker stopped");
        })
        .expect("spawn backend thread");

    BackendHandle { cmd_tx, evt_rx }
}
