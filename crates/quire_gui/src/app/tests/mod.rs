//! App-level tests that drive state through the command/event channels.

use super::*;
use crate::backend::{BackendHandle, DocCmd, DocEvent};
use chrono::{TimeZone, Utc};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use quire_core::documents::{DocumentRow, Page, PageCursor, PageRequest};


struct TestHarness {
    app: QuireApp,
    cmd_rx: Receiver<DocCmd>,
    evt_tx: Sender<DocEvent>,
}

impl TestHarness {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        let (cmd_tx, cmd_rx) = unbounded();
        let (evt_tx, evt_rx) = unbounded();
        let app = QuireApp::with_backend(config, BackendHandle::from_test_channels(cmd_tx, evt_rx));
        Self {
            app,
            cmd_rx,
            evt_tx,
        }
    }

    fn next_cmd(&self) -> DocCmd {
        self.cmd_rx.try_recv().expect("expected command")
    }

    fn assert_no_cmd(&self) {
        assert!(matches!(self.cmd_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    /// Pushes an event through the worker channel and drains it like a frame would.
    fn deliver(&mut self, event: DocEvent) {
        self.evt_tx.send(event).expect("send event");
        while let Ok(event) = self.app.backend.evt_rx.try_recv() {
            self.app.apply_event(event);
        }
    }

    /// Consumes the initial LoadPage and answers it with `rows`.
    fn load_first_page(&mut self, rows: Vec<DocumentRow>, is_done: bool) {
        let DocCmd::LoadPage { request } = self.next_cmd() else {
            panic!("expected initial page request");
        };
        let next_cursor = rows.last().map(PageCursor::after).or(request.cursor);
        self.deliver(DocEvent::PageLoaded {
            page: Page {
                items: rows,
                next_cursor,
                is_done,
            },
        });
    }
}

fn test_row(id: &str, title: &str) -> DocumentRow {
    DocumentRow {
        id: DocumentId::new(id),
        title: title.to_string(),
        shared: false,
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

fn test_rows(count: usize) -> Vec<DocumentRow> {
    (0..count)
        .map(|idx| test_row(&format!("doc-{}", idx), &format!("Document {}", idx)))
        .collect()
}

#[test]
fn first_page_uses_initial_page_size() {
    let config = Config {
        initial_page_size: 9,
        page_size: 3,
        ..Config::default()
    };
    let harness = TestHarness::with_config(config);
    match harness.next_cmd() {
        DocCmd::LoadPage { request } => assert_eq!(
            request,
            PageRequest {
                cursor: None,
                count: 9
            }
        ),
        other => panic!("unexpected command: {:?}", other),
    }
    assert_eq!(harness.app.documents.documents(), None);
    assert_eq!(harness.app.documents.status(), PaginationStatus::LoadingMore);
}

#[test]
fn dead_backend_settles_first_page_and_reports() {
    let (cmd_tx, cmd_rx) = unbounded();
    let (_evt_tx, evt_rx) = unbounded::<DocEvent>();
    drop(cmd_rx);
    let app = QuireApp::with_backend(
        Config::default(),
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
    );
    assert_eq!(app.documents.documents(), Some(&[][..]));
    assert_eq!(app.documents.status(), PaginationStatus::CanLoadMore);
    let status = app.status.as_ref().expect("status");
    assert!(status.text.contains("backend unavailable"));
}
