//! Desktop implementation of the host facilities the toolbar and menu use.

use crossbeam_channel::{unbounded, Receiver, Sender};
use quire_core::host::{HostActions, ImageFile, IMAGE_EXTENSIONS};
use std::thread;
use tracing::{info, warn};

/// Host facilities backed by egui and native dialogs.
///
/// URL opens are queued and flushed through the egui context on the next
/// frame. Image picks run on a helper thread and report once through
/// `image_rx`.
pub(super) struct DesktopHost {
    image_tx: Sender<Option<ImageFile>>,
    pub(super) image_rx: Receiver<Option<ImageFile>>,
    pending_urls: Vec<String>,
    print_requests: usize,
}

impl DesktopHost {
    pub(super) fn new() -> Self {
        let (image_tx, image_rx) = unbounded();
        Self {
            image_tx,
            image_rx,
            pending_urls: Vec::new(),
            print_requests: 0,
        }
    }

    pub(super) fn take_pending_urls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_urls)
    }

    #[cfg(test)]
    pub(super) fn print_requests(&self) -> usize {
        self.print_requests
    }

    /// Feeds a pick result as if the dialog had completed.
    #[cfg(test)]
    pub(super) fn deliver_image(&self, file: Option<ImageFile>) {
        let _ = self.image_tx.send(file);
    }
}

fn pick_image_file() -> Option<ImageFile> {
    let path = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()?;
    match ImageFile::read(&path) {
        Ok(file) => Some(file),
        Err(err) => {
            warn!("image read failed for {}: {}", path.display(), err);
            None
        }
    }
}

impl HostActions for DesktopHost {
    fn print(&mut self) {
        self.print_requests += 1;
        warn!("print requested; no print facility is available on this platform");
    }

    fn open_in_new_tab(&mut self, url: &str) {
        info!(url, "opening document in new tab");
        self.pending_urls.push(url.to_string());
    }

    fn pick_image(&mut self) {
        let tx = self.image_tx.clone();
        let spawned = thread::Builder::new()
            .name("quire-image-pick".to_string())
            .spawn(move || {
                let _ = tx.send(pick_image_file());
            });
        if let Err(err) = spawned {
            warn!("failed to start image picker: {}", err);
            let _ = self.image_tx.send(None);
        }
    }
}
