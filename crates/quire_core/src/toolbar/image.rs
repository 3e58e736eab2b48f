//! Image dropdown: upload from disk or insert by URL.

use super::Dropdown;
use crate::editor::{dispatch, CommandChain, EditorCommand, EditorHandle};
use crate::error::QuireError;
use crate::host::{HostActions, ImageFile};
use tracing::debug;

/// Image dropdown state plus the URL dialog it opens.
#[derive(Debug, Clone, Default)]
pub struct ImageControl {
    dropdown: Dropdown,
    dialog_open: bool,
    url: String,
    upload_pending: bool,
}

impl ImageControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Dialog open-state changes coming from the dialog itself (close button,
    /// Escape). The typed URL is kept.
    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut String {
        &mut self.url
    }

    pub fn is_upload_pending(&self) -> bool {
        self.upload_pending
    }

    /// "Upload" entry: asks the host for a file. The result arrives through
    /// [`ImageControl::complete_upload`].
    pub fn request_upload(&mut self, host: &mut dyn HostActions) {
        self.dropdown.close();
        self.upload_pending = true;
        host.pick_image();
    }

    /// Finishes a file pick. Without a file nothing is issued.
    ///
    /// # Returns
    /// `true` when an image command reached the editor.
    pub fn complete_upload(
        &mut self,
        editor: Option<&mut dyn EditorHandle>,
        file: Option<ImageFile>,
    ) -> bool {
        self.upload_pending = false;
        let Some(file) = file else {
            debug!("image pick cancelled");
            return false;
        };
        dispatch(
            editor,
            CommandChain::focused().then(EditorCommand::SetImage {
                src: file.to_data_url(),
            }),
        )
    }

    /// "Paste URL" entry: opens the URL dialog.
    pub fn open_url_dialog(&mut self) {
        self.dropdown.close();
        self.dialog_open = true;
    }

    /// Insert button or Enter in the dialog. On success the field is cleared
    /// and the dialog closes.
    ///
    /// # Errors
    /// [`QuireError::EmptyImageSource`] for a blank URL; the dialog stays open.
    pub fn submit_url(&mut self, editor: Option<&mut dyn EditorHandle>) -> Result<(), QuireError> {
        let src = self.url.trim();
        if src.is_empty() {
            debug!("ignoring empty image url");
            return Err(QuireError::EmptyImageSource);
        }
        dispatch(
            editor,
            CommandChain::focused().then(EditorCommand::SetImage {
                src: src.to_string(),
            }),
        );
        self.url.clear();
        self.dialog_open = false;
        Ok(())
    }
}
