//! Host environment facilities the components delegate to.

use crate::error::QuireError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Image bytes chosen by the user, with their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Reads an image from disk, inferring the media type from its extension.
    ///
    /// # Errors
    /// [`QuireError::ImageRead`] when the file cannot be read.
    pub fn read(path: &Path) -> Result<Self, QuireError> {
        let bytes = std::fs::read(path)?;
        Ok(Self {
            mime: image_mime_for_path(path).to_string(),
            bytes,
        })
    }

    /// Embeds the bytes as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// File extensions accepted by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Media type for an image path; unknown extensions map to a generic image type.
pub fn image_mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "image/*",
    }
}

/// Facilities of the environment hosting the editor.
pub trait HostActions {
    /// Hands the current document to the platform's print facility.
    fn print(&mut self);

    /// Opens `url` in a new browser tab or window.
    fn open_in_new_tab(&mut self, url: &str);

    /// Starts an image file pick. The outcome arrives later, once, as
    /// `Option<ImageFile>` through whatever channel the host exposes.
    fn pick_image(&mut self);
}
