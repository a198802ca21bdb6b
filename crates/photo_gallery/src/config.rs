//! Gallery configuration.

use photo_host::{CameraOptions, CameraResultType, Directory, DEFAULT_WEBVIEW_ORIGIN};
use serde::{Deserialize, Serialize};

use crate::error::{PhotoError, PhotoResult};

/// Key the photo index is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "photos";
const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";
const DEFAULT_FILE_EXTENSION: &str = "jpeg";

/// Settings for a [`crate::PhotoService`].
///
/// Every field falls back to its default when missing from JSON, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    /// Key-value key holding the photo index.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Filesystem directory photos are written to.
    #[serde(default)]
    pub directory: Directory,
    /// Options passed to every capture request.
    #[serde(default)]
    pub camera: CameraOptions,
    /// Origin the native shell serves local files from, without a trailing slash.
    #[serde(default = "default_webview_origin")]
    pub webview_origin: String,
    /// MIME type used when rebuilding data URLs on load.
    #[serde(default = "default_image_mime_type")]
    pub image_mime_type: String,
    /// Extension of generated file names.
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_webview_origin() -> String {
    DEFAULT_WEBVIEW_ORIGIN.to_string()
}

fn default_image_mime_type() -> String {
    DEFAULT_IMAGE_MIME_TYPE.to_string()
}

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            directory: Directory::default(),
            camera: CameraOptions::default(),
            webview_origin: default_webview_origin(),
            image_mime_type: default_image_mime_type(),
            file_extension: default_file_extension(),
        }
    }
}

impl GalleryConfig {
    /// Parses, normalizes, and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Config`] when the JSON is malformed or a value is out of range.
    pub fn from_json_str(raw: &str) -> PhotoResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| PhotoError::Config(format!("parse failed: {err}")))?;
        config.validated()
    }

    /// Normalizes the webview origin and checks every field.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Config`] describing the first invalid field.
    pub fn validated(mut self) -> PhotoResult<Self> {
        self.webview_origin = self.webview_origin.trim_end_matches('/').to_string();

        if self.storage_key.trim().is_empty() {
            return Err(PhotoError::Config("storageKey must not be empty".to_string()));
        }
        if self.file_extension.is_empty() || self.file_extension.contains(['.', '/']) {
            return Err(PhotoError::Config(format!(
                "fileExtension `{}` must be a bare extension",
                self.file_extension
            )));
        }
        if !self.image_mime_type.contains('/') {
            return Err(PhotoError::Config(format!(
                "imageMimeType `{}` is not a MIME type",
                self.image_mime_type
            )));
        }
        if self.webview_origin.is_empty() {
            return Err(PhotoError::Config("webviewOrigin must not be empty".to_string()));
        }
        if self.camera.quality > 100 {
            return Err(PhotoError::Config(format!(
                "camera quality {} must be 0-100",
                self.camera.quality
            )));
        }
        // Encoding reads the capture by URI on both platforms.
        if self.camera.result_type != CameraResultType::Uri {
            return Err(PhotoError::Config(
                "camera resultType must be `uri`".to_string(),
            ));
        }
        Ok(self)
    }

    /// Generated file name for a capture taken at `now_ms`.
    pub fn file_name_for(&self, now_ms: u64) -> String {
        format!("{now_ms}.{}", self.file_extension)
    }
}
