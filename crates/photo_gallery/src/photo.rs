//! Photo models held in memory and persisted in the index.

use serde::{Deserialize, Serialize};

/// A captured photo as held by the in-memory index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Generated file name the bytes are stored under.
    pub filepath: String,
    /// URI usable as an image source.
    pub display_path: String,
    /// `data:` URL rebuilt on load in browser hosts. Never persisted.
    pub encoded_data: Option<String>,
}

impl Photo {
    /// Creates a photo without rehydrated data.
    pub fn new(filepath: impl Into<String>, display_path: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            display_path: display_path.into(),
            encoded_data: None,
        }
    }

    /// Returns the value to bind as the image source: rehydrated data when present, otherwise the
    /// display path.
    pub fn display_source(&self) -> &str {
        self.encoded_data.as_deref().unwrap_or(&self.display_path)
    }
}

/// Persisted shape of an index entry.
///
/// Older stores named the display path `webviewPath` and embedded the image under `base64`; the
/// former is read as an alias and the latter is dropped. An entry saved without a display path
/// loads with an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPhoto {
    /// Generated file name.
    pub filepath: String,
    /// Display URI.
    #[serde(default, alias = "webviewPath")]
    pub display_path: String,
}

impl From<&Photo> for StoredPhoto {
    fn from(photo: &Photo) -> Self {
        Self {
            filepath: photo.filepath.clone(),
            display_path: photo.display_path.clone(),
        }
    }
}

impl From<StoredPhoto> for Photo {
    fn from(stored: StoredPhoto) -> Self {
        Self::new(stored.filepath, stored.display_path)
    }
}
