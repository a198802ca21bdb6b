//! Filesystem data types shared across host contracts and implementations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
/// Named logical directory a relative path is resolved against.
pub enum Directory {
    /// User-visible documents directory.
    #[serde(rename = "DOCUMENTS")]
    Documents,
    /// Private application data directory.
    #[default]
    #[serde(rename = "DATA")]
    Data,
    /// Application cache directory; may be purged by the OS.
    #[serde(rename = "CACHE")]
    Cache,
}

impl Directory {
    /// Returns the bridge token for this directory.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documents => "DOCUMENTS",
            Self::Data => "DATA",
            Self::Cache => "CACHE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// File content returned by a read.
pub struct FileReadResult {
    /// Bare base64 file content.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Absolute URI of a stored file.
pub struct FileUriResult {
    /// Platform URI, typically `file://…` on native shells.
    pub uri: String,
}
