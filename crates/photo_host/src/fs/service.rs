//! Photo filesystem service contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::types::{Directory, FileReadResult, FileUriResult};
use crate::encoding::strip_data_url_prefix;

/// Object-safe boxed future used by [`PhotoFilesystem`] async methods.
pub type PhotoFsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Path-addressed byte storage scoped to named logical directories.
///
/// A `None` directory means `path` is already absolute (for example a native capture path).
pub trait PhotoFilesystem {
    /// Writes base64 content to `path`.
    ///
    /// `data` may be bare base64 or a base64 data URL; the stored content is the bare payload.
    fn write_file<'a>(
        &'a self,
        path: &'a str,
        data: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>>;

    /// Reads `path` and returns its content as bare base64.
    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>>;

    /// Resolves the absolute platform URI of `path`.
    fn get_uri<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Filesystem adapter for unsupported targets.
pub struct NoopPhotoFilesystem;

impl NoopPhotoFilesystem {
    fn unsupported_error(op: &str) -> String {
        format!("photo filesystem unavailable: {op}")
    }
}

impl PhotoFilesystem for NoopPhotoFilesystem {
    fn write_file<'a>(
        &'a self,
        _path: &'a str,
        _data: &'a str,
        _directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unsupported_error("write_file")) })
    }

    fn read_file<'a>(
        &'a self,
        _path: &'a str,
        _directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        Box::pin(async { Err(Self::unsupported_error("read_file")) })
    }

    fn get_uri<'a>(
        &'a self,
        _path: &'a str,
        _directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        Box::pin(async { Err(Self::unsupported_error("get_uri")) })
    }
}

type FileKey = (Option<Directory>, String);

#[derive(Debug, Clone, Default)]
/// In-memory filesystem keyed by directory and path.
///
/// Relative paths resolve to `file:///memory/<directory>/<path>` URIs.
pub struct MemoryPhotoFilesystem {
    inner: Rc<RefCell<HashMap<FileKey, String>>>,
}

impl MemoryPhotoFilesystem {
    /// Stores raw bytes at `path`, bypassing the async contract.
    pub fn insert_bytes(&self, path: impl Into<String>, directory: Option<Directory>, bytes: &[u8]) {
        self.inner
            .borrow_mut()
            .insert((directory, path.into()), STANDARD.encode(bytes));
    }

    /// Returns the stored bare base64 content at `path`.
    pub fn contents(&self, path: &str, directory: Option<Directory>) -> Option<String> {
        self.inner
            .borrow()
            .get(&(directory, path.to_string()))
            .cloned()
    }

    /// Removes `path`, simulating a file deleted outside the gallery.
    pub fn remove(&self, path: &str, directory: Option<Directory>) {
        self.inner.borrow_mut().remove(&(directory, path.to_string()));
    }

    /// Returns how many files are stored.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when no files are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    fn resolve_uri(path: &str, directory: Option<Directory>) -> String {
        match directory {
            Some(directory) => format!(
                "file:///memory/{}/{}",
                directory.as_str().to_ascii_lowercase(),
                path.trim_start_matches('/')
            ),
            None if path.contains("://") => path.to_string(),
            None => format!("file://{path}"),
        }
    }
}

impl PhotoFilesystem for MemoryPhotoFilesystem {
    fn write_file<'a>(
        &'a self,
        path: &'a str,
        data: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if path.is_empty() {
                return Err("path must not be empty".to_string());
            }
            self.inner.borrow_mut().insert(
                (directory, path.to_string()),
                strip_data_url_prefix(data).to_string(),
            );
            Ok(())
        })
    }

    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        Box::pin(async move {
            self.contents(path, directory)
                .map(|data| FileReadResult { data })
                .ok_or_else(|| format!("File does not exist: {path}"))
        })
    }

    fn get_uri<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        Box::pin(async move {
            Ok(FileUriResult {
                uri: Self::resolve_uri(path, directory),
            })
        })
    }
}
