//! Filesystem plugin-backed photo storage.
//!
//! Both adapters use the same plugin transport. In a browser the plugin persists files in
//! IndexedDB and `get_uri` yields a synthetic path; inside a native shell it writes real files and
//! `get_uri` yields a `file://` URI.

use photo_host::{Directory, FileReadResult, FileUriResult, PhotoFilesystem, PhotoFsFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser photo storage backed by the filesystem plugin's IndexedDB implementation.
///
/// The browser store has no device paths, so every call must name a [`Directory`].
pub struct WebPhotoFilesystem;

fn require_directory(path: &str, directory: Option<Directory>) -> Result<Directory, String> {
    directory.ok_or_else(|| format!("browser photo storage requires a directory for `{path}`"))
}

impl PhotoFilesystem for WebPhotoFilesystem {
    fn write_file<'a>(
        &'a self,
        path: &'a str,
        data: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let directory = require_directory(path, directory)?;
            bridge::fs_write_file(path, data, Some(directory)).await
        })
    }

    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        Box::pin(async move {
            let directory = require_directory(path, directory)?;
            bridge::fs_read_file(path, Some(directory)).await
        })
    }

    fn get_uri<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        Box::pin(async move {
            let directory = require_directory(path, directory)?;
            bridge::fs_get_uri(path, Some(directory)).await
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Native-shell photo storage backed by the device filesystem.
///
/// A `None` directory addresses an absolute device path, such as a fresh camera capture.
pub struct HybridPhotoFilesystem;

impl PhotoFilesystem for HybridPhotoFilesystem {
    fn write_file<'a>(
        &'a self,
        path: &'a str,
        data: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::fs_write_file(path, data, directory).await })
    }

    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        Box::pin(async move { bridge::fs_read_file(path, directory).await })
    }

    fn get_uri<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        Box::pin(async move { bridge::fs_get_uri(path, directory).await })
    }
}
