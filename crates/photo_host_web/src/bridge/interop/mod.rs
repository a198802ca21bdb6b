//! Shared transport interop for bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use photo_host::{CameraOptions, CapturedPhoto, Directory, FileReadResult, FileUriResult};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[cfg(target_arch = "wasm32")]
pub(crate) use wasm::js_error_to_string;

pub fn is_native_platform() -> bool {
    imp::is_native_platform()
}

pub async fn camera_get_photo(options: CameraOptions) -> Result<CapturedPhoto, String> {
    imp::camera_get_photo(options).await
}

pub async fn fs_write_file(
    path: &str,
    data: &str,
    directory: Option<Directory>,
) -> Result<(), String> {
    imp::fs_write_file(path, data, directory).await
}

pub async fn fs_read_file(
    path: &str,
    directory: Option<Directory>,
) -> Result<FileReadResult, String> {
    imp::fs_read_file(path, directory).await
}

pub async fn fs_get_uri(path: &str, directory: Option<Directory>) -> Result<FileUriResult, String> {
    imp::fs_get_uri(path, directory).await
}

pub async fn kv_get(key: &str) -> Result<Option<String>, String> {
    imp::kv_get(key).await
}

pub async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    imp::kv_set(key, value).await
}

pub async fn kv_remove(key: &str) -> Result<(), String> {
    imp::kv_remove(key).await
}
