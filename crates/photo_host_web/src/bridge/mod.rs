//! Native-shell and browser capability bridge for `photo_host_web` service adapters.
//!
//! This module is organized by host domain (`camera`, `fs`, `kv`, `platform`) while preserving a
//! stable crate-internal API for the adapters.

mod camera;
mod fs;
mod interop;
mod kv;
mod platform;

use photo_host::{CameraOptions, CapturedPhoto, Directory, FileReadResult, FileUriResult};

#[cfg(target_arch = "wasm32")]
pub(crate) use interop::js_error_to_string;

pub fn is_native_platform() -> bool {
    platform::is_native_platform()
}

pub async fn camera_get_photo(options: CameraOptions) -> Result<CapturedPhoto, String> {
    camera::camera_get_photo(options).await
}

pub async fn fs_write_file(
    path: &str,
    data: &str,
    directory: Option<Directory>,
) -> Result<(), String> {
    fs::fs_write_file(path, data, directory).await
}

pub async fn fs_read_file(
    path: &str,
    directory: Option<Directory>,
) -> Result<FileReadResult, String> {
    fs::fs_read_file(path, directory).await
}

pub async fn fs_get_uri(path: &str, directory: Option<Directory>) -> Result<FileUriResult, String> {
    fs::fs_get_uri(path, directory).await
}

pub async fn kv_get(key: &str) -> Result<Option<String>, String> {
    kv::kv_get(key).await
}

pub async fn kv_set(key: &str, value: &str) -> Result<(), String> {
    kv::kv_set(key, value).await
}

pub async fn kv_remove(key: &str) -> Result<(), String> {
    kv::kv_remove(key).await
}
