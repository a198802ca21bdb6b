use super::*;

fn unsupported() -> String {
    "Native shell plugin APIs are only available when compiled for wasm32".to_string()
}

pub fn is_native_platform() -> bool {
    false
}

pub async fn camera_get_photo(_options: CameraOptions) -> Result<CapturedPhoto, String> {
    Err(unsupported())
}

pub async fn fs_write_file(
    _path: &str,
    _data: &str,
    _directory: Option<Directory>,
) -> Result<(), String> {
    Err(unsupported())
}

pub async fn fs_read_file(
    _path: &str,
    _directory: Option<Directory>,
) -> Result<FileReadResult, String> {
    Err(unsupported())
}

pub async fn fs_get_uri(
    _path: &str,
    _directory: Option<Directory>,
) -> Result<FileUriResult, String> {
    Err(unsupported())
}

pub async fn kv_get(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

pub async fn kv_set(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

pub async fn kv_remove(_key: &str) -> Result<(), String> {
    Ok(())
}
