#![allow(dead_code)]

use std::{cell::Cell, rc::Rc};

use photo_gallery::CancelToken;
use photo_host::{
    CameraFuture, CameraOptions, CameraService, CapturedPhoto, Directory, FetchedBlob,
    FileReadResult, FileUriResult, HostPlatform, KeyValueFuture, KeyValueStore, MemoryCameraService,
    MemoryHost, MemoryKeyValueStore, MemoryPhotoFilesystem, PhotoFilesystem, PhotoFsFuture,
    PlatformKind,
};

/// Queues a browser capture whose blob URL serves `bytes`.
pub fn queue_web_capture(host: &MemoryHost, uri: &str, bytes: &[u8]) {
    host.fetcher
        .insert(uri, FetchedBlob::new("image/jpeg", bytes.to_vec()));
    host.camera.push_capture(CapturedPhoto::web(uri));
}

/// Queues a native capture whose temporary file at `native_path` holds `bytes`.
pub fn queue_native_capture(host: &MemoryHost, native_path: &str, bytes: &[u8]) {
    host.filesystem.insert_bytes(native_path, None, bytes);
    host.camera.push_capture(CapturedPhoto::native(
        photo_host::convert_file_src(native_path, photo_host::DEFAULT_WEBVIEW_ORIGIN),
        native_path,
    ));
}

/// Returns the keys of every object in the stored index.
pub fn stored_field_names(raw: &str) -> Vec<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(raw).expect("stored index is JSON");
    value
        .as_array()
        .expect("stored index is an array")
        .iter()
        .map(|entry| {
            let mut keys: Vec<_> = entry
                .as_object()
                .expect("entry is an object")
                .keys()
                .cloned()
                .collect();
            keys.sort();
            keys
        })
        .collect()
}

/// Classifier whose answer can change between operations.
#[derive(Debug, Clone)]
pub struct SwitchablePlatform(pub Rc<Cell<PlatformKind>>);

impl SwitchablePlatform {
    pub fn new(kind: PlatformKind) -> Self {
        Self(Rc::new(Cell::new(kind)))
    }

    pub fn switch_to(&self, kind: PlatformKind) {
        self.0.set(kind);
    }
}

impl HostPlatform for SwitchablePlatform {
    fn kind(&self) -> PlatformKind {
        self.0.get()
    }
}

/// Key-value store whose writes fail while `fail_sets` is set and whose reads fail while
/// `fail_gets` is set.
#[derive(Debug, Clone, Default)]
pub struct FlakyKeyValueStore {
    pub inner: MemoryKeyValueStore,
    pub fail_sets: Rc<Cell<bool>>,
    pub fail_gets: Rc<Cell<bool>>,
}

impl KeyValueStore for FlakyKeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>> {
        if self.fail_gets.get() {
            return Box::pin(async { Err("storage unavailable".to_string()) });
        }
        self.inner.get(key)
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        if self.fail_sets.get() {
            return Box::pin(async { Err("QuotaExceededError".to_string()) });
        }
        self.inner.set(key, value)
    }

    fn remove<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        self.inner.remove(key)
    }
}

/// Filesystem that rejects writes and delegates everything else.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyFilesystem(pub MemoryPhotoFilesystem);

impl PhotoFilesystem for ReadOnlyFilesystem {
    fn write_file<'a>(
        &'a self,
        _path: &'a str,
        _data: &'a str,
        _directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        Box::pin(async { Err("disk full".to_string()) })
    }

    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        self.0.read_file(path, directory)
    }

    fn get_uri<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        self.0.get_uri(path, directory)
    }
}

/// Filesystem whose URI resolution fails and that delegates everything else.
#[derive(Debug, Clone, Default)]
pub struct UnresolvableFilesystem(pub MemoryPhotoFilesystem);

impl PhotoFilesystem for UnresolvableFilesystem {
    fn write_file<'a>(
        &'a self,
        path: &'a str,
        data: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        self.0.write_file(path, data, directory)
    }

    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        self.0.read_file(path, directory)
    }

    fn get_uri<'a>(
        &'a self,
        _path: &'a str,
        _directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        Box::pin(async { Err("Unable to resolve file URI".to_string()) })
    }
}

/// Camera that cancels `token` as soon as a capture returns.
#[derive(Debug, Clone)]
pub struct CancellingCamera {
    pub inner: MemoryCameraService,
    pub token: CancelToken,
}

impl CameraService for CancellingCamera {
    fn get_photo<'a>(
        &'a self,
        options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>> {
        Box::pin(async move {
            let captured = self.inner.get_photo(options).await;
            self.token.cancel();
            captured
        })
    }
}
