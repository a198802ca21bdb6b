//! Typed host-domain contracts and shared models for the photo gallery.
//!
//! This crate is the API-first boundary for the capabilities the gallery core consumes: platform
//! classification, camera capture, path-addressed photo storage, key-value persistence, resource
//! fetching, and time. Concrete browser and native-shell adapters live in `photo_host_web`; the
//! in-memory adapters here back tests and headless embedding.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod camera;
pub mod encoding;
pub mod fetch;
pub mod fs;
pub mod host;
pub mod platform;
pub mod storage;
pub mod time;
pub mod webview;

pub use camera::{
    CameraFuture, CameraOptions, CameraResultType, CameraService, CameraSource, CapturedPhoto,
    MemoryCameraService, NoopCameraService,
};
pub use encoding::{
    base64_to_data_url, bytes_to_data_url, decode_base64_payload, is_data_url,
    strip_data_url_prefix,
};
pub use fetch::{
    FetchedBlob, MemoryResourceFetcher, NoopResourceFetcher, ResourceFetcher, ResourceFetcherFuture,
};
pub use fs::service::{MemoryPhotoFilesystem, NoopPhotoFilesystem, PhotoFilesystem, PhotoFsFuture};
pub use fs::types::{Directory, FileReadResult, FileUriResult};
pub use host::{HostServices, HostStrategy, MemoryHost};
pub use platform::{FixedPlatform, HostPlatform, PlatformKind};
pub use storage::kv::{KeyValueFuture, KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore};
pub use time::{unix_time_ms_now, Clock, ManualClock, SystemClock};
pub use webview::{convert_file_src, DEFAULT_WEBVIEW_ORIGIN, WEBVIEW_FILE_PATH_PREFIX};
