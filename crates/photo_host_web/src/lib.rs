//! Browser and native-shell implementations of [`photo_host`] service contracts.
//!
//! Both contexts run inside a webview: the browser adapters talk to web platform APIs directly,
//! while the hybrid adapters route through the native shell's plugin bridge.
//!
//! Bridge bindings are split by domain under `bridge/`:
//! - `bridge::camera`
//! - `bridge::fs`
//! - `bridge::kv`
//! - `bridge::platform`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Runtime host-strategy selection and concrete adapter factories for service wiring.
pub mod adapters;
mod bridge;
pub mod camera;
pub mod fetch;
pub mod fs;
pub mod platform;
pub mod storage;

pub use adapters::{
    build_host_services, camera_service, key_value_store, photo_filesystem, resource_fetcher,
    selected_host_strategy, CameraServiceAdapter, KeyValueStoreAdapter, PhotoFilesystemAdapter,
    ResourceFetcherAdapter,
};
pub use camera::{HybridCameraService, WebCameraService};
pub use fetch::WebResourceFetcher;
pub use fs::photo_fs::{HybridPhotoFilesystem, WebPhotoFilesystem};
pub use platform::WebviewPlatform;
pub use storage::local_kv::WebKeyValueStore;
pub use storage::native_kv::HybridKeyValueStore;
