use std::rc::Rc;

use photo_host::{
    CameraFuture, CameraOptions, CameraService, CapturedPhoto, Directory, FetchedBlob,
    FileReadResult, FileUriResult, HostPlatform, HostServices, HostStrategy, KeyValueFuture,
    KeyValueStore, NoopCameraService, NoopKeyValueStore, NoopPhotoFilesystem, NoopResourceFetcher,
    PhotoFilesystem, PhotoFsFuture, ResourceFetcher, ResourceFetcherFuture, SystemClock,
};

use crate::{
    HybridCameraService, HybridKeyValueStore, HybridPhotoFilesystem, WebCameraService,
    WebKeyValueStore, WebPhotoFilesystem, WebResourceFetcher, WebviewPlatform,
};

/// Selects the adapter family for the classified platform.
///
/// The `host-stub` feature forces no-op adapters regardless of the platform.
pub fn selected_host_strategy(platform: &dyn HostPlatform) -> HostStrategy {
    if cfg!(feature = "host-stub") {
        return HostStrategy::Stub;
    }
    if platform.is_hybrid() {
        HostStrategy::Hybrid
    } else {
        HostStrategy::Browser
    }
}

/// Adapter enum that erases the concrete camera backend behind [`CameraService`].
#[derive(Debug, Clone, Copy)]
pub enum CameraServiceAdapter {
    /// Browser camera.
    Browser(WebCameraService),
    /// Native-shell camera.
    Hybrid(HybridCameraService),
    /// No-op fallback for headless builds.
    Stub(NoopCameraService),
}

impl CameraService for CameraServiceAdapter {
    fn get_photo<'a>(
        &'a self,
        options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>> {
        match self {
            Self::Browser(service) => service.get_photo(options),
            Self::Hybrid(service) => service.get_photo(options),
            Self::Stub(service) => service.get_photo(options),
        }
    }
}

/// Adapter enum that erases the concrete storage backend behind [`PhotoFilesystem`].
#[derive(Debug, Clone, Copy)]
pub enum PhotoFilesystemAdapter {
    /// Browser IndexedDB-backed photo storage.
    Browser(WebPhotoFilesystem),
    /// Native-shell device filesystem.
    Hybrid(HybridPhotoFilesystem),
    /// No-op fallback for headless builds.
    Stub(NoopPhotoFilesystem),
}

impl PhotoFilesystem for PhotoFilesystemAdapter {
    fn write_file<'a>(
        &'a self,
        path: &'a str,
        data: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(fs) => fs.write_file(path, data, directory),
            Self::Hybrid(fs) => fs.write_file(path, data, directory),
            Self::Stub(fs) => fs.write_file(path, data, directory),
        }
    }

    fn read_file<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileReadResult, String>> {
        match self {
            Self::Browser(fs) => fs.read_file(path, directory),
            Self::Hybrid(fs) => fs.read_file(path, directory),
            Self::Stub(fs) => fs.read_file(path, directory),
        }
    }

    fn get_uri<'a>(
        &'a self,
        path: &'a str,
        directory: Option<Directory>,
    ) -> PhotoFsFuture<'a, Result<FileUriResult, String>> {
        match self {
            Self::Browser(fs) => fs.get_uri(path, directory),
            Self::Hybrid(fs) => fs.get_uri(path, directory),
            Self::Stub(fs) => fs.get_uri(path, directory),
        }
    }
}

/// Adapter enum that erases the concrete key-value backend behind [`KeyValueStore`].
#[derive(Debug, Clone, Copy)]
pub enum KeyValueStoreAdapter {
    /// Browser `localStorage`.
    Browser(WebKeyValueStore),
    /// Native-shell preferences plugin.
    Hybrid(HybridKeyValueStore),
    /// No-op fallback for headless builds.
    Stub(NoopKeyValueStore),
}

impl KeyValueStore for KeyValueStoreAdapter {
    fn get<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.get(key),
            Self::Hybrid(store) => store.get(key),
            Self::Stub(store) => store.get(key),
        }
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.set(key, value),
            Self::Hybrid(store) => store.set(key, value),
            Self::Stub(store) => store.set(key, value),
        }
    }

    fn remove<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.remove(key),
            Self::Hybrid(store) => store.remove(key),
            Self::Stub(store) => store.remove(key),
        }
    }
}

/// Adapter enum that erases the concrete fetch backend behind [`ResourceFetcher`].
#[derive(Debug, Clone, Copy)]
pub enum ResourceFetcherAdapter {
    /// Browser `fetch` + `FileReader`.
    Browser(WebResourceFetcher),
    /// Native-shell build that reuses the webview fetcher.
    Hybrid(WebResourceFetcher),
    /// No-op fallback for headless builds.
    Stub(NoopResourceFetcher),
}

impl ResourceFetcher for ResourceFetcherAdapter {
    fn fetch_blob<'a>(
        &'a self,
        uri: &'a str,
    ) -> ResourceFetcherFuture<'a, Result<FetchedBlob, String>> {
        match self {
            Self::Browser(fetcher) | Self::Hybrid(fetcher) => fetcher.fetch_blob(uri),
            Self::Stub(fetcher) => fetcher.fetch_blob(uri),
        }
    }

    fn read_as_data_url<'a>(
        &'a self,
        blob: &'a FetchedBlob,
    ) -> ResourceFetcherFuture<'a, Result<String, String>> {
        match self {
            Self::Browser(fetcher) | Self::Hybrid(fetcher) => fetcher.read_as_data_url(blob),
            Self::Stub(fetcher) => fetcher.read_as_data_url(blob),
        }
    }
}

/// Builds the camera adapter for `strategy`.
pub fn camera_service(strategy: HostStrategy) -> CameraServiceAdapter {
    match strategy {
        HostStrategy::Browser => CameraServiceAdapter::Browser(WebCameraService),
        HostStrategy::Hybrid => CameraServiceAdapter::Hybrid(HybridCameraService),
        HostStrategy::Stub | HostStrategy::Memory => CameraServiceAdapter::Stub(NoopCameraService),
    }
}

/// Builds the photo filesystem adapter for `strategy`.
pub fn photo_filesystem(strategy: HostStrategy) -> PhotoFilesystemAdapter {
    match strategy {
        HostStrategy::Browser => PhotoFilesystemAdapter::Browser(WebPhotoFilesystem),
        HostStrategy::Hybrid => PhotoFilesystemAdapter::Hybrid(HybridPhotoFilesystem),
        HostStrategy::Stub | HostStrategy::Memory => {
            PhotoFilesystemAdapter::Stub(NoopPhotoFilesystem)
        }
    }
}

/// Builds the key-value adapter for `strategy`.
pub fn key_value_store(strategy: HostStrategy) -> KeyValueStoreAdapter {
    match strategy {
        HostStrategy::Browser => KeyValueStoreAdapter::Browser(WebKeyValueStore),
        HostStrategy::Hybrid => KeyValueStoreAdapter::Hybrid(HybridKeyValueStore),
        HostStrategy::Stub | HostStrategy::Memory => KeyValueStoreAdapter::Stub(NoopKeyValueStore),
    }
}

/// Builds the resource fetcher adapter for `strategy`.
pub fn resource_fetcher(strategy: HostStrategy) -> ResourceFetcherAdapter {
    match strategy {
        HostStrategy::Browser => ResourceFetcherAdapter::Browser(WebResourceFetcher),
        HostStrategy::Hybrid => ResourceFetcherAdapter::Hybrid(WebResourceFetcher),
        HostStrategy::Stub | HostStrategy::Memory => {
            ResourceFetcherAdapter::Stub(NoopResourceFetcher)
        }
    }
}

/// Composes the host service bundle for the running webview.
///
/// Transports are chosen once from the current classification; the bundle keeps the live
/// [`WebviewPlatform`] classifier for per-operation checks in the gallery core.
pub fn build_host_services() -> HostServices {
    let platform = WebviewPlatform;
    let strategy = selected_host_strategy(&platform);
    HostServices {
        platform: Rc::new(platform),
        camera: Rc::new(camera_service(strategy)),
        filesystem: Rc::new(photo_filesystem(strategy)),
        key_value: Rc::new(key_value_store(strategy)),
        fetcher: Rc::new(resource_fetcher(strategy)),
        clock: Rc::new(SystemClock),
        host_strategy: strategy,
    }
}

#[cfg(test)]
mod tests {
    use photo_host::FixedPlatform;

    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn strategy_follows_platform_classification() {
        assert_eq!(
            selected_host_strategy(&FixedPlatform::hybrid()),
            HostStrategy::Hybrid
        );
        assert_eq!(
            selected_host_strategy(&FixedPlatform::web()),
            HostStrategy::Browser
        );
    }

    #[cfg(feature = "host-stub")]
    #[test]
    fn stub_feature_overrides_classification() {
        assert_eq!(
            selected_host_strategy(&FixedPlatform::hybrid()),
            HostStrategy::Stub
        );
    }

    #[test]
    fn factories_pick_matching_variants() {
        assert!(matches!(
            camera_service(HostStrategy::Hybrid),
            CameraServiceAdapter::Hybrid(_)
        ));
        assert!(matches!(
            photo_filesystem(HostStrategy::Browser),
            PhotoFilesystemAdapter::Browser(_)
        ));
        assert!(matches!(
            key_value_store(HostStrategy::Stub),
            KeyValueStoreAdapter::Stub(_)
        ));
        assert!(matches!(
            resource_fetcher(HostStrategy::Hybrid),
            ResourceFetcherAdapter::Hybrid(_)
        ));
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "host-stub")))]
    #[test]
    fn non_wasm_bundle_is_browser_composed() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Browser);
        assert!(!services.platform.is_hybrid());
    }
}
