//! Platform-specific encode, display, and rehydrate steps.

use std::{future::Future, pin::Pin};

use photo_host::{
    base64_to_data_url, convert_file_src, strip_data_url_prefix, CapturedPhoto, HostPlatform,
    HostServices, PlatformKind,
};

use crate::{
    config::GalleryConfig,
    error::{PhotoError, PhotoResult},
    photo::Photo,
};

/// Object-safe boxed future used by [`StorageStrategy`] async methods.
pub type StrategyFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// The platform-dependent half of the capture and load workflows.
pub trait StorageStrategy {
    /// Platform this strategy serves.
    fn kind(&self) -> PlatformKind;

    /// Produces the payload to write for `captured`: bare base64 or a base64 data URL.
    fn encode<'a>(
        &'a self,
        services: &'a HostServices,
        captured: &'a CapturedPhoto,
    ) -> StrategyFuture<'a, PhotoResult<String>>;

    /// Derives the display URI of a photo written under `filepath`.
    fn display_path<'a>(
        &'a self,
        services: &'a HostServices,
        config: &'a GalleryConfig,
        captured: &'a CapturedPhoto,
        filepath: &'a str,
    ) -> StrategyFuture<'a, PhotoResult<String>>;

    /// Rebuilds the transient `encoded_data` of a loaded entry, or `None` when the platform
    /// displays from the path alone.
    fn rehydrate<'a>(
        &'a self,
        services: &'a HostServices,
        config: &'a GalleryConfig,
        photo: &'a Photo,
    ) -> StrategyFuture<'a, Result<Option<String>, String>>;
}

/// Native-shell strategy: direct file reads and webview-rewritten file URIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridStorageStrategy;

impl StorageStrategy for HybridStorageStrategy {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Hybrid
    }

    fn encode<'a>(
        &'a self,
        services: &'a HostServices,
        captured: &'a CapturedPhoto,
    ) -> StrategyFuture<'a, PhotoResult<String>> {
        Box::pin(async move {
            let native_path = captured.native_path.as_deref().ok_or_else(|| {
                PhotoError::Encode("native capture has no file path".to_string())
            })?;
            let read = services
                .filesystem
                .read_file(native_path, None)
                .await
                .map_err(PhotoError::Encode)?;
            Ok(read.data)
        })
    }

    fn display_path<'a>(
        &'a self,
        services: &'a HostServices,
        config: &'a GalleryConfig,
        _captured: &'a CapturedPhoto,
        filepath: &'a str,
    ) -> StrategyFuture<'a, PhotoResult<String>> {
        Box::pin(async move {
            let resolved = services
                .filesystem
                .get_uri(filepath, Some(config.directory))
                .await
                .map_err(|reason| PhotoError::DisplayPath {
                    filepath: filepath.to_string(),
                    reason,
                })?;
            Ok(convert_file_src(&resolved.uri, &config.webview_origin))
        })
    }

    fn rehydrate<'a>(
        &'a self,
        _services: &'a HostServices,
        _config: &'a GalleryConfig,
        _photo: &'a Photo,
    ) -> StrategyFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

/// Browser strategy: fetch-and-read encoding, capture URIs for display, data URLs on load.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorageStrategy;

impl StorageStrategy for WebStorageStrategy {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Web
    }

    fn encode<'a>(
        &'a self,
        services: &'a HostServices,
        captured: &'a CapturedPhoto,
    ) -> StrategyFuture<'a, PhotoResult<String>> {
        Box::pin(async move {
            let blob = services
                .fetcher
                .fetch_blob(&captured.web_path)
                .await
                .map_err(PhotoError::Encode)?;
            services
                .fetcher
                .read_as_data_url(&blob)
                .await
                .map_err(PhotoError::Encode)
        })
    }

    fn display_path<'a>(
        &'a self,
        _services: &'a HostServices,
        _config: &'a GalleryConfig,
        captured: &'a CapturedPhoto,
        _filepath: &'a str,
    ) -> StrategyFuture<'a, PhotoResult<String>> {
        Box::pin(async move { Ok(captured.web_path.clone()) })
    }

    fn rehydrate<'a>(
        &'a self,
        services: &'a HostServices,
        config: &'a GalleryConfig,
        photo: &'a Photo,
    ) -> StrategyFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            let read = services
                .filesystem
                .read_file(&photo.filepath, Some(config.directory))
                .await?;
            Ok(Some(base64_to_data_url(
                &config.image_mime_type,
                strip_data_url_prefix(&read.data),
            )))
        })
    }
}

static HYBRID: HybridStorageStrategy = HybridStorageStrategy;
static WEB: WebStorageStrategy = WebStorageStrategy;

/// Returns the strategy for the platform `platform` reports right now.
pub fn select_strategy(platform: &dyn HostPlatform) -> &'static dyn StorageStrategy {
    if platform.is_hybrid() {
        &HYBRID
    } else {
        &WEB
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use photo_host::{Directory, FetchedBlob, FixedPlatform, MemoryHost};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selection_follows_classifier() {
        assert_eq!(
            select_strategy(&FixedPlatform::hybrid()).kind(),
            PlatformKind::Hybrid
        );
        assert_eq!(select_strategy(&FixedPlatform::web()).kind(), PlatformKind::Web);
    }

    #[test]
    fn hybrid_encode_reads_native_path_without_fetch() {
        let host = MemoryHost::new(PlatformKind::Hybrid, 0);
        host.filesystem
            .insert_bytes("file:///tmp/cap.jpeg", None, &[0xAA, 0xBB]);
        let services = host.services();
        let captured = CapturedPhoto::native(
            "http://localhost/_capacitor_file_/tmp/cap.jpeg",
            "file:///tmp/cap.jpeg",
        );

        let encoded =
            block_on(HybridStorageStrategy.encode(&services, &captured)).expect("encode");
        assert_eq!(encoded, "qrs=");
    }

    #[test]
    fn hybrid_encode_requires_native_path() {
        let host = MemoryHost::new(PlatformKind::Hybrid, 0);
        let services = host.services();
        let err = block_on(HybridStorageStrategy.encode(&services, &CapturedPhoto::web("blob:a")))
            .expect_err("no native path");
        assert!(matches!(err, PhotoError::Encode(_)));
    }

    #[test]
    fn hybrid_display_path_is_webview_url() {
        let host = MemoryHost::new(PlatformKind::Hybrid, 0);
        let services = host.services();
        let config = GalleryConfig::default();
        let captured = CapturedPhoto::native("w", "file:///tmp/cap.jpeg");

        let path = block_on(HybridStorageStrategy.display_path(
            &services,
            &config,
            &captured,
            "1000.jpeg",
        ))
        .expect("display path");
        assert_eq!(path, "http://localhost/_capacitor_file_/memory/data/1000.jpeg");
    }

    #[test]
    fn web_encode_produces_data_url() {
        let host = MemoryHost::new(PlatformKind::Web, 0);
        host.fetcher
            .insert("blob:a", FetchedBlob::new("image/jpeg", vec![0xAA, 0xBB]));
        let services = host.services();

        let encoded = block_on(WebStorageStrategy.encode(&services, &CapturedPhoto::web("blob:a")))
            .expect("encode");
        assert_eq!(encoded, "data:image/jpeg;base64,qrs=");
    }

    #[test]
    fn web_rehydrate_reads_data_directory() {
        let host = MemoryHost::new(PlatformKind::Web, 0);
        host.filesystem
            .insert_bytes("1000.jpeg", Some(Directory::Data), &[0xAA, 0xBB]);
        let services = host.services();
        let config = GalleryConfig::default();

        let data = block_on(WebStorageStrategy.rehydrate(
            &services,
            &config,
            &Photo::new("1000.jpeg", "blob:a"),
        ))
        .expect("rehydrate");
        assert_eq!(data.as_deref(), Some("data:image/jpeg;base64,qrs="));

        let hybrid = block_on(HybridStorageStrategy.rehydrate(
            &services,
            &config,
            &Photo::new("1000.jpeg", "x"),
        ))
        .expect("rehydrate");
        assert_eq!(hybrid, None);
    }
}
