//! Camera adapters for browser and native-shell contexts.

use photo_host::{CameraFuture, CameraOptions, CameraService, CapturedPhoto};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser camera adapter; the capture arrives as a page-scoped object URL.
pub struct WebCameraService;

impl CameraService for WebCameraService {
    fn get_photo<'a>(
        &'a self,
        options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>> {
        Box::pin(async move { bridge::camera_get_photo(options).await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Native-shell camera adapter; the capture also carries a native file path.
pub struct HybridCameraService;

impl CameraService for HybridCameraService {
    fn get_photo<'a>(
        &'a self,
        options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>> {
        Box::pin(async move {
            let photo = bridge::camera_get_photo(options).await?;
            if photo.native_path.is_none() {
                return Err("native camera returned no file path".to_string());
            }
            Ok(photo)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_camera_adapters_match_bridge_fallback_behavior() {
        let web: &dyn CameraService = &WebCameraService;
        let hybrid: &dyn CameraService = &HybridCameraService;
        assert!(block_on(web.get_photo(CameraOptions::default())).is_err());
        assert!(block_on(hybrid.get_photo(CameraOptions::default())).is_err());
    }
}
