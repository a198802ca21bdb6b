//! Camera capture contracts and adapters.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`CameraService`] async methods.
pub type CameraFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
/// Shape of the capture result returned by the camera.
pub enum CameraResultType {
    /// A loadable resource URI plus, on native shells, a filesystem path.
    #[default]
    Uri,
    /// Inline base64 payload.
    Base64,
    /// Inline data URL payload.
    DataUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Where the camera obtains the image from.
pub enum CameraSource {
    /// Let the user choose between camera and library.
    Prompt,
    /// Take a new picture with the device camera.
    #[default]
    Camera,
    /// Pick an existing picture from the photo library.
    Photos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Capture configuration passed to [`CameraService::get_photo`].
pub struct CameraOptions {
    /// Result shape.
    pub result_type: CameraResultType,
    /// Image source.
    pub source: CameraSource,
    /// JPEG quality, `0..=100`.
    pub quality: u8,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            result_type: CameraResultType::Uri,
            source: CameraSource::Camera,
            quality: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Handle returned by a successful capture.
pub struct CapturedPhoto {
    /// Web-loadable resource URI (blob/object URL in browsers, converted file URL on native).
    pub web_path: String,
    /// Native filesystem path, only present inside a native shell.
    #[serde(default, rename = "path", skip_serializing_if = "Option::is_none")]
    pub native_path: Option<String>,
    /// Image format reported by the camera (for example `jpeg`).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "jpeg".to_string()
}

impl CapturedPhoto {
    /// Builds a browser-style capture handle without a native path.
    pub fn web(web_path: impl Into<String>) -> Self {
        Self {
            web_path: web_path.into(),
            native_path: None,
            format: default_format(),
        }
    }

    /// Builds a native-shell capture handle carrying both URIs.
    pub fn native(web_path: impl Into<String>, native_path: impl Into<String>) -> Self {
        Self {
            web_path: web_path.into(),
            native_path: Some(native_path.into()),
            format: default_format(),
        }
    }
}

/// Host service for acquiring a photo from the device camera.
pub trait CameraService {
    /// Captures a photo using `options`.
    ///
    /// A denied permission or a user cancellation is reported as an error.
    fn get_photo<'a>(
        &'a self,
        options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Camera adapter for targets without a camera.
pub struct NoopCameraService;

impl CameraService for NoopCameraService {
    fn get_photo<'a>(
        &'a self,
        _options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>> {
        Box::pin(async { Err("camera unavailable".to_string()) })
    }
}

#[derive(Debug, Default)]
struct MemoryCameraState {
    pending: VecDeque<CapturedPhoto>,
    requests: Vec<CameraOptions>,
}

#[derive(Debug, Clone, Default)]
/// Scripted camera that hands out queued captures in order.
///
/// An empty queue behaves like the user dismissing the camera.
pub struct MemoryCameraService {
    inner: Rc<RefCell<MemoryCameraState>>,
}

impl MemoryCameraService {
    /// Queues a capture handle for the next [`CameraService::get_photo`] call.
    pub fn push_capture(&self, photo: CapturedPhoto) {
        self.inner.borrow_mut().pending.push_back(photo);
    }

    /// Returns the options of every capture request received so far.
    pub fn requests(&self) -> Vec<CameraOptions> {
        self.inner.borrow().requests.clone()
    }

    /// Returns how many queued captures have not been consumed.
    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl CameraService for MemoryCameraService {
    fn get_photo<'a>(
        &'a self,
        options: CameraOptions,
    ) -> CameraFuture<'a, Result<CapturedPhoto, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.requests.push(options);
            state
                .pending
                .pop_front()
                .ok_or_else(|| "User cancelled photos app".to_string())
        })
    }
}
