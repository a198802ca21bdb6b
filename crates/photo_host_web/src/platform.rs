//! Webview platform classifier.

use photo_host::{HostPlatform, PlatformKind};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Classifies the running webview by asking the JS runtime whether a native shell is present.
///
/// Every call re-queries the runtime; non-wasm targets always report [`PlatformKind::Web`].
pub struct WebviewPlatform;

impl HostPlatform for WebviewPlatform {
    fn kind(&self) -> PlatformKind {
        if bridge::is_native_platform() {
            PlatformKind::Hybrid
        } else {
            PlatformKind::Web
        }
    }
}
