use photo_host_web::build_host_services;

use crate::{config::GalleryConfig, service::PhotoService};

impl PhotoService {
    /// Creates a service over the adapters selected for the running webview.
    ///
    /// With the `host-stub` feature every adapter is a no-op.
    pub fn for_current_host(config: GalleryConfig) -> Self {
        Self::new(build_host_services(), config)
    }
}
