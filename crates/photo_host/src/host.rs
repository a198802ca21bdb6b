//! Host-bundle models composed once and injected into the gallery core.

use std::rc::Rc;

use crate::{
    CameraService, Clock, FixedPlatform, HostPlatform, KeyValueStore, ManualClock,
    MemoryCameraService, MemoryKeyValueStore, MemoryPhotoFilesystem, MemoryResourceFetcher,
    PhotoFilesystem, PlatformKind, ResourceFetcher,
};

/// Adapter family a [`HostServices`] bundle was composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// Native-shell adapters.
    Hybrid,
    /// No-op adapters for headless builds.
    Stub,
    /// In-memory adapters for tests and embedding.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Hybrid => "hybrid",
            Self::Stub => "stub",
            Self::Memory => "memory",
        }
    }
}

/// Host service bundle consumed by the gallery core.
///
/// Transport selection happens before the bundle is built; the platform classifier stays in the
/// bundle so the core can classify again before each operation.
#[derive(Clone)]
pub struct HostServices {
    /// Hybrid/web classifier.
    pub platform: Rc<dyn HostPlatform>,
    /// Camera capture service.
    pub camera: Rc<dyn CameraService>,
    /// Path-addressed photo storage.
    pub filesystem: Rc<dyn PhotoFilesystem>,
    /// Key-value store holding the photo index.
    pub key_value: Rc<dyn KeyValueStore>,
    /// Web resource fetcher for browser captures.
    pub fetcher: Rc<dyn ResourceFetcher>,
    /// Timestamp source for generated file names.
    pub clock: Rc<dyn Clock>,
    /// Adapter family used to compose this bundle.
    pub host_strategy: HostStrategy,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("platform", &self.platform.kind())
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

/// In-memory host whose adapters stay reachable for seeding and inspection.
///
/// Every clone of an adapter shares state with the bundle built by [`MemoryHost::services`], so a
/// second bundle built from the same host behaves like a fresh session over the same storage.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    /// Platform reported by the bundle.
    pub platform: FixedPlatform,
    /// Scripted camera.
    pub camera: MemoryCameraService,
    /// In-memory filesystem.
    pub filesystem: MemoryPhotoFilesystem,
    /// In-memory key-value store.
    pub key_value: MemoryKeyValueStore,
    /// In-memory resource fetcher.
    pub fetcher: MemoryResourceFetcher,
    /// Manual clock.
    pub clock: ManualClock,
}

impl MemoryHost {
    /// Creates an empty host classified as `kind`, with the clock at `now_ms`.
    pub fn new(kind: PlatformKind, now_ms: u64) -> Self {
        Self {
            platform: FixedPlatform(kind),
            camera: MemoryCameraService::default(),
            filesystem: MemoryPhotoFilesystem::default(),
            key_value: MemoryKeyValueStore::default(),
            fetcher: MemoryResourceFetcher::default(),
            clock: ManualClock::new(now_ms),
        }
    }

    /// Builds a service bundle over this host's shared adapters.
    pub fn services(&self) -> HostServices {
        HostServices {
            platform: Rc::new(self.platform),
            camera: Rc::new(self.camera.clone()),
            filesystem: Rc::new(self.filesystem.clone()),
            key_value: Rc::new(self.key_value.clone()),
            fetcher: Rc::new(self.fetcher.clone()),
            clock: Rc::new(self.clock.clone()),
            host_strategy: HostStrategy::Memory,
        }
    }
}
