//! Photo capture, persistence, and rehydration for hybrid and browser hosts.
//!
//! [`PhotoService`] owns the session's [`PhotoIndex`] and runs the two workflows the gallery UI
//! needs: [`PhotoService::capture`] takes a picture, writes its bytes under a timestamped file
//! name, and prepends it to the persisted index; [`PhotoService::load_saved`] reloads the index
//! and, in browser hosts, rebuilds a displayable data URL for every entry.
//!
//! Platform differences live behind [`StorageStrategy`], chosen per workflow from the host's
//! platform classifier.
//!
//! # Example
//!
//! ```rust
//! use futures::executor::block_on;
//! use photo_gallery::{GalleryConfig, PhotoService};
//! use photo_host::{CapturedPhoto, FetchedBlob, MemoryHost, PlatformKind};
//!
//! let host = MemoryHost::new(PlatformKind::Web, 1000);
//! host.camera.push_capture(CapturedPhoto::web("blob:http://localhost/a"));
//! host.fetcher
//!     .insert("blob:http://localhost/a", FetchedBlob::new("image/jpeg", vec![0xAA, 0xBB]));
//!
//! let mut service = PhotoService::new(host.services(), GalleryConfig::default());
//! let photo = block_on(service.capture()).expect("capture");
//! assert_eq!(photo.filepath, "1000.jpeg");
//! assert_eq!(service.photos().len(), 1);
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
mod host_adapters;
pub mod index;
pub mod logging;
pub mod photo;
pub mod service;
pub mod strategy;
pub mod task;

pub use config::{GalleryConfig, DEFAULT_STORAGE_KEY};
pub use error::{PhotoError, PhotoResult};
pub use index::PhotoIndex;
pub use logging::{init_logging, DEFAULT_LOG_DIRECTIVE};
pub use photo::{Photo, StoredPhoto};
pub use service::PhotoService;
pub use strategy::{
    select_strategy, HybridStorageStrategy, StorageStrategy, StrategyFuture, WebStorageStrategy,
};
pub use task::{CancelToken, WorkflowStep};
