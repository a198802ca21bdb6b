//! Capture and load workflows over an injected host bundle.

use photo_host::HostServices;
use tracing::{debug, info, warn};

use crate::{
    config::GalleryConfig,
    error::{PhotoError, PhotoResult},
    index::PhotoIndex,
    photo::Photo,
    strategy::select_strategy,
    task::{CancelToken, WorkflowStep},
};

/// Owns the session photo index and runs gallery workflows against a [`HostServices`] bundle.
///
/// Workflows take `&mut self`, so one service never runs two workflows at once. Host calls are
/// awaited one after another.
#[derive(Debug)]
pub struct PhotoService {
    services: HostServices,
    config: GalleryConfig,
    index: PhotoIndex,
}

impl PhotoService {
    /// Creates a service with an empty index. Call [`PhotoService::load_saved`] to restore state.
    pub fn new(services: HostServices, config: GalleryConfig) -> Self {
        Self {
            services,
            config,
            index: PhotoIndex::new(),
        }
    }

    /// Current photos, newest first.
    pub fn photos(&self) -> &[Photo] {
        self.index.as_slice()
    }

    /// Current index.
    pub fn index(&self) -> &PhotoIndex {
        &self.index
    }

    /// Active configuration.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Host bundle the service runs against.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Captures a photo, stores it, and prepends it to the persisted index.
    ///
    /// # Errors
    ///
    /// Camera, encode, write, and display-path failures leave the index untouched. A
    /// [`PhotoError::Flush`] means the photo is in memory but not yet persisted.
    pub async fn capture(&mut self) -> PhotoResult<Photo> {
        self.capture_with(&CancelToken::new()).await
    }

    /// [`PhotoService::capture`] that stops at the next step once `cancel` fires.
    ///
    /// # Errors
    ///
    /// As [`PhotoService::capture`], plus [`PhotoError::Cancelled`]. Cancellation is observed up to
    /// the display-path step; after that the photo is committed.
    pub async fn capture_with(&mut self, cancel: &CancelToken) -> PhotoResult<Photo> {
        let strategy = select_strategy(self.services.platform.as_ref());
        let platform = strategy.kind().as_str();

        cancel.check(WorkflowStep::Capture)?;
        debug!(platform, "requesting camera capture");
        let captured = self
            .services
            .camera
            .get_photo(self.config.camera)
            .await
            .map_err(PhotoError::Capture)?;

        cancel.check(WorkflowStep::Encode)?;
        let encoded = strategy.encode(&self.services, &captured).await?;

        cancel.check(WorkflowStep::Write)?;
        let filepath = self.config.file_name_for(self.services.clock.now_ms());
        debug!(platform, filepath = %filepath, "writing photo");
        self.services
            .filesystem
            .write_file(&filepath, &encoded, Some(self.config.directory))
            .await
            .map_err(|reason| PhotoError::Write {
                filepath: filepath.clone(),
                reason,
            })?;

        cancel.check(WorkflowStep::ResolveDisplayPath)?;
        let display_path = strategy
            .display_path(&self.services, &self.config, &captured, &filepath)
            .await?;

        let photo = Photo::new(filepath, display_path);
        self.index = std::mem::take(&mut self.index).with_prepended(photo.clone());
        self.flush().await?;

        info!(
            platform,
            filepath = %photo.filepath,
            count = self.index.len(),
            "photo captured"
        );
        Ok(photo)
    }

    /// Persists the in-memory index under the configured key.
    ///
    /// Capture flushes on its own; call this to retry after a [`PhotoError::Flush`].
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Flush`] when serialization or the key-value write fails.
    pub async fn flush(&self) -> PhotoResult<()> {
        let raw = self
            .index
            .to_json()
            .map_err(|err| PhotoError::Flush(err.to_string()))?;
        self.services
            .key_value
            .set(&self.config.storage_key, &raw)
            .await
            .map_err(|reason| {
                warn!(
                    key = %self.config.storage_key,
                    count = self.index.len(),
                    error = %reason,
                    "photo index flush failed"
                );
                PhotoError::Flush(reason)
            })
    }

    /// Replaces the in-memory index with the persisted one.
    ///
    /// A missing key or malformed JSON loads as an empty index. In browser hosts every entry's
    /// bytes are re-read into `encoded_data`; an entry whose file cannot be read is kept without
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Load`] when the key-value store rejects the read. The previous
    /// in-memory index is kept so a later capture cannot overwrite the stored entries.
    pub async fn load_saved(&mut self) -> PhotoResult<&[Photo]> {
        self.load_saved_with(&CancelToken::new()).await
    }

    /// [`PhotoService::load_saved`] that stops before the next entry once `cancel` fires.
    ///
    /// A cancelled or failed load leaves the previous in-memory index in place.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Load`] or [`PhotoError::Cancelled`].
    pub async fn load_saved_with(&mut self, cancel: &CancelToken) -> PhotoResult<&[Photo]> {
        let strategy = select_strategy(self.services.platform.as_ref());
        let platform = strategy.kind().as_str();

        cancel.check(WorkflowStep::Load)?;
        let raw = self
            .services
            .key_value
            .get(&self.config.storage_key)
            .await
            .map_err(|reason| {
                warn!(key = %self.config.storage_key, error = %reason, "photo index unreadable");
                PhotoError::Load(reason)
            })?;

        let mut index = PhotoIndex::parse(raw.as_deref());
        for photo in index.iter_mut() {
            cancel.check(WorkflowStep::Rehydrate)?;
            match strategy
                .rehydrate(&self.services, &self.config, photo)
                .await
            {
                Ok(encoded) => photo.encoded_data = encoded,
                Err(err) => {
                    warn!(
                        platform,
                        filepath = %photo.filepath,
                        error = %err,
                        "photo bytes unavailable; keeping entry without data"
                    );
                    photo.encoded_data = None;
                }
            }
        }

        self.index = index;
        info!(platform, count = self.index.len(), "photo index loaded");
        Ok(self.index.as_slice())
    }
}
