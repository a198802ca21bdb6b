//! Web resource fetch contracts used to pull captured images into memory.
//!
//! Browser captures are only reachable through their web URI, so reading one is a two-step
//! operation: fetch the resource as a blob, then read the blob back as a base64 data URL. Both
//! steps are separate asynchronous boundaries and either may fail independently.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use crate::encoding::bytes_to_data_url;

/// Object-safe boxed future used by [`ResourceFetcher`] async methods.
pub type ResourceFetcherFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Binary body of a fetched resource.
pub struct FetchedBlob {
    /// Content type reported for the resource.
    pub mime_type: String,
    /// Raw body bytes.
    pub bytes: Vec<u8>,
}

impl FetchedBlob {
    /// Creates a blob from a content type and body.
    pub fn new(mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Host service for fetching web resources and decoding them to data URLs.
pub trait ResourceFetcher {
    /// Fetches `uri` and returns its body as a blob.
    fn fetch_blob<'a>(
        &'a self,
        uri: &'a str,
    ) -> ResourceFetcherFuture<'a, Result<FetchedBlob, String>>;

    /// Reads `blob` back as a `data:<mime>;base64,…` URL.
    fn read_as_data_url<'a>(
        &'a self,
        blob: &'a FetchedBlob,
    ) -> ResourceFetcherFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fetcher for targets without network access.
pub struct NoopResourceFetcher;

impl ResourceFetcher for NoopResourceFetcher {
    fn fetch_blob<'a>(
        &'a self,
        uri: &'a str,
    ) -> ResourceFetcherFuture<'a, Result<FetchedBlob, String>> {
        Box::pin(async move { Err(format!("resource fetch unavailable: {uri}")) })
    }

    fn read_as_data_url<'a>(
        &'a self,
        _blob: &'a FetchedBlob,
    ) -> ResourceFetcherFuture<'a, Result<String, String>> {
        Box::pin(async { Err("blob reader unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory fetcher serving registered resources by URI.
pub struct MemoryResourceFetcher {
    inner: Rc<RefCell<HashMap<String, FetchedBlob>>>,
}

impl MemoryResourceFetcher {
    /// Registers a resource body under `uri`.
    pub fn insert(&self, uri: impl Into<String>, blob: FetchedBlob) {
        self.inner.borrow_mut().insert(uri.into(), blob);
    }

    /// Drops the resource under `uri`, as happens when a page-scoped object URL is revoked.
    pub fn revoke(&self, uri: &str) {
        self.inner.borrow_mut().remove(uri);
    }
}

impl ResourceFetcher for MemoryResourceFetcher {
    fn fetch_blob<'a>(
        &'a self,
        uri: &'a str,
    ) -> ResourceFetcherFuture<'a, Result<FetchedBlob, String>> {
        Box::pin(async move {
            self.inner
                .borrow()
                .get(uri)
                .cloned()
                .ok_or_else(|| format!("fetch failed: {uri} not found"))
        })
    }

    fn read_as_data_url<'a>(
        &'a self,
        blob: &'a FetchedBlob,
    ) -> ResourceFetcherFuture<'a, Result<String, String>> {
        Box::pin(async move { Ok(bytes_to_data_url(&blob.mime_type, &blob.bytes)) })
    }
}
