//! Browser resource fetcher: `fetch()` into a `Blob`, then `FileReader` into a data URL.

use photo_host::{FetchedBlob, ResourceFetcher, ResourceFetcherFuture};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

#[cfg(target_arch = "wasm32")]
use crate::bridge::js_error_to_string;

#[derive(Debug, Clone, Copy, Default)]
/// Resource fetcher backed by the webview's `fetch` and `FileReader` APIs.
pub struct WebResourceFetcher;

impl ResourceFetcher for WebResourceFetcher {
    fn fetch_blob<'a>(
        &'a self,
        uri: &'a str,
    ) -> ResourceFetcherFuture<'a, Result<FetchedBlob, String>> {
        Box::pin(async move { fetch_blob(uri).await })
    }

    fn read_as_data_url<'a>(
        &'a self,
        blob: &'a FetchedBlob,
    ) -> ResourceFetcherFuture<'a, Result<String, String>> {
        Box::pin(async move { read_blob_as_data_url(blob).await })
    }
}

async fn fetch_blob(uri: &str) -> Result<FetchedBlob, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(format!(
            "resource fetch is only available when compiled for wasm32: {uri}"
        ))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let response = JsFuture::from(window.fetch_with_str(uri))
            .await
            .map_err(|err| format!("fetch {uri} failed: {}", js_error_to_string(err)))?
            .dyn_into::<web_sys::Response>()
            .map_err(|_| "fetch did not resolve to a Response".to_string())?;
        if !response.ok() {
            return Err(format!("fetch {uri} failed with status {}", response.status()));
        }
        let blob = JsFuture::from(
            response
                .blob()
                .map_err(|err| format!("failed to read response body: {err:?}"))?,
        )
        .await
        .map_err(|err| format!("failed to read response body: {}", js_error_to_string(err)))?
        .dyn_into::<web_sys::Blob>()
        .map_err(|_| "response body is not a Blob".to_string())?;
        let buffer = JsFuture::from(blob.array_buffer())
            .await
            .map_err(|err| format!("failed to buffer blob: {}", js_error_to_string(err)))?;
        Ok(FetchedBlob {
            mime_type: blob.type_(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }
}

async fn read_blob_as_data_url(blob: &FetchedBlob) -> Result<String, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = blob;
        Err("blob reading is only available when compiled for wasm32".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(blob.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&blob.mime_type);
        let js_blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|err| format!("failed to build blob: {err:?}"))?;

        let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
        let (tx, rx) = oneshot::channel::<Result<String, String>>();
        let sender = Rc::new(RefCell::new(Some(tx)));

        let reader_for_load = reader.clone();
        let load_sender = sender.clone();
        let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
            let result = reader_for_load
                .result()
                .map_err(|err| format!("failed to read blob: {err:?}"))
                .and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| "file reader returned non-string result".to_string())
                });
            if let Some(tx) = load_sender.borrow_mut().take() {
                let _ = tx.send(result);
            }
        }));
        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

        let reader_for_error = reader.clone();
        let error_sender = sender.clone();
        let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
            let message = reader_for_error
                .error()
                .map(|err| err.message())
                .unwrap_or_else(|| "failed to read blob".to_string());
            if let Some(tx) = error_sender.borrow_mut().take() {
                let _ = tx.send(Err(message));
            }
        }));
        reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        reader
            .read_as_data_url(&js_blob)
            .map_err(|err| format!("failed to start blob read: {err:?}"))?;

        let result = rx
            .await
            .map_err(|_| "blob read was interrupted".to_string())?;
        on_load.forget();
        on_error.forget();
        result
    }
}
