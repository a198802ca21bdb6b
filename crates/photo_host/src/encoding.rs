//! Base64 and data-URL helpers shared by filesystem, fetch, and rehydration paths.

use base64::{engine::general_purpose::STANDARD, Engine as _};

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Returns `true` when `value` is a `data:` URL.
pub fn is_data_url(value: &str) -> bool {
    value.starts_with(DATA_URL_SCHEME)
}

/// Encodes raw bytes as a base64 data URL for `mime_type`.
pub fn bytes_to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    base64_to_data_url(mime_type, &STANDARD.encode(bytes))
}

/// Wraps an already base64-encoded payload in a data URL for `mime_type`.
pub fn base64_to_data_url(mime_type: &str, base64: &str) -> String {
    format!("{DATA_URL_SCHEME}{mime_type}{BASE64_MARKER}{base64}")
}

/// Returns the base64 payload of a data URL, or `data` unchanged when it is bare base64.
pub fn strip_data_url_prefix(data: &str) -> &str {
    if !is_data_url(data) {
        return data;
    }
    data.split_once(',').map_or("", |(_, payload)| payload)
}

/// Decodes bare base64 or a base64 data URL into raw bytes.
///
/// # Errors
///
/// Returns an error when the payload is not valid standard base64.
pub fn decode_base64_payload(data: &str) -> Result<Vec<u8>, String> {
    STANDARD
        .decode(strip_data_url_prefix(data))
        .map_err(|err| format!("invalid base64 payload: {err}"))
}
