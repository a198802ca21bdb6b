//! Webview URI rewriting for files stored by a native shell.
//!
//! Mobile webviews refuse to render `file://` URIs, so native shells serve app files from their
//! own HTTP origin under a fixed path prefix.

/// Origin native shells serve webview content from by default.
pub const DEFAULT_WEBVIEW_ORIGIN: &str = "http://localhost";
/// Path prefix under which the native shell exposes local files.
pub const WEBVIEW_FILE_PATH_PREFIX: &str = "/_capacitor_file_";

/// Rewrites a `file://` URI (or an absolute path) into a URL the webview can load from `origin`.
///
/// Any other URI is returned unchanged.
pub fn convert_file_src(uri: &str, origin: &str) -> String {
    let path = match uri.strip_prefix("file://") {
        Some(path) => path,
        None if uri.starts_with('/') => uri,
        None => return uri.to_string(),
    };
    format!(
        "{}{WEBVIEW_FILE_PATH_PREFIX}{path}",
        origin.trim_end_matches('/')
    )
}
