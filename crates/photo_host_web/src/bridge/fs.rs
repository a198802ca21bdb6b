use photo_host::{Directory, FileReadResult, FileUriResult};

pub(crate) async fn fs_write_file(
    path: &str,
    data: &str,
    directory: Option<Directory>,
) -> Result<(), String> {
    super::interop::fs_write_file(path, data, directory).await
}

pub(crate) async fn fs_read_file(
    path: &str,
    directory: Option<Directory>,
) -> Result<FileReadResult, String> {
    super::interop::fs_read_file(path, directory).await
}

pub(crate) async fn fs_get_uri(
    path: &str,
    directory: Option<Directory>,
) -> Result<FileUriResult, String> {
    super::interop::fs_get_uri(path, directory).await
}
