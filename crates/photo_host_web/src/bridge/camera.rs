use photo_host::{CameraOptions, CapturedPhoto};

pub(crate) async fn camera_get_photo(options: CameraOptions) -> Result<CapturedPhoto, String> {
    super::interop::camera_get_photo(options).await
}
