mod common;

use std::rc::Rc;

use common::{
    queue_native_capture, queue_web_capture, stored_field_names, CancellingCamera,
    FlakyKeyValueStore, ReadOnlyFilesystem, UnresolvableFilesystem,
};
use futures::executor::block_on;
use photo_gallery::{CancelToken, GalleryConfig, PhotoError, PhotoService, WorkflowStep};
use photo_host::{CameraOptions, Directory, MemoryHost, PlatformKind};
use pretty_assertions::assert_eq;

#[test]
fn captures_are_ordered_newest_first() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    let mut service = PhotoService::new(host.services(), GalleryConfig::default());

    for n in 0..4_u8 {
        queue_web_capture(&host, &format!("blob:http://localhost/{n}"), &[n]);
        block_on(service.capture()).expect("capture");
        host.clock.advance(1000);
    }

    let names: Vec<_> = service
        .photos()
        .iter()
        .map(|photo| photo.filepath.as_str())
        .collect();
    assert_eq!(names, vec!["4000.jpeg", "3000.jpeg", "2000.jpeg", "1000.jpeg"]);
    assert_eq!(host.filesystem.len(), 4);
}

#[test]
fn every_capture_uses_fixed_camera_options() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    queue_web_capture(&host, "blob:a", &[1]);
    let mut service = PhotoService::new(host.services(), GalleryConfig::default());

    block_on(service.capture()).expect("capture");
    assert_eq!(host.camera.requests(), vec![CameraOptions::default()]);
}

#[test]
fn stored_entries_never_carry_image_data() {
    for kind in [PlatformKind::Web, PlatformKind::Hybrid] {
        let host = MemoryHost::new(kind, 1000);
        let mut service = PhotoService::new(host.services(), GalleryConfig::default());
        for n in 0..2_u8 {
            match kind {
                PlatformKind::Web => queue_web_capture(&host, &format!("blob:{n}"), &[n]),
                PlatformKind::Hybrid => {
                    queue_native_capture(&host, &format!("file:///tmp/{n}.jpeg"), &[n])
                }
            }
            block_on(service.capture()).expect("capture");
            host.clock.advance(1);
        }

        let raw = host.key_value.raw("photos").expect("index persisted");
        let expected = vec!["displayPath".to_string(), "filepath".to_string()];
        assert_eq!(stored_field_names(&raw), vec![expected.clone(), expected]);
    }
}

#[test]
fn web_capture_matches_concrete_layout() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    queue_web_capture(&host, "blob:http://localhost/a", &[0xAA, 0xBB]);
    let mut service = PhotoService::new(host.services(), GalleryConfig::default());

    let photo = block_on(service.capture()).expect("capture A");
    assert_eq!(photo.filepath, "1000.jpeg");
    assert_eq!(photo.display_path, "blob:http://localhost/a");
    assert_eq!(photo.encoded_data, None);
    assert_eq!(
        host.key_value.raw("photos").as_deref(),
        Some(r#"[{"filepath":"1000.jpeg","displayPath":"blob:http://localhost/a"}]"#)
    );
    assert_eq!(
        host.filesystem.contents("1000.jpeg", Some(Directory::Data)).as_deref(),
        Some("qrs=")
    );

    host.clock.set(2000);
    queue_web_capture(&host, "blob:http://localhost/b", &[0xCC]);
    block_on(service.capture()).expect("capture B");
    let names: Vec<_> = service
        .photos()
        .iter()
        .map(|photo| photo.filepath.as_str())
        .collect();
    assert_eq!(names, vec!["2000.jpeg", "1000.jpeg"]);
}

#[test]
fn hybrid_capture_stores_webview_path() {
    let host = MemoryHost::new(PlatformKind::Hybrid, 1000);
    queue_native_capture(&host, "file:///tmp/cap.jpeg", &[0xAA, 0xBB]);
    let mut service = PhotoService::new(host.services(), GalleryConfig::default());

    let photo = block_on(service.capture()).expect("capture");
    assert_eq!(
        photo.display_path,
        "http://localhost/_capacitor_file_/memory/data/1000.jpeg"
    );
    assert!(!photo.display_path.starts_with("file://"));
    assert_eq!(
        host.filesystem.contents("1000.jpeg", Some(Directory::Data)).as_deref(),
        Some("qrs=")
    );
}

#[test]
fn camera_failure_changes_nothing() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    let mut service = PhotoService::new(host.services(), GalleryConfig::default());

    let err = block_on(service.capture()).expect_err("empty camera queue");
    assert!(matches!(err, PhotoError::Capture(_)));
    assert!(service.photos().is_empty());
    assert_eq!(host.key_value.raw("photos"), None);
    assert!(host.filesystem.is_empty());
}

#[test]
fn encode_failure_writes_nothing() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    queue_web_capture(&host, "blob:a", &[1]);
    host.fetcher.revoke("blob:a");
    let mut service = PhotoService::new(host.services(), GalleryConfig::default());

    let err = block_on(service.capture()).expect_err("revoked blob");
    assert!(matches!(err, PhotoError::Encode(_)));
    assert!(host.filesystem.is_empty());
    assert!(service.photos().is_empty());
    assert_eq!(host.key_value.raw("photos"), None);
}

#[test]
fn write_failure_leaves_index_untouched() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    queue_web_capture(&host, "blob:a", &[1]);
    let mut services = host.services();
    services.filesystem = Rc::new(ReadOnlyFilesystem(host.filesystem.clone()));
    let mut service = PhotoService::new(services, GalleryConfig::default());

    let err = block_on(service.capture()).expect_err("read-only filesystem");
    assert_eq!(
        err,
        PhotoError::Write {
            filepath: "1000.jpeg".to_string(),
            reason: "disk full".to_string(),
        }
    );
    assert!(service.photos().is_empty());
    assert_eq!(host.key_value.raw("photos"), None);
}

#[test]
fn unresolvable_display_path_leaves_index_untouched() {
    let host = MemoryHost::new(PlatformKind::Hybrid, 1000);
    queue_native_capture(&host, "file:///tmp/cap.jpeg", &[0xAA]);
    let mut services = host.services();
    services.filesystem = Rc::new(UnresolvableFilesystem(host.filesystem.clone()));
    let mut service = PhotoService::new(services, GalleryConfig::default());

    let err = block_on(service.capture()).expect_err("uri resolution fails");
    assert_eq!(
        err,
        PhotoError::DisplayPath {
            filepath: "1000.jpeg".to_string(),
            reason: "Unable to resolve file URI".to_string(),
        }
    );
    assert!(!err.index_mutated());
    assert_eq!(host.camera.pending_len(), 0);
    assert!(service.photos().is_empty());
    assert_eq!(host.key_value.raw("photos"), None);
}

#[test]
fn failed_flush_keeps_memory_ahead_until_retried() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    let store = FlakyKeyValueStore::default();
    let mut services = host.services();
    services.key_value = Rc::new(store.clone());
    let mut service = PhotoService::new(services, GalleryConfig::default());

    queue_web_capture(&host, "blob:a", &[1]);
    block_on(service.capture()).expect("first capture");

    store.fail_sets.set(true);
    host.clock.set(2000);
    queue_web_capture(&host, "blob:b", &[2]);
    let err = block_on(service.capture()).expect_err("flush fails");
    assert!(matches!(err, PhotoError::Flush(_)));
    assert!(err.index_mutated());
    assert_eq!(service.photos().len(), 2);
    assert_eq!(
        store.inner.raw("photos").as_deref(),
        Some(r#"[{"filepath":"1000.jpeg","displayPath":"blob:a"}]"#)
    );

    store.fail_sets.set(false);
    block_on(service.flush()).expect("retry flush");
    assert_eq!(
        store.inner.raw("photos").as_deref(),
        Some(
            r#"[{"filepath":"2000.jpeg","displayPath":"blob:b"},{"filepath":"1000.jpeg","displayPath":"blob:a"}]"#
        )
    );
}

#[test]
fn cancellation_before_write_leaves_no_file() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    queue_web_capture(&host, "blob:a", &[1]);
    let token = CancelToken::new();
    let mut services = host.services();
    services.camera = Rc::new(CancellingCamera {
        inner: host.camera.clone(),
        token: token.clone(),
    });
    let mut service = PhotoService::new(services, GalleryConfig::default());

    let err = block_on(service.capture_with(&token)).expect_err("cancelled");
    assert_eq!(
        err,
        PhotoError::Cancelled {
            step: WorkflowStep::Encode
        }
    );
    assert!(host.filesystem.is_empty());
    assert!(service.photos().is_empty());
    assert_eq!(host.key_value.raw("photos"), None);
}

#[test]
fn custom_storage_key_and_directory_are_used() {
    let host = MemoryHost::new(PlatformKind::Web, 1000);
    queue_web_capture(&host, "blob:a", &[1]);
    let config = GalleryConfig::from_json_str(r#"{"storageKey":"gallery","directory":"DOCUMENTS"}"#)
        .expect("config");
    let mut service = PhotoService::new(host.services(), config);

    block_on(service.capture()).expect("capture");
    assert!(host.key_value.raw("gallery").is_some());
    assert_eq!(host.key_value.raw("photos"), None);
    assert!(host
        .filesystem
        .contents("1000.jpeg", Some(Directory::Documents))
        .is_some());
}
