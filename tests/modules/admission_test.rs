use std::sync::Arc;

use serde_json::json;

use audio_pipeline::infrastructure::storage::MemoryObjectStore;
use audio_pipeline::modules::admission::dto::AdmissionEvent;
use audio_pipeline::modules::admission::service::AdmissionService;

use crate::helpers::{FaultyStore, MP3_BYTES, TestContext};

const MIB: u64 = 1024 * 1024;

fn event(bucket: &str, key: &str, size: Option<u64>) -> AdmissionEvent {
    serde_json::from_value(json!({
        "detail": {
            "bucket": {"name": bucket},
            "object": {"key": key, "size": size}
        }
    }))
    .unwrap()
}

fn store_with(content_type: &str) -> MemoryObjectStore {
    let store = MemoryObjectStore::new();
    store.insert("uploads", "song.mp3", MP3_BYTES, content_type);
    store
}

#[tokio::test]
async fn given_mp3_of_ten_mib_when_checking_then_file_is_valid() {
    let ctx = TestContext::new(Arc::new(store_with("audio/mp3")));

    let res = AdmissionService::check(ctx.state.clone(), event("uploads", "song.mp3", Some(10 * MIB))).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.message, "File is valid");
    assert_eq!(res.bucket.as_deref(), Some("uploads"));
    assert_eq!(res.file.as_deref(), Some("song.mp3"));
}

#[tokio::test]
async fn given_wav_content_type_when_checking_then_rejected() {
    let ctx = TestContext::new(Arc::new(store_with("audio/wav")));

    let res = AdmissionService::check(ctx.state.clone(), event("uploads", "song.mp3", Some(MIB))).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.message, "Invalid file type: audio/wav");
}

#[tokio::test]
async fn given_sixty_mib_mp3_when_checking_then_rejected_as_too_large() {
    let ctx = TestContext::new(Arc::new(store_with("audio/mp3")));

    let res = AdmissionService::check(ctx.state.clone(), event("uploads", "song.mp3", Some(60 * MIB))).await;

    assert_eq!(res.status, 400);
    assert_eq!(
        res.message,
        format!("File too large ({} bytes). Max size is 50MB", 60 * MIB)
    );
}

#[tokio::test]
async fn given_event_without_size_when_checking_then_stored_size_is_used() {
    let ctx = TestContext::new(Arc::new(store_with("audio/mp3")));

    let res = AdmissionService::check(ctx.state.clone(), event("uploads", "song.mp3", None)).await;

    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn given_event_without_key_when_checking_then_rejected_without_lookup() {
    let ctx = TestContext::new(Arc::new(store_with("audio/mp3")));
    let incomplete: AdmissionEvent =
        serde_json::from_value(json!({"detail": {"bucket": {"name": "uploads"}}})).unwrap();

    let res = AdmissionService::check(ctx.state.clone(), incomplete).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.message, "Missing bucket or object key in event");
    assert_eq!(res.bucket, None);
    assert_eq!(res.file, None);
}

#[tokio::test]
async fn given_unreachable_object_when_checking_then_storage_error_is_reported() {
    let store = FaultyStore {
        fail_head: true,
        ..FaultyStore::default()
    };
    let ctx = TestContext::new(Arc::new(store));

    let res = AdmissionService::check(ctx.state.clone(), event("uploads", "song.mp3", Some(MIB))).await;

    assert_eq!(res.status, 500);
    assert!(res.message.starts_with("S3 Error:"));
    assert_eq!(res.file.as_deref(), Some("song.mp3"));
}
