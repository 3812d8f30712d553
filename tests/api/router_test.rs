use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use audio_pipeline::app::create_app;
use audio_pipeline::infrastructure::storage::MemoryObjectStore;

use crate::helpers::{MP3_BYTES, TestContext, WAV_BYTES};

async fn send(ctx: &TestContext, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    send_raw(ctx, method, uri, body).await
}

async fn send_raw(ctx: &TestContext, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let app = create_app(ctx.state.clone());
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn given_running_app_when_checking_health_then_ok() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));

    let (status, body) = send(&ctx, "GET", "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn given_bitrate_when_posting_quality_then_label_is_attached() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));
    let event = json!({"output": {"bucket": "b", "key": "k", "bitrate": "128k"}});

    let (status, body) = send(&ctx, "POST", "/api/v1/quality", Some(event)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quality"], "medium");
    assert_eq!(body["output"]["key"], "k");
}

#[tokio::test]
async fn given_empty_encode_request_when_posting_then_bad_request_envelope() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));

    let (status, body) = send(&ctx, "POST", "/api/v1/encode", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().starts_with("InputError"));
}

#[tokio::test]
async fn given_numeric_bitrate_when_posting_encode_then_bad_request_envelope() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));
    let req = json!({
        "input": {"bucket": "uploads", "key": "a.mp3"},
        "output": {"bucket": "encoded-audio"},
        "encoding": {"bitrate": 128}
    });

    let (status, body) = send(&ctx, "POST", "/api/v1/encode", Some(req)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("InputError"));
    assert!(message.contains("bitrate"));
    assert!(ctx.staging_leftovers().is_empty());
}

#[tokio::test]
async fn given_body_that_is_not_json_when_posting_encode_then_bad_request_envelope() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));

    let (status, body) = send_raw(&ctx, "POST", "/api/v1/encode", Body::from("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("InputError"));
}

#[tokio::test]
async fn given_valid_encode_request_when_posting_then_job_result_is_returned() {
    let store = MemoryObjectStore::new();
    store.insert("uploads", "a.mp3", WAV_BYTES, "audio/mp3");
    let ctx = TestContext::new(Arc::new(store));
    let req = json!({
        "input": {"bucket": "uploads", "key": "a.mp3"},
        "output": {"bucket": "encoded-audio"},
        "encoding": {"bitrate": "64k"}
    });

    let (status, body) = send(&ctx, "POST", "/api/v1/encode", Some(req)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["output"]["key"], "encoded/a.mp3/64k/output.mp3");
    assert_eq!(body["output"]["bitrate"], "64k");
}

#[tokio::test]
async fn given_mp3_outputs_when_posting_validate_then_validated_outputs_are_returned() {
    let store = MemoryObjectStore::new();
    store.insert("encoded-audio", "encoded/a.mp3/64k/output.mp3", MP3_BYTES, "audio/mpeg");
    let ctx = TestContext::new(Arc::new(store));
    let req = json!({
        "outputs": [{"output": {"bucket": "encoded-audio", "key": "encoded/a.mp3/64k/output.mp3", "bitrate": "64k"}}]
    });

    let (status, body) = send(&ctx, "POST", "/api/v1/validate", Some(req)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["validatedOutputs"].as_array().unwrap().len(), 1);
    assert!(body.get("rejectedOutputs").is_none());
}

#[tokio::test]
async fn given_item_without_bitrate_when_posting_validate_then_bad_request_envelope() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));
    let req = json!({
        "outputs": [{"output": {"bucket": "encoded-audio", "key": "encoded/a.mp3/64k/output.mp3"}}]
    });

    let (status, body) = send(&ctx, "POST", "/api/v1/validate", Some(req)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("InputError"));
    assert!(message.contains("bitrate"));
    assert!(ctx.prober.probed().is_empty());
}

#[tokio::test]
async fn given_body_that_is_not_json_when_posting_quality_then_bad_request_envelope() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));

    let (status, body) = send_raw(&ctx, "POST", "/api/v1/quality", Body::from("bitrate=128k")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("InputError"));
}

#[tokio::test]
async fn given_unreadable_event_when_posting_admission_then_missing_fields_decision() {
    let ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));
    let event = json!({"detail": {"bucket": {"name": 7}, "object": {"key": "a.mp3"}}});

    let (status, body) = send(&ctx, "POST", "/api/v1/admission", Some(event)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Missing bucket or object key in event");
}

#[tokio::test]
async fn given_wrong_content_type_when_posting_admission_then_status_mirrors_decision() {
    let store = MemoryObjectStore::new();
    store.insert("uploads", "a.wav", WAV_BYTES, "audio/wav");
    let ctx = TestContext::new(Arc::new(store));
    let event = json!({"detail": {"bucket": {"name": "uploads"}, "object": {"key": "a.wav", "size": 1024}}});

    let (status, body) = send(&ctx, "POST", "/api/v1/admission", Some(event)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Invalid file type: audio/wav");
}

#[tokio::test]
async fn given_missing_binaries_when_checking_toolchain_then_failure_report() {
    let mut ctx = TestContext::new(Arc::new(MemoryObjectStore::new()));
    ctx.state.config.ffmpeg_path = ctx.dir.path().join("no-ffmpeg");
    ctx.state.config.ffprobe_path = ctx.dir.path().join("no-ffprobe");

    let (status, body) = send(&ctx, "GET", "/api/v1/toolchain", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["statusCode"], 500);
    assert_eq!(body["body"]["message"], "FFmpeg layer test failed");
    assert!(body["body"]["error"].as_str().unwrap().contains("FFmpeg not found"));
}
