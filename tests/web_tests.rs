//! Browser-only tests for the exported JavaScript API.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use spreadview::error::js_message;
use spreadview::{page_plan, page_plan_to_js, version, ViewerError};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_version_is_exported() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn test_page_plan_json() {
    let plan = page_plan(r#"{"pageCount": 5, "seriesId": "S", "spread": true, "startFrom": 3}"#)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&plan).unwrap();
    assert_eq!(json["position"], 2);
    assert_eq!(json["path"][0], "/img/S/2");
    assert_eq!(json["path"][1], "/img/S/3");
}

#[wasm_bindgen_test]
fn test_page_plan_rejects_malformed_json() {
    assert!(page_plan("{").is_err());
}

#[wasm_bindgen_test]
fn test_page_plan_to_js_rejects_non_objects() {
    assert!(page_plan_to_js(JsValue::from_f64(3.0)).is_err());
}

#[wasm_bindgen_test]
async fn test_absent_slot_loads_as_none() {
    let image = spreadview::loader::load(None).await.unwrap();
    assert!(image.is_none());
}

#[wasm_bindgen_test]
async fn test_batch_keeps_absent_slots_in_order() {
    let results = spreadview::loader::load_all(&[None, None]).await;
    assert_eq!(results.len(), 2);
    assert!(results.into_iter().all(|r| matches!(r, Ok(None))));
}

#[wasm_bindgen_test]
async fn test_undecodable_image_reports_browser_reason() {
    let result = spreadview::loader::load(Some("data:image/png;base64,AAAA")).await;
    match result {
        Err(ViewerError::ImageLoad { src, reason }) => {
            assert_eq!(src, "data:image/png;base64,AAAA");
            assert!(!reason.is_empty());
        }
        other => panic!("expected an image load error, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn test_js_message_reads_error_objects() {
    let error = js_sys::Error::new("boom");
    assert_eq!(js_message(&error.into()), "Error: boom");
    assert_eq!(js_message(&JsValue::from_str("plain")), "plain");
}
