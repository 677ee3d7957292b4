use super::*;
use crate::net::types::SchemaError;

const ENVELOPE: &str = r#"{
    "code": 200,
    "status": "OK",
    "data": [
        {"number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha",
         "englishNameTranslation": "The Opening", "numberOfAyahs": 7, "revelationType": "Meccan"},
        {"number": 2, "name": "سُورَةُ البَقَرَةِ", "englishName": "Al-Baqara",
         "englishNameTranslation": "The Cow", "numberOfAyahs": 286, "revelationType": "Medinan"}
    ]
}"#;

const BARE_ARRAY: &str = r#"[{"id": 1, "name": "Al-Faatiha"}, {"id": 2, "name": "Al-Baqara"}]"#;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn chapters_endpoint_appends_surah() {
    assert_eq!(chapters_endpoint("/api"), "/api/surah");
    assert_eq!(chapters_endpoint(DEFAULT_API_BASE), "/api/surah");
}

#[test]
fn endpoints_trim_trailing_slashes() {
    assert_eq!(chapters_endpoint("http://localhost:3000/api/"), "http://localhost:3000/api/surah");
    assert_eq!(raw_chapters_endpoint("/api//"), "/api/surah/raw");
}

// =============================================================
// Envelope decoder
// =============================================================

#[test]
fn decode_chapters_returns_data_in_order() {
    let chapters = decode_chapters_response(200, ENVELOPE).unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].english_name, "Al-Faatiha");
    assert_eq!(chapters[1].number, 2);
}

#[test]
fn decode_chapters_non_2xx_reports_status() {
    let err = decode_chapters_response(404, ENVELOPE).unwrap_err();
    assert_eq!(err, FetchError::Status(404));
    assert!(err.to_string().contains("404"));
}

#[test]
fn decode_chapters_status_wins_over_body() {
    let err = decode_chapters_response(500, "not json").unwrap_err();
    assert_eq!(err, FetchError::Status(500));
}

#[test]
fn decode_chapters_rejects_bare_array() {
    let err = decode_chapters_response(200, BARE_ARRAY).unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn decode_chapters_rejects_malformed_json() {
    let err = decode_chapters_response(200, "{\"data\": [").unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn decode_chapters_rejects_schema_violation() {
    let body = ENVELOPE.replace("\"number\": 2", "\"number\": 1");
    let err = decode_chapters_response(200, &body).unwrap_err();
    assert_eq!(err, FetchError::Schema(SchemaError::DuplicateNumber(1)));
}

#[test]
fn decode_chapters_accepts_body_with_only_data() {
    let body = r#"{"data": [{"number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha",
        "englishNameTranslation": "The Opening", "numberOfAyahs": 7, "revelationType": "Meccan"}]}"#;
    let chapters = decode_chapters_response(200, body).unwrap();
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].number_of_ayahs, 7);
}

#[test]
fn decode_chapters_keeps_unknown_revelation_type() {
    let body = ENVELOPE.replace("Medinan", "Unknown");
    let chapters = decode_chapters_response(200, &body).unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[1].revelation_type.to_string(), "Unknown");
}

#[test]
fn decode_chapters_accepts_empty_data() {
    let chapters = decode_chapters_response(200, r#"{"code":200,"status":"OK","data":[]}"#).unwrap();
    assert!(chapters.is_empty());
}

// =============================================================
// Raw decoder
// =============================================================

#[test]
fn decode_raw_accepts_bare_array() {
    let value = decode_raw_response(200, BARE_ARRAY).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["id"], 1);
}

#[test]
fn decode_raw_accepts_envelope() {
    let value = decode_raw_response(200, ENVELOPE).unwrap();
    assert_eq!(value["data"][1]["englishName"], "Al-Baqara");
}

#[test]
fn decode_raw_non_2xx_reports_status() {
    assert_eq!(decode_raw_response(502, BARE_ARRAY).unwrap_err(), FetchError::Status(502));
}

#[test]
fn decode_raw_rejects_non_json() {
    assert!(matches!(decode_raw_response(200, "<html>").unwrap_err(), FetchError::Parse(_)));
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_helpers_are_unavailable_without_hydrate() {
    let chapters = block_on_ready(fetch_chapters(DEFAULT_API_BASE));
    assert_eq!(chapters.unwrap_err(), FetchError::Unavailable);
    let raw = block_on_ready(fetch_raw_chapters(DEFAULT_API_BASE));
    assert_eq!(raw.unwrap_err(), FetchError::Unavailable);
}

/// Drive a future that never suspends to completion.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future suspended"),
    }
}
