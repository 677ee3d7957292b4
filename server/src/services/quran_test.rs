use super::*;
use client::net::types::RevelationType;

const ENVELOPE: &str = r#"{"code":200,"status":"OK","data":[
    {"number":1,"name":"سُورَةُ ٱلْفَاتِحَةِ","englishName":"Al-Faatiha","englishNameTranslation":"The Opening","numberOfAyahs":7,"revelationType":"Meccan"},
    {"number":2,"name":"سُورَةُ البَقَرَةِ","englishName":"Al-Baqara","englishNameTranslation":"The Cow","numberOfAyahs":286,"revelationType":"Medinan"}
]}"#;

// =============================================================================
// parse_chapters
// =============================================================================

#[test]
fn parse_chapters_decodes_envelope() {
    let envelope = parse_chapters(200, ENVELOPE).unwrap();
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[1].revelation_type, RevelationType::Medinan);
}

#[test]
fn parse_chapters_non_success_keeps_status_and_body() {
    match parse_chapters(404, "not found").unwrap_err() {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn parse_chapters_accepts_body_with_only_data() {
    let body = r#"{"data":[{"number":1,"name":"سُورَةُ ٱلْفَاتِحَةِ","englishName":"Al-Faatiha","englishNameTranslation":"The Opening","numberOfAyahs":7,"revelationType":"Meccan"}]}"#;
    let envelope = parse_chapters(200, body).unwrap();
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.status, "OK");
    assert_eq!(envelope.data.len(), 1);
}

#[test]
fn parse_chapters_keeps_unknown_revelation_type() {
    let body = ENVELOPE.replace("Medinan", "Unknown");
    let envelope = parse_chapters(200, &body).unwrap();
    assert_eq!(envelope.data[1].revelation_type, RevelationType::Other("Unknown".to_owned()));
}

#[test]
fn parse_chapters_rejects_bare_array() {
    let err = parse_chapters(200, r#"[{"id":1,"name":"x"}]"#).unwrap_err();
    assert!(matches!(err, UpstreamError::Parse(_)));
}

#[test]
fn parse_chapters_rejects_out_of_range_number() {
    let body = ENVELOPE.replace(r#""number":2,"#, r#""number":115,"#);
    let err = parse_chapters(200, &body).unwrap_err();
    assert!(matches!(err, UpstreamError::Schema(SchemaError::NumberOutOfRange(115))));
}

// =============================================================================
// parse_raw
// =============================================================================

#[test]
fn parse_raw_accepts_any_json() {
    assert!(parse_raw(200, "[1,2,3]").unwrap().is_array());
    assert!(parse_raw(200, ENVELOPE).unwrap().is_object());
}

#[test]
fn parse_raw_rejects_non_json() {
    assert!(matches!(parse_raw(200, "<html>").unwrap_err(), UpstreamError::Parse(_)));
}

#[test]
fn parse_raw_non_success_is_status_error() {
    assert!(matches!(parse_raw(503, "{}").unwrap_err(), UpstreamError::Status { status: 503, .. }));
}

// =============================================================================
// QuranClient
// =============================================================================

#[test]
fn client_builds_chapters_url_from_config() {
    let client = QuranClient::new(&ServerConfig::with_base_url("https://example.test/v1/")).unwrap();
    assert_eq!(client.base_url(), "https://example.test/v1");
    assert_eq!(client.chapters_url(), "https://example.test/v1/surah");
}

#[tokio::test]
async fn fetch_chapters_reports_connection_failure_as_request_error() {
    // Port 9 (discard) on loopback is not expected to accept connections.
    let client = QuranClient::new(&ServerConfig::with_base_url("http://127.0.0.1:9")).unwrap();
    let err = client.fetch_chapters().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}

#[test]
fn error_messages_are_descriptive() {
    let err = UpstreamError::Status { status: 500, body: String::new() };
    assert_eq!(err.to_string(), "upstream error: status 500");
    let err: UpstreamError = SchemaError::NoAyahs(3).into();
    assert_eq!(err.to_string(), "upstream returned invalid chapter data: chapter 3 has no ayahs");
}

#[test]
fn body_preview_returns_status_body() {
    let err = UpstreamError::Status { status: 404, body: "not found".to_owned() };
    assert_eq!(err.body_preview(), Some("not found"));
    assert_eq!(UpstreamError::Parse("x".into()).body_preview(), None);
}

#[test]
fn body_preview_truncates_on_char_boundary() {
    // The leading ASCII byte shifts the two-byte chars so byte 512 lands mid-char.
    let body = format!("x{}", "é".repeat(600));
    let err = UpstreamError::Status { status: 500, body };
    let preview = err.body_preview().unwrap();
    assert!(preview.len() <= BODY_PREVIEW_BYTES);
    assert_eq!(preview.len(), 511);
    assert!(preview.starts_with('x'));
}
