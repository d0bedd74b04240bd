use super::error::{FetchError, TransportError};
use super::logging;

#[test]
fn test_http_error_uses_error_field() {
    let err = FetchError::http(404, "Not Found", r#"{"error":"missing"}"#);
    assert_eq!(err.to_string(), "404 - Not Found missing");
}

#[test]
fn test_http_error_serializes_non_string_error_field() {
    let err = FetchError::http(400, "Bad Request", r#"{"error":{"code":7}}"#);
    assert_eq!(err.to_string(), r#"400 - Bad Request {"code":7}"#);
}

#[test]
fn test_http_error_without_error_field_serializes_body() {
    let err = FetchError::http(500, "Internal Server Error", r#"{ "status": 500 }"#);
    assert_eq!(err.to_string(), r#"500 - Internal Server Error {"status":500}"#);
}

#[test]
fn test_http_error_null_error_field_serializes_body() {
    let err = FetchError::http(502, "Bad Gateway", r#"{"error":null}"#);
    assert_eq!(err.to_string(), r#"502 - Bad Gateway {"error":null}"#);
}

#[test]
fn test_http_error_falsy_error_field_serializes_body() {
    let err = FetchError::http(400, "Bad Request", r#"{"error":""}"#);
    assert_eq!(err.to_string(), r#"400 - Bad Request {"error":""}"#);

    let err = FetchError::http(400, "Bad Request", r#"{"error":false}"#);
    assert_eq!(err.to_string(), r#"400 - Bad Request {"error":false}"#);

    let err = FetchError::http(400, "Bad Request", r#"{"error":0}"#);
    assert_eq!(err.to_string(), r#"400 - Bad Request {"error":0}"#);
}

#[test]
fn test_http_error_truthy_non_string_error_field() {
    let err = FetchError::http(409, "Conflict", r#"{"error":true}"#);
    assert_eq!(err.to_string(), "409 - Conflict true");

    let err = FetchError::http(409, "Conflict", r#"{"error":3}"#);
    assert_eq!(err.to_string(), "409 - Conflict 3");
}

#[test]
fn test_http_error_plain_text_body() {
    let err = FetchError::http(503, "Service Unavailable", "try later");
    assert_eq!(err.to_string(), "503 - Service Unavailable try later");
}

#[test]
fn test_http_error_empty_body_and_status_text() {
    let err = FetchError::http(599, "", "");
    assert_eq!(err.to_string(), "599 -  ");
}

#[test]
fn test_transport_error_is_its_message() {
    let err = FetchError::from(TransportError::new("connection refused"));
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn test_decode_error_is_decoder_message() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let expected = source.to_string();
    assert_eq!(FetchError::from(source).to_string(), expected);
}

#[test]
fn test_parse_level() {
    assert_eq!(logging::parse_level("DEBUG"), tracing::Level::DEBUG);
    assert_eq!(logging::parse_level("warning"), tracing::Level::WARN);
    assert_eq!(logging::parse_level("nonsense"), tracing::Level::INFO);
}

#[test]
fn test_logging_init_accepts_levels() {
    // Should not panic
    logging::init("info");
    logging::init("debug");
    logging::init("warn");
}
