// Integration tests for the extraction boundary

use docsift::core::config::Config;
use docsift::core::extract::{Extractor, FileExtractor, HttpExtractor};
use docsift::core::session::Session;
use docsift::DocsiftError;
use std::time::Duration;

use crate::common::{spawn_extraction_stub, TestDocument};

fn extractor_for(endpoint: &str) -> HttpExtractor {
    HttpExtractor::new(endpoint, Duration::from_secs(5)).expect("Failed to build extractor")
}

#[tokio::test]
async fn test_http_extraction_success() {
    let server = spawn_extraction_stub(
        200,
        r#"{"title":"Foxes","textContent":"The quick fox\n\nA slow fox","byline":null}"#,
    )
    .await;
    let extractor = extractor_for(&server.endpoint);

    let content = extractor
        .extract("https://example.com/page?x=1&y=2")
        .await
        .expect("Extraction failed");
    assert_eq!(content.title.as_deref(), Some("Foxes"));
    assert_eq!(content.text_content.as_deref(), Some("The quick fox\n\nA slow fox"));

    let requests = server.request_lines();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].starts_with(
            "GET /api/extract?url=https%3A%2F%2Fexample.com%2Fpage%3Fx%3D1%26y%3D2 "
        ),
        "Unexpected request line: {}",
        requests[0]
    );
}

#[tokio::test]
async fn test_http_extraction_missing_fields() {
    let server = spawn_extraction_stub(200, "{}").await;
    let extractor = extractor_for(&server.endpoint);

    let mut session = Session::new(&Config::default());
    let document = session
        .load(&extractor, "https://example.com/blank")
        .await
        .expect("Load failed");
    assert_eq!(document.title, "(Untitled)");
    assert!(document.is_empty());
}

#[tokio::test]
async fn test_http_extraction_non_success_status() {
    let server = spawn_extraction_stub(500, r#"{"error":"boom"}"#).await;
    let extractor = extractor_for(&server.endpoint);

    let err = extractor
        .extract("https://example.com/")
        .await
        .unwrap_err();
    match err {
        DocsiftError::Extraction(message) => assert!(message.contains("500"), "{message}"),
        other => panic!("Expected extraction error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_extraction_malformed_body() {
    let server = spawn_extraction_stub(200, "<html>not json</html>").await;
    let extractor = extractor_for(&server.endpoint);

    let err = extractor
        .extract("https://example.com/")
        .await
        .unwrap_err();
    assert!(matches!(err, DocsiftError::Extraction(_)));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_http_extraction_unreachable_service() {
    // Nothing listens on port 9 of the loopback interface
    let extractor = extractor_for("http://127.0.0.1:9/api/extract");

    let err = extractor
        .extract("https://example.com/")
        .await
        .unwrap_err();
    assert!(matches!(err, DocsiftError::Extraction(_)));
}

#[tokio::test]
async fn test_invalid_source_never_reaches_service() {
    let server = spawn_extraction_stub(200, "{}").await;
    let extractor = extractor_for(&server.endpoint);

    for source in ["", "not a url", "ftp://example.com/file", "file:///etc/passwd"] {
        let err = extractor.extract(source).await.unwrap_err();
        assert!(
            matches!(err, DocsiftError::InvalidUrl(_)),
            "{source:?} should be rejected"
        );
    }
    assert!(server.request_lines().is_empty());
}

#[tokio::test]
async fn test_failed_http_load_keeps_session() {
    let good = spawn_extraction_stub(200, r#"{"title":"A","textContent":"fox"}"#).await;
    let bad = spawn_extraction_stub(502, "").await;

    let mut session = Session::new(&Config::default());
    session
        .load(&extractor_for(&good.endpoint), "https://example.com/a")
        .await
        .unwrap();
    session.search("fox").unwrap();

    assert!(session
        .load(&extractor_for(&bad.endpoint), "https://example.com/b")
        .await
        .is_err());
    assert_eq!(session.document().unwrap().source, "https://example.com/a");
    assert_eq!(session.results().len(), 1);
}

#[tokio::test]
async fn test_file_extractor_reads_text() {
    let doc = TestDocument::new("Field Notes.txt", "Line one\r\n\r\nLine two");

    let content = FileExtractor.extract(&doc.source()).await.unwrap();
    assert_eq!(content.title.as_deref(), Some("Field Notes"));
    assert_eq!(
        content.text_content.as_deref(),
        Some("Line one\r\n\r\nLine two")
    );
}
