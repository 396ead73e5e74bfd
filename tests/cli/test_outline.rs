//! Tests for the outline CLI command

use crate::cli::test_helpers::create_cli_test_services;
use crate::common::{numbered_paragraphs, TestDocument};
use docsift::cli::commands::outline::{execute, OutlineArgs};
use docsift::cli::OutputFormat;

/// Test outline of a local document in both formats
#[tokio::test]
async fn test_outline_local_document() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = OutlineArgs {
            source: doc.source(),
            file: true,
            limit: None,
        };
        let result = execute(args, &services, format).await;
        assert!(result.is_ok(), "Outline should succeed: {:?}", result.err());
    }
}

/// Test outline with a limit below the paragraph count
#[tokio::test]
async fn test_outline_with_limit() {
    let services = create_cli_test_services();
    let doc = TestDocument::new("many.txt", &numbered_paragraphs(30));

    let args = OutlineArgs {
        source: doc.source(),
        file: true,
        limit: Some(3),
    };
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test outline of a missing file
#[tokio::test]
async fn test_outline_missing_file() {
    let services = create_cli_test_services();

    let args = OutlineArgs {
        source: "/nonexistent/docsift/outline.txt".to_string(),
        file: true,
        limit: None,
    };
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_err());
}
