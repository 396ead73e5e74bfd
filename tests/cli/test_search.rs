//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results
//! - Empty results
//! - Load and query errors
//! - Output format variations

use crate::cli::test_helpers::{create_cli_test_services, file_search_args};
use crate::common::{numbered_paragraphs, TestDocument};
use docsift::cli::commands::search::{execute, SearchArgs};
use docsift::cli::OutputFormat;

/// Test search with valid query returning results
#[tokio::test]
async fn test_search_valid_query_human() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();

    let args = file_search_args(&doc.source(), "fox -slow");
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search with valid query in JSON format
#[tokio::test]
async fn test_search_valid_query_json() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();

    let args = file_search_args(&doc.source(), "\"lazy dog\" OR cats");
    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

/// Test search with no matches
#[tokio::test]
async fn test_search_empty_results() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();

    let args = file_search_args(&doc.source(), "nonexistent_word_xyz");
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search with no results should succeed");
}

/// Test search with flags and a page past the end
#[tokio::test]
async fn test_search_flags_and_page_clamping() {
    let services = create_cli_test_services();
    let doc = TestDocument::new("many.txt", &numbered_paragraphs(30));

    let args = SearchArgs {
        case_sensitive: true,
        whole_word: true,
        page: 99,
        page_size: Some(5),
        ..file_search_args(&doc.source(), "fox")
    };
    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Out-of-range page should clamp: {:?}", result.err());
}

/// Test search on a missing file
#[tokio::test]
async fn test_search_missing_file() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();
    let missing = doc.dir.path().join("missing.txt");

    let args = file_search_args(&missing.to_string_lossy(), "fox");
    let result = execute(args, &services, OutputFormat::Human).await;

    let err = result.expect_err("Missing file should fail");
    assert!(
        err.to_string().starts_with("Error loading the link."),
        "Unexpected error: {err}"
    );
}

/// Test search with a blank query
#[tokio::test]
async fn test_search_blank_query() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();

    let args = file_search_args(&doc.source(), "   ");
    let err = execute(args, &services, OutputFormat::Human)
        .await
        .expect_err("Blank query should fail");
    assert_eq!(err.to_string(), "Enter a query.");
}

/// Test search against an invalid URL without --file
#[tokio::test]
async fn test_search_invalid_url() {
    let services = create_cli_test_services();

    let args = SearchArgs {
        file: false,
        ..file_search_args("not a url", "fox")
    };
    let err = execute(args, &services, OutputFormat::Human)
        .await
        .expect_err("Invalid URL should fail");
    assert!(err.to_string().contains("Invalid URL"));
}
