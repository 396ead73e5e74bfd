//! Tests for the interactive CLI command
//!
//! Drives the REPL with scripted input and checks what it prints:
//! - Searching and paging
//! - Option toggles
//! - Loading documents and recovering from failures

use crate::cli::test_helpers::{create_cli_test_services, run_repl_script};
use crate::common::{load_test_session, numbered_paragraphs, TestDocument};
use docsift::cli::OutputFormat;
use docsift::core::session::Status;
use docsift::core::types::SessionView;

/// Test a query followed by paging commands
#[tokio::test]
async fn test_repl_search_and_paging() {
    let services = create_cli_test_services();
    let doc = TestDocument::new("many.txt", &numbered_paragraphs(30));
    let mut session = load_test_session(doc.path()).await;

    let output = run_repl_script(
        &services,
        &mut session,
        "fox\n:next\n:next\n:next\n:page 1\n",
        OutputFormat::Human,
    )
    .await;

    assert!(output.contains("Matches: 30"));
    assert!(output.contains("Page 1 of 3"));
    assert!(output.contains("Page 3 of 3"));
    assert!(output.contains("[Paragraph 25]"));
    assert!(output.contains("fox number 1."));
    assert_eq!(session.page_state().page_index(), 0);
}

/// Test that toggles change options without re-running the search
#[tokio::test]
async fn test_repl_toggles() {
    let services = create_cli_test_services();
    let doc = TestDocument::new("words.txt", "foxes\n\nfox\n\nFox");
    let mut session = load_test_session(doc.path()).await;

    let output = run_repl_script(
        &services,
        &mut session,
        "fox\n:word\n:case\n",
        OutputFormat::Human,
    )
    .await;
    assert!(output.contains("Whole word: on"));
    assert!(output.contains("Case sensitive: on"));
    assert_eq!(session.results().len(), 3);

    run_repl_script(&services, &mut session, "fox\n", OutputFormat::Human).await;
    assert_eq!(session.results().len(), 1);
}

/// Test that errors are shown as status lines and the loop continues
#[tokio::test]
async fn test_repl_recovers_from_errors() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();
    let missing = doc.dir.path().join("missing.txt");
    let mut session = docsift::core::session::Session::new(&services.config);

    let script = format!(
        "fox\n:load {}\n:load {}\n\n:outline\n:bogus\nlazy\n",
        missing.display(),
        doc.source()
    );
    let output = run_repl_script(&services, &mut session, &script, OutputFormat::Human).await;

    assert!(output.contains("Load a valid link first."));
    assert!(output.contains("Error loading the link."));
    assert!(output.contains("Enter a query."));
    assert!(output.contains("foxes\n"));
    assert!(output.contains("Unknown command: :bogus"));
    assert!(output.contains("Matches: 1"));
    assert_eq!(session.status(), &Status::Matches(1));
}

/// Test that :quit stops reading input
#[tokio::test]
async fn test_repl_quit() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();
    let mut session = load_test_session(doc.path()).await;

    let output = run_repl_script(
        &services,
        &mut session,
        ":help\n:quit\nfox\n",
        OutputFormat::Human,
    )
    .await;
    assert!(output.contains(":outline"));
    assert!(session.results().is_empty());
}

/// Test JSON mode emits one session view per line
#[tokio::test]
async fn test_repl_json_views() {
    let services = create_cli_test_services();
    let doc = TestDocument::foxes();
    let mut session = load_test_session(doc.path()).await;

    let output = run_repl_script(&services, &mut session, "fox\n:next\n", OutputFormat::Json).await;
    let views: Vec<SessionView> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line is a view"))
        .collect();

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].status, "Matches: 3");
    assert_eq!(views[0].total_results, 3);
    assert_eq!(views[0].results[0].annotated_text.matches("<mark>").count(), 1);
    assert_eq!(views[1].pager.as_ref().unwrap().label, "Page 1 of 1");
}

/// Test JSON mode keeps every line parseable for non-view commands
#[tokio::test]
async fn test_repl_json_notices() {
    let services = create_cli_test_services();
    let mut session = docsift::core::session::Session::new(&services.config);

    let output = run_repl_script(
        &services,
        &mut session,
        ":case\n:word\n:help\n:bogus\n:outline\n",
        OutputFormat::Json,
    )
    .await;
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line is JSON"))
        .collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["notice"], "Case sensitive: on");
    assert_eq!(lines[1]["notice"], "Whole word: on");
    assert!(lines[2]["notice"].as_str().unwrap().contains(":outline"));
    assert!(lines[3]["notice"]
        .as_str()
        .unwrap()
        .starts_with("Unknown command: :bogus"));
    assert_eq!(lines[4]["notice"], "Load a valid link first.");
}
