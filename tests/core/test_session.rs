// Integration tests for the search session lifecycle

use docsift::core::config::Config;
use docsift::core::extract::FileExtractor;
use docsift::core::session::{Session, Status};
use docsift::core::types::MatchOptions;
use docsift::DocsiftError;

use crate::common::{load_test_session, numbered_paragraphs, TestDocument};

#[tokio::test]
async fn test_load_local_document() {
    let doc = TestDocument::foxes();
    let session = load_test_session(doc.path()).await;

    let document = session.document().expect("document loaded");
    assert_eq!(document.title, "foxes");
    assert_eq!(document.paragraph_count(), 4);
    assert_eq!(session.status(), &Status::Ready);
    assert_eq!(
        session.status().to_string(),
        "Ready. Type a query and search."
    );
}

#[tokio::test]
async fn test_search_updates_status() {
    let doc = TestDocument::foxes();
    let mut session = load_test_session(doc.path()).await;

    assert_eq!(session.search("fox -slow").unwrap(), 2);
    assert_eq!(session.status(), &Status::Matches(2));
    assert_eq!(session.status().to_string(), "Matches: 2");

    assert_eq!(session.search("giraffe").unwrap(), 0);
    assert_eq!(session.status().to_string(), "No matches.");
}

#[tokio::test]
async fn test_missing_file_keeps_previous_document() {
    let doc = TestDocument::foxes();
    let mut session = load_test_session(doc.path()).await;
    session.search("fox").unwrap();

    let missing = doc.dir.path().join("missing.txt");
    let err = session
        .load(&FileExtractor, &missing.to_string_lossy())
        .await
        .unwrap_err();
    assert!(matches!(err, DocsiftError::Extraction(_)));
    assert!(err.is_recoverable());

    assert_eq!(session.document().unwrap().title, "foxes");
    assert_eq!(session.results().len(), 3);
    assert_eq!(
        session.status().to_string(),
        "Error loading the link. Check that the site allows being read."
    );

    // Still usable afterwards
    assert_eq!(session.search("lazy").unwrap(), 1);
}

#[tokio::test]
async fn test_paging_through_results() {
    let doc = TestDocument::new("many.txt", &numbered_paragraphs(30));
    let mut session = load_test_session(doc.path()).await;
    session.search("fox").unwrap();

    assert_eq!(session.current_page().items.len(), 12);
    assert_eq!(session.next_page(), 1);
    assert_eq!(session.next_page(), 2);
    assert_eq!(session.next_page(), 2);
    assert_eq!(session.current_page().items.len(), 6);
    assert_eq!(session.prev_page(), 1);
    assert_eq!(session.go_to_page(99), 2);

    let view = session.view();
    assert_eq!(view.pager.as_ref().unwrap().label, "Page 3 of 3");
    assert_eq!(view.results[0].locator, "Paragraph 25");
    assert_eq!(view.results[0].source, doc.source());
}

#[tokio::test]
async fn test_search_before_load() {
    let mut session = Session::new(&Config::default());
    let err = session.search("fox").unwrap_err();

    assert!(matches!(err, DocsiftError::EmptyDocument));
    assert!(err.is_recoverable());
    assert_eq!(session.status().to_string(), "Load a valid link first.");
    assert!(session.view().pager.is_none());
}

#[tokio::test]
async fn test_whole_word_toggle_applies_on_next_search() {
    let doc = TestDocument::new("words.txt", "foxes\n\nfox\n\nFox");
    let mut session = load_test_session(doc.path()).await;

    assert_eq!(session.search("fox").unwrap(), 3);

    session.set_options(MatchOptions {
        case_sensitive: true,
        whole_word: true,
    });
    assert_eq!(session.results().len(), 3);
    assert_eq!(session.search("fox").unwrap(), 1);
    assert_eq!(session.results()[0].paragraph_index, 1);
}

#[tokio::test]
async fn test_empty_file_loads_without_paragraphs() {
    let doc = TestDocument::new("empty.txt", "  \n\n \r\n ");
    let mut session = load_test_session(doc.path()).await;

    assert!(session.document().unwrap().is_empty());
    assert!(matches!(
        session.search("fox"),
        Err(DocsiftError::EmptyDocument)
    ));
}
