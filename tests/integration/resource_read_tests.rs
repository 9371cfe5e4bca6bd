//! `resources/read` against real and in-memory document stores.

use ai_workshop_mcp::mcp::resources::workshop_docs::{read_resource, MARKDOWN_MIME};
use ai_workshop_mcp::storage::FsDocumentStore;
use ai_workshop_mcp::AppError;

use super::test_helpers::MemoryDocumentStore;

#[tokio::test]
async fn reads_document_from_directory() {
    let temp = tempfile::tempdir().unwrap();
    let content = "# Copilot templates\n\nUse clear, specific comments.\n";
    std::fs::write(temp.path().join("prompt-engineering-templates.md"), content).unwrap();
    let store = FsDocumentStore::new(temp.path());

    let document = read_resource(&store, "workshop://templates/copilot")
        .await
        .unwrap();

    assert_eq!(document.uri, "workshop://templates/copilot");
    assert_eq!(document.mime_type, MARKDOWN_MIME);
    assert_eq!(document.text, content);
}

#[tokio::test]
async fn edits_are_visible_on_next_read() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("ai-agent-templates.md");
    std::fs::write(&path, "v1").unwrap();
    let store = FsDocumentStore::new(temp.path());

    let first = read_resource(&store, "workshop://templates/agents").await.unwrap();
    std::fs::write(&path, "v2").unwrap();
    let second = read_resource(&store, "workshop://templates/agents").await.unwrap();

    assert_eq!(first.text, "v1");
    assert_eq!(second.text, "v2");
}

#[tokio::test]
async fn unknown_uri_is_not_found() {
    let store = MemoryDocumentStore::default();
    let err = read_resource(&store, "workshop://does-not-exist")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AppError::NotFound("resource not found: workshop://does-not-exist".into())
    );
}

#[tokio::test]
async fn missing_backing_file_is_not_found() {
    let temp = tempfile::tempdir().unwrap();
    let store = FsDocumentStore::new(temp.path());

    let err = read_resource(&store, "workshop://examples/optimization")
        .await
        .unwrap_err();

    match err {
        AppError::NotFound(msg) => {
            assert!(msg.contains("workshop://examples/optimization"), "{msg}");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn bundled_resources_are_readable() {
    let store = FsDocumentStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"));
    for uri in [
        "workshop://templates/copilot",
        "workshop://templates/agents",
        "workshop://examples/optimization",
    ] {
        let document = read_resource(&store, uri).await.unwrap();
        assert!(!document.text.trim().is_empty(), "{uri} is empty");
    }
}

#[tokio::test]
async fn in_memory_store_serves_catalog_documents() {
    let store = MemoryDocumentStore::default().with("ai-agent-templates.md", "agent docs");
    let document = read_resource(&store, "workshop://templates/agents")
        .await
        .unwrap();
    assert_eq!(document.text, "agent docs");
}
