//! Tests for resource listing and reading against a stubbed backend.

use rmcp::model::ResourceContents;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::backend::DocumentEngineClient;
use crate::config::Config;
use crate::mcp::DocBridgeServer;

fn server_for(backend: &MockServer) -> DocBridgeServer {
    let _ = rustls::crypto::ring::default_provider().install_default();
    let config = Config {
        api_url: backend.uri(),
        api_token: "secret".to_string(),
    };
    DocBridgeServer::new(DocumentEngineClient::new(&config).unwrap())
}

#[tokio::test]
async fn test_list_resources_maps_documents() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "doc-1", "attributes": {"title": "Quarterly report", "pageCount": 12}},
                {"id": "doc-2", "attributes": {"pageCount": 3}}
            ],
            "meta": {"nextPage": "cursor-2"}
        })))
        .mount(&backend)
        .await;

    let server = server_for(&backend);
    let result = server.list_document_resources(None).await.unwrap();

    assert_eq!(result.resources.len(), 2);

    let first = &result.resources[0].raw;
    assert_eq!(first.uri, "docbridge:///doc-1");
    assert_eq!(first.name, "Quarterly report");
    assert_eq!(first.mime_type.as_deref(), Some("application/pdf"));

    // Untitled documents get the synthesized fallback name.
    assert_eq!(result.resources[1].raw.name, "Document doc-2");

    assert_eq!(result.next_cursor.as_deref(), Some("cursor-2"));
}

#[tokio::test]
async fn test_list_resources_forwards_cursor() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .and(query_param("page", "cursor-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&backend)
        .await;

    let server = server_for(&backend);
    let result = server
        .list_document_resources(Some("cursor-5".to_string()))
        .await
        .unwrap();

    assert!(result.resources.is_empty());
    // Backend reported no further pages.
    assert!(result.next_cursor.is_none());
}

#[tokio::test]
async fn test_list_resources_failure_is_generic() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&backend)
        .await;

    let server = server_for(&backend);
    let error = server.list_document_resources(None).await.unwrap_err();

    // The concrete cause goes to the log, not the caller.
    assert_eq!(error.message, "Failed to list documents");
}

#[tokio::test]
async fn test_read_resource_assembles_document_detail() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "doc-1", "attributes": {"title": "Contract", "pageCount": 30}}
        })))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/layers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "layer-1", "attributes": {"name": "base", "visible": true}}]
        })))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/annotations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "ann-1",
                "attributes": {"type": "highlight", "page": 2, "content": {"color": "#ffff00"}}
            }]
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let server = server_for(&backend);
    let result = server
        .read_document_resource("docbridge:///doc-1")
        .await
        .unwrap();

    assert_eq!(result.contents.len(), 1);
    match &result.contents[0] {
        ResourceContents::TextResourceContents {
            uri,
            mime_type,
            text,
            ..
        } => {
            assert_eq!(uri, "docbridge:///doc-1");
            assert_eq!(mime_type.as_deref(), Some("application/json"));
            assert!(text.contains('\n'), "detail should be pretty-printed");

            let detail: serde_json::Value = serde_json::from_str(text).unwrap();
            assert_eq!(detail["id"], "doc-1");
            assert_eq!(detail["title"], "Contract");
            assert_eq!(detail["pageCount"], 30);
            assert_eq!(detail["layers"][0]["name"], "base");
            assert_eq!(detail["layers"][0]["visible"], true);
            assert_eq!(detail["annotations"][0]["type"], "highlight");
            assert_eq!(detail["annotations"][0]["page"], 2);
            assert_eq!(detail["annotations"][0]["content"]["color"], "#ffff00");
        }
        other => panic!("Expected text contents, got {other:?}"),
    }
}

#[tokio::test]
async fn test_read_resource_aborts_without_partial_result() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "doc-1", "attributes": {"title": "Contract", "pageCount": 30}}
        })))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/layers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&backend)
        .await;
    // The layer failure aborts the read; annotations are never fetched.
    Mock::given(method("GET"))
        .and(path("/api/documents/doc-1/annotations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&backend)
        .await;

    let server = server_for(&backend);
    let error = server
        .read_document_resource("docbridge:///doc-1")
        .await
        .unwrap_err();

    assert_eq!(error.message, "Failed to read document");
}
