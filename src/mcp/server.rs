//! MCP server wiring the Document Engine backend to assistants.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{
        ListResourcesResult, PaginatedRequestParams, ReadResourceRequestParams,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool_handler,
};
use serde_json::json;
use tracing::error;

use crate::backend::{Annotation, BackendResult, Document, DocumentEngineClient, Layer};

use super::resources;

/// MCP server exposing Document Engine documents as resources plus the
/// `search` and `create_annotation` tools.
///
/// Stateless: the only shared value is the backend client handle, so the
/// host runtime may interleave requests freely.
#[derive(Clone)]
pub struct DocBridgeServer {
    pub(super) client: Arc<DocumentEngineClient>,
    pub(super) tool_router: ToolRouter<Self>,
}

impl DocBridgeServer {
    pub fn new(client: DocumentEngineClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::document_tools(),
        }
    }

    /// List one page of backend documents as MCP resources.
    ///
    /// The cursor travels verbatim in both directions: inbound it becomes
    /// the backend's `page` parameter, outbound the backend's next-page
    /// cursor is handed to the caller untouched.
    pub(super) async fn list_document_resources(
        &self,
        cursor: Option<String>,
    ) -> Result<ListResourcesResult, McpError> {
        let page = self
            .client
            .list_documents(cursor.as_deref(), None)
            .await
            .map_err(|e| {
                error!("Failed to list documents: {e}");
                McpError::internal_error("Failed to list documents", None)
            })?;

        Ok(ListResourcesResult {
            meta: None,
            resources: page.data.iter().map(resources::document_resource).collect(),
            next_cursor: page.meta.next_page,
        })
    }

    /// Assemble the full document view: metadata, layers, annotations.
    ///
    /// Three sequential backend calls; the first failure aborts the whole
    /// read and no partial document is returned.
    pub(super) async fn read_document_resource(
        &self,
        uri: &str,
    ) -> Result<ReadResourceResult, McpError> {
        let id = resources::document_id(uri);

        let (document, layers, annotations) = self.fetch_document_detail(id).await.map_err(|e| {
            error!("Failed to read document {id}: {e}");
            McpError::internal_error("Failed to read document", None)
        })?;

        let detail = json!({
            "id": document.id,
            "title": document.attributes.title,
            "pageCount": document.attributes.page_count,
            "layers": layers
                .iter()
                .map(|layer| json!({
                    "id": layer.id,
                    "name": layer.attributes.name,
                    "visible": layer.attributes.visible,
                }))
                .collect::<Vec<_>>(),
            "annotations": annotations
                .iter()
                .map(|annotation| json!({
                    "id": annotation.id,
                    "type": annotation.attributes.kind,
                    "page": annotation.attributes.page,
                    "content": annotation.attributes.content,
                }))
                .collect::<Vec<_>>(),
        });

        let text = serde_json::to_string_pretty(&detail).map_err(|e| {
            McpError::internal_error(
                "serialization_error",
                Some(json!({"error": e.to_string()})),
            )
        })?;

        Ok(ReadResourceResult::new(vec![resources::detail_contents(
            uri, text,
        )]))
    }

    async fn fetch_document_detail(
        &self,
        id: &str,
    ) -> BackendResult<(Document, Vec<Layer>, Vec<Annotation>)> {
        let document = self.client.get_document(id).await?;
        let layers = self.client.list_layers(id).await?;
        let annotations = self.client.list_annotations(id).await?;
        Ok((document, layers, annotations))
    }
}

#[tool_handler]
impl ServerHandler for DocBridgeServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_resources()
            .enable_tools()
            .build();
        info.instructions = Some(
            "DocBridge MCP server - browse documents stored in a Document Engine backend, \
             search them, and add annotations"
                .to_string(),
        );
        info
    }

    async fn list_resources(
        &self,
        request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        self.list_document_resources(request.and_then(|r| r.cursor))
            .await
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_document_resource(&request.uri).await
    }
}
