//! Tool handlers: document search and annotation creation.
//!
//! Backend failures here are reported as flagged tool results rather than
//! protocol errors, so the assistant sees them as tool output it can react
//! to. Unknown tool names never reach these handlers; the SDK router
//! rejects them at dispatch with a terminal error.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content},
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::backend::AnnotationKind;

use super::server::DocBridgeServer;

/// Fixed message returned when the backend search call fails.
pub(super) const SEARCH_FAILED: &str =
    "Sorry, the document search is unavailable right now. Please try again later.";

/// Fixed message returned when annotation creation fails.
pub(super) const CREATE_ANNOTATION_FAILED: &str =
    "Sorry, the annotation could not be created. Please try again later.";

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Text to search document titles and content for")]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnotationParams {
    #[schemars(description = "ID of the document to annotate")]
    pub document_id: String,
    #[schemars(description = "Annotation kind")]
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    #[schemars(description = "1-based page number the annotation is placed on")]
    pub page: u32,
    #[schemars(
        description = "Annotation content; the shape depends on the annotation kind and is passed to the backend untouched"
    )]
    pub content: Value,
}

impl DocBridgeServer {
    /// Router over the static tool catalog; no backend call involved.
    pub(super) fn document_tools() -> ToolRouter<Self> {
        Self::tool_router()
    }
}

#[tool_router]
impl DocBridgeServer {
    /// Search documents and summarize the matches as text.
    #[tool(description = "Search for documents matching a query string")]
    pub async fn search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = params.0.query;

        let page = match self.client.list_documents(None, Some(&query)).await {
            Ok(page) => page,
            Err(e) => {
                error!("Search for \"{query}\" failed: {e}");
                return Ok(CallToolResult::error(vec![Content::text(SEARCH_FAILED)]));
            }
        };

        let mut lines = Vec::with_capacity(page.data.len() + 1);
        lines.push(format!(
            "Found {} documents matching \"{}\":",
            page.data.len(),
            query
        ));
        for document in &page.data {
            lines.push(format!("{} (ID: {})", document.display_name(), document.id));
        }

        Ok(CallToolResult::success(vec![Content::text(
            lines.join("\n"),
        )]))
    }

    /// Create an annotation on a document page.
    #[tool(
        description = "Create an annotation (note, highlight, ink, text, stamp, image or link) on a document page"
    )]
    pub async fn create_annotation(
        &self,
        params: Parameters<CreateAnnotationParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateAnnotationParams {
            document_id,
            kind,
            page,
            content,
        } = params.0;

        match self
            .client
            .create_annotation(&document_id, kind, page, content)
            .await
        {
            Ok(created) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Created {kind} annotation with ID {} on page {page} of document {document_id}",
                created.id
            ))])),
            Err(e) => {
                error!("Failed to create annotation on document {document_id}: {e}");
                Ok(CallToolResult::error(vec![Content::text(
                    CREATE_ANNOTATION_FAILED,
                )]))
            }
        }
    }
}
