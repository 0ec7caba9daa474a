use reqwest::{Client, Response, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;

use super::error::{BackendError, BackendResult};
use super::types::{
    Annotation, AnnotationKind, CreateAnnotationAttributes, CreateAnnotationData,
    CreateAnnotationRequest, CreatedAnnotation, Document, DocumentList, Envelope, Layer,
};

/// JSON-API resource type for annotation creation requests.
const ANNOTATIONS_RESOURCE_TYPE: &str = "annotations";

/// Client for the Document Engine REST API.
///
/// Holds one long-lived [`reqwest::Client`] reused for every request; the
/// credential is attached as a default `Authorization` header so callers
/// never handle it. Shared behind an `Arc` by the MCP server.
pub struct DocumentEngineClient {
    base_url: String,
    client: Client,
}

impl DocumentEngineClient {
    /// Build a client from resolved configuration.
    ///
    /// The token is sent as `Authorization: Token token="<secret>"` on
    /// every call and marked sensitive so it never shows up in debug
    /// output.
    pub fn new(config: &Config) -> BackendResult<Self> {
        let mut auth =
            header::HeaderValue::from_str(&format!("Token token=\"{}\"", config.api_token))
                .map_err(|e| BackendError::Init {
                    message: e.to_string(),
                })?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Init {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: config.api_url.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List one page of documents.
    ///
    /// `page` is the opaque cursor returned by a previous listing and is
    /// forwarded verbatim; `query` becomes the backend's `filter[query]`
    /// search parameter.
    pub async fn list_documents(
        &self,
        page: Option<&str>,
        query: Option<&str>,
    ) -> BackendResult<DocumentList> {
        let mut request = self.client.get(self.url("/api/documents"));
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        if let Some(query) = query {
            request = request.query(&[("filter[query]", query)]);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Fetch metadata for a single document.
    pub async fn get_document(&self, id: &str) -> BackendResult<Document> {
        let response = self
            .client
            .get(self.url(&format!("/api/documents/{id}")))
            .send()
            .await?;

        let envelope: Envelope<Document> = Self::handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Fetch the layers of a document.
    pub async fn list_layers(&self, id: &str) -> BackendResult<Vec<Layer>> {
        let response = self
            .client
            .get(self.url(&format!("/api/documents/{id}/layers")))
            .send()
            .await?;

        let envelope: Envelope<Vec<Layer>> = Self::handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Fetch the annotations of a document.
    pub async fn list_annotations(&self, id: &str) -> BackendResult<Vec<Annotation>> {
        let response = self
            .client
            .get(self.url(&format!("/api/documents/{id}/annotations")))
            .send()
            .await?;

        let envelope: Envelope<Vec<Annotation>> = Self::handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Create an annotation on a document page.
    ///
    /// `content` is passed through to the backend untouched.
    pub async fn create_annotation(
        &self,
        document_id: &str,
        kind: AnnotationKind,
        page: u32,
        content: Value,
    ) -> BackendResult<CreatedAnnotation> {
        let body = CreateAnnotationRequest {
            data: CreateAnnotationData {
                resource_type: ANNOTATIONS_RESOURCE_TYPE,
                attributes: CreateAnnotationAttributes {
                    kind,
                    page,
                    content,
                },
            },
        };

        let response = self
            .client
            .post(self.url(&format!("/api/documents/{document_id}/annotations")))
            .json(&body)
            .send()
            .await?;

        let envelope: Envelope<CreatedAnnotation> = Self::handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Handle a backend response with standardized error mapping.
    ///
    /// Returns the deserialized body on success, or `ApiError` with the
    /// status and body text on non-success codes.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(BackendError::ApiError { status, message })
        }
    }
}
