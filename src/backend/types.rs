//! Wire types for the Document Engine JSON-API.
//!
//! Only the fields the adapter relays are modeled; everything else in the
//! backend payloads is ignored. Annotation `content` is deliberately an
//! opaque [`serde_json::Value`] since its shape depends on the annotation
//! kind and the adapter never looks inside it.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single-resource JSON-API envelope: `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// One page of the document listing plus pagination metadata.
#[derive(Debug, Deserialize)]
pub struct DocumentList {
    pub data: Vec<Document>,
    #[serde(default)]
    pub meta: ListMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Opaque cursor for the next page; absent on the last page. Forwarded
    /// between caller and backend unmodified.
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: String,
    pub attributes: DocumentAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAttributes {
    pub title: Option<String>,
    pub page_count: Option<u32>,
}

impl Document {
    /// Name shown in listings: the title, or `Document <id>` when the
    /// backend has no usable title.
    pub fn display_name(&self) -> String {
        match self.attributes.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Document {}", self.id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub id: String,
    pub attributes: LayerAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayerAttributes {
    pub name: String,
    pub visible: bool,
}

/// The fixed set of annotation kinds the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Note,
    Highlight,
    Ink,
    Text,
    Stamp,
    Image,
    Link,
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Note => "note",
            Self::Highlight => "highlight",
            Self::Ink => "ink",
            Self::Text => "text",
            Self::Stamp => "stamp",
            Self::Image => "image",
            Self::Link => "link",
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub attributes: AnnotationAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationAttributes {
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    /// 1-based page number.
    pub page: u32,
    #[serde(default)]
    pub content: Value,
}

/// Creation response; the backend assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAnnotation {
    pub id: String,
}

/// JSON-API envelope for annotation creation:
/// `{"data": {"type": "annotations", "attributes": {...}}}`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateAnnotationRequest {
    pub data: CreateAnnotationData,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateAnnotationData {
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub attributes: CreateAnnotationAttributes,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateAnnotationAttributes {
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    pub page: u32,
    pub content: Value,
}
