//! HTTP client for the Document Engine REST API.
//!
//! The backend speaks JSON-API-flavored REST; this module owns the wire
//! types and the single long-lived [`reqwest`] client used for every call.

mod client;
mod error;
mod types;


pub use client::DocumentEngineClient;
pub use error::{BackendError, BackendResult};
pub use types::{
    Annotation, AnnotationAttributes, AnnotationKind, CreatedAnnotation, Document,
    DocumentAttributes, DocumentList, Layer, LayerAttributes, ListMeta,
};
