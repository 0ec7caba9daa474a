//! Resource URI scheme and document-to-resource mapping.

use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};

use crate::backend::Document;

/// URI prefix for document resources; the id segment follows verbatim.
pub const URI_PREFIX: &str = "docbridge:///";

/// MIME type advertised for document resources.
pub const DOCUMENT_MIME_TYPE: &str = "application/pdf";

/// MIME type of the assembled document detail returned by read-resource.
pub const DETAIL_MIME_TYPE: &str = "application/json";

pub fn document_uri(id: &str) -> String {
    format!("{URI_PREFIX}{id}")
}

/// Extract the document id from a resource URI by stripping the fixed
/// prefix. No decoding or validation happens here: anything that does not
/// carry the prefix is passed to the backend as-is, and the backend's
/// error response becomes the failure path.
pub fn document_id(uri: &str) -> &str {
    uri.strip_prefix(URI_PREFIX).unwrap_or(uri)
}

/// Map a backend document to an MCP resource descriptor.
pub fn document_resource(document: &Document) -> Resource {
    let mut resource = RawResource::new(document_uri(&document.id), document.display_name());
    resource.mime_type = Some(DOCUMENT_MIME_TYPE.to_string());
    resource.no_annotation()
}

/// Wrap pretty-printed JSON text as resource contents tagged with the
/// original request URI.
pub fn detail_contents(uri: &str, text: String) -> ResourceContents {
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(DETAIL_MIME_TYPE.to_string());
    }
    contents
}
