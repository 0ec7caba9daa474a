//! MCP surface: resource and tool handlers on top of the backend client.
//!
//! Protocol framing, handshake and JSON-RPC dispatch are the `rmcp` SDK's
//! concern; this module only maps MCP operations onto Document Engine
//! calls.

mod resources;
mod server;
mod tools;

#[cfg(test)]
mod server_test;

pub use server::DocBridgeServer;
pub use tools::{CreateAnnotationParams, SearchParams};
