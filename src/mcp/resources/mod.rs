//! MCP resource handlers.

pub mod workshop_docs;
