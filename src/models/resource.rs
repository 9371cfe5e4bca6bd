//! Static reference documents served as MCP resources.

use serde::Serialize;

/// Catalog entry advertised through `resources/list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Logical URI (unique).
    pub uri: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// MIME type of the document text.
    pub mime_type: &'static str,
    /// File name of the backing document in the document store.
    #[serde(skip)]
    pub document: &'static str,
}

/// Full text of a resource returned by `resources/read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDocument {
    /// URI that was read.
    pub uri: String,
    /// MIME type of `text`.
    pub mime_type: String,
    /// Complete document content.
    pub text: String,
}
