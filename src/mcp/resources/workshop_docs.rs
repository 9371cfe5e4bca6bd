//! `workshop://` reference documents exposed as MCP resources.
//!
//! The catalog is fixed; each read goes back to the document store so an
//! edited document is served without a restart.

use tracing::{info, warn};

use crate::models::resource::{ResourceDescriptor, ResourceDocument};
use crate::storage::DocumentStore;
use crate::{AppError, Result};

/// MIME type shared by every workshop document.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// The resource catalog in declaration order.
pub const WORKSHOP_RESOURCES: [ResourceDescriptor; 3] = [
    ResourceDescriptor {
        uri: "workshop://templates/copilot",
        name: "GitHub Copilot Templates",
        description: "Prompt engineering templates for GitHub Copilot",
        mime_type: MARKDOWN_MIME,
        document: "prompt-engineering-templates.md",
    },
    ResourceDescriptor {
        uri: "workshop://templates/agents",
        name: "AI Agent Templates",
        description: "Templates for building AI agents",
        mime_type: MARKDOWN_MIME,
        document: "ai-agent-templates.md",
    },
    ResourceDescriptor {
        uri: "workshop://examples/optimization",
        name: "Code Optimization Examples",
        description: "Before/after optimization examples",
        mime_type: MARKDOWN_MIME,
        document: "code-optimization-examples.md",
    },
];

/// All resource descriptors.
#[must_use]
pub fn list_resources() -> Vec<ResourceDescriptor> {
    WORKSHOP_RESOURCES.to_vec()
}

/// Look up a descriptor by URI.
#[must_use]
pub fn find_resource(uri: &str) -> Option<&'static ResourceDescriptor> {
    WORKSHOP_RESOURCES.iter().find(|resource| resource.uri == uri)
}

/// Read the full text of the resource at `uri`.
///
/// # Errors
///
/// Returns `AppError::NotFound` if `uri` is not in the catalog or its
/// backing document cannot be loaded.
pub async fn read_resource(store: &dyn DocumentStore, uri: &str) -> Result<ResourceDocument> {
    let resource = find_resource(uri)
        .ok_or_else(|| AppError::NotFound(format!("resource not found: {uri}")))?;

    let text = store.load(resource.document).await.map_err(|err| {
        warn!(uri, document = resource.document, %err, "resource document unavailable");
        AppError::NotFound(format!("resource {uri} unavailable: {}", err.detail()))
    })?;

    info!(uri, bytes = text.len(), "resource read");

    Ok(ResourceDocument {
        uri: uri.to_owned(),
        mime_type: resource.mime_type.to_owned(),
        text,
    })
}
