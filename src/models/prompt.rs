//! Prompt template descriptors and expanded role-tagged messages.

use serde::Serialize;

/// One argument accepted by a prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptArgumentSpec {
    /// Argument name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether expansion fails without it.
    pub required: bool,
}

/// Catalog entry advertised through `prompts/list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptDescriptor {
    /// Template name (unique).
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Accepted arguments.
    pub arguments: &'static [PromptArgumentSpec],
}

/// Speaker of an expanded prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// Instruction framing the conversation.
    System,
    /// Caller content.
    User,
}

/// One expanded prompt message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    /// Speaker.
    pub role: PromptRole,
    /// Message text.
    pub content: String,
}

/// Result of expanding a prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptExpansion {
    /// Description of the template that was expanded.
    pub description: String,
    /// Ordered messages, `system` first.
    pub messages: Vec<PromptMessage>,
}
