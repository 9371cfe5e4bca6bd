//! Invocation results returned by the dispatcher.

use crate::AppError;

/// A single block of tool output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Plain text, or JSON rendered as text.
    Text(String),
}

impl ContentBlock {
    /// Text carried by the block.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
        }
    }
}

/// Outcome of one tool invocation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Ordered content blocks.
    pub content: Vec<ContentBlock>,
    /// Whether the content describes a failure.
    pub is_error: bool,
}

impl InvocationResult {
    /// Successful result holding one text block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            is_error: false,
        }
    }

    /// Failed result holding one `"Error: <detail>"` text block.
    #[must_use]
    pub fn error(err: &AppError) -> Self {
        Self {
            content: vec![ContentBlock::Text(format!("Error: {}", err.detail()))],
            is_error: true,
        }
    }

    /// Text of the first block, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(ContentBlock::as_text)
    }
}
