//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Tool or prompt arguments failed schema validation.
    Validation(String),
    /// Requested tool name is not in the capability catalog.
    UnknownCapability(String),
    /// Requested resource, prompt, or backing document does not exist.
    NotFound(String),
    /// The language-model endpoint failed or returned an unusable reply.
    Upstream(String),
    /// The in-flight request was cancelled by the transport.
    Cancelled(String),
    /// MCP protocol or transport failure.
    Mcp(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl AppError {
    /// The message carried by the error, without its kind prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Config(msg)
            | Self::Validation(msg)
            | Self::UnknownCapability(msg)
            | Self::NotFound(msg)
            | Self::Upstream(msg)
            | Self::Cancelled(msg)
            | Self::Mcp(msg)
            | Self::Io(msg) => msg,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
            Self::UnknownCapability(msg) => write!(f, "unknown capability: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Upstream(msg) => write!(f, "upstream: {msg}"),
            Self::Cancelled(msg) => write!(f, "cancelled: {msg}"),
            Self::Mcp(msg) => write!(f, "mcp: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(format!("invalid JSON: {err}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}
