#![forbid(unsafe_code)]

//! AI workshop MCP server: AI-assisted developer tools, reference documents
//! and prompt templates served over the Model Context Protocol.

pub mod config;
pub mod errors;
pub mod llm;
pub mod mcp;
pub mod models;
pub mod storage;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
