//! Model Context Protocol server layer.

pub mod catalog;
pub mod context;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod prompts;
pub mod resources;
pub mod tools;
pub mod transport;
