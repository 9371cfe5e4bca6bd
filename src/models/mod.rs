//! Domain model module declarations.

pub mod capability;
pub mod invocation;
pub mod prompt;
pub mod resource;
