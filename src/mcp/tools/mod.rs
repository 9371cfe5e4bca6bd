//! Per-capability prompt builders and model-reply shaping.
//!
//! Building a request is pure: identical arguments always render the same
//! [`ModelRequest`]. Only the model call itself is non-deterministic.

pub mod code_review;
pub mod generate_documentation;
pub mod optimize_code;
pub mod security_scan;
pub mod util;

use crate::llm::ModelRequest;
use crate::models::capability::{Capability, CapabilityKind};
use crate::Result;

/// Render the model request for a validated invocation.
#[must_use]
pub fn build_request(capability: &Capability) -> ModelRequest {
    match capability {
        Capability::CodeReview(args) => code_review::build(args),
        Capability::GenerateTests(args) => generate_tests::build(args),
        Capability::OptimizeCode(args) => optimize_code::build(args),
        Capability::SecurityScan(args) => security_scan::build(args),
        Capability::GenerateDocumentation(args) => generate_documentation::build(args),
    }
}

/// Turn the raw model reply into the tool's output text.
///
/// # Errors
///
/// Returns `AppError::Upstream` when `kind` requires a JSON object and the
/// reply is not one.
pub fn shape_response(kind: CapabilityKind, reply: String) -> Result<String> {
    if kind.returns_json() {
        util::reformat_json_object(&reply)
    } else {
        Ok(reply)
    }
}
