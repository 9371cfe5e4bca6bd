//! Static capability catalog advertised through `tools/list`.

use serde_json::{json, Map, Value};

use crate::models::capability::{CapabilityDescriptor, CapabilityKind};

/// Convert a `serde_json::Value::Object` into a schema map.
fn schema(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Descriptor for one capability.
#[must_use]
pub fn describe(kind: CapabilityKind) -> CapabilityDescriptor {
    let (description, input_schema) = match kind {
        CapabilityKind::CodeReview => (
            "AI-powered code review tool",
            json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Code to review" },
                    "language": { "type": "string", "description": "Programming language" },
                    "reviewType": {
                        "type": "string",
                        "enum": ["security", "performance", "quality", "all"],
                        "default": "all"
                    }
                },
                "required": ["code", "language"]
            }),
        ),
        CapabilityKind::GenerateTests => (
            "Generate unit tests for code",
            json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Code to generate tests for" },
                    "framework": {
                        "type": "string",
                        "enum": ["jest", "pytest", "junit", "nunit"],
                        "description": "Testing framework"
                    },
                    "coverage": {
                        "type": "string",
                        "enum": ["basic", "comprehensive", "edge-cases"],
                        "default": "comprehensive"
                    }
                },
                "required": ["code", "framework"]
            }),
        ),
        CapabilityKind::OptimizeCode => (
            "Optimize code for performance",
            json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Code to optimize" },
                    "targetMetric": {
                        "type": "string",
                        "enum": ["speed", "memory", "both"],
                        "default": "both"
                    },
                    "constraints": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Optimization constraints"
                    }
                },
                "required": ["code"]
            }),
        ),
        CapabilityKind::SecurityScan => (
            "Scan code for security vulnerabilities",
            json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Code to scan" },
                    "scanType": {
                        "type": "string",
                        "enum": ["SAST", "secrets", "dependencies", "all"],
                        "default": "all"
                    },
                    "severity": {
                        "type": "string",
                        "enum": ["all", "high", "critical"],
                        "default": "all"
                    }
                },
                "required": ["code"]
            }),
        ),
        CapabilityKind::GenerateDocumentation => (
            "Generate documentation from code",
            json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string", "description": "Code to document" },
                    "style": {
                        "type": "string",
                        "enum": ["markdown", "jsdoc", "sphinx", "docstring"],
                        "default": "markdown"
                    },
                    "includeExamples": { "type": "boolean", "default": true }
                },
                "required": ["code"]
            }),
        ),
    };

    CapabilityDescriptor {
        name: kind.name(),
        description,
        input_schema: schema(input_schema),
    }
}

/// The full catalog in declaration order.
#[must_use]
pub fn list_capabilities() -> Vec<CapabilityDescriptor> {
    CapabilityKind::ALL.into_iter().map(describe).collect()
}
