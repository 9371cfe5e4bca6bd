//! Canned prompt templates served through `prompts/list` and `prompts/get`.

use serde_json::{Map, Value};

use crate::models::prompt::{
    PromptArgumentSpec, PromptDescriptor, PromptExpansion, PromptMessage, PromptRole,
};
use crate::{AppError, Result};

const CODE_ARGUMENT: &str = "code";

/// A template: descriptor plus the fixed system text and user lead-in.
#[derive(Debug, Clone, Copy)]
struct PromptTemplate {
    descriptor: PromptDescriptor,
    system: &'static str,
    user_lead: &'static str,
}

const TEMPLATES: [PromptTemplate; 3] = [
    PromptTemplate {
        descriptor: PromptDescriptor {
            name: "refactor_for_performance",
            description: "Refactor code for better performance",
            arguments: &[PromptArgumentSpec {
                name: CODE_ARGUMENT,
                description: "Code to refactor",
                required: true,
            }],
        },
        system: "You are an expert performance engineer. Refactor the given code for optimal \
                 performance while maintaining readability and correctness.",
        user_lead: "Please refactor this code for better performance:",
    },
    PromptTemplate {
        descriptor: PromptDescriptor {
            name: "implement_security_best_practices",
            description: "Apply security best practices to code",
            arguments: &[PromptArgumentSpec {
                name: CODE_ARGUMENT,
                description: "Code to secure",
                required: true,
            }],
        },
        system: "You are a security expert. Apply security best practices to the given code, \
                 including input validation, proper authentication, and protection against \
                 common vulnerabilities.",
        user_lead: "Apply security best practices to this code:",
    },
    PromptTemplate {
        descriptor: PromptDescriptor {
            name: "generate_api_from_spec",
            description: "Generate API implementation from OpenAPI spec",
            arguments: &[PromptArgumentSpec {
                name: "spec",
                description: "OpenAPI specification",
                required: true,
            }],
        },
        system: "You are an API development expert. Generate a complete, production-ready API \
                 implementation from the given OpenAPI specification.",
        user_lead: "Generate a complete API implementation from this OpenAPI spec:",
    },
];

/// All prompt descriptors in declaration order.
#[must_use]
pub fn list_prompts() -> Vec<PromptDescriptor> {
    TEMPLATES.iter().map(|template| template.descriptor).collect()
}

/// Expand prompt `name` with `arguments` into `[system, user]` messages.
///
/// String arguments are substituted verbatim; other JSON values are
/// substituted in their JSON text form. Optional arguments that are absent
/// are skipped.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown prompt name and
/// `AppError::Validation` when a required argument is missing.
pub fn get_prompt(name: &str, arguments: &Map<String, Value>) -> Result<PromptExpansion> {
    let template = TEMPLATES
        .iter()
        .find(|template| template.descriptor.name == name)
        .ok_or_else(|| AppError::NotFound(format!("prompt not found: {name}")))?;

    let mut user = template.user_lead.to_owned();
    for spec in template.descriptor.arguments {
        match arguments.get(spec.name) {
            Some(Value::String(text)) => {
                user.push_str("\n\n");
                user.push_str(text);
            }
            Some(Value::Null) | None if spec.required => {
                return Err(AppError::Validation(format!(
                    "prompt {name} requires argument '{}'",
                    spec.name
                )));
            }
            Some(Value::Null) | None => {}
            Some(other) => {
                user.push_str("\n\n");
                user.push_str(&other.to_string());
            }
        }
    }

    Ok(PromptExpansion {
        description: template.descriptor.description.to_owned(),
        messages: vec![
            PromptMessage {
                role: PromptRole::System,
                content: template.system.to_owned(),
            },
            PromptMessage {
                role: PromptRole::User,
                content: user,
            },
        ],
    })
}
