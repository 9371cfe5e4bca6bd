//! `generate_documentation` prompt builder.

use crate::llm::{CompletionOptions, ModelRequest};
use crate::models::capability::{DocStyle, GenerateDocumentationArgs};

const TEMPERATURE: f32 = 0.3;

fn style_instruction(style: DocStyle) -> &'static str {
    match style {
        DocStyle::Markdown => "Generate comprehensive Markdown documentation",
        DocStyle::Jsdoc => "Generate JSDoc-style documentation",
        DocStyle::Sphinx => "Generate Sphinx-compatible reStructuredText documentation",
        DocStyle::Docstring => "Generate Python docstring-style documentation",
    }
}

/// Render the documentation request.
pub(crate) fn build(args: &GenerateDocumentationArgs) -> ModelRequest {
    let examples = if args.include_examples {
        " usage examples,"
    } else {
        ""
    };
    let system = format!(
        "You are a technical documentation expert. {} for the given code. Include \
         function/class descriptions, parameters, return values,{examples} and any important \
         notes. Make the documentation clear and comprehensive.",
        style_instruction(args.style)
    );

    ModelRequest {
        system,
        user: format!("Generate documentation for:\n\n{}", args.code),
        options: CompletionOptions {
            temperature: TEMPERATURE,
            json_output: false,
        },
    }
}
