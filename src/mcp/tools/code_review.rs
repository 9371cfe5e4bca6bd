//! `code_review` prompt builder.

use crate::llm::{CompletionOptions, ModelRequest};
use crate::models::capability::{CodeReviewArgs, ReviewType};

const TEMPERATURE: f32 = 0.3;

const RESPONSE_SHAPE: &str = r#"{
  "summary": "Overall assessment",
  "score": 0-100,
  "issues": [
    {
      "type": "security|performance|quality|style",
      "severity": "critical|high|medium|low",
      "line": line_number,
      "message": "Description of the issue",
      "suggestion": "How to fix it"
    }
  ],
  "strengths": ["List of good practices found"],
  "recommendations": ["General recommendations"]
}"#;

fn focus(review_type: ReviewType) -> &'static str {
    match review_type {
        ReviewType::Security => "security",
        ReviewType::Performance => "performance",
        ReviewType::Quality => "quality",
        ReviewType::All => "security, performance, quality, and best practices",
    }
}

/// Render the review request.
pub(crate) fn build(args: &CodeReviewArgs) -> ModelRequest {
    let language = args.language.trim();
    let system = format!(
        "You are an expert code reviewer. Analyze the given {language} code and provide a \
         comprehensive review focusing on {}. Format your response as JSON with the following \
         structure:\n{RESPONSE_SHAPE}",
        focus(args.review_type)
    );

    ModelRequest {
        system,
        user: format!("Review this {language} code:\n\n{}", args.code),
        options: CompletionOptions {
            temperature: TEMPERATURE,
            json_output: true,
        },
    }
}
