//! `optimize_code` prompt builder.

use crate::llm::{CompletionOptions, ModelRequest};
use crate::models::capability::{OptimizeCodeArgs, TargetMetric};

const TEMPERATURE: f32 = 0.3;

fn focus(metric: TargetMetric) -> &'static str {
    match metric {
        TargetMetric::Speed => "execution speed and time complexity",
        TargetMetric::Memory => "memory usage and space complexity",
        TargetMetric::Both => "both execution speed and memory usage",
    }
}

/// Render the optimization request.
pub(crate) fn build(args: &OptimizeCodeArgs) -> ModelRequest {
    let mut system = format!(
        "You are a performance optimization expert. Optimize the given code for {}.",
        focus(args.target_metric)
    );
    if !args.constraints.is_empty() {
        system.push_str(" Constraints: ");
        system.push_str(&args.constraints.join(", "));
        system.push('.');
    }
    system.push_str(" Provide the optimized code with explanations of the changes made.");

    ModelRequest {
        system,
        user: format!("Optimize this code:\n\n{}", args.code),
        options: CompletionOptions {
            temperature: TEMPERATURE,
            json_output: false,
        },
    }
}
