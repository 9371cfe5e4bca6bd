//! Shared utilities for tool handlers and model-reply shaping.

use serde_json::Value;

use crate::{AppError, Result};

/// Clip `text` to at most `max_len` bytes without splitting a character.
///
/// A clipped result ends in `"..."` when `max_len` leaves room for it.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_owned();
    }

    let ellipsis = if max_len >= 3 { "..." } else { "" };
    let budget = max_len - ellipsis.len();
    let cut = text
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|&index| index <= budget)
        .last()
        .unwrap_or(0);

    let mut clipped = String::with_capacity(cut + ellipsis.len());
    clipped.push_str(&text[..cut]);
    clipped.push_str(ellipsis);
    clipped
}

/// Parse a model reply that must be a JSON object and re-render it
/// pretty-printed.
///
/// Models occasionally wrap JSON in a Markdown code fence even in JSON
/// mode; a single surrounding fence is stripped before parsing.
///
/// # Errors
///
/// Returns `AppError::Upstream` if the reply is not valid JSON or is valid
/// JSON but not an object.
pub fn reformat_json_object(reply: &str) -> Result<String> {
    let body = strip_code_fence(reply.trim());
    let value: Value = serde_json::from_str(body)
        .map_err(|err| AppError::Upstream(format!("model returned invalid JSON: {err}")))?;

    if !value.is_object() {
        return Err(AppError::Upstream(
            "model returned JSON that is not an object".into(),
        ));
    }

    serde_json::to_string_pretty(&value)
        .map_err(|err| AppError::Upstream(format!("failed to render model JSON: {err}")))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    body.split_once('\n').map_or(body, |(_, inner)| inner).trim()
}
