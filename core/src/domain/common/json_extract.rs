use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::domain::common::entities::app_errors::CoreError;

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(\{.*?\}|\[.*?\])\s*```").expect("static regex is valid")
});

/// Parses the JSON payload of a model reply.
///
/// Models frequently wrap JSON in markdown fences or surround it with prose, so
/// the fenced block is tried first, then the whole reply, then the outermost
/// `{ ... }` span.
pub fn extract_json<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    let mut last_error = None;

    for candidate in json_candidates(raw) {
        match serde_json::from_str::<T>(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    let reason = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "empty response".to_string());
    tracing::error!("Failed to parse LLM response: {}", reason);

    Err(CoreError::ExternalServiceError(format!(
        "Failed to parse LLM response: {}",
        reason
    )))
}

/// Removes markdown code fences, keeping the inner text.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn json_candidates(raw: &str) -> Vec<&str> {
    let mut candidates = Vec::new();

    if let Some(fenced) = FENCED_JSON.captures(raw).and_then(|c| c.get(1)) {
        candidates.push(fenced.as_str());
    }

    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        candidates.push(trimmed);
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}'))
        && start < end
    {
        candidates.push(&raw[start..=end]);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct RecipeName {
        recipe_name: String,
    }

    #[test]
    fn test_extract_plain_json() {
        let parsed: RecipeName = extract_json(r#"{"recipe_name": "Aloo Paratha"}"#).unwrap();
        assert_eq!(parsed.recipe_name, "Aloo Paratha");
    }

    #[test]
    fn test_extract_fenced_json_with_prose() {
        let raw = "Sure! Here is the result:\n```json\n{\"recipe_name\": \"Paneer Tikka\"}\n```\nEnjoy.";
        let parsed: RecipeName = extract_json(raw).unwrap();
        assert_eq!(parsed.recipe_name, "Paneer Tikka");
    }

    #[test]
    fn test_extract_unfenced_json_inside_prose() {
        let raw = "The answer is {\"recipe_name\": \"Dal\"} as requested";
        let parsed: RecipeName = extract_json(raw).unwrap();
        assert_eq!(parsed.recipe_name, "Dal");
    }

    #[test]
    fn test_extract_invalid_json_is_external_error() {
        let err = extract_json::<RecipeName>("no json here").unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
    }
}
