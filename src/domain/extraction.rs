//! Pull the analysis JSON object out of raw model text.

use serde_json::Value;

use super::ExtractionError;
use crate::domain::models::AnalysisResponse;

/// Range of tags the prompt asks for. Not enforced.
pub const ADVISED_TAG_COUNT: std::ops::RangeInclusive<usize> = 3..=5;

/// Isolate the JSON object candidate in `text`.
///
/// Text that already starts with `{` is returned as-is. Otherwise the span from
/// the first `{` to the last `}` is taken. This is greedy and not nesting-aware:
/// two separate objects in the text produce one unparseable span.
pub fn locate_json_object(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

pub fn extract_json_object(text: &str) -> Result<Value, ExtractionError> {
    let candidate = locate_json_object(text);
    serde_json::from_str(candidate).map_err(|e| ExtractionError::InvalidJson(e.to_string()))
}

/// Extract and schema-check an [`AnalysisResponse`] from model output.
pub fn extract_analysis_response(text: &str) -> Result<AnalysisResponse, ExtractionError> {
    let value = extract_json_object(text)?;
    if !value.is_object() {
        return Err(ExtractionError::Schema("expected a JSON object".to_string()));
    }

    let response: AnalysisResponse =
        serde_json::from_value(value).map_err(|e| ExtractionError::Schema(e.to_string()))?;

    if !ADVISED_TAG_COUNT.contains(&response.personality_tags.len()) {
        tracing::warn!(
            "Model returned {} personality tags (advised {}-{})",
            response.personality_tags.len(),
            ADVISED_TAG_COUNT.start(),
            ADVISED_TAG_COUNT.end()
        );
    }

    Ok(response)
}
