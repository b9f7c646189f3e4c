//! Request validation
//!
//! Works on raw `serde_json::Value` so every failure can name the exact
//! field that was missing or mistyped.

use serde_json::{Map, Value};

use super::ValidationError;
use crate::domain::models::{AnalysisRequest, ChatRequest};

/// Decode a raw request body. Shape checks happen in the `validate_*` functions.
pub fn parse_body(body: &[u8]) -> Result<Value, ValidationError> {
    serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

pub fn validate_analysis_request(input: &Value) -> Result<AnalysisRequest, ValidationError> {
    let obj = as_object(input)?;

    let user_id = required_string(obj, "user_id")?;
    if user_id.trim().is_empty() {
        return Err(ValidationError::EmptyField("user_id".to_string()));
    }

    let posts = match obj.get("posts") {
        None | Some(Value::Null) => return Err(ValidationError::MissingField("posts".to_string())),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ValidationError::InvalidType {
                    field: format!("posts[{}]", i),
                    expected: "a string",
                }),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(ValidationError::InvalidType {
                field: "posts".to_string(),
                expected: "an array of strings",
            });
        }
    };

    Ok(AnalysisRequest {
        user_id: user_id.to_string(),
        posts,
    })
}

/// The returned message is already trimmed.
pub fn validate_chat_request(input: &Value) -> Result<ChatRequest, ValidationError> {
    let obj = as_object(input)?;

    let message = required_string(obj, "message")?.trim();
    if message.is_empty() {
        return Err(ValidationError::MissingField("message".to_string()));
    }

    Ok(ChatRequest {
        message: message.to_string(),
    })
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input.as_object().ok_or(ValidationError::NotAnObject)
}

fn required_string<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}
