//! Request validation — pure checks applied before any upstream call.

use serde_json::Value;
use thiserror::Error;

/// Maximum length of a single text, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;
/// Maximum number of texts accepted in one batch.
pub const MAX_BATCH_TEXTS: usize = 100;

/// Rejected client input. `Display` is the client-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text is required and cannot be empty")]
    EmptyText,
    #[error("Text too long. Maximum 5000 characters allowed.")]
    TextTooLong,
    #[error("Texts array is required and cannot be empty")]
    EmptyBatch,
    #[error("Too many texts. Maximum 100 texts allowed per batch.")]
    TooManyTexts,
    #[error("Text at index {0} is invalid or empty")]
    InvalidTextAt(usize),
}

/// Validates the `text` of an analyze request, returning the trimmed text.
///
/// The length cap applies to the untrimmed input and wins over the
/// emptiness check, so a whitespace-only string past the cap reports
/// too-long, not empty.
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong);
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Validates the `texts` of a batch request, returning the trimmed texts
/// in their original order.
///
/// Operates on the raw JSON value so that a non-string element reports
/// its index instead of failing body deserialization wholesale. The scan
/// is left to right and stops at the first invalid element.
pub fn validate_texts(texts: Option<&Value>) -> Result<Vec<String>, ValidationError> {
    let items = match texts.and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => return Err(ValidationError::EmptyBatch),
    };
    if items.len() > MAX_BATCH_TEXTS {
        return Err(ValidationError::TooManyTexts);
    }
    let mut trimmed = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str().map(str::trim) {
            Some(text) if !text.is_empty() => trimmed.push(text.to_string()),
            _ => return Err(ValidationError::InvalidTextAt(i)),
        }
    }
    Ok(trimmed)
}
