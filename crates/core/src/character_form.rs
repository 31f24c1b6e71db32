//! Parsing for the free-text inputs of the character form.

use crate::error::CoreError;

/// Split a comma-separated trait list into trimmed, non-empty traits.
pub fn parse_traits(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an optional age field. A blank field means "no age given".
pub fn parse_age(raw: &str) -> Result<Option<i32>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("age must be a whole number, got '{trimmed}'")))
}

/// Turn a blank text field into `None`.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
