use crate::error::CoreError;

/// Parses a whole number typed by the user.
///
/// Leading and trailing whitespace is ignored. Anything else that is not a
/// complete integer (empty text, `12abc`, `3.5`) is rejected rather than read
/// as zero or truncated.
pub fn parse_whole_number(field: &str, input: &str) -> Result<i64, CoreError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| CoreError::InvalidInput(field.to_string(), format!("'{}' ({})", trimmed, e)))
}
