use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Largest accepted source file or note, in bytes.
pub const MAX_TEXT_BYTES: usize = 256 * 1024;

/// Decode a JSON column, falling back to the empty value on malformed content.
pub fn json_or_default<T: DeserializeOwned + Default>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!("Malformed JSON column: {e}");
        T::default()
    })
}

/// Reject text larger than [`MAX_TEXT_BYTES`].
pub fn validate_text_size(field: &str, text: &str) -> Result<(), AppError> {
    if text.len() > MAX_TEXT_BYTES {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_TEXT_BYTES} bytes"
        )));
    }
    Ok(())
}
