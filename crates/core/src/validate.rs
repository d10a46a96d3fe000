//! Input validation helpers shared by the API handlers.

use crate::error::CoreError;

/// Valid step kinds. `NORMAL` is a plain checkbox step; the others carry
/// structured content.
pub const STEP_KINDS: &[&str] = &["NORMAL", "TEXT", "LIST", "RECORD"];

/// Maximum length for entity display names.
pub const MAX_NAME_LEN: usize = 200;

/// Validate an entity display name: non-blank, at most [`MAX_NAME_LEN`] chars.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be blank".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a step kind against [`STEP_KINDS`].
pub fn validate_step_kind(kind: &str) -> Result<(), CoreError> {
    if STEP_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "invalid step kind '{kind}', expected one of {STEP_KINDS:?}"
        )))
    }
}

/// Validate a junction-row order index. Order indexes are non-negative.
pub fn validate_order_index(order_index: i32) -> Result<(), CoreError> {
    if order_index < 0 {
        return Err(CoreError::Validation(format!(
            "order_index must be non-negative, got {order_index}"
        )));
    }
    Ok(())
}
