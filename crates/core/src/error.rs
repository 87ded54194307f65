use crate::types::DbId;

/// Domain error taxonomy for pass lifecycle operations.
///
/// Every failure an engine operation can produce is one of these variants.
/// None of them are retried internally; each is surfaced to the HTTP layer,
/// which owns the fixed variant-to-status mapping.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field was missing or empty. Carries the offending
    /// field's message.
    #[error("{0}")]
    InvalidInput(String),

    /// Lookup by id or code found nothing. Carries the requested key.
    #[error("Pass not found with {key}: {value}")]
    NotFound { key: &'static str, value: String },

    /// Create was attempted with an already-used redemption code.
    #[error("Pass code already exists: {0}")]
    DuplicateCode(String),

    /// A one-time transition was re-applied after it already completed.
    #[error("{0}")]
    AlreadyDone(&'static str),

    /// Any store or infrastructure failure not classified above.
    /// The message is logged; callers receive a sanitized response.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl CoreError {
    /// Not-found error for a lookup by internal id.
    pub fn pass_not_found_by_id(id: DbId) -> Self {
        CoreError::NotFound {
            key: "id",
            value: id.to_string(),
        }
    }

    /// Not-found error for a lookup by redemption code.
    pub fn pass_not_found_by_code(code: &str) -> Self {
        CoreError::NotFound {
            key: "code",
            value: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_requested_key() {
        let by_id = CoreError::pass_not_found_by_id(42);
        assert_eq!(by_id.to_string(), "Pass not found with id: 42");

        let by_code = CoreError::pass_not_found_by_code("PASS-404");
        assert_eq!(by_code.to_string(), "Pass not found with code: PASS-404");
    }

    #[test]
    fn duplicate_code_message_names_the_conflicting_code() {
        let err = CoreError::DuplicateCode("PASS-001".into());
        assert_eq!(err.to_string(), "Pass code already exists: PASS-001");
    }
}
