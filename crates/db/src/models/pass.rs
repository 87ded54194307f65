//! Pass model and request/query DTOs.

use gatepass_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `passes` table.
///
/// `id` and `pass_code` are immutable once created. The descriptive
/// attendee/team fields start unset and are populated by the bulk-import
/// path. The two lifecycle flags each flip false→true at most once; the
/// paired actor and timestamp columns are set if and only if their flag
/// is true.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pass {
    pub id: DbId,
    pub team_id: Option<String>,
    pub team_name: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub user_type: Option<String>,
    pub domain: Option<String>,
    pub course: Option<String>,
    pub specialization: Option<String>,
    pub year_of_graduation: Option<i32>,
    pub college: Option<String>,
    pub unstop_report_url: Option<String>,
    pub ppt_url: Option<String>,
    pub pass_code: String,
    pub entry_verified: bool,
    pub goodies_given: bool,
    pub verified_by: Option<String>,
    pub goodies_given_by: Option<String>,
    pub entry_verified_at: Option<Timestamp>,
    pub goodies_given_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new pass. All other attendee fields start unset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePassRequest {
    #[validate(length(min = 1, message = "Pass code is required"))]
    pub pass_code: String,
    #[validate(length(min = 1, message = "Team name is required"))]
    pub team_name: String,
}

/// DTO for the two one-time transitions. `verified_by` is the opaque,
/// pre-authenticated actor label recorded verbatim on the pass.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(length(min = 1, message = "Verifier name is required"))]
    pub verified_by: String,
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/v1/passes/filter`.
///
/// Present predicates are combined with logical AND; absent (or
/// empty-string) predicates impose no constraint. An empty set matches
/// every pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassFilterParams {
    pub entry_verified: Option<bool>,
    pub goodies_given: Option<bool>,
    pub verified_by: Option<String>,
    pub goodies_given_by: Option<String>,
}

impl PassFilterParams {
    /// True if no predicate constrains the result set.
    ///
    /// Empty strings count as absent; scanning clients send
    /// `verified_by=` to mean "any".
    pub fn is_unconstrained(&self) -> bool {
        self.entry_verified.is_none()
            && self.goodies_given.is_none()
            && self.verified_by.as_deref().map_or(true, str::is_empty)
            && self.goodies_given_by.as_deref().map_or(true, str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_unconstrained() {
        assert!(PassFilterParams::default().is_unconstrained());
    }

    #[test]
    fn empty_string_predicates_count_as_absent() {
        let params = PassFilterParams {
            verified_by: Some(String::new()),
            goodies_given_by: Some(String::new()),
            ..Default::default()
        };
        assert!(params.is_unconstrained());
    }

    #[test]
    fn any_present_predicate_constrains() {
        let params = PassFilterParams {
            entry_verified: Some(false),
            ..Default::default()
        };
        assert!(!params.is_unconstrained());

        let params = PassFilterParams {
            verified_by: Some("staff-1".into()),
            ..Default::default()
        };
        assert!(!params.is_unconstrained());
    }
}
