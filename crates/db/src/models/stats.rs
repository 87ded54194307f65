//! Aggregate statistics models for the admin stats endpoint.

use serde::Serialize;
use sqlx::FromRow;

/// Aggregate report over the whole pass collection.
#[derive(Debug, Clone, Serialize)]
pub struct PassStats {
    pub total_passes: i64,
    pub total_entries_verified: i64,
    pub total_goodies_given: i64,
    /// Pass counts per college, most passes first. Passes without a
    /// college on record are omitted.
    pub colleges: Vec<CollegeStats>,
    /// Entry verifications per actor, most active first.
    pub entries_verified_by: Vec<ActorStats>,
    /// Goodies distributions per actor, most active first.
    pub goodies_given_by: Vec<ActorStats>,
    pub most_entries_verified_by: Option<String>,
    pub most_goodies_given_by: Option<String>,
}

/// Pass count for a single college.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CollegeStats {
    pub college_name: String,
    pub count: i64,
}

/// Transition count for a single staff actor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorStats {
    pub actor: String,
    pub count: i64,
}
