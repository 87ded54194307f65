//! Repository for the `passes` table.
//!
//! All lifecycle writes go through here. The two transition methods are
//! atomic conditional updates: the write commits only if the flag is
//! still false at commit time, so two racing staff members cannot both
//! record the same transition.

use sqlx::PgPool;

use gatepass_core::types::DbId;

use crate::models::pass::{CreatePassRequest, Pass, PassFilterParams};
use crate::models::stats::{ActorStats, CollegeStats, PassStats};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, team_id, team_name, name, email, mobile, gender, location, \
    user_type, domain, course, specialization, year_of_graduation, college, \
    unstop_report_url, ppt_url, pass_code, entry_verified, goodies_given, \
    verified_by, goodies_given_by, entry_verified_at, goodies_given_at, created_at";

/// Name of the unique index on `passes.pass_code`.
pub const UQ_PASS_CODE: &str = "uq_passes_pass_code";

/// Provides lifecycle and query operations for passes.
pub struct PassRepo;

impl PassRepo {
    /// Insert a new pass with both flags false, returning the created row.
    ///
    /// Fails with a unique-constraint violation on [`UQ_PASS_CODE`] if the
    /// code is already taken; callers translate that into a duplicate-code
    /// domain error.
    pub async fn create(pool: &PgPool, input: &CreatePassRequest) -> Result<Pass, sqlx::Error> {
        let query = format!(
            "INSERT INTO passes (pass_code, team_name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pass>(&query)
            .bind(&input.pass_code)
            .bind(&input.team_name)
            .fetch_one(pool)
            .await
    }

    /// Find a pass by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passes WHERE id = $1");
        sqlx::query_as::<_, Pass>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a pass by its unique redemption code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Pass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passes WHERE pass_code = $1");
        sqlx::query_as::<_, Pass>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// True if any pass already uses the given redemption code.
    pub async fn exists_by_code(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM passes WHERE pass_code = $1)")
            .bind(code)
            .fetch_one(pool)
            .await
    }

    /// Record the one-time entry verification: flag, actor, timestamp.
    ///
    /// Conditional update; returns `None` if the pass does not exist or
    /// the entry was already verified (including by a concurrent caller
    /// that won the race). `goodies_given` state is untouched.
    pub async fn mark_entry_verified(
        pool: &PgPool,
        id: DbId,
        actor: &str,
    ) -> Result<Option<Pass>, sqlx::Error> {
        let query = format!(
            "UPDATE passes SET
                entry_verified = TRUE,
                verified_by = $2,
                entry_verified_at = NOW()
             WHERE id = $1 AND entry_verified = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pass>(&query)
            .bind(id)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Record the one-time goodies distribution: flag, actor, timestamp.
    ///
    /// Symmetric to [`Self::mark_entry_verified`], independent of
    /// `entry_verified`.
    pub async fn mark_goodies_given(
        pool: &PgPool,
        id: DbId,
        actor: &str,
    ) -> Result<Option<Pass>, sqlx::Error> {
        let query = format!(
            "UPDATE passes SET
                goodies_given = TRUE,
                goodies_given_by = $2,
                goodies_given_at = NOW()
             WHERE id = $1 AND goodies_given = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pass>(&query)
            .bind(id)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// List every pass in store-native order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Pass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passes");
        sqlx::query_as::<_, Pass>(&query).fetch_all(pool).await
    }

    /// List passes matching every predicate present in `params`.
    ///
    /// The WHERE clause is built from the predicates that are actually
    /// set; an unconstrained filter degenerates to [`Self::find_all`].
    pub async fn find_matching(
        pool: &PgPool,
        params: &PassFilterParams,
    ) -> Result<Vec<Pass>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut next_bind = 1usize;

        if params.entry_verified.is_some() {
            conditions.push(format!("entry_verified = ${next_bind}"));
            next_bind += 1;
        }
        if params.goodies_given.is_some() {
            conditions.push(format!("goodies_given = ${next_bind}"));
            next_bind += 1;
        }
        let verified_by = params.verified_by.as_deref().filter(|s| !s.is_empty());
        if verified_by.is_some() {
            conditions.push(format!("verified_by = ${next_bind}"));
            next_bind += 1;
        }
        let goodies_given_by = params.goodies_given_by.as_deref().filter(|s| !s.is_empty());
        if goodies_given_by.is_some() {
            conditions.push(format!("goodies_given_by = ${next_bind}"));
        }

        let query = if conditions.is_empty() {
            format!("SELECT {COLUMNS} FROM passes")
        } else {
            format!(
                "SELECT {COLUMNS} FROM passes WHERE {}",
                conditions.join(" AND ")
            )
        };

        let mut q = sqlx::query_as::<_, Pass>(&query);
        if let Some(entry_verified) = params.entry_verified {
            q = q.bind(entry_verified);
        }
        if let Some(goodies_given) = params.goodies_given {
            q = q.bind(goodies_given);
        }
        if let Some(actor) = verified_by {
            q = q.bind(actor);
        }
        if let Some(actor) = goodies_given_by {
            q = q.bind(actor);
        }
        q.fetch_all(pool).await
    }

    /// Hard-delete a pass by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM passes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Compute the aggregate report for the admin stats endpoint.
    pub async fn stats(pool: &PgPool) -> Result<PassStats, sqlx::Error> {
        let (total_passes, total_entries_verified, total_goodies_given) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                "SELECT COUNT(*),
                        COUNT(*) FILTER (WHERE entry_verified),
                        COUNT(*) FILTER (WHERE goodies_given)
                 FROM passes",
            )
            .fetch_one(pool)
            .await?;

        let colleges = sqlx::query_as::<_, CollegeStats>(
            "SELECT college AS college_name, COUNT(*) AS count
             FROM passes
             WHERE college IS NOT NULL
             GROUP BY college
             ORDER BY count DESC, college",
        )
        .fetch_all(pool)
        .await?;

        let entries_verified_by = sqlx::query_as::<_, ActorStats>(
            "SELECT verified_by AS actor, COUNT(*) AS count
             FROM passes
             WHERE entry_verified
             GROUP BY verified_by
             ORDER BY count DESC, actor",
        )
        .fetch_all(pool)
        .await?;

        let goodies_given_by = sqlx::query_as::<_, ActorStats>(
            "SELECT goodies_given_by AS actor, COUNT(*) AS count
             FROM passes
             WHERE goodies_given
             GROUP BY goodies_given_by
             ORDER BY count DESC, actor",
        )
        .fetch_all(pool)
        .await?;

        let most_entries_verified_by = entries_verified_by.first().map(|a| a.actor.clone());
        let most_goodies_given_by = goodies_given_by.first().map(|a| a.actor.clone());

        Ok(PassStats {
            total_passes,
            total_entries_verified,
            total_goodies_given,
            colleges,
            entries_verified_by,
            goodies_given_by,
            most_entries_verified_by,
            most_goodies_given_by,
        })
    }
}
