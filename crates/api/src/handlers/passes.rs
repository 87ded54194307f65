//! Handlers for the `/passes` resource: the pass lifecycle engine.
//!
//! The engine is stateless between calls; every operation is a single
//! logical read-then-write against the store. The two one-time transitions
//! are committed with conditional updates so a racing second caller loses
//! at the store rather than overwriting the first actor's record.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use gatepass_core::error::CoreError;
use gatepass_core::types::DbId;
use gatepass_db::models::pass::{CreatePassRequest, Pass, PassFilterParams, VerifyRequest};
use gatepass_db::models::stats::PassStats;
use gatepass_db::repositories::pass_repo::UQ_PASS_CODE;
use gatepass_db::repositories::PassRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/v1/passes/scan`.
#[derive(Debug, Deserialize)]
pub struct ScanParams {
    pub code: String,
}

/// POST /api/v1/passes
///
/// Issues a new pass. The existence pre-check gives the common duplicate
/// case a precise error; the unique index on `pass_code` catches the
/// narrow window where two concurrent creates both pass the pre-check,
/// and the loser is reported as the same duplicate-code error.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePassRequest>,
) -> AppResult<(StatusCode, Json<Pass>)> {
    input.validate()?;

    if PassRepo::exists_by_code(&state.pool, &input.pass_code).await? {
        return Err(CoreError::DuplicateCode(input.pass_code).into());
    }

    let pass = match PassRepo::create(&state.pool, &input).await {
        Ok(pass) => pass,
        Err(err) if gatepass_db::is_unique_violation(&err, UQ_PASS_CODE) => {
            return Err(CoreError::DuplicateCode(input.pass_code).into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(pass_id = pass.id, code = %pass.pass_code, "Pass created");
    Ok((StatusCode::CREATED, Json(pass)))
}

/// GET /api/v1/passes/scan?code={code}
///
/// Resolves a scanned redemption code to its pass. No mutation; the
/// scanning workflow calls this before choosing which transition to apply.
pub async fn scan(
    State(state): State<AppState>,
    Query(params): Query<ScanParams>,
) -> AppResult<Json<Pass>> {
    let pass = PassRepo::find_by_code(&state.pool, &params.code)
        .await?
        .ok_or_else(|| CoreError::pass_not_found_by_code(&params.code))?;
    Ok(Json(pass))
}

/// POST /api/v1/passes/{id}/verify-entry
///
/// One-time entry verification. `goodies_given` state is untouched.
pub async fn verify_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VerifyRequest>,
) -> AppResult<Json<Pass>> {
    input.validate()?;

    let pass = PassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::pass_not_found_by_id(id))?;
    if pass.entry_verified {
        return Err(CoreError::AlreadyDone("Entry already verified").into());
    }

    // The conditional update returns no row if a concurrent caller
    // committed between our read and this write.
    let updated = PassRepo::mark_entry_verified(&state.pool, id, &input.verified_by)
        .await?
        .ok_or(CoreError::AlreadyDone("Entry already verified"))?;

    tracing::info!(pass_id = id, actor = %input.verified_by, "Entry verified");
    Ok(Json(updated))
}

/// POST /api/v1/passes/{id}/give-goodies
///
/// One-time goodies distribution, independent of entry verification.
pub async fn give_goodies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<VerifyRequest>,
) -> AppResult<Json<Pass>> {
    input.validate()?;

    let pass = PassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::pass_not_found_by_id(id))?;
    if pass.goodies_given {
        return Err(CoreError::AlreadyDone("Goodies already given").into());
    }

    let updated = PassRepo::mark_goodies_given(&state.pool, id, &input.verified_by)
        .await?
        .ok_or(CoreError::AlreadyDone("Goodies already given"))?;

    tracing::info!(pass_id = id, actor = %input.verified_by, "Goodies given");
    Ok(Json(updated))
}

/// GET /api/v1/passes
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Pass>>> {
    let passes = PassRepo::find_all(&state.pool).await?;
    Ok(Json(passes))
}

/// GET /api/v1/passes/filter
///
/// Conjunctive filtering over the four optional predicates. An empty
/// criteria set returns the same result as the unfiltered listing.
pub async fn list_filtered(
    State(state): State<AppState>,
    Query(params): Query<PassFilterParams>,
) -> AppResult<Json<Vec<Pass>>> {
    let passes = PassRepo::find_matching(&state.pool, &params).await?;
    Ok(Json(passes))
}

/// DELETE /api/v1/passes/{id}
///
/// Hard delete; nothing else references a pass, so there is no cascade.
pub async fn delete_pass(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PassRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(pass_id = id, "Pass deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::pass_not_found_by_id(id)))
    }
}

/// GET /api/v1/passes/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<PassStats>> {
    let stats = PassRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
