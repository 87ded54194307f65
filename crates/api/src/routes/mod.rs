pub mod health;
pub mod passes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /passes                        list all (GET), create (POST)
/// /passes/scan?code=             resolve a scanned code (GET)
/// /passes/filter                 conjunctive filtered listing (GET)
/// /passes/stats                  aggregate report (GET)
/// /passes/{id}/verify-entry      one-time entry verification (POST)
/// /passes/{id}/give-goodies      one-time goodies distribution (POST)
/// /passes/{id}                   hard delete (DELETE)
/// ```
///
/// Authorization is a route-layer concern: when role checks arrive they
/// attach here as middleware, never inside the lifecycle handlers.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/passes", passes::router())
}
