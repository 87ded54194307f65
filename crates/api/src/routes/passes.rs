//! Route definitions for the `/passes` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::passes;
use crate::state::AppState;

/// Routes mounted at `/passes`.
///
/// ```text
/// GET    /                    -> list_all
/// POST   /                    -> create
/// GET    /scan                -> scan
/// GET    /filter              -> list_filtered
/// GET    /stats               -> stats
/// POST   /{id}/verify-entry   -> verify_entry
/// POST   /{id}/give-goodies   -> give_goodies
/// DELETE /{id}                -> delete_pass
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(passes::list_all).post(passes::create))
        .route("/scan", get(passes::scan))
        .route("/filter", get(passes::list_filtered))
        .route("/stats", get(passes::stats))
        .route("/{id}/verify-entry", post(passes::verify_entry))
        .route("/{id}/give-goodies", post(passes::give_goodies))
        .route("/{id}", delete(passes::delete_pass))
}
