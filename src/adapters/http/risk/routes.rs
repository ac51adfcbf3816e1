//! Axum router configuration for risk endpoints.

use axum::{routing::post, Router};

use super::handlers::{compute_overlay, compute_risk, compute_sweep};
use crate::adapters::http::state::AppState;

/// Create the risk API router.
///
/// # Routes
/// - `POST /` - Score one operating point
/// - `POST /sweep` - Sweep coil offset
/// - `POST /overlay` - Baseline plus perturbed sweeps
pub fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(compute_risk))
        .route("/sweep", post(compute_sweep))
        .route("/overlay", post(compute_overlay))
}
