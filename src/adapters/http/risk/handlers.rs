//! HTTP handlers for risk endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::CallerAudience;
use crate::adapters::http::state::AppState;

use super::dto::{
    OverlayRequest, OverlayResponse, RiskRequest, RiskResponse, SweepRequest, SweepResponse,
};

/// POST /api/risk - Score one operating point
pub async fn compute_risk(
    State(state): State<AppState>,
    CallerAudience(audience): CallerAudience,
    payload: Result<Json<RiskRequest>, JsonRejection>,
) -> Result<Json<RiskResponse>, ApiError> {
    let Json(request) = payload?;
    let handler = state.compute_risk_handler();

    let result = handler.handle(request.into_command(audience)).await?;

    Ok(Json(RiskResponse::from(result)))
}

/// POST /api/risk/sweep - Risk curve across coil offset
pub async fn compute_sweep(
    State(state): State<AppState>,
    CallerAudience(audience): CallerAudience,
    payload: Result<Json<SweepRequest>, JsonRejection>,
) -> Result<Json<SweepResponse>, ApiError> {
    let Json(request) = payload?;
    let handler = state.compute_sweep_handler();

    let result = handler.handle(request.into_command(audience)).await?;

    Ok(Json(SweepResponse::from(result)))
}

/// POST /api/risk/overlay - Baseline curve plus perturbed curves
pub async fn compute_overlay(
    State(state): State<AppState>,
    CallerAudience(audience): CallerAudience,
    payload: Result<Json<OverlayRequest>, JsonRejection>,
) -> Result<Json<OverlayResponse>, ApiError> {
    let Json(request) = payload?;
    let handler = state.compute_overlay_handler();

    let result = handler.handle(request.into_command(audience)).await?;

    Ok(Json(OverlayResponse::from(result)))
}
