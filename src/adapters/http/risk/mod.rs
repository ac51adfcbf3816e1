//! HTTP adapter for risk endpoints.
//!
//! - `POST /api/risk` - Single-point score
//! - `POST /api/risk/sweep` - Coil-offset sweep with summary
//! - `POST /api/risk/overlay` - Multi-series overlay

pub mod dto;
mod handlers;
mod routes;

pub use dto::{
    OverlayRequest, OverlayResponse, PerturbationRequest, RiskRequest, RiskResponse,
    SweepRequest, SweepResponse,
};
pub use routes::risk_routes;
