//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, audience, validation errors)
//! - `risk` - Pure risk model and input resolution
//! - `sweep` - Sweep engine, curves and overlays over coil misalignment
//! - `entity` - Patient/device profiles that supply baselines and sensitivities

pub mod entity;
pub mod foundation;
pub mod risk;
pub mod sweep;
