//! Sweep Module - risk curves over coil misalignment.
//!
//! # Components
//!
//! - `SweepRange` - boundary-normalized `[from, to]` / `step`, index-based values
//! - `SweepEngine` - one risk evaluation per coil angle
//! - `SweepCurve` / `CurveSummary` - ordered points plus peak and band crossings
//! - `Overlay` - baseline curve plus one curve per perturbed field

mod curve;
mod engine;
mod overlay;
mod range;

pub use curve::{CurveSummary, SweepCurve, SweepPoint};
pub use engine::SweepEngine;
pub use overlay::{Overlay, Perturbation, SweepSeries, BASELINE_LABEL, DEFAULT_PERTURBATIONS};
pub use range::{SweepRange, FALLBACK_STEP};
