//! Risk Module - pure scoring of a WPT charging configuration.
//!
//! # Components
//!
//! - `InputVector` / `PartialInputs` - resolved operating point and caller overrides
//! - `resolve_inputs` - default → baseline → override precedence
//! - `SensitivityFactors` / `RiskWeights` - per-entity reweighting, always normalized
//! - `RiskModel` - score, status band, telemetry and rationale
//!
//! Everything here is a total function of its arguments: no I/O, no shared state.

mod inputs;
mod model;
mod resolver;
mod weights;

pub use inputs::{InputField, InputVector, PartialInputs};
pub use model::{
    round2, RiskModel, RiskResult, RiskStatus, SubRisks, Telemetry, AMBER_THRESHOLD,
    RED_THRESHOLD,
};
pub use resolver::resolve_inputs;
pub use weights::{RiskWeights, SensitivityFactors};
