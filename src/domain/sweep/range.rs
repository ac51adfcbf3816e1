//! Sweep control parameters with boundary clamping.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Slack when deciding whether the last index still falls inside `to`.
const INDEX_TOLERANCE: f64 = 1e-9;

/// Step used when the caller passes a non-positive one.
pub const FALLBACK_STEP: f64 = 1.0;

/// A normalized `[from, to]` range walked in `step` increments.
///
/// Invariants after construction: `from >= 0`, `to >= from`, `step > 0`, all finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    from: f64,
    to: f64,
    step: f64,
}

impl SweepRange {
    /// Applies the boundary rules.
    ///
    /// - `from` must be finite and `>= 0`, otherwise the request is rejected
    /// - `to < from` is clamped up to `from`
    /// - a non-positive or non-finite `step` becomes [`FALLBACK_STEP`]
    pub fn new(from: f64, to: f64, step: f64) -> Result<Self, ValidationError> {
        if !from.is_finite() {
            return Err(ValidationError::non_finite("from"));
        }
        if from < 0.0 {
            return Err(ValidationError::invalid_format(
                "from",
                format!("must be >= 0, got {}", from),
            ));
        }
        if !to.is_finite() {
            return Err(ValidationError::non_finite("to"));
        }

        let to = to.max(from);
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            FALLBACK_STEP
        };

        Ok(Self { from, to, step })
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of points the sweep will produce. Always at least one.
    pub fn point_count(&self) -> usize {
        let steps = ((self.to - self.from) / self.step + INDEX_TOLERANCE).floor();
        (steps as usize).saturating_add(1)
    }

    /// Independent value of the `index`-th point.
    ///
    /// Computed as `from + index * step` rather than by repeated addition. When
    /// `to - from` is not a multiple of `step` the last value undershoots `to`.
    pub fn value_at(&self, index: usize) -> f64 {
        (self.from + index as f64 * self.step).min(self.to)
    }

    /// All independent values in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.point_count()).map(move |i| self.value_at(i))
    }
}
