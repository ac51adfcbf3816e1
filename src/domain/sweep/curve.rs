//! Sweep output: ordered points and a dashboard summary.

use serde::{Deserialize, Serialize};

use crate::domain::risk::RiskStatus;

/// One evaluated point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub independent_value: f64,
    pub score: f64,
}

impl SweepPoint {
    pub fn status(&self) -> RiskStatus {
        RiskStatus::from_score(self.score)
    }
}

/// Points ordered by strictly increasing `independent_value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SweepCurve(Vec<SweepPoint>);

impl SweepCurve {
    pub(crate) fn from_points(points: Vec<SweepPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First independent value whose band is at least `status`.
    pub fn first_reaching(&self, status: RiskStatus) -> Option<f64> {
        self.0
            .iter()
            .find(|p| p.status() >= status)
            .map(|p| p.independent_value)
    }

    /// Highest-scoring point; ties resolve to the earliest.
    pub fn peak(&self) -> Option<SweepPoint> {
        self.0.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.score >= p.score => Some(b),
            _ => Some(p),
        })
    }

    pub fn summary(&self) -> Option<CurveSummary> {
        let peak = self.peak()?;
        let min_score = self
            .0
            .iter()
            .map(|p| p.score)
            .fold(f64::INFINITY, f64::min);

        Some(CurveSummary {
            peak_score: peak.score,
            peak_at: peak.independent_value,
            peak_status: peak.status(),
            min_score,
            first_amber_at: self.first_reaching(RiskStatus::Amber),
            first_red_at: self.first_reaching(RiskStatus::Red),
        })
    }
}

/// Headline numbers for a curve, shown next to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSummary {
    pub peak_score: f64,
    pub peak_at: f64,
    pub peak_status: RiskStatus,
    pub min_score: f64,
    pub first_amber_at: Option<f64>,
    pub first_red_at: Option<f64>,
}
