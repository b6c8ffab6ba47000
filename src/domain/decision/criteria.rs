//! Freight decision criteria, default judgments, and profile scaling.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DecisionError;
use crate::domain::analysis::{Alternative, Criterion, CriterionDirection, PairwiseJudgments, Tnn};
use crate::domain::freight::ForwarderProfile;

/// The four criteria every freight decision is made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreightCriterion {
    Cost,
    Time,
    Reliability,
    Risk,
}

impl FreightCriterion {
    /// All criteria in matrix order.
    pub const ALL: [FreightCriterion; 4] = [
        FreightCriterion::Cost,
        FreightCriterion::Time,
        FreightCriterion::Reliability,
        FreightCriterion::Risk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FreightCriterion::Cost => "cost",
            FreightCriterion::Time => "time",
            FreightCriterion::Reliability => "reliability",
            FreightCriterion::Risk => "risk",
        }
    }

    /// Only reliability is maximized.
    pub fn direction(&self) -> CriterionDirection {
        match self {
            FreightCriterion::Reliability => CriterionDirection::Beneficial,
            _ => CriterionDirection::Cost,
        }
    }

    pub fn names() -> [&'static str; 4] {
        Self::ALL.map(|c| c.name())
    }
}

impl fmt::Display for FreightCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FreightCriterion {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DecisionError::UnknownCriterion(s.to_string()))
    }
}

/// Judgments used when the caller supplies none.
///
/// Cost moderately over time, slightly under reliability, moderately over
/// risk; time slightly under reliability and roughly equal to risk;
/// reliability strongly over risk.
pub static DEFAULT_JUDGMENTS: Lazy<PairwiseJudgments> = Lazy::new(|| {
    PairwiseJudgments::new()
        .with("cost", "time", Tnn::new(0.7, 0.2, 0.1))
        .with("cost", "reliability", Tnn::new(0.4, 0.3, 0.3))
        .with("cost", "risk", Tnn::new(0.6, 0.2, 0.2))
        .with("time", "reliability", Tnn::new(0.3, 0.3, 0.4))
        .with("time", "risk", Tnn::new(0.5, 0.3, 0.2))
        .with("reliability", "risk", Tnn::new(0.8, 0.1, 0.1))
});

/// Rejects judgments that mention a criterion outside [`FreightCriterion`].
pub fn validate_judgments(judgments: &PairwiseJudgments) -> Result<(), DecisionError> {
    for name in judgments.criterion_names() {
        name.parse::<FreightCriterion>()?;
    }
    Ok(())
}

/// Weight per freight criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriteriaWeights {
    pub cost: f64,
    pub time: f64,
    pub reliability: f64,
    pub risk: f64,
}

impl CriteriaWeights {
    /// Reads weights in [`FreightCriterion::ALL`] order. Missing entries are 0.
    pub fn from_ordered(weights: &[f64]) -> Self {
        let at = |i: usize| weights.get(i).copied().unwrap_or(0.0);
        Self {
            cost: at(0),
            time: at(1),
            reliability: at(2),
            risk: at(3),
        }
    }

    pub fn get(&self, criterion: FreightCriterion) -> f64 {
        match criterion {
            FreightCriterion::Cost => self.cost,
            FreightCriterion::Time => self.time,
            FreightCriterion::Reliability => self.reliability,
            FreightCriterion::Risk => self.risk,
        }
    }

    pub fn sum(&self) -> f64 {
        self.cost + self.time + self.reliability + self.risk
    }

    /// Rescales to sum to 1. A zero or non-finite total yields equal weights.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total > 0.0 && total.is_finite() {
            Self {
                cost: self.cost / total,
                time: self.time / total,
                reliability: self.reliability / total,
                risk: self.risk / total,
            }
        } else {
            Self::from_ordered(&[0.25; 4])
        }
    }

    /// TOPSIS criteria carrying these weights and the freight directions.
    pub fn to_criteria(&self) -> Vec<Criterion> {
        FreightCriterion::ALL
            .iter()
            .map(|c| Criterion::new(c.name(), self.get(*c), c.direction()))
            .collect()
    }
}

/// Maps a profile's raw metrics onto comparable 0-100 ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileScaling {
    pub cost_scale: f64,
    pub transit_scale: f64,
    pub cap: f64,
}

impl Default for ProfileScaling {
    fn default() -> Self {
        Self {
            cost_scale: 10.0,
            transit_scale: 5.0,
            cap: 100.0,
        }
    }
}

impl ProfileScaling {
    /// Builds the TOPSIS alternative for `profile`.
    ///
    /// Cost and transit are scaled and capped; reliability and risk are
    /// already on a 0-100 scale.
    pub fn to_alternative(&self, profile: &ForwarderProfile) -> Alternative {
        Alternative::new(profile.name.clone(), profile.name.clone())
            .with_value(
                FreightCriterion::Cost.name(),
                (profile.avg_cost_per_kg * self.cost_scale).min(self.cap),
            )
            .with_value(
                FreightCriterion::Time.name(),
                (profile.avg_transit_days * self.transit_scale).min(self.cap),
            )
            .with_value(FreightCriterion::Reliability.name(), profile.reliability_score)
            .with_value(FreightCriterion::Risk.name(), profile.risk_level)
    }
}
