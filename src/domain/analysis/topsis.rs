//! TOPSIS ranking.
//!
//! Ranks alternatives by relative closeness to the ideal solution:
//! vector-normalize each criterion column, apply weights, measure Euclidean
//! distance to the ideal and anti-ideal points, and order by
//! `CC = d⁻ / (d⁺ + d⁻)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::AnalysisError;

/// Whether larger values of a criterion are better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionDirection {
    /// Larger is better.
    Beneficial,
    /// Smaller is better.
    Cost,
}

impl CriterionDirection {
    pub fn label(&self) -> &'static str {
        match self {
            CriterionDirection::Beneficial => "maximize",
            CriterionDirection::Cost => "minimize",
        }
    }
}

/// A weighted ranking criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub direction: CriterionDirection,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64, direction: CriterionDirection) -> Self {
        Self {
            name: name.into(),
            weight,
            direction,
        }
    }

    pub fn beneficial(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, CriterionDirection::Beneficial)
    }

    pub fn cost(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, CriterionDirection::Cost)
    }
}

/// A candidate to be ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
    /// Raw value per criterion name.
    pub values: BTreeMap<String, f64>,
}

impl Alternative {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style value setter.
    pub fn with_value(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.values.insert(criterion.into(), value);
        self
    }
}

/// One ranked alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    pub alternative: Alternative,
    pub normalized_values: BTreeMap<String, f64>,
    pub weighted_values: BTreeMap<String, f64>,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
    pub closeness_coefficient: f64,
    /// 1-based rank, dense and unique.
    pub rank: usize,
}

/// TOPSIS ranker. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisRanker;

impl TopsisRanker {
    pub fn new() -> Self {
        Self
    }

    /// Ranks `alternatives` against `criteria`.
    ///
    /// Weights are used as given. Alternatives with equal closeness keep
    /// their input order.
    ///
    /// # Errors
    ///
    /// - `NoAlternatives` if `alternatives` is empty
    /// - `MissingValue` if an alternative lacks a value for any criterion
    pub fn rank(
        &self,
        alternatives: &[Alternative],
        criteria: &[Criterion],
    ) -> Result<Vec<TopsisResult>, AnalysisError> {
        if alternatives.is_empty() {
            return Err(AnalysisError::NoAlternatives);
        }

        let matrix = decision_matrix(alternatives, criteria)?;
        let normalized = normalize_columns(&matrix, criteria.len());
        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(criteria)
                    .map(|(value, criterion)| value * criterion.weight)
                    .collect()
            })
            .collect();

        let (ideal, anti_ideal) = reference_points(&weighted, criteria);

        let mut results: Vec<TopsisResult> = alternatives
            .iter()
            .zip(normalized.iter().zip(&weighted))
            .map(|(alternative, (norm_row, weighted_row))| {
                let distance_to_ideal = euclidean(weighted_row, &ideal);
                let distance_to_anti_ideal = euclidean(weighted_row, &anti_ideal);
                let total = distance_to_ideal + distance_to_anti_ideal;
                let closeness_coefficient = if total == 0.0 {
                    0.5
                } else {
                    distance_to_anti_ideal / total
                };

                TopsisResult {
                    alternative: alternative.clone(),
                    normalized_values: by_criterion(criteria, norm_row),
                    weighted_values: by_criterion(criteria, weighted_row),
                    distance_to_ideal,
                    distance_to_anti_ideal,
                    closeness_coefficient,
                    rank: 0,
                }
            })
            .collect();

        // sort_by is stable, so ties keep input order
        results.sort_by(|a, b| b.closeness_coefficient.total_cmp(&a.closeness_coefficient));
        for (index, result) in results.iter_mut().enumerate() {
            result.rank = index + 1;
        }

        debug!(
            alternatives = results.len(),
            criteria = criteria.len(),
            leader = %results[0].alternative.name,
            closeness = results[0].closeness_coefficient,
            "TOPSIS ranking computed"
        );

        Ok(results)
    }

    /// Renders a plain-text report of a ranking.
    pub fn report(&self, results: &[TopsisResult], criteria: &[Criterion]) -> String {
        let mut out = String::from("TOPSIS ANALYSIS\n\nCriteria:\n");
        for criterion in criteria {
            out.push_str(&format!(
                "  {}: {:.1}% ({})\n",
                criterion.name,
                criterion.weight * 100.0,
                criterion.direction.label()
            ));
        }
        out.push_str("\nRanking:\n");
        for result in results {
            out.push_str(&format!(
                "  {}. {} - closeness {:.2}% (d+ {:.4}, d- {:.4})\n",
                result.rank,
                result.alternative.name,
                result.closeness_coefficient * 100.0,
                result.distance_to_ideal,
                result.distance_to_anti_ideal
            ));
        }
        out
    }
}

fn decision_matrix(
    alternatives: &[Alternative],
    criteria: &[Criterion],
) -> Result<Vec<Vec<f64>>, AnalysisError> {
    alternatives
        .iter()
        .map(|alternative| {
            criteria
                .iter()
                .map(|criterion| {
                    alternative
                        .values
                        .get(&criterion.name)
                        .copied()
                        .ok_or_else(|| {
                            AnalysisError::missing_value(&alternative.name, &criterion.name)
                        })
                })
                .collect()
        })
        .collect()
}

/// Divides each column by its L2 norm. A zero column stays zero.
fn normalize_columns(matrix: &[Vec<f64>], columns: usize) -> Vec<Vec<f64>> {
    let norms: Vec<f64> = (0..columns)
        .map(|j| matrix.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt())
        .collect();

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(&norms)
                .map(|(value, norm)| if *norm == 0.0 { 0.0 } else { value / norm })
                .collect()
        })
        .collect()
}

/// Ideal and anti-ideal points per column, respecting direction.
fn reference_points(weighted: &[Vec<f64>], criteria: &[Criterion]) -> (Vec<f64>, Vec<f64>) {
    criteria
        .iter()
        .enumerate()
        .map(|(j, criterion)| {
            let column = weighted.iter().map(|row| row[j]);
            let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
            let min = column.fold(f64::INFINITY, f64::min);
            match criterion.direction {
                CriterionDirection::Beneficial => (max, min),
                CriterionDirection::Cost => (min, max),
            }
        })
        .unzip()
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn by_criterion(criteria: &[Criterion], values: &[f64]) -> BTreeMap<String, f64> {
    criteria
        .iter()
        .zip(values)
        .map(|(criterion, value)| (criterion.name.clone(), *value))
        .collect()
}
