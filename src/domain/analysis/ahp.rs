//! Neutrosophic AHP - criterion weights from pairwise judgments.
//!
//! Judgments are neutrosophic triplets; each is collapsed to a crisp ratio
//! `max(1/9, score + 1)` and the principal eigenvector of the crisp matrix is
//! found by power iteration. Saaty's consistency ratio is reported alongside
//! the weights but never blocks a result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::Tnn;

/// Saaty's minimum reciprocal scale value. Keeps every crisp entry positive.
pub const MIN_CRISP_VALUE: f64 = 1.0 / 9.0;

/// Power iteration stops once the L1 change between iterations drops below this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Default consistency ratio threshold (Saaty).
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Default bound on power iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Saaty's random consistency index, indexed by matrix order.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Returns the random index for a matrix of order `n` (1.49 for n >= 10).
pub fn random_index(n: usize) -> f64 {
    RANDOM_INDEX.get(n).copied().unwrap_or(RANDOM_INDEX[RANDOM_INDEX.len() - 1])
}

/// One judgment: how `left` compares with `right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub left: String,
    pub right: String,
    pub judgment: Tnn,
}

/// Caller-supplied judgments keyed by criterion pair.
///
/// Serializes as a list of [`PairwiseJudgment`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PairwiseJudgment>", into = "Vec<PairwiseJudgment>")]
pub struct PairwiseJudgments {
    entries: BTreeMap<(String, String), Tnn>,
}

impl PairwiseJudgments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, left: impl Into<String>, right: impl Into<String>, judgment: Tnn) -> Self {
        self.insert(left, right, judgment);
        self
    }

    /// Records how `left` compares with `right`, replacing any earlier entry.
    pub fn insert(&mut self, left: impl Into<String>, right: impl Into<String>, judgment: Tnn) {
        self.entries.insert((left.into(), right.into()), judgment);
    }

    /// Returns the judgment exactly as supplied for `(left, right)`.
    pub fn get(&self, left: &str, right: &str) -> Option<Tnn> {
        self.entries
            .get(&(left.to_string(), right.to_string()))
            .copied()
    }

    /// Returns the judgment for `(left, right)`, falling back to the
    /// reciprocal of `(right, left)` when only the reverse was supplied.
    pub fn resolve(&self, left: &str, right: &str) -> Option<Tnn> {
        self.get(left, right)
            .or_else(|| self.get(right, left).map(|reverse| reverse.reciprocal()))
    }

    /// Iterates over every criterion name mentioned in a judgment.
    pub fn criterion_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .flat_map(|(left, right)| [left.as_str(), right.as_str()])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<PairwiseJudgment>> for PairwiseJudgments {
    fn from(list: Vec<PairwiseJudgment>) -> Self {
        list.into_iter().fold(Self::new(), |acc, entry| {
            acc.with(entry.left, entry.right, entry.judgment)
        })
    }
}

impl From<PairwiseJudgments> for Vec<PairwiseJudgment> {
    fn from(judgments: PairwiseJudgments) -> Self {
        judgments
            .entries
            .into_iter()
            .map(|((left, right), judgment)| PairwiseJudgment {
                left,
                right,
                judgment,
            })
            .collect()
    }
}

/// Reciprocal n×n judgment matrix.
///
/// The diagonal is always [`Tnn::equal`] and entry `(j, i)` is always the
/// reciprocal of `(i, j)`. There is no way to mutate a matrix after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    entries: Vec<Vec<Tnn>>,
}

impl PairwiseMatrix {
    /// Builds a matrix of order `n` from the upper-triangle judgments
    /// produced by `judge(i, j)` for `i < j`.
    pub fn reciprocal<F>(n: usize, mut judge: F) -> Self
    where
        F: FnMut(usize, usize) -> Tnn,
    {
        let mut entries = vec![vec![Tnn::equal(); n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let judgment = judge(i, j);
                entries[i][j] = judgment;
                entries[j][i] = judgment.reciprocal();
            }
        }
        Self { entries }
    }

    /// Builds the matrix for `criteria` (in order) from keyed judgments.
    ///
    /// A pair with no judgment in either direction defaults to
    /// [`Tnn::equal`].
    pub fn from_judgments<S: AsRef<str>>(criteria: &[S], judgments: &PairwiseJudgments) -> Self {
        Self::reciprocal(criteria.len(), |i, j| {
            judgments
                .resolve(criteria[i].as_ref(), criteria[j].as_ref())
                .unwrap_or_else(Tnn::equal)
        })
    }

    /// Matrix order.
    pub fn order(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tnn> {
        self.entries.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Crisp positive matrix used by the eigenvector computation.
    pub fn crisp(&self) -> Vec<Vec<f64>> {
        self.entries
            .iter()
            .map(|row| row.iter().map(crisp_value).collect())
            .collect()
    }
}

/// Collapses a judgment to a strictly positive crisp ratio.
pub fn crisp_value(tnn: &Tnn) -> f64 {
    (tnn.score() + 1.0).max(MIN_CRISP_VALUE)
}

/// Tuning for the weight solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AhpOptions {
    pub consistency_threshold: f64,
    pub max_iterations: usize,
}

impl Default for AhpOptions {
    fn default() -> Self {
        Self {
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Weights plus consistency diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    /// Normalized weights, one per matrix row, summing to 1.
    pub weights: Vec<f64>,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    /// Power iterations actually performed.
    pub iterations: usize,
}

/// Neutrosophic AHP weight solver.
///
/// Stateless apart from its options; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutrosophicAhp {
    options: AhpOptions,
}

impl NeutrosophicAhp {
    pub fn new(options: AhpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AhpOptions {
        &self.options
    }

    /// Derives criterion weights from a judgment matrix.
    ///
    /// Never fails. Matrices of order <= 2 are trivially consistent
    /// (CR = 0). An empty matrix yields no weights.
    pub fn calculate_weights(&self, matrix: &PairwiseMatrix) -> AhpResult {
        let n = matrix.order();
        if n == 0 {
            return AhpResult {
                weights: Vec::new(),
                consistency_ratio: 0.0,
                is_consistent: true,
                lambda_max: 0.0,
                consistency_index: 0.0,
                random_index: 0.0,
                iterations: 0,
            };
        }

        let crisp = matrix.crisp();
        let (eigenvector, iterations) = self.principal_eigenvector(&crisp);
        let lambda_max = lambda_max(&crisp, &eigenvector);

        let consistency_index = if n > 1 {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        } else {
            0.0
        };
        let random_index = random_index(n);

        let (consistency_ratio, is_consistent) = if n <= 2 {
            (0.0, true)
        } else {
            let ratio = consistency_index / random_index;
            (ratio, ratio < self.options.consistency_threshold)
        };

        let weights = normalize(&eigenvector);

        debug!(
            order = n,
            iterations,
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
            is_consistent,
            "AHP weights computed"
        );

        AhpResult {
            weights,
            consistency_ratio,
            is_consistent,
            lambda_max,
            consistency_index,
            random_index,
            iterations,
        }
    }

    /// Power method starting from the all-ones vector.
    fn principal_eigenvector(&self, crisp: &[Vec<f64>]) -> (Vec<f64>, usize) {
        let mut weights = vec![1.0; crisp.len()];
        let mut iterations = 0;

        while iterations < self.options.max_iterations {
            iterations += 1;

            let next = normalize(&multiply(crisp, &weights));
            let change: f64 = next
                .iter()
                .zip(&weights)
                .map(|(new, old)| (new - old).abs())
                .sum();
            weights = next;

            if change < CONVERGENCE_TOLERANCE {
                break;
            }
        }

        (weights, iterations)
    }
}

fn multiply(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(vector).map(|(a, w)| a * w).sum())
        .collect()
}

fn lambda_max(matrix: &[Vec<f64>], weights: &[f64]) -> f64 {
    let product = multiply(matrix, weights);
    let total: f64 = product.iter().zip(weights).map(|(aw, w)| aw / w).sum();
    total / weights.len() as f64
}

fn normalize(values: &[f64]) -> Vec<f64> {
    let sum: f64 = values.iter().sum();
    values.iter().map(|v| v / sum).collect()
}
