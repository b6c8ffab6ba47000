//! Neutrosophic triplet - a (truth, indeterminacy, falsity) judgment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on `T + I + F`.
pub const MAX_COMPONENT_SUM: f64 = 3.0;

/// A triangular neutrosophic judgment.
///
/// Each component lies in `[0, 1]`. Construction clamps the components and
/// rescales them proportionally if their sum exceeds [`MAX_COMPONENT_SUM`],
/// so every `Tnn` in circulation satisfies the invariant, including ones
/// that arrive through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTnn")]
pub struct Tnn {
    truth: f64,
    indeterminacy: f64,
    falsity: f64,
}

#[derive(Deserialize)]
struct RawTnn {
    truth: f64,
    indeterminacy: f64,
    falsity: f64,
}

impl From<RawTnn> for Tnn {
    fn from(raw: RawTnn) -> Self {
        Tnn::new(raw.truth, raw.indeterminacy, raw.falsity)
    }
}

impl Tnn {
    /// Creates a triplet, clamping each component to `[0, 1]`.
    ///
    /// NaN components are treated as 0.
    pub fn new(truth: f64, indeterminacy: f64, falsity: f64) -> Self {
        let mut truth = clamp_unit(truth);
        let mut indeterminacy = clamp_unit(indeterminacy);
        let mut falsity = clamp_unit(falsity);

        let sum = truth + indeterminacy + falsity;
        if sum > MAX_COMPONENT_SUM {
            let factor = MAX_COMPONENT_SUM / sum;
            truth *= factor;
            indeterminacy *= factor;
            falsity *= factor;
        }

        Self {
            truth,
            indeterminacy,
            falsity,
        }
    }

    /// Perfectly certain equality, used on the diagonal of a judgment matrix.
    pub fn equal() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Converts a crisp value into a triplet.
    ///
    /// `v >= 1` is full truth, `v <= 0` is full falsity, anything in between
    /// becomes `(v, 0.1, 1 - v)`.
    pub fn from_value(value: f64) -> Self {
        if value >= 1.0 {
            Self::new(1.0, 0.0, 0.0)
        } else if value <= 0.0 || value.is_nan() {
            Self::new(0.0, 0.0, 1.0)
        } else {
            Self::new(value, 0.1, 1.0 - value)
        }
    }

    pub fn truth(&self) -> f64 {
        self.truth
    }

    pub fn indeterminacy(&self) -> f64 {
        self.indeterminacy
    }

    pub fn falsity(&self) -> f64 {
        self.falsity
    }

    /// Score function `S = T - F`, in `[-1, 1]`.
    pub fn score(&self) -> f64 {
        self.truth - self.falsity
    }

    /// The reciprocal judgment: truth and falsity swap, indeterminacy stays.
    pub fn reciprocal(&self) -> Self {
        Self::new(self.falsity, self.indeterminacy, self.truth)
    }

    /// Neutrosophic product: `(T·T', I+I'−I·I', F+F'−F·F')`.
    pub fn multiply(&self, other: &Tnn) -> Self {
        Self::new(
            self.truth * other.truth,
            probabilistic_sum(self.indeterminacy, other.indeterminacy),
            probabilistic_sum(self.falsity, other.falsity),
        )
    }

    /// Neutrosophic sum: `(T+T'−T·T', I·I', F·F')`.
    pub fn add(&self, other: &Tnn) -> Self {
        Self::new(
            probabilistic_sum(self.truth, other.truth),
            self.indeterminacy * other.indeterminacy,
            self.falsity * other.falsity,
        )
    }
}

impl Default for Tnn {
    fn default() -> Self {
        Self::equal()
    }
}

impl fmt::Display for Tnn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3})",
            self.truth, self.indeterminacy, self.falsity
        )
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn probabilistic_sum(a: f64, b: f64) -> f64 {
    a + b - a * b
}
