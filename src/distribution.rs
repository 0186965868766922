//! Hyperparameter domain types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::param::ParamValue;

/// Domain for floating-point hyperparameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloatDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<f64>,
}

/// Domain for integer hyperparameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntDistribution {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<i64>,
}

/// Domain for categorical hyperparameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoricalDistribution {
    /// Number of choices available.
    pub n_choices: usize,
}

/// Enum wrapping all hyperparameter domain types.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distribution {
    /// A floating-point domain.
    Float(FloatDistribution),
    /// An integer domain.
    Int(IntDistribution),
    /// A categorical domain.
    Categorical(CategoricalDistribution),
}

impl Distribution {
    /// Returns `true` if `value` is of the right kind and inside the bounds.
    ///
    /// Step grids are not checked; a float default between grid points is accepted.
    #[must_use]
    pub fn contains(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (Distribution::Float(d), ParamValue::Float(v)) => (d.low..=d.high).contains(v),
            (Distribution::Int(d), ParamValue::Int(v)) => (d.low..=d.high).contains(v),
            (Distribution::Categorical(d), ParamValue::Categorical(i)) => *i < d.n_choices,
            _ => false,
        }
    }
}
