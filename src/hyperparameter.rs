//! A single named hyperparameter: domain, default value, and seeded sampler.
//!
//! Names are qualified paths whose `/`-separated segments encode where the
//! hyperparameter lives, e.g. `model/block_0/units`. The greedy oracle groups
//! hyperparameters by these prefixes.
//!
//! # Example
//!
//! ```
//! use greedy_tuner::Hyperparameter;
//!
//! let lr = Hyperparameter::float("optimizer/learning_rate", 1e-5, 1e-1)
//!     .log_scale()
//!     .default_value(1e-3);
//! let units = Hyperparameter::int("model/dense/units", 32, 512).step(32);
//! let dropout = Hyperparameter::boolean("model/dense/use_dropout");
//!
//! assert_eq!(lr.random_sample(7).unwrap(), lr.random_sample(7).unwrap());
//! # let _ = (units, dropout);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    CategoricalDistribution, Distribution, FloatDistribution, IntDistribution,
};
use crate::error::{Error, Result};
use crate::param::ParamValue;
use crate::rng_util;
use crate::space::Values;

/// Delimiter between the segments of a qualified name.
pub const NAME_DELIMITER: char = '/';

/// Checks that `name` is non-empty and has no empty segments.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] for names like `""`, `"a//b"` or `"a/"`.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.split(NAME_DELIMITER).any(str::is_empty) {
        return Err(Error::InvalidName(name.to_owned()));
    }
    Ok(())
}

/// Activation predicate: active only while `parent` holds one of `values`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Condition {
    /// Qualified name of the hyperparameter this one depends on.
    pub parent: String,
    /// Parent values under which this hyperparameter is active.
    pub values: Vec<ParamValue>,
}

/// A named hyperparameter with its domain and default value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hyperparameter {
    name: String,
    distribution: Distribution,
    default: Option<ParamValue>,
    condition: Option<Condition>,
}

impl Hyperparameter {
    fn with_distribution(name: impl Into<String>, distribution: Distribution) -> Self {
        Self {
            name: name.into(),
            distribution,
            default: None,
            condition: None,
        }
    }

    /// Creates a float hyperparameter on `[low, high]`.
    #[must_use]
    pub fn float(name: impl Into<String>, low: f64, high: f64) -> Self {
        Self::with_distribution(
            name,
            Distribution::Float(FloatDistribution {
                low,
                high,
                log_scale: false,
                step: None,
            }),
        )
    }

    /// Creates an integer hyperparameter on `[low, high]`.
    #[must_use]
    pub fn int(name: impl Into<String>, low: i64, high: i64) -> Self {
        Self::with_distribution(
            name,
            Distribution::Int(IntDistribution {
                low,
                high,
                log_scale: false,
                step: None,
            }),
        )
    }

    /// Creates a categorical hyperparameter with `n_choices` options.
    #[must_use]
    pub fn choice(name: impl Into<String>, n_choices: usize) -> Self {
        Self::with_distribution(
            name,
            Distribution::Categorical(CategoricalDistribution { n_choices }),
        )
    }

    /// Creates a boolean hyperparameter (a two-option categorical, `false` first).
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::choice(name, 2)
    }

    /// Creates a hyperparameter with a single possible value.
    #[must_use]
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::choice(name, 1)
    }

    /// Enables log-scale sampling. Ignored for categorical domains.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        match &mut self.distribution {
            Distribution::Float(d) => d.log_scale = true,
            Distribution::Int(d) => d.log_scale = true,
            Distribution::Categorical(_) => {}
        }
        self
    }

    /// Sets a step size for discretized sampling. Ignored for categorical domains.
    ///
    /// The step is converted to the domain's type; an integer domain truncates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(mut self, step: impl Into<f64>) -> Self {
        let step = step.into();
        match &mut self.distribution {
            Distribution::Float(d) => d.step = Some(step),
            Distribution::Int(d) => d.step = Some(step as i64),
            Distribution::Categorical(_) => {}
        }
        self
    }

    /// Sets the default value used before any trial has completed.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<ParamValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Marks this hyperparameter as active only when `parent` takes one of `values`.
    #[must_use]
    pub fn active_when(mut self, parent: impl Into<String>, values: Vec<ParamValue>) -> Self {
        self.condition = Some(Condition {
            parent: parent.into(),
            values,
        });
        self
    }

    /// Returns the qualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name split into its path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split(NAME_DELIMITER)
    }

    /// Returns the domain.
    #[must_use]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Returns the activation condition, if any.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Returns the default value: the explicit default if set, otherwise the
    /// lower bound for numeric domains and the first option for categoricals.
    #[must_use]
    pub fn default(&self) -> ParamValue {
        if let Some(value) = &self.default {
            return value.clone();
        }
        match &self.distribution {
            Distribution::Float(d) => ParamValue::Float(d.low),
            Distribution::Int(d) => ParamValue::Int(d.low),
            Distribution::Categorical(_) => ParamValue::Categorical(0),
        }
    }

    /// Returns `true` if the activation condition holds for `values`.
    ///
    /// Hyperparameters without a condition are always active.
    #[must_use]
    pub fn is_active(&self, values: &Values) -> bool {
        self.condition.as_ref().is_none_or(|c| {
            values
                .get(&c.parent)
                .is_some_and(|v| c.values.contains(v))
        })
    }

    /// Validates the name, the domain and the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is malformed, the bounds are inverted or
    /// not finite, log scale is used with non-positive bounds, the step is not
    /// a positive finite number,
    /// there are no choices, or the default lies outside the domain.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        match &self.distribution {
            Distribution::Float(d) => {
                if !d.low.is_finite() || !d.high.is_finite() || d.low > d.high {
                    return Err(Error::InvalidBounds {
                        low: d.low,
                        high: d.high,
                    });
                }
                if d.log_scale && d.low <= 0.0 {
                    return Err(Error::InvalidLogBounds);
                }
                if let Some(step) = d.step
                    && (!step.is_finite() || step <= 0.0)
                {
                    return Err(Error::InvalidStep);
                }
            }
            Distribution::Int(d) => {
                if d.low > d.high {
                    return Err(Error::InvalidBounds {
                        low: d.low as f64,
                        high: d.high as f64,
                    });
                }
                if d.log_scale && d.low < 1 {
                    return Err(Error::InvalidLogBounds);
                }
                if let Some(step) = d.step
                    && step <= 0
                {
                    return Err(Error::InvalidStep);
                }
            }
            Distribution::Categorical(d) => {
                if d.n_choices == 0 {
                    return Err(Error::EmptyChoices);
                }
            }
        }
        if let Some(default) = &self.default
            && !self.distribution.contains(default)
        {
            return Err(Error::InvalidDefault(self.name.clone()));
        }
        Ok(())
    }

    /// Draws a value from the domain using a generator seeded with `seed`.
    ///
    /// The same seed always yields the same value.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error if the domain is invalid.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn random_sample(&self, seed: u64) -> Result<ParamValue> {
        self.validate()?;
        let mut rng = fastrand::Rng::with_seed(seed);

        let value = match &self.distribution {
            Distribution::Float(d) => {
                let value = if d.log_scale {
                    let log_value = rng_util::f64_range(&mut rng, d.low.ln(), d.high.ln());
                    log_value.exp().clamp(d.low, d.high)
                } else if let Some(step) = d.step {
                    let n_steps = ((d.high - d.low) / step).floor() as i64;
                    let k = rng.i64(0..=n_steps);
                    (d.low + (k as f64) * step).clamp(d.low, d.high)
                } else {
                    rng_util::f64_range(&mut rng, d.low, d.high)
                };
                ParamValue::Float(value)
            }
            Distribution::Int(d) => {
                let value = if d.log_scale {
                    let log_low = (d.low as f64).ln();
                    let log_high = (d.high as f64).ln();
                    let log_value = rng_util::f64_range(&mut rng, log_low, log_high);
                    // Rounding can step outside the bounds.
                    (log_value.exp().round() as i64).clamp(d.low, d.high)
                } else if let Some(step) = d.step {
                    let step = step.unsigned_abs();
                    let k = rng.u64(0..=d.high.abs_diff(d.low) / step);
                    // `k * step` never exceeds `high - low`.
                    d.low.wrapping_add_unsigned(k * step)
                } else {
                    rng.i64(d.low..=d.high)
                };
                ParamValue::Int(value)
            }
            Distribution::Categorical(d) => ParamValue::Categorical(rng.usize(0..d.n_choices)),
        };
        Ok(value)
    }
}
