//! Trials handed to objectives and the records kept once they finish.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::param::ParamValue;
use crate::space::Values;
use crate::types::TrialState;

/// A trial represents a single evaluation of the objective function.
///
/// It carries the configuration the oracle proposed. Read values with the
/// typed getters:
///
/// ```
/// use greedy_tuner::{ParamValue, Trial, Values};
///
/// let mut values = Values::new();
/// values.insert("model/units".into(), ParamValue::Int(64));
/// values.insert("model/dropout".into(), ParamValue::Categorical(1));
/// let trial = Trial::new(0, values);
///
/// assert_eq!(trial.int("model/units").unwrap(), 64);
/// assert!(trial.boolean("model/dropout").unwrap());
/// assert!(trial.float("model/units").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Trial {
    id: u64,
    state: TrialState,
    values: Values,
}

impl Trial {
    /// Creates a running trial with the given configuration.
    #[must_use]
    pub fn new(id: u64, values: Values) -> Self {
        Self {
            id,
            state: TrialState::Running,
            values,
        }
    }

    /// Returns the unique ID of this trial.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the current state of this trial.
    #[must_use]
    pub fn state(&self) -> TrialState {
        self.state
    }

    /// Returns the full configuration.
    #[must_use]
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Returns the raw value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if the configuration has no such entry.
    pub fn get(&self, name: &str) -> Result<&ParamValue> {
        self.values
            .get(name)
            .ok_or_else(|| Error::UnknownName(name.to_owned()))
    }

    /// Returns the float value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] or [`Error::TypeMismatch`].
    pub fn float(&self, name: &str) -> Result<f64> {
        match self.get(name)? {
            ParamValue::Float(v) => Ok(*v),
            _ => Err(mismatch(name, "float")),
        }
    }

    /// Returns the integer value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] or [`Error::TypeMismatch`].
    pub fn int(&self, name: &str) -> Result<i64> {
        match self.get(name)? {
            ParamValue::Int(v) => Ok(*v),
            _ => Err(mismatch(name, "int")),
        }
    }

    /// Returns the categorical index for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] or [`Error::TypeMismatch`].
    pub fn categorical(&self, name: &str) -> Result<usize> {
        match self.get(name)? {
            ParamValue::Categorical(i) => Ok(*i),
            _ => Err(mismatch(name, "categorical")),
        }
    }

    /// Returns the boolean value for `name` (categorical index `!= 0`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] or [`Error::TypeMismatch`].
    pub fn boolean(&self, name: &str) -> Result<bool> {
        self.categorical(name).map(|i| i != 0)
    }

    pub(crate) fn set_failed(&mut self) {
        self.state = TrialState::Failed;
    }

    pub(crate) fn into_completed(self, value: f64) -> CompletedTrial {
        CompletedTrial {
            id: self.id,
            values: self.values,
            value,
            state: TrialState::Complete,
        }
    }
}

fn mismatch(name: &str, expected: &'static str) -> Error {
    Error::TypeMismatch {
        name: name.to_owned(),
        expected,
    }
}

/// A finished trial: its configuration and objective value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompletedTrial {
    /// The unique identifier for this trial.
    pub id: u64,
    /// The configuration that was evaluated.
    pub values: Values,
    /// The objective value.
    pub value: f64,
    /// The state of the trial.
    pub state: TrialState,
}

impl CompletedTrial {
    /// Creates a completed trial.
    #[must_use]
    pub fn new(id: u64, values: Values, value: f64) -> Self {
        Self {
            id,
            values,
            value,
            state: TrialState::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters_report_missing_and_mismatched() {
        let mut values = Values::new();
        values.insert("lr".into(), ParamValue::Float(0.1));
        let trial = Trial::new(3, values);

        assert_eq!(trial.id(), 3);
        assert_eq!(trial.state(), TrialState::Running);
        assert_eq!(trial.float("lr").unwrap(), 0.1);
        assert!(matches!(trial.int("lr"), Err(Error::TypeMismatch { .. })));
        assert!(matches!(trial.float("units"), Err(Error::UnknownName(_))));
    }

    #[test]
    fn into_completed_keeps_values() {
        let mut values = Values::new();
        values.insert("n".into(), ParamValue::Int(2));
        let completed = Trial::new(1, values.clone()).into_completed(0.25);
        assert_eq!(completed, CompletedTrial::new(1, values, 0.25));
    }
}
