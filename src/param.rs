//! Hyperparameter value storage types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a sampled hyperparameter value.
///
/// For categorical hyperparameters, the `Categorical` variant stores
/// the index of the chosen option.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamValue {
    /// A floating-point value.
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A categorical value, stored as an index into the choices.
    Categorical(usize),
}

impl ParamValue {
    /// Writes the canonical form used for configuration hashing.
    ///
    /// Floats are written by bit pattern so `0.1` always hashes the same way
    /// and `-0.0` differs from `0.0`.
    pub(crate) fn write_canonical(&self, out: &mut String) {
        match self {
            ParamValue::Float(v) => out.push_str(&format!("f:{:016x}", v.to_bits())),
            ParamValue::Int(v) => out.push_str(&format!("i:{v}")),
            ParamValue::Categorical(i) => out.push_str(&format!("c:{i}")),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Categorical(i) => write!(f, "#{i}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Categorical(usize::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_tags_each_kind() {
        let mut out = String::new();
        ParamValue::Int(-3).write_canonical(&mut out);
        ParamValue::Categorical(2).write_canonical(&mut out);
        ParamValue::Float(1.0).write_canonical(&mut out);
        assert_eq!(out, "i:-3c:2f:3ff0000000000000");
    }
}
