//! The hyperparameter search space and value mappings.
//!
//! A [`SearchSpace`] is an ordered collection of [`Hyperparameter`]s with
//! unique qualified names. A configuration is a [`Values`] map from name to
//! [`ParamValue`]; [`hash_values`] gives it a content hash that does not
//! depend on how the map was built.
//!
//! ```
//! use greedy_tuner::{Hyperparameter, ParamValue, SearchSpace};
//!
//! let mut space = SearchSpace::new();
//! space.add(Hyperparameter::int("model/units", 8, 64)).unwrap();
//! space.add(Hyperparameter::boolean("model/dropout")).unwrap();
//!
//! let defaults = space.values();
//! assert_eq!(defaults["model/units"], ParamValue::Int(8));
//! ```

use std::collections::{BTreeMap, HashMap};

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::hyperparameter::Hyperparameter;
use crate::param::ParamValue;

/// A full configuration: qualified name to value, ordered by name.
pub type Values = BTreeMap<String, ParamValue>;

/// Computes the SHA-256 content hash of a configuration, as lowercase hex.
///
/// Two maps with the same entries always hash the same.
#[must_use]
pub fn hash_values(values: &Values) -> String {
    let mut canonical = String::new();
    for (name, value) in values {
        canonical.push_str(name);
        canonical.push('=');
        value.write_canonical(&mut canonical);
        canonical.push(';');
    }
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// An ordered, name-unique collection of hyperparameters.
#[derive(Clone, Debug, Default)]
pub struct SearchSpace {
    hyperparameters: Vec<Hyperparameter>,
    index: HashMap<String, usize>,
}

impl SearchSpace {
    /// Creates an empty search space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hyperparameter after validating it.
    ///
    /// Adding a name that is already present replaces the existing entry in
    /// place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns the [`Hyperparameter::validate`] error if the name or domain
    /// is invalid; the space is left unchanged.
    pub fn add(&mut self, hp: Hyperparameter) -> Result<()> {
        hp.validate()?;
        if let Some(&i) = self.index.get(hp.name()) {
            self.hyperparameters[i] = hp;
        } else {
            self.index
                .insert(hp.name().to_owned(), self.hyperparameters.len());
            self.hyperparameters.push(hp);
        }
        Ok(())
    }

    /// Builder-style [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn with(mut self, hp: Hyperparameter) -> Result<Self> {
        self.add(hp)?;
        Ok(self)
    }

    /// Looks up a hyperparameter by qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Hyperparameter> {
        self.index.get(name).map(|&i| &self.hyperparameters[i])
    }

    /// Iterates over hyperparameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Hyperparameter> {
        self.hyperparameters.iter()
    }

    /// Returns the number of hyperparameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hyperparameters.len()
    }

    /// Returns `true` if the space has no hyperparameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hyperparameters.is_empty()
    }

    /// Returns the reference configuration: every hyperparameter at its default.
    #[must_use]
    pub fn values(&self) -> Values {
        self.hyperparameters
            .iter()
            .map(|hp| (hp.name().to_owned(), hp.default()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SearchSpace {
    type Item = &'a Hyperparameter;
    type IntoIter = core::slice::Iter<'a, Hyperparameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.hyperparameters.iter()
    }
}
