//! Parameter grids and their cross-product enumeration.

use regressor_spi::{ParamValue, Result, TunableRegressor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One concrete parameter configuration drawn from a grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParamSet {
    /// The empty (all defaults) configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert a single parameter value.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Apply every parameter to an estimator.
    pub fn apply_to(&self, estimator: &mut dyn TunableRegressor) -> Result<()> {
        for (name, value) in &self.values {
            estimator.set_param(name, value)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ParamSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// A parameter grid: candidate values per parameter name
///
/// Enumeration yields the full cross-product in lexicographic parameter
/// order. The empty grid yields exactly one empty configuration, so a
/// search over it still evaluates the estimator defaults once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamGrid {
    entries: BTreeMap<String, Vec<ParamValue>>,
}

impl ParamGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add candidate values for a parameter.
    pub fn with(mut self, name: impl Into<String>, values: Vec<ParamValue>) -> Self {
        self.entries.insert(name.into(), values);
        self
    }

    /// Number of configurations in the cross-product.
    pub fn combinations(&self) -> usize {
        self.entries.values().map(|v| v.len()).product()
    }

    /// Enumerate every configuration in the cross-product.
    pub fn iter_sets(&self) -> Vec<ParamSet> {
        let names: Vec<&String> = self.entries.keys().collect();
        let candidates: Vec<&Vec<ParamValue>> = self.entries.values().collect();
        if candidates.iter().any(|v| v.is_empty()) {
            return Vec::new();
        }

        let total = self.combinations();
        let mut sets = Vec::with_capacity(total);
        let mut odometer = vec![0usize; names.len()];
        for _ in 0..total {
            let mut set = ParamSet::empty();
            for (i, name) in names.iter().enumerate() {
                set.insert(name.as_str(), candidates[i][odometer[i]].clone());
            }
            sets.push(set);
            // Advance the rightmost wheel.
            for i in (0..odometer.len()).rev() {
                odometer[i] += 1;
                if odometer[i] < candidates[i].len() {
                    break;
                }
                odometer[i] = 0;
            }
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_yields_one_empty_set() {
        let sets = ParamGrid::new().iter_sets();
        assert_eq!(sets.len(), 1);
        assert!(sets[0].is_empty());
    }

    #[test]
    fn test_cross_product_size() {
        let grid = ParamGrid::new()
            .with(
                "max_depth",
                vec![ParamValue::None, ParamValue::Int(1), ParamValue::Int(2)],
            )
            .with("n_estimators", vec![ParamValue::Int(10), ParamValue::Int(20)]);
        assert_eq!(grid.combinations(), 6);
        assert_eq!(grid.iter_sets().len(), 6);
    }

    #[test]
    fn test_cross_product_order() {
        let grid = ParamGrid::new()
            .with("a", vec![ParamValue::Int(1), ParamValue::Int(2)])
            .with("b", vec![ParamValue::Int(10), ParamValue::Int(20)]);
        let sets = grid.iter_sets();
        // "a" is the slow wheel, "b" the fast one.
        assert_eq!(sets[0].get("a"), Some(&ParamValue::Int(1)));
        assert_eq!(sets[0].get("b"), Some(&ParamValue::Int(10)));
        assert_eq!(sets[1].get("a"), Some(&ParamValue::Int(1)));
        assert_eq!(sets[1].get("b"), Some(&ParamValue::Int(20)));
        assert_eq!(sets[2].get("a"), Some(&ParamValue::Int(2)));
    }

    #[test]
    fn test_parameter_with_no_candidates() {
        let grid = ParamGrid::new().with("max_depth", vec![]);
        assert!(grid.iter_sets().is_empty());
    }

    #[test]
    fn test_display() {
        let mut set = ParamSet::empty();
        set.insert("max_depth", ParamValue::None);
        set.insert("n_estimators", ParamValue::Int(10));
        assert_eq!(set.to_string(), "{max_depth: None, n_estimators: 10}");
    }
}
