//! Hyperparameter value type.

use serde::{Deserialize, Serialize};

/// A single hyperparameter value as it appears in a parameter grid.
///
/// `None` maps to an estimator's "unlimited" setting (e.g. unbounded tree
/// depth), mirroring the absent-value convention of the original grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Explicit absence of a bound
    None,
    /// Integer-valued parameter
    Int(i64),
    /// Float-valued parameter
    Float(f64),
    /// Text-valued parameter (e.g. a kernel name)
    Text(String),
}

impl ParamValue {
    /// Interpret as a non-negative count, if possible.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            ParamValue::Int(v) if *v >= 0 => Some(*v as usize),
            _ => None,
        }
    }

    /// Interpret as a float; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Interpret as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is the explicit absent value.
    pub fn is_none(&self) -> bool {
        matches!(self, ParamValue::None)
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::None => write!(f, "None"),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_usize() {
        assert_eq!(ParamValue::Int(5).as_usize(), Some(5));
        assert_eq!(ParamValue::Int(-1).as_usize(), None);
        assert_eq!(ParamValue::Float(5.0).as_usize(), None);
        assert_eq!(ParamValue::None.as_usize(), None);
    }

    #[test]
    fn test_as_f64_widens_ints() {
        assert_eq!(ParamValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(ParamValue::Float(0.25).as_f64(), Some(0.25));
        assert_eq!(ParamValue::Text("rbf".into()).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::None.to_string(), "None");
        assert_eq!(ParamValue::Int(10).to_string(), "10");
        assert_eq!(ParamValue::Float(0.1).to_string(), "0.1");
        assert_eq!(ParamValue::Text("poly".into()).to_string(), "poly");
    }

    #[test]
    fn test_is_none() {
        assert!(ParamValue::None.is_none());
        assert!(!ParamValue::Int(0).is_none());
    }
}
