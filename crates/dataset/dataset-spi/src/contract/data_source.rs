//! Data source contract.

use crate::error::Result;
use crate::model::TraitTable;

/// A provider of sequence-trait records
pub trait DataSource {
    /// Load every record the source holds.
    fn load(&self) -> Result<TraitTable>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::model::TraitRecord;

    /// Mock source serving a fixed pair of records.
    struct MockSource {
        empty: bool,
    }

    impl DataSource for MockSource {
        fn load(&self) -> Result<TraitTable> {
            if self.empty {
                return Err(DataError::NoData);
            }
            Ok(TraitTable {
                records: vec![
                    TraitRecord {
                        id: 0.0,
                        sequence: "ACDE".to_string(),
                        target: 2.0,
                    },
                    TraitRecord {
                        id: 1.0,
                        sequence: "ACDF".to_string(),
                        target: 4.0,
                    },
                ],
            })
        }
    }

    #[test]
    fn test_mock_source_loads() {
        let table = MockSource { empty: false }.load().unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_mock_source_empty() {
        assert_eq!(
            MockSource { empty: true }.load().unwrap_err(),
            DataError::NoData
        );
    }
}
