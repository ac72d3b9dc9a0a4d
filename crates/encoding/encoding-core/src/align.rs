//! Record alignment.

use encoding_spi::{AlignedData, EncodingError, Result};

/// Pad raw records with trailing gaps into an [`AlignedData`] batch
///
/// All three vectors must be index-aligned; shorter sequences gain
/// trailing `-` characters until every sequence matches the longest.
pub fn align_records(
    ids: Vec<f64>,
    sequences: Vec<String>,
    targets: Vec<f64>,
) -> Result<AlignedData> {
    if sequences.is_empty() {
        return Err(EncodingError::EmptyInput);
    }
    if ids.len() != sequences.len() || targets.len() != sequences.len() {
        return Err(EncodingError::LengthMismatch {
            expected: sequences.len(),
            actual: ids.len().min(targets.len()),
        });
    }
    let width = sequences
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    let sequences = sequences
        .into_iter()
        .map(|mut seq| {
            let len = seq.chars().count();
            seq.extend(std::iter::repeat('-').take(width - len));
            seq
        })
        .collect();
    Ok(AlignedData {
        ids,
        sequences,
        targets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_longest() {
        let data = align_records(
            vec![0.0, 1.0],
            vec!["ACDE".to_string(), "AC".to_string()],
            vec![1.0, 2.0],
        )
        .unwrap();
        assert_eq!(data.sequences[1], "AC--");
        assert_eq!(data.width(), 4);
    }

    #[test]
    fn test_misaligned_vectors_rejected() {
        let err = align_records(vec![0.0], vec!["A".to_string(), "C".to_string()], vec![1.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, EncodingError::LengthMismatch { .. }));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            align_records(vec![], vec![], vec![]).unwrap_err(),
            EncodingError::EmptyInput
        );
    }
}
