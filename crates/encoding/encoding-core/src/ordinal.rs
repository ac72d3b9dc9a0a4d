//! Ordinal sequence encoding
//!
//! Encodes each residue as its 1-based position in the protein alphabet.
//! 0 is reserved for padding, and the `-` alignment gap also encodes to 0.

use encoding_api::Alphabet;
use encoding_spi::{EncodingError, Result};

fn encode_residue(residue: char, position: usize) -> Result<f64> {
    if residue == '-' {
        return Ok(0.0);
    }
    Alphabet::Protein
        .ordinal(residue)
        .map(|code| code as f64)
        .ok_or(EncodingError::UnknownResidue { residue, position })
}

/// Encode equal-length sequences as ordinal codes
///
/// Fails with [`EncodingError::LengthMismatch`] when any sequence differs
/// in length from the first.
pub fn ordinal_seq(sequences: &[String]) -> Result<Vec<Vec<f64>>> {
    let first = sequences.first().ok_or(EncodingError::EmptyInput)?;
    let expected = first.chars().count();
    sequences
        .iter()
        .map(|seq| {
            let actual = seq.chars().count();
            if actual != expected {
                return Err(EncodingError::LengthMismatch { expected, actual });
            }
            seq.chars()
                .enumerate()
                .map(|(pos, residue)| encode_residue(residue, pos))
                .collect()
        })
        .collect()
}

/// Encode sequences as ordinal codes, zero-padded to the longest
pub fn ordinal_seq_padded(sequences: &[String]) -> Result<Vec<Vec<f64>>> {
    if sequences.is_empty() {
        return Err(EncodingError::EmptyInput);
    }
    let width = sequences
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    sequences
        .iter()
        .map(|seq| {
            let mut row = seq
                .chars()
                .enumerate()
                .map(|(pos, residue)| encode_residue(residue, pos))
                .collect::<Result<Vec<f64>>>()?;
            row.resize(width, 0.0);
            Ok(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ordinal_codes() {
        let rows = ordinal_seq(&seqs(&["ACY"])).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 20.0]]);
    }

    #[test]
    fn test_gap_encodes_to_zero() {
        let rows = ordinal_seq(&seqs(&["A-C"])).unwrap();
        assert_eq!(rows, vec![vec![1.0, 0.0, 2.0]]);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let err = ordinal_seq(&seqs(&["ACDE", "AC"])).unwrap_err();
        assert_eq!(
            err,
            EncodingError::LengthMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_unknown_residue_rejected() {
        let err = ordinal_seq(&seqs(&["AXC"])).unwrap_err();
        assert_eq!(
            err,
            EncodingError::UnknownResidue {
                residue: 'X',
                position: 1
            }
        );
    }

    #[test]
    fn test_padded_encoding() {
        let rows = ordinal_seq_padded(&seqs(&["ACDE", "AC"])).unwrap();
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[1], vec![1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(ordinal_seq(&[]).unwrap_err(), EncodingError::EmptyInput);
        assert_eq!(
            ordinal_seq_padded(&[]).unwrap_err(),
            EncodingError::EmptyInput
        );
    }
}
