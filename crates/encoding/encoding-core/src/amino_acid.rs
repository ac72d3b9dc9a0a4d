//! Physicochemical amino-acid encoding.

use encoding_spi::{AlignedData, EncodingError, Result, SequenceTransformer};

/// Descriptors per residue: hydropathy (Kyte-Doolittle), molecular weight,
/// isoelectric point, polarity (Grantham), van der Waals volume.
const DESCRIPTOR_COUNT: usize = 5;

/// `(residue, [hydropathy, mol_weight, iso_point, polarity, vdw_volume])`
const DESCRIPTORS: [(char, [f64; DESCRIPTOR_COUNT]); 20] = [
    ('A', [1.8, 89.09, 6.00, 8.1, 67.0]),
    ('C', [2.5, 121.16, 5.07, 5.5, 86.0]),
    ('D', [-3.5, 133.10, 2.77, 13.0, 91.0]),
    ('E', [-3.5, 147.13, 3.22, 12.3, 109.0]),
    ('F', [2.8, 165.19, 5.48, 5.2, 135.0]),
    ('G', [-0.4, 75.07, 5.97, 9.0, 48.0]),
    ('H', [-3.2, 155.16, 7.59, 10.4, 118.0]),
    ('I', [4.5, 131.17, 6.02, 5.2, 124.0]),
    ('K', [-3.9, 146.19, 9.74, 11.3, 135.0]),
    ('L', [3.8, 131.17, 5.98, 4.9, 124.0]),
    ('M', [1.9, 149.21, 5.74, 5.7, 124.0]),
    ('N', [-3.5, 132.12, 5.41, 11.6, 96.0]),
    ('P', [-1.6, 115.13, 6.30, 8.0, 90.0]),
    ('Q', [-3.5, 146.15, 5.65, 10.5, 114.0]),
    ('R', [-4.5, 174.20, 10.76, 10.5, 148.0]),
    ('S', [-0.8, 105.09, 5.68, 9.2, 73.0]),
    ('T', [-0.7, 119.12, 5.60, 8.6, 93.0]),
    ('V', [4.2, 117.15, 5.96, 5.9, 105.0]),
    ('W', [-0.9, 204.23, 5.89, 5.4, 163.0]),
    ('Y', [-1.3, 181.19, 5.66, 6.2, 141.0]),
];

fn descriptors_for(residue: char, position: usize) -> Result<[f64; DESCRIPTOR_COUNT]> {
    if residue == '-' {
        return Ok([0.0; DESCRIPTOR_COUNT]);
    }
    DESCRIPTORS
        .iter()
        .find(|(r, _)| *r == residue)
        .map(|(_, values)| *values)
        .ok_or(EncodingError::UnknownResidue { residue, position })
}

/// Physicochemical descriptor encoding
///
/// Each aligned position expands into five descriptor columns; gap
/// positions encode to zeros.
#[derive(Debug, Clone, Default)]
pub struct AminoAcidTransformer;

impl AminoAcidTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl SequenceTransformer for AminoAcidTransformer {
    fn name(&self) -> &str {
        "amino_acid"
    }

    fn transform(&self, data: &AlignedData) -> Result<Vec<Vec<f64>>> {
        if data.is_empty() {
            return Err(EncodingError::EmptyInput);
        }
        let width = data.width();
        let mut rows = Vec::with_capacity(data.len());
        for (i, seq) in data.sequences.iter().enumerate() {
            let actual = seq.chars().count();
            if actual != width {
                return Err(EncodingError::LengthMismatch {
                    expected: width,
                    actual,
                });
            }
            let mut row = Vec::with_capacity(2 + width * DESCRIPTOR_COUNT);
            row.push(data.ids[i]);
            row.push(data.targets[i]);
            for (pos, residue) in seq.chars().enumerate() {
                row.extend_from_slice(&descriptors_for(residue, pos)?);
            }
            rows.push(row);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_covers_alphabet() {
        for residue in "ACDEFGHIKLMNPQRSTVWY".chars() {
            assert!(descriptors_for(residue, 0).is_ok(), "missing {}", residue);
        }
    }

    #[test]
    fn test_transform_layout() {
        let data = AlignedData {
            ids: vec![7.0],
            sequences: vec!["AG".to_string()],
            targets: vec![3.0],
        };
        let rows = AminoAcidTransformer::new().transform(&data).unwrap();
        assert_eq!(rows[0].len(), 2 + 2 * 5);
        assert_eq!(rows[0][0], 7.0);
        assert_eq!(rows[0][1], 3.0);
        // Alanine hydropathy then glycine hydropathy
        assert!((rows[0][2] - 1.8).abs() < 1e-9);
        assert!((rows[0][7] - (-0.4)).abs() < 1e-9);
    }

    #[test]
    fn test_gap_encodes_to_zeros() {
        let data = AlignedData {
            ids: vec![0.0],
            sequences: vec!["A-".to_string()],
            targets: vec![0.0],
        };
        let rows = AminoAcidTransformer::new().transform(&data).unwrap();
        assert!(rows[0][7..12].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_unknown_residue() {
        let data = AlignedData {
            ids: vec![0.0],
            sequences: vec!["B".to_string()],
            targets: vec![0.0],
        };
        assert!(AminoAcidTransformer::new().transform(&data).is_err());
    }
}
