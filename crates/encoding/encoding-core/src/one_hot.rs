//! One-hot sequence encoding.

use encoding_api::Alphabet;
use encoding_spi::{AlignedData, EncodingError, Result, SequenceTransformer};

/// One-hot encoding over a configurable residue alphabet
///
/// Each aligned position expands into `alphabet.size()` columns with a
/// single 1.0 at the residue's index; gap positions stay all-zero.
#[derive(Debug, Clone, Default)]
pub struct OneHotTransformer {
    alphabet: Alphabet,
}

impl OneHotTransformer {
    /// One-hot over the standard amino acids
    pub fn new() -> Self {
        Self::default()
    }

    /// One-hot over a specific alphabet
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }
}

impl SequenceTransformer for OneHotTransformer {
    fn name(&self) -> &str {
        match self.alphabet {
            Alphabet::Protein => "one_hot",
            Alphabet::Nucleotide => "one_hot_nucleotide",
        }
    }

    fn transform(&self, data: &AlignedData) -> Result<Vec<Vec<f64>>> {
        if data.is_empty() {
            return Err(EncodingError::EmptyInput);
        }
        let width = data.width();
        let size = self.alphabet.size();
        let mut rows = Vec::with_capacity(data.len());
        for (i, seq) in data.sequences.iter().enumerate() {
            let actual = seq.chars().count();
            if actual != width {
                return Err(EncodingError::LengthMismatch {
                    expected: width,
                    actual,
                });
            }
            let mut row = vec![0.0; 2 + width * size];
            row[0] = data.ids[i];
            row[1] = data.targets[i];
            for (pos, residue) in seq.chars().enumerate() {
                if residue == '-' {
                    continue;
                }
                let code = self
                    .alphabet
                    .ordinal(residue)
                    .ok_or(EncodingError::UnknownResidue { residue, position: pos })?;
                row[2 + pos * size + (code - 1)] = 1.0;
            }
            rows.push(row);
        }
        Ok(rows)
    }
}
