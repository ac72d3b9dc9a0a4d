//! Encoding Consumer API
//!
//! Configuration types for sequence encoders.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use encoding_spi::{AlignedData, EncodingError, Result, SequenceTransformer};

/// The residue alphabet a transformer encodes over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alphabet {
    /// The 20 standard amino acids
    #[default]
    Protein,
    /// DNA nucleotides
    Nucleotide,
}

impl Alphabet {
    /// Residues in ordinal-code order: code = index + 1, 0 is the pad value.
    pub fn residues(&self) -> &'static str {
        match self {
            Alphabet::Protein => "ACDEFGHIKLMNPQRSTVWY",
            Alphabet::Nucleotide => "ACGT",
        }
    }

    /// Alphabet size.
    pub fn size(&self) -> usize {
        self.residues().len()
    }

    /// Ordinal code of a residue, or `None` for characters outside the
    /// alphabet. The `-` gap character is not a residue.
    pub fn ordinal(&self, residue: char) -> Option<usize> {
        self.residues().find(residue).map(|pos| pos + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_ordinals() {
        let protein = Alphabet::Protein;
        assert_eq!(protein.size(), 20);
        assert_eq!(protein.ordinal('A'), Some(1));
        assert_eq!(protein.ordinal('C'), Some(2));
        assert_eq!(protein.ordinal('Y'), Some(20));
        assert_eq!(protein.ordinal('X'), None);
        assert_eq!(protein.ordinal('-'), None);
    }

    #[test]
    fn test_nucleotide_ordinals() {
        let nucleotide = Alphabet::Nucleotide;
        assert_eq!(nucleotide.size(), 4);
        assert_eq!(nucleotide.ordinal('G'), Some(3));
        assert_eq!(nucleotide.ordinal('U'), None);
    }

    #[test]
    fn test_default_is_protein() {
        assert_eq!(Alphabet::default(), Alphabet::Protein);
    }
}
