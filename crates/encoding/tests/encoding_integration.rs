//! Integration tests for the encoding crate

use encoding::{
    align_records, ordinal_seq, ordinal_seq_padded, split_encoded, AminoAcidTransformer,
    EncodingError, OneHotTransformer, SequenceTransformer, StandardScaler,
};

fn raw_records() -> (Vec<f64>, Vec<String>, Vec<f64>) {
    (
        vec![0.0, 1.0, 2.0],
        vec!["ACDEFG".to_string(), "ACDE".to_string(), "ACDEFG".to_string()],
        vec![10.0, 20.0, 30.0],
    )
}

#[test]
fn test_align_then_one_hot() {
    let (ids, sequences, targets) = raw_records();
    let data = align_records(ids, sequences, targets).unwrap();
    assert_eq!(data.width(), 6);

    let matrix = OneHotTransformer::new().transform(&data).unwrap();
    assert_eq!(matrix.len(), 3);
    assert!(matrix.iter().all(|r| r.len() == 2 + 6 * 20));

    let (ids, targets, features) = split_encoded(&matrix);
    assert_eq!(ids, vec![0.0, 1.0, 2.0]);
    assert_eq!(targets, vec![10.0, 20.0, 30.0]);
    assert_eq!(features[0].len(), 120);
}

#[test]
fn test_align_then_amino_acid_then_scale() {
    let (ids, sequences, targets) = raw_records();
    let data = align_records(ids, sequences, targets).unwrap();
    let matrix = AminoAcidTransformer::new().transform(&data).unwrap();
    let (_, _, features) = split_encoded(&matrix);

    let mut scaler = StandardScaler::new();
    let scaled = scaler.fit_transform(&features).unwrap();
    assert_eq!(scaled.len(), features.len());
    // Every column is centered after scaling.
    for col in 0..scaled[0].len() {
        let mean: f64 = scaled.iter().map(|r| r[col]).sum::<f64>() / scaled.len() as f64;
        assert!(mean.abs() < 1e-9, "column {} mean {}", col, mean);
    }
}

#[test]
fn test_ordinal_strict_vs_padded() {
    let sequences = vec!["ACDE".to_string(), "AC".to_string()];
    assert!(matches!(
        ordinal_seq(&sequences).unwrap_err(),
        EncodingError::LengthMismatch { .. }
    ));

    let rows = ordinal_seq_padded(&sequences).unwrap();
    assert_eq!(rows[1], vec![1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_transformer_names() {
    let transformers: Vec<Box<dyn SequenceTransformer>> = vec![
        Box::new(OneHotTransformer::new()),
        Box::new(AminoAcidTransformer::new()),
    ];
    let names: Vec<&str> = transformers.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["one_hot", "amino_acid"]);
}
