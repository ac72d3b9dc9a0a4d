//! End-to-end tests for the harness crate
//!
//! Full pipelines from raw sequence records through encoding, scaling,
//! and each evaluation protocol, using only public crate APIs.

use encoding::{
    align_records, split_encoded, AminoAcidTransformer, OneHotTransformer, SequenceTransformer,
    StandardScaler,
};
use harness::{
    Comparison, ComparisonConfig, GridSearch, GridSearchConfig, HoldoutConfig, HoldoutEvaluation,
    ParamGrid, render_comparison,
};
use regressor::{EstimatorKind, ParamValue, RandomForestRegressor, TunableRegressor};

fn sample_records(n: usize) -> (Vec<f64>, Vec<String>, Vec<f64>) {
    let residues = ['A', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
    let sequences: Vec<String> = (0..n)
        .map(|i| {
            (0..8)
                .map(|j| residues[(i * (j + 1)) % residues.len()])
                .collect()
        })
        .collect();
    let targets: Vec<f64> = (0..n).map(|i| ((i * 13) % 7) as f64 * 0.5 + 1.0).collect();
    let ids: Vec<f64> = (0..n).map(|i| i as f64).collect();
    (ids, sequences, targets)
}

#[test]
fn e2e_comparison_matrix_workflow() {
    let (ids, sequences, targets) = sample_records(20);
    let data = align_records(ids, sequences, targets).unwrap();

    let strategies: Vec<Box<dyn SequenceTransformer>> = vec![
        Box::new(OneHotTransformer::new()),
        Box::new(AminoAcidTransformer::new()),
    ];
    let estimators = [
        EstimatorKind::Linear,
        EstimatorKind::DecisionTree,
        EstimatorKind::ExtraTrees,
    ];
    let comparison = Comparison::new(ComparisonConfig::default().cv(4).quiet());
    let rows = comparison.run(&strategies, &estimators, &data).unwrap();

    assert_eq!(rows.len(), strategies.len() * estimators.len());
    let text = render_comparison(&rows);
    assert_eq!(text.lines().count(), 6);
    // Strategy-major: the first strategy's block comes first.
    assert!(text.lines().take(3).all(|l| l.starts_with("one_hot")));
    assert!(text.lines().skip(3).all(|l| l.starts_with("amino_acid")));
}

#[test]
fn e2e_grid_then_holdout_workflow() {
    let (ids, sequences, targets) = sample_records(30);
    let data = align_records(ids, sequences, targets).unwrap();
    let matrix = AminoAcidTransformer::new().transform(&data).unwrap();
    let (_, y, features) = split_encoded(&matrix);
    let x = StandardScaler::new().fit_transform(&features).unwrap();

    let grid = ParamGrid::new()
        .with("max_depth", vec![ParamValue::None, ParamValue::Int(2)])
        .with("n_estimators", vec![ParamValue::Int(5), ParamValue::Int(10)]);
    let search = GridSearch::new(GridSearchConfig::default().cv(5).quiet());
    let factory =
        || Box::new(RandomForestRegressor::new().with_seed(8)) as Box<dyn TunableRegressor>;
    let report = search.run(&factory, &x, &y, &grid).unwrap();
    assert_eq!(report.len(), 4);

    let holdout = HoldoutEvaluation::new(HoldoutConfig::default().tests(4).test_size(0.1).seed(8));
    let mut forest = RandomForestRegressor::new().with_seed(8);
    let trace = holdout.run(&mut forest, &x, &y).unwrap();
    // ceil(0.1 * 30) == 3 per repetition
    assert_eq!(trace.len(), 12);
    assert!(trace.rmse().unwrap().is_finite());
}
