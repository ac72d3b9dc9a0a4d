//! Basic example demonstrating the evaluation protocols
//!
//! Run with: cargo run --example basic -p harness

use encoding::{align_records, AminoAcidTransformer, OneHotTransformer, SequenceTransformer};
use harness::{
    Comparison, ComparisonConfig, GridSearch, GridSearchConfig, HoldoutConfig, HoldoutEvaluation,
    ParamGrid, render_score,
};
use regressor::{EstimatorKind, ParamValue, RandomForestRegressor, TunableRegressor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== harness Basic Examples ===\n");

    // Synthetic sequence records
    let residues = ['A', 'C', 'D', 'E', 'G', 'K', 'L', 'S'];
    let n = 40;
    let sequences: Vec<String> = (0..n)
        .map(|i| {
            (0..10)
                .map(|j| residues[(i * (j + 1)) % residues.len()])
                .collect()
        })
        .collect();
    let targets: Vec<f64> = (0..n).map(|i| ((i * 11) % 9) as f64 * 0.3 + 2.0).collect();
    let ids: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let data = align_records(ids, sequences, targets)?;

    // 1. Comparison matrix (Protocol C)
    println!("1. Transformer x Estimator Comparison");
    let strategies: Vec<Box<dyn SequenceTransformer>> = vec![
        Box::new(OneHotTransformer::new()),
        Box::new(AminoAcidTransformer::new()),
    ];
    let estimators = [
        EstimatorKind::Linear,
        EstimatorKind::DecisionTree,
        EstimatorKind::RandomForest,
    ];
    let comparison = Comparison::new(ComparisonConfig::default().cv(4));
    comparison.run(&strategies, &estimators, &data)?;
    println!();

    // 2. Cross-validated grid search (Protocol A)
    println!("2. Random Forest Grid Search");
    let matrix = AminoAcidTransformer::new().transform(&data)?;
    let (_, y, x) = encoding::split_encoded(&matrix);
    let grid = ParamGrid::new()
        .with("max_depth", vec![ParamValue::None, ParamValue::Int(2), ParamValue::Int(5)])
        .with("n_estimators", vec![ParamValue::Int(10), ParamValue::Int(20)]);
    let search = GridSearch::new(GridSearchConfig::default().cv(5));
    let factory =
        || Box::new(RandomForestRegressor::new().with_seed(1)) as Box<dyn TunableRegressor>;
    let report = search.run(&factory, &x, &y, &grid)?;
    println!("   configurations evaluated: {}\n", report.len());

    // 3. Repeated randomized holdout (Protocol B)
    println!("3. Repeated Holdout");
    let holdout = HoldoutEvaluation::new(HoldoutConfig::default().tests(10).test_size(0.1).seed(1));
    let mut forest = RandomForestRegressor::new().with_seed(1);
    let trace = holdout.run(&mut forest, &x, &y)?;
    if let Some(rmse) = trace.rmse() {
        println!("{}", render_score(rmse));
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
