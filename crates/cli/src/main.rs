//! # seqfit-cli
//!
//! Command-line interface for sequence-trait regression. Loads a CSV of
//! protein sequences and geraniol yields, snapshots it, and runs one of
//! the analysis modes over the evaluation harness.

use clap::{Parser, Subcommand};
use dataset::{CsvTraitSource, DataSource, TraitTable, write_snapshot};
use encoding::{
    align_records, ordinal_seq, ordinal_seq_padded, AminoAcidTransformer, OneHotTransformer,
    SequenceTransformer,
};
use harness::{
    Comparison, ComparisonConfig, GridSearch, GridSearchConfig, HoldoutConfig, HoldoutEvaluation,
    ParamGrid, render_score,
};
use regressor::{
    EstimatorKind, ParamValue, RandomForestRegressor, RecurrentConfig, RecurrentRegressor,
    TunableRegressor,
};
use std::path::{Path, PathBuf};
use tracing::info;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "seqfit")]
#[command(about = "Sequence-trait regression CLI", long_about = None)]
struct Cli {
    /// Input CSV with sequence and trait columns (default analysis)
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Padded ordinal encoding through the recurrent regressor
    Padded {
        /// Input CSV with sequence and trait columns
        input: PathBuf,

        /// Mini-batch size for recurrent training
        #[arg(short, long, default_value = "25")]
        batch_size: usize,

        /// Training epochs
        #[arg(short, long, default_value = "3")]
        epochs: usize,

        /// Holdout fraction
        #[arg(short, long, default_value = "0.2")]
        test_size: f64,

        /// Fixed RNG seed for the holdout split
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Strict ordinal encoding (equal-length sequences required)
    Unpadded {
        /// Input CSV with sequence and trait columns
        input: PathBuf,

        /// Training epochs
        #[arg(short, long, default_value = "3")]
        epochs: usize,

        /// Holdout fraction
        #[arg(short, long, default_value = "0.2")]
        test_size: f64,

        /// Fixed RNG seed for the holdout split
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Comparison matrix, forest grid search, and repeated holdout
    Aligned {
        /// Input CSV with sequence and trait columns
        input: PathBuf,

        /// Cross-validation fold count
        #[arg(long, default_value = "10")]
        cv: usize,

        /// Fixed RNG seed for the repeated holdout
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Snapshot file written after every successful load.
const SNAPSHOT: &str = "geraniol.csv";

fn load_table(input: &Path, snapshot: &Path) -> CliResult<TraitTable> {
    info!(path = %input.display(), "loading trait data");
    let table = CsvTraitSource::new(input)
        .load()
        .map_err(|e| e.to_string())?;
    write_snapshot(&table, snapshot, "seq", "geraniol").map_err(|e| e.to_string())?;
    info!(records = table.len(), snapshot = %snapshot.display(), "snapshot written");
    Ok(table)
}

fn train_recurrent_and_score(
    x: &[Vec<f64>],
    y: &[f64],
    batch_size: usize,
    epochs: usize,
    test_size: f64,
    seed: Option<u64>,
) -> CliResult<()> {
    let config = RecurrentConfig::default()
        .batch_size(batch_size)
        .epochs(epochs);
    let mut net = match seed {
        Some(s) => RecurrentRegressor::new(config).with_seed(s),
        None => RecurrentRegressor::new(config),
    };

    let mut holdout_config = HoldoutConfig::default().tests(1).test_size(test_size);
    if let Some(s) = seed {
        holdout_config = holdout_config.seed(s);
    }
    let trace = HoldoutEvaluation::new(holdout_config)
        .run(&mut net, x, y)
        .map_err(|e| e.to_string())?;
    match trace.rmse() {
        Some(rmse) => {
            println!("{}", render_score(rmse));
            Ok(())
        }
        None => Err("holdout produced no predictions".to_string()),
    }
}

fn run_padded(
    input: PathBuf,
    batch_size: usize,
    epochs: usize,
    test_size: f64,
    seed: Option<u64>,
) -> CliResult<()> {
    let (_, sequences, targets) = load_table(&input, Path::new(SNAPSHOT))?.into_columns();
    let x = ordinal_seq_padded(&sequences).map_err(|e| e.to_string())?;
    info!(samples = x.len(), width = x[0].len(), "padded ordinal encoding");
    train_recurrent_and_score(&x, &targets, batch_size, epochs, test_size, seed)
}

fn run_unpadded(
    input: PathBuf,
    epochs: usize,
    test_size: f64,
    seed: Option<u64>,
) -> CliResult<()> {
    let (_, sequences, targets) = load_table(&input, Path::new(SNAPSHOT))?.into_columns();
    let x = ordinal_seq(&sequences).map_err(|e| e.to_string())?;
    info!(samples = x.len(), "strict ordinal encoding");
    train_recurrent_and_score(&x, &targets, 1, epochs, test_size, seed)
}

fn run_aligned(input: PathBuf, cv: usize, seed: Option<u64>) -> CliResult<()> {
    let (ids, sequences, targets) = load_table(&input, Path::new(SNAPSHOT))?.into_columns();
    let data = align_records(ids, sequences, targets).map_err(|e| e.to_string())?;

    info!(records = data.len(), width = data.width(), "comparison matrix");
    let strategies: Vec<Box<dyn SequenceTransformer>> = vec![
        Box::new(OneHotTransformer::new()),
        Box::new(AminoAcidTransformer::new()),
    ];
    let estimators = [
        EstimatorKind::Linear,
        EstimatorKind::DecisionTree,
        EstimatorKind::RandomForest,
        EstimatorKind::ExtraTrees,
        EstimatorKind::GradientBoosting,
        EstimatorKind::SvrPoly,
    ];
    Comparison::new(ComparisonConfig::default().cv(cv))
        .run(&strategies, &estimators, &data)
        .map_err(|e| e.to_string())?;

    info!("random forest grid search");
    let matrix = AminoAcidTransformer::new()
        .transform(&data)
        .map_err(|e| e.to_string())?;
    let (_, y, x) = encoding::split_encoded(&matrix);
    let grid = ParamGrid::new()
        .with(
            "max_depth",
            vec![
                ParamValue::None,
                ParamValue::Int(1),
                ParamValue::Int(2),
                ParamValue::Int(5),
            ],
        )
        .with(
            "max_leaf_nodes",
            vec![ParamValue::None, ParamValue::Int(2), ParamValue::Int(5)],
        )
        .with(
            "n_estimators",
            vec![ParamValue::Int(10), ParamValue::Int(20), ParamValue::Int(50)],
        );
    let factory = || Box::new(RandomForestRegressor::new()) as Box<dyn TunableRegressor>;
    GridSearch::new(GridSearchConfig::default().cv(cv))
        .run(&factory, &x, &y, &grid)
        .map_err(|e| e.to_string())?;

    info!("repeated randomized holdout");
    let mut holdout_config = HoldoutConfig::default();
    if let Some(s) = seed {
        holdout_config = holdout_config.seed(s);
    }
    let mut forest = RandomForestRegressor::new();
    let trace = HoldoutEvaluation::new(holdout_config)
        .run(&mut forest, &x, &y)
        .map_err(|e| e.to_string())?;
    if let Some(rmse) = trace.rmse() {
        println!("{}", render_score(rmse));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Padded {
            input,
            batch_size,
            epochs,
            test_size,
            seed,
        }) => run_padded(input, batch_size, epochs, test_size, seed),

        Some(Commands::Unpadded {
            input,
            epochs,
            test_size,
            seed,
        }) => run_unpadded(input, epochs, test_size, seed),

        Some(Commands::Aligned { input, cv, seed }) => run_aligned(input, cv, seed),

        None => match cli.input {
            Some(input) => run_padded(input, 25, 3, 0.2, None),
            None => Err("an input CSV path is required; see --help".to_string()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_table_writes_snapshot() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let snapshot = dir.path().join("snapshot.csv");
        fs::write(&input, "seq,geraniol\nACDE,1.5\nACDF,2.5\n").unwrap();

        let table = load_table(&input, &snapshot).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].sequence, "ACDE");

        let reloaded = CsvTraitSource::new(&snapshot).load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!((reloaded.records[1].target - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_load_table_reports_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.csv");
        let snapshot = dir.path().join("snapshot.csv");
        assert!(load_table(&input, &snapshot).is_err());
    }
}
