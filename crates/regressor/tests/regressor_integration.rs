//! Integration tests for the regressor crate

use regressor::{
    build_estimator, DecisionTreeRegressor, EstimatorKind, ExtraTreesRegressor,
    GradientBoostingRegressor, Kernel, KernelSvr, LinearRegression, ModelError, ParamValue,
    RandomForestRegressor, RecurrentConfig, RecurrentRegressor, Regressor, TunableRegressor,
};

fn linear_data(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let x: Vec<Vec<f64>> = (0..n)
        .map(|i| vec![i as f64, (i % 4) as f64, ((i * 3) % 7) as f64])
        .collect();
    let y: Vec<f64> = x.iter().map(|r| 2.0 * r[0] - r[1] + 0.5 * r[2] + 3.0).collect();
    (x, y)
}

#[test]
fn test_linear_recovers_coefficients() {
    let (x, y) = linear_data(30);
    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();

    let preds = model.predict(&x).unwrap();
    for (p, t) in preds.iter().zip(y.iter()) {
        assert!((p - t).abs() < 1e-6, "predicted {} for target {}", p, t);
    }
}

#[test]
fn test_tree_fits_step_function() {
    let x: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
    let y: Vec<f64> = (0..20).map(|i| if i < 10 { 1.0 } else { 5.0 }).collect();

    let mut tree = DecisionTreeRegressor::new();
    tree.fit(&x, &y).unwrap();
    let preds = tree.predict(&x).unwrap();
    assert!((preds[0] - 1.0).abs() < 1e-9);
    assert!((preds[19] - 5.0).abs() < 1e-9);
}

#[test]
fn test_ensembles_predict_in_range() {
    let (x, y) = linear_data(40);
    let lo = y.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut forest = RandomForestRegressor::new().with_seed(1);
    forest.fit(&x, &y).unwrap();
    let mut extra = ExtraTreesRegressor::new().with_seed(1);
    extra.fit(&x, &y).unwrap();

    for model in [&forest as &dyn Regressor, &extra as &dyn Regressor] {
        for p in model.predict(&x).unwrap() {
            assert!(p >= lo - 1e-9 && p <= hi + 1e-9);
        }
    }
}

#[test]
fn test_gradient_boosting_beats_baseline() {
    let (x, y) = linear_data(40);
    let mean = y.iter().sum::<f64>() / y.len() as f64;
    let baseline_sse: f64 = y.iter().map(|t| (t - mean) * (t - mean)).sum();

    let mut gb = GradientBoostingRegressor::new();
    gb.fit(&x, &y).unwrap();
    let sse: f64 = gb
        .predict(&x)
        .unwrap()
        .iter()
        .zip(y.iter())
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    assert!(sse < baseline_sse);
}

#[test]
fn test_svr_tuned_via_params() {
    let (x, y) = linear_data(30);
    let mut svr = KernelSvr::new(Kernel::Poly);
    svr.set_param("kernel", &ParamValue::Text("linear".into())).unwrap();
    svr.set_param("C", &ParamValue::Float(10.0)).unwrap();
    svr.fit(&x, &y).unwrap();
    assert!(svr.predict(&x).unwrap().iter().all(|p| p.is_finite()));
}

#[test]
fn test_recurrent_end_to_end() {
    let x: Vec<Vec<f64>> = (0..16).map(|i| vec![(i % 5) as f64, ((i + 1) % 5) as f64, ((i + 2) % 5) as f64]).collect();
    let y: Vec<f64> = x.iter().map(|r| r.iter().sum::<f64>()).collect();

    let config = RecurrentConfig::default()
        .layer_units(vec![8])
        .dropout(0.0)
        .epochs(5)
        .batch_size(4);
    let mut net = RecurrentRegressor::new(config).with_seed(3);
    net.fit(&x, &y).unwrap();
    assert_eq!(net.predict(&x).unwrap().len(), x.len());
}

#[test]
fn test_build_estimator_covers_all_kinds() {
    for kind in EstimatorKind::ALL {
        assert!(!build_estimator(kind).is_fitted());
    }
}

#[test]
fn test_mismatched_lengths_rejected() {
    let mut model = LinearRegression::new();
    let err = model.fit(&[vec![1.0], vec![2.0]], &[1.0]).unwrap_err();
    assert!(matches!(err, ModelError::InvalidData(_)));
}

#[test]
fn test_predict_width_checked() {
    let (x, y) = linear_data(10);
    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();
    assert!(model.predict(&[vec![1.0]]).is_err());
}
