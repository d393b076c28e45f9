use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use wavescale::data::model::Dataset;
use wavescale::data::standardize::{standardize, standardize_in_place};
use wavescale::Error;

fn random_table(rows: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(5.0, 3.0).unwrap();
    Dataset::from_columns(["a", "b", "c"].map(|name| {
        let values: Vec<f64> = (0..rows).map(|_| normal.sample(&mut rng)).collect();
        (name, values)
    }))
    .unwrap()
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[test]
fn selected_columns_have_zero_mean_unit_std() {
    let ds = standardize(random_table(200, 3), &["a", "b"]).unwrap();
    for name in ["a", "b"] {
        let (mean, std) = mean_std(ds.column(name).unwrap());
        assert!(mean.abs() < 1e-12, "{name}: mean {mean}");
        assert!((std - 1.0).abs() < 1e-12, "{name}: std {std}");
    }
}

#[test]
fn unselected_columns_are_bit_identical() {
    let original = random_table(50, 11);
    let ds = standardize(original.clone(), &["b"]).unwrap();
    for name in ["a", "c"] {
        let before: Vec<u64> = original.column(name).unwrap().iter().map(|v| v.to_bits()).collect();
        let after: Vec<u64> = ds.column(name).unwrap().iter().map(|v| v.to_bits()).collect();
        assert_eq!(before, after);
    }
}

#[test]
fn ten_rows_stay_within_three_sigma() {
    // With n rows a population z-score is bounded by sqrt(n - 1).
    let ds = standardize(random_table(10, 5), &["a", "b"]).unwrap();
    for name in ["a", "b"] {
        assert!(ds.column(name).unwrap().iter().all(|v| v.abs() <= 3.0 + 1e-9));
    }
    assert_eq!(ds.shape(), (10, 3));
}

#[test]
fn constant_columns_become_zero() {
    let ds = Dataset::from_columns([
        ("a", vec![0.0, 0.0, 0.0]),
        ("b", vec![0.0, 0.0, 0.0]),
        ("c", vec![0.0, 0.0, 0.0]),
    ])
    .unwrap();
    let ds = standardize(ds, &["a", "b"]).unwrap();
    for name in ["a", "b", "c"] {
        assert_eq!(ds.column(name), Some(&[0.0, 0.0, 0.0][..]));
    }
}

#[test]
fn single_column_selection() {
    let ds = Dataset::from_columns([
        ("a", vec![1.0, 2.0, 3.0]),
        ("b", vec![4.0, 5.0, 6.0]),
        ("c", vec![7.0, 8.0, 9.0]),
    ])
    .unwrap();
    let ds = standardize(ds, &["c"]).unwrap();
    assert_eq!(ds.column("a"), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(ds.column("b"), Some(&[4.0, 5.0, 6.0][..]));
    let c = ds.column("c").unwrap();
    assert!((c[0] + 1.224744871391589).abs() < 1e-9);
    assert_eq!(c[1], 0.0);
    assert!((c[2] - 1.224744871391589).abs() < 1e-9);
}

#[test]
fn empty_selection_returns_input() {
    let original = random_table(20, 42);
    let none: Vec<String> = Vec::new();
    assert_eq!(standardize(original.clone(), &none).unwrap(), original);
}

#[test]
fn unknown_feature_is_reported_before_mutation() {
    let original = random_table(20, 8);
    let mut ds = original.clone();
    let err = standardize_in_place(&mut ds, &["a", "nope", "b"]).unwrap_err();
    assert_eq!(err, Error::UnknownFeature("nope".to_string()));
    assert_eq!(err.to_string(), "unknown feature 'nope'");
    assert_eq!(ds, original);
}

#[test]
fn infinite_cell_is_rejected_and_table_kept() {
    let original = Dataset::from_columns([
        ("a", vec![1.0, 2.0, f64::INFINITY, 4.0]),
        ("b", vec![1.0, 2.0, 3.0, 4.0]),
    ])
    .unwrap();
    let mut ds = original.clone();
    let err = standardize_in_place(&mut ds, &["b", "a"]).unwrap_err();
    assert_eq!(err, Error::NonFiniteFeature("a".to_string()));
    assert_eq!(ds, original);
    assert_eq!(
        standardize(original, &["a"]),
        Err(Error::NonFiniteFeature("a".to_string()))
    );
}

#[test]
fn nan_cells_pass_through_standardize() {
    let ds = Dataset::from_columns([
        ("a", vec![2.0, f64::NAN, 4.0, 9.0, 5.0]),
        ("b", vec![1.0, 1.0, 1.0, 1.0, 1.0]),
    ])
    .unwrap();
    let ds = standardize(ds, &["a"]).unwrap();
    let a = ds.column("a").unwrap();
    assert!(a[1].is_nan());

    let present: Vec<f64> = a.iter().copied().filter(|v| !v.is_nan()).collect();
    assert_eq!(present.len(), 4);
    let (mean, std) = mean_std(&present);
    assert!(mean.abs() < 1e-12, "mean {mean}");
    assert!((std - 1.0).abs() < 1e-12, "std {std}");
    assert_eq!(ds.column("b"), Some(&[1.0; 5][..]));
}
