use crate::error::{Error, Result};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// StandardScaler – statistics of a single column
// ---------------------------------------------------------------------------

/// Mean and population standard deviation (ddof = 0) of one column.
///
/// `NaN` entries are skipped when fitting and pass through [`transform`]
/// unchanged. A column whose variance is indistinguishable from zero is
/// flagged constant and maps every value to exactly `0.0`.
///
/// [`transform`]: StandardScaler::transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    mean: f64,
    std_dev: f64,
    constant: bool,
}

impl StandardScaler {
    pub fn new(data: &[f64]) -> Self {
        let (n, sum) = data
            .iter()
            .filter(|v| !v.is_nan())
            .fold((0usize, 0.0), |(n, sum), &v| (n + 1, sum + v));
        if n == 0 {
            return StandardScaler {
                mean: 0.0,
                std_dev: 0.0,
                constant: true,
            };
        }

        let n = n as f64;
        let mean = sum / n;
        let var = data
            .iter()
            .filter(|v| !v.is_nan())
            .map(|&value| (value - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = var.sqrt();

        // Variance below the rounding noise of the two-pass estimate.
        let upper_bound = n * f64::EPSILON * var + (n * mean * f64::EPSILON).powi(2);

        StandardScaler {
            mean,
            std_dev,
            constant: var <= upper_bound,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn is_constant(&self) -> bool {
        self.constant
    }

    pub fn transform(&self, value: f64) -> f64 {
        if value.is_nan() {
            value
        } else if self.constant {
            0.0
        } else {
            (value - self.mean) / self.std_dev
        }
    }

    /// Map a standardized value back to the original scale. Constant
    /// columns come back as their mean.
    pub fn inverse_transform(&self, value: f64) -> f64 {
        if value.is_nan() {
            value
        } else if self.constant {
            self.mean
        } else {
            value * self.std_dev + self.mean
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureStandardizer – per-column scalers for a feature selection
// ---------------------------------------------------------------------------

/// Scalers fitted on a selection of dataset columns, in selection order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureStandardizer {
    scalers: Vec<(String, StandardScaler)>,
}

impl FeatureStandardizer {
    /// Fit one scaler per named feature. Repeated names are fitted once.
    ///
    /// Fails with [`Error::UnknownFeature`] on the first name that is not a
    /// column of `dataset`, and with [`Error::NonFiniteFeature`] on the first
    /// column holding `±inf`. `NaN` is accepted as a missing value.
    pub fn fit<S: AsRef<str>>(dataset: &Dataset, features: &[S]) -> Result<Self> {
        let mut scalers: Vec<(String, StandardScaler)> = Vec::with_capacity(features.len());
        for name in features {
            let name = name.as_ref();
            if scalers.iter().any(|(fitted, _)| fitted == name) {
                continue;
            }
            let values = dataset
                .column(name)
                .ok_or_else(|| Error::UnknownFeature(name.to_string()))?;
            if values.iter().any(|v| v.is_infinite()) {
                return Err(Error::NonFiniteFeature(name.to_string()));
            }
            let scaler = StandardScaler::new(values);
            log::debug!(
                "fitted '{name}': mean={:.6} std={:.6} constant={}",
                scaler.mean(),
                scaler.std_dev(),
                scaler.is_constant()
            );
            scalers.push((name.to_string(), scaler));
        }
        Ok(FeatureStandardizer { scalers })
    }

    /// Names of the fitted features.
    pub fn features(&self) -> impl Iterator<Item = &str> + '_ {
        self.scalers.iter().map(|(name, _)| name.as_str())
    }

    pub fn scaler(&self, feature: &str) -> Option<&StandardScaler> {
        self.scalers
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, scaler)| scaler)
    }

    pub fn is_empty(&self) -> bool {
        self.scalers.is_empty()
    }

    /// Standardize the fitted columns of `dataset` in place.
    ///
    /// All columns are checked before anything is written, so on error the
    /// dataset is untouched.
    pub fn transform(&self, dataset: &mut Dataset) -> Result<()> {
        self.apply(dataset, StandardScaler::transform)
    }

    /// Undo [`transform`](Self::transform) on the fitted columns.
    pub fn inverse_transform(&self, dataset: &mut Dataset) -> Result<()> {
        self.apply(dataset, StandardScaler::inverse_transform)
    }

    fn apply(&self, dataset: &mut Dataset, f: fn(&StandardScaler, f64) -> f64) -> Result<()> {
        if let Some((missing, _)) = self.scalers.iter().find(|(name, _)| !dataset.contains(name)) {
            return Err(Error::UnknownFeature(missing.clone()));
        }
        for (name, scaler) in &self.scalers {
            if let Some(values) = dataset.column_mut(name) {
                for v in values.iter_mut() {
                    *v = f(scaler, *v);
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Standardize the named features of `dataset` and return it.
///
/// An empty feature list returns the dataset as-is. Unknown names fail with
/// [`Error::UnknownFeature`] before any column is modified; use
/// [`standardize_in_place`] to keep the table when that happens.
pub fn standardize<S: AsRef<str>>(mut dataset: Dataset, features: &[S]) -> Result<Dataset> {
    if features.is_empty() {
        return Ok(dataset);
    }
    standardize_in_place(&mut dataset, features)?;
    Ok(dataset)
}

/// Standardize the named features through a mutable borrow and return the
/// fitted scalers, which can later restore the original values.
pub fn standardize_in_place<S: AsRef<str>>(
    dataset: &mut Dataset,
    features: &[S],
) -> Result<FeatureStandardizer> {
    let standardizer = FeatureStandardizer::fit(dataset, features)?;
    standardizer.transform(dataset)?;
    Ok(standardizer)
}
