//! The feature transform applied at load time.
//!
//! Every value is shifted by its column's `mean / std`, i.e. `v - mean / std`.
//! This is *not* z-scoring (`(v - mean) / std`); the arithmetic is kept as is
//! so stored features match tensors produced by existing training pipelines.

use ndarray::prelude::*;

/// Returns the per-column means and population standard deviations (ddof = 0).
///
/// An empty table yields empty vectors.
pub fn column_stats(data: &Array2<f64>) -> (Array1<f64>, Array1<f64>) {
    match data.mean_axis(Axis(0)) {
        Some(mean) => (mean, data.std_axis(Axis(0), 0.0)),
        None => (Array1::zeros(0), Array1::zeros(0)),
    }
}

/// Replaces every value `v` in a column with `v - mean / std` for that column.
///
/// # Arguments
///
/// * `data` - A `rows x columns` matrix of raw feature values.
///
/// # Returns
///
/// * A matrix of the same shape. Columns with zero spread divide by zero and
///   come out as `inf`/`NaN`, exactly as the plain arithmetic does.
pub fn shift_by_scaled_mean(data: &Array2<f64>) -> Array2<f64> {
    if data.nrows() == 0 {
        return data.clone();
    }
    let (mean, std) = column_stats(data);
    let shift = mean / std;
    data - &shift
}
