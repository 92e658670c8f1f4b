use ndarray::{Array2, Axis};
use rand::Rng;
use std::f64::consts::PI;

use crate::error::{NnError, Result};

/// Batch-major 2-D array: rows are samples, columns are features.
pub type Tensor = Array2<f64>;

/// Samples a single value from N(0, 1) using the Box-Muller transform.
fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Both uniforms live on (0, 1] so that ln() never sees 0.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// A (rows, cols) tensor with every entry drawn from N(0, 1).
pub fn standard_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Tensor {
    Array2::from_shape_simple_fn((rows, cols), || sample_standard_normal(rng))
}

/// Fails with `ShapeMismatch` unless `got` has exactly the `expected` shape.
pub fn ensure_same_shape(op: &'static str, expected: &Tensor, got: &Tensor) -> Result<()> {
    if expected.dim() != got.dim() {
        return Err(NnError::ShapeMismatch {
            op,
            expected: expected.dim(),
            got: got.dim(),
        });
    }
    Ok(())
}

/// Index of the largest element in each row. Ties resolve to the first index.
pub fn argmax_rows(t: &Tensor) -> Vec<usize> {
    t.axis_iter(Axis(0))
        .map(|row| {
            row.iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |(best_i, best), (i, &x)| {
                    if x > best { (i, x) } else { (best_i, best) }
                })
                .0
        })
        .collect()
}
