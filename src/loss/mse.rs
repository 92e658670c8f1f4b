use crate::error::Result;
use crate::loss::loss_fn::Loss;
use crate::math::tensor::{ensure_same_shape, Tensor};

/// Squared error averaged over every element of the batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanSquaredError;

impl Loss for MeanSquaredError {
    /// Σ (predicted - actual)² / n
    fn loss(&self, predicted: &Tensor, actual: &Tensor) -> Result<f64> {
        ensure_same_shape("mse loss", predicted, actual)?;
        if predicted.is_empty() {
            return Ok(0.0);
        }
        Ok((predicted - actual).mapv(|d| d * d).sum() / predicted.len() as f64)
    }

    /// 2 · (predicted - actual) / n
    fn grad(&self, predicted: &Tensor, actual: &Tensor) -> Result<Tensor> {
        ensure_same_shape("mse grad", predicted, actual)?;
        let n = predicted.len().max(1) as f64;
        Ok((predicted - actual) * (2.0 / n))
    }
}
