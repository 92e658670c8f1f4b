use crate::error::Result;
use crate::loss::loss_fn::Loss;
use crate::math::tensor::{ensure_same_shape, Tensor};

/// Total squared error over every element of the batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct SumSquaredError;

impl Loss for SumSquaredError {
    /// Σ (predicted - actual)²
    fn loss(&self, predicted: &Tensor, actual: &Tensor) -> Result<f64> {
        ensure_same_shape("sse loss", predicted, actual)?;
        Ok((predicted - actual).mapv(|d| d * d).sum())
    }

    /// 2 · (predicted - actual)
    fn grad(&self, predicted: &Tensor, actual: &Tensor) -> Result<Tensor> {
        ensure_same_shape("sse grad", predicted, actual)?;
        Ok((predicted - actual) * 2.0)
    }
}
