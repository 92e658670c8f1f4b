use crate::error::Result;
use crate::math::tensor::Tensor;

/// A scalar discrepancy between predictions and targets, with its gradient.
///
/// `grad` must be the exact derivative of `loss` with respect to `predicted`:
/// the optimizer never re-evaluates the loss.
pub trait Loss {
    fn loss(&self, predicted: &Tensor, actual: &Tensor) -> Result<f64>;

    /// Gradient with respect to `predicted`; same shape as `predicted`.
    fn grad(&self, predicted: &Tensor, actual: &Tensor) -> Result<Tensor>;
}
