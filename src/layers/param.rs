use ndarray::ArrayViewMut2;

use crate::error::Result;
use crate::math::tensor::{ensure_same_shape, Tensor};

/// A named trainable tensor together with the gradient of the loss with
/// respect to it.
///
/// The gradient always has the value's shape: it starts as zeros and can only
/// be replaced by a tensor of the same shape.
#[derive(Debug, Clone)]
pub struct Param {
    name: &'static str,
    value: Tensor,
    grad: Tensor,
}

impl Param {
    pub fn new(name: &'static str, value: Tensor) -> Param {
        let grad = Tensor::zeros(value.dim());
        Param { name, value, grad }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &Tensor {
        &self.value
    }

    /// Mutable view of the value. A view cannot be reshaped, so the shape
    /// stays fixed for the life of the parameter.
    pub fn value_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.value.view_mut()
    }

    pub fn grad(&self) -> &Tensor {
        &self.grad
    }

    pub fn set_grad(&mut self, grad: Tensor) -> Result<()> {
        ensure_same_shape(self.name, &self.value, &grad)?;
        self.grad = grad;
        Ok(())
    }

    /// Splits the parameter into its mutable value and its gradient, the pair
    /// an optimizer step needs.
    pub fn value_and_grad(&mut self) -> (ArrayViewMut2<'_, f64>, &Tensor) {
        (self.value.view_mut(), &self.grad)
    }
}
