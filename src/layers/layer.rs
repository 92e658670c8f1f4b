use std::fmt;

use crate::error::Result;
use crate::layers::param::Param;
use crate::math::tensor::Tensor;

/// One differentiable stage of a network.
///
/// `forward` maps a (batch, in) tensor to (batch, out) and keeps the input for
/// the next `backward`. `backward` receives dLoss/dOutput, stores the
/// gradient of every owned parameter and returns dLoss/dInput. Each forward
/// input is consumed by exactly one backward: calling `backward` twice, or
/// before any `forward`, is an `UndefinedInput` error.
pub trait Layer: fmt::Debug {
    fn name(&self) -> &'static str;

    fn forward(&mut self, input: Tensor) -> Result<Tensor>;

    fn backward(&mut self, grad: Tensor) -> Result<Tensor>;

    /// Trainable parameters in declaration order. Empty for stateless layers.
    fn params(&self) -> &[Param] {
        &[]
    }

    fn params_mut(&mut self) -> &mut [Param] {
        Default::default()
    }

    fn param(&self, name: &str) -> Option<&Param> {
        self.params().iter().find(|p| p.name() == name)
    }
}
