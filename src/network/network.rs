use log::debug;

use crate::error::Result;
use crate::layers::{layer::Layer, param::Param};
use crate::math::tensor::Tensor;

/// An ordered stack of layers; the output of layer i is the input of layer i + 1.
#[derive(Debug)]
pub struct Network {
    layers: Vec<Box<dyn Layer>>,
}

impl Network {
    pub fn new(layers: Vec<Box<dyn Layer>>) -> Network {
        debug!(
            "network: [{}]",
            layers.iter().map(|l| l.name()).collect::<Vec<_>>().join(", ")
        );
        Network { layers }
    }

    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Forward pass; every layer caches its input for the next `backward`.
    pub fn forward(&mut self, input: Tensor) -> Result<Tensor> {
        self.layers.iter_mut().try_fold(input, |x, layer| layer.forward(x))
    }

    /// Backward pass in reverse layer order. Returns dLoss/dInput of the
    /// first layer.
    pub fn backward(&mut self, grad: Tensor) -> Result<Tensor> {
        self.layers.iter_mut().rev().try_fold(grad, |g, layer| layer.backward(g))
    }

    /// Every parameter of every layer, layers in forward order and each
    /// layer's parameters in declaration order. Writes through the returned
    /// references land in the layers' own storage.
    pub fn params_and_grads(&mut self) -> impl Iterator<Item = &mut Param> + '_ {
        self.layers.iter_mut().flat_map(|layer| layer.params_mut().iter_mut())
    }

    pub fn params(&self) -> impl Iterator<Item = &Param> + '_ {
        self.layers.iter().flat_map(|layer| layer.params().iter())
    }
}
