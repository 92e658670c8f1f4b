use crate::network::network::Network;

/// Updates a network's parameters from the gradients of its last backward pass.
pub trait Optimizer {
    fn step(&self, network: &mut Network);
}
