use crate::network::network::Network;
use crate::optim::optimizer::Optimizer;

/// Plain gradient descent with a constant learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(0.01)
    }
}

impl Optimizer for Sgd {
    /// param ← param - lr · grad, in place, for every parameter of the network.
    fn step(&self, network: &mut Network) {
        for param in network.params_and_grads() {
            let (mut value, grad) = param.value_and_grad();
            value.scaled_add(-self.learning_rate, grad);
        }
    }
}
