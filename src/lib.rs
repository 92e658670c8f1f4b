pub mod math;
pub mod error;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

#[cfg(test)]
mod testing;

// Convenience re-exports
pub use math::tensor::Tensor;
pub use error::{NnError, Result};
pub use activation::activation::ActivationFunction;
pub use layers::{Activation, Layer, Linear, Param};
pub use network::{Network, NetworkSpec, LayerSpec};
pub use loss::{Loss, LossType, MeanSquaredError, SumSquaredError};
pub use optim::{Optimizer, Sgd};
pub use train::{accuracy, train, EpochStats, TrainConfig};
