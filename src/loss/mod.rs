pub mod loss_fn;
pub mod loss_type;
pub mod mse;
pub mod sse;

pub use loss_fn::Loss;
pub use loss_type::LossType;
pub use mse::MeanSquaredError;
pub use sse::SumSquaredError;
