pub mod activation;
pub mod layer;
pub mod linear;
pub mod param;

pub use activation::Activation;
pub use layer::Layer;
pub use linear::Linear;
pub use param::Param;
