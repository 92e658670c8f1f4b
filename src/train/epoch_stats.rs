use serde::{Serialize, Deserialize};

/// Statistics for one completed epoch of `train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Loss of the forward pass that produced this epoch's gradients, i.e.
    /// measured before the epoch's optimizer step.
    pub loss: f64,
    pub elapsed_ms: u64,
}
