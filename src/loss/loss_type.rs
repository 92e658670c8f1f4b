use serde::{Serialize, Deserialize};

use crate::loss::{loss_fn::Loss, mse::MeanSquaredError, sse::SumSquaredError};

/// Selects the loss used by the training loop.
///
/// - `Sse`: total squared error, Σ(p - a)².
/// - `Mse`: mean squared error, Σ(p - a)² / n. Same minimum as `Sse`; the
///   gradient is scaled down by the element count, so it needs a larger
///   learning rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Sse,
    Mse,
}

impl LossType {
    pub fn build(self) -> Box<dyn Loss> {
        match self {
            LossType::Sse => Box::new(SumSquaredError),
            LossType::Mse => Box::new(MeanSquaredError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn build_dispatches_to_the_named_loss() {
        let p = array![[1.0, 3.0]];
        let a = array![[0.0, 0.0]];
        assert_eq!(LossType::Sse.build().loss(&p, &a).unwrap(), 10.0);
        assert_eq!(LossType::Mse.build().loss(&p, &a).unwrap(), 5.0);
    }

    #[test]
    fn snake_case_names() {
        assert_eq!(serde_json::to_string(&LossType::Sse).unwrap(), r#""sse""#);
        let t: LossType = serde_json::from_str(r#""mse""#).unwrap();
        assert_eq!(t, LossType::Mse);
    }
}
