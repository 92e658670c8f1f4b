use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::loss_type::LossType;
use crate::optim::sgd::Sgd;

/// Hyperparameters for a training run.
///
/// Every field has a default, so a JSON file only needs the fields it
/// overrides:
/// ```json
/// { "epochs": 20000, "learning_rate": 0.00002, "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Number of full-batch passes. Training always runs all of them.
    pub epochs: usize,
    pub learning_rate: f64,
    pub loss: LossType,
    /// Log the loss every `log_every` epochs; 0 disables periodic logging.
    pub log_every: usize,
    /// Seed for weight initialization; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100_000,
            // gradients are summed over the full dataset; 5e-5 diverges on FizzBuzz
            learning_rate: 4e-5,
            loss: LossType::Sse,
            log_every: 10_000,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs, ..TrainConfig::default() }
    }

    pub fn from_json(json: &str) -> Result<TrainConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &str) -> Result<TrainConfig> {
        let json = std::fs::read_to_string(path)?;
        TrainConfig::from_json(&json)
    }

    pub fn optimizer(&self) -> Sgd {
        Sgd::new(self.learning_rate)
    }
}
