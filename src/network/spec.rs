use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::{activation::Activation, layer::Layer, linear::Linear};
use crate::network::network::Network;

/// Describes one layer of a network architecture.
///
/// JSON form:
/// ```json
/// { "type": "linear", "input_size": 10, "output_size": 50 }
/// { "type": "activation", "function": { "kind": "tanh" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerSpec {
    Linear { input_size: usize, output_size: usize },
    Activation { function: ActivationFunction },
}

/// A serializable description of a network architecture (no weights).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// The FizzBuzz architecture: 10 → 50 → tanh → 4.
    pub fn fizzbuzz() -> NetworkSpec {
        NetworkSpec {
            layers: vec![
                LayerSpec::Linear { input_size: 10, output_size: 50 },
                LayerSpec::Activation { function: ActivationFunction::Tanh },
                LayerSpec::Linear { input_size: 50, output_size: 4 },
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<NetworkSpec> {
        let spec: NetworkSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let json = std::fs::read_to_string(path)?;
        NetworkSpec::from_json(&json)
    }

    /// Checks that the architecture is non-empty, that no linear layer has a zero
    /// dimension and that consecutive linear layers chain.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NnError::InvalidConfig("network spec has no layers".into()));
        }

        let mut width: Option<usize> = None;
        for (i, layer) in self.layers.iter().enumerate() {
            if let LayerSpec::Linear { input_size, output_size } = *layer {
                if input_size == 0 || output_size == 0 {
                    return Err(NnError::InvalidConfig(format!(
                        "layer {i}: linear dimensions must be non-zero"
                    )));
                }
                if let Some(prev) = width {
                    if prev != input_size {
                        return Err(NnError::InvalidConfig(format!(
                            "layer {i}: input_size {input_size} does not match previous output_size {prev}"
                        )));
                    }
                }
                width = Some(output_size);
            }
        }
        Ok(())
    }

    /// Instantiates the layers, drawing initial weights from `rng`.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        self.validate()?;
        let layers = self
            .layers
            .iter()
            .map(|spec| -> Box<dyn Layer> {
                match *spec {
                    LayerSpec::Linear { input_size, output_size } => {
                        Box::new(Linear::new(input_size, output_size, rng))
                    }
                    LayerSpec::Activation { function } => Box::new(Activation::new(function)),
                }
            })
            .collect();
        Ok(Network::new(layers))
    }
}

impl Network {
    pub fn from_spec<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.build(rng)
    }
}
