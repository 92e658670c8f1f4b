use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

/// Elementwise nonlinearities, each paired with its pointwise derivative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ActivationFunction {
    Tanh,
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
    #[serde(rename = "leaky_relu")]
    LeakyReLU { alpha: f64 },
    Elu { alpha: f64 },
    Gelu,
    Swish,
    Identity,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

// tanh-based GELU approximation constant
const GELU_K: f64 = 0.044715;

impl ActivationFunction {
    /// Lower-case name used in logs and layer descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::LeakyReLU { .. } => "leaky_relu",
            ActivationFunction::Elu { .. } => "elu",
            ActivationFunction::Gelu => "gelu",
            ActivationFunction::Swish => "swish",
            ActivationFunction::Identity => "identity",
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Sigmoid => sigmoid(x),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { x } else { alpha * (x.exp() - 1.0) }
            }
            ActivationFunction::Gelu => {
                let c = (2.0 / PI).sqrt();
                0.5 * x * (1.0 + (c * (x + GELU_K * x.powi(3))).tanh())
            }
            ActivationFunction::Swish => x * sigmoid(x),
            ActivationFunction::Identity => x,
        }
    }

    /// d/dx of `function`, evaluated at the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Sigmoid => {
                let s = sigmoid(x);
                s * (1.0 - s)
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { 1.0 } else { *alpha },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { 1.0 } else { alpha * x.exp() }
            }
            ActivationFunction::Gelu => {
                let c = (2.0 / PI).sqrt();
                let t = (c * (x + GELU_K * x.powi(3))).tanh();
                let sech2 = 1.0 - t * t;
                let d_inner = c * (1.0 + 3.0 * GELU_K * x.powi(2));
                0.5 * (1.0 + t) + 0.5 * x * sech2 * d_inner
            }
            ActivationFunction::Swish => {
                let s = sigmoid(x);
                s + x * s * (1.0 - s)
            }
            ActivationFunction::Identity => 1.0,
        }
    }
}
