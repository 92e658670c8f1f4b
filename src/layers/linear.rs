use log::debug;
use ndarray::Axis;
use rand::Rng;

use crate::error::{NnError, Result};
use crate::layers::{layer::Layer, param::Param};
use crate::math::tensor::{standard_normal, Tensor};

const W: usize = 0;
const B: usize = 1;

/// Affine layer: `output = input · W + b`.
///
/// W has shape (input_size, output_size); b is a (1, output_size) row that is
/// broadcast over the batch.
#[derive(Debug, Clone)]
pub struct Linear {
    params: [Param; 2],
    input: Option<Tensor>,  // last forward input, consumed by backward
}

impl Linear {
    /// Draws W and b from N(0, 1).
    pub fn new<R: Rng + ?Sized>(input_size: usize, output_size: usize, rng: &mut R) -> Linear {
        debug!("linear layer {input_size} -> {output_size}");
        let weights = standard_normal(input_size, output_size, rng);
        let biases = standard_normal(1, output_size, rng);
        Linear {
            params: [Param::new("w", weights), Param::new("b", biases)],
            input: None,
        }
    }

    /// Builds a layer with fixed weights and biases.
    pub fn from_params(weights: Tensor, biases: Tensor) -> Result<Linear> {
        let expected = (1, weights.ncols());
        if biases.dim() != expected {
            return Err(NnError::ShapeMismatch {
                op: "linear bias",
                expected,
                got: biases.dim(),
            });
        }
        Ok(Linear {
            params: [Param::new("w", weights), Param::new("b", biases)],
            input: None,
        })
    }

    pub fn input_size(&self) -> usize {
        self.params[W].value().nrows()
    }

    pub fn output_size(&self) -> usize {
        self.params[W].value().ncols()
    }

    pub fn weights(&self) -> &Tensor {
        self.params[W].value()
    }

    pub fn biases(&self) -> &Tensor {
        self.params[B].value()
    }
}

impl Layer for Linear {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn forward(&mut self, input: Tensor) -> Result<Tensor> {
        if input.ncols() != self.input_size() {
            return Err(NnError::ShapeMismatch {
                op: "linear forward",
                expected: (input.nrows(), self.input_size()),
                got: input.dim(),
            });
        }
        let output = input.dot(self.params[W].value()) + self.params[B].value();
        self.input = Some(input);
        Ok(output)
    }

    fn backward(&mut self, grad: Tensor) -> Result<Tensor> {
        let input = self.input.as_ref().ok_or(NnError::UndefinedInput { layer: "linear" })?;
        let expected = (input.nrows(), self.params[W].value().ncols());
        if grad.dim() != expected {
            return Err(NnError::ShapeMismatch {
                op: "linear backward",
                expected,
                got: grad.dim(),
            });
        }

        // b is added to every row, so its gradient sums over the batch.
        let grad_b = grad.sum_axis(Axis(0)).insert_axis(Axis(0));
        let grad_w = input.t().dot(&grad);
        let grad_input = grad.dot(&self.params[W].value().t());

        self.params[W].set_grad(grad_w)?;
        self.params[B].set_grad(grad_b)?;
        self.input = None;
        Ok(grad_input)
    }

    fn params(&self) -> &[Param] {
        &self.params
    }

    fn params_mut(&mut self) -> &mut [Param] {
        &mut self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_close, numeric_grad, TOL};
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed_layer() -> Linear {
        Linear::from_params(
            array![[0.2, -0.5, 1.0], [0.7, 0.1, -0.3]],
            array![[0.05, -0.1, 0.3]],
        )
        .unwrap()
    }

    // Scalar objective sum(out ⊙ g) whose gradient w.r.t. out is exactly g.
    fn objective(layer: &mut Linear, x: &Tensor, g: &Tensor) -> f64 {
        (layer.forward(x.clone()).unwrap() * g).sum()
    }

    #[test]
    fn new_has_requested_shapes() {
        let layer = Linear::new(10, 50, &mut StdRng::seed_from_u64(0));
        assert_eq!(layer.weights().dim(), (10, 50));
        assert_eq!(layer.biases().dim(), (1, 50));
        assert_eq!((layer.input_size(), layer.output_size()), (10, 50));
        let names: Vec<_> = layer.params().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["w", "b"]);
    }

    #[test]
    fn forward_is_affine() {
        let mut layer = fixed_layer();
        let out = layer.forward(array![[1.0, 2.0], [0.0, -1.0]]).unwrap();
        let expected = array![[1.65, -0.4, 0.7], [-0.65, -0.2, 0.6]];
        assert_close(&out, &expected, 1e-12);
    }

    #[test]
    fn backward_returns_input_shaped_gradient() {
        let mut layer = Linear::new(4, 3, &mut StdRng::seed_from_u64(3));
        let x = standard_normal(5, 4, &mut StdRng::seed_from_u64(4));
        let out = layer.forward(x.clone()).unwrap();
        let grad_in = layer.backward(out).unwrap();
        assert_eq!(grad_in.dim(), x.dim());
        assert_eq!(layer.param("w").unwrap().grad().dim(), (4, 3));
        assert_eq!(layer.param("b").unwrap().grad().dim(), (1, 3));
    }

    #[test]
    fn gradients_match_finite_differences() {
        let x = array![[1.0, 2.0], [0.5, -1.5], [-0.3, 0.8]];
        let g = array![[0.1, -0.2, 0.3], [1.0, 0.5, -0.7], [-0.4, 0.9, 0.2]];

        let mut layer = fixed_layer();
        layer.forward(x.clone()).unwrap();
        let grad_x = layer.backward(g.clone()).unwrap();

        let mut probe = fixed_layer();
        let numeric_x = numeric_grad(&x, |x| objective(&mut probe, x, &g));
        assert_close(&grad_x, &numeric_x, TOL);

        for i in [W, B] {
            let value = layer.params()[i].value().clone();
            let numeric = numeric_grad(&value, |v| {
                let mut probe = fixed_layer();
                probe.params_mut()[i].value_mut().assign(v);
                objective(&mut probe, &x, &g)
            });
            assert_close(layer.params()[i].grad(), &numeric, TOL);
        }
    }

    #[test]
    fn bias_gradient_sums_over_batch() {
        let mut layer = fixed_layer();
        layer.forward(array![[1.0, 1.0], [2.0, 2.0]]).unwrap();
        layer.backward(array![[1.0, 2.0, 3.0], [10.0, 20.0, 30.0]]).unwrap();
        assert_eq!(layer.param("b").unwrap().grad(), &array![[11.0, 22.0, 33.0]]);
    }

    #[test]
    fn backward_without_forward_is_an_error() {
        let mut layer = fixed_layer();
        let err = layer.backward(array![[1.0, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(err, NnError::UndefinedInput { layer: "linear" }));
    }

    #[test]
    fn cached_input_is_consumed_by_backward() {
        let mut layer = fixed_layer();
        layer.forward(array![[1.0, 2.0]]).unwrap();
        layer.backward(array![[1.0, 1.0, 1.0]]).unwrap();
        assert!(matches!(
            layer.backward(array![[1.0, 1.0, 1.0]]),
            Err(NnError::UndefinedInput { .. })
        ));
    }

    #[test]
    fn wrong_input_width_is_rejected() {
        let mut layer = fixed_layer();
        let err = layer.forward(array![[1.0, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(
            err,
            NnError::ShapeMismatch { op: "linear forward", expected: (1, 2), got: (1, 3) }
        ));
    }

    #[test]
    fn wrong_gradient_shape_is_rejected_and_keeps_cache() {
        let mut layer = fixed_layer();
        layer.forward(array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let err = layer.backward(array![[1.0, 1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, NnError::ShapeMismatch { op: "linear backward", .. }));
        assert!(layer.backward(Tensor::ones((2, 3))).is_ok());
    }

    #[test]
    fn from_params_checks_bias_shape() {
        let err = Linear::from_params(Tensor::zeros((2, 3)), Tensor::zeros((1, 2))).unwrap_err();
        assert!(matches!(err, NnError::ShapeMismatch { op: "linear bias", .. }));
    }
}
