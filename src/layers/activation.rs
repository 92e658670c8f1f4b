use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::layer::Layer;
use crate::math::tensor::{ensure_same_shape, Tensor};

/// Applies an `ActivationFunction` elementwise. Holds no parameters.
#[derive(Debug, Clone)]
pub struct Activation {
    function: ActivationFunction,
    input: Option<Tensor>,
}

impl Activation {
    pub fn new(function: ActivationFunction) -> Activation {
        Activation { function, input: None }
    }

    pub fn tanh() -> Activation {
        Activation::new(ActivationFunction::Tanh)
    }

    pub fn function(&self) -> ActivationFunction {
        self.function
    }
}

impl Layer for Activation {
    fn name(&self) -> &'static str {
        self.function.name()
    }

    fn forward(&mut self, input: Tensor) -> Result<Tensor> {
        let f = self.function;
        let output = input.mapv(|x| f.function(x));
        self.input = Some(input);
        Ok(output)
    }

    /// Chain rule for an elementwise map: f'(input) ⊙ grad.
    fn backward(&mut self, grad: Tensor) -> Result<Tensor> {
        let layer = self.name();
        let input = self.input.as_ref().ok_or(NnError::UndefinedInput { layer })?;
        ensure_same_shape("activation backward", input, &grad)?;

        let f = self.function;
        let grad_input = input.mapv(|x| f.derivative(x)) * &grad;
        self.input = None;
        Ok(grad_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tensor::standard_normal;
    use crate::testing::{assert_close, numeric_grad, TOL};
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn tanh_forward() {
        let mut layer = Activation::tanh();
        let out = layer.forward(array![[0.0, 1.0], [-1.0, 2.0]]).unwrap();
        assert_close(&out, &array![[0.0, 1.0f64.tanh()], [(-1.0f64).tanh(), 2.0f64.tanh()]], 1e-15);
    }

    #[test]
    fn has_no_params() {
        let mut layer = Activation::tanh();
        assert_eq!(layer.function(), ActivationFunction::Tanh);
        assert!(layer.params().is_empty());
        assert!(layer.params_mut().is_empty());
    }

    #[test]
    fn backward_is_elementwise_not_matmul() {
        let mut layer = Activation::new(ActivationFunction::Identity);
        layer.forward(array![[1.0, 2.0, 3.0]]).unwrap();
        let g = array![[4.0, 5.0, 6.0]];
        assert_eq!(layer.backward(g.clone()).unwrap(), g);
    }

    #[test]
    fn backward_matches_finite_differences() {
        let x = standard_normal(3, 4, &mut StdRng::seed_from_u64(11));
        let g = standard_normal(3, 4, &mut StdRng::seed_from_u64(12));
        for f in [ActivationFunction::Tanh, ActivationFunction::Sigmoid, ActivationFunction::Swish] {
            let mut layer = Activation::new(f);
            layer.forward(x.clone()).unwrap();
            let analytic = layer.backward(g.clone()).unwrap();
            assert_eq!(analytic.dim(), x.dim());

            let numeric = numeric_grad(&x, |x| {
                (Activation::new(f).forward(x.clone()).unwrap() * &g).sum()
            });
            assert_close(&analytic, &numeric, TOL);
        }
    }

    #[test]
    fn backward_without_forward_is_an_error() {
        let mut layer = Activation::tanh();
        let err = layer.backward(array![[1.0]]).unwrap_err();
        assert!(matches!(err, NnError::UndefinedInput { layer: "tanh" }));
    }

    #[test]
    fn mismatched_gradient_is_rejected() {
        let mut layer = Activation::tanh();
        layer.forward(Tensor::zeros((2, 3))).unwrap();
        let err = layer.backward(Tensor::zeros((3, 2))).unwrap_err();
        assert!(matches!(
            err,
            NnError::ShapeMismatch { op: "activation backward", expected: (2, 3), got: (3, 2) }
        ));
    }
}
