//! Helpers shared by the unit tests.

use ndarray::Zip;

use crate::math::tensor::Tensor;

pub const EPS: f64 = 1e-6;
pub const TOL: f64 = 1e-4;

pub fn assert_close(a: &Tensor, b: &Tensor, tol: f64) {
    assert_eq!(a.dim(), b.dim(), "shape mismatch");
    Zip::from(a).and(b).for_each(|&x, &y| {
        assert!((x - y).abs() < tol, "{x} vs {y}\nleft:\n{a}\nright:\n{b}");
    });
}

/// Central-difference gradient of `f` with respect to every entry of `x`.
pub fn numeric_grad<F>(x: &Tensor, mut f: F) -> Tensor
where
    F: FnMut(&Tensor) -> f64,
{
    let mut probe = x.clone();
    let mut grad = Tensor::zeros(x.dim());
    for idx in ndarray::indices(x.dim()) {
        let orig = probe[idx];
        probe[idx] = orig + EPS;
        let up = f(&probe);
        probe[idx] = orig - EPS;
        let down = f(&probe);
        probe[idx] = orig;
        grad[idx] = (up - down) / (2.0 * EPS);
    }
    grad
}
