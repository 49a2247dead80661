//! Dense linear algebra primitives consumed by direction engines and the
//! line-search harness.
//!
//! The specification treats this as an external collaborator and gives only
//! its contract. This module is the one piece of concrete infrastructure the
//! distilled contract requires a real backend for; `nalgebra` is used,
//! matching the backend family the teacher's own math layer (`argmin-math`)
//! wraps for its nalgebra feature.

use nalgebra::{Cholesky, DMatrix, DVector};

use crate::core::errors::{descent_error, Error};

/// A dense real vector of runtime-determined length `n`.
pub type Vector = DVector<f64>;
/// A dense, symmetric `n x n` real matrix.
pub type Matrix = DMatrix<f64>;

/// `u . v`
pub fn dot(u: &Vector, v: &Vector) -> f64 {
    u.dot(v)
}

/// `||v||_2`
pub fn norm2(v: &Vector) -> f64 {
    v.norm()
}

/// `||v||_inf`
pub fn norm_inf(v: &Vector) -> f64 {
    v.camax()
}

/// `out <- u + a * v`, in place.
pub fn add_scaled_to(out: &mut Vector, u: &Vector, a: f64, v: &Vector) {
    out.copy_from(u);
    out.axpy(a, v, 1.0);
}

/// `v <- v + a * u`, in place (the teacher's `axpy` shape).
pub fn axpy(v: &mut Vector, a: f64, u: &Vector) {
    v.axpy(a, u, 1.0);
}

/// `H <- H + alpha * u u^T`, in place on a symmetric matrix.
pub fn sym_rank_one(h: &mut Matrix, alpha: f64, u: &Vector) {
    h.ger(alpha, u, u, 1.0);
}

/// `H <- H + alpha * (u v^T + v u^T)`, in place on a symmetric matrix.
pub fn sym_rank_two(h: &mut Matrix, alpha: f64, u: &Vector, v: &Vector) {
    h.ger(alpha, u, v, 1.0);
    h.ger(alpha, v, u, 1.0);
}

/// `out <- H . v`
pub fn mul_vec(h: &Matrix, v: &Vector, out: &mut Vector) {
    h.mul_to(v, out);
}

/// `u^T . H . v`
pub fn inner(u: &Vector, h: &Matrix, v: &Vector) -> f64 {
    u.dot(&(h * v))
}

/// Symmetric positive-definite Cholesky factorization, consumed by the
/// modified- and pure-Newton direction engines.
pub fn cholesky_factor_sym(h: &Matrix) -> Result<Cholesky<f64, nalgebra::Dyn>, Error> {
    Cholesky::new(h.clone())
        .ok_or_else(|| descent_error!(HessianNotPositiveDefinite, "Cholesky factorization failed"))
}

/// `out <- L L^T \ b`, using an already-computed factorization.
pub fn chol_solve(l: &Cholesky<f64, nalgebra::Dyn>, b: &Vector, out: &mut Vector) {
    out.copy_from(&l.solve(b));
}

/// `n x n` identity.
pub fn identity(n: usize) -> Matrix {
    Matrix::identity(n, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_norm() {
        let u = Vector::from_vec(vec![3.0, 4.0]);
        let v = Vector::from_vec(vec![1.0, 0.0]);
        assert_eq!(dot(&u, &v), 3.0);
        assert_eq!(norm2(&u), 5.0);
        assert_eq!(norm_inf(&u), 4.0);
    }

    #[test]
    fn sym_rank_one_updates_in_place() {
        let mut h = Matrix::zeros(2, 2);
        let u = Vector::from_vec(vec![1.0, 2.0]);
        sym_rank_one(&mut h, 1.0, &u);
        assert_eq!(h[(0, 0)], 1.0);
        assert_eq!(h[(1, 1)], 4.0);
        assert_eq!(h[(0, 1)], 2.0);
    }

    #[test]
    fn cholesky_rejects_indefinite() {
        let h = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        assert!(cholesky_factor_sym(&h).is_err());
    }

    #[test]
    fn cholesky_solves_spd_system() {
        let h = identity(2);
        let l = cholesky_factor_sym(&h).unwrap();
        let b = Vector::from_vec(vec![2.0, 4.0]);
        let mut out = Vector::zeros(2);
        chol_solve(&l, &b, &mut out);
        assert_eq!(out, b);
    }
}
