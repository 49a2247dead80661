//! Textbook objectives for the end-to-end scenario tests, reimplemented
//! locally in the shape the scenarios need (not depended upon from the
//! teacher's own `argmin-testfunctions`, which is teacher-specific).

use descent_core::core::{Error, Matrix, Objective, Vector};

/// Multidimensional Rosenbrock function with the standard `a = 1, b = 100`:
/// `f(x) = sum_{i=1}^{n-1} (a - x_i)^2 + b*(x_{i+1} - x_i^2)^2`. The global
/// minimum is `f(1, 1, ..., 1) = 0`.
pub struct Rosenbrock;

impl Rosenbrock {
    const A: f64 = 1.0;
    const B: f64 = 100.0;

    pub fn f(x: &[f64]) -> f64 {
        x.windows(2)
            .map(|w| (Self::A - w[0]).powi(2) + Self::B * (w[1] - w[0].powi(2)).powi(2))
            .sum()
    }

    pub fn grad(x: &[f64]) -> Vec<f64> {
        let n = x.len();
        let mut g = vec![0.0; n];
        for i in 0..n - 1 {
            let xi = x[i];
            let xi1 = x[i + 1];
            g[i] += -4.0 * Self::B * xi * (xi1 - xi * xi) - 2.0 * (Self::A - xi);
            g[i + 1] += 2.0 * Self::B * (xi1 - xi * xi);
        }
        g
    }

    /// Dense Hessian, only exact for the tridiagonal structure the function
    /// actually has (off-tridiagonal entries are zero).
    pub fn hess(x: &[f64]) -> Matrix {
        let n = x.len();
        let mut h = Matrix::zeros(n, n);
        for i in 0..n - 1 {
            let xi = x[i];
            let xi1 = x[i + 1];
            h[(i, i)] += 12.0 * Self::B * xi * xi - 4.0 * Self::B * xi1 + 2.0;
            h[(i + 1, i + 1)] += 2.0 * Self::B;
            h[(i, i + 1)] += -4.0 * Self::B * xi;
            h[(i + 1, i)] += -4.0 * Self::B * xi;
        }
        h
    }
}

impl Objective for Rosenbrock {
    fn func(&self, x: &Vector) -> Result<f64, Error> {
        Ok(Rosenbrock::f(x.as_slice()))
    }

    fn grad(&self, x: &Vector, g: &mut Vector) -> Result<(), Error> {
        g.copy_from_slice(&Rosenbrock::grad(x.as_slice()));
        Ok(())
    }

    fn hess(&self, x: &Vector, h: &mut Matrix) -> Result<(), Error> {
        h.copy_from(&Rosenbrock::hess(x.as_slice()));
        Ok(())
    }

    fn has_grad(&self) -> bool {
        true
    }

    fn has_hess(&self) -> bool {
        true
    }
}

const BIGGS_T: [f64; 13] = [
    0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3,
];

fn biggs_y(t: f64) -> f64 {
    (-t).exp() - 5.0 * (-10.0 * t).exp() + 3.0 * (-4.0 * t).exp()
}

fn biggs_residual(x: &[f64], t: f64) -> f64 {
    x[2] * (-t * x[0]).exp() - x[3] * (-t * x[1]).exp() + x[5] * (-t * x[4]).exp() - biggs_y(t)
}

/// Biggs EXP6 (More-Garbow-Hillstrom test problem 18): 6 parameters, 13
/// exponential-sum residuals. The global minimum is `f* = 0`.
pub struct BiggsExp6;

impl BiggsExp6 {
    pub fn f(x: &[f64]) -> f64 {
        BIGGS_T.iter().map(|&t| biggs_residual(x, t).powi(2)).sum()
    }

    pub fn grad(x: &[f64]) -> Vec<f64> {
        let mut g = vec![0.0; 6];
        for &t in BIGGS_T.iter() {
            let r = biggs_residual(x, t);
            let e1 = (-t * x[0]).exp();
            let e2 = (-t * x[1]).exp();
            let e5 = (-t * x[4]).exp();
            g[0] += 2.0 * r * (-t * x[2] * e1);
            g[1] += 2.0 * r * (t * x[3] * e2);
            g[2] += 2.0 * r * e1;
            g[3] += 2.0 * r * (-e2);
            g[4] += 2.0 * r * (-t * x[5] * e5);
            g[5] += 2.0 * r * e5;
        }
        g
    }
}

impl Objective for BiggsExp6 {
    fn func(&self, x: &Vector) -> Result<f64, Error> {
        Ok(BiggsExp6::f(x.as_slice()))
    }

    fn grad(&self, x: &Vector, g: &mut Vector) -> Result<(), Error> {
        g.copy_from_slice(&BiggsExp6::grad(x.as_slice()));
        Ok(())
    }

    fn has_grad(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosenbrock_optimum_is_zero() {
        assert!((Rosenbrock::f(&[1.0, 1.0]) - 0.0).abs() < 1e-12);
        assert!((Rosenbrock::f(&[1.0, 1.0, 1.0, 1.0]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn rosenbrock_gradient_vanishes_at_optimum() {
        for g in Rosenbrock::grad(&[1.0, 1.0, 1.0]) {
            assert!(g.abs() < 1e-12);
        }
    }

    #[test]
    fn biggs_exp6_optimum_is_near_zero() {
        // One of the textbook global minimizers.
        let x = [1.0, 10.0, 1.0, 5.0, 4.0, 3.0];
        assert!(BiggsExp6::f(&x) < 1e-8);
    }
}
