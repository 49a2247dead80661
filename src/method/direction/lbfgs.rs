//! L-BFGS (limited memory, two-loop recursion).

use std::collections::VecDeque;

use crate::core::errors::{descent_error, Error};
use crate::core::linalg::{axpy, dot, norm2, Vector};
use crate::core::location::Location;
use crate::method::direction::DirectionEngine;

const DEFAULT_WINDOW: usize = 15;

/// Holds ring buffers of `(s_k, y_k, rho_k)` and reconstructs `H_k . g` via
/// the two-loop recursion without ever forming `H_k`.
pub struct Lbfgs {
    m: usize,
    s_hist: VecDeque<Vector>,
    y_hist: VecDeque<Vector>,
    rho_hist: VecDeque<f64>,
    x_prev: Option<Vector>,
    g_prev: Option<Vector>,
}

impl Lbfgs {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    pub fn with_window(m: usize) -> Self {
        Lbfgs {
            m: m.max(1),
            s_hist: VecDeque::with_capacity(m),
            y_hist: VecDeque::with_capacity(m),
            rho_hist: VecDeque::with_capacity(m),
            x_prev: None,
            g_prev: None,
        }
    }
}

impl Default for Lbfgs {
    fn default() -> Self {
        Lbfgs::new()
    }
}

impl DirectionEngine for Lbfgs {
    fn name(&self) -> &'static str {
        "L-BFGS"
    }

    fn init_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "L-BFGS requires a gradient"))?;
        let d = -g;
        let alpha0 = 1.0 / norm2(&d);
        self.x_prev = Some(loc.x().clone());
        self.g_prev = Some(g.clone());
        self.s_hist.clear();
        self.y_hist.clear();
        self.rho_hist.clear();
        Ok((d, alpha0))
    }

    fn next_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "L-BFGS requires a gradient"))?
            .clone();
        let x = loc.x().clone();
        let x_prev = self
            .x_prev
            .take()
            .ok_or_else(|| descent_error!(MethodError, "init_direction was not called"))?;
        let g_prev = self.g_prev.take().expect("set alongside x_prev");

        let s = &x - &x_prev;
        let y = &g - &g_prev;
        let sy = dot(&s, &y);
        let rho = 1.0 / sy;

        if self.s_hist.len() == self.m {
            self.s_hist.pop_front();
            self.y_hist.pop_front();
            self.rho_hist.pop_front();
        }
        self.s_hist.push_back(s);
        self.y_hist.push_back(y.clone());
        self.rho_hist.push_back(rho);

        let len = self.s_hist.len();
        let mut alphas = vec![0.0; len];
        let mut q = g.clone();

        for i in (0..len).rev() {
            let rho_i = self.rho_hist[i];
            let a = rho_i * dot(&self.s_hist[i], &q);
            alphas[i] = a;
            axpy(&mut q, -a, &self.y_hist[i]);
        }

        let yy = dot(&y, &y);
        let gamma = if yy > 0.0 { sy / yy } else { 1.0 };
        let mut r = &q * gamma;

        for i in 0..len {
            let rho_i = self.rho_hist[i];
            let beta = rho_i * dot(&self.y_hist[i], &r);
            axpy(&mut r, alphas[i] - beta, &self.s_hist[i]);
        }

        let d = -r;

        self.x_prev = Some(x);
        self.g_prev = Some(g);

        Ok((d, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_direction_is_negative_gradient() {
        let mut l = Lbfgs::new();
        let mut loc = Location::new(Vector::from_vec(vec![1.0, 1.0]));
        loc.set_f(2.0);
        loc.set_g(Vector::from_vec(vec![3.0, 4.0]));
        let (d, alpha0) = l.init_direction(&loc).unwrap();
        assert_eq!(d, Vector::from_vec(vec![-3.0, -4.0]));
        assert!((alpha0 - 0.2).abs() < 1e-12);
    }

    #[test]
    fn ring_buffer_respects_window() {
        let mut l = Lbfgs::with_window(2);
        let mut loc = Location::new(Vector::from_vec(vec![1.0, 1.0]));
        loc.set_f(10.0);
        loc.set_g(Vector::from_vec(vec![2.0, 2.0]));
        l.init_direction(&loc).unwrap();

        for i in 1..=4 {
            let mut next = Location::new(Vector::from_vec(vec![1.0 - i as f64 * 0.1, 1.0 - i as f64 * 0.1]));
            next.set_f(10.0 - i as f64);
            next.set_g(Vector::from_vec(vec![2.0 - i as f64 * 0.2, 2.0 - i as f64 * 0.2]));
            l.next_direction(&next).unwrap();
        }
        assert!(l.s_hist.len() <= 2);
    }
}
