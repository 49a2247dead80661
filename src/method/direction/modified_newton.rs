//! Modified Newton: regularizes an indefinite Hessian via a growing
//! Levenberg-Marquardt-style ridge until Cholesky succeeds.

use crate::core::errors::{descent_error, Error};
use crate::core::linalg::{chol_solve, cholesky_factor_sym, Vector};
use crate::core::location::Location;
use crate::method::direction::DirectionEngine;

const DEFAULT_GROWTH: f64 = 5.0;
const MIN_TAU: f64 = 1e-3;
const MAX_INNER_ITERS: usize = 64;

pub struct ModifiedNewton {
    tau: f64,
    growth: f64,
}

impl ModifiedNewton {
    pub fn new() -> Self {
        ModifiedNewton {
            tau: 0.0,
            growth: DEFAULT_GROWTH,
        }
    }

    #[must_use]
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    fn compute_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        let h = loc
            .h()
            .ok_or_else(|| descent_error!(MethodError, "modified Newton requires a Hessian"))?;
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "modified Newton requires a gradient"))?;
        let n = h.nrows();

        let a_min = (0..n).map(|i| h[(i, i)]).fold(f64::INFINITY, f64::min);
        let mut tau = if a_min > 0.0 {
            0.0
        } else if self.tau == 0.0 {
            -a_min + MIN_TAU
        } else {
            self.tau
        };

        for _ in 0..MAX_INNER_ITERS {
            let mut b = h.clone();
            for i in 0..n {
                b[(i, i)] += tau;
            }
            match cholesky_factor_sym(&b) {
                Ok(l) => {
                    let mut d = Vector::zeros(n);
                    chol_solve(&l, g, &mut d);
                    self.tau = tau;
                    return Ok((-d, 1.0));
                }
                Err(_) => {
                    tau = (self.growth * tau).max(MIN_TAU);
                }
            }
        }

        Err(descent_error!(
            HessianNotPositiveDefinite,
            "modified Newton's tau-growth loop did not converge"
        ))
    }
}

impl Default for ModifiedNewton {
    fn default() -> Self {
        ModifiedNewton::new()
    }
}

impl DirectionEngine for ModifiedNewton {
    fn name(&self) -> &'static str {
        "ModifiedNewton"
    }

    fn needs_hessian(&self) -> bool {
        true
    }

    fn init_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        self.tau = 0.0;
        self.compute_direction(loc)
    }

    fn next_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error> {
        self.compute_direction(loc)
    }
}
