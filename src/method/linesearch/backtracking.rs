//! Backtracking line search.

use crate::core::errors::{descent_error, Error};
use crate::core::eval::EvaluationRequest;
use crate::method::linesearch::{LineSearchOutcome, LineSearcher};
use crate::method::wolfe::armijo;

const ALPHA_FLOOR: f64 = 1e-20;

/// Armijo-only backtracking line search, for methods that only need
/// sufficient decrease (gradient descent).
#[derive(Clone, Debug)]
pub struct Backtracking {
    shrink: f64,
    c1: f64,
    max_iters: u32,
    f0: f64,
    g0: f64,
    alpha: f64,
    iter: u32,
}

impl Default for Backtracking {
    fn default() -> Self {
        Backtracking::new()
    }
}

impl Backtracking {
    pub fn new() -> Self {
        Backtracking {
            shrink: 0.5,
            c1: 1e-4,
            max_iters: 30,
            f0: 0.0,
            g0: 0.0,
            alpha: 0.0,
            iter: 0,
        }
    }

    #[must_use]
    pub fn with_shrink(mut self, shrink: f64) -> Self {
        self.shrink = shrink;
        self
    }

    #[must_use]
    pub fn with_c1(mut self, c1: f64) -> Self {
        self.c1 = c1;
        self
    }

    #[must_use]
    pub fn with_max_iters(mut self, max_iters: u32) -> Self {
        self.max_iters = max_iters;
        self
    }
}

impl LineSearcher for Backtracking {
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn init(&mut self, f0: f64, g0_dot_d: f64, alpha0: f64) -> Result<(f64, EvaluationRequest), Error> {
        self.f0 = f0;
        self.g0 = g0_dot_d;
        self.alpha = alpha0;
        self.iter = 0;
        Ok((self.alpha, EvaluationRequest::FuncOnly))
    }

    fn observe(&mut self, f: f64, _phi_prime: Option<f64>) -> Result<LineSearchOutcome, Error> {
        if armijo(f, self.f0, self.g0, self.alpha, self.c1) {
            return Ok(LineSearchOutcome::Finished {
                last_eval_was_func_only: true,
            });
        }
        self.iter += 1;
        if self.iter >= self.max_iters {
            return Err(descent_error!(
                LineSearchFailure,
                "backtracking exceeded its iteration cap"
            ));
        }
        self.alpha *= self.shrink;
        if self.alpha < ALPHA_FLOOR {
            return Err(descent_error!(
                LineSearchFailure,
                "backtracking step size collapsed below the floor"
            ));
        }
        Ok(LineSearchOutcome::Continue {
            alpha: self.alpha,
            eval: EvaluationRequest::FuncOnly,
        })
    }

    fn current_alpha(&self) -> f64 {
        self.alpha
    }
}
