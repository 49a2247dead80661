//! Bisection (strong-Wolfe) line search.

use crate::core::errors::{descent_error, Error};
use crate::core::eval::EvaluationRequest;
use crate::method::linesearch::{LineSearchOutcome, LineSearcher};
use crate::method::wolfe::strong_wolfe;

/// Strong-Wolfe bisection/expansion line search, for methods needing
/// curvature information (BFGS, L-BFGS, modified Newton).
#[derive(Clone, Debug)]
pub struct Bisection {
    c1: f64,
    c2: f64,
    f0: f64,
    g0: f64,
    alpha_lo: f64,
    f_lo: f64,
    alpha_hi: Option<f64>,
    alpha: f64,
}

impl Default for Bisection {
    fn default() -> Self {
        Bisection::new()
    }
}

impl Bisection {
    pub fn new() -> Self {
        Bisection {
            c1: 0.0,
            c2: 0.9,
            f0: 0.0,
            g0: 0.0,
            alpha_lo: 0.0,
            f_lo: 0.0,
            alpha_hi: None,
            alpha: 0.0,
        }
    }

    #[must_use]
    pub fn with_c2(mut self, c2: f64) -> Self {
        self.c2 = c2;
        self
    }
}

impl LineSearcher for Bisection {
    fn name(&self) -> &'static str {
        "Bisection"
    }

    fn init(&mut self, f0: f64, g0_dot_d: f64, alpha0: f64) -> Result<(f64, EvaluationRequest), Error> {
        debug_assert!(
            g0_dot_d < 0.0,
            "bisection requires a descent direction; the harness checks this before calling init"
        );
        self.f0 = f0;
        self.g0 = g0_dot_d;
        self.alpha_lo = 0.0;
        self.f_lo = f0;
        self.alpha_hi = None;
        self.alpha = alpha0;
        Ok((self.alpha, EvaluationRequest::FuncAndGrad))
    }

    fn observe(&mut self, f: f64, phi_prime: Option<f64>) -> Result<LineSearchOutcome, Error> {
        let g = phi_prime.expect("bisection always requests FuncAndGrad");

        if strong_wolfe(f, self.f0, self.g0, g, self.alpha, self.c1, self.c2) {
            return Ok(LineSearchOutcome::Finished {
                last_eval_was_func_only: false,
            });
        }

        let prev_alpha = self.alpha;

        match self.alpha_hi {
            None => {
                if g > 0.0 {
                    self.alpha_hi = Some(self.alpha);
                    self.alpha = (self.alpha_lo + self.alpha_hi.unwrap()) / 2.0;
                } else if f <= self.f_lo && g < 0.0 {
                    self.alpha_lo = self.alpha;
                    self.f_lo = f;
                    self.alpha *= 2.0;
                } else {
                    self.alpha_hi = Some(self.alpha);
                    self.alpha = (self.alpha_lo + self.alpha_hi.unwrap()) / 2.0;
                }
            }
            Some(hi) => {
                if g < 0.0 && f <= self.f_lo {
                    self.alpha_lo = self.alpha;
                    self.f_lo = f;
                } else if g < 0.0 && f > self.f_lo {
                    self.alpha_hi = Some(self.alpha);
                } else {
                    // g >= 0.0
                    self.alpha_hi = Some(self.alpha);
                }
                let _ = hi;
                self.alpha = (self.alpha_lo + self.alpha_hi.unwrap()) / 2.0;
            }
        }

        if self.alpha == prev_alpha {
            return Err(descent_error!(
                LineSearchFailure,
                "bisection bracket collapsed (next proposal equals current)"
            ));
        }

        Ok(LineSearchOutcome::Continue {
            alpha: self.alpha,
            eval: EvaluationRequest::FuncAndGrad,
        })
    }

    fn current_alpha(&self) -> f64 {
        self.alpha
    }
}
