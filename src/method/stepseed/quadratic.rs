use crate::core::linalg::{norm_inf, Vector};
use crate::method::stepseed::StepSeeder;

/// Fits a quadratic to the last two function values to propose a step,
/// for directions (e.g. gradient descent) that are not intrinsically
/// scaled.
#[derive(Clone, Copy, Debug)]
pub struct Quadratic {
    init_factor: f64,
    alpha_min: f64,
    alpha_max: f64,
    near_equal_tol: f64,
}

impl Default for Quadratic {
    fn default() -> Self {
        Quadratic {
            init_factor: 1.0,
            alpha_min: 1e-3,
            alpha_max: 1.01,
            near_equal_tol: 1e-12,
        }
    }
}

impl Quadratic {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_init_factor(mut self, init_factor: f64) -> Self {
        self.init_factor = init_factor;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, alpha_min: f64, alpha_max: f64) -> Self {
        self.alpha_min = alpha_min;
        self.alpha_max = alpha_max;
        self
    }

    #[must_use]
    pub fn with_near_equal_tol(mut self, tol: f64) -> Self {
        self.near_equal_tol = tol;
        self
    }

    fn clamp(&self, alpha: f64) -> f64 {
        alpha.clamp(self.alpha_min, self.alpha_max)
    }
}

fn near_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

impl StepSeeder for Quadratic {
    fn name(&self) -> &'static str {
        "Quadratic"
    }

    fn seed_initial(&mut self, g: &Vector) -> f64 {
        self.clamp(self.init_factor / norm_inf(g))
    }

    fn seed_next(&mut self, f_prev: f64, f_curr: f64, g_prev_dot_d_prev: f64, alpha_prev: f64) -> f64 {
        let t = (f_prev - f_curr) / alpha_prev;
        let denom = t - g_prev_dot_d_prev;
        let alpha = if denom > 0.0 && !near_equal(f_prev, f_curr, self.near_equal_tol) {
            -(g_prev_dot_d_prev) * alpha_prev / (2.0 * denom)
        } else {
            2.0 * alpha_prev
        };
        self.clamp(alpha)
    }
}
