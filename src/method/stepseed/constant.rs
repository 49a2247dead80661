use crate::core::linalg::Vector;
use crate::method::stepseed::StepSeeder;

/// Always proposes the same fixed step.
#[derive(Clone, Copy, Debug)]
pub struct Constant {
    alpha0: f64,
}

impl Constant {
    pub fn new(alpha0: f64) -> Self {
        Constant { alpha0 }
    }
}

impl StepSeeder for Constant {
    fn name(&self) -> &'static str {
        "Constant"
    }

    fn seed_initial(&mut self, _g: &Vector) -> f64 {
        self.alpha0
    }

    fn seed_next(&mut self, _f_prev: f64, _f_curr: f64, _g_prev_dot_d_prev: f64, _alpha_prev: f64) -> f64 {
        self.alpha0
    }
}
