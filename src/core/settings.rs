//! Settings: explicit, enumerated run options.

use std::time::Duration;

use crate::core::errors::{descent_error, Error};
use crate::core::linalg::Vector;
use crate::core::recorder::{Recorder, RecorderMode, Recorders};

/// Run options. Every cap defaults to "off" (zero), and every tolerance
/// defaults to its documented engine value. Construct with [`Settings::new`]
/// and chain the `with_*` builders, following the teacher's
/// `Executor::configure` idiom.
pub struct Settings {
    func_abs_tol: f64,
    grad_abs_tol: f64,
    step_tol: f64,
    max_iterations: u64,
    max_runtime: Duration,
    max_func_evals: u64,
    max_grad_evals: u64,
    use_initial_data: bool,
    initial_f: f64,
    initial_grad: Option<Vector>,
    line_search_tol: f64,
    recorders: Recorders,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            func_abs_tol: f64::NEG_INFINITY,
            grad_abs_tol: 1e-6,
            step_tol: 0.0,
            max_iterations: 0,
            max_runtime: Duration::ZERO,
            max_func_evals: 0,
            max_grad_evals: 0,
            use_initial_data: false,
            initial_f: f64::NAN,
            initial_grad: None,
            line_search_tol: 0.0,
            recorders: Recorders::new(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_func_abs_tol(mut self, tol: f64) -> Self {
        self.func_abs_tol = tol;
        self
    }

    #[must_use]
    pub fn with_grad_abs_tol(mut self, tol: f64) -> Self {
        self.grad_abs_tol = tol;
        self
    }

    #[must_use]
    pub fn with_step_tol(mut self, tol: f64) -> Self {
        self.step_tol = tol;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, cap: u64) -> Self {
        self.max_iterations = cap;
        self
    }

    #[must_use]
    pub fn with_max_runtime(mut self, cap: Duration) -> Self {
        self.max_runtime = cap;
        self
    }

    #[must_use]
    pub fn with_max_func_evals(mut self, cap: u64) -> Self {
        self.max_func_evals = cap;
        self
    }

    #[must_use]
    pub fn with_max_grad_evals(mut self, cap: u64) -> Self {
        self.max_grad_evals = cap;
        self
    }

    #[must_use]
    pub fn with_initial_data(mut self, f0: f64, g0: Option<Vector>) -> Self {
        self.use_initial_data = true;
        self.initial_f = f0;
        self.initial_grad = g0;
        self
    }

    #[must_use]
    pub fn with_line_search_tol(mut self, tol: f64) -> Self {
        self.line_search_tol = tol;
        self
    }

    #[must_use]
    pub fn with_recorder(mut self, recorder: Box<dyn Recorder>, mode: RecorderMode) -> Self {
        self.recorders.add(recorder, mode);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.grad_abs_tol < 0.0 {
            return Err(descent_error!(
                InvalidSettings,
                "grad_abs_tol must be non-negative"
            ));
        }
        if self.step_tol < 0.0 {
            return Err(descent_error!(
                InvalidSettings,
                "step_tol must be non-negative"
            ));
        }
        Ok(())
    }

    pub fn func_abs_tol(&self) -> f64 {
        self.func_abs_tol
    }

    pub fn grad_abs_tol(&self) -> f64 {
        self.grad_abs_tol
    }

    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn max_runtime(&self) -> Duration {
        self.max_runtime
    }

    pub fn max_func_evals(&self) -> u64 {
        self.max_func_evals
    }

    pub fn max_grad_evals(&self) -> u64 {
        self.max_grad_evals
    }

    pub fn use_initial_data(&self) -> bool {
        self.use_initial_data
    }

    pub fn initial_f(&self) -> f64 {
        self.initial_f
    }

    pub fn initial_grad(&self) -> Option<&Vector> {
        self.initial_grad.as_ref()
    }

    pub fn line_search_tol(&self) -> f64 {
        self.line_search_tol
    }

    pub(crate) fn recorders_mut(&mut self) -> &mut Recorders {
        &mut self.recorders
    }
}
