//! Stats: counters the driver accumulates over a run.

use std::time::Duration;

use crate::core::eval::EvaluationRequest;

/// Run-level counters and the last observed scaled gradient norm.
///
/// Every counter here is monotonically non-decreasing across a run; the
/// driver is the only writer.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    major_iters: u64,
    func_evals: u64,
    grad_evals: u64,
    func_grad_evals: u64,
    hess_evals: u64,
    runtime: Duration,
    grad_norm: Option<f64>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn major_iters(&self) -> u64 {
        self.major_iters
    }

    pub fn func_evals(&self) -> u64 {
        self.func_evals
    }

    pub fn grad_evals(&self) -> u64 {
        self.grad_evals
    }

    pub fn func_grad_evals(&self) -> u64 {
        self.func_grad_evals
    }

    pub fn hess_evals(&self) -> u64 {
        self.hess_evals
    }

    pub fn runtime(&self) -> Duration {
        self.runtime
    }

    pub fn grad_norm(&self) -> Option<f64> {
        self.grad_norm
    }

    pub fn total_evals(&self) -> u64 {
        self.func_evals + self.grad_evals + self.func_grad_evals + self.hess_evals
    }

    pub(crate) fn record_major(&mut self) {
        self.major_iters += 1;
    }

    pub(crate) fn record_eval(&mut self, req: EvaluationRequest) {
        match req {
            EvaluationRequest::NoEval => {}
            EvaluationRequest::FuncOnly => self.func_evals += 1,
            EvaluationRequest::GradOnly => self.grad_evals += 1,
            EvaluationRequest::FuncAndGrad => self.func_grad_evals += 1,
            EvaluationRequest::FuncGradHess => {
                self.func_grad_evals += 1;
                self.hess_evals += 1;
            }
        }
    }

    pub(crate) fn set_runtime(&mut self, runtime: Duration) {
        self.runtime = runtime;
    }

    pub(crate) fn set_grad_norm(&mut self, grad_norm: f64) {
        self.grad_norm = Some(grad_norm);
    }
}
