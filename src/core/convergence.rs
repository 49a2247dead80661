//! Convergence and status checks, including the windowed stall check.

use std::collections::VecDeque;

use crate::core::linalg::norm2;
use crate::core::location::Location;
use crate::core::settings::Settings;
use crate::core::stats::Stats;
use crate::core::status::Status;

/// The sliding window that fires `FunctionAbsoluteConvergence` or
/// `FunctionRelativeConvergence` when `k` consecutive Major boundaries show
/// no sufficient improvement.
///
/// `k`, `eps_abs`, and `eps_rel` default to a five-boundary window with
/// `1e-10` absolute and relative thresholds, tight enough not to preempt the
/// coarser gradient and function tolerances in ordinary use, and loose
/// enough to catch genuine stalls. See DESIGN.md for the full rationale.
pub struct ConvergenceWindow {
    k: usize,
    eps_abs: f64,
    eps_rel: f64,
    history: VecDeque<f64>,
}

impl Default for ConvergenceWindow {
    fn default() -> Self {
        ConvergenceWindow::new(5, 1e-10, 1e-10)
    }
}

impl ConvergenceWindow {
    pub fn new(k: usize, eps_abs: f64, eps_rel: f64) -> Self {
        ConvergenceWindow {
            k: k.max(2),
            eps_abs,
            eps_rel,
            history: VecDeque::with_capacity(k),
        }
    }

    /// Records a new Major-boundary function value and checks the window.
    pub fn push_and_check(&mut self, f: f64) -> Option<Status> {
        self.history.push_back(f);
        if self.history.len() > self.k {
            self.history.pop_front();
        }
        if self.history.len() < self.k {
            return None;
        }
        let oldest = self.history[0];
        let newest = *self.history.back().expect("just pushed");
        let abs_improve = oldest - newest;
        if abs_improve < self.eps_abs {
            return Some(Status::FunctionAbsoluteConvergence);
        }
        let rel_improve = abs_improve / oldest.abs().max(1.0);
        if rel_improve < self.eps_rel {
            return Some(Status::FunctionRelativeConvergence);
        }
        None
    }
}

/// Checks the per-Major-boundary convergence criteria (excluding the
/// resource caps, which the driver checks directly against `Stats` before
/// every evaluation).
pub fn check_major_convergence(
    loc: &Location,
    settings: &Settings,
    window: &mut ConvergenceWindow,
) -> Option<Status> {
    if let Some(g) = loc.g() {
        let scaled = norm2(g) / (loc.n() as f64).sqrt();
        if scaled <= settings.grad_abs_tol() {
            return Some(Status::GradientConvergence);
        }
    }
    if loc.f() <= settings.func_abs_tol() {
        return Some(Status::FunctionConvergence);
    }
    if loc.f() == f64::NEG_INFINITY {
        return Some(Status::FunctionNegativeInfinity);
    }
    window.push_and_check(loc.f())
}

/// Checks the driver's resource caps. Called once per loop iteration,
/// before evaluating the objective.
pub fn check_caps(settings: &Settings, stats: &Stats, elapsed: std::time::Duration) -> Option<Status> {
    if settings.max_iterations() > 0 && stats.major_iters() >= settings.max_iterations() {
        return Some(Status::IterationLimit);
    }
    if !settings.max_runtime().is_zero() && elapsed >= settings.max_runtime() {
        return Some(Status::RuntimeLimit);
    }
    if settings.max_func_evals() > 0
        && stats.func_evals() + stats.func_grad_evals() >= settings.max_func_evals()
    {
        return Some(Status::FuncEvalLimit);
    }
    if settings.max_grad_evals() > 0
        && stats.grad_evals() + stats.func_grad_evals() >= settings.max_grad_evals()
    {
        return Some(Status::GradEvalLimit);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::linalg::Vector;

    #[test]
    fn gradient_convergence_fires_when_scaled_norm_small() {
        let mut loc = Location::new(Vector::from_vec(vec![1.0, 1.0]));
        loc.set_f(1.0);
        loc.set_g(Vector::from_vec(vec![1e-8, 1e-8]));
        let settings = Settings::new().with_grad_abs_tol(1e-6);
        let mut window = ConvergenceWindow::default();
        assert_eq!(
            check_major_convergence(&loc, &settings, &mut window),
            Some(Status::GradientConvergence)
        );
    }

    #[test]
    fn function_convergence_fires_at_threshold() {
        let mut loc = Location::new(Vector::from_vec(vec![0.0]));
        loc.set_f(-10.0);
        let settings = Settings::new().with_func_abs_tol(0.0);
        let mut window = ConvergenceWindow::default();
        assert_eq!(
            check_major_convergence(&loc, &settings, &mut window),
            Some(Status::FunctionConvergence)
        );
    }

    #[test]
    fn window_fires_after_k_stalled_boundaries() {
        let mut window = ConvergenceWindow::new(3, 1e-8, 1e-8);
        assert_eq!(window.push_and_check(10.0), None);
        assert_eq!(window.push_and_check(10.0 - 1e-9), None);
        assert_eq!(
            window.push_and_check(10.0 - 2e-9),
            Some(Status::FunctionAbsoluteConvergence)
        );
    }

    #[test]
    fn window_does_not_fire_on_real_progress() {
        let mut window = ConvergenceWindow::new(3, 1e-8, 1e-8);
        assert_eq!(window.push_and_check(10.0), None);
        assert_eq!(window.push_and_check(5.0), None);
        assert_eq!(window.push_and_check(1.0), None);
    }

    #[test]
    fn iteration_cap_fires() {
        let settings = Settings::new().with_max_iterations(5);
        let mut stats = Stats::new();
        for _ in 0..5 {
            stats.record_major();
        }
        assert_eq!(
            check_caps(&settings, &stats, std::time::Duration::ZERO),
            Some(Status::IterationLimit)
        );
    }
}
