//! The outer loop, styled on the teacher's `Executor`: it owns the sole
//! mutable [`Location`] and [`Stats`], evaluates only what the dispatched
//! [`Method`] asks for, checks convergence and the resource caps, and
//! returns a [`DriverResult`].

use instant::Instant;

use crate::core::convergence::{check_caps, check_major_convergence, ConvergenceWindow};
use crate::core::errors::{descent_error, DescentError, Error};
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::kv::KV;
use crate::core::linalg::{norm2, Matrix, Vector};
use crate::core::location::Location;
use crate::core::method::Method;
use crate::core::objective::{Objective, ObjectiveAdapter};
use crate::core::result::DriverResult;
use crate::core::settings::Settings;
use crate::core::stats::Stats;
use crate::core::status::{ObjectiveStatus, Status};
use crate::method::direction::Bfgs;
use crate::method::guess_and_check::GuessAndCheck;
use crate::method::harness::LineSearchHarness;
use crate::method::linesearch::Bisection;

/// Drives a single run to completion. Consumed by [`Driver::run`]; build
/// with [`Driver::new`] from the user's objective, starting point,
/// settings, and (optionally) an explicit method.
pub struct Driver {
    objective: ObjectiveAdapter,
    x0: Vector,
    settings: Settings,
    method: Box<dyn Method>,
}

/// The default pick when the caller supplies no method: BFGS+Bisection
/// when a gradient is available, guess-and-check otherwise.
/// `ModifiedNewton`/`PureNewton` are never auto-selected.
fn default_method(has_grad: bool, x0: &Vector) -> Box<dyn Method> {
    if has_grad {
        Box::new(LineSearchHarness::new(Bfgs::new(), Bisection::new()))
    } else {
        Box::new(GuessAndCheck::around(x0, 10.0))
    }
}

impl Driver {
    /// Builds a driver. `method = None` triggers the default pick
    /// described on [`default_method`].
    pub fn new(
        objective: Box<dyn Objective>,
        x0: Vector,
        settings: Settings,
        method: Option<Box<dyn Method>>,
    ) -> Result<Self, Error> {
        settings.validate()?;
        let objective = ObjectiveAdapter::new(objective);
        let has_grad = objective.has_grad();
        let method = method.unwrap_or_else(|| default_method(has_grad, &x0));
        Ok(Driver {
            objective,
            x0,
            settings,
            method,
        })
    }

    /// Validates, populates the initial [`Location`], then alternates
    /// between the dispatched method and the objective until convergence,
    /// a cap, a cancellation, or a fatal error.
    pub fn run(mut self) -> Result<DriverResult, Error> {
        if self.x0.is_empty() {
            return Err(Error::from(DescentError::ZeroDimensional));
        }

        let start = Instant::now();
        let n = self.x0.len();
        let mut stats = Stats::new();
        let mut window = ConvergenceWindow::default();
        let mut loc = Location::new(self.x0.clone());

        if self.settings.use_initial_data() {
            self.seed_initial_data(&mut loc)?;
        } else {
            let initial_eval = if self.objective.has_hess() {
                EvaluationRequest::FuncGradHess
            } else if self.objective.has_grad() {
                EvaluationRequest::FuncAndGrad
            } else {
                EvaluationRequest::FuncOnly
            };
            self.evaluate_initial(&mut loc, initial_eval, &mut stats)?;
        }

        let mut x_next = Vector::zeros(n);
        let (mut kind, mut eval_request) = self.method.init(&loc, &mut x_next)?;

        let kv = KV::new().with("n", n);
        self.settings
            .recorders_mut()
            .observe_init(self.method.name(), &loc, &kv)?;

        let mut best = loc.clone();
        // The starting point always counts as a boundary worth checking;
        // thereafter only a Major transition puts `loc` at one. A Minor or
        // Sub fetch must not feed the convergence window or trip
        // convergence on an interior line-search trial.
        let mut at_major_boundary = true;

        let status = loop {
            if at_major_boundary {
                if let Some(status) = check_major_convergence(&loc, &self.settings, &mut window) {
                    break status;
                }
            }
            if let Some(status) = check_caps(&self.settings, &stats, start.elapsed()) {
                break status;
            }
            if self.objective.has_status() {
                let (obj_status, err) = self.objective.status()?;
                if let Some(e) = err {
                    return Err(e);
                }
                if obj_status == ObjectiveStatus::UserRequested {
                    break Status::UserRequested;
                }
            }

            self.evaluate(&mut loc, &x_next, eval_request, &mut stats)?;

            let is_new_best = kind == IterationKind::Major && loc.f() < best.f();
            if kind == IterationKind::Major {
                stats.record_major();
                if let Some(g) = loc.g() {
                    stats.set_grad_norm(norm2(g) / (n as f64).sqrt());
                }
                if is_new_best {
                    best = loc.clone();
                }
            }
            at_major_boundary = kind == IterationKind::Major;

            self.settings
                .recorders_mut()
                .observe_transition(&loc, eval_request, kind, &stats, is_new_best)?;

            let (next_kind, next_eval) = self.method.iterate(&loc, &mut x_next)?;
            kind = next_kind;
            eval_request = next_eval;
        };

        stats.set_runtime(start.elapsed());
        self.settings.recorders_mut().observe_transition(
            &loc,
            EvaluationRequest::NoEval,
            IterationKind::PostIteration,
            &stats,
            false,
        )?;

        Ok(DriverResult::new(
            best.x().clone(),
            best.f(),
            best.g().cloned(),
            best.h().cloned(),
            stats,
            status,
        ))
    }

    /// The `use_initial_data` branch: trusts the caller-supplied `(f0, g0)`
    /// instead of spending an evaluation on the starting point.
    fn seed_initial_data(&mut self, loc: &mut Location) -> Result<(), Error> {
        let f0 = self.settings.initial_f();
        if f0.is_nan() {
            return Err(Error::from(DescentError::InitialFuncIsNaN));
        }
        if f0.is_infinite() {
            return Err(Error::from(DescentError::InitialFuncIsInf));
        }
        loc.set_f(f0);

        if let Some(g0) = self.settings.initial_grad() {
            if g0.iter().any(|v| v.is_nan()) {
                return Err(Error::from(DescentError::InitialGradIsNaN));
            }
            if g0.iter().any(|v| v.is_infinite()) {
                return Err(Error::from(DescentError::InitialGradIsInf));
            }
            loc.set_g(g0.clone());
        }
        Ok(())
    }

    /// The from-scratch branch: evaluates the starting point according to
    /// the richest capability the objective offers.
    fn evaluate_initial(
        &mut self,
        loc: &mut Location,
        req: EvaluationRequest,
        stats: &mut Stats,
    ) -> Result<(), Error> {
        let n = loc.n();
        let f = match req {
            EvaluationRequest::FuncOnly => self.objective.func(loc.x())?,
            EvaluationRequest::FuncAndGrad | EvaluationRequest::FuncGradHess => {
                let mut g = Vector::zeros(n);
                let f = self.objective.func_grad(loc.x(), &mut g)?;
                if g.iter().any(|v| v.is_nan()) {
                    return Err(Error::from(DescentError::InitialGradIsNaN));
                }
                if g.iter().any(|v| v.is_infinite()) {
                    return Err(Error::from(DescentError::InitialGradIsInf));
                }
                loc.set_g(g);
                f
            }
            EvaluationRequest::GradOnly | EvaluationRequest::NoEval => {
                unreachable!("initial evaluation request is always Func*, never {req:?}")
            }
        };
        if f.is_nan() {
            return Err(Error::from(DescentError::InitialFuncIsNaN));
        }
        if f.is_infinite() {
            return Err(Error::from(DescentError::InitialFuncIsInf));
        }
        loc.set_f(f);

        if req == EvaluationRequest::FuncGradHess {
            let mut h = Matrix::zeros(n, n);
            self.objective.hess(loc.x(), &mut h)?;
            loc.set_h(h);
        }

        stats.record_eval(req);
        Ok(())
    }

    /// Evaluates `x_next` per `req`, updating `loc` in place.
    ///
    /// When `x_next` is bit-identical to `loc.x()` (the "Sub" fetch of a
    /// capability missing at an already-accepted point) the existing
    /// `f`/`g`/`h` are preserved instead of being wiped by a fresh `set_x`.
    fn evaluate(
        &mut self,
        loc: &mut Location,
        x_next: &Vector,
        req: EvaluationRequest,
        stats: &mut Stats,
    ) -> Result<(), Error> {
        let n = x_next.len();
        if *x_next != *loc.x() {
            loc.set_x(x_next.clone());
        }

        match req {
            EvaluationRequest::NoEval => {}
            EvaluationRequest::FuncOnly => {
                let f = self.objective.func(loc.x())?;
                if f.is_nan() {
                    return Err(descent_error!(MethodError, "function value is NaN"));
                }
                loc.set_f(f);
            }
            EvaluationRequest::GradOnly => {
                let mut g = Vector::zeros(n);
                self.objective.grad(loc.x(), &mut g)?;
                if g.iter().any(|v| v.is_nan()) {
                    return Err(descent_error!(MethodError, "gradient contains NaN"));
                }
                loc.set_g(g);
            }
            EvaluationRequest::FuncAndGrad | EvaluationRequest::FuncGradHess => {
                let mut g = Vector::zeros(n);
                let f = self.objective.func_grad(loc.x(), &mut g)?;
                if f.is_nan() {
                    return Err(descent_error!(MethodError, "function value is NaN"));
                }
                if g.iter().any(|v| v.is_nan()) {
                    return Err(descent_error!(MethodError, "gradient contains NaN"));
                }
                loc.set_f(f);
                loc.set_g(g);
                if req == EvaluationRequest::FuncGradHess {
                    let mut h = Matrix::zeros(n, n);
                    self.objective.hess(loc.x(), &mut h)?;
                    loc.set_h(h);
                }
            }
        }
        stats.record_eval(req);
        Ok(())
    }
}
