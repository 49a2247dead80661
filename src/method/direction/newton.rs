//! Pure Newton.
//!
//! Unlike the other four direction engines, pure Newton is not composed
//! with a line searcher by the harness: each major iteration takes the
//! full step `x - H^-1 g` directly, so this implements [`Method`] itself
//! rather than [`DirectionEngine`].

use crate::core::errors::{descent_error, Error};
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::linalg::{chol_solve, cholesky_factor_sym, Vector};
use crate::core::location::Location;
use crate::core::method::Method;

pub struct PureNewton {
    started: bool,
}

impl PureNewton {
    pub fn new() -> Self {
        PureNewton { started: false }
    }

    fn compute_step(&self, loc: &Location) -> Result<Vector, Error> {
        let h = loc
            .h()
            .ok_or_else(|| descent_error!(MethodError, "pure Newton requires a Hessian"))?;
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "pure Newton requires a gradient"))?;
        let l = cholesky_factor_sym(h)?;
        let mut d = Vector::zeros(h.nrows());
        chol_solve(&l, g, &mut d);
        Ok(-d)
    }
}

impl Default for PureNewton {
    fn default() -> Self {
        PureNewton::new()
    }
}

impl Method for PureNewton {
    fn name(&self) -> &'static str {
        "PureNewton"
    }

    fn init(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        self.started = true;
        x_next.copy_from(loc.x());
        Ok((IterationKind::None, EvaluationRequest::FuncGradHess))
    }

    fn iterate(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        let d = self.compute_step(loc)?;
        x_next.copy_from(&(loc.x() + &d));
        Ok((IterationKind::Major, EvaluationRequest::FuncGradHess))
    }
}
