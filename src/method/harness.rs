//! Line-search harness: composes a [`DirectionEngine`] with a
//! [`LineSearcher`], presenting the uniform [`Method`] surface the driver
//! dispatches to.

use crate::core::errors::{descent_error, Error};
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::linalg::{dot, Vector};
use crate::core::location::Location;
use crate::core::method::Method;
use crate::method::direction::DirectionEngine;
use crate::method::linesearch::{LineSearchOutcome, LineSearcher};

/// Tracks why the harness re-proposed the same `x` instead of moving on
/// after the most recent call: the two "we need one more cheap fetch
/// before we can keep going" cases that don't fit the Major/Minor shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    None,
    /// The line search just finished on a function-only evaluation; we
    /// asked for a gradient at the accepted point and are waiting for it.
    GradAfterSearch,
    /// The next direction engine needs a Hessian that the accepted point
    /// does not yet carry; we asked for one and are waiting for it.
    HessianForNext,
}

pub struct LineSearchHarness<E: DirectionEngine, L: LineSearcher> {
    engine: E,
    searcher: L,
    d: Vector,
    x0: Vector,
    pending: Pending,
}

impl<E: DirectionEngine, L: LineSearcher> LineSearchHarness<E, L> {
    pub fn new(engine: E, searcher: L) -> Self {
        LineSearchHarness {
            engine,
            searcher,
            d: Vector::zeros(0),
            x0: Vector::zeros(0),
            pending: Pending::None,
        }
    }

    /// Asks the engine for the next direction and restarts the line
    /// searcher there. If the engine needs a Hessian we don't yet have at
    /// `loc`, fetch one first instead.
    fn start_new_direction(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        if self.engine.needs_hessian() && loc.h().is_none() {
            self.pending = Pending::HessianForNext;
            x_next.copy_from(loc.x());
            return Ok((IterationKind::Sub, EvaluationRequest::FuncGradHess));
        }

        let (d, alpha0) = self.engine.next_direction(loc)?;
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "harness requires a gradient to start a direction"))?;
        let gd = dot(g, &d);
        if gd >= 0.0 {
            return Err(descent_error!(
                NonDescentDirection,
                format!("g.d = {gd} is not negative")
            ));
        }

        self.x0 = loc.x().clone();
        self.d = d;
        let (alpha, eval) = self.searcher.init(loc.f(), gd, alpha0)?;
        x_next.copy_from(&(&self.x0 + alpha * &self.d));
        Ok((IterationKind::Major, eval))
    }
}

impl<E: DirectionEngine, L: LineSearcher> Method for LineSearchHarness<E, L> {
    fn name(&self) -> &'static str {
        self.engine.name()
    }

    fn init(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        self.pending = Pending::None;
        let (d, alpha0) = self.engine.init_direction(loc)?;
        let g = loc
            .g()
            .ok_or_else(|| descent_error!(MethodError, "harness requires a gradient at the start"))?;
        let gd = dot(g, &d);
        if gd >= 0.0 {
            return Err(descent_error!(
                NonDescentDirection,
                format!("g.d = {gd} is not negative")
            ));
        }

        self.x0 = loc.x().clone();
        self.d = d;
        let (alpha, eval) = self.searcher.init(loc.f(), gd, alpha0)?;
        x_next.copy_from(&(&self.x0 + alpha * &self.d));
        Ok((IterationKind::Major, eval))
    }

    fn iterate(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        match self.pending {
            Pending::GradAfterSearch | Pending::HessianForNext => {
                self.pending = Pending::None;
                self.start_new_direction(loc, x_next)
            }
            Pending::None => {
                let phi_prime = loc.g().map(|g| dot(g, &self.d));
                match self.searcher.observe(loc.f(), phi_prime)? {
                    LineSearchOutcome::Finished {
                        last_eval_was_func_only,
                    } => {
                        if last_eval_was_func_only && loc.g().is_none() {
                            self.pending = Pending::GradAfterSearch;
                            x_next.copy_from(loc.x());
                            Ok((IterationKind::Sub, EvaluationRequest::GradOnly))
                        } else {
                            self.start_new_direction(loc, x_next)
                        }
                    }
                    LineSearchOutcome::Continue { alpha, eval } => {
                        let candidate = &self.x0 + alpha * &self.d;
                        if candidate == *loc.x() {
                            return Err(descent_error!(
                                NoProgress,
                                "line search proposed the same point already evaluated"
                            ));
                        }
                        x_next.copy_from(&candidate);
                        Ok((IterationKind::Minor, eval))
                    }
                }
            }
        }
    }
}
