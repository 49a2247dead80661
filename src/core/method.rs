//! The uniform surface the driver dispatches to every iteration.
//!
//! A `Method` is either a direction engine producing a full step directly
//! (pure Newton) or the line-search harness composing a direction engine
//! with a line searcher (gradient descent, BFGS, L-BFGS, modified Newton).
//! Boxed as `dyn Method` because the driver picks a concrete method at
//! runtime based on the objective's capabilities, which rules out argmin's
//! statically-generic `Solver<O, I>` shape.

use crate::core::errors::Error;
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::linalg::Vector;
use crate::core::location::Location;

pub trait Method {
    /// Recorder-visible name, in the spirit of the teacher's `Solver::NAME`.
    fn name(&self) -> &'static str;

    /// Called exactly once, at the starting `Location`. Writes the first
    /// point to evaluate into `x_next`.
    fn init(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error>;

    /// Called every time the driver has evaluated `x_next` and updated
    /// `loc` in place. Writes the next point to evaluate into `x_next`.
    fn iterate(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error>;
}
