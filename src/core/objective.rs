//! Objective capability surface.
//!
//! The objective is polymorphic over a capability set, and the driver must
//! discover at runtime which capabilities a given objective supports, since
//! the chosen method can vary at runtime too. Capability discovery is a set
//! of boolean predicates, not runtime reflection, so this is modeled as a
//! single object-safe trait with default-failing methods plus boolean
//! predicates the implementer overrides alongside the methods they actually
//! provide, rather than argmin's per-capability traits resolved through
//! static generic bounds, which cannot express "pick BFGS or GuessAndCheck
//! at runtime depending on what the objective implements".

use std::collections::HashMap;

use crate::core::errors::{descent_error, Error};
use crate::core::linalg::{Matrix, Vector};
use crate::core::status::ObjectiveStatus;

/// User-implemented objective function.
///
/// Implementers provide any subset of `grad`/`func_grad`/`hess`/`status`,
/// flipping the matching `has_*` predicate to `true`. `func` is mandatory;
/// every method here must leave `x` unmodified.
pub trait Objective {
    fn func(&self, x: &Vector) -> Result<f64, Error>;

    fn grad(&self, _x: &Vector, _g: &mut Vector) -> Result<(), Error> {
        Err(descent_error!(MethodError, "objective does not implement Grad"))
    }

    /// Preferred over separate `func` + `grad` calls when both are needed.
    /// Default implementation falls back to calling them separately.
    fn func_grad(&self, x: &Vector, g: &mut Vector) -> Result<f64, Error> {
        let f = self.func(x)?;
        self.grad(x, g)?;
        Ok(f)
    }

    fn hess(&self, _x: &Vector, _h: &mut Matrix) -> Result<(), Error> {
        Err(descent_error!(MethodError, "objective does not implement Hessian"))
    }

    fn status(&self) -> Result<(ObjectiveStatus, Option<Error>), Error> {
        Ok((ObjectiveStatus::Continue, None))
    }

    fn has_grad(&self) -> bool {
        false
    }

    fn has_func_and_grad(&self) -> bool {
        self.has_grad()
    }

    fn has_hess(&self) -> bool {
        false
    }

    fn has_status(&self) -> bool {
        false
    }
}

/// Wraps a user [`Objective`], tracking per-capability call counts, the
/// way the teacher's `Problem<O>` wrapper tracks calls in a
/// `HashMap<&'static str, u64>`.
pub struct ObjectiveAdapter {
    obj: Box<dyn Objective>,
    counts: HashMap<&'static str, u64>,
}

impl ObjectiveAdapter {
    pub fn new(obj: Box<dyn Objective>) -> Self {
        ObjectiveAdapter {
            obj,
            counts: HashMap::new(),
        }
    }

    fn bump(&mut self, key: &'static str) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn counts(&self) -> &HashMap<&'static str, u64> {
        &self.counts
    }

    pub fn has_grad(&self) -> bool {
        self.obj.has_grad()
    }

    pub fn has_func_and_grad(&self) -> bool {
        self.obj.has_func_and_grad()
    }

    pub fn has_hess(&self) -> bool {
        self.obj.has_hess()
    }

    pub fn has_status(&self) -> bool {
        self.obj.has_status()
    }

    pub fn func(&mut self, x: &Vector) -> Result<f64, Error> {
        self.bump("func");
        self.obj
            .func(x)
            .map_err(|e| descent_error!(UserFunctionError, e.to_string()))
    }

    pub fn grad(&mut self, x: &Vector, g: &mut Vector) -> Result<(), Error> {
        self.bump("grad");
        self.obj
            .grad(x, g)
            .map_err(|e| descent_error!(UserFunctionError, e.to_string()))
    }

    pub fn func_grad(&mut self, x: &Vector, g: &mut Vector) -> Result<f64, Error> {
        self.bump("func_grad");
        self.obj
            .func_grad(x, g)
            .map_err(|e| descent_error!(UserFunctionError, e.to_string()))
    }

    pub fn hess(&mut self, x: &Vector, h: &mut Matrix) -> Result<(), Error> {
        self.bump("hess");
        self.obj
            .hess(x, h)
            .map_err(|e| descent_error!(UserFunctionError, e.to_string()))
    }

    pub fn status(&mut self) -> Result<(ObjectiveStatus, Option<Error>), Error> {
        self.bump("status");
        self.obj.status()
    }
}
