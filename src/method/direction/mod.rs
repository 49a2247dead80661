//! Direction engines: produce descent directions from the current
//! gradient and internal state.

mod bfgs;
mod gradient_descent;
mod lbfgs;
mod modified_newton;
mod newton;

pub use bfgs::Bfgs;
pub use gradient_descent::GradientDescent;
pub use lbfgs::Lbfgs;
pub use modified_newton::ModifiedNewton;
pub use newton::PureNewton;

use crate::core::errors::Error;
use crate::core::linalg::Vector;
use crate::core::location::Location;

/// Produces descent directions across a run. `init_direction` is called
/// exactly once; `next_direction` at every subsequent major boundary.
pub trait DirectionEngine {
    fn name(&self) -> &'static str;

    /// Whether this engine reads `loc.h()`. The driver and harness use
    /// this to know to request `FuncGradHess` instead of `FuncAndGrad`.
    fn needs_hessian(&self) -> bool {
        false
    }

    fn init_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error>;

    fn next_direction(&mut self, loc: &Location) -> Result<(Vector, f64), Error>;
}
