//! Non-fatal run outcomes.
//!
//! Fatal conditions (a non-descent direction, a stalled line search, an
//! indefinite Hessian the engine could not regularize, a recorder or
//! objective callback failure) end the run by returning `Err` from
//! [`crate::core::driver::Driver::run`] carrying the matching
//! [`crate::core::errors::DescentError`] variant. Everything that is a
//! legitimate way for optimization to conclude, convergence, a cap, or a
//! cooperative cancellation, is reported as `Ok` with one of these `Status`
//! values instead.

use std::fmt;

/// The reason a run concluded, when that reason was not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// `||g||_2 / sqrt(n) <= grad_abs_tol` at a Major boundary.
    GradientConvergence,
    /// `f <= func_abs_tol` at a Major boundary.
    FunctionConvergence,
    /// No absolute improvement of at least `eps_abs` over the convergence window.
    FunctionAbsoluteConvergence,
    /// No relative improvement of at least `eps_rel` over the convergence window.
    FunctionRelativeConvergence,
    /// `f == -inf` was observed; a valid terminal state, not an error.
    FunctionNegativeInfinity,
    /// The objective's Status capability requested cancellation.
    UserRequested,
    /// Major-iteration cap reached.
    IterationLimit,
    /// Wall-clock cap reached.
    RuntimeLimit,
    /// Function-evaluation cap reached.
    FuncEvalLimit,
    /// Gradient-evaluation cap reached.
    GradEvalLimit,
}

impl Status {
    /// True for every variant the testable-properties invariant
    /// "Upon Success status, `||g||_2/sqrt(n) <= grad_abs_tol` OR
    /// `f <= func_abs_tol`" is stated about.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Status::GradientConvergence
                | Status::FunctionConvergence
                | Status::FunctionAbsoluteConvergence
                | Status::FunctionRelativeConvergence
        )
    }

    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Status::IterationLimit
                | Status::RuntimeLimit
                | Status::FuncEvalLimit
                | Status::GradEvalLimit
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::GradientConvergence => "gradient convergence",
            Status::FunctionConvergence => "function convergence",
            Status::FunctionAbsoluteConvergence => "function absolute convergence",
            Status::FunctionRelativeConvergence => "function relative convergence",
            Status::FunctionNegativeInfinity => "function value reached negative infinity",
            Status::UserRequested => "cancelled by objective",
            Status::IterationLimit => "iteration limit reached",
            Status::RuntimeLimit => "runtime limit reached",
            Status::FuncEvalLimit => "function evaluation limit reached",
            Status::GradEvalLimit => "gradient evaluation limit reached",
        };
        write!(f, "{text}")
    }
}

/// Cooperative-cancellation signal returned from the objective's optional
/// Status capability.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ObjectiveStatus {
    Continue,
    UserRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_variants() {
        assert!(Status::GradientConvergence.is_success());
        assert!(Status::FunctionConvergence.is_success());
        assert!(!Status::IterationLimit.is_success());
        assert!(!Status::FunctionNegativeInfinity.is_success());
    }

    #[test]
    fn limit_variants() {
        assert!(Status::IterationLimit.is_limit());
        assert!(Status::RuntimeLimit.is_limit());
        assert!(!Status::GradientConvergence.is_limit());
    }

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn status_is_send_and_sync() {
        assert_send::<Status>();
        assert_sync::<Status>();
        assert_send::<ObjectiveStatus>();
        assert_sync::<ObjectiveStatus>();
    }
}
