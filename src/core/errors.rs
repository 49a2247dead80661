//! Error taxonomy for the driver, methods, and linear algebra layer.

use thiserror::Error;

/// The crate-wide fallible return type.
///
/// Mirrors the teacher's `core::Error` re-export: public APIs return
/// `anyhow::Error` so a caller's own error types (surfaced through the
/// objective capability surface) can be threaded through without a
/// dedicated conversion, while internal failures are constructed from
/// [`DescentError`] and converted via `.into()`.
pub type Error = anyhow::Error;

/// Concrete error variants produced by this crate.
///
/// Every wire-level status in the error taxonomy has a matching variant
/// here; [`crate::core::status::Status`] maps a subset of these back to a
/// `Result.status` for the caller that does not want to match on an error
/// type.
#[derive(Debug, Error)]
pub enum DescentError {
    #[error("Initial function value is NaN")]
    InitialFuncIsNaN,

    #[error("Initial function value is infinite")]
    InitialFuncIsInf,

    #[error("Initial gradient contains NaN")]
    InitialGradIsNaN,

    #[error("Initial gradient contains an infinite component")]
    InitialGradIsInf,

    #[error("Dimension of the initial parameter vector is zero")]
    ZeroDimensional,

    #[error("Direction engine produced a non-descent direction: {text}")]
    NonDescentDirection { text: String },

    #[error("Line search failed: {text}")]
    LineSearchFailure { text: String },

    #[error("No representable progress could be made: {text}")]
    NoProgress { text: String },

    #[error("Hessian is not positive definite: {text}")]
    HessianNotPositiveDefinite { text: String },

    #[error("Major iteration cap reached")]
    IterationLimit,

    #[error("Wall-clock runtime cap reached")]
    RuntimeLimit,

    #[error("Function evaluation cap reached")]
    FuncEvalLimit,

    #[error("Gradient evaluation cap reached")]
    GradEvalLimit,

    #[error("Recorder failed: {text}")]
    RecorderError { text: String },

    #[error("Objective callback failed: {text}")]
    UserFunctionError { text: String },

    #[error("Method failed: {text}")]
    MethodError { text: String },

    #[error("Invalid settings: {text}")]
    InvalidSettings { text: String },

    #[error("Invalid parameter: {text}")]
    InvalidParameter { text: String },
}

/// Constructs a [`DescentError`] wrapped in [`Error`], in the style of the
/// teacher's `argmin_error!` macro: `descent_error!(Variant, "message")`.
macro_rules! descent_error {
    ($variant:ident, $msg:expr) => {
        crate::core::errors::Error::from(crate::core::errors::DescentError::$variant {
            text: $msg.to_string(),
        })
    };
}

/// As [`descent_error!`] but produces a closure, for use with
/// `Option::ok_or_else`, mirroring `argmin_error_closure!`.
macro_rules! descent_error_closure {
    ($variant:ident, $msg:expr) => {
        || crate::core::errors::Error::from(crate::core::errors::DescentError::$variant {
            text: $msg.to_string(),
        })
    };
}

pub(crate) use descent_error;
pub(crate) use descent_error_closure;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_text() {
        let e = DescentError::LineSearchFailure {
            text: "bracket collapsed".into(),
        };
        assert_eq!(format!("{e}"), "Line search failed: bracket collapsed");
    }

    #[test]
    fn macro_builds_error() {
        let e: Error = descent_error!(NoProgress, "stalled");
        assert!(e.to_string().contains("stalled"));
    }

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn descent_error_is_send_and_sync() {
        assert_send::<DescentError>();
        assert_sync::<DescentError>();
    }
}
