//! Core traits and types for defining and driving optimization runs.
//!
//! This module contains the pieces that do not depend on a particular
//! direction engine or line searcher: the objective capability surface,
//! the driver's evaluation point and its driving loop, settings,
//! convergence checking, the recorder hook, and the error taxonomy.

/// Convergence and resource-cap checks, including the windowed stall check
mod convergence;
/// The outer driver loop
mod driver;
/// Error handling
mod errors;
/// Evaluation-request and iteration-kind vocabulary
mod eval;
/// Key value datastructure
mod kv;
/// Dense linear algebra primitives
mod linalg;
/// The driver's sole mutable evaluation point
mod location;
/// The uniform surface the driver dispatches to
mod method;
/// The objective capability surface
mod objective;
/// Recorder hook
mod recorder;
/// Definition of the return type of `Driver::run`
mod result;
/// Run options
mod settings;
/// Run-level counters
mod stats;
/// Non-fatal run outcomes
mod status;
#[cfg(feature = "slog-logger")]
mod terminal_recorder;

pub use anyhow::Error;
pub use convergence::{check_caps, check_major_convergence, ConvergenceWindow};
pub use driver::Driver;
pub use errors::DescentError;
pub use eval::{EvaluationRequest, IterationKind};
pub use kv::KV;
pub use linalg::{
    add_scaled_to, axpy, chol_solve, cholesky_factor_sym, dot, identity, inner, mul_vec, norm2, norm_inf,
    sym_rank_one, sym_rank_two, Matrix, Vector,
};
pub use location::Location;
pub use method::Method;
pub use objective::{Objective, ObjectiveAdapter};
pub use recorder::{Recorder, RecorderMode, Recorders};
pub use result::DriverResult;
pub use settings::Settings;
pub use stats::Stats;
pub use status::{ObjectiveStatus, Status};
#[cfg(feature = "slog-logger")]
pub use terminal_recorder::TerminalRecorder;
