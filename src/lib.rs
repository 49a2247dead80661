//! descent-core: a driver, line-search and quasi-Newton core for
//! unconstrained minimization of smooth scalar functions of many real
//! variables.
//!
//! The entry point is [`core::Driver`]: build one from an [`core::Objective`]
//! implementation, a starting point, and [`core::Settings`], then call
//! [`core::Driver::run`]. Direction engines ([`method::direction::Bfgs`],
//! [`method::direction::Lbfgs`], [`method::direction::ModifiedNewton`],
//! [`method::direction::PureNewton`], [`method::direction::GradientDescent`])
//! combine with line searchers ([`method::linesearch::Backtracking`],
//! [`method::linesearch::Bisection`]) through [`method::harness::LineSearchHarness`]
//! to produce the [`core::Method`] the driver dispatches to; when the caller
//! supplies none, the driver picks BFGS+Bisection for objectives with a
//! gradient and [`method::guess_and_check::GuessAndCheck`] otherwise.

pub mod core;
pub mod method;

pub use crate::core::{
    DescentError, Driver, DriverResult, Error, Objective, ObjectiveAdapter, Recorder, RecorderMode, Recorders,
    Settings, Stats, Status,
};
