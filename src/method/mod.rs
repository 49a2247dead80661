//! Methods: direction engines, line searchers, step seeders, and the
//! harness and one-shot methods built from them.

/// Direction engines
pub mod direction;
/// Guess-and-check
pub mod guess_and_check;
/// Line-search harness
pub mod harness;
/// Line searchers
pub mod linesearch;
/// Step seeders
pub mod stepseed;
/// Wolfe-condition predicates
pub mod wolfe;

pub use guess_and_check::{GuessAndCheck, Sampler, UniformBox};
pub use harness::LineSearchHarness;
