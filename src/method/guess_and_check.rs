//! Guess-and-check, a reference baseline for derivative-free usage, in the
//! spirit of the teacher's `SimulatedAnnealing`: a sampler draws candidates
//! from a user-supplied distribution, the driver evaluates each and tracks
//! the best, and every accepted evaluation is reported Major. Terminates
//! only by an iteration, eval, or time cap, since there is no gradient to
//! converge on.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::core::errors::Error;
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::linalg::Vector;
use crate::core::location::Location;
use crate::core::method::Method;

/// Draws a candidate parameter vector given the dimension `n`. Implementers
/// own whatever distribution parameters they need; the trait only fixes
/// the shape the sampler is invoked through, mirroring the teacher's
/// `Anneal` trait for `SimulatedAnnealing`.
pub trait Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vector;
}

/// Samples each coordinate independently and uniformly from `[low, high]`.
#[derive(Clone, Debug)]
pub struct UniformBox {
    low: Vector,
    high: Vector,
}

impl UniformBox {
    pub fn new(low: Vector, high: Vector) -> Self {
        assert_eq!(low.len(), high.len(), "low/high must have matching dimension");
        UniformBox { low, high }
    }

    /// A box of the given `radius` centered on `x0`, for use as a default
    /// when the caller supplies no sampler of their own.
    pub fn around(x0: &Vector, radius: f64) -> Self {
        let low = x0.map(|v| v - radius);
        let high = x0.map(|v| v + radius);
        UniformBox { low, high }
    }
}

impl Sampler for UniformBox {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vector {
        Vector::from_iterator(n, (0..n).map(|i| rng.gen_range(self.low[i]..=self.high[i])))
    }
}

/// Reference derivative-free baseline: samples a candidate each call,
/// reporting `Major` unconditionally and leaving convergence entirely to
/// the driver's resource caps.
pub struct GuessAndCheck<S: Sampler = UniformBox, R: Rng = Xoshiro256PlusPlus> {
    sampler: S,
    rng: R,
}

impl GuessAndCheck<UniformBox, Xoshiro256PlusPlus> {
    /// Uses a box of the given `radius` centered on `x0` and a
    /// non-reproducible RNG, mirroring the teacher's
    /// `SimulatedAnnealing::new` convenience constructor.
    pub fn around(x0: &Vector, radius: f64) -> Self {
        GuessAndCheck::new_with_rng(UniformBox::around(x0, radius), Xoshiro256PlusPlus::from_entropy())
    }
}

impl<S: Sampler, R: Rng> GuessAndCheck<S, R> {
    /// Requires an RNG which must implement `rand::Rng`; for reproducible
    /// trajectories, seed it explicitly.
    pub fn new_with_rng(sampler: S, rng: R) -> Self {
        GuessAndCheck { sampler, rng }
    }
}

impl<S: Sampler, R: Rng> Method for GuessAndCheck<S, R> {
    fn name(&self) -> &'static str {
        "GuessAndCheck"
    }

    fn init(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        x_next.copy_from(&self.sampler.sample(&mut self.rng, loc.n()));
        Ok((IterationKind::Major, EvaluationRequest::FuncOnly))
    }

    fn iterate(
        &mut self,
        loc: &Location,
        x_next: &mut Vector,
    ) -> Result<(IterationKind, EvaluationRequest), Error> {
        x_next.copy_from(&self.sampler.sample(&mut self.rng, loc.n()));
        Ok((IterationKind::Major, EvaluationRequest::FuncOnly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_box_samples_within_bounds() {
        let low = Vector::from_vec(vec![-1.0, -1.0]);
        let high = Vector::from_vec(vec![1.0, 1.0]);
        let sampler = UniformBox::new(low, high);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..50 {
            let s = sampler.sample(&mut rng, 2);
            assert!(s[0] >= -1.0 && s[0] <= 1.0);
            assert!(s[1] >= -1.0 && s[1] <= 1.0);
        }
    }

    #[test]
    fn same_seed_gives_same_trajectory() {
        let sampler = UniformBox::around(&Vector::from_vec(vec![0.0, 0.0]), 5.0);
        let mut gc1 = GuessAndCheck::new_with_rng(sampler.clone(), Xoshiro256PlusPlus::seed_from_u64(7));
        let sampler2 = UniformBox::around(&Vector::from_vec(vec![0.0, 0.0]), 5.0);
        let mut gc2 = GuessAndCheck::new_with_rng(sampler2, Xoshiro256PlusPlus::seed_from_u64(7));

        let loc = Location::new(Vector::from_vec(vec![0.0, 0.0]));
        let mut x1 = Vector::zeros(2);
        let mut x2 = Vector::zeros(2);
        gc1.init(&loc, &mut x1).unwrap();
        gc2.init(&loc, &mut x2).unwrap();
        assert_eq!(x1, x2);

        gc1.iterate(&loc, &mut x1).unwrap();
        gc2.iterate(&loc, &mut x2).unwrap();
        assert_eq!(x1, x2);
    }

    #[test]
    fn every_call_reports_major_func_only() {
        let mut gc = GuessAndCheck::around(&Vector::from_vec(vec![0.0, 0.0]), 1.0);
        let loc = Location::new(Vector::from_vec(vec![0.0, 0.0]));
        let mut x_next = Vector::zeros(2);
        let (kind, eval) = gc.init(&loc, &mut x_next).unwrap();
        assert_eq!(kind, IterationKind::Major);
        assert_eq!(eval, EvaluationRequest::FuncOnly);
        let (kind, eval) = gc.iterate(&loc, &mut x_next).unwrap();
        assert_eq!(kind, IterationKind::Major);
        assert_eq!(eval, EvaluationRequest::FuncOnly);
    }
}
