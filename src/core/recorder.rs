//! The recorder hook: a side-channel observer of transitions.
//!
//! Styled on the teacher's `Observe`/`Observers`/`ObserverMode` trio: a
//! small trait implementers hang a sink off of, a mode controlling call
//! frequency, and a container that fans a single event out to every
//! registered recorder.

use crate::core::errors::Error;
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::kv::KV;
use crate::core::location::Location;
use crate::core::stats::Stats;

/// How often a registered recorder wants to be called.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecorderMode {
    Always,
    Never,
    Every(u64),
    NewBest,
}

impl Default for RecorderMode {
    fn default() -> Self {
        RecorderMode::Always
    }
}

impl RecorderMode {
    fn should_fire(&self, iter: u64, is_new_best: bool) -> bool {
        match self {
            RecorderMode::Always => true,
            RecorderMode::Never => false,
            RecorderMode::Every(n) => *n > 0 && iter % n == 0,
            RecorderMode::NewBest => is_new_best,
        }
    }
}

/// A side-effect-only observer of driver transitions.
///
/// Implementations must not retain references past the call; the trait
/// only ever hands out borrows, never owned data, to make that contract the
/// natural one to satisfy.
pub trait Recorder {
    /// Called once before the first iteration.
    fn observe_init(&mut self, name: &str, loc: &Location, kv: &KV) -> Result<(), Error>;

    /// Called at every transition the driver reports to recorders.
    fn observe_transition(
        &mut self,
        loc: &Location,
        eval: EvaluationRequest,
        kind: IterationKind,
        stats: &Stats,
    ) -> Result<(), Error>;
}

struct Registered {
    recorder: Box<dyn Recorder>,
    mode: RecorderMode,
}

/// A fan-out container of registered recorders, mirroring `Observers<I>`.
#[derive(Default)]
pub struct Recorders {
    recorders: Vec<Registered>,
}

impl Recorders {
    pub fn new() -> Self {
        Recorders { recorders: vec![] }
    }

    pub fn add(&mut self, recorder: Box<dyn Recorder>, mode: RecorderMode) {
        self.recorders.push(Registered { recorder, mode });
    }

    pub fn is_empty(&self) -> bool {
        self.recorders.is_empty()
    }

    pub fn observe_init(&mut self, name: &str, loc: &Location, kv: &KV) -> Result<(), Error> {
        for r in &mut self.recorders {
            r.recorder.observe_init(name, loc, kv)?;
        }
        Ok(())
    }

    pub fn observe_transition(
        &mut self,
        loc: &Location,
        eval: EvaluationRequest,
        kind: IterationKind,
        stats: &Stats,
        is_new_best: bool,
    ) -> Result<(), Error> {
        for r in &mut self.recorders {
            if r.mode.should_fire(stats.major_iters(), is_new_best) {
                r.recorder.observe_transition(loc, eval, kind, stats)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingRecorder {
        inits: u32,
        transitions: u32,
    }

    impl Recorder for CountingRecorder {
        fn observe_init(&mut self, _name: &str, _loc: &Location, _kv: &KV) -> Result<(), Error> {
            self.inits += 1;
            Ok(())
        }

        fn observe_transition(
            &mut self,
            _loc: &Location,
            _eval: EvaluationRequest,
            _kind: IterationKind,
            _stats: &Stats,
        ) -> Result<(), Error> {
            self.transitions += 1;
            Ok(())
        }
    }

    #[test]
    fn every_mode_fires_on_multiples() {
        let mode = RecorderMode::Every(2);
        assert!(mode.should_fire(0, false));
        assert!(!mode.should_fire(1, false));
        assert!(mode.should_fire(2, false));
    }

    #[test]
    fn new_best_mode_fires_only_on_improvement() {
        let mode = RecorderMode::NewBest;
        assert!(!mode.should_fire(5, false));
        assert!(mode.should_fire(5, true));
    }

    #[test]
    fn recorders_fan_out_observe_init() {
        let mut recorders = Recorders::new();
        let loc = Location::new(crate::core::linalg::Vector::from_vec(vec![0.0]));
        let kv = KV::new();
        recorders.add(
            Box::new(CountingRecorder {
                inits: 0,
                transitions: 0,
            }),
            RecorderMode::Always,
        );
        recorders.observe_init("test", &loc, &kv).unwrap();
        assert!(!recorders.is_empty());
    }

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn recorder_mode_is_send_and_sync() {
        assert_send::<RecorderMode>();
        assert_sync::<RecorderMode>();
    }
}
