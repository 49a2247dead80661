//! A [`Recorder`] logging to the terminal via `slog`, grounded directly on
//! the teacher's `argmin-observer-slog::SlogLogger`.

use slog::{info, o, Drain, Key, Record, Serializer};
use slog_async::OverflowStrategy;

use crate::core::errors::Error;
use crate::core::eval::{EvaluationRequest, IterationKind};
use crate::core::kv::KV;
use crate::core::location::Location;
use crate::core::recorder::Recorder;
use crate::core::stats::Stats;

/// Logs run transitions to the terminal using `slog`/`slog-term`.
///
/// Construct with [`TerminalRecorder::term`] (blocks on a full buffer) or
/// [`TerminalRecorder::term_noblock`] (drops messages instead), then hand
/// it to [`crate::core::Settings::with_recorder`].
#[derive(Clone)]
pub struct TerminalRecorder {
    logger: slog::Logger,
}

impl TerminalRecorder {
    /// Logs to the terminal, blocking execution if the buffer fills up.
    pub fn term() -> Self {
        TerminalRecorder::term_internal(OverflowStrategy::Block)
    }

    /// Logs to the terminal without blocking; messages may be dropped if
    /// the buffer overflows.
    pub fn term_noblock() -> Self {
        TerminalRecorder::term_internal(OverflowStrategy::Drop)
    }

    fn term_internal(overflow_strategy: OverflowStrategy) -> Self {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator)
            .use_original_order()
            .build()
            .fuse();
        let drain = slog_async::Async::new(drain)
            .overflow_strategy(overflow_strategy)
            .build()
            .fuse();
        TerminalRecorder {
            logger: slog::Logger::root(drain, o!()),
        }
    }
}

struct SlogKV<'a>(&'a KV);

impl<'a> slog::KV for SlogKV<'a> {
    fn serialize(&self, _record: &Record, serializer: &mut dyn Serializer) -> slog::Result {
        for (k, v) in self.0.iter() {
            serializer.emit_str(Key::from(k.to_string()), v)?;
        }
        Ok(())
    }
}

struct LogTransition<'a> {
    loc: &'a Location,
    eval: EvaluationRequest,
    kind: IterationKind,
    stats: &'a Stats,
}

impl<'a> slog::KV for LogTransition<'a> {
    fn serialize(&self, _record: &Record, serializer: &mut dyn Serializer) -> slog::Result {
        serializer.emit_u64(Key::from("major_iters"), self.stats.major_iters())?;
        serializer.emit_str(Key::from("kind"), &format!("{:?}", self.kind))?;
        serializer.emit_str(Key::from("eval"), &format!("{:?}", self.eval))?;
        serializer.emit_str(Key::from("f"), &self.loc.f().to_string())?;
        if let Some(grad_norm) = self.stats.grad_norm() {
            serializer.emit_str(Key::from("grad_norm"), &grad_norm.to_string())?;
        }
        serializer.emit_u64(Key::from("func_evals"), self.stats.func_evals())?;
        serializer.emit_u64(Key::from("grad_evals"), self.stats.grad_evals())?;
        Ok(())
    }
}

impl Recorder for TerminalRecorder {
    fn observe_init(&mut self, name: &str, _loc: &Location, kv: &KV) -> Result<(), Error> {
        info!(self.logger, "{}", name; SlogKV(kv));
        Ok(())
    }

    fn observe_transition(
        &mut self,
        loc: &Location,
        eval: EvaluationRequest,
        kind: IterationKind,
        stats: &Stats,
    ) -> Result<(), Error> {
        info!(
            self.logger,
            "";
            LogTransition {
                loc,
                eval,
                kind,
                stats,
            }
        );
        Ok(())
    }
}
