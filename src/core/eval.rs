//! The vocabulary methods and the driver use to talk to each other about
//! what to evaluate and what kind of step just happened.

/// What the driver should ask the objective for next.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EvaluationRequest {
    NoEval,
    FuncOnly,
    GradOnly,
    FuncAndGrad,
    FuncGradHess,
}

/// The role of the just-proposed evaluation in the run's overall trajectory.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IterationKind {
    None,
    Major,
    Minor,
    Sub,
    PostIteration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_distinct() {
        assert_ne!(EvaluationRequest::FuncOnly, EvaluationRequest::GradOnly);
        assert_ne!(IterationKind::Major, IterationKind::Minor);
    }
}
