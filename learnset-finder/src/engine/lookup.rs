use learnset_data::MoveLearners;

use crate::LookupError;

/// A move resolved against move data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove<'d> {
    /// The canonical move name.
    pub name: &'d str,
    /// All Mons that learn the move.
    pub learners: &'d MoveLearners,
}

/// Trait for resolving queried move names to learner data.
pub trait LearnerLookup {
    /// Looks up a move by name.
    ///
    /// Failing to find a move is not fatal to a query; the error is reported as a diagnostic.
    fn lookup(&self, move_name: &str) -> Result<ResolvedMove<'_>, LookupError>;
}
