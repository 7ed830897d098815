use crate::snapshot::Snapshot;
use crate::Action;

/// How a pass treats cells it has just decided to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeductionMode {
    /// The next snapshot is the only source of truth. An emitted reveal leaves the
    /// analysis copy untouched and is only remembered so it is not emitted twice.
    SnapshotAuthoritative,
    /// The caller applies every action before the next snapshot. An emitted reveal counts
    /// as discovered for the rest of the pass.
    #[default]
    SelfAuthoritative,
}

/// Base trait for all solvers
pub trait Solver {
    fn name(&self) -> &str;

    /// Certain actions deducible from `snapshot`, in the order they were found.
    ///
    /// An empty result means nothing is certain on this board.
    fn solve(&self, snapshot: &Snapshot) -> Vec<Action>;
}
