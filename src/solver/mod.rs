mod board;
mod counting;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
mod traits;

pub use board::{AnalysisBoard, AnalysisCell};
pub use counting::CountingSolver;
pub use traits::{DeductionMode, Solver};

use crate::snapshot::Snapshot;
use crate::Action;

/// Every action one counting pass over `snapshot` can prove, in the order found.
pub fn certain_actions(snapshot: &Snapshot, mode: DeductionMode) -> Vec<Action> {
    CountingSolver::new(mode).solve(snapshot)
}
