use super::board::AnalysisBoard;
use super::traits::{DeductionMode, Solver};
use crate::snapshot::Snapshot;
use crate::Action;
use std::collections::HashSet;

/// Implements basic counting rules for minesweeper solving:
/// - If a numbered cell has exactly as many undiscovered neighbors as its number, they must
///   all be mines
/// - If a numbered cell has exactly as many flagged neighbors as its number, all other
///   neighbors must be safe
///
/// Flags placed while sweeping are visible to cells examined later in the same sweep.
/// The sweep visits each discovered cell once and does not loop to a fixed point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSolver {
    pub mode: DeductionMode,
}

impl CountingSolver {
    pub fn new(mode: DeductionMode) -> Self {
        Self { mode }
    }

    /// One pass over the cells that were discovered when `board` was built.
    pub fn sweep(&self, board: &mut AnalysisBoard) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut pending_reveals = HashSet::new();

        for index in board.discovered() {
            self.analyze_cell(board, index, &mut pending_reveals, &mut actions);
        }

        actions
    }

    fn analyze_cell(
        &self,
        board: &mut AnalysisBoard,
        index: usize,
        pending_reveals: &mut HashSet<usize>,
        actions: &mut Vec<Action>,
    ) {
        let required = board.cell(index).count as usize;
        let neighbors = board.neighbors(index).to_vec();

        let undiscovered: Vec<usize> = neighbors
            .iter()
            .copied()
            .filter(|&n| !board.cell(n).discovered)
            .collect();
        if undiscovered.len() == required {
            for n in undiscovered {
                let cell = board.cell_mut(n);
                if !cell.flag {
                    cell.flag = true;
                    actions.push(Action::flag(cell.position));
                }
            }
        }

        let flagged = neighbors.iter().filter(|&&n| board.cell(n).flag).count();
        if flagged == required {
            for n in neighbors {
                let cell = board.cell_mut(n);
                if cell.discovered || cell.flag {
                    continue;
                }
                match self.mode {
                    DeductionMode::SelfAuthoritative => cell.discovered = true,
                    DeductionMode::SnapshotAuthoritative => {
                        if !pending_reveals.insert(n) {
                            continue;
                        }
                    }
                }
                actions.push(Action::reveal(cell.position));
            }
        }
    }
}

impl Solver for CountingSolver {
    fn name(&self) -> &str {
        "Basic Counting Solver"
    }

    fn solve(&self, snapshot: &Snapshot) -> Vec<Action> {
        let mut board = AnalysisBoard::new(snapshot);
        let actions = self.sweep(&mut board);
        log::trace!(
            "{} ({:?}) found {} certain actions",
            self.name(),
            self.mode,
            actions.len()
        );
        actions
    }
}
