use crate::snapshot::Snapshot;
use crate::Position;

/// One cell of the solver's private copy of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisCell {
    pub position: Position,
    pub discovered: bool,
    pub flag: bool,
    pub count: u8,
}

/// A view of the game board that holds only what a player can see, rebuilt for every pass.
///
/// `discovered` and `flag` may change while a pass runs; nothing here is written back to
/// the snapshot it was built from.
#[derive(Debug, Clone)]
pub struct AnalysisBoard {
    cells: Vec<AnalysisCell>,
    /// Indices into `cells`, parallel to it.
    neighbors: Vec<Vec<usize>>,
}

impl AnalysisBoard {
    pub fn new(snapshot: &Snapshot) -> Self {
        let (width, height) = snapshot.dimensions();
        let cells: Vec<AnalysisCell> = snapshot
            .cells()
            .map(|cell| AnalysisCell {
                position: cell.position,
                discovered: cell.discovered,
                // a discovered cell's flag is ignored
                flag: cell.flagged && !cell.discovered,
                count: cell.count,
            })
            .collect();
        let neighbors = cells
            .iter()
            .map(|cell| {
                cell.position
                    .neighbors_within(width, height)
                    .map(|p| p.y as usize * width as usize + p.x as usize)
                    .collect()
            })
            .collect();

        Self { cells, neighbors }
    }

    pub fn cell(&self, index: usize) -> &AnalysisCell {
        &self.cells[index]
    }

    pub(super) fn cell_mut(&mut self, index: usize) -> &mut AnalysisCell {
        &mut self.cells[index]
    }

    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Indices of discovered cells, row-major.
    pub fn discovered(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.discovered)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotCell;
    use itertools::iproduct;

    #[test]
    fn test_discovered_flag_is_ignored() {
        let mut cells: Vec<SnapshotCell> = (0..2)
            .map(|x| SnapshotCell::undiscovered(Position::new(x, 0), false))
            .collect();
        cells[0] = SnapshotCell {
            position: Position::new(0, 0),
            discovered: true,
            flagged: true,
            count: 1,
        };
        let board = AnalysisBoard::new(&Snapshot::from_cells(cells).unwrap());

        assert!(board.cell(0).discovered);
        assert!(!board.cell(0).flag);
        assert_eq!(board.discovered(), vec![0]);
    }

    #[test]
    fn test_neighbor_indices() {
        let cells = iproduct!(0..3, 0..3)
            .map(|(y, x)| SnapshotCell::undiscovered(Position::new(x, y), false));
        let board = AnalysisBoard::new(&Snapshot::from_cells(cells).unwrap());

        assert_eq!(board.neighbors(0), &[1, 3, 4]);
        assert_eq!(board.neighbors(4).len(), 8);
        for index in 0..9 {
            assert!(!board.neighbors(index).contains(&index));
            let center = board.cell(index).position;
            for &n in board.neighbors(index) {
                let pos = board.cell(n).position;
                assert!((pos.x - center.x).abs() <= 1 && (pos.y - center.y).abs() <= 1);
            }
        }
    }
}
