//! Board snapshots and the two capabilities the play loop is written against.
//!
//! A [`Snapshot`] only carries what a player can see, so the same deduction code runs
//! against a simulated [`crate::Game`] and against cells scraped from a live page.

use crate::{Action, GameError, GameState, Position, Result};
use ndarray::Array2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotCell {
    pub position: Position,
    pub discovered: bool,
    pub flagged: bool,
    /// Adjacent mine count. Only meaningful when `discovered`.
    pub count: u8,
}

impl SnapshotCell {
    pub fn discovered(position: Position, count: u8) -> Self {
        Self {
            position,
            discovered: true,
            flagged: false,
            count,
        }
    }

    pub fn undiscovered(position: Position, flagged: bool) -> Self {
        Self {
            position,
            discovered: false,
            flagged,
            count: 0,
        }
    }

    /// Neither discovered nor flagged.
    pub fn is_undecided(&self) -> bool {
        !self.discovered && !self.flagged
    }
}

/// Every cell of a `[0, width) x [0, height)` rectangle, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    cells: Array2<SnapshotCell>,
}

impl Snapshot {
    /// Collects cells in any order into a row-major snapshot.
    ///
    /// Fails when a coordinate repeats, is negative, or leaves a hole in the rectangle.
    pub fn from_cells(cells: impl IntoIterator<Item = SnapshotCell>) -> Result<Self> {
        let mut cells: Vec<SnapshotCell> = cells.into_iter().collect();

        let (mut width, mut height) = (0u32, 0u32);
        for cell in &cells {
            let (Some(w), Some(h)) = (extent(cell.position.x), extent(cell.position.y)) else {
                return Err(GameError::OutOfBounds(cell.position));
            };
            width = width.max(w);
            height = height.max(h);
        }
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }

        cells.sort_by_key(|c| (c.position.y, c.position.x));
        if let Some(pair) = cells.windows(2).find(|w| w[0].position == w[1].position) {
            return Err(GameError::DuplicateCell(pair[0].position));
        }
        let (width, height) = (width as usize, height as usize);
        let expected = width.saturating_mul(height);
        let found = cells.len();
        let cells = Array2::from_shape_vec((height, width), cells)
            .map_err(|_| GameError::IncompleteSnapshot { expected, found })?;

        Ok(Self { cells })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        let (height, width) = self.cells.dim();
        (width as u32, height as u32)
    }

    pub fn get(&self, pos: Position) -> Result<&SnapshotCell> {
        let (width, height) = self.dimensions();
        if !pos.is_within(width, height) {
            return Err(GameError::CellNotFound(pos));
        }
        Ok(&self.cells[pos.to_index()])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &SnapshotCell> + '_ {
        self.cells.iter()
    }

    /// Positions that are neither discovered nor flagged, in row-major order.
    pub fn undecided(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_undecided())
            .map(|c| c.position)
    }
}

/// Rows or columns needed to hold `coord`. Negative coordinates have none.
fn extent(coord: i32) -> Option<u32> {
    u32::try_from(coord).ok().map(|c| c + 1)
}

/// Anything that can produce the current visible board.
pub trait BoardSource {
    fn snapshot(&mut self) -> Result<Snapshot>;
}

/// Anything that can carry out an [`Action`] and report the game state afterwards.
///
/// Revealing a mine is a legitimate move that ends in [`GameState::Lost`], not an error.
pub trait ActionSink {
    fn apply(&mut self, action: Action) -> Result<GameState>;
}
