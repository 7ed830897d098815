use crate::{GameConfig, GameError, Position, Result};
use itertools::Itertools;
use ndarray::Array2;
use rand::Rng;

/// One grid square of a simulated game.
///
/// The position, the mine bit and the neighbor list are fixed once the board is built;
/// only the revealed/flagged bits change afterwards, and only through [`crate::Game`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    position: Position,
    is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    neighbors: Vec<Position>,
}

impl Cell {
    fn new(position: Position, width: u32, height: u32) -> Self {
        Self {
            position,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbors: position.neighbors_within(width, height).collect(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// In-bounds neighbors in adjacency-construction order.
    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Cell>,
    width: u32,
    height: u32,
    mines_count: u32,
}

impl Board {
    /// Builds a board and places `config.mines` mines on distinct cells drawn uniformly
    /// from `rng`.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut board = Self::empty(config.width, config.height);
        let total = board.cells.len();
        let width = config.width as usize;
        for index in rand::seq::index::sample(rng, total, config.mines as usize).into_iter() {
            board.cells[[index / width, index % width]].is_mine = true;
        }
        board.mines_count = config.mines;

        log::debug!(
            "placed {} mines on a {}x{} board",
            config.mines,
            config.width,
            config.height
        );
        Ok(board)
    }

    /// Builds a board with mines exactly at `mines`. Repeated positions count once.
    pub fn with_mines(width: u32, height: u32, mines: &[Position]) -> Result<Self> {
        let mines = mines.iter().copied().unique().collect_vec();
        GameConfig::new(width, height, mines.len() as u32).validate()?;

        let mut board = Self::empty(width, height);
        for pos in &mines {
            board.cell_mut(*pos)?.is_mine = true;
        }
        board.mines_count = mines.len() as u32;
        Ok(board)
    }

    fn empty(width: u32, height: u32) -> Self {
        let cells = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            Cell::new(Position::new(x as i32, y as i32), width, height)
        });
        Self {
            cells,
            width,
            height,
            mines_count: 0,
        }
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.width, self.height)
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        if !self.is_within_bounds(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(&self.cells[pos.to_index()])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        if !self.is_within_bounds(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(&mut self.cells[pos.to_index()])
    }

    /// Cells in row-major order (`y` outer, `x` inner).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn adjacent_mine_count(&self, cell: &Cell) -> u8 {
        cell.neighbors
            .iter()
            .filter(|p| self.cells[p.to_index()].is_mine)
            .count() as u8
    }

    pub fn is_zero(&self, cell: &Cell) -> bool {
        self.adjacent_mine_count(cell) == 0
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }

    pub fn safe_cells_count(&self) -> u32 {
        self.width * self.height - self.mines_count
    }

    pub fn revealed_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_revealed).count() as u32
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().filter(|c| c.is_mine).map(|c| c.position)
    }
}
