use crate::snapshot::{ActionSink, BoardSource, Snapshot, SnapshotCell};
use crate::{Board, GameConfig, Position, Result};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Won,
    Lost,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Reveal,
    Flag,
}

/// A decided move at one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub position: Position,
    pub kind: ActionKind,
}

impl Action {
    pub fn reveal(position: Position) -> Self {
        Self {
            position,
            kind: ActionKind::Reveal,
        }
    }

    pub fn flag(position: Position) -> Self {
        Self {
            position,
            kind: ActionKind::Flag,
        }
    }
}

/// A simulated game: a [`Board`] plus its win/loss state.
///
/// Once the state leaves [`GameState::Running`] every mutating call is a no-op until
/// [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    config: GameConfig,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        Ok(Self::from_board(Board::new(config, rng)?))
    }

    pub fn from_board(board: Board) -> Self {
        let (width, height) = board.dimensions();
        let config = GameConfig::new(width, height, board.mines_count());
        Self {
            board,
            state: GameState::Running,
            config,
        }
    }

    /// Starts over with a fresh mine layout of the same size.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.board = Board::new(self.config, rng)?;
        self.state = GameState::Running;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.board.dimensions()
    }

    pub fn perform_action(&mut self, action: Action) -> Result<GameState> {
        match action.kind {
            ActionKind::Reveal => self.reveal(action.position)?,
            ActionKind::Flag => self.flag(action.position)?,
        }
        Ok(self.state)
    }

    /// Reveals `pos`, flooding outwards through zero-count cells.
    ///
    /// Revealing an already revealed cell does nothing. A revealed cell loses its flag.
    pub fn reveal(&mut self, pos: Position) -> Result<()> {
        self.board.get_cell(pos)?;
        if self.state.is_terminal() {
            return Ok(());
        }

        let mut stack = vec![pos];
        while let Some(current) = stack.pop() {
            let cell = self.board.cell_mut(current)?;
            if cell.is_revealed {
                continue;
            }
            cell.is_revealed = true;
            cell.is_flagged = false;

            let cell = self.board.get_cell(current)?;
            if cell.is_mine() {
                log::debug!("revealed mine at {:?}, game lost", current);
                self.state = GameState::Lost;
                return Ok(());
            }
            if self.board.is_zero(cell) {
                // reversed so the first neighbor is expanded first
                stack.extend(
                    cell.neighbors()
                        .iter()
                        .rev()
                        .filter(|p| matches!(self.board.get_cell(**p), Ok(c) if !c.is_revealed())),
                );
            }
        }

        self.check_win_condition();
        Ok(())
    }

    /// Marks `pos` as a believed mine. Revealed cells and finished games are left alone.
    pub fn flag(&mut self, pos: Position) -> Result<()> {
        self.set_flag(pos, true)
    }

    pub fn unflag(&mut self, pos: Position) -> Result<()> {
        self.set_flag(pos, false)
    }

    fn set_flag(&mut self, pos: Position, flagged: bool) -> Result<()> {
        let terminal = self.state.is_terminal();
        let cell = self.board.cell_mut(pos)?;
        if terminal || cell.is_revealed {
            return Ok(());
        }
        cell.is_flagged = flagged;
        Ok(())
    }

    fn check_win_condition(&mut self) {
        if self.board.revealed_count() == self.board.safe_cells_count() {
            log::debug!("all safe cells revealed, game won");
            self.state = GameState::Won;
        }
    }
}

impl BoardSource for Game {
    fn snapshot(&mut self) -> Result<Snapshot> {
        Snapshot::from_cells(self.board.cells().map(|cell| {
            if cell.is_revealed() {
                SnapshotCell::discovered(cell.position(), self.board.adjacent_mine_count(cell))
            } else {
                SnapshotCell::undiscovered(cell.position(), cell.is_flagged())
            }
        }))
    }
}

impl ActionSink for Game {
    fn apply(&mut self, action: Action) -> Result<GameState> {
        self.perform_action(action)
    }
}
