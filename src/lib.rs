pub mod board;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod position;
pub mod scrape;
pub mod snapshot;
pub mod solver;

pub use board::{Board, Cell};
pub use config::{DriverConfig, GameConfig};
pub use driver::{Autoplayer, GameStats};
pub use error::{GameError, Result};
pub use game::{Action, ActionKind, Game, GameState};
pub use position::Position;
pub use snapshot::{ActionSink, BoardSource, Snapshot, SnapshotCell};
pub use solver::{certain_actions, CountingSolver, DeductionMode, Solver};
