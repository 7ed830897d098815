use super::traits::Solver;
use crate::snapshot::BoardSource;
use crate::{ActionKind, Game, GameConfig, Position};
use rand::prelude::*;
use std::collections::HashSet;

/// Configuration for test board generation
#[derive(Debug, Clone)]
pub struct TestBoardConfig {
    pub width: u32,
    pub height: u32,
    pub mine_density: f64,
    pub revealed_percentage: f64,
    /// Share of mines that start out (correctly) flagged.
    pub flagged_percentage: f64,
}

impl Default for TestBoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            mine_density: 0.15,
            revealed_percentage: 0.3,
            flagged_percentage: 0.2,
        }
    }
}

/// Generates partially played games with known solutions
pub struct TestBoardGenerator {
    config: TestBoardConfig,
    rng: StdRng,
}

impl TestBoardGenerator {
    pub fn new(config: TestBoardConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(config: TestBoardConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a game with some safe cells revealed and some mines flagged
    pub fn generate(&mut self) -> (Game, HashSet<Position>) {
        let cells = self.config.width * self.config.height;
        let total = cells as f64;
        let mines = ((total * self.config.mine_density) as u32).min(cells - 1);
        let config = GameConfig::new(self.config.width, self.config.height, mines);
        let mut game = Game::new(config, &mut self.rng).unwrap();

        let mine_positions: HashSet<Position> = game.board().mine_positions().collect();

        let cells_to_reveal = (total * self.config.revealed_percentage) as u32;
        while game.board().revealed_count() < cells_to_reveal {
            let hidden_safe: Vec<Position> = game
                .board()
                .cells()
                .filter(|c| !c.is_mine() && !c.is_revealed())
                .map(|c| c.position())
                .collect();
            let Some(&pos) = hidden_safe.choose(&mut self.rng) else {
                break;
            };
            game.reveal(pos).unwrap();
        }

        let mut mines: Vec<Position> = game.board().mine_positions().collect();
        mines.shuffle(&mut self.rng);
        let to_flag = (mines.len() as f64 * self.config.flagged_percentage) as usize;
        for &pos in &mines[..to_flag] {
            game.flag(pos).unwrap();
        }

        (game, mine_positions)
    }

    /// Generates multiple test cases
    pub fn generate_batch(&mut self, count: usize) -> Vec<(Game, HashSet<Position>)> {
        (0..count).map(|_| self.generate()).collect()
    }
}

/// Checks that every flag lands on a mine and every reveal on a safe cell
pub fn validate_solver<S: Solver>(
    solver: &S,
    game: &Game,
    mine_positions: &HashSet<Position>,
) -> bool {
    let snapshot = game.clone().snapshot().unwrap();

    for action in solver.solve(&snapshot) {
        let is_mine = mine_positions.contains(&action.position);
        match action.kind {
            ActionKind::Flag if !is_mine => {
                println!(
                    "Solver {} incorrectly identified safe position {:?} as mine",
                    solver.name(),
                    action.position
                );
                return false;
            }
            ActionKind::Reveal if is_mine => {
                println!(
                    "Solver {} incorrectly identified mine {:?} as safe",
                    solver.name(),
                    action.position
                );
                return false;
            }
            _ => {}
        }
    }

    true
}
