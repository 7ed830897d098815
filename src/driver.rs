use crate::snapshot::{ActionSink, BoardSource};
use crate::solver::Solver;
use crate::{Action, ActionKind, DriverConfig, GameState, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// What happened over one played game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    /// `None` when the game was still running when play stopped.
    pub outcome: Option<GameState>,
    pub turns: usize,
    pub certain_reveals: usize,
    pub flags: usize,
    pub guesses: usize,
}

impl GameStats {
    pub fn won(&self) -> bool {
        self.outcome == Some(GameState::Won)
    }

    pub fn lost(&self) -> bool {
        self.outcome == Some(GameState::Lost)
    }
}

/// Repeatedly snapshots a board, asks a solver for certain actions and applies them,
/// guessing a random undecided cell when nothing is certain.
///
/// The deduction mode is whatever `solver` was built with.
pub struct Autoplayer<S, R> {
    solver: S,
    rng: R,
    config: DriverConfig,
}

impl<S: Solver, R: Rng> Autoplayer<S, R> {
    pub fn new(solver: S, rng: R, config: DriverConfig) -> Self {
        Self {
            solver,
            rng,
            config,
        }
    }

    /// Plays until the game ends, no move is left, or the turn limit is hit.
    pub fn play<G: BoardSource + ActionSink>(&mut self, game: &mut G) -> Result<GameStats> {
        let mut stats = GameStats::default();
        let mut state = GameState::Running;

        while stats.turns < self.config.max_turns && !state.is_terminal() {
            stats.turns += 1;
            let snapshot = game.snapshot()?;
            let actions = self.solver.solve(&snapshot);

            if actions.is_empty() {
                if !self.config.guess_when_stuck {
                    log::debug!("no certain action on turn {}, stopping", stats.turns);
                    break;
                }
                let candidates: Vec<_> = snapshot.undecided().collect();
                let Some(&position) = candidates.choose(&mut self.rng) else {
                    log::debug!("no undecided cell left on turn {}", stats.turns);
                    break;
                };
                log::debug!(
                    "guessing {:?} among {} undecided cells",
                    position,
                    candidates.len()
                );
                stats.guesses += 1;
                state = game.apply(Action::reveal(position))?;
                continue;
            }

            for action in actions {
                state = game.apply(action)?;
                match action.kind {
                    ActionKind::Reveal => stats.certain_reveals += 1,
                    ActionKind::Flag => stats.flags += 1,
                }
                if state.is_terminal() {
                    break;
                }
            }
        }

        if state.is_terminal() {
            stats.outcome = Some(state);
        }
        log::debug!("game finished: {:?}", stats);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Snapshot, SnapshotCell};
    use crate::solver::{CountingSolver, DeductionMode};
    use crate::{Board, Game, GameConfig, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(config: DriverConfig) -> Autoplayer<CountingSolver, StdRng> {
        Autoplayer::new(CountingSolver::default(), StdRng::seed_from_u64(11), config)
    }

    #[test]
    fn test_mine_free_board_is_won_with_one_guess() {
        let mut game = Game::from_board(Board::with_mines(4, 4, &[]).unwrap());
        let stats = player(DriverConfig::default()).play(&mut game).unwrap();

        assert!(stats.won());
        assert_eq!(stats.guesses, 1);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_stops_without_guessing_when_told() {
        let board = Board::with_mines(4, 4, &[Position::new(0, 0)]).unwrap();
        let mut game = Game::from_board(board);
        let config = DriverConfig {
            guess_when_stuck: false,
            ..DriverConfig::default()
        };
        let stats = player(config).play(&mut game).unwrap();

        assert_eq!(stats.outcome, None);
        assert_eq!(stats.turns, 1);
        assert_eq!(game.board().revealed_count(), 0);
    }

    #[test]
    fn test_turn_limit() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::new(GameConfig::expert(), &mut rng).unwrap();
        let config = DriverConfig {
            max_turns: 1,
            ..DriverConfig::default()
        };
        let stats = player(config).play(&mut game).unwrap();
        assert_eq!(stats.turns, 1);
    }

    #[test]
    fn test_certain_moves_never_lose() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new(GameConfig::intermediate(), &mut rng).unwrap();
            let stats = player(DriverConfig::default()).play(&mut game).unwrap();

            assert!(stats.outcome.is_some(), "seed {} did not finish", seed);
            if stats.lost() {
                // only a guess can hit a mine
                assert!(stats.guesses > 0, "seed {} lost without guessing", seed);
            }
        }
    }

    /// Replays a fixed snapshot and records what it is asked to do.
    struct RecordingSink {
        snapshot: Snapshot,
        applied: Vec<Action>,
    }

    impl RecordingSink {
        fn new(cells: impl IntoIterator<Item = SnapshotCell>) -> Self {
            Self {
                snapshot: Snapshot::from_cells(cells).unwrap(),
                applied: Vec::new(),
            }
        }
    }

    impl BoardSource for RecordingSink {
        fn snapshot(&mut self) -> Result<Snapshot> {
            Ok(self.snapshot.clone())
        }
    }

    impl ActionSink for RecordingSink {
        fn apply(&mut self, action: Action) -> Result<GameState> {
            self.applied.push(action);
            Ok(GameState::Running)
        }
    }

    #[test]
    fn test_every_action_reaches_the_sink_in_order() {
        // mine at (1, 1) behind a row of ones
        let discovered = [(0, 0), (1, 0), (2, 0), (0, 1)]
            .map(|(x, y)| SnapshotCell::discovered(Position::new(x, y), 1));
        let undiscovered = [(1, 1), (2, 1)]
            .map(|(x, y)| SnapshotCell::undiscovered(Position::new(x, y), false));
        let mut sink = RecordingSink::new(discovered.into_iter().chain(undiscovered));
        let config = DriverConfig {
            max_turns: 1,
            guess_when_stuck: false,
        };
        let solver = CountingSolver::new(DeductionMode::SnapshotAuthoritative);
        let mut player = Autoplayer::new(solver, StdRng::seed_from_u64(11), config);
        let stats = player.play(&mut sink).unwrap();

        assert_eq!(
            sink.applied,
            vec![
                Action::flag(Position::new(1, 1)),
                Action::reveal(Position::new(2, 1))
            ]
        );
        assert_eq!(stats.flags, 1);
        assert_eq!(stats.certain_reveals, 1);
        assert_eq!(stats.outcome, None);
    }

    #[test]
    fn test_solver_mode_decides_what_is_applied() {
        // 1 F 2
        // 1 ? ?
        let cells = [
            SnapshotCell::discovered(Position::new(0, 0), 1),
            SnapshotCell::undiscovered(Position::new(1, 0), true),
            SnapshotCell::discovered(Position::new(2, 0), 2),
            SnapshotCell::discovered(Position::new(0, 1), 1),
            SnapshotCell::undiscovered(Position::new(1, 1), false),
            SnapshotCell::undiscovered(Position::new(2, 1), false),
        ];
        let config = DriverConfig {
            max_turns: 1,
            guess_when_stuck: false,
        };

        let mut applied = Vec::new();
        for mode in [
            DeductionMode::SelfAuthoritative,
            DeductionMode::SnapshotAuthoritative,
        ] {
            let mut sink = RecordingSink::new(cells);
            let solver = CountingSolver::new(mode);
            let mut player = Autoplayer::new(solver, StdRng::seed_from_u64(11), config);
            player.play(&mut sink).unwrap();
            applied.push(sink.applied);
        }

        assert_eq!(
            applied[0],
            vec![
                Action::reveal(Position::new(1, 1)),
                Action::flag(Position::new(2, 1))
            ]
        );
        assert_eq!(applied[1], vec![Action::reveal(Position::new(1, 1))]);
    }
}
