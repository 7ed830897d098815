use crate::{GameError, Result};

/// Board dimensions and mine count for one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub mines: u32,
}

impl GameConfig {
    pub const fn new(width: u32, height: u32, mines: u32) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub const fn beginner() -> Self {
        Self::new(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new(30, 16, 99)
    }

    pub fn total_cells(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Rejects empty boards and boards where every cell would be a mine.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.mines as u64 >= self.total_cells() {
            return Err(GameError::TooManyMines {
                width: self.width,
                height: self.height,
                mines: self.mines,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

/// Knobs for the play loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Upper bound on snapshot/deduce/apply rounds per game.
    pub max_turns: usize,
    /// Reveal a random undecided cell when no certain action exists.
    pub guess_when_stuck: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_turns: 10_000,
            guess_when_stuck: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert!(config.validate().is_ok(), "{:?} should be valid", config);
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            GameConfig::new(0, 5, 1).validate(),
            Err(GameError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(GameConfig::new(5, 0, 0).validate().is_err());
    }

    #[test]
    fn test_mines_must_leave_a_safe_cell() {
        assert_eq!(
            GameConfig::new(3, 3, 9).validate(),
            Err(GameError::TooManyMines {
                width: 3,
                height: 3,
                mines: 9
            })
        );
        assert!(GameConfig::new(3, 3, 8).validate().is_ok());
        assert!(GameConfig::new(1, 1, 0).validate().is_ok());
    }
}
