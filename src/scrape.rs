//! Reading board state out of a minesweeper web page.
//!
//! The page renders each square as an element with `data-x`/`data-y` attributes and a
//! class list: `hd_opened` plus `hd_typeN` for a revealed square with `N` adjacent mines,
//! `hd_flag` for a flagged one. Fetching those attributes (and clicking) is left to
//! whatever browser driver the caller uses.

use crate::snapshot::{BoardSource, Snapshot, SnapshotCell};
use crate::{GameError, GameState, Position, Result};

const OPENED: &str = "hd_opened";
const FLAG: &str = "hd_flag";
const COUNT_PREFIX: &str = "hd_type";
const FACE_WIN: &str = "hd_top-area-face-win";
const FACE_LOSE: &str = "hd_top-area-face-lose";

/// The attributes scraped from one cell element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellElement {
    pub x: i32,
    pub y: i32,
    pub classes: String,
}

impl CellElement {
    pub fn new(x: i32, y: i32, classes: impl Into<String>) -> Self {
        Self {
            x,
            y,
            classes: classes.into(),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.split_whitespace().any(|c| c == class)
    }

    fn mine_count(&self) -> Option<u8> {
        self.classes
            .split_whitespace()
            .filter_map(|c| c.strip_prefix(COUNT_PREFIX))
            .filter_map(|n| n.parse::<u8>().ok())
            .find(|&n| n <= 8)
    }

    pub fn to_snapshot_cell(&self) -> Result<SnapshotCell> {
        let position = Position::new(self.x, self.y);
        if !self.has_class(OPENED) {
            return Ok(SnapshotCell::undiscovered(position, self.has_class(FLAG)));
        }
        match self.mine_count() {
            Some(count) => Ok(SnapshotCell::discovered(position, count)),
            None => Err(GameError::UnrecognizedCell {
                x: self.x,
                y: self.y,
                classes: self.classes.clone(),
            }),
        }
    }
}

/// The DOM id of the element for `pos`, which a click sink looks up.
pub fn element_id(pos: Position) -> String {
    format!("cell_{}_{}", pos.x, pos.y)
}

/// Game state shown by the smiley face above the board.
pub fn face_state(classes: &str) -> GameState {
    let classes: Vec<&str> = classes.split_whitespace().collect();
    if classes.contains(&FACE_WIN) {
        GameState::Won
    } else if classes.contains(&FACE_LOSE) {
        GameState::Lost
    } else {
        GameState::Running
    }
}

/// The most recent scrape of a live board.
///
/// The page is the only authority on state: feed it to a solver in
/// [`crate::solver::DeductionMode::SnapshotAuthoritative`] mode and rescrape after acting.
#[derive(Debug, Clone, Default)]
pub struct ScrapedBoard {
    elements: Vec<CellElement>,
}

impl ScrapedBoard {
    pub fn new(elements: Vec<CellElement>) -> Self {
        Self { elements }
    }

    /// Replaces the held elements with a fresh scrape.
    pub fn update(&mut self, elements: Vec<CellElement>) {
        self.elements = elements;
    }
}

impl BoardSource for ScrapedBoard {
    fn snapshot(&mut self) -> Result<Snapshot> {
        let cells = self
            .elements
            .iter()
            .map(CellElement::to_snapshot_cell)
            .collect::<Result<Vec<_>>>()?;
        log::trace!("scraped {} cells", cells.len());
        Snapshot::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CountingSolver, DeductionMode, Solver};
    use crate::Action;

    #[test]
    fn test_parse_cell_classes() {
        let opened = CellElement::new(2, 3, "cell size24 hd_opened hd_type3");
        assert_eq!(
            opened.to_snapshot_cell().unwrap(),
            SnapshotCell::discovered(Position::new(2, 3), 3)
        );

        let flagged = CellElement::new(0, 0, "cell size24 hd_closed hd_flag");
        assert_eq!(
            flagged.to_snapshot_cell().unwrap(),
            SnapshotCell::undiscovered(Position::new(0, 0), true)
        );

        let closed = CellElement::new(1, 0, "cell size24 hd_closed");
        assert!(closed.to_snapshot_cell().unwrap().is_undecided());
    }

    #[test]
    fn test_opened_without_count_is_rejected() {
        // exploded mines render with types past 8
        let mine = CellElement::new(4, 1, "cell hd_opened hd_type11");
        assert!(matches!(
            mine.to_snapshot_cell(),
            Err(GameError::UnrecognizedCell { x: 4, y: 1, .. })
        ));
    }

    #[test]
    fn test_element_id_and_face() {
        assert_eq!(element_id(Position::new(7, 12)), "cell_7_12");
        assert_eq!(
            face_state("top-area-face hd_top-area-face-win"),
            GameState::Won
        );
        assert_eq!(
            face_state("top-area-face hd_top-area-face-lose"),
            GameState::Lost
        );
        assert_eq!(
            face_state("top-area-face hd_top-area-face-unpressed"),
            GameState::Running
        );
    }

    #[test]
    fn test_scraped_board_feeds_solver() {
        let mut board = ScrapedBoard::new(vec![
            CellElement::new(0, 0, "cell hd_opened hd_type1"),
            CellElement::new(1, 0, "cell hd_closed"),
            CellElement::new(0, 1, "cell hd_opened hd_type1"),
            CellElement::new(1, 1, "cell hd_opened hd_type1"),
        ]);
        let snapshot = board.snapshot().unwrap();
        let solver = CountingSolver::new(DeductionMode::SnapshotAuthoritative);

        assert_eq!(
            solver.solve(&snapshot),
            vec![Action::flag(Position::new(1, 0))]
        );

        let single = CellElement::new(0, 0, "cell hd_opened hd_type1");
        board.update(vec![single]);
        assert_eq!(board.snapshot().unwrap().dimensions(), (1, 1));
    }
}
