#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// All eight surrounding positions, bounds ignored.
    ///
    /// The order is row by row (`dy` outer, `dx` inner) and is relied on for
    /// deterministic flood fill.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    None
                } else {
                    Some(Position::new(self.x + dx, self.y + dy))
                }
            })
        })
    }

    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && (self.x as i64) < width as i64
            && (self.y as i64) < height as i64
    }

    /// Neighbors inside `[0, width) x [0, height)`.
    pub fn neighbors_within(
        &self,
        width: u32,
        height: u32,
    ) -> impl Iterator<Item = Position> + '_ {
        self.neighbors().filter(move |p| p.is_within(width, height))
    }

    /// `[row, column]` index into a `[height, width]` array. Callers check bounds first.
    pub(crate) fn to_index(self) -> [usize; 2] {
        [self.y as usize, self.x as usize]
    }
}
