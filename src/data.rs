#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up, Down, Left, Right,
}

impl Direction {
    // (drow, dcol)
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Directions visited by the row-major build scan. Every adjacent pair is
    /// seen exactly once, from its upper or left member.
    pub fn scan_directions() -> Vec<Direction> {
        vec![Direction::Down, Direction::Right]
    }

    pub fn adjacent_directions() -> Vec<Direction> {
        vec![Direction::Up, Direction::Down,
        Direction::Left, Direction::Right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_directions_point_forward() {
        for d in Direction::scan_directions() {
            let (dr, dc) = d.offset();
            assert!(dr >= 0 && dc >= 0);
            assert_eq!(dr + dc, 1);
        }
    }

    #[test]
    fn adjacent_offsets_cancel_out() {
        let (sr, sc) = Direction::adjacent_directions().iter()
            .map(|d| d.offset())
            .fold((0, 0), |(ar, ac), (r, c)| (ar + r, ac + c));
        assert_eq!((sr, sc), (0, 0));
    }
}
