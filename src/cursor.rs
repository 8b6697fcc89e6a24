use crate::grid::Grid;
use crate::util::Pos;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One step from `(row, col)`, wrapping around the edges of a `rows` x `cols` grid.
pub fn step((row, col): Pos, direction: Direction, rows: u16, cols: u16) -> Pos {
    match direction {
        Up => (row.checked_sub(1).unwrap_or(rows - 1), col),
        Down => ((row + 1) % rows, col),
        Left => (row, col.checked_sub(1).unwrap_or(cols - 1)),
        Right => (row, (col + 1) % cols),
    }
}

impl Grid {
    pub fn move_cursor(&mut self, direction: Direction) {
        let next = step(self.cursor(), direction, self.rows(), self.cols());
        self.set_cursor(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_every_edge() {
        assert_eq!(step((0, 3), Up, 5, 7), (4, 3));
        assert_eq!(step((4, 3), Down, 5, 7), (0, 3));
        assert_eq!(step((2, 0), Left, 5, 7), (2, 6));
        assert_eq!(step((2, 6), Right, 5, 7), (2, 0));
    }

    #[test]
    fn interior_steps() {
        assert_eq!(step((2, 3), Up, 5, 7), (1, 3));
        assert_eq!(step((2, 3), Down, 5, 7), (3, 3));
        assert_eq!(step((2, 3), Left, 5, 7), (2, 2));
        assert_eq!(step((2, 3), Right, 5, 7), (2, 4));
    }

    #[test]
    fn full_lap_returns_home() {
        let mut grid = Grid::new(6, 9, 20).unwrap();
        let home = grid.cursor();
        for _ in 0..6 {
            grid.move_cursor(Down);
        }
        for _ in 0..9 {
            grid.move_cursor(Left);
        }
        assert_eq!(grid.cursor(), home);
        assert_eq!(grid.visible_count(), 0);
        assert!(!grid.is_seeded());
    }
}
