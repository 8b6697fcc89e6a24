use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::util::{DIRS_8, DIRS_9, Pos, index_pos, pos_index, valid_neighbors};
use rand::Rng;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

pub const MIN_SIDE: u16 = 5;
pub const MAX_PERCENT: i32 = 100;
/// Cells kept free around the cursor when mines are laid out.
const SAFE_ZONE_CELLS: u64 = 9;

/// Mines on a `rows` x `cols` board at `percent` density.
pub fn mine_budget(rows: u16, cols: u16, percent: u8) -> usize {
    let size = rows as u64 * cols as u64;
    let by_density = size * percent as u64 / 100;
    by_density.min(size.saturating_sub(SAFE_ZONE_CELLS)) as usize
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Layout {
    Unseeded,
    Seeded,
}

#[derive(Clone, Debug)]
pub struct Grid {
    rows: u16,
    cols: u16,
    percent: u8,
    cursor: Pos,
    layout: Layout,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: u16, cols: u16, percent: i32) -> Result<Self> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        if percent <= 0 {
            return Err(GridError::InvalidDensity(percent));
        }
        let percent = percent.min(MAX_PERCENT) as u8;

        let size = rows as usize * cols as usize;
        let cells = (0..size).map(|i| Cell::new(index_pos(i, cols))).collect();

        Ok(Self {
            rows,
            cols,
            percent,
            cursor: (rows / 2, cols / 2),
            layout: Layout::Unseeded,
            cells,
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, pos: Pos) {
        self.assert_in_bounds(pos);
        self.cursor = pos;
    }

    pub fn is_seeded(&self) -> bool {
        self.layout == Layout::Seeded
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_count(&self) -> usize {
        self.cells.len()
    }

    pub fn mine_budget(&self) -> usize {
        mine_budget(self.rows, self.cols, self.percent)
    }

    pub fn flagged_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_flagged()).count()
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visible()).count()
    }

    /// Can go negative when the player over-flags.
    pub fn bombs_left(&self) -> isize {
        self.mine_budget() as isize - self.flagged_count() as isize
    }

    pub fn cell(&self, pos: Pos) -> &Cell {
        self.assert_in_bounds(pos);
        &self.cells[pos_index(pos, self.cols)]
    }

    fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        self.assert_in_bounds(pos);
        &mut self.cells[pos_index(pos, self.cols)]
    }

    fn assert_in_bounds(&self, (row, col): Pos) {
        assert!(
            row < self.rows && col < self.cols,
            "row {row}/col {col} outside grid bounds (0-{}/0-{})",
            self.rows,
            self.cols
        );
    }

    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<> {
        self.assert_in_bounds(pos);
        valid_neighbors(&DIRS_8, pos, self.rows, self.cols)
    }

    pub fn count_nearby(&self, pos: Pos, predicate: impl Fn(&Cell) -> bool) -> u8 {
        self.neighbors(pos)
            .filter(|&n| predicate(self.cell(n)))
            .count() as u8
    }

    pub fn nearby_mines(&self, pos: Pos) -> u8 {
        self.count_nearby(pos, Cell::is_mine)
    }

    pub fn nearby_flagged(&self, pos: Pos) -> u8 {
        self.count_nearby(pos, Cell::is_flagged)
    }

    /// Whether `pos` is inside the 3x3 block centered on the cursor.
    pub fn in_safe_zone(&self, pos: Pos) -> bool {
        valid_neighbors(&DIRS_9, self.cursor, self.rows, self.cols).any(|p| p == pos)
    }

    /// Lays out the mine budget at random, away from the cursor. Runs once per grid.
    pub fn generate_mines<R: Rng>(&mut self, rng: &mut R) {
        if self.is_seeded() {
            return;
        }

        let budget = self.mine_budget();
        if budget == 0 {
            log::warn!(
                "{}% of {}x{} rounds down to no mines",
                self.percent,
                self.rows,
                self.cols
            );
        }

        let mut placed = 0;
        let mut rejected = 0usize;
        while placed < budget {
            let pos = (rng.random_range(0..self.rows), rng.random_range(0..self.cols));
            if self.in_safe_zone(pos) || self.cell(pos).is_mine() {
                rejected += 1;
                continue;
            }
            self.cell_mut(pos).plant_mine();
            placed += 1;
        }

        self.layout = Layout::Seeded;
        log::debug!(
            "placed {placed} mines around cursor {:?}, {rejected} samples rejected",
            self.cursor
        );
    }

    /// Seeds the grid if needed and hands out the view that play happens through.
    pub fn seed<R: Rng>(&mut self, rng: &mut R) -> Seeded<'_> {
        self.generate_mines(rng);
        Seeded(self)
    }

    #[allow(dead_code)]
    pub fn seeded(&mut self) -> Option<Seeded<'_>> {
        self.is_seeded().then_some(Seeded(self))
    }

    /// A seeded grid with mines exactly at `mines`.
    #[cfg(test)]
    pub(crate) fn with_mines(rows: u16, cols: u16, percent: i32, mines: &[Pos]) -> Self {
        let mut grid = Self::new(rows, cols, percent).expect("valid test grid");
        for &pos in mines {
            grid.cell_mut(pos).plant_mine();
        }
        grid.layout = Layout::Seeded;
        grid
    }
}

/// Mutable access to a grid whose mines are laid out.
pub struct Seeded<'a>(&'a mut Grid);

impl Seeded<'_> {
    pub(crate) fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        self.0.cell_mut(pos)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.0.cells.iter_mut()
    }
}

impl Deref for Seeded<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.0
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks_exact(self.cols as usize) {
            for cell in line {
                write!(f, "{}", cell.symbol(self.nearby_mines(cell.pos())))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
