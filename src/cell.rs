use crate::cell_content::CellContent::{self, *};
use crate::flag::Flag::{self, *};
use crate::util::Pos;
use crate::visibility::Visibility::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    visibility: Visibility,
    content: CellContent,
    row: u16,
    col: u16,
}

impl Cell {
    pub fn new((row, col): Pos) -> Self {
        Self {
            visibility: Visibility::default(),
            content: CellContent::default(),
            row,
            col,
        }
    }

    pub fn pos(&self) -> Pos {
        (self.row, self.col)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn content(&self) -> CellContent {
        self.content
    }

    pub fn is_mine(&self) -> bool {
        self.content == Mine
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Shown
    }

    pub fn is_flagged(&self) -> bool {
        self.visibility == Hidden(Flagged)
    }

    /// Hidden and unflagged, i.e. still waiting for the player.
    pub fn is_untouched(&self) -> bool {
        self.visibility == Hidden(Clear)
    }

    /// Only called while laying out mines, content is fixed afterwards.
    pub(crate) fn plant_mine(&mut self) {
        self.content = Mine;
    }

    /// Shows the cell, dropping any flag. Returns whether it was hidden.
    pub(crate) fn reveal(&mut self) -> bool {
        let was_hidden = !self.is_visible();
        self.visibility = Shown;
        was_hidden
    }

    pub(crate) fn set_flag(&mut self, flag: Flag) {
        if let Hidden(_) = self.visibility {
            self.visibility = Hidden(flag);
        }
    }

    /// Plain-text glyph, given the number of mines around the cell.
    pub fn symbol(&self, nearby_mines: u8) -> char {
        match self.visibility {
            Hidden(Clear) => '#',
            Hidden(Flagged) => 'F',
            Shown => match self.content {
                Mine => '*',
                Empty if nearby_mines == 0 => '.',
                Empty => (b'0' + nearby_mines.min(8)) as char,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_drops_flag() {
        let mut cell = Cell::new((1, 2));
        cell.set_flag(Flagged);
        assert!(cell.is_flagged());

        assert!(cell.reveal());
        assert!(cell.is_visible());
        assert!(!cell.is_flagged());
        assert!(!cell.reveal());
    }

    #[test]
    fn shown_cell_ignores_flags() {
        let mut cell = Cell::new((0, 0));
        cell.reveal();
        cell.set_flag(Flagged);
        assert_eq!(cell.visibility(), Shown);
    }

    #[test]
    fn symbols() {
        let mut cell = Cell::new((3, 4));
        assert_eq!(cell.pos(), (3, 4));
        assert_eq!(cell.symbol(0), '#');
        cell.set_flag(Flagged);
        assert_eq!(cell.symbol(0), 'F');
        cell.reveal();
        assert_eq!(cell.symbol(0), '.');
        assert_eq!(cell.symbol(3), '3');
        cell.plant_mine();
        assert_eq!(cell.symbol(3), '*');
    }
}
