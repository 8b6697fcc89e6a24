use crate::grid::{Grid, Seeded};
use crate::util::Pos;
use crate::visibility::Visibility::Hidden;
use Reveal::*;

/// What a single tap did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Nothing changed.
    Unchanged,
    /// This many cells turned visible, none of them mines.
    Opened(usize),
    /// A mine went off at this position. Propagation stopped right there.
    Detonated(Pos),
}

#[derive(Copy, Clone, Debug)]
enum Pending {
    /// Tap whatever is there, visible or not.
    Tap(Pos),
    /// Chord neighbor, only tapped if still hidden and unflagged when reached.
    Assist(Pos),
}

impl Seeded<'_> {
    /// Taps `pos`, flooding zero regions and chording satisfied numbers.
    ///
    /// Works off an explicit stack in the same depth-first order a recursive
    /// tap would follow. Visibility only ever grows, so the walk terminates.
    pub fn tap(&mut self, pos: Pos) -> Reveal {
        let mut stack = vec![Pending::Tap(pos)];
        let mut opened = 0;

        while let Some(pending) = stack.pop() {
            let pos = match pending {
                Pending::Tap(pos) => pos,
                Pending::Assist(pos) if self.cell(pos).is_untouched() => pos,
                Pending::Assist(_) => continue,
            };

            let nearby_mines = self.nearby_mines(pos);

            if self.cell(pos).is_visible() {
                if nearby_mines > 0 && self.nearby_flagged(pos) == nearby_mines {
                    let assists: Vec<Pos> = self
                        .neighbors(pos)
                        .filter(|&n| self.cell(n).is_untouched())
                        .collect();
                    stack.extend(assists.into_iter().rev().map(Pending::Assist));
                }
                continue;
            }

            let cell = self.cell_mut(pos);
            cell.reveal();
            opened += 1;

            if cell.is_mine() {
                log::debug!("mine at {pos:?} after opening {opened} cells");
                return Detonated(pos);
            }

            if nearby_mines == 0 {
                let neighbors: Vec<Pos> = self.neighbors(pos).collect();
                stack.extend(neighbors.into_iter().rev().map(Pending::Tap));
            }
        }

        if opened == 0 {
            Unchanged
        } else {
            Opened(opened)
        }
    }

    /// Flips the flag on a hidden cell while flags remain. Returns whether anything changed.
    pub fn toggle_flag(&mut self, pos: Pos) -> bool {
        let Hidden(flag) = self.cell(pos).visibility() else {
            return false;
        };
        if self.bombs_left() <= 0 {
            return false;
        }
        self.cell_mut(pos).set_flag(flag.toggled());
        true
    }

    /// Shows every mine, leaving the rest of the board as it is.
    pub fn show_all_mines(&mut self) {
        for cell in self.cells_mut().filter(|c| c.is_mine()) {
            cell.reveal();
        }
    }
}

impl Grid {
    /// Nothing hidden is left unflagged and every flag sits on a mine.
    ///
    /// The flag count does not have to match the mine budget.
    pub fn did_win(&self) -> bool {
        self.cells().iter().all(|c| !c.is_untouched())
            && self.cells().iter().filter(|c| c.is_flagged()).all(|c| c.is_mine())
    }
}
