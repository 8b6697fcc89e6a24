use crate::action::Command;
use crate::cursor::Direction;
use crate::grid::Grid;
use crate::reveal::Reveal;
use crate::win_state::WinState;
use crate::win_state::WinState::*;
use rand::Rng;

/// One game: a grid, the randomness that seeds it, and where play stands.
#[derive(Debug)]
pub struct Session<R> {
    grid: Grid,
    rng: R,
    win_state: WinState,
}

impl<R: Rng> Session<R> {
    pub fn new(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            rng,
            win_state: Untouched,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn win_state(&self) -> WinState {
        self.win_state
    }

    /// Runs one full turn. Commands after the game is over are ignored.
    pub fn update(&mut self, command: Command) -> WinState {
        if self.win_state.is_over() {
            return self.win_state;
        }

        match command {
            Command::Up => self.grid.move_cursor(Direction::Up),
            Command::Down => self.grid.move_cursor(Direction::Down),
            Command::Left => self.grid.move_cursor(Direction::Left),
            Command::Right => self.grid.move_cursor(Direction::Right),
            Command::ToggleFlag => {
                let cursor = self.grid.cursor();
                self.grid.seed(&mut self.rng).toggle_flag(cursor);
                self.settle();
            }
            Command::Reveal => {
                let cursor = self.grid.cursor();
                let mut grid = self.grid.seed(&mut self.rng);
                match grid.tap(cursor) {
                    Reveal::Detonated(pos) => {
                        grid.show_all_mines();
                        self.win_state = Lost;
                        log::info!("lost, mine at {pos:?}");
                    }
                    Reveal::Opened(count) => {
                        log::debug!(
                            "opened {count} cells from {cursor:?}, {} visible",
                            self.grid.visible_count()
                        );
                        self.settle();
                    }
                    Reveal::Unchanged => self.settle(),
                }
            }
            Command::Quit => {
                self.win_state = Abandoned;
                log::info!("quit with {} bombs left", self.grid.bombs_left());
            }
        }

        if self.win_state.is_over() {
            log::debug!("final board:\n{}", self.grid);
        }
        self.win_state
    }

    fn settle(&mut self) {
        self.win_state = if self.grid.did_win() {
            log::info!(
                "won {}x{} at {}%",
                self.grid.rows(),
                self.grid.cols(),
                self.grid.percent()
            );
            Won
        } else {
            Ongoing
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Command::{Down, Left, Quit, Right, ToggleFlag, Up};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(rows: u16, cols: u16, percent: i32, seed: u64) -> Session<StdRng> {
        let grid = Grid::new(rows, cols, percent).unwrap();
        Session::new(grid, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn movement_does_not_seed() {
        let mut s = session(5, 5, 20, 1);
        assert_eq!(s.update(Up), Untouched);
        assert_eq!(s.update(Left), Untouched);
        assert_eq!(s.grid().cursor(), (1, 1));
        assert!(!s.grid().is_seeded());
    }

    #[test]
    fn first_reveal_is_safe() {
        for seed in 0..50 {
            let mut s = session(6, 6, 100, seed);
            s.update(Down);
            s.update(Right);
            let state = s.update(Command::Reveal);
            assert_ne!(state, Lost);
            assert!(s.grid().is_seeded());
            assert!(s.grid().cell((4, 4)).is_visible());
            assert_eq!(s.grid().nearby_mines((4, 4)), 0);
        }
    }

    #[test]
    fn flag_before_reveal_seeds_around_cursor() {
        let mut s = session(7, 7, 50, 9);
        assert_eq!(s.update(ToggleFlag), Ongoing);
        assert!(s.grid().is_seeded());
        assert!(s.grid().cell((3, 3)).is_flagged());
        assert!(!s.grid().cell((3, 3)).is_mine());
    }

    #[test]
    fn empty_board_wins_on_first_reveal() {
        let mut s = session(8, 8, 1, 3);
        assert_eq!(s.update(Command::Reveal), Won);
        assert_eq!(s.grid().visible_count(), 64);
        // finished sessions ignore input
        assert_eq!(s.update(Up), Won);
        assert_eq!(s.grid().cursor(), (4, 4));
    }

    #[test]
    fn stepping_on_a_mine_loses_and_shows_all() {
        let mut s = session(9, 9, 40, 21);
        s.update(Command::Reveal);

        // walk to the first hidden mine and step on it
        let mine = s
            .grid()
            .cells()
            .iter()
            .find(|c| c.is_mine())
            .map(|c| c.pos())
            .unwrap();
        while s.grid().cursor().0 != mine.0 {
            s.update(Down);
        }
        while s.grid().cursor().1 != mine.1 {
            s.update(Right);
        }

        assert_eq!(s.update(Command::Reveal), Lost);
        assert!(
            s.grid()
                .cells()
                .iter()
                .filter(|c| c.is_mine())
                .all(|c| c.is_visible())
        );
        assert_eq!(s.update(Command::Reveal), Lost);
    }

    #[test]
    fn quit_ends_session() {
        let mut s = session(5, 5, 20, 0);
        assert_eq!(s.update(Quit), Abandoned);
        assert!(s.win_state().is_over());
        assert_eq!(s.update(Command::Reveal), Abandoned);
        assert!(!s.grid().is_seeded());
    }

    #[test]
    fn clearing_the_board_wins() {
        let mut s = session(6, 6, 20, 4);
        s.update(Command::Reveal);
        let safe: Vec<_> = s
            .grid()
            .cells()
            .iter()
            .filter(|c| !c.is_mine())
            .map(|c| c.pos())
            .collect();

        let mut state = s.win_state();
        for (row, col) in safe {
            if s.grid().cell((row, col)).is_visible() {
                continue;
            }
            while s.grid().cursor() != (row, col) {
                if s.grid().cursor().0 != row {
                    s.update(Down);
                } else {
                    s.update(Right);
                }
            }
            state = s.update(Command::Reveal);
            assert_ne!(state, Lost);
        }
        assert_eq!(state, Won);
        assert_eq!(s.grid().flagged_count(), 0);
    }
}
