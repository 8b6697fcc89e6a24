use crate::action::Command;
use crate::cell_content::CellContent;
use crate::flag::Flag::*;
use crate::grid::Grid;
use crate::session::Session;
use crate::visibility::Visibility::*;
use crate::win_state::WinState;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::ThreadRng;
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::style::Color::*;
use ratatui::{
    DefaultTerminal, Frame,
    style::Stylize,
    text::Line,
    widgets::{Block, Paragraph},
};

/// Plays `grid` in raw mode until the game ends, then hands the finished session back.
pub fn main(grid: Grid) -> Result<Session<ThreadRng>> {
    let terminal = ratatui::init();
    let result = App::new(grid).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    session: Session<ThreadRng>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(grid: Grid) -> Self {
        Self {
            running: false,
            session: Session::new(grid, rand::rng()),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<Session<ThreadRng>> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            if let Some(command) = self.handle_crossterm_events()? {
                self.session.update(command);
            }

            match self.session.win_state() {
                WinState::Won | WinState::Lost => {
                    terminal.draw(|frame| self.render(frame))?;
                    self.wait_for_key()?;
                    self.running = false;
                }
                WinState::Abandoned => self.running = false,
                WinState::Untouched | WinState::Ongoing => {}
            }
        }

        Ok(self.session)
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let grid = self.session.grid();
        let (rows, cols) = (grid.rows(), grid.cols());
        let (row, col) = grid.cursor();

        let (title, bottom) = match self.session.win_state() {
            WinState::Won => (
                Line::from("You won!").bold().light_green().centered(),
                Line::from("press any key").bold().light_green().centered(),
            ),
            WinState::Lost => (
                Line::from("Boom!").bold().light_red().centered(),
                Line::from("press any key").bold().light_red().centered(),
            ),
            _ => {
                let mut stats = format!("{} bombs left ({row},{col})", grid.bombs_left());
                if stats.len() as u16 > cols {
                    stats = format!("{}", grid.bombs_left());
                }
                (
                    Line::from("Minesweeper!").bold().light_blue().centered(),
                    Line::from(stats).centered(),
                )
            }
        };
        let area = frame.area().clamp(Rect::new(
            0,
            0,
            cols.saturating_add(2),
            rows.saturating_add(2),
        ));

        frame.render_widget(
            Paragraph::new("")
                .block(Block::bordered().title(title).title_bottom(bottom))
                .centered(),
            area,
        );

        if area.height < 3 || area.width < 3 {
            return;
        }

        for y in area.y + 1..area.y + area.height - 1 {
            for x in area.x + 1..area.x + area.width - 1 {
                let pos = (y - area.y - 1, x - area.x - 1);
                if pos.0 >= rows || pos.1 >= cols {
                    continue;
                }
                let (char, bg, fg) = glyph(grid, pos);
                let mut c = Cell::new("");
                c.set_char(char).set_fg(fg).set_bg(bg);
                if pos == (row, col) {
                    c.set_bg(White).set_fg(Black);
                }
                if let Some(slot) = frame.buffer_mut().cell_mut((x, y)) {
                    *slot = c;
                }
            }
        }

        frame.set_cursor_position(Position {
            x: area.x + 1 + col,
            y: area.y + 1 + row,
        });
    }

    fn handle_crossterm_events(&mut self) -> Result<Option<Command>> {
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(command_for(key)),
            _ => Ok(None),
        }
    }

    fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

/// Character and colors for the cell at `pos`, as `(char, bg, fg)`.
fn glyph(grid: &Grid, pos: (u16, u16)) -> (char, Color, Color) {
    const HIDDEN_COLOR: Color = Gray;
    const WARN_COLOR: Color = LightYellow;
    const NUM_COLOR: Color = Black;

    let cell = grid.cell(pos);
    match cell.visibility() {
        Hidden(Clear) => ('░', Reset, HIDDEN_COLOR),
        Hidden(Flagged) => ('F', LightRed, WARN_COLOR),
        Shown => match cell.content() {
            CellContent::Mine => ('@', Black, LightRed),
            CellContent::Empty => match grid.nearby_mines(pos) {
                0 => (' ', Reset, Reset),
                1 => ('1', LightBlue, NUM_COLOR),
                2 => ('2', LightGreen, NUM_COLOR),
                3 => ('3', LightCyan, NUM_COLOR),
                4 => ('4', Cyan, NUM_COLOR),
                5 => ('5', LightYellow, NUM_COLOR),
                n @ 6.. => ((b'0' + n.min(8)) as char, LightMagenta, NUM_COLOR),
            },
        },
    }
}

/// Maps a key press onto a game command, `None` for keys the game ignores.
fn command_for(key: KeyEvent) -> Option<Command> {
    use Command::*;
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Quit),
        (_, KeyCode::Char('w') | KeyCode::Up) => Some(Up),
        (_, KeyCode::Char('s') | KeyCode::Down) => Some(Down),
        (_, KeyCode::Char('a') | KeyCode::Left) => Some(Left),
        (_, KeyCode::Char('d') | KeyCode::Right) => Some(Right),
        (_, KeyCode::Char('f')) => Some(ToggleFlag),
        (_, KeyCode::Char(' ')) => Some(Reveal),
        _ => None,
    }
}
