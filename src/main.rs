use args::MinesArgs;
use clap::Parser;
use color_eyre::Result;
use grid::Grid;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use win_state::WinState;

mod action;
mod args;
mod cell;
mod cell_content;
mod cursor;
mod error;
mod flag;
mod grid;
mod report;
mod reveal;
mod session;
mod ui;
mod util;
mod visibility;
mod win_state;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MinesArgs::parse();

    if let Some(path) = &args.log {
        let level = if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        WriteLogger::init(level, Config::default(), File::create(path)?)?;
    }

    let grid = Grid::new(args.rows, args.cols, args.percentage)?;
    log::info!(
        "new {}x{} game at {}%, {} mines",
        grid.rows(),
        grid.cols(),
        grid.percent(),
        grid.mine_budget()
    );

    let session = ui::main(grid)?;
    let grid = session.grid();
    match session.win_state() {
        WinState::Won => println!(
            "{}",
            report::victory(grid.percent(), grid.mine_budget(), grid.cells_count())
        ),
        WinState::Lost => eprintln!("{}", report::DEFEAT),
        _ => {}
    }
    Ok(())
}
