use clap::Parser;
use std::path::PathBuf;

/// mines - a minesweeper clone for terminal nerds
#[derive(Parser, Clone, Debug)]
#[command(
    name = "mines",
    version,
    about,
    long_about = None,
    after_help = "EXAMPLES:\n  mines 10 25     a 10 rows by 25 columns field, 20% mine population\n  mines 10 10 25  a 10 rows by 10 columns field, 25% mine population"
)]
pub struct MinesArgs {
    /// number of rows in the field
    pub rows: u16,
    /// number of columns in the field
    pub cols: u16,
    /// percentage of the field to populate with mines
    #[arg(default_value_t = 20, allow_negative_numbers = true)]
    pub percentage: i32,
    /// write a debug log to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
    /// log at debug level instead of info
    #[arg(short, long, requires = "log")]
    pub verbose: bool,
}
