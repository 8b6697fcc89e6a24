#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinState {
    /// No mines yet, the first reveal or flag seeds the board.
    Untouched,
    Ongoing,
    Lost,
    Won,
    /// The player quit between turns.
    Abandoned,
}

impl Default for WinState {
    fn default() -> Self {
        Self::Untouched
    }
}

impl WinState {
    pub fn is_over(self) -> bool {
        matches!(self, Self::Lost | Self::Won | Self::Abandoned)
    }
}
