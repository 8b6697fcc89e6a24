#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Mine,
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty
    }
}
