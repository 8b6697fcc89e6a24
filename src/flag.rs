#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flag {
    Clear,
    Flagged,
}

impl Flag {
    pub fn toggled(self) -> Self {
        match self {
            Self::Clear => Self::Flagged,
            Self::Flagged => Self::Clear,
        }
    }
}
