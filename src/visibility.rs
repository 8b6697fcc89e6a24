use crate::flag::Flag;

/// A shown cell carries no flag, so flags and visibility can never overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden(Flag),
    Shown,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden(Flag::Clear)
    }
}
