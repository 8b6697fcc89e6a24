/// A decoded player command, independent of the key that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    ToggleFlag,
    Reveal,
    Quit,
}
