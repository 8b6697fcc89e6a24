/// `(row, col)`, both zero based.
pub type Pos = (u16, u16);

/// Moore neighborhood as `(drow, dcol)`, in row-major order.
pub const DIRS_8: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
/// Moore neighborhood plus the center cell.
pub const DIRS_9: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn pos_index((row, col): Pos, cols: u16) -> usize {
    row as usize * cols as usize + col as usize
}

pub fn index_pos(index: usize, cols: u16) -> Pos {
    let cols = cols as usize;
    ((index / cols) as u16, (index % cols) as u16)
}

/// Offsets from `dirs` applied to `(row, col)`, dropping anything off the grid. No wraparound.
pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (row, col): Pos,
    rows: u16,
    cols: u16,
) -> impl Iterator<Item = Pos> {
    dirs.iter()
        .filter_map(move |&(drow, dcol)| {
            Some((
                row.checked_add_signed(drow as i16)?,
                col.checked_add_signed(dcol as i16)?,
            ))
        })
        .filter(move |&(i, j)| i < rows && j < cols)
}
