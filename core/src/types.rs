use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and dimensions.
pub type Coord = u8;

/// Value carried by a non-empty tile.
pub type Value = u32;

/// Running score of one game session.
pub type Score = u32;

/// `(row, column)` coordinates.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// A direction in which the whole board slides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell coordinates of every line for this direction. Within each
    /// line the leading edge comes first; lines follow the direction's
    /// leading-edge scan order.
    pub(crate) fn lines(self, dimension: Coord) -> Vec<Vec<Coord2>> {
        match self {
            Direction::Left => (0..dimension)
                .map(|r| (0..dimension).map(|c| (r, c)).collect())
                .collect(),
            Direction::Right => (0..dimension)
                .map(|r| (0..dimension).rev().map(|c| (r, c)).collect())
                .collect(),
            Direction::Up => (0..dimension)
                .map(|c| (0..dimension).map(|r| (r, c)).collect())
                .collect(),
            Direction::Down => (0..dimension)
                .map(|c| (0..dimension).rev().map(|r| (r, c)).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_lines_are_rows_from_column_zero() {
        let lines = Direction::Left.lines(2);
        assert_eq!(lines, vec![vec![(0, 0), (0, 1)], vec![(1, 0), (1, 1)]]);
    }

    #[test]
    fn right_lines_are_rows_from_last_column() {
        let lines = Direction::Right.lines(2);
        assert_eq!(lines, vec![vec![(0, 1), (0, 0)], vec![(1, 1), (1, 0)]]);
    }

    #[test]
    fn up_lines_are_columns_from_row_zero() {
        let lines = Direction::Up.lines(2);
        assert_eq!(lines, vec![vec![(0, 0), (1, 0)], vec![(0, 1), (1, 1)]]);
    }

    #[test]
    fn down_lines_are_columns_from_last_row() {
        let lines = Direction::Down.lines(2);
        assert_eq!(lines, vec![vec![(1, 0), (0, 0)], vec![(1, 1), (0, 1)]]);
    }
}
