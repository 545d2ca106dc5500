//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a square grid, `row` first.
///
/// Positions are plain coordinates and are not tied to a particular grid
/// size. Whether a position is inside a grid is answered by
/// [`Grid::contains`](crate::Grid::contains); operations that receive an
/// out-of-range position treat it as a no-op.
///
/// # Examples
///
/// ```
/// use gridlogic_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if the position lies on a `size × size` grid.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the row-major index of this position on a `size × size` grid.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Returns the position at a row-major `index` on a `size × size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    /// Returns every position of a `size × size` grid in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlogic_core::Position;
    ///
    /// let all: Vec<_> = Position::all(2).collect();
    /// assert_eq!(
    ///     all,
    ///     [
    ///         Position::new(0, 0),
    ///         Position::new(0, 1),
    ///         Position::new(1, 0),
    ///         Position::new(1, 1),
    ///     ]
    /// );
    /// ```
    pub fn all(size: usize) -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..size * size).map(move |i| Self::from_index(i, size))
    }

    /// Returns the orthogonal (4-connected) neighbours that lie on a
    /// `size × size` grid, in up, down, left, right order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlogic_core::Position;
    ///
    /// let corner: Vec<_> = Position::new(0, 0).neighbors(3).collect();
    /// assert_eq!(corner, [Position::new(1, 0), Position::new(0, 1)]);
    ///
    /// assert_eq!(Position::new(1, 1).neighbors(3).count(), 4);
    /// ```
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Self> {
        let Self { row, col } = self;
        let up = row.checked_sub(1).map(|r| Self::new(r, col));
        let down = Some(Self::new(row + 1, col));
        let left = col.checked_sub(1).map(|c| Self::new(row, c));
        let right = Some(Self::new(row, col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |pos| pos.is_within(size))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_on_each_size() {
        for size in 1..=9 {
            for (i, pos) in Position::all(size).enumerate() {
                assert_eq!(pos.index(size), i);
                assert_eq!(Position::from_index(i, size), pos);
                assert!(pos.is_within(size));
            }
        }
    }

    #[test]
    fn test_neighbors_skip_cells_off_the_grid() {
        let size = 5;
        assert_eq!(Position::new(0, 0).neighbors(size).count(), 2);
        assert_eq!(Position::new(0, 2).neighbors(size).count(), 3);
        assert_eq!(Position::new(4, 4).neighbors(size).count(), 2);
        assert_eq!(Position::new(2, 2).neighbors(size).count(), 4);

        let center: Vec<_> = Position::new(2, 2).neighbors(size).collect();
        assert_eq!(
            center,
            [
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_neighbors_of_out_of_range_position_are_filtered() {
        // (5, 4) is off a 5×5 grid; only in-range neighbours survive.
        let neighbors: Vec<_> = Position::new(5, 4).neighbors(5).collect();
        assert_eq!(neighbors, [Position::new(4, 4)]);
    }
}
