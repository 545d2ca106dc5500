//! Rows, columns and boxes of a 9×9 Sudoku grid.

use std::iter::FusedIterator;

use crate::Position;

/// Side length of a Sudoku grid.
pub const SUDOKU_SIZE: usize = 9;

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its index (0-8).
    Row {
        /// Row index (0-8).
        row: usize,
    },
    /// A column identified by its index (0-8).
    Column {
        /// Column index (0-8).
        col: usize,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: usize,
    },
}

impl House {
    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        while i < SUDOKU_SIZE {
            all[i] = Self::Row { row: i };
            all[i + 9] = Self::Column { col: i };
            all[i + 18] = Self::Box { index: i };
            i += 1;
        }
        all
    };

    /// Returns the three houses (row, column, box) that contain `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlogic_core::{House, Position};
    ///
    /// let [row, col, box_] = House::containing(Position::new(4, 7));
    /// assert_eq!(row, House::Row { row: 4 });
    /// assert_eq!(col, House::Column { col: 7 });
    /// assert_eq!(box_, House::Box { index: 5 });
    /// ```
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
            Self::Box {
                index: (pos.row() / 3) * 3 + pos.col() / 3,
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_from_cell_index(self, i: usize) -> Position {
        assert!(i < SUDOKU_SIZE);
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
            House::Box { index } => Position::new((index / 3) * 3 + i / 3, (index % 3) * 3 + i % 3),
        }
    }

    /// Returns an iterator over the nine positions of this house.
    #[must_use]
    pub fn positions(self) -> HousePositions {
        HousePositions {
            house: self,
            front: 0,
            back: SUDOKU_SIZE,
        }
    }
}

/// Iterator over the positions of a [`House`].
#[derive(Debug, Clone)]
pub struct HousePositions {
    house: House,
    front: usize,
    back: usize,
}

impl Iterator for HousePositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.house.position_from_cell_index(self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for HousePositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.house.position_from_cell_index(self.back))
    }
}

impl FusedIterator for HousePositions {}
impl ExactSizeIterator for HousePositions {}
