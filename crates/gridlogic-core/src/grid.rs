//! Owned square grid container.
//!
//! [`Grid<T>`] stores `N×N` cells in a flat row-major buffer. Puzzles own
//! their grids exclusively; callers observe them through shared borrows, so a
//! returned `&Grid<T>` can never be used to mutate puzzle state.
//!
//! Number grids (`Grid<u8>`) and masks (`Grid<bool>`) implement [`Display`]
//! and [`FromStr`] with a compact text format:
//!
//! - number grids: `1`-`9` for values, `.`, `_` or `0` for empty cells
//! - masks: `#` for `true` (black), `.` or `_` for `false` (white)
//! - whitespace is ignored, and the side length is inferred from the number
//!   of cells, which must be a perfect square
//!
//! # Examples
//!
//! ```
//! use gridlogic_core::{Grid, Position};
//!
//! let grid: Grid<u8> = "
//!     12.
//!     .31
//!     3.2
//! "
//! .parse()?;
//!
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid[Position::new(1, 1)], 3);
//! assert_eq!(grid[Position::new(0, 2)], 0);
//! assert_eq!(grid.to_string(), "12.\n.31\n3.2");
//! # Ok::<(), gridlogic_core::GridParseError>(())
//! ```

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    slice,
    str::FromStr,
};

use crate::Position;

/// A square grid of side `size`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every position in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlogic_core::{Grid, Position};
    ///
    /// let grid = Grid::from_fn(3, |pos| pos.row() * 3 + pos.col());
    /// assert_eq!(grid[Position::new(2, 1)], 7);
    /// ```
    pub fn from_fn(size: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let cells = Position::all(size).map(&mut f).collect();
        Self { size, cells }
    }

    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (`size * size`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for a zero-sized grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies on this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Returns the cell at `pos`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[pos.index(self.size)])
    }

    /// Returns the cell at `pos` mutably, or `None` if it is out of range.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            let index = pos.index(self.size);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Returns every position of this grid in row-major order.
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Position> + Clone + use<T> {
        Position::all(self.size)
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iterates over the cells in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates over `(position, cell)` pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.size, "row {row} out of range");
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> {
        assert!(col < self.size, "column {col} out of range");
        self.cells.iter().skip(col).step_by(self.size)
    }

    /// Swaps two rows.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of range.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.size && b < self.size, "row out of range");
        for col in 0..self.size {
            self.cells.swap(a * self.size + col, b * self.size + col);
        }
    }

    /// Swaps two columns.
    ///
    /// # Panics
    ///
    /// Panics if either column is out of range.
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        assert!(a < self.size && b < self.size, "column out of range");
        for row in 0..self.size {
            self.cells.swap(row * self.size + a, row * self.size + b);
        }
    }

    /// Maps every cell into a new grid of the same size.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl Grid<bool> {
    /// Returns the number of `true` cells.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl Grid<u8> {
    /// Returns the number of zero (empty) cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    fn index(&self, pos: Position) -> &T {
        assert!(self.contains(pos), "position {pos} out of range");
        &self.cells[pos.index(self.size)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(self.contains(pos), "position {pos} out of range");
        let index = pos.index(self.size);
        &mut self.cells[index]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors returned when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A character outside the grid alphabet was found.
    #[display("invalid grid character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The number of cells is not a positive perfect square.
    #[display("cell count {len} is not a square")]
    NotSquare {
        /// Number of cells found.
        len: usize,
    },
    /// A value is larger than the grid side allows.
    #[display("value {value} exceeds grid size {size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// Grid side inferred from the text.
        size: usize,
    },
}

fn square_side(len: usize) -> Result<usize, GridParseError> {
    let side = (1..=len).take_while(|n| n * n <= len).last();
    match side {
        Some(side) if side * side == len => Ok(side),
        _ => Err(GridParseError::NotSquare { len }),
    }
}

fn parse_cells<T>(
    s: &str,
    mut cell: impl FnMut(char) -> Result<T, GridParseError>,
) -> Result<Grid<T>, GridParseError> {
    let cells = s
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(&mut cell)
        .collect::<Result<Vec<_>, _>>()?;
    let size = square_side(cells.len())?;
    Ok(Grid { size, cells })
}

impl FromStr for Grid<u8> {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = parse_cells(s, |ch| match ch {
            '.' | '_' => Ok(0),
            '0'..='9' => Ok(u8::try_from(ch).map_or(0, |byte| byte - b'0')),
            _ => Err(GridParseError::InvalidChar { ch }),
        })?;
        if let Some(&value) = grid.iter().find(|&&v| usize::from(v) > grid.size) {
            return Err(GridParseError::ValueOutOfRange {
                value,
                size: grid.size,
            });
        }
        Ok(grid)
    }
}

impl FromStr for Grid<bool> {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cells(s, |ch| match ch {
            '#' => Ok(true),
            '.' | '_' => Ok(false),
            _ => Err(GridParseError::InvalidChar { ch }),
        })
    }
}

fn fmt_rows<T>(
    grid: &Grid<T>,
    f: &mut fmt::Formatter<'_>,
    mut cell: impl FnMut(&T) -> char,
) -> fmt::Result {
    for row in 0..grid.size {
        if row > 0 {
            writeln!(f)?;
        }
        for value in grid.row(row) {
            write!(f, "{}", cell(value))?;
        }
    }
    Ok(())
}

impl Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(self, f, |&value| match value {
            0 => '.',
            v => char::from_digit(u32::from(v), 36).unwrap_or('?'),
        })
    }
}

impl Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(self, f, |&black| if black { '#' } else { '.' })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_index_agree_in_range() {
        let grid = Grid::from_fn(4, |pos| pos.index(4));
        for pos in grid.positions() {
            assert_eq!(grid.get(pos), Some(&grid[pos]));
        }
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.get(Position::new(0, 4)), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let grid = Grid::filled(3, 0_u8);
        let _ = grid[Position::new(3, 3)];
    }

    #[test]
    fn test_rows_and_columns() {
        let grid = Grid::from_fn(3, |pos| pos.index(3));
        assert_eq!(grid.row(1), &[3, 4, 5]);
        assert_eq!(grid.column(2).copied().collect::<Vec<_>>(), [2, 5, 8]);
    }

    #[test]
    fn test_swap_rows_and_columns() {
        let mut grid = Grid::from_fn(3, |pos| pos.index(3));
        grid.swap_rows(0, 2);
        assert_eq!(grid.row(0), &[6, 7, 8]);
        assert_eq!(grid.row(2), &[0, 1, 2]);

        grid.swap_columns(0, 1);
        assert_eq!(grid.row(0), &[7, 6, 8]);
        assert_eq!(grid.column(0).copied().collect::<Vec<_>>(), [7, 4, 1]);
    }

    #[test]
    fn test_parse_number_grid() {
        let grid: Grid<u8> = "1_3 0.2 321".parse().unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.row(0), &[1, 0, 3]);
        assert_eq!(grid.row(1), &[0, 0, 2]);
        assert_eq!(grid.count_empty(), 3);
    }

    #[test]
    fn test_parse_number_grid_errors() {
        assert_eq!(
            "12x4".parse::<Grid<u8>>(),
            Err(GridParseError::InvalidChar { ch: 'x' })
        );
        assert_eq!(
            "123".parse::<Grid<u8>>(),
            Err(GridParseError::NotSquare { len: 3 })
        );
        assert_eq!(
            "".parse::<Grid<u8>>(),
            Err(GridParseError::NotSquare { len: 0 })
        );
        assert_eq!(
            "1234".parse::<Grid<u8>>(),
            Err(GridParseError::ValueOutOfRange { value: 3, size: 2 })
        );
    }

    #[test]
    fn test_mask_display_and_parse() {
        let mask: Grid<bool> = "#.. .#. ..#".parse().unwrap();
        assert_eq!(mask.count_set(), 3);
        assert_eq!(mask.to_string(), "#..\n.#.\n..#");
        assert_eq!(mask.to_string().parse::<Grid<bool>>().unwrap(), mask);
    }

    #[test]
    fn test_map_keeps_size() {
        let grid: Grid<u8> = "12 21".parse().unwrap();
        let ones = grid.map(|&v| v == 1);
        assert_eq!(ones.size(), 2);
        assert_eq!(ones.to_string(), "#.\n.#");
    }
}
