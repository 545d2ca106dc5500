//! Stateless rule predicates for Sudoku and Hitori.
//!
//! Every function here borrows its inputs read-only and is total: positions
//! outside the grid are treated as absent rather than rejected.
//!
//! Masks are `Grid<bool>` with `true` meaning a black (shaded) cell.

use std::collections::VecDeque;

use crate::{Grid, House, Position, house::SUDOKU_SIZE};

/// Returns `true` if any orthogonal neighbour of `pos` is black in `mask`.
///
/// The cell at `pos` itself is not inspected.
///
/// # Examples
///
/// ```
/// use gridlogic_core::{Grid, Position, rules};
///
/// let mask: Grid<bool> = "#.. ... ..#".parse()?;
/// assert!(rules::has_adjacent_black(&mask, Position::new(0, 1)));
/// assert!(!rules::has_adjacent_black(&mask, Position::new(1, 1)));
/// # Ok::<(), gridlogic_core::GridParseError>(())
/// ```
#[must_use]
pub fn has_adjacent_black(mask: &Grid<bool>, pos: Position) -> bool {
    pos.neighbors(mask.size()).any(|neighbor| mask[neighbor])
}

/// Returns `true` if some pair of orthogonally adjacent cells are both black.
#[must_use]
pub fn has_adjacent_black_pair(mask: &Grid<bool>) -> bool {
    mask.enumerate()
        .any(|(pos, &black)| black && has_adjacent_black(mask, pos))
}

/// Returns `true` if the white cells of `mask` form a single 4-connected
/// component.
///
/// Runs a breadth-first search from the first white cell in row-major order
/// and compares the number of visited cells with the total white count. A mask
/// without any white cell is reported as not connected.
///
/// # Examples
///
/// ```
/// use gridlogic_core::{Grid, rules};
///
/// let connected: Grid<bool> = ".#. ... .#.".parse()?;
/// assert!(rules::white_cells_connected(&connected));
///
/// let split: Grid<bool> = ".#. #.. ...".parse()?;
/// assert!(!rules::white_cells_connected(&split));
///
/// let all_black: Grid<bool> = "## ##".parse()?;
/// assert!(!rules::white_cells_connected(&all_black));
/// # Ok::<(), gridlogic_core::GridParseError>(())
/// ```
#[must_use]
pub fn white_cells_connected(mask: &Grid<bool>) -> bool {
    let white_count = mask.iter().filter(|&&black| !black).count();
    let Some(start) = mask.positions().find(|&pos| !mask[pos]) else {
        return false;
    };

    let mut visited = Grid::filled(mask.size(), false);
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    let mut connected_count = 1;

    while let Some(pos) = queue.pop_front() {
        for neighbor in pos.neighbors(mask.size()) {
            if !visited[neighbor] && !mask[neighbor] {
                visited[neighbor] = true;
                connected_count += 1;
                queue.push_back(neighbor);
            }
        }
    }

    connected_count == white_count
}

/// Returns `true` if no non-zero value occurs twice in `values`.
///
/// Zero means empty or unknown and is ignored.
///
/// # Examples
///
/// ```
/// use gridlogic_core::rules;
///
/// assert!(rules::group_has_no_duplicates([1, 0, 3, 0, 2]));
/// assert!(!rules::group_has_no_duplicates([4, 1, 4]));
/// ```
#[must_use]
pub fn group_has_no_duplicates(values: impl IntoIterator<Item = u8>) -> bool {
    let mut seen = [false; 256];
    for value in values {
        let value = usize::from(value);
        if value == 0 {
            continue;
        }
        if seen[value] {
            return false;
        }
        seen[value] = true;
    }
    true
}

fn house_values(grid: &Grid<u8>, house: House) -> impl Iterator<Item = u8> + '_ {
    house.positions().map(|pos| grid[pos])
}

fn is_sudoku_grid(grid: &Grid<u8>) -> bool {
    grid.size() == SUDOKU_SIZE
}

/// Returns `true` if no row, column or box of a 9×9 grid repeats a digit.
///
/// Empty cells are ignored, so this is the conflict check for a partially
/// filled board. Grids of any other size are reported as inconsistent.
#[must_use]
pub fn sudoku_state_consistent(grid: &Grid<u8>) -> bool {
    is_sudoku_grid(grid)
        && House::ALL
            .into_iter()
            .all(|house| group_has_no_duplicates(house_values(grid, house)))
}

/// Returns `true` if every row, column and box of a 9×9 grid contains each of
/// 1-9 exactly once.
#[must_use]
pub fn is_valid_sudoku_solution(grid: &Grid<u8>) -> bool {
    is_sudoku_grid(grid)
        && grid.iter().all(|&value| (1..=9).contains(&value))
        && sudoku_state_consistent(grid)
}

/// Returns `true` if the digit at `pos` repeats elsewhere in one of its
/// houses. Empty or out-of-range cells never conflict.
#[must_use]
pub fn sudoku_conflicts_at(grid: &Grid<u8>, pos: Position) -> bool {
    if !is_sudoku_grid(grid) {
        return false;
    }
    let Some(&value) = grid.get(pos) else {
        return false;
    };
    value != 0
        && House::containing(pos)
            .into_iter()
            .flat_map(House::positions)
            .any(|peer| peer != pos && grid[peer] == value)
}

/// Returns `true` if `cells` is completely filled and equal to `solution`.
#[must_use]
pub fn sudoku_matches_solution(cells: &Grid<u8>, solution: &Grid<u8>) -> bool {
    cells.size() == solution.size()
        && cells
            .iter()
            .zip(solution)
            .all(|(&cell, &expected)| cell != 0 && cell == expected)
}

fn white_values<'a>(
    numbers: impl Iterator<Item = &'a u8>,
    mask: impl Iterator<Item = &'a bool>,
) -> impl Iterator<Item = u8> {
    numbers
        .zip(mask)
        .filter(|&(_, &black)| !black)
        .map(|(&value, _)| value)
}

/// Returns `true` if no row or column repeats a number among its white cells.
#[must_use]
pub fn hitori_whites_unique(numbers: &Grid<u8>, mask: &Grid<bool>) -> bool {
    let size = numbers.size();
    (0..size).all(|i| {
        group_has_no_duplicates(white_values(numbers.row(i).iter(), mask.row(i).iter()))
            && group_has_no_duplicates(white_values(numbers.column(i), mask.column(i)))
    })
}

/// Returns `true` if `mask` is a complete Hitori solution for `numbers`.
///
/// A solution has no two orthogonally adjacent black cells, keeps every white
/// cell in one connected region, and leaves no number repeated among the white
/// cells of any row or column.
///
/// # Examples
///
/// ```
/// use gridlogic_core::{Grid, rules};
///
/// let numbers: Grid<u8> = "
///     323
///     231
///     312
/// "
/// .parse()?;
/// let solved: Grid<bool> = "#.. ... ...".parse()?;
/// assert!(rules::hitori_solved(&numbers, &solved));
///
/// let unshaded: Grid<bool> = "... ... ...".parse()?;
/// assert!(!rules::hitori_solved(&numbers, &unshaded));
/// # Ok::<(), gridlogic_core::GridParseError>(())
/// ```
#[must_use]
pub fn hitori_solved(numbers: &Grid<u8>, mask: &Grid<bool>) -> bool {
    numbers.size() == mask.size()
        && !has_adjacent_black_pair(mask)
        && white_cells_connected(mask)
        && hitori_whites_unique(numbers, mask)
}

/// Returns `true` if the cell at `pos` is black and touches another black
/// cell.
#[must_use]
pub fn hitori_error_at(mask: &Grid<bool>, pos: Position) -> bool {
    mask.get(pos).copied().unwrap_or(false) && has_adjacent_black(mask, pos)
}

/// Returns `true` if the white cell at `pos` shares its number with another
/// white cell in the same row.
#[must_use]
pub fn hitori_row_duplicate(numbers: &Grid<u8>, mask: &Grid<bool>, pos: Position) -> bool {
    if numbers.size() != mask.size() || !numbers.contains(pos) || mask[pos] {
        return false;
    }
    let value = numbers[pos];
    (0..numbers.size()).any(|col| {
        let other = Position::new(pos.row(), col);
        col != pos.col() && !mask[other] && numbers[other] == value
    })
}

/// Returns `true` if the white cell at `pos` shares its number with another
/// white cell in the same column.
#[must_use]
pub fn hitori_column_duplicate(numbers: &Grid<u8>, mask: &Grid<bool>, pos: Position) -> bool {
    if numbers.size() != mask.size() || !numbers.contains(pos) || mask[pos] {
        return false;
    }
    let value = numbers[pos];
    (0..numbers.size()).any(|row| {
        let other = Position::new(row, pos.col());
        row != pos.row() && !mask[other] && numbers[other] == value
    })
}
