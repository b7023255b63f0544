//! Stateless row/column/box uniqueness checks.

use std::collections::BTreeSet;

use minidoku_core::{Digit, Grid, House, Position};

/// Returns whether `digit` can be placed at `pos` without clashing with any
/// other cell in the same row, column, or box.
///
/// The cell at `pos` itself is ignored, so the check is also valid for a
/// cell that already holds a digit. The row, column, and box are scanned
/// independently; cells covered by more than one group are simply scanned
/// again.
///
/// # Examples
///
/// ```
/// use minidoku_core::{Grid, GridShape, Position};
/// use minidoku_solver::rules::can_place;
///
/// let shape = GridShape::CLASSIC;
/// let five = shape.digit(5).unwrap();
/// let mut grid = Grid::new(shape);
/// grid.set(Position::new(0, 0), Some(five)).unwrap();
///
/// assert!(!can_place(&grid, Position::new(8, 0), five)); // same row
/// assert!(!can_place(&grid, Position::new(0, 8), five)); // same column
/// assert!(!can_place(&grid, Position::new(2, 2), five)); // same box
/// assert!(can_place(&grid, Position::new(4, 4), five));
/// ```
#[must_use]
pub fn can_place(grid: &Grid, pos: Position, digit: Digit) -> bool {
    let shape = grid.shape();
    for x in 0..shape.size() {
        let other = Position::new(x, pos.y);
        if other != pos && grid[other] == Some(digit) {
            return false;
        }
    }
    for y in 0..shape.size() {
        let other = Position::new(pos.x, y);
        if other != pos && grid[other] == Some(digit) {
            return false;
        }
    }
    for other in shape.box_positions(pos) {
        if other != pos && grid[other] == Some(digit) {
            return false;
        }
    }
    true
}

/// Returns every position that currently violates row/column/box uniqueness
/// against another filled cell.
///
/// For each constraint group the first-seen position of each digit is
/// tracked; on a repeated digit both the repeat and the first-seen position
/// are reported. Empty cells never participate. The result unions the three
/// group kinds with set semantics, so a cell in several violated groups
/// appears once.
///
/// This is an `O(N²)` full-board pass, intended to run once per player move
/// rather than inside the search.
///
/// # Examples
///
/// ```
/// use minidoku_core::{Grid, GridShape, Position};
/// use minidoku_solver::rules::find_conflicts;
///
/// let shape = GridShape::CLASSIC;
/// let mut grid = Grid::new(shape);
/// let five = shape.digit(5).unwrap();
/// grid.set(Position::new(0, 0), Some(five)).unwrap();
/// grid.set(Position::new(1, 0), Some(five)).unwrap();
///
/// let conflicts = find_conflicts(&grid);
/// assert!(conflicts.contains(&Position::new(0, 0)));
/// assert!(conflicts.contains(&Position::new(1, 0)));
/// assert_eq!(conflicts.len(), 2);
/// ```
#[must_use]
pub fn find_conflicts(grid: &Grid) -> BTreeSet<Position> {
    let shape = grid.shape();
    let mut conflicts = BTreeSet::new();
    for house in House::all(shape) {
        let mut first_seen: Vec<Option<Position>> = vec![None; usize::from(shape.size())];
        for pos in house.positions(shape) {
            let Some(digit) = grid[pos] else {
                continue;
            };
            let slot = &mut first_seen[usize::from(digit.value()) - 1];
            match slot {
                Some(first) => {
                    conflicts.insert(*first);
                    conflicts.insert(pos);
                }
                None => *slot = Some(pos),
            }
        }
    }
    conflicts
}
