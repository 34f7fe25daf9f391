use coord_2d::Coord;
use std::ops::{Add, AddAssign};

/// A position on the grid, given by a column and a row. Both components are
/// non-negative, so a signed offset must go through `checked_offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Applies a signed delta, returning `None` if either component would
    /// become negative or exceed `u32::MAX`.
    pub fn checked_offset(self, delta: Coord) -> Option<Self> {
        let column = u32::try_from(i64::from(self.column) + i64::from(delta.x)).ok()?;
        let row = u32::try_from(i64::from(self.row) + i64::from(delta.y)).ok()?;
        Some(Self { column, row })
    }

    /// Returns `None` if either component doesn't fit in a `Coord`.
    pub fn to_coord(self) -> Option<Coord> {
        let x = i32::try_from(self.column).ok()?;
        let y = i32::try_from(self.row).ok()?;
        Some(Coord::new(x, y))
    }

    /// Returns `None` for coords with a negative component.
    pub fn from_coord(coord: Coord) -> Option<Self> {
        let column = u32::try_from(coord.x).ok()?;
        let row = u32::try_from(coord.y).ok()?;
        Some(Self { column, row })
    }
}

impl Add for Cell {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            column: self.column + rhs.column,
            row: self.row + rhs.row,
        }
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Self) {
        self.column += rhs.column;
        self.row += rhs.row;
    }
}

impl From<(u32, u32)> for Cell {
    fn from((column, row): (u32, u32)) -> Self {
        Self { column, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_component_wise() {
        let mut cell = Cell::new(3, 4) + Cell::new(1, 2);
        assert_eq!(cell, Cell::new(4, 6));
        cell += Cell::new(0, 1);
        assert_eq!(cell, Cell::new(4, 7));
    }

    #[test]
    fn checked_offset_rejects_underflow() {
        let cell = Cell::new(0, 2);
        assert_eq!(cell.checked_offset(Coord::new(-1, 0)), None);
        assert_eq!(cell.checked_offset(Coord::new(0, -3)), None);
        assert_eq!(cell.checked_offset(Coord::new(2, -2)), Some(Cell::new(2, 0)));
    }

    #[test]
    fn checked_offset_rejects_overflow() {
        let cell = Cell::new(u32::MAX, 0);
        assert_eq!(cell.checked_offset(Coord::new(1, 0)), None);
        assert_eq!(cell.checked_offset(Coord::new(-1, 0)), Some(Cell::new(u32::MAX - 1, 0)));
    }

    #[test]
    fn coord_conversion() {
        assert_eq!(Cell::from_coord(Coord::new(5, 6)), Some(Cell::new(5, 6)));
        assert_eq!(Cell::from_coord(Coord::new(-1, 6)), None);
        assert_eq!(Cell::new(5, 6).to_coord(), Some(Coord::new(5, 6)));
        assert_eq!(Cell::new(u32::MAX, 0).to_coord(), None);
    }
}
