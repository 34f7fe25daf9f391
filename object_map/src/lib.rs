//! A map of objects layered over a fixed-size grid of cells.
//!
//! Any number of objects may share a cell. Objects are referred to by
//! copyable handles which the map never dereferences, so the objects
//! themselves are owned elsewhere (typically by an entity allocator).
//!
//! ```
//! use object_map::{Cell, ObjectMap};
//!
//! let mut map = ObjectMap::new(50, 60).unwrap();
//! map.add('a', 3, 4).unwrap();
//! map.move_by('a', 1, -1).unwrap();
//! assert_eq!(map.position('a'), Some(Cell::new(4, 3)));
//! assert_eq!(map.at(4, 3), Some(&['a'][..]));
//! assert_eq!(map.at(3, 4), Some(&[][..]));
//! ```
pub use coord_2d::{Coord, Size};
pub use direction::CardinalDirection;
use grid_2d::Grid;
use std::{collections::HashMap, hash::Hash, mem};

mod cell;
mod error;

pub use cell::Cell;
pub use error::{NewError, UpdateError};

/// Largest value of either dimension. Cells are addressed through `Coord`,
/// whose components are `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Tracks which cell each object is in, and which objects are in each cell.
///
/// Every tracked handle appears exactly once, in the bucket of the cell
/// recorded for it, and in no other bucket.
#[derive(Debug, Clone)]
pub struct ObjectMap<H> {
    buckets: Grid<Vec<H>>,
    positions: HashMap<H, Cell>,
}

impl<H: Copy + Eq + Hash> ObjectMap<H> {
    pub fn new(columns: u32, rows: u32) -> Result<Self, NewError> {
        if columns == 0 || rows == 0 {
            return Err(NewError::InvalidDimensions { columns, rows });
        }
        let capacity_exceeded = NewError::CapacityExceeded { columns, rows };
        if columns > MAX_DIMENSION || rows > MAX_DIMENSION {
            return Err(capacity_exceeded);
        }
        let count = usize::try_from(columns)
            .ok()
            .zip(usize::try_from(rows).ok())
            .and_then(|(columns, rows)| columns.checked_mul(rows))
            .filter(|&count| {
                count
                    .checked_mul(mem::size_of::<Vec<H>>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(capacity_exceeded)?;
        log::debug!("creating {}x{} object map ({} cells)", columns, rows, count);
        Ok(Self {
            buckets: Grid::new_default(Size::new(columns, rows)),
            positions: HashMap::new(),
        })
    }

    pub fn with_size(size: Size) -> Result<Self, NewError> {
        Self::new(size.width(), size.height())
    }

    pub fn columns(&self) -> u32 {
        self.buckets.width()
    }

    pub fn rows(&self) -> u32 {
        self.buckets.height()
    }

    pub fn size(&self) -> Size {
        self.buckets.size()
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_in_bounds(&self, column: u32, row: u32) -> bool {
        column < self.columns() && row < self.rows()
    }

    /// The objects at a cell, in the order they arrived there. Returns
    /// `None` if the cell is outside the map.
    pub fn at(&self, column: u32, row: u32) -> Option<&[H]> {
        self.at_cell(Cell::new(column, row))
    }

    pub fn at_cell(&self, cell: Cell) -> Option<&[H]> {
        self.bucket(cell).map(Vec::as_slice)
    }

    pub fn at_coord(&self, coord: Coord) -> Option<&[H]> {
        self.buckets.get(coord).map(Vec::as_slice)
    }

    pub fn contains(&self, handle: H) -> bool {
        self.positions.contains_key(&handle)
    }

    pub fn position(&self, handle: H) -> Option<Cell> {
        self.positions.get(&handle).copied()
    }

    /// Starts tracking `handle` at the given cell.
    pub fn add(&mut self, handle: H, column: u32, row: u32) -> Result<(), UpdateError> {
        if self.contains(handle) {
            return Err(UpdateError::AlreadyTracked);
        }
        let cell = self.checked_cell(column, row)?;
        self.positions.insert(handle, cell);
        self.attach(handle, cell);
        Ok(())
    }

    /// Stops tracking `handle`, returning the cell it was in.
    pub fn remove(&mut self, handle: H) -> Result<Cell, UpdateError> {
        let cell = self
            .positions
            .remove(&handle)
            .ok_or(UpdateError::NotTracked)?;
        self.detach(handle, cell);
        Ok(cell)
    }

    /// Moves `handle` to an absolute cell. Moving an object to the cell it
    /// is already in succeeds without changing anything.
    pub fn move_to(&mut self, handle: H, column: u32, row: u32) -> Result<(), UpdateError> {
        let current = self.position(handle).ok_or(UpdateError::NotTracked)?;
        let destination = self.checked_cell(column, row)?;
        if current == destination {
            return Ok(());
        }
        self.detach(handle, current);
        self.attach(handle, destination);
        self.positions.insert(handle, destination);
        Ok(())
    }

    /// Moves `handle` relative to its current cell.
    pub fn move_by(
        &mut self,
        handle: H,
        delta_column: i32,
        delta_row: i32,
    ) -> Result<(), UpdateError> {
        let current = self.position(handle).ok_or(UpdateError::NotTracked)?;
        let destination = current
            .checked_offset(Coord::new(delta_column, delta_row))
            .ok_or(UpdateError::OutOfBounds {
                column: i64::from(current.column) + i64::from(delta_column),
                row: i64::from(current.row) + i64::from(delta_row),
            })?;
        self.move_to(handle, destination.column, destination.row)
    }

    pub fn move_in_direction(
        &mut self,
        handle: H,
        direction: CardinalDirection,
    ) -> Result<(), UpdateError> {
        let delta = direction.coord();
        self.move_by(handle, delta.x, delta.y)
    }

    /// Every tracked object with its cell, in no particular order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (H, Cell)> {
        self.positions.iter().map(|(&handle, &cell)| (handle, cell))
    }

    /// Cells containing at least one object, in row-major order.
    pub fn occupied_cells(&self) -> impl '_ + Iterator<Item = (Cell, &[H])> {
        self.buckets
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(coord, bucket)| {
                (
                    Cell::new(coord.x as u32, coord.y as u32),
                    bucket.as_slice(),
                )
            })
    }

    /// Stops tracking every object. The dimensions are unchanged.
    pub fn clear(&mut self) {
        log::debug!("clearing object map ({} objects)", self.positions.len());
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.positions.clear();
    }

    fn checked_cell(&self, column: u32, row: u32) -> Result<Cell, UpdateError> {
        if self.is_in_bounds(column, row) {
            Ok(Cell::new(column, row))
        } else {
            Err(UpdateError::OutOfBounds {
                column: i64::from(column),
                row: i64::from(row),
            })
        }
    }

    fn bucket(&self, cell: Cell) -> Option<&Vec<H>> {
        cell.to_coord().and_then(|coord| self.buckets.get(coord))
    }

    fn bucket_mut(&mut self, cell: Cell) -> Option<&mut Vec<H>> {
        cell.to_coord().and_then(|coord| self.buckets.get_mut(coord))
    }

    // `cell` must be in bounds
    fn attach(&mut self, handle: H, cell: Cell) {
        debug_assert!(self.is_in_bounds(cell.column, cell.row));
        if let Some(bucket) = self.bucket_mut(cell) {
            bucket.push(handle);
        }
    }

    fn detach(&mut self, handle: H, cell: Cell) {
        if let Some(bucket) = self.bucket_mut(cell) {
            if let Some(index) = bucket.iter().position(|&h| h == handle) {
                bucket.remove(index);
            }
        }
    }
}
