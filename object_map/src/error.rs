use thiserror::Error;

/// Reasons an `ObjectMap` can't be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewError {
    #[error("invalid dimensions {columns}x{rows}: both must be non-zero")]
    InvalidDimensions { columns: u32, rows: u32 },
    #[error("dimensions {columns}x{rows} exceed the addressable number of cells")]
    CapacityExceeded { columns: u32, rows: u32 },
}

/// Reasons an update to an `ObjectMap` was rejected. A rejected update
/// leaves the map unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("object is already in the map")]
    AlreadyTracked,
    #[error("object is not in the map")]
    NotTracked,
    /// Coordinates are signed so that a negative destination computed by a
    /// relative move can be reported as-is.
    #[error("cell ({column}, {row}) is outside the map")]
    OutOfBounds { column: i64, row: i64 },
}

impl UpdateError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    pub fn unwrap_out_of_bounds(self) -> (i64, i64) {
        match self {
            Self::OutOfBounds { column, row } => (column, row),
            other => panic!("unexpected {:?} (expected OutOfBounds)", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            NewError::InvalidDimensions {
                columns: 0,
                rows: 3
            }
            .to_string(),
            "invalid dimensions 0x3: both must be non-zero"
        );
        assert_eq!(
            UpdateError::OutOfBounds { column: -1, row: 2 }.to_string(),
            "cell (-1, 2) is outside the map"
        );
    }

    #[test]
    fn unwrap_out_of_bounds() {
        let error = UpdateError::OutOfBounds { column: 5, row: 4 };
        assert!(error.is_out_of_bounds());
        assert_eq!(error.unwrap_out_of_bounds(), (5, 4));
        assert!(!UpdateError::NotTracked.is_out_of_bounds());
    }

    #[test]
    #[should_panic]
    fn unwrap_out_of_bounds_panics_on_other_variants() {
        UpdateError::AlreadyTracked.unwrap_out_of_bounds();
    }
}
