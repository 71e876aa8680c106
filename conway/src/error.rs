// error.rs - Errors raised by the grid

use thiserror::Error;

/// Result type returned by checked grid accessors.
pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        cols: usize,
        rows: usize,
    },
}
