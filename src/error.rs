use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a disjoint set needs at least one element (got {0})")]
    InvalidSize(usize),

    #[error("invalid grid dimension: {reason}")]
    InvalidDimension { reason: String },

    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("site ({row}, {col}) out of bounds for a {side}x{side} grid")]
    OutOfBounds { row: usize, col: usize, side: usize },

    #[error("line {line}: expected `row col`, got {content:?}")]
    InvalidSite { line: usize, content: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
