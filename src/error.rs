use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("{operand}: expected {expected} elements, got {actual}")]
    InvalidDimension {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("dimension {n} overflows n*n")]
    DimensionOverflow { n: usize },
    #[error("failed to allocate {bytes} bytes for a {n}x{n} matrix")]
    AllocationFailure { n: usize, bytes: usize },
    #[error("output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
