//! Dense square matrix multiplication, the textbook way.
//!
//! One kernel does the work: the naive i-j-k triple loop over row-major
//! `n × n` buffers, `C = A × B`. Every output element is an independent
//! reduction over ascending `k`, which fixes the rounding and makes the
//! row-parallel variant bit-identical to the sequential one.
//!
//! ## Usage
//!
//! ```
//! use dense_matmul::multiply;
//!
//! let a = vec![1.0f64; 64 * 64];
//! let b = vec![1.0f64; 64 * 64];
//! let mut c = vec![0.0f64; 64 * 64];
//!
//! multiply(&a, &b, &mut c, 64).unwrap();
//! assert_eq!(c[0], 64.0);
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use dense_matmul::multiply_parallel;
//!
//! let a = vec![1.0f64; 512 * 512];
//! let b = vec![1.0f64; 512 * 512];
//! let mut c = vec![0.0f64; 512 * 512];
//!
//! multiply_parallel(&a, &b, &mut c, 512, 4).unwrap();
//! ```
//!
//! The unchecked kernels in [`matrix`] and [`threaded`] skip validation;
//! an undersized buffer panics on indexing there instead of returning an
//! error.

pub mod config;
pub mod error;
pub mod matrix;
pub mod output;
pub mod threaded;

pub use config::{ExecutionMode, RunConfig};
pub use error::{MatmulError, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use threaded::naive_ijk_mt::matmul_naive_ijk_mt;

/// Matrix multiply: C = A * B
///
/// Matrices are row-major and `n × n`. C is fully overwritten.
///
/// # Errors
///
/// Returns [`MatmulError::InvalidDimension`] if any slice length is not
/// `n * n`, before touching C.
pub fn multiply(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> Result<()> {
    check_dims(a, b, c, n)?;
    matmul_naive_ijk(a, b, c, n);
    Ok(())
}

/// Same as [`multiply`] but uses multiple threads.
///
/// Thread count adapts to matrix size - small matrices use fewer threads
/// because the overhead isn't worth it.
pub fn multiply_parallel(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    num_threads: usize,
) -> Result<()> {
    check_dims(a, b, c, n)?;
    matmul_naive_ijk_mt(a, b, c, n, num_threads);
    Ok(())
}

/// Dispatches to [`multiply`] or [`multiply_parallel`] by `mode`.
pub fn multiply_with(
    mode: ExecutionMode,
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    num_threads: usize,
) -> Result<()> {
    match mode {
        ExecutionMode::Sequential => multiply(a, b, c, n),
        ExecutionMode::Multicore => multiply_parallel(a, b, c, n, num_threads),
    }
}

fn check_dims(a: &[f64], b: &[f64], c: &[f64], n: usize) -> Result<()> {
    let expected = matrix::buffer::element_count(n)?;
    for (operand, actual) in [("A", a.len()), ("B", b.len()), ("C", c.len())] {
        if actual != expected {
            return Err(MatmulError::InvalidDimension {
                operand,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
