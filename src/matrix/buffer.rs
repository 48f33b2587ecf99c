//! Allocation and deterministic fills for square matrices.

use crate::error::{MatmulError, Result};

/// Allocates a zero-filled `n × n` buffer.
///
/// Unlike a bare `vec![0.0; n * n]`, an oversized request comes back as an
/// error instead of aborting the process.
///
/// # Errors
///
/// - [`MatmulError::DimensionOverflow`] if `n * n` (or its byte size)
///   does not fit in `usize`
/// - [`MatmulError::AllocationFailure`] if the allocator refuses
pub fn alloc_square(n: usize) -> Result<Vec<f64>> {
    let len = element_count(n)?;
    let bytes = len
        .checked_mul(size_of::<f64>())
        .ok_or(MatmulError::DimensionOverflow { n })?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| MatmulError::AllocationFailure { n, bytes })?;
    buf.resize(len, 0.0);
    Ok(buf)
}

/// Number of elements in an `n × n` matrix.
pub fn element_count(n: usize) -> Result<usize> {
    n.checked_mul(n).ok_or(MatmulError::DimensionOverflow { n })
}

/// Fills `m` with its row index: `m[i * n + j] = i`.
///
/// Indices are converted to `f64` exactly for any `i < 2^53`.
pub fn fill_row_index(m: &mut [f64], n: usize) {
    for (i, row) in m.chunks_exact_mut(n.max(1)).take(n).enumerate() {
        row.fill(i as f64);
    }
}

/// Fills `m` with its column index: `m[i * n + j] = j`.
pub fn fill_col_index(m: &mut [f64], n: usize) {
    for row in m.chunks_exact_mut(n.max(1)).take(n) {
        for (j, v) in row.iter_mut().enumerate() {
            *v = j as f64;
        }
    }
}

/// The `n × n` identity matrix.
pub fn identity(n: usize) -> Result<Vec<f64>> {
    let mut m = alloc_square(n)?;
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    Ok(m)
}
