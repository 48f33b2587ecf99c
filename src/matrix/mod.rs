//! Square row-major matrices and the naive kernels that multiply them.
//!
//! Every buffer is a flat `&[f64]` of `n * n` elements; element `(i, j)`
//! lives at offset `i * n + j`.

pub mod buffer;
pub mod naive_ijk;
pub mod naive_ikj;
