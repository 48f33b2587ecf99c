//! Multi-threaded naive GEMM.
//!
//! Rows of C are split into disjoint bands, one per worker. A and B are
//! shared read-only, so no locking is needed. Thread count adapts to matrix
//! size - small matrices use fewer threads to avoid overhead.

pub mod naive_ijk_mt;
