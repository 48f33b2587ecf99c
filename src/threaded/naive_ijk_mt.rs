//! Multi-threaded i-j-k matmul.

use crate::matrix::naive_ijk::{matmul_naive_ijk, matmul_row_ijk};
use std::thread;
use tracing::debug;

const SINGLE_THREAD_THRESHOLD: f64 = 100_000_000.0;
const TWO_THREAD_THRESHOLD: f64 = 300_000_000.0;
const MIN_ROWS_PER_THREAD: usize = 64;

/// Multi-threaded matrix multiplication using the i-j-k loop order.
///
/// Splits rows of C across scoped threads; each worker runs the same inner
/// loops as [`matmul_naive_ijk`] on its band, so the output is bit-identical
/// to the sequential kernel. Thread count adapts based on matrix size:
/// - < 100M FLOPs: 1 thread
/// - < 300M FLOPs: 2 threads
/// - Otherwise: up to `num_threads`
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices,
///   `0` behaves like `1`)
pub fn matmul_naive_ijk_mt(a: &[f64], b: &[f64], c: &mut [f64], n: usize, num_threads: usize) {
    let effective_threads = choose_thread_count(n, num_threads);

    if effective_threads == 1 {
        matmul_naive_ijk(a, b, c, n);
        return;
    }

    let rows_per_thread = n.div_ceil(effective_threads);
    debug!(n, effective_threads, rows_per_thread, "splitting rows across workers");

    thread::scope(|s| {
        for (band, c_band) in c[..n * n].chunks_mut(rows_per_thread * n).enumerate() {
            let start_row = band * rows_per_thread;
            s.spawn(move || {
                for (offset, c_row) in c_band.chunks_exact_mut(n).enumerate() {
                    matmul_row_ijk(a, b, c_row, start_row + offset, n);
                }
            });
        }
    });
}

pub(crate) fn choose_thread_count(n: usize, max_threads: usize) -> usize {
    let max_threads = max_threads.max(1);
    let flops = 2.0 * (n as f64).powi(3);

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (n / MIN_ROWS_PER_THREAD).max(1);

    optimal_threads.min(threads_by_rows).min(max_threads)
}
