/// Naive matrix multiplication using i-j-k loop order: C = A * B.
///
/// This is the textbook triple-loop implementation. Each output element is
/// reduced into a local `sum` over ascending `k` and stored once, so `c` is
/// fully overwritten and the rounding of every element is fixed. The inner
/// loop walks B with stride `n` (column-wise), which is what makes it slow.
///
/// `n = 0` writes nothing. Buffers shorter than `n * n` panic on the first
/// out-of-range index.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten with A * B
/// * `n` - Dimension shared by all three matrices
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    for i in 0..n {
        matmul_row_ijk(a, b, &mut c[i * n..(i + 1) * n], i, n);
    }
}

/// Computes row `i` of C into `c_row` (length `n`).
///
/// Shared by the sequential kernel and the multicore workers so both reduce
/// each element in exactly the same order.
#[inline]
pub(crate) fn matmul_row_ijk(a: &[f64], b: &[f64], c_row: &mut [f64], i: usize, n: usize) {
    let a_row = &a[i * n..(i + 1) * n];
    for (j, out) in c_row.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (k, &x) in a_row.iter().enumerate() {
            sum += x * b[k * n + j];
        }
        *out = sum;
    }
}
