/// Cache-friendly matrix multiplication using i-k-j loop order: C = A * B.
///
/// By swapping the j and k loops, the innermost loop accesses both B and C
/// sequentially (stride 1). C is zeroed first and then accumulated into.
/// Each element still sees `k` in ascending order, so the values agree with
/// [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk); the partial
/// sums just live in C instead of a register.
///
/// Used as an independent reference in tests and as a comparison point in
/// the benchmarks.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten with A * B
/// * `n` - Dimension shared by all three matrices
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    c[..n * n].fill(0.0);
    for i in 0..n {
        for p in 0..n {
            let a_ip = a[i * n + p];
            for j in 0..n {
                c[i * n + j] += a_ip * b[p * n + j];
            }
        }
    }
}
