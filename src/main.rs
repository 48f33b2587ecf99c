//! Fills A[i][j] = i and B[i][j] = j, multiplies them, and prints every
//! element of the product on stdout, one per line.

use std::io::{self, BufWriter};
use std::time::Instant;

use dense_matmul::matrix::buffer::{alloc_square, fill_col_index, fill_row_index};
use dense_matmul::output::write_row_major;
use dense_matmul::{RunConfig, multiply_with};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> dense_matmul::Result<()> {
    // stdout carries the matrix, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dense_matmul=info")),
        )
        .with_writer(io::stderr)
        .init();

    run(&RunConfig::default()).inspect_err(|e| error!("{e}"))
}

fn run(cfg: &RunConfig) -> dense_matmul::Result<()> {
    let n = cfg.dimension;
    info!(n, mode = %cfg.mode, threads = cfg.threads, "allocating matrices");

    let mut a = alloc_square(n)?;
    let mut b = alloc_square(n)?;
    let mut c = alloc_square(n)?;

    fill_row_index(&mut a, n);
    fill_col_index(&mut b, n);

    let start = Instant::now();
    multiply_with(cfg.mode, &a, &b, &mut c, n, cfg.threads)?;
    let elapsed = start.elapsed();

    let gflops = 2.0 * (n as f64).powi(3) / elapsed.as_secs_f64().max(f64::MIN_POSITIVE) / 1e9;
    info!(
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        gflops, "multiply finished"
    );

    write_row_major(BufWriter::new(io::stdout().lock()), &c)
}
