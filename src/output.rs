//! Plain-text dump of a result matrix.

use std::io::Write;

use crate::error::Result;

/// Writes every element of `c` on its own line in row-major order, with six
/// digits after the decimal point.
///
/// `c` is already row-major, so this is a straight walk over the slice.
/// Callers should hand in a buffered writer; millions of lines go through
/// here.
pub fn write_row_major<W: Write>(mut out: W, c: &[f64]) -> Result<()> {
    for v in c {
        writeln!(out, "{v:.6}")?;
    }
    out.flush()?;
    Ok(())
}
