//! Run configuration for the binary.

use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

/// Matrix dimension used by the reference run.
pub const DEFAULT_DIMENSION: usize = 2000;

/// How the multiply is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded i-j-k kernel.
    #[default]
    Sequential,
    /// Rows split across threads, see [`crate::threaded`].
    Multicore,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Multicore => write!(f, "multicore"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dimension: usize,
    pub mode: ExecutionMode,
    /// Upper bound on worker threads in [`ExecutionMode::Multicore`].
    pub threads: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            mode: ExecutionMode::default(),
            threads: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}
