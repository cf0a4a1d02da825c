//! Snapshot log: the file contract with the visualization consumer
//!
//! The log is the only wire format this crate shares with the outside
//! world. It is newline-delimited, append-only, one complete record per
//! line:
//!
//! ```text
//! [0.0, 0.001, 0.002, ...]            <- line 1: radial mesh [m], 5 decimals
//! [[25.0, 25.0, ...], 0.0]            <- one line per simulated minute:
//! [[26.3, 26.1, ...], 60.0]              temperatures [°C, 1 decimal] + elapsed [s]
//! ```
//!
//! No header, no footer, no checksum. The consumer reads the first line as
//! the mesh and every further line as a `(vector, time)` pair.
//!
//! # Module Organization
//!
//! - **`writer`**: [`SnapshotLog`], the append-only producer; implements
//!   [`SnapshotRecorder`](crate::solver::SnapshotRecorder) so the driver
//!   can stream records while the run progresses
//! - **`reader`**: [`RecordedRun`], a strict structured parser for the
//!   same format — malformed lines are rejected as errors, never
//!   interpreted loosely (and certainly never evaluated)

use std::fmt;
use std::io;

pub mod reader;
pub mod writer;

pub use reader::{RecordedRun, SnapshotFrame};
pub use writer::SnapshotLog;

// =================================================================================================
// Errors
// =================================================================================================

/// Errors of the snapshot log, on both the producer and consumer side.
///
/// # Design
///
/// The log has its own error type instead of `String` because callers of
/// the reader genuinely branch on the failure kind: an I/O failure is
/// environmental, a malformed line means the file is not a snapshot log.
#[derive(Debug)]
pub enum LogError {
    /// Underlying file I/O failure (open, write, flush, read).
    Io(io::Error),

    /// A line that does not match the record grammar.
    Malformed {
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A record whose vector length disagrees with the mesh.
    WrongLength {
        /// Expected node count (the mesh length).
        expected: usize,
        /// Node count actually seen.
        got: usize,
    },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Io(err) => write!(f, "snapshot log I/O error: {err}"),
            LogError::Malformed { line, reason } => {
                write!(f, "malformed snapshot log line {line}: {reason}")
            }
            LogError::WrongLength { expected, got } => {
                write!(
                    f,
                    "snapshot vector has {got} values but the mesh has {expected} nodes"
                )
            }
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::Io(err)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
