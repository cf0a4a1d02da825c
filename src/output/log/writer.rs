//! Append-only snapshot log writer
//!
//! The writer owns the file for the duration of a run: it is opened
//! (created or truncated) once at run start, receives the mesh line
//! immediately, and is then appended to — never rewritten. Every record is
//! flushed as soon as it is written so a crash mid-run leaves a valid,
//! merely shorter, log behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::DVector;

use crate::output::log::LogError;
use crate::solver::SnapshotRecorder;

/// Decimal places recorded for mesh coordinates.
const MESH_PRECISION: usize = 5;

/// Decimal places recorded for temperatures.
const TEMPERATURE_PRECISION: usize = 1;

// =================================================================================================
// Writer
// =================================================================================================

/// Append-only writer for the snapshot log format.
///
/// # Example
///
/// ```rust
/// use fuelrod_rs::output::log::SnapshotLog;
///
/// let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
/// let path = dir.path().join("run.txt");
///
/// let mut log = SnapshotLog::create(&path, &[0.0, 0.05, 0.1]).map_err(|e| e.to_string())?;
/// log.append(&[25.0, 25.0, 25.0], 0.0).map_err(|e| e.to_string())?;
///
/// let contents = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
/// assert_eq!(contents, "[0.00000, 0.05000, 0.10000]\n[[25.0, 25.0, 25.0], 0.0]\n");
/// # Ok::<(), String>(())
/// ```
#[derive(Debug)]
pub struct SnapshotLog {
    writer: BufWriter<File>,
    points: usize,
}

impl SnapshotLog {
    /// Create (or truncate) the log at `path` and write the mesh line.
    ///
    /// The mesh is the log's first record, before any snapshot, so every
    /// consumer can map vector positions back to radii.
    ///
    /// # Errors
    ///
    /// [`LogError::Io`] when the file cannot be created or written — a
    /// missing output directory surfaces here, at setup;
    /// [`LogError::Malformed`] when the mesh is empty.
    pub fn create<P: AsRef<Path>>(path: P, mesh: &[f64]) -> Result<Self, LogError> {
        if mesh.is_empty() {
            return Err(LogError::Malformed {
                line: 1,
                reason: "mesh must contain at least one coordinate".to_string(),
            });
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", format_sequence(mesh, MESH_PRECISION))?;
        writer.flush()?;
        Ok(Self {
            writer,
            points: mesh.len(),
        })
    }

    /// Append one `(temperatures, elapsed seconds)` record.
    ///
    /// Temperatures are recorded with one decimal; the elapsed time is
    /// recorded exactly as given.
    pub fn append(&mut self, temperatures: &[f64], elapsed: f64) -> Result<(), LogError> {
        if temperatures.len() != self.points {
            return Err(LogError::WrongLength {
                expected: self.points,
                got: temperatures.len(),
            });
        }
        writeln!(
            self.writer,
            "[{}, {:?}]",
            format_sequence(temperatures, TEMPERATURE_PRECISION),
            elapsed
        )?;
        // Flushed per record: the log must reflect everything the run has
        // computed so far, or the run must stop.
        self.writer.flush()?;
        Ok(())
    }

    /// Node count fixed by the mesh line.
    pub fn points(&self) -> usize {
        self.points
    }
}

/// The driver-facing recorder adapter: log failures become solver errors
/// and abort the run.
impl SnapshotRecorder for SnapshotLog {
    fn record(&mut self, temperatures: &DVector<f64>, elapsed: f64) -> Result<(), String> {
        self.append(temperatures.as_slice(), elapsed)
            .map_err(|err| err.to_string())
    }
}

// =================================================================================================
// Formatting helpers
// =================================================================================================

/// Render a number sequence as a bracketed literal, `[a, b, c]`, with a
/// fixed number of decimals.
fn format_sequence(values: &[f64], precision: usize) -> String {
    let mut out = String::with_capacity(values.len() * (precision + 4) + 2);
    out.push('[');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{value:.precision$}"));
    }
    out.push(']');
    out
}

// =================================================================================================
// Tests
// =================================================================================================
