//! Strict snapshot log parser
//!
//! Loading log lines by evaluating them as source code would execute
//! arbitrary content. This parser accepts exactly the record grammar
//! and nothing else:
//!
//! ```text
//! mesh line:     '[' number (',' number)* ']'
//! snapshot line: '[' '[' number (',' number)* ']' ',' number ']'
//! ```
//!
//! Anything outside the grammar — stray text, missing brackets, vector
//! lengths that disagree with the mesh, times out of order — is a
//! [`LogError`], never a guess.

use std::fs;
use std::path::Path;

use crate::output::log::LogError;

// =================================================================================================
// Parsed records
// =================================================================================================

/// One recorded snapshot: a temperature vector and its simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotFrame {
    /// Temperatures at every mesh node \[°C\].
    pub temperatures: Vec<f64>,

    /// Simulated seconds since the start of the run.
    pub elapsed: f64,
}

/// A fully parsed snapshot log.
///
/// # Example
///
/// ```rust
/// use fuelrod_rs::output::log::RecordedRun;
///
/// let dir = tempfile::tempdir().map_err(|e| e.to_string())?;
/// let path = dir.path().join("run.txt");
/// std::fs::write(&path, "[0.0, 0.5, 1.0]\n[[25.0, 25.0, 25.0], 0.0]\n")
///     .map_err(|e| e.to_string())?;
///
/// let run = RecordedRun::load(&path).map_err(|e| e.to_string())?;
/// assert_eq!(run.mesh.len(), 3);
/// assert_eq!(run.frames[0].elapsed, 0.0);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRun {
    /// Radial mesh coordinates \[m\], from the first line.
    pub mesh: Vec<f64>,

    /// Snapshot frames in increasing time order.
    pub frames: Vec<SnapshotFrame>,
}

impl RecordedRun {
    /// Load and parse a snapshot log file.
    ///
    /// # Errors
    ///
    /// - [`LogError::Io`] when the file cannot be read
    /// - [`LogError::Malformed`] on an empty file, a line outside the
    ///   grammar, or snapshot times that do not strictly increase
    /// - [`LogError::WrongLength`] when a frame's vector length differs
    ///   from the mesh length
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse log contents already in memory.
    pub fn parse(contents: &str) -> Result<Self, LogError> {
        let mut lines = contents.lines().enumerate();

        let mesh = match lines.next() {
            Some((_, first)) => parse_sequence(first.trim(), 1)?,
            None => {
                return Err(LogError::Malformed {
                    line: 1,
                    reason: "empty log: expected the mesh line".to_string(),
                })
            }
        };

        let mut frames: Vec<SnapshotFrame> = Vec::new();
        for (index, line) in lines {
            let line_number = index + 1;
            let frame = parse_frame(line.trim(), line_number)?;
            if frame.temperatures.len() != mesh.len() {
                return Err(LogError::WrongLength {
                    expected: mesh.len(),
                    got: frame.temperatures.len(),
                });
            }
            if let Some(previous) = frames.last() {
                if frame.elapsed <= previous.elapsed {
                    return Err(LogError::Malformed {
                        line: line_number,
                        reason: format!(
                            "snapshot time {} does not increase over previous {}",
                            frame.elapsed, previous.elapsed
                        ),
                    });
                }
            }
            frames.push(frame);
        }

        Ok(Self { mesh, frames })
    }
}

// =================================================================================================
// Grammar
// =================================================================================================

/// Strip one pair of enclosing brackets, or fail.
fn strip_brackets(s: &str, line: usize) -> Result<&str, LogError> {
    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| LogError::Malformed {
            line,
            reason: format!("expected a bracketed sequence, got {s:?}"),
        })?;
    Ok(inner)
}

/// Parse `[a, b, c]` into numbers.
fn parse_sequence(s: &str, line: usize) -> Result<Vec<f64>, LogError> {
    let inner = strip_brackets(s, line)?;
    if inner.trim().is_empty() {
        return Err(LogError::Malformed {
            line,
            reason: "sequence contains no numbers".to_string(),
        });
    }
    inner
        .split(',')
        .map(|token| parse_number(token, line))
        .collect()
}

/// Parse one numeric token.
fn parse_number(token: &str, line: usize) -> Result<f64, LogError> {
    let trimmed = token.trim();
    trimmed.parse::<f64>().map_err(|_| LogError::Malformed {
        line,
        reason: format!("not a number: {trimmed:?}"),
    })
}

/// Parse `[[a, b, c], t]` into a frame.
fn parse_frame(s: &str, line: usize) -> Result<SnapshotFrame, LogError> {
    let inner = strip_brackets(s, line)?;
    let inner = inner.trim();

    if !inner.starts_with('[') {
        return Err(LogError::Malformed {
            line,
            reason: "expected a nested temperature sequence".to_string(),
        });
    }
    // Temperatures hold no nested brackets, so the first ']' closes the
    // vector.
    let close = inner.find(']').ok_or_else(|| LogError::Malformed {
        line,
        reason: "unterminated temperature sequence".to_string(),
    })?;
    let temperatures = parse_sequence(&inner[..=close], line)?;

    let rest = inner[close + 1..].trim_start();
    let rest = rest.strip_prefix(',').ok_or_else(|| LogError::Malformed {
        line,
        reason: "expected ', <elapsed seconds>' after the temperature sequence".to_string(),
    })?;
    let elapsed = parse_number(rest, line)?;
    if elapsed < 0.0 {
        return Err(LogError::Malformed {
            line,
            reason: format!("elapsed time must be non-negative, got {elapsed}"),
        });
    }

    Ok(SnapshotFrame {
        temperatures,
        elapsed,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
