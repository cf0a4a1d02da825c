//! Solver traits and types
//!
//! # Design Philosophy
//!
//! Three pieces, kept apart:
//! - `Scenario` — WHAT to solve (model + initial condition), see the
//!   `scenario` module;
//! - `SolverConfiguration` — HOW LONG and HOW FINE (duration, time step,
//!   snapshot cadence);
//! - `Solver` — the numerical method itself.
//!
//! All solver-facing operations return `Result<T, String>`; configuration
//! problems are fatal and surfaced before the first step.

use nalgebra::DVector;
use std::collections::HashMap;

use crate::solver::Scenario;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Relative tolerance when checking that the snapshot interval divides the
/// time step count evenly.
const CADENCE_TOLERANCE: f64 = 1e-9;

/// Configuration of a transient run.
///
/// # Examples
///
/// ```rust
/// use fuelrod_rs::solver::SolverConfiguration;
///
/// // One simulated hour at the reference 4 ms step, snapshots every
/// // simulated minute (the default cadence).
/// let config = SolverConfiguration::transient(3600.0, 4e-3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.steps(), 900_000);
///
/// // Custom cadence
/// let config = SolverConfiguration::transient(600.0, 1e-2).with_snapshot_interval(120.0);
/// assert_eq!(config.snapshot_interval, 120.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// Total simulated duration \[s\]
    pub total_time: f64,

    /// Fixed time step dt \[s\]
    pub time_step: f64,

    /// Simulated time between snapshot records \[s\] (default 60)
    pub snapshot_interval: f64,
}

impl SolverConfiguration {
    /// Snapshot cadence of the log contract: one record per simulated
    /// minute.
    pub const DEFAULT_SNAPSHOT_INTERVAL: f64 = 60.0;

    /// Create a transient configuration with the default snapshot cadence.
    pub fn transient(total_time: f64, time_step: f64) -> Self {
        Self {
            total_time,
            time_step,
            snapshot_interval: Self::DEFAULT_SNAPSHOT_INTERVAL,
        }
    }

    /// Builder pattern: set the snapshot interval.
    pub fn with_snapshot_interval(mut self, interval: f64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Total step count `round(total_time / dt)`.
    pub fn steps(&self) -> usize {
        (self.total_time / self.time_step).round() as usize
    }

    /// Steps between two snapshot records.
    pub fn steps_per_snapshot(&self) -> usize {
        (self.snapshot_interval / self.time_step).round() as usize
    }

    /// Validate that parameters are physically meaningful.
    ///
    /// The snapshot interval must be an integer multiple of the time step:
    /// records happen at *exact* multiples of the interval, which is only
    /// possible when a whole number of steps fits in one interval.
    pub fn validate(&self) -> Result<(), String> {
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err("Total time must be positive".to_string());
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err("Time step must be positive".to_string());
        }
        if self.steps() == 0 {
            return Err("Total time must cover at least one time step".to_string());
        }
        if !self.snapshot_interval.is_finite() || self.snapshot_interval <= 0.0 {
            return Err("Snapshot interval must be positive".to_string());
        }
        let ratio = self.snapshot_interval / self.time_step;
        if (ratio - ratio.round()).abs() > CADENCE_TOLERANCE * ratio.round().max(1.0) {
            return Err(format!(
                "Snapshot interval {} s is not an integer multiple of the time step {} s",
                self.snapshot_interval, self.time_step
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Result of a transient run.
///
/// Holds the snapshot trajectory (one field per snapshot time, NOT one per
/// step — a reference run takes millions of steps) plus the final field
/// and free-form string metadata for diagnostics.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Snapshot times \[s\], exact multiples of the snapshot interval,
    /// in increasing order starting at 0.
    pub time_points: Vec<f64>,

    /// Temperature field at each snapshot time.
    pub snapshots: Vec<DVector<f64>>,

    /// Temperature field at the end of the run.
    pub final_state: DVector<f64>,

    /// Diagnostic metadata (solver name, dt, step count, ...).
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result from a recorded trajectory.
    pub fn new(time_points: Vec<f64>, snapshots: Vec<DVector<f64>>, final_state: DVector<f64>) -> Self {
        Self {
            time_points,
            snapshots,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of snapshots recorded.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshot was recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate over `(time, field)` snapshot pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &DVector<f64>)> {
        self.time_points.iter().copied().zip(self.snapshots.iter())
    }

    /// Add a metadata entry.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Look up a metadata entry.
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Snapshot recorder
// =================================================================================================

/// Sink for snapshot records emitted while the run is in progress.
///
/// The driver calls `record` each time elapsed simulated time reaches an
/// exact multiple of the snapshot interval. An error return aborts the
/// run: a trajectory whose snapshots were lost cannot be reconstructed,
/// so computing on is pointless (and misleading).
pub trait SnapshotRecorder {
    /// Record one `(temperature field, elapsed seconds)` pair.
    fn record(&mut self, temperatures: &DVector<f64>, elapsed: f64) -> Result<(), String>;
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for numerical solvers.
///
/// # Responsibility
///
/// Applies a numerical method to a [`Scenario`] under a
/// [`SolverConfiguration`] and returns the solution. Independent of the
/// physics: any [`ThermalModel`](crate::physics::ThermalModel) works.
pub trait Solver {
    /// Run the scenario to its configured duration.
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration)
        -> Result<SimulationResult, String>;

    /// Name of the method (used for display and metadata).
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_defaults() {
        let config = SolverConfiguration::transient(60.0, 4e-3);
        assert_eq!(config.snapshot_interval, 60.0);
        assert_eq!(config.steps(), 15_000);
        assert_eq!(config.steps_per_snapshot(), 15_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        assert!(SolverConfiguration::transient(0.0, 1e-3).validate().is_err());
        assert!(SolverConfiguration::transient(-5.0, 1e-3).validate().is_err());
        assert!(SolverConfiguration::transient(10.0, 0.0).validate().is_err());
        assert!(SolverConfiguration::transient(10.0, 1e-3)
            .with_snapshot_interval(-60.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_misaligned_snapshot_interval() {
        // 60 s is not an integer multiple of 7 ms.
        let config = SolverConfiguration::transient(120.0, 7e-3);
        let err = config.validate().unwrap_err();
        assert!(err.contains("integer multiple"), "unexpected error: {err}");
    }

    #[test]
    fn test_accepts_interval_with_rounding_noise() {
        // 60 / 4e-3 is not exactly 15000 in binary floating point, but it
        // must still validate.
        let config = SolverConfiguration::transient(3600.0, 4e-3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_result_metadata_round_trip() {
        let mut result =
            SimulationResult::new(vec![0.0], vec![DVector::zeros(3)], DVector::zeros(3));
        result.add_metadata("solver", "Explicit");
        assert_eq!(result.get_metadata("solver"), Some("Explicit"));
        assert_eq!(result.get_metadata("missing"), None);
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }
}
