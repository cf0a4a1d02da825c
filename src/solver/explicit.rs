//! Explicit time-stepping driver
//!
//! # Mathematical Background
//!
//! The driver advances the temperature field with the explicit scheme the
//! model implements in [`ThermalModel::advance`]: every node of generation
//! n+1 is computed directly from generation n, no linear system is ever
//! solved. The scheme is only conditionally stable — the Fourier number
//! `α·dt/Δr²` must stay at or below 0.5 for the smallest layer spacing —
//! so the driver refuses a destabilizing time step up front instead of
//! producing a silently oscillating profile.
//!
//! # Double buffering
//!
//! Two state vectors, read generation n / write generation n+1 / swap.
//! This guarantees the previous-generation-read invariant regardless of
//! the order the model sweeps its nodes in, which is the central
//! correctness property of the explicit scheme.
//!
//! # Snapshots
//!
//! At every elapsed simulated time that is an exact multiple of the
//! snapshot interval (including t = 0 and, when divisible, the final
//! time), the current field is handed to the [`SnapshotRecorder`] and
//! kept in the result. A run of duration D therefore yields
//! `floor(D / interval) + 1` records. Recorder failures abort the run.
//!
//! [`ThermalModel::advance`]: crate::physics::ThermalModel::advance

use nalgebra::DVector;

use crate::solver;
use crate::solver::{
    Scenario, SimulationResult, SnapshotRecorder, Solver, SolverConfiguration,
};

// =================================================================================================
// Explicit Solver
// =================================================================================================

/// Explicit finite-difference time-stepping driver.
///
/// Stateless and reusable: the same solver value can run any number of
/// scenarios.
///
/// # Example
///
/// ```rust
/// use fuelrod_rs::models::FuelRod;
/// use fuelrod_rs::solver::{ExplicitSolver, Scenario, Solver, SolverConfiguration};
///
/// let scenario = Scenario::new(Box::new(FuelRod::reference_case()));
/// let config = SolverConfiguration::transient(60.0, 4e-3);
///
/// let result = ExplicitSolver::new().solve(&scenario, &config)?;
/// assert_eq!(result.time_points, vec![0.0, 60.0]);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitSolver;

/// Recorder that drops every record; used when the caller only wants the
/// in-memory result.
struct NullRecorder;

impl SnapshotRecorder for NullRecorder {
    fn record(&mut self, _temperatures: &DVector<f64>, _elapsed: f64) -> Result<(), String> {
        Ok(())
    }
}

impl ExplicitSolver {
    /// Create a new explicit driver.
    pub fn new() -> Self {
        Self
    }

    /// Run the scenario, forwarding every snapshot to `recorder` as it is
    /// taken.
    ///
    /// This is the entry point for runs that write the snapshot log: the
    /// log grows while the run progresses, and a write failure aborts the
    /// run immediately rather than computing an unrecorded trajectory.
    pub fn solve_recorded(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
        recorder: &mut dyn SnapshotRecorder,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        // Stability guard. The model knows its most restrictive Fourier
        // bound; exceeding it makes the explicit scheme diverge, which is
        // a configuration error, not a runtime surprise.
        if let Some(limit) = scenario.model.stable_time_step() {
            if config.time_step > limit {
                return Err(format!(
                    "Time step {} s violates the explicit stability bound {:.6} s \
                     for model '{}' (Fourier number above 0.5); reduce the time step",
                    config.time_step,
                    limit,
                    scenario.model_name(),
                ));
            }
        }

        // ====== Step 2: Setup ======

        let dt = config.time_step;
        let steps = config.steps();
        let per_snapshot = config.steps_per_snapshot();

        // Double buffer: `current` is generation n, `next` receives n+1.
        let mut current = scenario.initial_state();
        let mut next = DVector::zeros(current.len());

        let expected_snapshots = steps / per_snapshot + 1;
        let mut time_points = Vec::with_capacity(expected_snapshots);
        let mut snapshots = Vec::with_capacity(expected_snapshots);

        // ====== Step 3: Time Integration ======

        for n in 0..=steps {
            if n % per_snapshot == 0 {
                // Snapshot times are reconstructed from the snapshot index
                // so the recorded value is an exact multiple of the
                // interval, free of dt rounding accumulation.
                let elapsed = (n / per_snapshot) as f64 * config.snapshot_interval;
                recorder.record(&current, elapsed)?;
                time_points.push(elapsed);
                snapshots.push(current.clone());
            }
            if n == steps {
                break;
            }

            // One full sweep: generation n -> n+1, previous-generation
            // reads only, then swap the buffers.
            scenario.model.advance(&current, &mut next, n as f64 * dt, dt);
            std::mem::swap(&mut current, &mut next);

            solver::validate_state(&current, n + 1)?;
        }

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(time_points, snapshots, current);
        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.model_name());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("steps", &steps.to_string());
        result.add_metadata("total time", &config.total_time.to_string());

        Ok(result)
    }
}

impl Solver for ExplicitSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        self.solve_recorded(scenario, config, &mut NullRecorder)
    }

    fn name(&self) -> &str {
        "Explicit finite differences"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
