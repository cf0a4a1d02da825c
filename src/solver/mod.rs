//! Numerical solver
//!
//! This module provides the time-stepping side of the simulation. The
//! architecture separates concerns into three layers:
//!
//! 1. **Scenario** ([`Scenario`]) — WHAT to solve: the physical model and
//!    its initial condition.
//! 2. **Configuration** ([`SolverConfiguration`]) — HOW to solve it:
//!    duration, time step, snapshot cadence.
//! 3. **Solver** ([`Solver`] trait, [`ExplicitSolver`]) — the numerical
//!    method, independent of the physics.
//!
//! This separation allows the same driver to run the production fuel-rod
//! model and the mock models of the test suite, and keeps the stability
//! and cadence rules in one place.
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverConfiguration`, `SimulationResult`,
//!   `SnapshotRecorder`
//! - **`scenario`**: problem definition
//! - **`explicit`**: the explicit finite-difference driver
//!
//! # Quick Start Example
//!
//! ```rust
//! use fuelrod_rs::models::FuelRod;
//! use fuelrod_rs::solver::{ExplicitSolver, Scenario, Solver, SolverConfiguration};
//!
//! let scenario = Scenario::new(Box::new(FuelRod::reference_case()));
//! let config = SolverConfiguration::transient(60.0, 4e-3);
//!
//! let result = ExplicitSolver::new().solve(&scenario, &config)?;
//! assert_eq!(result.len(), 2); // snapshots at t = 0 and t = 60
//! # Ok::<(), String>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod explicit;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use explicit::ExplicitSolver;
pub use scenario::Scenario;
pub use traits::{SimulationResult, SnapshotRecorder, Solver, SolverConfiguration};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a temperature field for numerical issues.
///
/// Checks that the field does not contain NaN or Inf values, which would
/// indicate instability of the explicit scheme or an error in the model.
/// Caught at the step where they first appear rather than propagated
/// through the rest of the run.
pub(crate) fn validate_state(state: &DVector<f64>, step: usize) -> Result<(), String> {
    if state.iter().any(|x| x.is_nan()) {
        return Err(format!(
            "NaN detected in the temperature field at step {}. This indicates numerical \
             instability; reduce the time step.",
            step
        ));
    }
    if state.iter().any(|x| x.is_infinite()) {
        return Err(format!(
            "Infinity detected in the temperature field at step {}. This indicates numerical \
             overflow; check the model parameters and the time step.",
            step
        ));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_state_accepts_finite_fields() {
        let state = DVector::from_vec(vec![25.0, 26.5, -3.0]);
        assert!(validate_state(&state, 7).is_ok());
    }

    #[test]
    fn test_validate_state_flags_nan() {
        let state = DVector::from_vec(vec![25.0, f64::NAN]);
        let err = validate_state(&state, 42).unwrap_err();
        assert!(err.contains("NaN"));
        assert!(err.contains("step 42"));
    }

    #[test]
    fn test_validate_state_flags_infinity() {
        let state = DVector::from_vec(vec![25.0, f64::INFINITY]);
        let err = validate_state(&state, 3).unwrap_err();
        assert!(err.contains("Infinity"));
    }
}
