//! Simulation scenario definition
//!
//! A scenario combines a physical model with its initial condition. The
//! same scenario can be handed to different solver configurations (or
//! different solvers) without touching the physics.

use nalgebra::DVector;

use crate::physics::ThermalModel;

/// Simulation scenario: WHAT to solve.
///
/// By default the initial condition comes from the model
/// ([`ThermalModel::initial_state`]); it can be overridden to start a run
/// from a previously computed field, e.g. to continue a transient or to
/// relax toward a steady state from an arbitrary profile.
///
/// # Examples
///
/// ```rust
/// use fuelrod_rs::models::FuelRod;
/// use fuelrod_rs::solver::Scenario;
///
/// let scenario = Scenario::new(Box::new(FuelRod::reference_case()));
/// assert_eq!(scenario.model_name(), "FuelRod");
/// assert!(scenario.validate().is_ok());
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn ThermalModel>,

    /// Optional override of the model's initial condition
    initial: Option<DVector<f64>>,
}

impl Scenario {
    /// Create a scenario using the model's own initial condition.
    pub fn new(model: Box<dyn ThermalModel>) -> Self {
        Self {
            model,
            initial: None,
        }
    }

    /// Builder pattern: start from a caller-supplied field instead.
    pub fn with_initial_state(mut self, initial: DVector<f64>) -> Self {
        self.initial = Some(initial);
        self
    }

    /// The field the run starts from at t = 0.
    pub fn initial_state(&self) -> DVector<f64> {
        match &self.initial {
            Some(state) => state.clone(),
            None => self.model.initial_state(),
        }
    }

    /// Verify the scenario is internally consistent.
    pub fn validate(&self) -> Result<(), String> {
        let points = self.model.points();
        if points < 2 {
            return Err(format!(
                "Model '{}' must have at least 2 mesh nodes, got {}",
                self.model.name(),
                points
            ));
        }
        if let Some(initial) = &self.initial {
            if initial.len() != points {
                return Err(format!(
                    "Initial state has {} nodes but model '{}' has {}",
                    initial.len(),
                    self.model.name(),
                    points
                ));
            }
        }
        let coordinates = self.model.coordinates();
        if coordinates.len() != points {
            return Err(format!(
                "Model '{}' reports {} coordinates for {} nodes",
                self.model.name(),
                coordinates.len(),
                points
            ));
        }
        Ok(())
    }

    /// Get model name.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.model_name())
            .field("points", &self.model.points())
            .field("initial override", &self.initial.is_some())
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct MockModel {
        points: usize,
    }

    impl ThermalModel for MockModel {
        fn points(&self) -> usize {
            self.points
        }

        fn coordinates(&self) -> Vec<f64> {
            (0..self.points).map(|i| i as f64 * 0.01).collect()
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::from_element(self.points, 25.0)
        }

        fn advance(&self, current: &DVector<f64>, next: &mut DVector<f64>, _t: f64, _dt: f64) {
            next.copy_from(current);
        }

        fn name(&self) -> &str {
            "MockModel"
        }
    }

    #[test]
    fn test_scenario_uses_model_initial_state() {
        let scenario = Scenario::new(Box::new(MockModel { points: 10 }));
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.initial_state(), DVector::from_element(10, 25.0));
    }

    #[test]
    fn test_initial_override() {
        let custom = DVector::from_element(10, 100.0);
        let scenario =
            Scenario::new(Box::new(MockModel { points: 10 })).with_initial_state(custom.clone());
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.initial_state(), custom);
    }

    #[test]
    fn test_mismatched_override_is_rejected() {
        let scenario = Scenario::new(Box::new(MockModel { points: 10 }))
            .with_initial_state(DVector::zeros(7));
        let err = scenario.validate().unwrap_err();
        assert!(err.contains("7"), "unexpected error: {err}");
    }
}
