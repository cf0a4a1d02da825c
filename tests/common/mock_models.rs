//! Mock thermal models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating solver behavior independently of the
//! full fuel rod physics.

use fuelrod_rs::physics::ThermalModel;
use nalgebra::DVector;

// =================================================================================================
// Exponential Relaxation: du/dt = -k*(u - target)
// =================================================================================================

/// Relaxation toward a constant target: du/dt = -k*(u - target)
///
/// Analytical solution: u(t) = target + (u₀ - target) * exp(-k*t)
///
/// Useful for testing solver accuracy since we know the exact solution.
pub struct ExponentialRelaxation {
    pub points: usize,
    pub rate: f64, // k in du/dt = -k*(u - target)
    pub target: f64,
    pub initial: f64,
}

impl ExponentialRelaxation {
    pub fn new(points: usize, rate: f64, target: f64, initial: f64) -> Self {
        Self {
            points,
            rate,
            target,
            initial,
        }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64) -> f64 {
        self.target + (self.initial - self.target) * (-self.rate * t).exp()
    }
}

impl ThermalModel for ExponentialRelaxation {
    fn points(&self) -> usize {
        self.points
    }

    fn coordinates(&self) -> Vec<f64> {
        (0..self.points).map(|i| i as f64).collect()
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_element(self.points, self.initial)
    }

    fn advance(&self, current: &DVector<f64>, next: &mut DVector<f64>, _elapsed: f64, dt: f64) {
        for i in 0..self.points {
            next[i] = current[i] - self.rate * dt * (current[i] - self.target);
        }
    }

    fn name(&self) -> &str {
        "Exponential Relaxation"
    }
}

// =================================================================================================
// Frozen Field: du/dt = 0
// =================================================================================================

/// A field that never changes; every solver step copies the state.
///
/// Useful for cadence and bookkeeping tests where the values are
/// irrelevant.
pub struct FrozenField {
    pub points: usize,
    pub value: f64,
}

impl FrozenField {
    pub fn new(points: usize, value: f64) -> Self {
        Self { points, value }
    }
}

impl ThermalModel for FrozenField {
    fn points(&self) -> usize {
        self.points
    }

    fn coordinates(&self) -> Vec<f64> {
        (0..self.points).map(|i| i as f64).collect()
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_element(self.points, self.value)
    }

    fn advance(&self, current: &DVector<f64>, next: &mut DVector<f64>, _elapsed: f64, _dt: f64) {
        next.copy_from(current);
    }

    fn name(&self) -> &str {
        "Frozen Field"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaxation_analytical() {
        let model = ExponentialRelaxation::new(5, 0.5, 0.0, 1.0);

        // u(0) = 1.0
        assert!((model.analytical_solution(0.0) - 1.0).abs() < 1e-10);

        // u(1) = exp(-0.5) ≈ 0.6065
        let u1 = model.analytical_solution(1.0);
        assert!((u1 - 0.6065306597).abs() < 1e-6);
    }

    #[test]
    fn test_frozen_field_copies_state() {
        let model = FrozenField::new(4, 25.0);
        let current = model.initial_state();
        let mut next = DVector::zeros(4);

        model.advance(&current, &mut next, 0.0, 1.0);
        assert_eq!(next, current);
    }
}
