//! Helper functions for integration tests

use fuelrod_rs::models::FuelRod;
use fuelrod_rs::physics::{CoolantRamp, HeatSource, LayerProperties};
use fuelrod_rs::solver::SnapshotRecorder;
use nalgebra::DVector;

/// Assert that two vectors are close (within tolerance)
pub fn assert_vectors_close(
    vec1: &DVector<f64>,
    vec2: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(vec1.len(), vec2.len(), "{}: Dimension mismatch", message);

    for (i, (&v1, &v2)) in vec1.iter().zip(vec2.iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// A geometrically faithful but coarse fuel rod (11/6/6 nodes).
///
/// Same materials and radii as the reference case, so the physics is
/// unchanged, but the stability limit relaxes to ~0.13 s and long
/// simulated horizons finish in milliseconds of wall time.
pub fn coarse_rod(source: HeatSource, coolant: CoolantRamp, initial: f64) -> FuelRod {
    FuelRod::new(
        LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 11),
        LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 6),
        LayerProperties::new(2.5, 5600.0, 450.0, 0.1, 6),
        source,
        coolant,
        initial,
    )
    .unwrap()
}

/// Recorder that keeps every snapshot in memory.
#[derive(Default)]
pub struct CollectedFrames {
    pub frames: Vec<(DVector<f64>, f64)>,
}

impl SnapshotRecorder for CollectedFrames {
    fn record(&mut self, temperatures: &DVector<f64>, elapsed: f64) -> Result<(), String> {
        self.frames.push((temperatures.clone(), elapsed));
        Ok(())
    }
}

/// Create an empty in-memory recorder
pub fn collecting_recorder() -> CollectedFrames {
    CollectedFrames::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_coarse_rod_is_stable_at_a_tenth_of_a_second() {
        use fuelrod_rs::physics::ThermalModel;

        let rod = coarse_rod(
            HeatSource::new(1e6, 2.0),
            CoolantRamp::new(25.0, 275.0, 5e3, 1.43e-7),
            25.0,
        );
        assert_eq!(rod.points(), 22);
        assert!(rod.stable_time_step().unwrap() > 0.1);
    }
}
