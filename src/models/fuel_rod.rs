//! Three-layer cylindrical fuel element model
//!
//! [`FuelRod`] is the concrete [`ThermalModel`] of this crate: a fissile
//! fuel pellet, its cladding, and an outer insulation layer, coupled to a
//! ramping coolant at the outer surface. One call to [`FuelRod::advance`]
//! applies the per-kind update rules to every mesh node, reading only the
//! previous generation.
//!
//! # Example
//!
//! ```rust
//! use fuelrod_rs::models::FuelRod;
//! use fuelrod_rs::physics::ThermalModel;
//!
//! let rod = FuelRod::reference_case();
//! assert_eq!(rod.points(), 100);
//!
//! // Reference time step of 4 ms sits inside the stability bound.
//! assert!(4e-3 < rod.stable_time_step().unwrap());
//! ```

use nalgebra::DVector;

use crate::models::mesh::{NodeKind, RadialMesh};
use crate::models::rules;
use crate::physics::{CoolantRamp, HeatSource, LayerKind, LayerProperties, ThermalModel};

// =================================================================================================
// Fuel rod model
// =================================================================================================

/// Transient thermal model of a three-layer cylindrical fuel element.
///
/// Owns the immutable run description: layer properties, mesh, heat
/// source, coolant ramp, and the uniform initial temperature. The
/// temperature field itself lives in the solver.
#[derive(Debug, Clone)]
pub struct FuelRod {
    fuel: LayerProperties,
    clad: LayerProperties,
    insulation: LayerProperties,
    source: HeatSource,
    coolant: CoolantRamp,
    mesh: RadialMesh,
    initial_temperature: f64,
}

impl FuelRod {
    /// Assemble a fuel-rod model from its physical description.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when the layer geometry is
    /// invalid (see [`RadialMesh::build`]).
    pub fn new(
        fuel: LayerProperties,
        clad: LayerProperties,
        insulation: LayerProperties,
        source: HeatSource,
        coolant: CoolantRamp,
        initial_temperature: f64,
    ) -> Result<Self, String> {
        let mesh = RadialMesh::build(&fuel, &clad, &insulation)?;
        Ok(Self {
            fuel,
            clad,
            insulation,
            source,
            coolant,
            mesh,
            initial_temperature,
        })
    }

    /// The reference PWR startup case.
    ///
    /// UO2 fuel (r = 5 cm, 51 nodes), aluminium clad (7.5 cm, 25 nodes),
    /// insulation (10 cm, 25 nodes); S₀ = 1 MW/m³ with b = 2; coolant
    /// ramping from 25 °C to 275 °C; uniform 25 °C initial field.
    pub fn reference_case() -> Self {
        Self::new(
            LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 51),
            LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 25),
            LayerProperties::new(2.5, 5600.0, 450.0, 0.1, 25),
            HeatSource::new(1e6, 2.0),
            CoolantRamp::new(25.0, 275.0, 5e3, 1.43e-7),
            25.0,
        )
        .expect("reference case parameters are valid")
    }

    /// The mesh backing this model.
    pub fn mesh(&self) -> &RadialMesh {
        &self.mesh
    }

    /// Properties of one layer.
    pub fn layer(&self, layer: LayerKind) -> &LayerProperties {
        match layer {
            LayerKind::Fuel => &self.fuel,
            LayerKind::Clad => &self.clad,
            LayerKind::Insulation => &self.insulation,
        }
    }

    /// The heat source of the fuel layer.
    pub fn source(&self) -> &HeatSource {
        &self.source
    }

    /// The coolant boundary model.
    pub fn coolant(&self) -> &CoolantRamp {
        &self.coolant
    }

    /// Uniform initial temperature \[°C\].
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }
}

// =================================================================================================
// ThermalModel implementation
// =================================================================================================

impl ThermalModel for FuelRod {
    fn points(&self) -> usize {
        self.mesh.len()
    }

    fn coordinates(&self) -> Vec<f64> {
        self.mesh.coordinates().to_vec()
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_element(self.mesh.len(), self.initial_temperature)
    }

    /// One full sweep of the six update rules.
    ///
    /// Every rule reads `current` (generation n) only. The center node is
    /// written last: it mirrors the *new* value of node 1, so the
    /// zero-flux symmetry `u[0] == u[1]` holds exactly on the produced
    /// generation.
    fn advance(&self, current: &DVector<f64>, next: &mut DVector<f64>, elapsed: f64, dt: f64) {
        let nf = self.mesh.nodes(LayerKind::Fuel);
        let nc = self.mesh.nodes(LayerKind::Clad);
        let dr_f = self.mesh.spacing(LayerKind::Fuel);
        let dr_c = self.mesh.spacing(LayerKind::Clad);
        let dr_i = self.mesh.spacing(LayerKind::Insulation);
        let r_f = self.fuel.outer_radius;
        let r_c = self.clad.outer_radius;

        // Coolant temperature of this generation; the ramp is a function
        // of elapsed simulated time only.
        let coolant_temperature = self.coolant.temperature(elapsed);

        for i in 1..self.mesh.len() {
            next[i] = match self.mesh.kind(i) {
                NodeKind::Center => unreachable!("center is index 0"),
                NodeKind::FuelInterior => {
                    let radius = i as f64 * dr_f;
                    current[i]
                        + rules::diffusion_increment(
                            self.fuel.diffusivity(),
                            dt,
                            dr_f,
                            radius,
                            current[i - 1],
                            current[i],
                            current[i + 1],
                        )
                        + self.source.temperature_increment(
                            dt,
                            self.fuel.volumetric_heat_capacity(),
                            radius,
                            r_f,
                        )
                }
                NodeKind::FuelCladInterface => rules::interface_value(
                    current[i - 1],
                    current[i + 1],
                    self.fuel.conductivity,
                    self.clad.conductivity,
                    dr_f,
                    dr_c,
                ),
                NodeKind::CladInterior => {
                    let radius = r_f + (i - nf) as f64 * dr_c;
                    current[i]
                        + rules::diffusion_increment(
                            self.clad.diffusivity(),
                            dt,
                            dr_c,
                            radius,
                            current[i - 1],
                            current[i],
                            current[i + 1],
                        )
                }
                NodeKind::CladInsulationInterface => rules::interface_value(
                    current[i - 1],
                    current[i + 1],
                    self.clad.conductivity,
                    self.insulation.conductivity,
                    dr_c,
                    dr_i,
                ),
                NodeKind::InsulationInterior => {
                    let radius = r_c + (i as isize - (nf + nc) as isize) as f64 * dr_i;
                    current[i]
                        + rules::diffusion_increment(
                            self.insulation.diffusivity(),
                            dt,
                            dr_i,
                            radius,
                            current[i - 1],
                            current[i],
                            current[i + 1],
                        )
                }
                NodeKind::OuterSurface => rules::convective_surface(
                    self.coolant.heat_transfer,
                    coolant_temperature,
                    self.insulation.conductivity,
                    dr_i,
                    current[i - 1],
                ),
            };
        }

        // Zero-flux center condition on the new generation.
        next[0] = next[1];
    }

    fn stable_time_step(&self) -> Option<f64> {
        // Most restrictive Fourier bound 0.5·Δr²/α over the three layers.
        let bound = [
            (LayerKind::Fuel, &self.fuel),
            (LayerKind::Clad, &self.clad),
            (LayerKind::Insulation, &self.insulation),
        ]
        .iter()
        .map(|(kind, layer)| {
            let dr = self.mesh.spacing(*kind);
            0.5 * dr * dr / layer.diffusivity()
        })
        .fold(f64::INFINITY, f64::min);
        Some(bound)
    }

    fn name(&self) -> &str {
        "FuelRod"
    }

    fn description(&self) -> Option<&str> {
        Some("Explicit transient radial conduction in a fuel/clad/insulation cylinder")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn step_once(rod: &FuelRod, current: &DVector<f64>, elapsed: f64, dt: f64) -> DVector<f64> {
        let mut next = DVector::zeros(current.len());
        rod.advance(current, &mut next, elapsed, dt);
        next
    }

    #[test]
    fn test_center_symmetry_after_every_step() {
        let rod = FuelRod::reference_case();
        let mut u = rod.initial_state();
        for n in 0..200 {
            u = step_once(&rod, &u, n as f64 * 4e-3, 4e-3);
            assert_eq!(u[0], u[1], "symmetry broken at step {n}");
        }
    }

    #[test]
    fn test_fuel_heats_from_uniform_start() {
        // With the source on and the coolant still cold, the fuel interior
        // must rise above the initial 25 degrees within a few steps.
        let rod = FuelRod::reference_case();
        let mut u = rod.initial_state();
        for n in 0..100 {
            u = step_once(&rod, &u, n as f64 * 4e-3, 4e-3);
        }
        assert!(u[10] > 25.0);
        assert!(u[25] > 25.0);
    }

    #[test]
    fn test_clad_does_not_generate_heat() {
        // No source, coolant pinned at the initial temperature: the field
        // must stay exactly uniform, every rule returning the same value.
        let rod = FuelRod::new(
            LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 11),
            LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 6),
            LayerProperties::new(2.5, 5600.0, 450.0, 0.1, 6),
            HeatSource::none(),
            CoolantRamp::constant(25.0, 5e3),
            25.0,
        )
        .unwrap();
        let mut u = rod.initial_state();
        for n in 0..50 {
            u = step_once(&rod, &u, n as f64 * 0.05, 0.05);
        }
        for i in 0..u.len() {
            assert!((u[i] - 25.0).abs() < 1e-12, "node {i} drifted to {}", u[i]);
        }
    }

    #[test]
    fn test_stable_time_step_is_clad_limited() {
        // The clad has by far the largest diffusivity, so it sets the
        // bound: 0.5 * (0.025/24)^2 / 9.753e-5 ≈ 5.56e-3 s.
        let rod = FuelRod::reference_case();
        let limit = rod.stable_time_step().unwrap();
        let dr_c = 0.025 / 24.0;
        let expected = 0.5 * dr_c * dr_c / (237.0 / (2700.0 * 900.0));
        assert!((limit - expected).abs() < 1e-12);
        assert!(4e-3 < limit && limit < 0.1);
    }

    #[test]
    fn test_advance_reads_previous_generation_only() {
        // Jacobi vs Gauss-Seidel: nodes recomputed by hand from the
        // untouched previous generation must match advance() bit for bit.
        // An in-place sweep would feed already-updated neighbors into the
        // interface and boundary rules and fail this.
        let rod = FuelRod::reference_case();
        let mut u = rod.initial_state();
        // Put some structure into the field first.
        for n in 0..20 {
            u = step_once(&rod, &u, n as f64 * 4e-3, 4e-3);
        }
        let elapsed = 20.0 * 4e-3;
        let swept = step_once(&rod, &u, elapsed, 4e-3);

        // Fuel-clad interface (i = 50) from previous-generation neighbors.
        let expected = rules::interface_value(u[49], u[51], 7.0, 237.0, 1e-3, 0.025 / 24.0);
        assert_eq!(swept[50], expected);

        // Clad-insulation interface (i = 74).
        let dr = 0.025 / 24.0;
        let expected = rules::interface_value(u[73], u[75], 237.0, 2.5, dr, dr);
        assert_eq!(swept[74], expected);

        // Outer surface (i = 99) uses the previous-generation inner
        // neighbor and the coolant temperature of this generation.
        let coolant = rod.coolant().temperature(elapsed);
        let expected = rules::convective_surface(5e3, coolant, 2.5, dr, u[98]);
        assert_eq!(swept[99], expected);
    }

    #[test]
    fn test_invalid_geometry_is_a_configuration_error() {
        let err = FuelRod::new(
            LayerProperties::new(7.0, 10970.0, 240.0, 0.1, 11),
            LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 6),
            LayerProperties::new(2.5, 5600.0, 450.0, 0.05, 6),
            HeatSource::none(),
            CoolantRamp::constant(25.0, 5e3),
            25.0,
        );
        assert!(err.is_err());
    }
}
