//! fuelrod-rs: Fuel Element Heat Conduction Simulation
//!
//! A transient heat conduction simulator for a cylindrical nuclear fuel
//! element built from three concentric layers (fuel, cladding, thermal
//! insulation), cooled at its outer surface by a convective water loop.
//! Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! fuelrod-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Node roles resolved once at mesh construction
//!    - Explicit stability validation before any time stepping
//!
//! # Quick Start
//!
//! ```rust
//! use fuelrod_rs::models::FuelRod;
//! use fuelrod_rs::solver::{ExplicitSolver, Scenario, Solver, SolverConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Configure physical model and scenario
//! let rod = FuelRod::reference_case();
//! let scenario = Scenario::new(Box::new(rod));
//!
//! // 2. Configure solver: one simulated minute at dt = 4 ms
//! let config = SolverConfiguration::transient(60.0, 4e-3);
//!
//! // 3. Run simulation
//! let solver = ExplicitSolver::new();
//! let result = solver.solve(&scenario, &config)?;
//!
//! // 4. Access results
//! println!("Snapshots recorded: {}", result.len());
//! println!("Peak temperature: {:.1} °C", result.final_state.max());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Layer properties, heat source, coolant boundary (equations)
//! - [`models`]: The three-layer fuel rod and its radial mesh
//! - [`solver`]: Explicit finite-difference time integration (methods)
//! - [`output`]: Snapshot log persistence

// Core modules
pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use fuelrod_rs::prelude::*;
    //! ```
    pub use crate::models::{FuelRod, NodeKind, RadialMesh};
    pub use crate::output::{LogError, RecordedRun, SnapshotLog};
    pub use crate::physics::{CoolantRamp, HeatSource, LayerKind, LayerProperties, ThermalModel};
    pub use crate::solver::{
        ExplicitSolver, Scenario, SimulationResult, SnapshotRecorder, Solver, SolverConfiguration,
    };
}
