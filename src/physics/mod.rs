//! Physical description of the fuel element
//!
//! This module provides the physical side of the simulation: material
//! properties, the heat source, the coolant boundary, and the trait that
//! connects a physical model to a numerical solver.
//!
//! # Core Concepts
//!
//! - **Layer properties**: conductivity, density, specific heat and mesh
//!   sizing of each of the three concentric layers
//! - **Heat source**: parabolic fission power-density profile of the fuel
//! - **Coolant ramp**: time-varying convective boundary temperature
//! - **Thermal model**: the equations, exposed to the solver through
//!   [`ThermalModel`]
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - the model provides the **equations** (physics),
//! - the solver provides the **method** to solve them (numerics).
//!
//! This separation allows the same driver to run the full fuel-rod model
//! and the trivial mock models used in the integration tests.
//!
//! # Example
//!
//! ```rust
//! use fuelrod_rs::physics::{CoolantRamp, HeatSource, LayerProperties};
//!
//! let fuel = LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 51);
//! let source = HeatSource::new(1e6, 2.0);
//! let coolant = CoolantRamp::new(25.0, 275.0, 5e3, 1.43e-7);
//!
//! assert!(fuel.diffusivity() > 0.0);
//! assert_eq!(coolant.temperature(0.0), 25.0);
//! assert!(source.power_density(0.05, 0.05) > source.power_density(0.0, 0.05));
//! ```

// module declarations
pub mod coolant;
pub mod layers;
pub mod source;
pub mod traits;

// re-export commonly used types for convenience
pub use coolant::CoolantRamp;
pub use layers::{LayerKind, LayerProperties};
pub use source::HeatSource;
pub use traits::ThermalModel;
