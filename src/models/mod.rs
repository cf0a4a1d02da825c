//! Concrete thermal models
//!
//! This module contains everything specific to the fuel-element geometry:
//!
//! - [`mesh`]: the radial mesh and its node-kind partition
//! - [`rules`]: the explicit per-node update rules
//! - [`fuel_rod`]: the [`FuelRod`] model that ties mesh, rules, heat
//!   source and coolant boundary together
//!
//! The solver never sees any of this directly — it drives models through
//! the [`ThermalModel`](crate::physics::ThermalModel) trait.

// module declarations
pub mod fuel_rod;
pub mod mesh;
pub mod rules;

// re-export commonly used types for convenience
pub use fuel_rod::FuelRod;
pub use mesh::{NodeKind, RadialMesh};
