//! Material layer properties
//!
//! A fuel element is a stack of three concentric material layers: fissile
//! fuel, cladding, and an outer insulation layer in contact with the
//! coolant. Each layer carries its own thermal properties and its own
//! portion of the radial mesh.
//!
//! # Derived quantities
//!
//! The thermal diffusivity is never stored: it is always `k / (ρ·cp)`,
//! computed on demand. Storing it separately would allow the three values
//! to drift out of sync.
//!
//! # Example
//!
//! ```rust
//! use fuelrod_rs::physics::LayerProperties;
//!
//! // UO2 fuel pellet, 5 cm radius, 51 radial nodes
//! let fuel = LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 51);
//!
//! let alpha = fuel.diffusivity();
//! assert!((alpha - 7.0 / (10970.0 * 240.0)).abs() < 1e-18);
//! ```

// =================================================================================================
// Layer identification
// =================================================================================================

/// The three material layers of a fuel element, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Fissile fuel (heat-generating)
    Fuel,
    /// Cladding (no heat generation)
    Clad,
    /// Insulation / coolant-interface layer (no heat generation)
    Insulation,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Fuel => write!(f, "fuel"),
            LayerKind::Clad => write!(f, "clad"),
            LayerKind::Insulation => write!(f, "insulation"),
        }
    }
}

// =================================================================================================
// Layer properties
// =================================================================================================

/// Thermal properties and mesh sizing of one material layer.
///
/// Immutable for the duration of a run: the mesh builder and the node
/// update rules read these values, nothing ever writes them back.
///
/// # Fields
///
/// - `conductivity` — thermal conductivity k \[W/(m·K)\]
/// - `density` — ρ \[kg/m³\]
/// - `specific_heat` — cp \[J/(kg·K)\]
/// - `outer_radius` — outer radius of the layer, measured from the
///   element center \[m\]
/// - `nodes` — number of radial mesh nodes assigned to the layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerProperties {
    /// Thermal conductivity k \[W/(m·K)\]
    pub conductivity: f64,

    /// Density ρ \[kg/m³\]
    pub density: f64,

    /// Specific heat at constant pressure cp \[J/(kg·K)\]
    pub specific_heat: f64,

    /// Outer radius of the layer \[m\]
    pub outer_radius: f64,

    /// Number of radial mesh nodes in the layer
    pub nodes: usize,
}

impl LayerProperties {
    /// Create a new layer description.
    ///
    /// Geometry validation (positive radii, node counts ≥ 2, increasing
    /// radii across layers) happens in the mesh builder, which sees all
    /// three layers together.
    pub fn new(
        conductivity: f64,
        density: f64,
        specific_heat: f64,
        outer_radius: f64,
        nodes: usize,
    ) -> Self {
        Self {
            conductivity,
            density,
            specific_heat,
            outer_radius,
            nodes,
        }
    }

    /// Thermal diffusivity α = k / (ρ·cp) \[m²/s\].
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / (self.density * self.specific_heat)
    }

    /// Volumetric heat capacity ρ·cp \[J/(m³·K)\].
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffusivity_matches_reference_values() {
        // The reference case quotes the diffusivities
        // directly; they must be reproducible from k, rho, cp.
        let fuel = LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 51);
        let clad = LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 25);
        let insulation = LayerProperties::new(2.5, 5600.0, 450.0, 0.1, 25);

        assert!((fuel.diffusivity() - 2.6587663324217565e-6).abs() < 1e-15);
        assert!((clad.diffusivity() - 9.753086419753086e-5).abs() < 1e-15);
        assert!((insulation.diffusivity() - 9.920634920634921e-7).abs() < 1e-15);
    }

    #[test]
    fn test_volumetric_heat_capacity() {
        let clad = LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 25);
        assert_eq!(clad.volumetric_heat_capacity(), 2700.0 * 900.0);
    }

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::Fuel.to_string(), "fuel");
        assert_eq!(LayerKind::Clad.to_string(), "clad");
        assert_eq!(LayerKind::Insulation.to_string(), "insulation");
    }
}
