//! Volumetric heat generation in the fuel
//!
//! Fission power density across the pellet is not uniform: self-shielding
//! depresses the flux at the center, so the power density follows a
//! parabolic profile that peaks toward the fuel surface,
//!
//! ```text
//! S(r) = S₀ · (1 + b·(r/r_f)²)
//! ```
//!
//! where `S₀` is the centerline power density and `b` the parabola
//! coefficient. `b = 0` recovers a uniform source; only the fuel layer
//! generates heat.

/// Parabolic volumetric heat source of the fuel layer.
///
/// Stateless: the profile is fixed for a run and evaluated per node.
///
/// # Example
///
/// ```rust
/// use fuelrod_rs::physics::HeatSource;
///
/// let source = HeatSource::new(1e6, 2.0);
///
/// // Centerline value is S0, surface value is S0 * (1 + b)
/// assert_eq!(source.power_density(0.0, 0.05), 1e6);
/// assert_eq!(source.power_density(0.05, 0.05), 3e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    /// Centerline power density S₀ \[W/m³\]
    pub centerline: f64,

    /// Parabola coefficient b (dimensionless, ≥ 0 peaks at the surface)
    pub parabola: f64,
}

impl HeatSource {
    /// Create a parabolic heat source.
    pub fn new(centerline: f64, parabola: f64) -> Self {
        Self {
            centerline,
            parabola,
        }
    }

    /// A source that generates no heat anywhere.
    ///
    /// Useful for pure-cooldown scenarios and for the boundedness tests.
    pub fn none() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Power density at radius `r` inside a fuel pellet of radius
    /// `fuel_radius` \[W/m³\].
    pub fn power_density(&self, r: f64, fuel_radius: f64) -> f64 {
        self.centerline * (1.0 + self.parabola * (r / fuel_radius).powi(2))
    }

    /// Temperature increment contributed over one time step `dt` at radius
    /// `r`, for a material of volumetric heat capacity `rho_cp` \[°C\].
    ///
    /// This is the source term of the fuel-interior update rule:
    /// `(dt·S₀/(ρ·cp)) · (1 + b·(r/r_f)²)`.
    pub fn temperature_increment(&self, dt: f64, rho_cp: f64, r: f64, fuel_radius: f64) -> f64 {
        dt * self.power_density(r, fuel_radius) / rho_cp
    }
}

// =================================================================================================
// Tests
// =================================================================================================
