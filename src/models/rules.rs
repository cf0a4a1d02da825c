//! Node update rules of the explicit scheme
//!
//! Each rule consumes previous-generation values at `i−1`, `i`, `i+1`
//! (or the single inner neighbor, at the outer boundary) and produces the
//! next-generation value at `i`. The rules are pure functions; the
//! dispatch over node kinds lives in [`FuelRod::advance`].
//!
//! # The stencil
//!
//! The cylindrical diffusion term at radius r is
//!
//! ```text
//! (α·dt/Δr) · [ (u₊ − 2u + u₋)/Δr + (u₊ − u₋)/r ]
//! ```
//!
//! Interface nodes do not diffuse: they are flux-matched between the two
//! neighboring materials, which enforces continuity of `k·dT/dr` across
//! the discontinuity without an explicit contact resistance. The outer
//! node balances conduction arriving from inside against convection into
//! the coolant.
//!
//! [`FuelRod::advance`]: crate::models::FuelRod::advance

// =================================================================================================
// Interior diffusion
// =================================================================================================

/// Explicit cylindrical diffusion increment at a node of radius `radius`.
///
/// Returns the temperature *change* over one step, not the new value.
/// `u_m`, `u_i`, `u_p` are the previous-generation values at `i−1`, `i`,
/// `i+1`.
pub fn diffusion_increment(
    alpha: f64,
    dt: f64,
    spacing: f64,
    radius: f64,
    u_m: f64,
    u_i: f64,
    u_p: f64,
) -> f64 {
    (alpha * dt / spacing) * ((u_p - 2.0 * u_i + u_m) / spacing + (u_p - u_m) / radius)
}

// =================================================================================================
// Interfaces
// =================================================================================================

/// Flux-matched temperature at a material interface.
///
/// Harmonic average of the two neighbors weighted by each side's
/// conductivity over its spacing:
///
/// ```text
/// u = (u₋·Δr_out·k_in + u₊·Δr_in·k_out) / (Δr_in·k_out + Δr_out·k_in)
/// ```
///
/// Degenerate sanity property: when `u₋ == u₊` the interface takes exactly
/// that common value, for any positive conductivities and spacings.
pub fn interface_value(
    u_m: f64,
    u_p: f64,
    inner_conductivity: f64,
    outer_conductivity: f64,
    inner_spacing: f64,
    outer_spacing: f64,
) -> f64 {
    (u_m * outer_spacing * inner_conductivity + u_p * inner_spacing * outer_conductivity)
        / (inner_spacing * outer_conductivity + outer_spacing * inner_conductivity)
}

// =================================================================================================
// Outer convective boundary
// =================================================================================================

/// Surface temperature from a one-sided convective balance.
///
/// Conduction arriving from the last insulation node equals convection
/// into the coolant at `coolant_temperature`:
///
/// ```text
/// u = (h·T_cool + (k/Δr)·u₋) / (h + k/Δr)
/// ```
pub fn convective_surface(
    heat_transfer: f64,
    coolant_temperature: f64,
    conductivity: f64,
    spacing: f64,
    u_m: f64,
) -> f64 {
    (heat_transfer * coolant_temperature + (conductivity / spacing) * u_m)
        / (heat_transfer + conductivity / spacing)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffusion_vanishes_on_uniform_field() {
        // A flat temperature profile produces no diffusion, at any radius.
        let d = diffusion_increment(1e-5, 4e-3, 1e-3, 0.02, 100.0, 100.0, 100.0);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_diffusion_moves_toward_neighbors() {
        // A local cold spot between two hot neighbors must warm up.
        let d = diffusion_increment(1e-5, 4e-3, 1e-3, 0.02, 100.0, 50.0, 100.0);
        assert!(d > 0.0);
        // And a hot spot must cool down.
        let d = diffusion_increment(1e-5, 4e-3, 1e-3, 0.02, 50.0, 100.0, 50.0);
        assert!(d < 0.0);
    }

    #[test]
    fn test_interface_degenerate_round_trip() {
        // u_m == u_p must come back exactly, for arbitrary positive
        // conductivities and spacings.
        for (k_in, k_out, dr_in, dr_out) in [
            (7.0, 237.0, 1e-3, 0.025 / 24.0),
            (237.0, 2.5, 0.025 / 24.0, 0.025 / 24.0),
            (1.0, 1.0, 1.0, 1.0),
            (0.3, 400.0, 5e-4, 2e-3),
        ] {
            let u = 173.4;
            let got = interface_value(u, u, k_in, k_out, dr_in, dr_out);
            assert_eq!(got, u, "k_in={k_in} k_out={k_out}");
        }
    }

    #[test]
    fn test_interface_weighted_toward_conductive_side() {
        // Equal spacings: the better conductor pulls the interface toward
        // its own neighbor value.
        let u = interface_value(0.0, 100.0, 237.0, 2.5, 1e-3, 1e-3);
        assert!(u < 50.0, "interface should sit near the conductive side, got {u}");
        let u = interface_value(0.0, 100.0, 2.5, 237.0, 1e-3, 1e-3);
        assert!(u > 50.0);
    }

    #[test]
    fn test_interface_is_bounded_by_neighbors() {
        let u = interface_value(40.0, 90.0, 7.0, 237.0, 1e-3, 1.04e-3);
        assert!(u > 40.0 && u < 90.0);
    }

    #[test]
    fn test_convective_surface_limits() {
        // h -> infinity: the surface follows the coolant.
        let u = convective_surface(1e12, 80.0, 2.5, 1e-3, 200.0);
        assert!((u - 80.0).abs() < 1e-6);
        // h -> 0: the surface follows the inner node (adiabatic).
        let u = convective_surface(1e-12, 80.0, 2.5, 1e-3, 200.0);
        assert!((u - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_convective_surface_between_coolant_and_wall() {
        let u = convective_surface(5e3, 25.0, 2.5, 0.025 / 24.0, 150.0);
        assert!(u > 25.0 && u < 150.0);
    }
}
