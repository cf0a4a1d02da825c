//! Physical model trait
//!
//! This module defines the seam between physics and numerics:
//! - the model owns the equations (node update rules, boundary physics);
//! - the solver owns the method (time loop, double buffering, snapshots).
//!
//! The same solver drives any `ThermalModel`, which is what makes the
//! driver testable against trivial mock models.

use nalgebra::DVector;

// =================================================================================================
// Thermal Model Trait
// =================================================================================================

/// Trait for transient thermal models on a 1-D mesh.
///
/// # Responsibility
///
/// A model knows how to produce generation n+1 of its temperature field
/// from generation n. It does NOT own the field, does not keep time, and
/// does not decide when snapshots happen — all of that is the solver's
/// job.
///
/// # Generation invariant
///
/// `advance` receives the full previous-generation vector as `current` and
/// writes the next generation into `next`. Implementations must read
/// `current` only; reading back values already written to `next` for a
/// *different* node index breaks the explicit scheme. (Writing `next[i]`
/// from other `next` values is permitted only where the model explicitly
/// defines a constraint on the new generation, e.g. mirroring a symmetry
/// node.)
pub trait ThermalModel: Send + Sync {
    /// Number of mesh nodes.
    ///
    /// Used by the solver to allocate the state buffers; `advance` may
    /// assume both vectors have exactly this length.
    fn points(&self) -> usize;

    /// Physical coordinates of the mesh nodes \[m\], strictly increasing.
    fn coordinates(&self) -> Vec<f64>;

    /// Initial temperature field at t = 0 \[°C\].
    fn initial_state(&self) -> DVector<f64>;

    /// Compute generation n+1 from generation n.
    ///
    /// # Arguments
    ///
    /// * `current` - temperature field of generation n
    /// * `next` - output buffer for generation n+1 (same length)
    /// * `elapsed` - simulated time of generation n \[s\]
    /// * `dt` - time step \[s\]
    fn advance(&self, current: &DVector<f64>, next: &mut DVector<f64>, elapsed: f64, dt: f64);

    /// Largest stable explicit time step, if the model can bound it.
    ///
    /// Models built on an explicit diffusion stencil should report the
    /// most restrictive Fourier bound `0.5·Δr²/α` over their layers so the
    /// solver can reject a destabilizing `dt` at configuration time
    /// instead of silently diverging.
    fn stable_time_step(&self) -> Option<f64> {
        None
    }

    /// Name of the model (used for display and result metadata).
    fn name(&self) -> &str;

    /// Optional longer description.
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
