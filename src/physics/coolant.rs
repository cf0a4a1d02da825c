//! Time-varying coolant temperature at the outer boundary
//!
//! During startup the coolant loop heats up with the plant, so the
//! convective boundary does not see a fixed bath temperature: it sees an
//! exponential ramp from the initial loop temperature to the asymptotic
//! operating temperature,
//!
//! ```text
//! T_cool(t) = T_out − (T_out − T_in) · exp(−(α_water·h / 0.5545) · t)
//! ```
//!
//! The ramp is stateless — it is a pure function of elapsed simulated time
//! and is recomputed at every step, never stored.

/// Reference constant of the coolant loop response, tying the ramp rate to
/// the water diffusivity and the heat-transfer coefficient (empirical
/// value of the reference loop).
const LOOP_RESPONSE_REFERENCE: f64 = 0.5545;

/// Exponential coolant temperature ramp.
///
/// # Example
///
/// ```rust
/// use fuelrod_rs::physics::CoolantRamp;
///
/// let coolant = CoolantRamp::new(25.0, 275.0, 5e3, 1.43e-7);
///
/// // Starts exactly at the initial temperature...
/// assert_eq!(coolant.temperature(0.0), 25.0);
/// // ...and approaches the asymptotic temperature from below.
/// assert!(coolant.temperature(3600.0) < 275.0);
/// assert!(coolant.temperature(3600.0) > coolant.temperature(60.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantRamp {
    /// Initial coolant temperature T_in \[°C\]
    pub initial: f64,

    /// Asymptotic coolant temperature T_out \[°C\]
    pub asymptotic: f64,

    /// Convective heat-transfer coefficient h \[W/(m²·K)\]
    pub heat_transfer: f64,

    /// Thermal diffusivity of the coolant water \[m²/s\]
    pub water_diffusivity: f64,
}

impl CoolantRamp {
    /// Create a coolant ramp.
    pub fn new(initial: f64, asymptotic: f64, heat_transfer: f64, water_diffusivity: f64) -> Self {
        Self {
            initial,
            asymptotic,
            heat_transfer,
            water_diffusivity,
        }
    }

    /// A coolant held at a constant temperature.
    ///
    /// The ramp degenerates to a constant when initial and asymptotic
    /// temperatures coincide; the rate constant is irrelevant then.
    pub fn constant(temperature: f64, heat_transfer: f64) -> Self {
        Self::new(temperature, temperature, heat_transfer, 0.0)
    }

    /// Ramp rate constant \[1/s\].
    pub fn rate(&self) -> f64 {
        self.water_diffusivity * self.heat_transfer / LOOP_RESPONSE_REFERENCE
    }

    /// Coolant temperature at elapsed simulated time `t` \[°C\].
    pub fn temperature(&self, t: f64) -> f64 {
        self.asymptotic - (self.asymptotic - self.initial) * (-self.rate() * t).exp()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
