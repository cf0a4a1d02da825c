//! Post-shutdown cooldown: a hot rod with no fission power losing its
//! heat to a cold, constant coolant loop.
//!
//! Run with:
//!
//! ```bash
//! cargo run --release --example cooldown
//! ```

use fuelrod_rs::models::FuelRod;
use fuelrod_rs::physics::{CoolantRamp, HeatSource, LayerProperties};
use fuelrod_rs::solver::{ExplicitSolver, Scenario, Solver, SolverConfiguration};

fn main() -> Result<(), String> {
    // Reference geometry and materials, but the source is off, the loop
    // is held at 25 °C and the rod starts uniformly hot.
    let rod = FuelRod::new(
        LayerProperties::new(7.0, 10970.0, 240.0, 0.05, 51),
        LayerProperties::new(237.0, 2700.0, 900.0, 0.075, 25),
        LayerProperties::new(2.5, 5600.0, 450.0, 0.1, 25),
        HeatSource::none(),
        CoolantRamp::constant(25.0, 5e3),
        300.0,
    )?;

    let scenario = Scenario::new(Box::new(rod));
    let config = SolverConfiguration::transient(1800.0, 4e-3);

    let result = ExplicitSolver::new().solve(&scenario, &config)?;

    println!("Cooldown from 300 °C, loop held at 25 °C");
    for (time, field) in result.iter() {
        println!(
            "  t = {:4.0} s   center {:6.1} °C   surface {:6.1} °C",
            time,
            field[0],
            field[field.len() - 1]
        );
    }

    Ok(())
}
