//! One hour of the reference PWR startup, recorded to `startup.txt`.
//!
//! Run with:
//!
//! ```bash
//! cargo run --release --example reference_run
//! ```

use fuelrod_rs::models::FuelRod;
use fuelrod_rs::output::SnapshotLog;
use fuelrod_rs::physics::ThermalModel;
use fuelrod_rs::solver::{ExplicitSolver, Scenario, SolverConfiguration};

fn main() -> Result<(), String> {
    let rod = FuelRod::reference_case();
    let mesh = rod.coordinates();

    println!("Fuel rod startup simulation");
    println!("  nodes:          {}", rod.points());
    println!(
        "  stability:      dt ≤ {:.2} ms",
        rod.stable_time_step().map(|s| s * 1e3).unwrap_or(f64::NAN)
    );

    let scenario = Scenario::new(Box::new(rod));
    let config = SolverConfiguration::transient(3600.0, 4e-3);

    let mut log = SnapshotLog::create("startup.txt", &mesh).map_err(|e| e.to_string())?;
    let result = ExplicitSolver::new().solve_recorded(&scenario, &config, &mut log)?;

    println!("  snapshots:      {} (one per simulated minute)", result.len());
    println!("  log:            startup.txt");
    println!(
        "  centerline:     {:.1} °C after one hour",
        result.final_state[0]
    );
    println!(
        "  outer surface:  {:.1} °C after one hour",
        result.final_state[result.final_state.len() - 1]
    );
    println!("  peak:           {:.1} °C", result.final_state.max());

    Ok(())
}
