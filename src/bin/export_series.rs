//! Export projections for the whole slider grid to CSV
//!
//! Runs every combination of the documented contribution, year, and rate
//! steps and writes one row per scenario for spreadsheet comparison.

use std::time::Instant;

use rayon::prelude::*;

use savings_engine::params::{
    SimulationParameters, CONTRIBUTION_MAX, CONTRIBUTION_MIN, CONTRIBUTION_STEP, YEARS_MAX,
    YEARS_MIN,
};
use savings_engine::projection::compute_projection;

/// Rates sampled from the 0-12% slider
const SWEEP_RATES: [f64; 6] = [0.0, 3.0, 5.0, 7.0, 10.0, 12.0];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    let mut scenarios = Vec::new();
    let mut contribution = CONTRIBUTION_MIN;
    while contribution <= CONTRIBUTION_MAX {
        for years in YEARS_MIN..=YEARS_MAX {
            for rate in SWEEP_RATES {
                scenarios.push(SimulationParameters::new(contribution, years, rate));
            }
        }
        contribution += CONTRIBUTION_STEP;
    }

    println!("Running {} scenarios...", scenarios.len());

    let results: Vec<_> = scenarios
        .par_iter()
        .map(|params| compute_projection(params).expect("grid parameters are valid"))
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    let output_path = "projection_grid.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "Contribution",
        "Years",
        "Rate",
        "FinalBalance",
        "TotalContributions",
        "InterestEarned",
    ])?;

    for (params, result) in scenarios.iter().zip(&results) {
        writer.write_record([
            format!("{:.0}", params.monthly_contribution),
            params.years.to_string(),
            format!("{:.1}", params.annual_rate_pct),
            format!("{:.2}", result.final_balance),
            format!("{:.2}", result.total_contributions),
            format!("{:.2}", result.total_interest_earned),
        ])?;
    }
    writer.flush()?;

    println!("Output written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
