//! Scenario runner for batch what-if projections
//!
//! Holds a base parameter set, then runs many variations of it (different
//! rates, different contributions) without the caller rebuilding parameters
//! each time.

use rayon::prelude::*;

use crate::params::{InvalidParameterError, SimulationParameters};
use crate::projection::{compute_projection, SimulationResult};

/// Batch runner over variations of a base parameter set
///
/// # Example
/// ```
/// use savings_engine::params::SimulationParameters;
/// use savings_engine::scenario::ScenarioRunner;
///
/// let runner = ScenarioRunner::with_base(SimulationParameters::new(200.0, 10, 5.0));
/// let sweep = runner.rate_sweep(&[3.0, 5.0, 7.0]).unwrap();
/// assert!(sweep[2].1.final_balance > sweep[0].1.final_balance);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: SimulationParameters,
}

impl ScenarioRunner {
    /// Runner seeded with the input surface's default parameters
    pub fn new() -> Self {
        Self {
            base: SimulationParameters::default_ui(),
        }
    }

    pub fn with_base(base: SimulationParameters) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &SimulationParameters {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut SimulationParameters {
        &mut self.base
    }

    /// Run a single scenario
    pub fn run(
        &self,
        params: &SimulationParameters,
    ) -> Result<SimulationResult, InvalidParameterError> {
        compute_projection(params)
    }

    /// Run many scenarios in parallel. Each scenario is an independent pure
    /// computation; the first invalid parameter set fails the whole batch.
    pub fn run_scenarios(
        &self,
        scenarios: &[SimulationParameters],
    ) -> Result<Vec<SimulationResult>, InvalidParameterError> {
        scenarios.par_iter().map(compute_projection).collect()
    }

    /// Vary only the annual rate against the base parameters
    pub fn rate_sweep(
        &self,
        rates: &[f64],
    ) -> Result<Vec<(f64, SimulationResult)>, InvalidParameterError> {
        let scenarios: Vec<_> = rates
            .iter()
            .map(|&rate| SimulationParameters {
                annual_rate_pct: rate,
                ..self.base
            })
            .collect();
        let results = self.run_scenarios(&scenarios)?;
        Ok(rates.iter().copied().zip(results).collect())
    }

    /// Vary only the monthly contribution against the base parameters
    pub fn contribution_sweep(
        &self,
        contributions: &[f64],
    ) -> Result<Vec<(f64, SimulationResult)>, InvalidParameterError> {
        let scenarios: Vec<_> = contributions
            .iter()
            .map(|&contribution| SimulationParameters {
                monthly_contribution: contribution,
                ..self.base
            })
            .collect();
        let results = self.run_scenarios(&scenarios)?;
        Ok(contributions.iter().copied().zip(results).collect())
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_rate_never_loses() {
        let runner = ScenarioRunner::with_base(SimulationParameters::new(200.0, 10, 5.0));
        let sweep = runner.rate_sweep(&[0.0, 3.0, 6.0, 9.0, 12.0]).unwrap();

        assert_eq!(sweep.len(), 5);
        for pair in sweep.windows(2) {
            assert!(pair[1].1.final_balance >= pair[0].1.final_balance);
        }
    }

    #[test]
    fn test_contribution_sweep_scales_contributions() {
        let runner = ScenarioRunner::with_base(SimulationParameters::new(200.0, 10, 5.0));
        let sweep = runner.contribution_sweep(&[100.0, 200.0]).unwrap();

        assert_eq!(sweep[0].1.total_contributions, 12_000.0);
        assert_eq!(sweep[1].1.total_contributions, 24_000.0);
    }

    #[test]
    fn test_invalid_scenario_fails_batch() {
        let runner = ScenarioRunner::new();
        assert!(runner.rate_sweep(&[5.0, -1.0]).is_err());
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            SimulationParameters::new(100.0, 5, 2.0),
            SimulationParameters::new(300.0, 20, 7.5),
        ];
        let batch = runner.run_scenarios(&scenarios).unwrap();

        for (params, result) in scenarios.iter().zip(&batch) {
            assert_eq!(result, &runner.run(params).unwrap());
        }
    }
}
