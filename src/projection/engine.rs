//! Core compounding engine for monthly savings projections

use crate::params::{InvalidParameterError, SimulationParameters};
use super::series::{SimulationResult, YearRow};
use super::state::ProjectionState;

/// Run a savings projection for the given parameters.
///
/// Starting from a zero balance, each of the `years * 12` months applies
/// `balance = (balance + monthly_contribution) * (1 + r)` with
/// `r = annual_rate_pct / 100 / 12`, and a [`YearRow`] is recorded at every
/// twelfth month. Nothing is rounded here; rounding belongs to the display
/// boundary.
///
/// The result is a pure function of the parameters: identical input yields
/// a bit-identical [`SimulationResult`].
pub fn compute_projection(
    params: &SimulationParameters,
) -> Result<SimulationResult, InvalidParameterError> {
    params.validate()?;

    let mut result = SimulationResult::new();
    let mut state = ProjectionState::new();

    for _month in 1..=params.months() {
        state.advance_month(params);

        if state.is_year_end() {
            result.add_row(YearRow {
                year: state.year,
                balance: state.balance,
            });
        }
    }

    result.final_balance = state.balance;
    result.total_contributions = params.monthly_contribution * params.months() as f64;
    result.total_interest_earned = result.final_balance - result.total_contributions;

    Ok(result)
}
