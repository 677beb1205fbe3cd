//! Tabular per-year view of a projection series

use crate::params::SimulationParameters;
use crate::projection::SimulationResult;

/// One row of the year-by-year table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Year, 1-indexed
    pub year: u32,

    /// End-of-year balance
    pub balance: f64,

    /// Interest earned during that year:
    /// `balance - prior balance - 12 * monthly contribution`
    pub interest_earned: f64,
}

/// Build table rows from a projection series and the parameters that
/// produced it. Does not mutate or consume the result.
pub fn table_rows(result: &SimulationResult, params: &SimulationParameters) -> Vec<TableRow> {
    let annual_contribution = params.monthly_contribution * 12.0;
    let mut prev_balance = 0.0;

    result
        .yearly_series
        .iter()
        .map(|row| {
            let interest = row.balance - prev_balance - annual_contribution;
            prev_balance = row.balance;
            TableRow {
                year: row.year,
                balance: row.balance,
                interest_earned: interest,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_projection;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_earns_no_interest() {
        let params = SimulationParameters::new(500.0, 4, 0.0);
        let result = compute_projection(&params).unwrap();
        let rows = table_rows(&result, &params);

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_relative_eq!(row.interest_earned, 0.0, epsilon = 1e-9);
        }
        assert_relative_eq!(rows[3].balance, 24_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_sums_to_total() {
        let params = SimulationParameters::new(200.0, 10, 5.0);
        let result = compute_projection(&params).unwrap();
        let rows = table_rows(&result, &params);

        let summed: f64 = rows.iter().map(|row| row.interest_earned).sum();
        assert_relative_eq!(summed, result.total_interest_earned, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_grows_year_over_year() {
        // With a positive rate and level contributions, each year earns more
        // interest than the one before it.
        let params = SimulationParameters::new(200.0, 10, 5.0);
        let result = compute_projection(&params).unwrap();
        let rows = table_rows(&result, &params);

        for pair in rows.windows(2) {
            assert!(pair[1].interest_earned > pair[0].interest_earned);
        }
    }
}
