//! Projection output structures

use serde::{Deserialize, Serialize};

/// Balance at the end of one completed year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// Completed year, 1-indexed
    pub year: u32,

    /// Balance at the end of that year, unrounded
    pub balance: f64,
}

/// Complete projection result, derived entirely from the input parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Balance after the full horizon of monthly compounding
    pub final_balance: f64,

    /// Sum of all monthly contributions over the horizon
    pub total_contributions: f64,

    /// `final_balance - total_contributions`
    pub total_interest_earned: f64,

    /// One row per completed year, in chronological order
    pub yearly_series: Vec<YearRow>,
}

impl SimulationResult {
    pub fn new() -> Self {
        Self {
            final_balance: 0.0,
            total_contributions: 0.0,
            total_interest_earned: 0.0,
            yearly_series: Vec::new(),
        }
    }

    /// Append a year-end row
    pub fn add_row(&mut self, row: YearRow) {
        self.yearly_series.push(row);
    }

    /// Number of completed years in the series
    pub fn years(&self) -> u32 {
        self.yearly_series.len() as u32
    }

    /// End-of-year balance for a 1-indexed year, if within the horizon
    pub fn balance_at_year(&self, year: u32) -> Option<f64> {
        if year == 0 {
            return None;
        }
        self.yearly_series
            .get(year as usize - 1)
            .map(|row| row.balance)
    }
}

impl Default for SimulationResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_lookup() {
        let mut result = SimulationResult::new();
        result.add_row(YearRow { year: 1, balance: 1200.0 });
        result.add_row(YearRow { year: 2, balance: 2400.0 });

        assert_eq!(result.years(), 2);
        assert_eq!(result.balance_at_year(1), Some(1200.0));
        assert_eq!(result.balance_at_year(2), Some(2400.0));
        assert_eq!(result.balance_at_year(0), None);
        assert_eq!(result.balance_at_year(3), None);
    }

    #[test]
    fn test_serializes_year_and_balance() {
        let row = YearRow { year: 3, balance: 7543.21 };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"year":3,"balance":7543.21}"#);
    }
}
