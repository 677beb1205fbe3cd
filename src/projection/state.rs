//! Running state of a savings projection

use crate::params::SimulationParameters;

/// Balance and timing of a projection at a point mid-run
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed; 0 before the first step)
    pub month: u32,

    /// Year the current month falls in (1-indexed)
    pub year: u32,

    /// Month within the current year (1-12)
    pub month_in_year: u32,

    /// Running balance after the most recent monthly step
    pub balance: f64,
}

impl ProjectionState {
    /// Initialize state at the start of a projection
    pub fn new() -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            balance: 0.0,
        }
    }

    /// Apply one monthly step: the contribution lands first, then interest
    /// accrues on the new total. That order is a product decision and every
    /// downstream number depends on it.
    pub fn advance_month(&mut self, params: &SimulationParameters) {
        self.month += 1;
        self.year = (self.month - 1) / 12 + 1;
        self.month_in_year = (self.month - 1) % 12 + 1;

        self.balance = (self.balance + params.monthly_contribution) * (1.0 + params.monthly_rate());
    }

    /// True at the twelfth month of each year, when a series row is recorded
    pub fn is_year_end(&self) -> bool {
        self.month_in_year == 12
    }
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self::new()
    }
}
