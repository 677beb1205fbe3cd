//! Simulation input parameters and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slider bounds for the monthly contribution control
pub const CONTRIBUTION_MIN: f64 = 50.0;
pub const CONTRIBUTION_MAX: f64 = 1_000.0;
pub const CONTRIBUTION_STEP: f64 = 50.0;

/// Slider bounds for the duration control (whole years)
pub const YEARS_MIN: u32 = 1;
pub const YEARS_MAX: u32 = 30;

/// Slider bounds for the annual interest rate control (percent)
pub const RATE_MIN: f64 = 0.0;
pub const RATE_MAX: f64 = 12.0;

/// Upper limits within which results are contract-guaranteed.
/// Larger finite values still compute; the engine has no hard ceiling.
pub const CONTRIBUTION_SUPPORTED_MAX: f64 = 100_000.0;
pub const YEARS_SUPPORTED_MAX: u32 = 100;
pub const RATE_SUPPORTED_MAX: f64 = 100.0;

/// Rejected input to the projection engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameterError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("duration must be at least one year")]
    ZeroDuration,
}

/// Inputs to a savings projection, as supplied by the three input controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Amount contributed at the end of every month
    pub monthly_contribution: f64,

    /// Projection horizon in whole years
    pub years: u32,

    /// Annual interest rate as a percentage (5.0 = 5%)
    pub annual_rate_pct: f64,
}

impl SimulationParameters {
    pub fn new(monthly_contribution: f64, years: u32, annual_rate_pct: f64) -> Self {
        Self {
            monthly_contribution,
            years,
            annual_rate_pct,
        }
    }

    /// Initial slider state of the input surface
    pub fn default_ui() -> Self {
        Self::new(200.0, 10, 5.0)
    }

    /// Total number of monthly compounding steps
    pub fn months(&self) -> u32 {
        self.years * 12
    }

    /// Monthly interest rate as a decimal fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Check that the parameters are usable engine input.
    ///
    /// Negative, non-finite, or zero-duration input is rejected here so the
    /// engine never produces NaN balances. Values beyond the slider bounds
    /// are accepted; bounds enforcement belongs to the input surface.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if !self.monthly_contribution.is_finite() {
            return Err(InvalidParameterError::NonFinite {
                field: "monthly_contribution",
                value: self.monthly_contribution,
            });
        }
        if self.monthly_contribution < 0.0 {
            return Err(InvalidParameterError::Negative {
                field: "monthly_contribution",
                value: self.monthly_contribution,
            });
        }
        if !self.annual_rate_pct.is_finite() {
            return Err(InvalidParameterError::NonFinite {
                field: "annual_rate_pct",
                value: self.annual_rate_pct,
            });
        }
        if self.annual_rate_pct < 0.0 {
            return Err(InvalidParameterError::Negative {
                field: "annual_rate_pct",
                value: self.annual_rate_pct,
            });
        }
        if self.years == 0 {
            return Err(InvalidParameterError::ZeroDuration);
        }
        Ok(())
    }

    /// Snap the parameters onto the slider grid used by the input surface:
    /// contribution to the nearest 50 within [50, 1000], years to [1, 30],
    /// rate to one decimal within [0, 12].
    pub fn clamp_to_ui_bounds(&self) -> Self {
        let contribution = if self.monthly_contribution.is_finite() {
            let snapped = (self.monthly_contribution / CONTRIBUTION_STEP).round() * CONTRIBUTION_STEP;
            snapped.clamp(CONTRIBUTION_MIN, CONTRIBUTION_MAX)
        } else {
            CONTRIBUTION_MIN
        };
        let rate = if self.annual_rate_pct.is_finite() {
            ((self.annual_rate_pct * 10.0).round() / 10.0).clamp(RATE_MIN, RATE_MAX)
        } else {
            RATE_MIN
        };
        Self {
            monthly_contribution: contribution,
            years: self.years.clamp(YEARS_MIN, YEARS_MAX),
            annual_rate_pct: rate,
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::default_ui()
    }
}
