//! Chart-shaped views of a projection series

use crate::projection::SimulationResult;

/// Most bars the chart surface renders; later years are cut, not rescaled
pub const MAX_BARS: usize = 15;

/// One renderable chart bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBar {
    /// Year the bar represents, 1-indexed
    pub year: u32,

    /// Bar height as a fraction of the final year's balance, in [0, 1]
    pub height: f64,
}

/// Each year's balance as a fraction of the final year's balance.
///
/// When the final balance is zero (no contributions) every height is 0
/// rather than NaN.
pub fn normalized_heights(result: &SimulationResult) -> Vec<f64> {
    let max = result.final_balance;
    result
        .yearly_series
        .iter()
        .map(|row| if max > 0.0 { row.balance / max } else { 0.0 })
        .collect()
}

/// Bars for the chart surface: normalized heights for the first
/// [`MAX_BARS`] years.
pub fn bars(result: &SimulationResult) -> Vec<ChartBar> {
    result
        .yearly_series
        .iter()
        .zip(normalized_heights(result))
        .take(MAX_BARS)
        .map(|(row, height)| ChartBar {
            year: row.year,
            height,
        })
        .collect()
}

/// Y-axis gridline amounts, top to bottom: 100%, 75%, 50%, 25%, 0% of the
/// final balance.
pub fn axis_amounts(result: &SimulationResult) -> [f64; 5] {
    let max = result.final_balance;
    [max, max * 0.75, max * 0.5, max * 0.25, 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParameters;
    use crate::projection::compute_projection;
    use approx::assert_relative_eq;

    #[test]
    fn test_final_year_normalizes_to_one() {
        let result =
            compute_projection(&SimulationParameters::new(200.0, 10, 5.0)).unwrap();
        let heights = normalized_heights(&result);

        assert_eq!(heights.len(), 10);
        assert_relative_eq!(heights[9], 1.0);
        for pair in heights.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(heights.iter().all(|h| (0.0..=1.0).contains(h)));
    }

    #[test]
    fn test_zero_contribution_yields_zero_heights() {
        let result =
            compute_projection(&SimulationParameters::new(0.0, 5, 7.0)).unwrap();
        let heights = normalized_heights(&result);

        assert_eq!(heights, vec![0.0; 5]);
        assert!(heights.iter().all(|h| h.is_finite()));
    }

    #[test]
    fn test_bars_cut_at_max() {
        let result =
            compute_projection(&SimulationParameters::new(100.0, 30, 3.0)).unwrap();
        let bars = bars(&result);

        assert_eq!(bars.len(), MAX_BARS);
        assert_eq!(bars[0].year, 1);
        assert_eq!(bars.last().unwrap().year, MAX_BARS as u32);
    }

    #[test]
    fn test_axis_amounts() {
        let result =
            compute_projection(&SimulationParameters::new(1_000.0, 1, 0.0)).unwrap();
        let ticks = axis_amounts(&result);

        assert_eq!(ticks[0], 12_000.0);
        assert_eq!(ticks[2], 6_000.0);
        assert_eq!(ticks[4], 0.0);
    }
}
