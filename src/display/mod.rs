//! Display mapping: projection output to chart, table, and currency shapes

mod chart;
mod table;
mod currency;

pub use chart::{bars, axis_amounts, normalized_heights, ChartBar, MAX_BARS};
pub use table::{table_rows, TableRow};
pub use currency::{format_usd, format_usd_whole};
