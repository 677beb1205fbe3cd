//! Savings Engine - Deterministic savings growth projections for display surfaces
//!
//! This library provides:
//! - Parameter validation and UI-bound clamping for the simulator inputs
//! - Monthly-compounding projection with a per-year balance series
//! - Display mapping (chart bar heights, table rows, currency strings)
//! - Goal tracking behind a pluggable JSON/in-memory store
//! - Limited-time promo code generation
//! - Batch scenario sweeps across rates and contributions

pub mod params;
pub mod projection;
pub mod display;
pub mod goals;
pub mod coupon;
pub mod scenario;

// Re-export commonly used types
pub use params::{InvalidParameterError, SimulationParameters};
pub use projection::{compute_projection, SimulationResult, YearRow};
pub use goals::{Goal, GoalBook, GoalStore};
pub use scenario::ScenarioRunner;
