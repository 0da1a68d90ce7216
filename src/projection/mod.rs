//! Scenario projection engine
//!
//! Pure derivation of a forward trajectory from a baseline snapshot and the
//! two what-if levers. Recomputed synchronously on every lever change.

mod engine;

pub use engine::{MonthPoint, ProjectionConfig, ProjectionEngine, ProjectionResult};

// ============================================================================
// Reference Projection Constants
// ============================================================================
// The seed curve is a fixed illustrative baseline, not derived from the
// snapshot beyond the growth scaling. Reproduced verbatim for output
// compatibility with the reference dashboard.

/// Scale applied to the combined lever product to obtain the growth factor
pub const GROWTH_SCALE: f64 = 2.5;

/// Damping applied to the growth factor when scaling the monthly seed curve
pub const SERIES_GROWTH_DAMPING: f64 = 0.8;

/// Seed monthly values, in thousands of currency
pub const SEED_SERIES: [f64; 7] = [45.0, 52.0, 48.0, 70.0, 85.0, 95.0, 120.0];

/// Month labels paired positionally with the seed series
pub const MONTH_LABELS: [&str; 7] = ["Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep"];
