//! Lot appreciation projection and ROI against financing cost

mod roi;

pub use roi::{
    project_roi, projected_value, round_currency, round_pct, HorizonProjection, RoiProjection,
};

// ============================================================================
// Default Appreciation Rates
// ============================================================================
// Quotes project lot values at the primary rate. Dashboard comparisons use the
// secondary rate. The two are configured separately and are not derived from
// one another.

/// Default annual appreciation for quotes (12.8%)
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.128;

/// Default annual appreciation for comparative dashboard views (10.8%)
pub const DEFAULT_COMPARATIVE_APPRECIATION_RATE: f64 = 0.108;

/// Projection horizons in years
pub const DEFAULT_HORIZONS: [u32; 4] = [1, 3, 5, 10];

/// Horizon the aggregate metrics are anchored to
pub const ANCHOR_HORIZON_YEARS: u32 = 10;
