//! Scoring tables, tier policy and pricing settings
//!
//! Everything here is read-only once built. `Assumptions::default_pricing()`
//! carries the shipped tables; `Assumptions::from_dir()` loads replacements
//! from CSV so analysts can trial alternate weights without a rebuild.

mod error;
pub mod loader;
pub mod scoring;
pub mod tiers;

pub use error::AssumptionsError;
pub use scoring::{
    CategoryTable, CategoryWeight, DownPaymentBucket, DownPaymentBuckets, ScoringWeights,
    TermOption, TermTable, DEFAULT_POSTAL_CODE_POINTS,
};
pub use tiers::{RiskLevel, RiskTier, TierTable};

use crate::projection::{
    DEFAULT_APPRECIATION_RATE, DEFAULT_COMPARATIVE_APPRECIATION_RATE, DEFAULT_HORIZONS,
};
use serde::Serialize;
use std::path::Path;

/// Down payment assumed when the form leaves it blank (percent of price)
pub const DEFAULT_DOWN_PAYMENT_PCT: f64 = 15.0;

/// Widest in-tier rate adjustment: 0.5 percentage points
pub const DEFAULT_RATE_ADJUSTMENT_CAP: f64 = 0.005;

/// Settings used by the pricing stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingAssumptions {
    /// Down payment percentage used when the profile has none (15.0 = 15%)
    pub default_down_payment_pct: f64,

    /// Rate added at the top of a tier's score band (0.005 = 0.5 pp)
    pub rate_adjustment_cap: f64,
}

impl Default for PricingAssumptions {
    fn default() -> Self {
        Self {
            default_down_payment_pct: DEFAULT_DOWN_PAYMENT_PCT,
            rate_adjustment_cap: DEFAULT_RATE_ADJUSTMENT_CAP,
        }
    }
}

/// Settings used by the valuation projector.
///
/// The two rates are configured independently; neither is derived from the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppreciationAssumptions {
    /// Annual lot appreciation for quotes (0.128 = 12.8%)
    pub annual_rate: f64,

    /// Annual appreciation for comparative dashboard views (0.108 = 10.8%)
    pub comparative_annual_rate: f64,

    /// Projection horizons in years
    pub horizons: Vec<u32>,
}

impl Default for AppreciationAssumptions {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_APPRECIATION_RATE,
            comparative_annual_rate: DEFAULT_COMPARATIVE_APPRECIATION_RATE,
            horizons: DEFAULT_HORIZONS.to_vec(),
        }
    }
}

/// Combined configuration handed to the evaluator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assumptions {
    pub scoring: ScoringWeights,
    pub tiers: TierTable,
    pub pricing: PricingAssumptions,
    pub appreciation: AppreciationAssumptions,
}

impl Assumptions {
    /// Shipped scoring tables and tier policy
    pub fn default_pricing() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            tiers: TierTable::default(),
            pricing: PricingAssumptions::default(),
            appreciation: AppreciationAssumptions::default(),
        }
    }

    /// Load scoring weights and tiers from a directory of CSV files.
    /// Pricing and appreciation settings keep their defaults.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, AssumptionsError> {
        let dir = dir.as_ref();
        let scoring = loader::load_scoring_weights(&dir.join(loader::SCORING_WEIGHTS_FILE))?;
        let tiers = loader::load_risk_tiers(&dir.join(loader::RISK_TIERS_FILE))?;

        log::info!(
            "loaded assumptions from {} ({} tiers)",
            dir.display(),
            tiers.tiers().len()
        );

        Ok(Self {
            scoring,
            tiers,
            pricing: PricingAssumptions::default(),
            appreciation: AppreciationAssumptions::default(),
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_matches_default_pricing() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let loaded = Assumptions::from_dir(dir).expect("Failed to load assumptions");
        assert_eq!(loaded, Assumptions::default_pricing());
    }

    #[test]
    fn test_appreciation_rates_are_independent() {
        let appreciation = AppreciationAssumptions::default();
        assert_eq!(appreciation.annual_rate, 0.128);
        assert_eq!(appreciation.comparative_annual_rate, 0.108);
        assert_eq!(appreciation.horizons, vec![1, 3, 5, 10]);
    }
}
