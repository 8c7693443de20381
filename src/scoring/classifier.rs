//! Map a risk score to its tier and in-tier interest rate

use crate::assumptions::{RiskTier, TierTable};

/// Tier placement for a score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'a> {
    pub tier: &'a RiskTier,

    /// Relative position of the score inside the tier's band, in [0, 1]
    pub band_position: f64,

    /// Annual rate after the in-tier adjustment
    pub annual_rate: f64,
}

/// Find the first tier whose ceiling covers `score`.
///
/// Scores above every ceiling land in the Critical tier.
pub fn classify_tier(score: u32, tiers: &TierTable) -> &RiskTier {
    match tiers.position(score) {
        Some(index) => &tiers.tiers()[index],
        None => {
            log::warn!(
                "score {} exceeds every tier ceiling, defaulting to {}",
                score,
                tiers.critical().name
            );
            tiers.critical()
        }
    }
}

/// Classify a score and derive its interest rate.
///
/// `rate = base_rate + position × adjustment_cap`, where `position` is how far
/// the score sits between the previous tier's ceiling and this tier's ceiling.
pub fn classify(score: u32, tiers: &TierTable, adjustment_cap: f64) -> Classification<'_> {
    let index = tiers
        .position(score)
        .unwrap_or_else(|| tiers.tiers().len() - 1);
    let tier = classify_tier(score, tiers);

    let previous = tiers.previous_ceiling(index);
    let width = tier.ceiling.saturating_sub(previous);
    let band_position = if width == 0 {
        0.0
    } else {
        ((score as f64 - previous as f64) / width as f64).clamp(0.0, 1.0)
    };

    Classification {
        tier,
        band_position,
        annual_rate: tier.base_rate + band_position * adjustment_cap,
    }
}
