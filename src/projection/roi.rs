//! Lot value projection and return on investment against financing cost

use super::ANCHOR_HORIZON_YEARS;
use serde::{Deserialize, Serialize};

/// Projected value at one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonProjection {
    pub years: u32,

    /// Lot value after `years` of compound appreciation (pesos)
    pub projected_value: f64,

    /// projected_value − price (pesos)
    pub gain: f64,

    /// gain / price × 100
    pub roi_pct: f64,

    /// (projected_value / price − 1) × 100
    pub cumulative_appreciation_pct: f64,

    /// cumulative_appreciation_pct / years
    pub annualized_appreciation_pct: f64,
}

/// Appreciation outlook for a financed lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    /// Annual appreciation rate used (0.128 = 12.8%)
    pub annual_rate: f64,

    pub horizons: Vec<HorizonProjection>,

    /// Compound monthly rate that reproduces the 10-year value, in percent
    pub monthly_equivalent_pct: f64,

    /// 10-year gain divided by the total interest paid on the loan
    pub gain_to_credit_cost: f64,

    /// 10-year value divided by everything paid for the lot
    pub investment_multiplier: f64,
}

impl RoiProjection {
    pub fn horizon(&self, years: u32) -> Option<&HorizonProjection> {
        self.horizons.iter().find(|h| h.years == years)
    }
}

/// Round to centavos
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage or ratio to two decimals
pub fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Value of the lot after `years` at `annual_rate`
pub fn projected_value(price: f64, annual_rate: f64, years: u32) -> f64 {
    price * (1.0 + annual_rate).powi(years as i32)
}

/// Project appreciation at each horizon and compare against the credit cost.
///
/// `total_paid` and `total_interest` come from the priced loan terms.
/// Ratios with a zero denominator are reported as 0.
pub fn project_roi(
    price: f64,
    total_paid: f64,
    total_interest: f64,
    annual_rate: f64,
    horizons: &[u32],
) -> RoiProjection {
    let horizons = horizons
        .iter()
        .map(|&years| {
            let value = projected_value(price, annual_rate, years);
            let gain = value - price;
            let cumulative = (ratio(value, price) - 1.0) * 100.0;
            let cumulative = if price > 0.0 { cumulative } else { 0.0 };
            let annualized = if years > 0 { cumulative / years as f64 } else { 0.0 };

            HorizonProjection {
                years,
                projected_value: round_currency(value),
                gain: round_currency(gain),
                roi_pct: round_pct(ratio(gain, price) * 100.0),
                cumulative_appreciation_pct: round_pct(cumulative),
                annualized_appreciation_pct: round_pct(annualized),
            }
        })
        .collect();

    let anchor_value = projected_value(price, annual_rate, ANCHOR_HORIZON_YEARS);
    let anchor_gain = anchor_value - price;
    let anchor_months = (ANCHOR_HORIZON_YEARS * 12) as f64;
    let monthly_equivalent = if price > 0.0 {
        ((anchor_value / price).powf(1.0 / anchor_months) - 1.0) * 100.0
    } else {
        0.0
    };

    RoiProjection {
        annual_rate,
        horizons,
        monthly_equivalent_pct: round_pct(monthly_equivalent),
        gain_to_credit_cost: round_pct(ratio(anchor_gain, total_interest)),
        investment_multiplier: round_pct(ratio(anchor_value, total_paid)),
    }
}
