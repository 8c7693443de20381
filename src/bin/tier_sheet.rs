//! Print tier placement and derived rate for every score
//!
//! Used to review the in-tier rate gradient against the pricing spreadsheet

use land_credit_risk::scoring::classify;
use land_credit_risk::Assumptions;

fn main() {
    env_logger::init();

    let assumptions = Assumptions::default_pricing();
    let tiers = &assumptions.tiers;
    let cap = assumptions.pricing.rate_adjustment_cap;
    let max_score = tiers.critical().ceiling;

    println!(
        "Rate sheet (adjustment cap {:.2} pp, max attainable score {})",
        cap * 100.0,
        assumptions.scoring.max_total()
    );
    println!("{:<6} {:<16} {:<10} {:<10} {:<10} {:<12}",
             "Score", "Tier", "Position", "Rate", "MinDown", "MaxLoan");

    for score in 0..=max_score {
        let result = classify(score, tiers, cap);
        println!("{:<6} {:<16} {:<10.4} {:<10.4} {:<10.2} {:<12.0}",
                 score,
                 result.tier.name,
                 result.band_position,
                 result.annual_rate * 100.0,
                 result.tier.min_down_payment * 100.0,
                 result.tier.max_loan);
    }
}
