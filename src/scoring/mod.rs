//! Risk scoring and tier classification

mod classifier;
mod scorer;

pub use classifier::{classify, classify_tier, Classification};
pub use scorer::{score_profile, RiskFactor, ScoreBreakdown};
