//! Land Credit Risk - Risk scoring and amortization engine for land-purchase credit offers
//!
//! This library provides:
//! - Weighted risk scoring of applicant and loan attributes
//! - Five-tier risk classification with in-tier rate smoothing
//! - Loan pricing with advisory policy checks and amortization schedules
//! - Lot appreciation and ROI projection against financing cost

pub mod profile;
pub mod assumptions;
pub mod scoring;
pub mod pricing;
pub mod projection;
pub mod engine;
pub mod quote;

// Re-export commonly used types
pub use profile::{ApplicantProfile, PaymentFrequency};
pub use assumptions::{Assumptions, AssumptionsError, RiskLevel, RiskTier};
pub use scoring::ScoreBreakdown;
pub use pricing::{Advisory, LoanTerms};
pub use projection::RoiProjection;
pub use engine::{Evaluation, Evaluator, ProjectedEvaluation};
pub use quote::Quote;
