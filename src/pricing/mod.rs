//! Loan pricing, policy advisories and amortization

mod advisory;
pub mod amortization;
mod terms;

pub use advisory::Advisory;
pub use amortization::{amortization_schedule, period_parameters, periodic_payment, ScheduleRow};
pub use terms::{price_loan, LoanTerms, PricingOutcome};
