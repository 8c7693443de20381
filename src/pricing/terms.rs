//! Loan terms derived from the profile, tier policy and final rate

use super::advisory::Advisory;
use super::amortization::{amortization_schedule, period_parameters, periodic_payment, ScheduleRow};
use crate::assumptions::{PricingAssumptions, RiskTier};
use crate::profile::{ApplicantProfile, PaymentFrequency};
use serde::{Deserialize, Serialize};

/// Financing terms for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Lot price in pesos
    pub price: f64,

    /// Down payment as a fraction of price (0.15 = 15%)
    pub down_payment_fraction: f64,

    pub down_payment: f64,

    /// Financed principal after any tier-maximum clamp
    pub loan_amount: f64,

    pub term_years: f64,

    pub frequency: PaymentFrequency,

    /// Annual interest rate applied
    pub annual_rate: f64,

    /// Rate charged per payment period
    pub periodic_rate: f64,

    pub number_of_payments: u32,

    /// Level payment per period
    pub payment: f64,

    /// Sum of payments minus the financed principal
    pub total_interest: f64,

    /// Down payment plus every periodic payment
    pub total_paid: f64,

    /// total_interest / loan_amount, or 0 when nothing is financed
    pub cost_ratio: f64,
}

impl LoanTerms {
    /// Payment-by-payment breakdown of the loan
    pub fn schedule(&self) -> Vec<ScheduleRow> {
        amortization_schedule(
            self.loan_amount,
            self.periodic_rate,
            self.number_of_payments,
            self.payment,
        )
    }
}

/// Loan terms plus the advisories raised while pricing them
#[derive(Debug, Clone, PartialEq)]
pub struct PricingOutcome {
    pub terms: LoanTerms,
    pub advisories: Vec<Advisory>,
}

/// Price a loan for the profile under the matched tier.
///
/// Policy checks only produce advisories: a down payment under the tier
/// minimum is reported and kept, and a loan above the tier maximum is
/// reported and clamped.
pub fn price_loan(
    profile: &ApplicantProfile,
    tier: &RiskTier,
    annual_rate: f64,
    term_years: f64,
    pricing: &PricingAssumptions,
) -> PricingOutcome {
    let mut advisories = Vec::new();

    let price = profile.property_price;
    let down_payment_pct = profile
        .down_payment_pct
        .unwrap_or(pricing.default_down_payment_pct);
    let down_payment_fraction = down_payment_pct / 100.0;
    let down_payment = price * down_payment_fraction;

    if down_payment_fraction < tier.min_down_payment {
        advisories.push(Advisory::DownPaymentBelowMinimum {
            tier: tier.name.clone(),
            requested: down_payment_fraction,
            minimum: tier.min_down_payment,
        });
    }

    let mut loan_amount = (price - down_payment).max(0.0);
    if loan_amount > tier.max_loan {
        log::warn!(
            "loan {:.2} exceeds {} maximum {:.2}, clamping",
            loan_amount,
            tier.name,
            tier.max_loan
        );
        advisories.push(Advisory::LoanAboveMaximum {
            tier: tier.name.clone(),
            requested: loan_amount,
            maximum: tier.max_loan,
        });
        loan_amount = tier.max_loan;
    }

    let frequency = profile.frequency();
    let (mut periodic_rate, mut number_of_payments) =
        period_parameters(annual_rate, term_years, frequency);
    if number_of_payments == 0 {
        // No term length: the loan is due as one interest-free installment
        log::warn!("term of {} years yields no payments, pricing a single installment", term_years);
        periodic_rate = 0.0;
        number_of_payments = 1;
    }
    let payment = periodic_payment(loan_amount, periodic_rate, number_of_payments);

    let paid_in_installments = payment * number_of_payments as f64;
    let total_interest = paid_in_installments - loan_amount;
    let total_paid = down_payment + paid_in_installments;
    let cost_ratio = if loan_amount > 0.0 {
        total_interest / loan_amount
    } else {
        0.0
    };

    log::debug!(
        "priced {:.2} over {} {} payments of {:.2} at {:.4}",
        loan_amount,
        number_of_payments,
        frequency.as_str(),
        payment,
        annual_rate
    );

    PricingOutcome {
        terms: LoanTerms {
            price,
            down_payment_fraction,
            down_payment,
            loan_amount,
            term_years,
            frequency,
            annual_rate,
            periodic_rate,
            number_of_payments,
            payment,
            total_interest,
            total_paid,
            cost_ratio,
        },
        advisories,
    }
}
