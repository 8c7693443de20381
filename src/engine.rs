//! Evaluation engine: scoring → classification → pricing → projection

use crate::assumptions::{Assumptions, RiskTier};
use crate::pricing::{price_loan, Advisory, LoanTerms};
use crate::profile::ApplicantProfile;
use crate::projection::{project_roi, RoiProjection};
use crate::scoring::{classify, score_profile, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// Risk and pricing result for one applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: ScoreBreakdown,
    pub tier: RiskTier,
    /// Annual rate after the in-tier adjustment
    pub interest_rate: f64,
    pub terms: LoanTerms,
    /// Policy warnings, in the order they were raised
    pub advisories: Vec<Advisory>,
}

/// Evaluation plus the appreciation outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedEvaluation {
    pub evaluation: Evaluation,
    pub projection: RoiProjection,
}

/// Stateless evaluator over a fixed set of assumptions.
///
/// Holds only read-only configuration, so one instance can be shared across
/// threads and every call is independent of the ones before it.
#[derive(Debug, Clone)]
pub struct Evaluator {
    assumptions: Assumptions,
}

impl Evaluator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Score, classify and price a profile. Never fails: policy violations
    /// come back as advisories.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> Evaluation {
        let score = score_profile(profile, &self.assumptions.scoring);
        let classification = classify(
            score.total,
            &self.assumptions.tiers,
            self.assumptions.pricing.rate_adjustment_cap,
        );
        let term_years = self.assumptions.scoring.term.years(profile.term.as_deref());

        let outcome = price_loan(
            profile,
            classification.tier,
            classification.annual_rate,
            term_years,
            &self.assumptions.pricing,
        );

        log::debug!(
            "score {} → {} at {:.4} with {} advisories",
            score.total,
            classification.tier.name,
            classification.annual_rate,
            outcome.advisories.len()
        );

        Evaluation {
            score,
            tier: classification.tier.clone(),
            interest_rate: classification.annual_rate,
            terms: outcome.terms,
            advisories: outcome.advisories,
        }
    }

    /// `evaluate` followed by the appreciation projection at the quote rate
    pub fn evaluate_with_projection(&self, profile: &ApplicantProfile) -> ProjectedEvaluation {
        let evaluation = self.evaluate(profile);
        let projection = self.project(&evaluation, self.assumptions.appreciation.annual_rate);
        ProjectedEvaluation {
            evaluation,
            projection,
        }
    }

    /// Projection at the comparative dashboard rate
    pub fn comparative_projection(&self, evaluation: &Evaluation) -> RoiProjection {
        self.project(evaluation, self.assumptions.appreciation.comparative_annual_rate)
    }

    fn project(&self, evaluation: &Evaluation, annual_rate: f64) -> RoiProjection {
        let terms = &evaluation.terms;
        project_roi(
            terms.price,
            terms.total_paid,
            terms.total_interest,
            annual_rate,
            &self.assumptions.appreciation.horizons,
        )
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Assumptions::default_pricing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RiskLevel;
    use crate::profile::PaymentFrequency;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_profile() -> ApplicantProfile {
        ApplicantProfile {
            age_bracket: Some("28-32".to_string()),
            income_bracket: Some("30-35K".to_string()),
            income_type: Some("Comprobable 100%".to_string()),
            term: Some("3 años".to_string()),
            down_payment_pct: Some(15.0),
            zone: Some("Premium".to_string()),
            credit_type: Some("Hipotecario".to_string()),
            property_price: 1_000_000.0,
            payment_frequency: Some("Mensual".to_string()),
        }
    }

    fn worst_case_profile() -> ApplicantProfile {
        ApplicantProfile {
            age_bracket: Some("75+".to_string()),
            income_bracket: Some("Menos de 10K".to_string()),
            income_type: Some("Informal".to_string()),
            term: Some("5 años".to_string()),
            down_payment_pct: Some(40.0),
            zone: Some("Estándar".to_string()),
            credit_type: Some("Hipotecario".to_string()),
            property_price: 3_000_000.0,
            payment_frequency: Some("Anual".to_string()),
        }
    }

    #[test]
    fn test_reference_evaluation() {
        let evaluation = Evaluator::default().evaluate(&reference_profile());

        assert_eq!(evaluation.score.total, 28);
        assert_eq!(evaluation.tier.level, RiskLevel::Medium);
        assert_eq!(evaluation.tier.name, "Riesgo Medio");
        assert_relative_eq!(evaluation.interest_rate, 0.121, epsilon = 1e-12);

        let terms = &evaluation.terms;
        assert_relative_eq!(terms.down_payment, 150_000.0);
        assert_relative_eq!(terms.loan_amount, 850_000.0);
        assert_eq!(terms.term_years, 3.0);
        assert_eq!(terms.frequency, PaymentFrequency::Monthly);
        assert_eq!(terms.number_of_payments, 36);
        // 850,000 at 12.1%/12 over 36 months
        assert_abs_diff_eq!(terms.payment, 28_272.78, epsilon = 0.01);

        // Medium tier asks for 20% down
        assert_eq!(evaluation.advisories.len(), 1);
        assert!(matches!(evaluation.advisories[0], Advisory::DownPaymentBelowMinimum { .. }));
    }

    #[test]
    fn test_amortization_identity() {
        let evaluation = Evaluator::default().evaluate(&reference_profile());
        let t = &evaluation.terms;
        assert_abs_diff_eq!(
            t.total_paid,
            t.down_payment + t.payment * t.number_of_payments as f64,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let evaluator = Evaluator::default();
        let first = evaluator.evaluate_with_projection(&reference_profile());
        let second = evaluator.evaluate_with_projection(&reference_profile());

        assert_eq!(first, second);
        assert_eq!(first.evaluation.terms.payment.to_bits(), second.evaluation.terms.payment.to_bits());
    }

    #[test]
    fn test_worst_case_is_critical_and_clamped() {
        let evaluation = Evaluator::default().evaluate(&worst_case_profile());

        assert_eq!(evaluation.score.total, 62);
        assert_eq!(evaluation.tier.level, RiskLevel::Critical);
        assert_eq!(evaluation.terms.loan_amount, 1_000_000.0);
        assert_eq!(evaluation.terms.number_of_payments, 5);
        assert_eq!(evaluation.advisories.len(), 1);
        assert!(matches!(evaluation.advisories[0], Advisory::LoanAboveMaximum { .. }));
    }

    #[test]
    fn test_empty_profile_still_evaluates() {
        let profile = ApplicantProfile {
            property_price: 500_000.0,
            ..ApplicantProfile::default()
        };
        let result = Evaluator::default().evaluate_with_projection(&profile);
        let evaluation = &result.evaluation;
        let terms = &evaluation.terms;

        assert_eq!(evaluation.score.total, 3);
        assert_eq!(evaluation.tier.level, RiskLevel::Minimal);
        // Unknown term has no length: one straight-line installment
        assert_eq!(terms.number_of_payments, 1);
        assert_relative_eq!(terms.payment, 425_000.0);
        assert_relative_eq!(terms.total_paid, 500_000.0);
        assert!(terms.total_interest >= 0.0);
        assert!(terms.cost_ratio >= 0.0);
        assert_relative_eq!(
            terms.total_paid,
            terms.down_payment + terms.payment * terms.number_of_payments as f64
        );

        // Multiplier is measured against the whole price, not the down payment alone
        let ten = result.projection.horizon(10).expect("10-year horizon");
        assert_abs_diff_eq!(
            result.projection.investment_multiplier,
            ten.projected_value / 500_000.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_projection_uses_loan_totals() {
        let evaluator = Evaluator::default();
        let result = evaluator.evaluate_with_projection(&reference_profile());
        let terms = &result.evaluation.terms;

        assert_eq!(result.projection.annual_rate, 0.128);
        let ten = result.projection.horizon(10).expect("10-year horizon");
        let expected_multiplier = ten.projected_value / terms.total_paid;
        assert_abs_diff_eq!(result.projection.investment_multiplier, expected_multiplier, epsilon = 0.01);
    }

    #[test]
    fn test_comparative_projection_uses_secondary_rate() {
        let evaluator = Evaluator::default();
        let evaluation = evaluator.evaluate(&reference_profile());
        let comparative = evaluator.comparative_projection(&evaluation);

        assert_eq!(comparative.annual_rate, 0.108);
        let one = comparative.horizon(1).expect("1-year horizon");
        assert_eq!(one.projected_value, 1_108_000.0);
    }
}
