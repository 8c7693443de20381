//! Quotes: an evaluation stamped with its issue date and validity window

use crate::engine::{Evaluation, ProjectedEvaluation};
use crate::projection::RoiProjection;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days a quote remains valid after issue
pub const QUOTE_VALIDITY_DAYS: i64 = 30;

/// An evaluation ready to hand to presentation or storage collaborators.
///
/// The folio number is assigned by the caller that stores the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub evaluation: Evaluation,
    /// Advisory messages rendered for display
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<RoiProjection>,
}

impl Quote {
    /// Quote for a plain evaluation
    pub fn issue(evaluation: Evaluation, issued_on: NaiveDate) -> Self {
        Self::build(evaluation, None, issued_on)
    }

    /// Quote including the appreciation projection
    pub fn issue_projected(result: ProjectedEvaluation, issued_on: NaiveDate) -> Self {
        Self::build(result.evaluation, Some(result.projection), issued_on)
    }

    fn build(evaluation: Evaluation, projection: Option<RoiProjection>, issued_on: NaiveDate) -> Self {
        let messages = evaluation.advisories.iter().map(|a| a.message()).collect();
        Self {
            issued_on,
            valid_until: issued_on + Duration::days(QUOTE_VALIDITY_DAYS),
            evaluation,
            messages,
            projection,
        }
    }

    /// Whether the quote can still be honored on `date`
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.issued_on && date <= self.valid_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Evaluator;
    use crate::profile::ApplicantProfile;

    fn profile() -> ApplicantProfile {
        ApplicantProfile {
            age_bracket: Some("28-32".to_string()),
            term: Some("3 años".to_string()),
            down_payment_pct: Some(10.0),
            property_price: 900_000.0,
            payment_frequency: Some("Mensual".to_string()),
            ..ApplicantProfile::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_validity_window() {
        let evaluation = Evaluator::default().evaluate(&profile());
        let quote = Quote::issue(evaluation, date(2024, 1, 15));

        assert_eq!(quote.valid_until, date(2024, 2, 14));
        assert!(quote.is_valid_on(date(2024, 2, 14)));
        assert!(!quote.is_valid_on(date(2024, 2, 15)));
        assert!(!quote.is_valid_on(date(2024, 1, 14)));
        assert!(quote.projection.is_none());
    }

    #[test]
    fn test_messages_follow_advisories() {
        let evaluation = Evaluator::default().evaluate(&profile());
        let advisory_count = evaluation.advisories.len();
        let quote = Quote::issue(evaluation, date(2024, 3, 1));

        assert_eq!(quote.messages.len(), advisory_count);
        for (message, advisory) in quote.messages.iter().zip(&quote.evaluation.advisories) {
            assert_eq!(message, &advisory.to_string());
        }
    }

    #[test]
    fn test_projected_quote_serializes() {
        let result = Evaluator::default().evaluate_with_projection(&profile());
        let quote = Quote::issue_projected(result, date(2024, 3, 1));

        let json = serde_json::to_value(&quote).expect("serialize quote");
        assert_eq!(json["valid_until"], "2024-03-31");
        assert!(json["projection"]["horizons"].is_array());
    }
}
