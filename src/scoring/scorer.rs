//! Weighted risk-point scoring of an applicant profile

use crate::assumptions::ScoringWeights;
use crate::profile::ApplicantProfile;
use serde::{Deserialize, Serialize};

/// The eight factors that contribute risk points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    Age,
    IncomeBracket,
    IncomeType,
    Term,
    DownPayment,
    Zone,
    CreditType,
    PostalCode,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 8] = [
        RiskFactor::Age,
        RiskFactor::IncomeBracket,
        RiskFactor::IncomeType,
        RiskFactor::Term,
        RiskFactor::DownPayment,
        RiskFactor::Zone,
        RiskFactor::CreditType,
        RiskFactor::PostalCode,
    ];
}

/// Per-factor points and their total.
///
/// Built only through [`ScoreBreakdown::new`], so `total` is always the sum
/// of the eight contributions. Deserializing recomputes `total` from the parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScoreParts")]
pub struct ScoreBreakdown {
    pub age: u32,
    pub income_bracket: u32,
    pub income_type: u32,
    pub term: u32,
    pub down_payment: u32,
    pub zone: u32,
    pub credit_type: u32,
    pub postal_code: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        income_bracket: u32,
        income_type: u32,
        term: u32,
        down_payment: u32,
        zone: u32,
        credit_type: u32,
        postal_code: u32,
    ) -> Self {
        let total = [income_bracket, income_type, term, down_payment, zone, credit_type, postal_code]
            .into_iter()
            .fold(age, u32::saturating_add);
        Self {
            age,
            income_bracket,
            income_type,
            term,
            down_payment,
            zone,
            credit_type,
            postal_code,
            total,
        }
    }

    /// Points contributed by one factor
    pub fn points(&self, factor: RiskFactor) -> u32 {
        match factor {
            RiskFactor::Age => self.age,
            RiskFactor::IncomeBracket => self.income_bracket,
            RiskFactor::IncomeType => self.income_type,
            RiskFactor::Term => self.term,
            RiskFactor::DownPayment => self.down_payment,
            RiskFactor::Zone => self.zone,
            RiskFactor::CreditType => self.credit_type,
            RiskFactor::PostalCode => self.postal_code,
        }
    }

    /// Contributions in factor order
    pub fn components(&self) -> [(RiskFactor, u32); 8] {
        RiskFactor::ALL.map(|factor| (factor, self.points(factor)))
    }
}

/// Wire form of a breakdown; any serialized `total` is ignored
#[derive(Deserialize)]
struct ScoreParts {
    age: u32,
    income_bracket: u32,
    income_type: u32,
    term: u32,
    down_payment: u32,
    zone: u32,
    credit_type: u32,
    postal_code: u32,
}

impl From<ScoreParts> for ScoreBreakdown {
    fn from(parts: ScoreParts) -> Self {
        ScoreBreakdown::new(
            parts.age,
            parts.income_bracket,
            parts.income_type,
            parts.term,
            parts.down_payment,
            parts.zone,
            parts.credit_type,
            parts.postal_code,
        )
    }
}

/// Score a profile against the given tables.
///
/// Absent or unrecognized categories score zero instead of failing, so a
/// partially completed form still produces an offer.
pub fn score_profile(profile: &ApplicantProfile, weights: &ScoringWeights) -> ScoreBreakdown {
    let age = lookup("age bracket", profile.age_bracket.as_deref(), |l| weights.age.points(l));
    let income_bracket = lookup("income bracket", profile.income_bracket.as_deref(), |l| {
        weights.income_bracket.points(l)
    });
    let income_type = lookup("income type", profile.income_type.as_deref(), |l| {
        weights.income_type.points(l)
    });
    let term = lookup("term", profile.term.as_deref(), |l| weights.term.points(l));
    let zone = lookup("zone", profile.zone.as_deref(), |l| weights.zone.points(l));
    let credit_type = lookup("credit type", profile.credit_type.as_deref(), |l| {
        weights.credit_type.points(l)
    });

    let down_payment = match weights.down_payment.points(profile.down_payment_pct) {
        Some(points) => points,
        None => {
            log::debug!(
                "down payment {:?} matched no bucket, scoring 0",
                profile.down_payment_pct
            );
            0
        }
    };

    let breakdown = ScoreBreakdown::new(
        age,
        income_bracket,
        income_type,
        term,
        down_payment,
        zone,
        credit_type,
        weights.postal_code_points,
    );
    log::debug!("risk score {} from {:?}", breakdown.total, breakdown.components());
    breakdown
}

fn lookup<F>(factor: &str, label: Option<&str>, points: F) -> u32
where
    F: Fn(Option<&str>) -> Option<u32>,
{
    match points(label) {
        Some(points) => points,
        None => {
            log::debug!("{} {:?} not recognized, scoring 0", factor, label);
            0
        }
    }
}
