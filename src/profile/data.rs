//! Applicant profile structures matching the simulator form fields

use serde::{Deserialize, Serialize};

/// How often the borrower pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    /// Twelve payments per year
    Monthly,
    /// Six payments per year
    Bimonthly,
    /// One payment per year
    Annual,
}

impl PaymentFrequency {
    /// Parse the form label ("Mensual", "Bimestral", "Anual").
    ///
    /// Anything else falls through to `Annual`, matching the period arithmetic
    /// the simulator has always applied to unknown frequencies.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("mensual") | Some("monthly") => PaymentFrequency::Monthly,
            Some("bimestral") | Some("bimonthly") => PaymentFrequency::Bimonthly,
            Some("anual") | Some("annual") => PaymentFrequency::Annual,
            other => {
                log::warn!(
                    "unrecognized payment frequency {:?}, using annual periods",
                    other
                );
                PaymentFrequency::Annual
            }
        }
    }

    /// Payments per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Bimonthly => 6,
            PaymentFrequency::Annual => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Mensual",
            PaymentFrequency::Bimonthly => "Bimestral",
            PaymentFrequency::Annual => "Anual",
        }
    }
}

/// One applicant's answers from the multi-step simulator form.
///
/// Categorical fields carry the label the form submitted. They are optional
/// because a partially filled form must still produce an offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Age band, e.g. "28-32" or "75+"
    #[serde(default)]
    pub age_bracket: Option<String>,

    /// Monthly income band, e.g. "30-35K"
    #[serde(default)]
    pub income_bracket: Option<String>,

    /// Income verifiability, e.g. "Comprobable 100%" or "Informal"
    #[serde(default)]
    pub income_type: Option<String>,

    /// Requested term label, e.g. "3 años"
    #[serde(default)]
    pub term: Option<String>,

    /// Down payment as a percentage of price (15.0 = 15%)
    #[serde(default)]
    pub down_payment_pct: Option<f64>,

    /// Lot zone: "Premium", "Intermedia" or "Estándar"
    #[serde(default)]
    pub zone: Option<String>,

    /// Credit program, e.g. "INFONAVIT" or "Hipotecario"
    #[serde(default)]
    pub credit_type: Option<String>,

    /// Price of the selected lot in pesos
    #[serde(default)]
    pub property_price: f64,

    /// "Mensual", "Bimestral" or "Anual"
    #[serde(default)]
    pub payment_frequency: Option<String>,
}

impl ApplicantProfile {
    /// Resolved payment frequency for this profile
    pub fn frequency(&self) -> PaymentFrequency {
        PaymentFrequency::from_label(self.payment_frequency.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_labels() {
        assert_eq!(PaymentFrequency::from_label(Some("Mensual")), PaymentFrequency::Monthly);
        assert_eq!(PaymentFrequency::from_label(Some(" bimestral ")), PaymentFrequency::Bimonthly);
        assert_eq!(PaymentFrequency::from_label(Some("Anual")), PaymentFrequency::Annual);
        assert_eq!(PaymentFrequency::from_label(Some("monthly")), PaymentFrequency::Monthly);
    }

    #[test]
    fn test_unknown_frequency_falls_through_to_annual() {
        assert_eq!(PaymentFrequency::from_label(Some("Quincenal")), PaymentFrequency::Annual);
        assert_eq!(PaymentFrequency::from_label(None), PaymentFrequency::Annual);
    }

    #[test]
    fn test_partial_profile_deserializes() {
        let profile: ApplicantProfile = serde_json::from_str(
            r#"{"age_bracket": "28-32", "property_price": 850000.0}"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.age_bracket.as_deref(), Some("28-32"));
        assert_eq!(profile.down_payment_pct, None);
        assert_eq!(profile.zone, None);
        assert_eq!(profile.property_price, 850_000.0);
    }
}
