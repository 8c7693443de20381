//! Risk tier configuration: score bands and their pricing policy

use super::AssumptionsError;
use serde::{Deserialize, Serialize};

/// Ordered risk bands, lowest risk first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Minimal => "Minimal",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Policy parameters for one risk band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTier {
    pub level: RiskLevel,

    /// Display name, e.g. "Riesgo Medio"
    pub name: String,

    /// Inclusive upper bound of the band's score range
    pub ceiling: u32,

    /// Base annual interest rate (0.12 = 12%)
    pub base_rate: f64,

    /// Minimum down payment as a fraction of price (0.20 = 20%)
    pub min_down_payment: f64,

    /// Maximum financed principal in pesos
    pub max_loan: f64,

    pub description: String,

    /// Color token used by the dashboard badge
    pub color: String,
}

/// Tiers sorted by ascending ceiling, ending in the Critical tier.
///
/// Construction validates ordering so classification stays monotonic in
/// the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTable {
    tiers: Vec<RiskTier>,
}

impl TierTable {
    pub fn new(tiers: Vec<RiskTier>) -> Result<Self, AssumptionsError> {
        let last = tiers.last().ok_or(AssumptionsError::EmptyTierTable)?;
        if last.level != RiskLevel::Critical {
            return Err(AssumptionsError::MissingCriticalTier(last.level));
        }

        for pair in tiers.windows(2) {
            if pair[1].ceiling <= pair[0].ceiling {
                return Err(AssumptionsError::UnorderedCeilings {
                    previous: pair[0].ceiling,
                    next: pair[1].ceiling,
                });
            }
            if pair[1].level <= pair[0].level {
                return Err(AssumptionsError::UnorderedLevels {
                    previous: pair[0].level,
                    next: pair[1].level,
                });
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[RiskTier] {
        &self.tiers
    }

    /// The most conservative tier
    pub fn critical(&self) -> &RiskTier {
        // Non-empty and Critical-terminated by construction
        &self.tiers[self.tiers.len() - 1]
    }

    /// Index of the first tier whose ceiling covers `score`, if any
    pub fn position(&self, score: u32) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.ceiling >= score)
    }

    /// Ceiling of the tier below `index` (0 for the lowest tier)
    pub fn previous_ceiling(&self, index: usize) -> u32 {
        match index {
            0 => 0,
            i => self.tiers.get(i - 1).map(|t| t.ceiling).unwrap_or(0),
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        let tiers = vec![
            RiskTier {
                level: RiskLevel::Minimal,
                name: "Riesgo Mínimo".to_string(),
                ceiling: 15,
                base_rate: 0.10,
                min_down_payment: 0.10,
                max_loan: 5_000_000.0,
                description: "Perfil sólido con ingresos comprobables y enganche suficiente".to_string(),
                color: "emerald".to_string(),
            },
            RiskTier {
                level: RiskLevel::Low,
                name: "Riesgo Bajo".to_string(),
                ceiling: 25,
                base_rate: 0.11,
                min_down_payment: 0.15,
                max_loan: 4_000_000.0,
                description: "Perfil confiable con factores de riesgo menores".to_string(),
                color: "lime".to_string(),
            },
            RiskTier {
                level: RiskLevel::Medium,
                name: "Riesgo Medio".to_string(),
                ceiling: 40,
                base_rate: 0.12,
                min_down_payment: 0.20,
                max_loan: 3_000_000.0,
                description: "Perfil aceptable que requiere un enganche mayor".to_string(),
                color: "amber".to_string(),
            },
            RiskTier {
                level: RiskLevel::High,
                name: "Riesgo Alto".to_string(),
                ceiling: 55,
                base_rate: 0.14,
                min_down_payment: 0.30,
                max_loan: 2_000_000.0,
                description: "Perfil con varios factores de riesgo, monto de crédito limitado".to_string(),
                color: "orange".to_string(),
            },
            RiskTier {
                level: RiskLevel::Critical,
                name: "Riesgo Crítico".to_string(),
                ceiling: 100,
                base_rate: 0.16,
                min_down_payment: 0.40,
                max_loan: 1_000_000.0,
                description: "Perfil de alto riesgo, requiere revisión y enganche elevado".to_string(),
                color: "red".to_string(),
            },
        ];

        Self { tiers }
    }
}
