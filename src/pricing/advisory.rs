//! Non-blocking policy warnings attached to an evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A policy constraint the request violated. Computation still completes
/// using the adjusted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Requested down payment is under the tier's minimum
    DownPaymentBelowMinimum {
        tier: String,
        requested: f64,
        minimum: f64,
    },
    /// Financed amount was reduced to the tier's maximum
    LoanAboveMaximum {
        tier: String,
        requested: f64,
        maximum: f64,
    },
}

impl Advisory {
    /// Human-readable message shown to the applicant
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DownPaymentBelowMinimum {
                tier,
                requested,
                minimum,
            } => write!(
                f,
                "El enganche mínimo para {} es {:.0}% (solicitado: {:.0}%)",
                tier,
                minimum * 100.0,
                requested * 100.0
            ),
            Advisory::LoanAboveMaximum {
                tier,
                requested,
                maximum,
            } => write!(
                f,
                "El monto máximo de crédito para {} es ${:.2}; se ajustó desde ${:.2}",
                tier, maximum, requested
            ),
        }
    }
}
