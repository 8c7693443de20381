//! Errors raised while building or loading assumption tables

use super::RiskLevel;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssumptionsError {
    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("risk tier table is empty")]
    EmptyTierTable,

    #[error("tier ceilings must be strictly ascending ({previous} followed by {next})")]
    UnorderedCeilings { previous: u32, next: u32 },

    #[error("tier levels must be strictly ascending ({previous:?} followed by {next:?})")]
    UnorderedLevels { previous: RiskLevel, next: RiskLevel },

    #[error("the last risk tier must be Critical, found {0:?}")]
    MissingCriticalTier(RiskLevel),

    #[error("unknown scoring factor '{0}'")]
    UnknownFactor(String),

    #[error("invalid down-payment bucket '{0}'")]
    InvalidDownPaymentBucket(String),

    #[error("term option '{0}' is missing its length in years")]
    MissingTermYears(String),
}
