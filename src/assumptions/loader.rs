//! Load scoring weights and risk tiers from CSV files
//!
//! Expected layout of an assumptions directory:
//! - `scoring_weights.csv`: `factor,label,points,years`
//! - `risk_tiers.csv`: `level,name,ceiling,base_rate,min_down_payment,max_loan,description,color`

use super::scoring::{
    DownPaymentBucket, DownPaymentBuckets, ScoringWeights, TermOption, DEFAULT_POSTAL_CODE_POINTS,
};
use super::tiers::{RiskTier, TierTable};
use super::AssumptionsError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

pub const SCORING_WEIGHTS_FILE: &str = "scoring_weights.csv";
pub const RISK_TIERS_FILE: &str = "risk_tiers.csv";

#[derive(Debug, Deserialize)]
struct WeightRow {
    factor: String,
    label: String,
    points: u32,
    #[serde(default)]
    years: Option<f64>,
}

/// Load the scoring tables from `scoring_weights.csv`
///
/// A file without a `postal_code` row keeps the standard postal-code points.
pub fn load_scoring_weights(path: &Path) -> Result<ScoringWeights, AssumptionsError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| AssumptionsError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    read_scoring_weights(reader, path)
}

fn read_scoring_weights<R: Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<ScoringWeights, AssumptionsError> {
    let csv_err = |source| AssumptionsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut weights = ScoringWeights {
        postal_code_points: DEFAULT_POSTAL_CODE_POINTS,
        ..ScoringWeights::empty()
    };
    let mut buckets = Vec::new();

    for record in reader.deserialize() {
        let row: WeightRow = record.map_err(csv_err)?;
        match row.factor.as_str() {
            "age" => weights.age.push(row.label, row.points),
            "income_bracket" => weights.income_bracket.push(row.label, row.points),
            "income_type" => weights.income_type.push(row.label, row.points),
            "zone" => weights.zone.push(row.label, row.points),
            "credit_type" => weights.credit_type.push(row.label, row.points),
            "term" => {
                let years = row
                    .years
                    .ok_or_else(|| AssumptionsError::MissingTermYears(row.label.clone()))?;
                weights.term.push(TermOption {
                    label: row.label,
                    points: row.points,
                    years,
                });
            }
            "down_payment" => {
                let pct: f64 = row
                    .label
                    .trim_end_matches('%')
                    .parse()
                    .map_err(|_| AssumptionsError::InvalidDownPaymentBucket(row.label.clone()))?;
                if !pct.is_finite() {
                    return Err(AssumptionsError::InvalidDownPaymentBucket(row.label));
                }
                buckets.push(DownPaymentBucket {
                    pct,
                    points: row.points,
                });
            }
            "postal_code" => weights.postal_code_points = row.points,
            other => return Err(AssumptionsError::UnknownFactor(other.to_string())),
        }
    }

    weights.down_payment = DownPaymentBuckets::new(buckets);
    log::debug!(
        "loaded scoring weights from {} (max total {})",
        path.display(),
        weights.max_total()
    );
    Ok(weights)
}

/// Load and validate the tier table from `risk_tiers.csv`
pub fn load_risk_tiers(path: &Path) -> Result<TierTable, AssumptionsError> {
    let csv_err = |source| AssumptionsError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut tiers = Vec::new();
    for record in reader.deserialize() {
        let tier: RiskTier = record.map_err(csv_err)?;
        tiers.push(tier);
    }

    TierTable::new(tiers)
}
