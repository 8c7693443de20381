//! Risk-point tables for the categorical applicant factors

use serde::{Deserialize, Serialize};

/// Points assigned to one category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub label: String,
    pub points: u32,
}

/// Label → points lookup for a single factor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    weights: Vec<CategoryWeight>,
}

impl CategoryTable {
    pub fn new(weights: Vec<CategoryWeight>) -> Self {
        Self { weights }
    }

    /// Build from `(label, points)` pairs
    pub fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        Self {
            weights: pairs
                .iter()
                .map(|(label, points)| CategoryWeight {
                    label: label.to_string(),
                    points: *points,
                })
                .collect(),
        }
    }

    pub fn push(&mut self, label: String, points: u32) {
        self.weights.push(CategoryWeight { label, points });
    }

    /// Points for a label, or `None` if absent or not in the table
    pub fn points(&self, label: Option<&str>) -> Option<u32> {
        let label = label?.trim();
        self.weights
            .iter()
            .find(|w| w.label == label)
            .map(|w| w.points)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Largest points value in the table (0 when empty)
    pub fn max_points(&self) -> u32 {
        self.weights.iter().map(|w| w.points).max().unwrap_or(0)
    }
}

/// A selectable loan term with its scoring weight and length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermOption {
    pub label: String,
    pub points: u32,
    /// Term length in years (0.5 for "Menos de 1 año")
    pub years: f64,
}

/// Term label → (points, years)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermTable {
    options: Vec<TermOption>,
}

impl TermTable {
    pub fn new(options: Vec<TermOption>) -> Self {
        Self { options }
    }

    pub fn push(&mut self, option: TermOption) {
        self.options.push(option);
    }

    pub fn find(&self, label: Option<&str>) -> Option<&TermOption> {
        let label = label?.trim();
        self.options.iter().find(|o| o.label == label)
    }

    pub fn points(&self, label: Option<&str>) -> Option<u32> {
        self.find(label).map(|o| o.points)
    }

    /// Term length in years; unknown terms have zero length
    pub fn years(&self, label: Option<&str>) -> f64 {
        self.find(label).map(|o| o.years).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }
}

/// Down-payment percentage bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentBucket {
    /// Percentage of price (15.0 = 15%)
    pub pct: f64,
    pub points: u32,
}

/// Discrete down-payment buckets, kept sorted by percentage.
///
/// A requested percentage snaps to the nearest bucket. On an exact tie
/// between two buckets the smaller percentage wins, independent of the
/// order the buckets were configured in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentBuckets {
    buckets: Vec<DownPaymentBucket>,
}

impl DownPaymentBuckets {
    pub fn new(mut buckets: Vec<DownPaymentBucket>) -> Self {
        buckets.retain(|b| b.pct.is_finite());
        buckets.sort_by(|a, b| a.pct.total_cmp(&b.pct));
        Self { buckets }
    }

    /// Nearest bucket to `pct`, or `None` for an empty table or non-finite input
    pub fn nearest(&self, pct: f64) -> Option<&DownPaymentBucket> {
        if !pct.is_finite() {
            return None;
        }
        let mut best: Option<(&DownPaymentBucket, f64)> = None;
        for bucket in &self.buckets {
            let distance = (bucket.pct - pct).abs();
            // Strictly closer only: ascending order makes the smaller bucket win ties
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((bucket, distance)),
            }
        }
        best.map(|(bucket, _)| bucket)
    }

    pub fn points(&self, pct: Option<f64>) -> Option<u32> {
        self.nearest(pct?).map(|b| b.points)
    }

    pub fn buckets(&self) -> &[DownPaymentBucket] {
        &self.buckets
    }

    pub fn max_points(&self) -> u32 {
        self.buckets.iter().map(|b| b.points).max().unwrap_or(0)
    }
}

/// Default fixed contribution of the postal-code factor.
///
/// No postal-code input exists yet; every applicant gets this constant.
pub const DEFAULT_POSTAL_CODE_POINTS: u32 = 3;

/// Complete set of scoring tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub age: CategoryTable,
    pub income_bracket: CategoryTable,
    pub income_type: CategoryTable,
    pub term: TermTable,
    pub down_payment: DownPaymentBuckets,
    pub zone: CategoryTable,
    pub credit_type: CategoryTable,
    pub postal_code_points: u32,
}

impl ScoringWeights {
    /// Highest total any profile can score under these tables
    pub fn max_total(&self) -> u32 {
        [
            self.income_bracket.max_points(),
            self.income_type.max_points(),
            self.term.max_points(),
            self.down_payment.max_points(),
            self.zone.max_points(),
            self.credit_type.max_points(),
            self.postal_code_points,
        ]
        .into_iter()
        .fold(self.age.max_points(), u32::saturating_add)
    }

    /// Tables with no categories and no postal-code points
    pub fn empty() -> Self {
        Self {
            age: CategoryTable::default(),
            income_bracket: CategoryTable::default(),
            income_type: CategoryTable::default(),
            term: TermTable::default(),
            down_payment: DownPaymentBuckets::default(),
            zone: CategoryTable::default(),
            credit_type: CategoryTable::default(),
            postal_code_points: 0,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        // Younger and older applicants carry more risk than the 38-42 band
        let age = CategoryTable::from_pairs(&[
            ("18-22", 8),
            ("23-27", 6),
            ("28-32", 4),
            ("33-37", 2),
            ("38-42", 0),
            ("43-47", 1),
            ("48-52", 3),
            ("53-57", 5),
            ("58-62", 7),
            ("63-67", 9),
            ("68-70", 11),
            ("71-75", 13),
            ("75+", 15),
        ]);

        // Monthly income in thousands of pesos
        let income_bracket = CategoryTable::from_pairs(&[
            ("Menos de 10K", 14),
            ("10-15K", 12),
            ("15-20K", 10),
            ("20-25K", 8),
            ("25-30K", 6),
            ("30-35K", 4),
            ("35-40K", 3),
            ("40-45K", 2),
            ("45-50K", 2),
            ("50-60K", 1),
            ("60-70K", 1),
            ("70-80K", 0),
            ("80-100K", 0),
            ("100-150K", 0),
            ("Más de 150K", 0),
        ]);

        let income_type = CategoryTable::from_pairs(&[
            ("Comprobable 100%", 0),
            ("Comprobable 75%", 3),
            ("Comprobable 50%", 6),
            ("Comprobable 25%", 9),
            ("Informal", 12),
        ]);

        let term = TermTable::new(vec![
            TermOption { label: "Menos de 1 año".to_string(), points: 1, years: 0.5 },
            TermOption { label: "1 año".to_string(), points: 2, years: 1.0 },
            TermOption { label: "2 años".to_string(), points: 3, years: 2.0 },
            TermOption { label: "3 años".to_string(), points: 5, years: 3.0 },
            TermOption { label: "4 años".to_string(), points: 7, years: 4.0 },
            TermOption { label: "5 años".to_string(), points: 9, years: 5.0 },
        ]);

        let down_payment = DownPaymentBuckets::new(vec![
            DownPaymentBucket { pct: 10.0, points: 12 },
            DownPaymentBucket { pct: 15.0, points: 8 },
            DownPaymentBucket { pct: 20.0, points: 6 },
            DownPaymentBucket { pct: 25.0, points: 4 },
            DownPaymentBucket { pct: 30.0, points: 2 },
            DownPaymentBucket { pct: 40.0, points: 1 },
            DownPaymentBucket { pct: 50.0, points: 0 },
        ]);

        let zone = CategoryTable::from_pairs(&[
            ("Premium", 0),
            ("Intermedia", 2),
            ("Estándar", 4),
        ]);

        // Government programs, private mortgage, employer-sponsored
        let credit_type = CategoryTable::from_pairs(&[
            ("INFONAVIT", 2),
            ("FOVISSSTE", 2),
            ("Hipotecario", 4),
            ("Empresarial", 3),
        ]);

        Self {
            age,
            income_bracket,
            income_type,
            term,
            down_payment,
            zone,
            credit_type,
            postal_code_points: DEFAULT_POSTAL_CODE_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_sizes() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.age.len(), 13);
        assert_eq!(weights.income_bracket.len(), 15);
        assert_eq!(weights.income_type.len(), 5);
        assert_eq!(weights.term.len(), 6);
        assert_eq!(weights.down_payment.buckets().len(), 7);
        assert_eq!(weights.zone.len(), 3);
        assert_eq!(weights.postal_code_points, 3);
    }

    #[test]
    fn test_category_lookup() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.age.points(Some("28-32")), Some(4));
        assert_eq!(weights.age.points(Some(" 75+ ")), Some(15));
        assert_eq!(weights.age.points(Some("99-120")), None);
        assert_eq!(weights.age.points(None), None);
        assert_eq!(weights.credit_type.points(Some("Hipotecario")), Some(4));
    }

    #[test]
    fn test_term_years() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.term.years(Some("3 años")), 3.0);
        assert_eq!(weights.term.years(Some("Menos de 1 año")), 0.5);
        assert_eq!(weights.term.years(Some("10 años")), 0.0);
        assert_eq!(weights.term.points(Some("3 años")), Some(5));
    }

    #[test]
    fn test_down_payment_nearest_bucket() {
        let buckets = ScoringWeights::default().down_payment;

        assert_eq!(buckets.nearest(15.0).map(|b| b.pct), Some(15.0));
        assert_eq!(buckets.nearest(16.0).map(|b| b.pct), Some(15.0));
        assert_eq!(buckets.nearest(34.0).map(|b| b.pct), Some(30.0));
        assert_eq!(buckets.nearest(36.0).map(|b| b.pct), Some(40.0));
        assert_eq!(buckets.nearest(3.0).map(|b| b.pct), Some(10.0));
        assert_eq!(buckets.nearest(90.0).map(|b| b.pct), Some(50.0));
        assert_eq!(buckets.nearest(f64::NAN), None);
    }

    #[test]
    fn test_down_payment_tie_prefers_smaller_bucket() {
        let buckets = ScoringWeights::default().down_payment;
        // 35 is equidistant from 30 and 40
        assert_eq!(buckets.nearest(35.0).map(|b| b.pct), Some(30.0));
        assert_eq!(buckets.nearest(12.5).map(|b| b.pct), Some(10.0));
    }

    #[test]
    fn test_down_payment_tie_independent_of_configured_order() {
        let reversed = DownPaymentBuckets::new(vec![
            DownPaymentBucket { pct: 40.0, points: 1 },
            DownPaymentBucket { pct: 30.0, points: 2 },
        ]);
        assert_eq!(reversed.nearest(35.0).map(|b| b.pct), Some(30.0));
        assert_eq!(reversed.points(Some(35.0)), Some(2));
    }

    #[test]
    fn test_max_total() {
        assert_eq!(ScoringWeights::default().max_total(), 73);
        assert_eq!(ScoringWeights::empty().max_total(), 0);
    }
}
