//! Evaluate a CSV of applicant profiles in parallel
//!
//! Writes one row per profile and prints a tier distribution summary

use anyhow::{Context, Result};
use clap::Parser;
use land_credit_risk::profile::load_profiles;
use land_credit_risk::{Assumptions, Evaluator, ProjectedEvaluation, RiskLevel};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Evaluate a CSV of applicant profiles", version)]
struct Args {
    /// CSV file of applicant profiles
    #[arg(long, default_value = "data/sample_profiles.csv")]
    input: PathBuf,

    /// Where to write the per-profile results
    #[arg(long, default_value = "batch_evaluation_output.csv")]
    output: PathBuf,

    /// Directory with scoring_weights.csv and risk_tiers.csv (defaults to built-in tables)
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

/// Flat output row for one profile
#[derive(Debug, Serialize)]
struct BatchRow {
    row: usize,
    score: u32,
    tier: String,
    interest_rate: f64,
    down_payment: f64,
    loan_amount: f64,
    number_of_payments: u32,
    payment: f64,
    total_interest: f64,
    total_paid: f64,
    cost_ratio: f64,
    advisories: usize,
    value_10y: f64,
    roi_10y_pct: f64,
}

impl BatchRow {
    fn from_result(row: usize, result: &ProjectedEvaluation) -> Self {
        let evaluation = &result.evaluation;
        let terms = &evaluation.terms;
        let ten = result.projection.horizon(10);
        Self {
            row,
            score: evaluation.score.total,
            tier: evaluation.tier.name.clone(),
            interest_rate: evaluation.interest_rate,
            down_payment: terms.down_payment,
            loan_amount: terms.loan_amount,
            number_of_payments: terms.number_of_payments,
            payment: terms.payment,
            total_interest: terms.total_interest,
            total_paid: terms.total_paid,
            cost_ratio: terms.cost_ratio,
            advisories: evaluation.advisories.len(),
            value_10y: ten.map(|h| h.projected_value).unwrap_or(0.0),
            roi_10y_pct: ten.map(|h| h.roi_pct).unwrap_or(0.0),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading profiles from {}...", args.input.display());

    let profiles = load_profiles(&args.input)
        .with_context(|| format!("failed to load profiles from {}", args.input.display()))?;
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_dir(dir)?,
        None => Assumptions::default_pricing(),
    };
    let evaluator = Evaluator::new(assumptions);

    println!("Running evaluations...");
    let eval_start = Instant::now();

    // Evaluator is read-only, so every worker shares it
    let results: Vec<ProjectedEvaluation> = profiles
        .par_iter()
        .map(|profile| evaluator.evaluate_with_projection(profile))
        .collect();

    println!("Evaluations complete in {:?}", eval_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for (idx, result) in results.iter().enumerate() {
        writer.serialize(BatchRow::from_result(idx + 1, result))?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    // Tier distribution
    let mut by_tier: BTreeMap<RiskLevel, (String, usize, f64)> = BTreeMap::new();
    let mut with_advisories = 0usize;
    for result in &results {
        let evaluation = &result.evaluation;
        let entry = by_tier
            .entry(evaluation.tier.level)
            .or_insert_with(|| (evaluation.tier.name.clone(), 0, 0.0));
        entry.1 += 1;
        entry.2 += evaluation.terms.loan_amount;
        if !evaluation.advisories.is_empty() {
            with_advisories += 1;
        }
    }

    println!("\nBatch Summary:");
    for (name, count, financed) in by_tier.values() {
        println!("  {:<16} {:>6} profiles, financed ${:.0}", name, count, financed);
    }
    println!("  Profiles with advisories: {}", with_advisories);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
