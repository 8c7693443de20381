//! Evaluate a single applicant profile and print the quote as JSON

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use land_credit_risk::{ApplicantProfile, Assumptions, Evaluator, Quote};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "evaluate",
    about = "Score, price and optionally project a land-purchase credit request",
    version
)]
struct Args {
    /// JSON file with the applicant profile
    profile: PathBuf,

    /// Directory with scoring_weights.csv and risk_tiers.csv (defaults to built-in tables)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Include the appreciation and ROI projection
    #[arg(long)]
    projection: bool,

    /// Also print the comparative-rate projection used by dashboards
    #[arg(long)]
    comparative: bool,

    /// Issue date for the quote (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    issued_on: Option<NaiveDate>,

    /// Print the payment schedule after the quote
    #[arg(long)]
    schedule: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.profile)
        .with_context(|| format!("failed to read {}", args.profile.display()))?;
    let profile: ApplicantProfile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid profile JSON in {}", args.profile.display()))?;

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_dir(dir)?,
        None => Assumptions::default_pricing(),
    };
    let evaluator = Evaluator::new(assumptions);
    let issued_on = args.issued_on.unwrap_or_else(|| Local::now().date_naive());

    let quote = if args.projection {
        Quote::issue_projected(evaluator.evaluate_with_projection(&profile), issued_on)
    } else {
        Quote::issue(evaluator.evaluate(&profile), issued_on)
    };

    println!("{}", serde_json::to_string_pretty(&quote)?);

    if args.comparative {
        let comparative = evaluator.comparative_projection(&quote.evaluation);
        println!("{}", serde_json::to_string_pretty(&comparative)?);
    }

    if args.schedule {
        println!("{:<6} {:>14} {:>14} {:>14} {:>16}", "Pago", "Cuota", "Interés", "Capital", "Saldo");
        for row in quote.evaluation.terms.schedule() {
            println!("{:<6} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
                     row.period, row.payment, row.interest, row.principal, row.balance);
        }
    }

    Ok(())
}
