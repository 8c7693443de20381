//! AWS Lambda handler for quote requests
//!
//! Body: `{"profile": {...}, "include_projection": true}`

use chrono::Utc;
use lambda_http::{run, service_fn, Body, Request, Response};
use land_credit_risk::{ApplicantProfile, Evaluator, Quote};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct QuoteRequest {
    profile: ApplicantProfile,
    #[serde(default)]
    include_projection: bool,
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, lambda_runtime::Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

fn handle(evaluator: &Evaluator, event: Request) -> Result<Response<Body>, lambda_runtime::Error> {
    let request: QuoteRequest = match serde_json::from_slice(event.body()) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("rejected quote request: {}", err);
            let body = json!({ "error": format!("invalid request body: {}", err) });
            return json_response(400, body.to_string());
        }
    };

    let issued_on = Utc::now().date_naive();
    let quote = if request.include_projection {
        Quote::issue_projected(evaluator.evaluate_with_projection(&request.profile), issued_on)
    } else {
        Quote::issue(evaluator.evaluate(&request.profile), issued_on)
    };

    log::info!(
        "quoted score {} ({}) with {} advisories",
        quote.evaluation.score.total,
        quote.evaluation.tier.name,
        quote.messages.len()
    );
    json_response(200, serde_json::to_string(&quote)?)
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    env_logger::init();

    let evaluator = Evaluator::default();
    let evaluator = &evaluator;

    run(service_fn(move |event: Request| async move { handle(evaluator, event) })).await
}
