// Wellness Core CLI Entry Point
// Reads one check-in as JSON (file argument or stdin) and prints its analysis.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::io::Read;
use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};
use validator::Validate;

use wellness_core::{AnalysisConfig, AnalysisResult, CheckInRecord, CheckInRequest, WellnessAnalyzer};

#[derive(Serialize)]
struct CheckInResponse {
    analysis: AnalysisResult,
    record: CheckInRecord,
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        Registry::default()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").to_string(), std::io::stderr))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn read_payload() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read check-in from {}", path))
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read check-in from stdin")?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = AnalysisConfig::from_env().context("Invalid analysis configuration")?;
    let analyzer = WellnessAnalyzer::from_config(&config)?;

    let payload = read_payload()?;
    let request = match CheckInRequest::from_json(&payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Rejected check-in: {}", e);
            return Err(e.into());
        }
    };

    let analysis = analyzer.analyze_check_in(&request).await;
    let record = CheckInRecord::new(&request, &analysis, Utc::now());
    record.validate().context("Analysis produced an invalid check-in record")?;

    let response = CheckInResponse { analysis, record };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
