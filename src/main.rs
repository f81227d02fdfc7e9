use std::env::VarError;

use anyhow::Context;
use els::{ElsConfig, ElsPipeline, PipelineInput};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Parse `raw [sorrow_pH drive_mV]`.
fn parse_line(line: &str) -> anyhow::Result<PipelineInput> {
    let mut parts = line.split_whitespace();
    let mut input = PipelineInput::default();

    input.raw = parts
        .next()
        .context("missing raw value")?
        .parse::<f64>()
        .context("raw value is not a number")?;
    if let Some(sorrow) = parts.next() {
        input.sorrow_ph = sorrow.parse::<f64>().context("sorrow_pH is not a number")?;
    }
    if let Some(drive) = parts.next() {
        input.drive_mv = drive.parse::<f64>().context("drive_mV is not a number")?;
    }
    Ok(input)
}

fn load_config() -> anyhow::Result<ElsConfig> {
    config_from_var(std::env::var("ELS_CONFIG"))
}

/// Unset means defaults; a path that is not valid Unicode is an error.
fn config_from_var(var: Result<String, VarError>) -> anyhow::Result<ElsConfig> {
    match var {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            Ok(ElsConfig::from_json_str(&json)?)
        }
        Err(VarError::NotPresent) => Ok(ElsConfig::default()),
        Err(VarError::NotUnicode(raw)) => {
            anyhow::bail!("ELS_CONFIG is not valid unicode: {:?}", raw)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Setup Pipeline
    let config = load_config()?;
    let mut pipeline = ElsPipeline::new(config)?;
    tracing::info!(session = %pipeline.session_id(), "ELS session started");

    // 3. One sample per stdin line
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("Skipping line: {:#}", e);
                continue;
            }
        };

        match pipeline.run(input) {
            Ok(output) => println!("{}", serde_json::to_string(&output)?),
            Err(e) => tracing::warn!("Sample rejected: {}", e),
        }
    }

    let snap = pipeline.telemetry().snapshot();
    tracing::info!(
        blocked = snap.verdict_stats.blocked,
        warning = snap.verdict_stats.warning,
        ok = snap.verdict_stats.ok,
        warmth = pipeline.warmth(),
        "ELS session finished"
    );
    Ok(())
}
