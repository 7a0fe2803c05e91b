use super::{load_engine_config, with_code};
use crate::cli::OutputFormat;
use crate::estimation::RoiCalculator;
use crate::model::{BusinessProfile, RoiEstimate};
use crate::report::render_estimate;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

pub struct EstimateConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub now: Option<NaiveDate>,
    pub format: OutputFormat,
}

/// A single profile or a batch of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfileInput {
    One(Box<BusinessProfile>),
    Many(Vec<BusinessProfile>),
}

/// One batch entry; failures stay in place so output order matches input.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Estimate(Box<RoiEstimate>),
    Failed { error: BatchError },
}

#[derive(Debug, Serialize)]
struct BatchError {
    code: &'static str,
    message: String,
}

pub fn run_estimate(config: EstimateConfig) -> Result<()> {
    let engine = load_engine_config(config.config.as_deref())?;
    let calculator = RoiCalculator::new(engine).map_err(with_code)?;

    let raw = crate::io::read_input(&config.input)?;
    let input: ProfileInput =
        serde_json::from_str(&raw).context("Failed to parse business profile JSON")?;
    let now = config
        .now
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let output = match input {
        ProfileInput::One(profile) => {
            let estimate = calculator.estimate(&profile, now).map_err(with_code)?;
            format_one(&estimate, config.format)?
        }
        ProfileInput::Many(profiles) => {
            tracing::info!(profiles = profiles.len(), "estimating batch");
            let entries: Vec<BatchEntry> = calculator
                .estimate_many(&profiles, now)
                .into_iter()
                .map(|result| match result {
                    Ok(estimate) => BatchEntry::Estimate(Box::new(estimate)),
                    Err(err) => BatchEntry::Failed {
                        error: BatchError {
                            code: err.code(),
                            message: err.to_string(),
                        },
                    },
                })
                .collect();
            format_batch(&entries, config.format)?
        }
    };

    println!("{output}");
    Ok(())
}

fn format_one(estimate: &RoiEstimate, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(estimate)?,
        OutputFormat::Text => render_estimate(estimate, std::io::stdout().is_terminal()),
    })
}

fn format_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => {
            let color = std::io::stdout().is_terminal();
            let sections: Vec<String> = entries
                .iter()
                .enumerate()
                .map(|(i, entry)| match entry {
                    BatchEntry::Estimate(estimate) => render_estimate(estimate, color),
                    BatchEntry::Failed { error } => {
                        format!("Profile {}: {}: {}\n", i + 1, error.code, error.message)
                    }
                })
                .collect();
            Ok(sections.join("\n"))
        }
    }
}
