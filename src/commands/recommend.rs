use super::{load_engine_config, with_code};
use crate::cli::OutputFormat;
use crate::relevance::{RelevanceCriteria, RelevanceScorer};
use crate::report::render_recommendations;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

pub struct RecommendConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

pub fn run_recommend(config: RecommendConfig) -> Result<()> {
    let engine = load_engine_config(config.config.as_deref())?;
    let scorer = RelevanceScorer::from_config(&engine).map_err(with_code)?;

    let raw = crate::io::read_input(&config.input)?;
    let criteria: RelevanceCriteria =
        serde_json::from_str(&raw).context("Failed to parse relevance criteria JSON")?;

    let recommendations = scorer.recommend(&criteria).map_err(with_code)?;
    let output = match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(&recommendations)?,
        OutputFormat::Text => {
            render_recommendations(&recommendations, std::io::stdout().is_terminal())
        }
    };

    println!("{output}");
    Ok(())
}
