use anyhow::Result;
use clap::Parser;
use roi_engine::cli::{Cli, Commands};
use roi_engine::commands::{estimate, init, recommend};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            input,
            config,
            now,
            format,
            verbosity,
        } => {
            init_logging(verbosity);
            estimate::run_estimate(estimate::EstimateConfig {
                input,
                config,
                now,
                format,
            })
        }
        Commands::Recommend {
            input,
            config,
            format,
            verbosity,
        } => {
            init_logging(verbosity);
            recommend::run_recommend(recommend::RecommendConfig {
                input,
                config,
                format,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            init::init_config(force)
        }
    }
}

// RUST_LOG wins over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roi_engine={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
