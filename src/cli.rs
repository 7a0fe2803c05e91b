use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roi-engine")]
#[command(about = "Automation ROI estimates and service recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate automation ROI for a business profile
    Estimate {
        /// Profile JSON file, or '-' for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file with coefficient tables
        #[arg(short, long, env = "ROI_ENGINE_CONFIG")]
        config: Option<PathBuf>,

        /// Reference date for the break-even date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        now: Option<chrono::NaiveDate>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Increase log verbosity
        ///
        /// -v: stage results
        /// -vv: individual table lookups
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score the service catalog against prospect criteria
    Recommend {
        /// Criteria JSON file, or '-' for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file with coefficient tables and catalog
        #[arg(short, long, env = "ROI_ENGINE_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Increase log verbosity
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a configuration file with the default tables
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
