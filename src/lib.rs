// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod error;
pub mod estimation;
pub mod io;
pub mod model;
pub mod relevance;
pub mod report;
pub mod tables;

// Re-export commonly used types
pub use crate::error::{EngineError, Result};

pub use crate::model::{
    AutomationArea, BusinessProfile, CompanySize, Industry, Level, PrimaryGoal, RoiEstimate,
    Timeframe,
};

pub use crate::estimation::RoiCalculator;

pub use crate::relevance::{
    default_catalog, RelevanceCriteria, RelevanceScorer, ScoredService, Service,
    ServiceRecommendations,
};

pub use crate::tables::{load_config_from_path, parse_and_validate_config, EngineConfig};

pub use crate::report::{format_currency, render_estimate, render_recommendations};
