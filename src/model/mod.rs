//! Input and output records shared across the engine.

pub mod enums;
pub mod estimate;
pub mod profile;

pub(crate) use enums::string_enum;
pub use enums::{AutomationArea, CompanySize, Industry, Level, PrimaryGoal, Timeframe};
pub use estimate::{
    AutomationPotential, ComplexityAssessment, CostSavings, Insights, InvestmentEstimate,
    Recommendation, RecommendationKind, RoiEstimate, RoiMetrics, TimeSavings, ValueBreakdown,
};
pub use profile::BusinessProfile;
