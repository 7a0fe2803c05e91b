//! Output records of the ROI pipeline.
//!
//! Everything here is plain data. Monetary amounts are kept unrounded so
//! downstream consumers can recompute the headline ratios exactly; rounding
//! happens only when a report is rendered.

use super::enums::{Level, Timeframe};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationPotential {
    /// Share of manual work that can be automated, 0 to the configured cap
    pub efficiency_percent: f64,
    /// Label from the number of selected areas
    pub complexity: Level,
}

/// Fine score and coarse tier, kept side by side because the investment
/// estimator needs both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAssessment {
    /// 1 to 10
    pub score: u8,
    pub tier: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentEstimate {
    pub setup: f64,
    pub monthly: f64,
    /// First-year total: setup plus twelve monthly fees
    pub total: f64,
    pub range_label: String,
    pub tier: Level,
    pub complexity_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueBreakdown {
    pub direct_savings: f64,
    pub opportunity_value: f64,
    pub productivity_gains: f64,
    pub error_reduction: f64,
    /// Share of current errors removed, 0 to 90
    pub error_reduction_percent: f64,
    pub total_annual_value: f64,
}

impl ValueBreakdown {
    /// Sum of the four value streams.
    pub fn stream_sum(&self) -> f64 {
        self.direct_savings + self.opportunity_value + self.productivity_gains + self.error_reduction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSavings {
    pub hours_per_week: f64,
    pub hours_per_month: f64,
    pub hours_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSavings {
    pub weekly: f64,
    pub monthly: f64,
    pub annual: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMetrics {
    pub percentage: f64,
    /// Half a year of benefit against the full first-year investment
    #[serde(rename = "sixMonthROI")]
    pub six_month_roi: f64,
    pub payback_period_months: f64,
    pub break_even_date: NaiveDate,
    pub three_year_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    Priority,
    Efficiency,
    Quality,
    Scalability,
    Goal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
}

/// Human-readable material derived from an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub recommendations: Vec<Recommendation>,
    pub talking_points: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Root output of the ROI pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub timeframe: Timeframe,
    pub potential: AutomationPotential,
    pub time_savings: TimeSavings,
    pub cost_savings: CostSavings,
    pub investment: InvestmentEstimate,
    pub value: ValueBreakdown,
    pub roi: RoiMetrics,
    pub confidence: Level,
    pub confidence_score: u8,
    pub assumptions: Vec<String>,
    pub insights: Insights,
}
