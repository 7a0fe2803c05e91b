//! ROI estimation pipeline.
//!
//! Stages run leaf-first: automation potential, complexity and tier,
//! investment, value streams, ROI ratios, confidence, insights. Every stage
//! is a pure function over explicit parameters; [`RoiCalculator`] only owns
//! the injected tables and threads them through.

pub mod complexity;
pub mod composer;
pub mod confidence;
pub mod insights;
pub mod investment;
pub mod potential;
pub mod value;


pub use complexity::{area_count_band, assess_complexity, complexity_tier};
pub use composer::{break_even_date, compose_roi, roi_percentage};
pub use confidence::{estimate_confidence, ConfidenceAssessment};
pub use insights::{calculation_assumptions, generate_insights};
pub use investment::{estimate_investment, interpolation_factor};
pub use potential::{calculate_automation_potential, complexity_label};
pub use value::{aggregate_value, cost_savings, time_savings};

use crate::error::Result;
use crate::model::{BusinessProfile, Insights, RoiEstimate};
use crate::tables::EngineConfig;
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, debug_span};

/// Runs the ROI pipeline against one set of coefficient tables.
#[derive(Debug, Clone, Default)]
pub struct RoiCalculator {
    config: EngineConfig,
}

impl RoiCalculator {
    /// Build a calculator from validated tables.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produce a full estimate for one profile.
    ///
    /// `now` is the only time input; identical arguments give identical output.
    pub fn estimate(&self, profile: &BusinessProfile, now: NaiveDate) -> Result<RoiEstimate> {
        let _span = debug_span!(
            "roi_estimate",
            industry = %profile.industry,
            company_size = %profile.company_size,
            areas = profile.area_count()
        )
        .entered();

        profile.validate()?;
        let tables = &self.config.roi;

        let potential =
            calculate_automation_potential(&profile.automation_areas, profile.industry, tables)?;
        debug!(
            efficiency = potential.efficiency_percent,
            complexity = %potential.complexity,
            "automation potential"
        );

        let complexity = assess_complexity(profile, tables)?;
        let investment = estimate_investment(complexity, &self.config.pricing);
        debug!(
            score = complexity.score,
            tier = %complexity.tier,
            total = investment.total,
            "investment estimate"
        );

        let value = aggregate_value(profile, &potential, tables)?;
        debug!(total_annual_value = value.total_annual_value, "value breakdown");

        let roi = compose_roi(&value, &investment, now)?;
        let confidence = estimate_confidence(profile, &self.config.confidence);
        debug!(
            percentage = roi.percentage,
            payback_months = roi.payback_period_months,
            confidence = %confidence.level,
            "roi composed"
        );

        let mut estimate = RoiEstimate {
            timeframe: profile.timeframe,
            potential,
            time_savings: time_savings(profile, &potential, tables),
            cost_savings: cost_savings(profile, &potential, tables),
            investment,
            value,
            roi,
            confidence: confidence.level,
            confidence_score: confidence.score,
            assumptions: calculation_assumptions(),
            insights: Insights::default(),
        };
        estimate.insights = generate_insights(profile, &estimate);

        Ok(estimate)
    }

    /// Estimate many profiles in parallel, preserving input order.
    ///
    /// Each profile succeeds or fails on its own.
    pub fn estimate_many(
        &self,
        profiles: &[BusinessProfile],
        now: NaiveDate,
    ) -> Vec<Result<RoiEstimate>> {
        profiles
            .par_iter()
            .map(|profile| self.estimate(profile, now))
            .collect()
    }
}
