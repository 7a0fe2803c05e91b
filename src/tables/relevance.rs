//! Coefficients for the service relevance scorer.

use super::{check_complete, check_non_negative, invalid_config};
use crate::error::Result;
use crate::model::{CompanySize, Industry};
use crate::relevance::{Budget, Challenge, ServiceCategory, ServiceGoal, Timeline};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type CategoryTable = BTreeMap<ServiceCategory, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceTables {
    pub base_score: f64,
    /// Fit of each category for each company size, 0-100
    pub size_scores: BTreeMap<ServiceCategory, BTreeMap<CompanySize, f64>>,
    /// Additive bonus, 0-25
    pub industry_bonus: BTreeMap<Industry, CategoryTable>,
    pub challenge_categories: BTreeMap<Challenge, Vec<ServiceCategory>>,
    pub goal_categories: BTreeMap<ServiceGoal, Vec<ServiceCategory>>,
    pub alignment_points: f64,
    pub alignment_cap: f64,
    /// Multiplicative, 0.5-1.3
    pub budget_factors: BTreeMap<Budget, CategoryTable>,
    /// Multiplicative, 0.5-1.3
    pub timeline_factors: BTreeMap<Timeline, CategoryTable>,
    pub thresholds: BucketThresholds,
    pub costs: CostModel,
}

/// Lower bounds of the three recommendation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketThresholds {
    pub highly_recommended: u8,
    pub recommended: u8,
    pub consider_later: u8,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            highly_recommended: 80,
            recommended: 60,
            consider_later: 40,
        }
    }
}

/// Budget and duration assumptions for roadmap synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// One-off cost per category, or monthly cost for recurring categories
    pub base_cost: CategoryTable,
    pub recurring: Vec<ServiceCategory>,
    pub setup_spread: (f64, f64),
    pub monthly_spread: (f64, f64),
    pub duration_weeks: CategoryTable,
    /// Applied to summed durations when more than one service runs in parallel
    pub parallel_factor: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        use ServiceCategory::*;

        Self {
            base_cost: BTreeMap::from([
                (Consulting, 5_000.0),
                (AiWorkforce, 15_000.0),
                (Automation, 20_000.0),
                (ManagedOps, 5_000.0),
            ]),
            recurring: vec![ManagedOps],
            setup_spread: (0.8, 1.5),
            monthly_spread: (0.8, 1.3),
            duration_weeks: BTreeMap::from([
                (Consulting, 4.0),
                (AiWorkforce, 8.0),
                (Automation, 12.0),
                (ManagedOps, 2.0),
            ]),
            parallel_factor: 0.7,
        }
    }
}

impl CostModel {
    pub fn validate(&self) -> Result<()> {
        check_non_negative("costs.base_cost", self.base_cost.values().copied())?;
        check_non_negative("costs.duration_weeks", self.duration_weeks.values().copied())?;
        check_non_negative("costs.parallel_factor", [self.parallel_factor])?;
        for (name, (low, high)) in [
            ("costs.setup_spread", self.setup_spread),
            ("costs.monthly_spread", self.monthly_spread),
        ] {
            check_non_negative(name, [low, high])?;
            if low > high {
                return Err(invalid_config(name, format!("low {low} exceeds high {high}")));
            }
        }
        Ok(())
    }
}

/// Builds a category table in `ServiceCategory::ALL` order:
/// ai-workforce, automation, consulting, managed-ops.
fn by_category(values: [f64; 4]) -> CategoryTable {
    ServiceCategory::ALL.iter().copied().zip(values).collect()
}

impl Default for RelevanceTables {
    fn default() -> Self {
        use ServiceCategory::*;

        let size_row = |values: [f64; 5]| -> BTreeMap<CompanySize, f64> {
            CompanySize::ALL.iter().copied().zip(values).collect()
        };

        Self {
            base_score: 50.0,
            size_scores: BTreeMap::from([
                (AiWorkforce, size_row([70.0, 85.0, 90.0, 95.0, 90.0])),
                (Automation, size_row([60.0, 80.0, 95.0, 100.0, 100.0])),
                (Consulting, size_row([90.0, 85.0, 80.0, 75.0, 70.0])),
                (ManagedOps, size_row([40.0, 60.0, 80.0, 95.0, 100.0])),
            ]),
            industry_bonus: BTreeMap::from([
                (Industry::ProfessionalServices, by_category([15.0, 10.0, 20.0, 5.0])),
                (Industry::Healthcare, by_category([10.0, 15.0, 15.0, 10.0])),
                (Industry::Ecommerce, by_category([20.0, 20.0, 10.0, 15.0])),
                (Industry::Manufacturing, by_category([5.0, 25.0, 15.0, 20.0])),
                (Industry::Finance, by_category([15.0, 20.0, 20.0, 15.0])),
                // no industry bonus
                (Industry::Technology, by_category([0.0; 4])),
                (Industry::Education, by_category([0.0; 4])),
                (Industry::Other, by_category([0.0; 4])),
            ]),
            challenge_categories: BTreeMap::from([
                (Challenge::ManualTasks, vec![AiWorkforce, Automation]),
                (Challenge::DataEntry, vec![Automation, AiWorkforce]),
                (Challenge::CustomerService, vec![AiWorkforce]),
                (Challenge::ScalingIssues, vec![Automation, ManagedOps]),
                (Challenge::QualityControl, vec![Automation]),
                (Challenge::Reporting, vec![Automation, AiWorkforce]),
                (Challenge::Integration, vec![Automation]),
                (Challenge::Strategy, vec![Consulting]),
            ]),
            goal_categories: BTreeMap::from([
                (ServiceGoal::CostReduction, vec![Automation, AiWorkforce]),
                (ServiceGoal::Efficiency, vec![Automation, AiWorkforce, ManagedOps]),
                (ServiceGoal::Scalability, vec![Automation, ManagedOps]),
                (ServiceGoal::Quality, vec![Automation]),
                (ServiceGoal::Strategy, vec![Consulting]),
                (ServiceGoal::Compliance, vec![ManagedOps, Automation]),
            ]),
            alignment_points: 10.0,
            alignment_cap: 30.0,
            budget_factors: BTreeMap::from([
                (Budget::Under5k, by_category([0.7, 0.8, 1.2, 0.5])),
                (Budget::From5kTo25k, by_category([1.1, 1.2, 1.0, 0.8])),
                (Budget::From25kTo100k, by_category([1.2, 1.3, 0.9, 1.1])),
                (Budget::Over100k, by_category([1.1, 1.2, 1.0, 1.3])),
            ]),
            timeline_factors: BTreeMap::from([
                (Timeline::Immediate, by_category([0.8, 0.7, 1.3, 0.5])),
                (Timeline::OneToThreeMonths, by_category([1.2, 1.1, 1.1, 0.8])),
                (Timeline::ThreeToSixMonths, by_category([1.1, 1.3, 1.0, 1.1])),
                (Timeline::SixToTwelveMonths, by_category([1.0, 1.2, 0.9, 1.3])),
            ]),
            thresholds: BucketThresholds::default(),
            costs: CostModel::default(),
        }
    }
}

impl RelevanceTables {
    pub fn validate(&self) -> Result<()> {
        check_complete("size_scores", &self.size_scores, ServiceCategory::ALL)?;
        for (category, row) in &self.size_scores {
            check_complete("size_scores", row, CompanySize::ALL)
                .map_err(|_| invalid_config("size_scores", format!("{category} row is incomplete")))?;
        }
        check_complete("industry_bonus", &self.industry_bonus, Industry::ALL)?;
        check_complete("challenge_categories", &self.challenge_categories, Challenge::ALL)?;
        check_complete("goal_categories", &self.goal_categories, ServiceGoal::ALL)?;
        check_complete("budget_factors", &self.budget_factors, Budget::ALL)?;
        check_complete("timeline_factors", &self.timeline_factors, Timeline::ALL)?;
        check_complete("costs.base_cost", &self.costs.base_cost, ServiceCategory::ALL)?;
        check_complete(
            "costs.duration_weeks",
            &self.costs.duration_weeks,
            ServiceCategory::ALL,
        )?;

        let nested = self
            .industry_bonus
            .values()
            .chain(self.budget_factors.values())
            .chain(self.timeline_factors.values());
        for row in nested {
            check_complete("category row", row, ServiceCategory::ALL)?;
            check_non_negative("relevance", row.values().copied())?;
        }

        check_non_negative(
            "size_scores",
            self.size_scores.values().flat_map(|row| row.values().copied()),
        )?;
        check_non_negative(
            "relevance",
            [self.base_score, self.alignment_points, self.alignment_cap],
        )?;
        self.costs.validate()?;

        let t = self.thresholds;
        if !(t.consider_later <= t.recommended && t.recommended <= t.highly_recommended) {
            return Err(invalid_config(
                "relevance.thresholds",
                "thresholds must be ordered consider_later <= recommended <= highly_recommended",
            ));
        }
        Ok(())
    }
}
