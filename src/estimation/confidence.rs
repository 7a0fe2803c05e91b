//! How "typical" a profile is, as a rough confidence rating.
//!
//! A purely additive heuristic with no interaction terms. It says how close
//! the inputs are to the engagements the coefficients were drawn from, not
//! anything statistical.

use crate::model::{BusinessProfile, Level};
use crate::tables::ConfidenceRules;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub score: u8,
    pub level: Level,
}

pub fn estimate_confidence(profile: &BusinessProfile, rules: &ConfidenceRules) -> ConfidenceAssessment {
    let mut score = rules.base_score;

    if rules.well_understood_industries.contains(&profile.industry) {
        score = score.saturating_add(rules.industry_bonus);
    }

    let (min_areas, max_areas) = rules.typical_area_count;
    if (min_areas..=max_areas).contains(&profile.area_count()) {
        score = score.saturating_add(rules.area_bonus);
    }

    let (min_hours, max_hours) = rules.typical_manual_hours;
    if (min_hours..=max_hours).contains(&profile.manual_task_hours) {
        score = score.saturating_add(rules.hours_bonus);
    }

    let score = score.min(100);
    ConfidenceAssessment {
        score,
        level: confidence_level(score, rules),
    }
}

pub fn confidence_level(score: u8, rules: &ConfidenceRules) -> Level {
    if score >= rules.high_threshold {
        Level::High
    } else if score >= rules.medium_threshold {
        Level::Medium
    } else {
        Level::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AutomationArea, CompanySize, Industry, PrimaryGoal, Timeframe};

    fn profile(industry: Industry, areas: usize, hours: f64) -> BusinessProfile {
        BusinessProfile {
            company_size: CompanySize::Small,
            industry,
            employee_count: 20,
            average_hourly_rate: 50.0,
            manual_task_hours: hours,
            error_rate_percent: 5.0,
            automation_areas: AutomationArea::ALL[..areas].to_vec(),
            primary_goal: PrimaryGoal::Efficiency,
            timeframe: Timeframe::default(),
        }
    }

    #[test]
    fn test_all_bonuses_give_full_score() {
        let c = estimate_confidence(&profile(Industry::Technology, 3, 20.0), &ConfidenceRules::default());
        assert_eq!(c.score, 100);
        assert_eq!(c.level, Level::High);
    }

    #[test]
    fn test_no_bonuses_is_low() {
        let c = estimate_confidence(&profile(Industry::Healthcare, 1, 100.0), &ConfidenceRules::default());
        assert_eq!(c.score, 50);
        assert_eq!(c.level, Level::Low);
    }

    #[test]
    fn test_area_bonus_alone_is_medium() {
        let c = estimate_confidence(&profile(Industry::Finance, 2, 60.0), &ConfidenceRules::default());
        assert_eq!(c.score, 70);
        assert_eq!(c.level, Level::Medium);
    }

    #[test]
    fn test_range_edges_are_inclusive() {
        let rules = ConfidenceRules::default();
        assert_eq!(estimate_confidence(&profile(Industry::Other, 4, 5.0), &rules).score, 85);
        assert_eq!(estimate_confidence(&profile(Industry::Other, 5, 40.0), &rules).score, 65);
        assert_eq!(estimate_confidence(&profile(Industry::Other, 1, 4.9), &rules).score, 50);
    }

    #[test]
    fn test_thresholds() {
        let rules = ConfidenceRules::default();
        assert_eq!(confidence_level(80, &rules), Level::High);
        assert_eq!(confidence_level(79, &rules), Level::Medium);
        assert_eq!(confidence_level(60, &rules), Level::Medium);
        assert_eq!(confidence_level(59, &rules), Level::Low);
    }
}
